use serde::{Deserialize, Serialize};

/// A cell coordinate packed into a single `i32`: x in the high 16 bits, y in
/// the low 16 bits. Both halves are signed, so each axis covers
/// `i16::MIN..=i16::MAX`; values outside that range are truncated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn pack(&self) -> i32 {
        pack(self.x, self.y)
    }

    pub fn unpack(packed: i32) -> Self {
        Position::new(unpack_x(packed), unpack_y(packed))
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Position::new(self.x + dx, self.y + dy)
    }

    pub fn to_tuple(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

pub fn pack(x: i32, y: i32) -> i32 {
    ((x as i16 as i32) << 16) | (y as i16 as u16 as i32)
}

pub fn unpack_x(packed: i32) -> i32 {
    (packed >> 16) as i16 as i32
}

pub fn unpack_y(packed: i32) -> i32 {
    packed as i16 as i32
}

/// Translates a packed position by `(dx, dy)` and packs it again.
pub fn translate(packed: i32, dx: i32, dy: i32) -> i32 {
    pack(unpack_x(packed) + dx, unpack_y(packed) + dy)
}
