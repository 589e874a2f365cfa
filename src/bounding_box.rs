use serde::{Deserialize, Serialize};

/// Inclusive rectangle of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: (i32, i32),
    pub max: (i32, i32),
}

impl BoundingBox {
    pub fn new(min: (i32, i32), max: (i32, i32)) -> Self {
        BoundingBox { min, max }
    }

    /// Builds a box from two opposite corners given in any order.
    pub fn from_corners(x: i32, y: i32, x2: i32, y2: i32) -> Self {
        BoundingBox {
            min: (x.min(x2), y.min(y2)),
            max: (x.max(x2), y.max(y2)),
        }
    }

    pub fn contains(&self, point: (i32, i32)) -> bool {
        point.0 >= self.min.0 && point.0 <= self.max.0 &&
            point.1 >= self.min.1 && point.1 <= self.max.1
    }

    pub fn get_dimensions(&self) -> (i32, i32) {
        (
            self.max.0 - self.min.0 + 1,
            self.max.1 - self.min.1 + 1,
        )
    }

    pub fn area(&self) -> u64 {
        let (width, height) = self.get_dimensions();
        width as u64 * height as u64
    }

    /// Cells in column-major order: every y of the first column, then the next x.
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (min, max) = (self.min, self.max);
        (min.0..=max.0).flat_map(move |x| (min.1..=max.1).map(move |y| (x, y)))
    }
}
