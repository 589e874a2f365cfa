use serde::{Deserialize, Serialize};

/// Descriptor of a placeable structure type. Schematics refer to blocks by
/// name only; everything else is looked up in a [`BlockRegistry`](crate::BlockRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    /// Footprint edge length in cells.
    #[serde(default = "default_size")]
    pub size: u8,
    /// Whether the block's rotation is meaningful.
    #[serde(default)]
    pub rotate: bool,
    /// Whether the block's config value is a packed position.
    #[serde(default)]
    pub pos_config: bool,
}

fn default_size() -> u8 {
    1
}

impl Block {
    pub fn new(name: String) -> Self {
        Block {
            name,
            size: 1,
            rotate: false,
            pos_config: false,
        }
    }

    pub fn with_size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }

    pub fn with_rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn with_pos_config(mut self, pos_config: bool) -> Self {
        self.pos_config = pos_config;
        self
    }
}
