use std::collections::HashMap;
use std::sync::Arc;
use crate::block::Block;

/// A block instance standing in the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    pub block: Arc<Block>,
    pub config: i32,
    pub rotation: u8,
    /// Whether `config` holds a packed world position.
    pub pos_config: bool,
}

impl Building {
    /// Creates a building whose `pos_config` flag follows its block descriptor.
    pub fn new(block: Arc<Block>, config: i32, rotation: u8) -> Self {
        let pos_config = block.pos_config;
        Building {
            block,
            config,
            rotation,
            pos_config,
        }
    }
}

/// Read-only view of the world grid that schematics are carved from.
pub trait TileGrid {
    fn building_at(&self, x: i32, y: i32) -> Option<Building>;
}

impl TileGrid for HashMap<(i32, i32), Building> {
    fn building_at(&self, x: i32, y: i32) -> Option<Building> {
        self.get(&(x, y)).cloned()
    }
}
