use std::collections::BTreeMap;
use std::sync::Arc;
use crate::block::Block;
use crate::bounding_box::BoundingBox;

/// One placed block inside a schematic, in schematic-local coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stile {
    pub block: Arc<Block>,
    pub x: i32,
    pub y: i32,
    /// Opaque block-specific value. For blocks with `pos_config` set this is
    /// a packed position relative to the schematic origin.
    pub config: i32,
    pub rotation: u8,
}

impl Stile {
    pub fn new(block: Arc<Block>, x: i32, y: i32, config: i32, rotation: u8) -> Self {
        Stile {
            block,
            x,
            y,
            config,
            rotation,
        }
    }
}

/// A relocatable blueprint: a bounding box plus an ordered list of tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schematic {
    pub tiles: Vec<Stile>,
    pub width: i32,
    pub height: i32,
}

impl Schematic {
    pub fn new(tiles: Vec<Stile>, width: i32, height: i32) -> Self {
        Schematic {
            tiles,
            width,
            height,
        }
    }

    pub fn get_dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn get_bounding_box(&self) -> BoundingBox {
        BoundingBox::new((0, 0), (self.width - 1, self.height - 1))
    }

    pub fn contains_local(&self, x: i32, y: i32) -> bool {
        self.get_bounding_box().contains((x, y))
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles per block name.
    pub fn block_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for tile in &self.tiles {
            *counts.entry(tile.block.name.clone()).or_insert(0) += 1;
        }
        counts
    }
}
