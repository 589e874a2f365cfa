use std::sync::Arc;
use crate::block::Block;

/// A request to place one block at world coordinates, handed to whatever
/// performs construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRequest {
    pub x: i32,
    pub y: i32,
    pub rotation: u8,
    pub block: Arc<Block>,
    pub config: i32,
}
