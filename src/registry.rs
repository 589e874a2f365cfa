use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use crate::block::Block;
use crate::error::Result;

pub const AIR: &str = "air";

/// Name-indexed table of every block the running content knows about.
///
/// Decoding resolves dictionary names through this table and substitutes the
/// [`air`](BlockRegistry::air) placeholder for names it does not contain.
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    air: Arc<Block>,
    blocks: HashMap<String, Arc<Block>>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        let air = Arc::new(Block::new(AIR.to_string()));
        let mut blocks = HashMap::new();
        blocks.insert(AIR.to_string(), air.clone());
        BlockRegistry { air, blocks }
    }

    /// Builds a registry from a JSON array of block descriptors.
    pub fn from_json(json: &str) -> Result<Self> {
        let defs: Vec<Block> = serde_json::from_str(json)?;
        let mut registry = BlockRegistry::new();
        for block in defs {
            registry.register(block);
        }
        debug!("Loaded {} block definitions", registry.len());
        Ok(registry)
    }

    /// Registers `block`, replacing any previous entry with the same name.
    pub fn register(&mut self, block: Block) -> Arc<Block> {
        let block = Arc::new(block);
        self.blocks.insert(block.name.clone(), block.clone());
        block
    }

    pub fn get(&self, name: &str) -> Option<Arc<Block>> {
        self.blocks.get(name).cloned()
    }

    pub fn air(&self) -> Arc<Block> {
        self.air.clone()
    }

    pub fn is_air(&self, block: &Block) -> bool {
        block.name == self.air.name
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        BlockRegistry::new()
    }
}
