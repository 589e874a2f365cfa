use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;
use crate::block::Block;
use crate::error::{Result, SchematicError};
use crate::registry::BlockRegistry;
use crate::schematic::Stile;

/// Largest number of distinct blocks a single schematic can reference; the
/// dictionary size and every tile's block index are stored in one byte.
pub const MAX_BLOCKS: usize = u8::MAX as usize;

/// Per-schematic block dictionary. Indices are dense and assigned in the
/// order blocks are first seen, so encoding and decoding agree on them.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDictionary {
    blocks: Vec<Arc<Block>>,
    block_to_index: HashMap<String, u8>,
}

impl BlockDictionary {
    /// Collects the distinct blocks of `tiles` in first-seen order.
    ///
    /// Fails with [`SchematicError::TooManyBlocks`] when more than
    /// [`MAX_BLOCKS`] distinct names are referenced.
    pub fn build<'a, I>(tiles: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Stile>,
    {
        let mut blocks: Vec<Arc<Block>> = Vec::new();
        let mut block_to_index = HashMap::new();
        let mut overflow = 0;

        for tile in tiles {
            if block_to_index.contains_key(&tile.block.name) {
                continue;
            }
            if blocks.len() == MAX_BLOCKS {
                overflow += 1;
                // keep counting so the error reports the real total
                block_to_index.insert(tile.block.name.clone(), u8::MAX);
                continue;
            }
            block_to_index.insert(tile.block.name.clone(), blocks.len() as u8);
            blocks.push(tile.block.clone());
        }

        if overflow > 0 {
            return Err(SchematicError::TooManyBlocks {
                count: blocks.len() + overflow,
            });
        }

        Ok(BlockDictionary {
            blocks,
            block_to_index,
        })
    }

    /// Resolves dictionary names read from a stream. Unknown names become the
    /// registry's air placeholder so the tiles using them can be dropped.
    pub fn from_names(names: &[String], registry: &BlockRegistry) -> Self {
        let mut blocks = Vec::with_capacity(names.len());
        let mut block_to_index = HashMap::new();
        for (index, name) in names.iter().enumerate() {
            let block = resolve(name, registry);
            block_to_index.entry(block.name.clone()).or_insert(index as u8);
            blocks.push(block);
        }
        BlockDictionary {
            blocks,
            block_to_index,
        }
    }

    pub fn index_of(&self, block: &Block) -> Option<u8> {
        self.block_to_index.get(&block.name).copied()
    }

    pub fn get(&self, index: u8) -> Option<&Arc<Block>> {
        self.blocks.get(index as usize)
    }

    pub fn blocks(&self) -> &[Arc<Block>] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Looks `name` up in `registry`, falling back to air for unknown content.
pub fn resolve(name: &str, registry: &BlockRegistry) -> Arc<Block> {
    match registry.get(name) {
        Some(block) => block,
        None => {
            warn!("Unknown block '{}' in schematic, tiles using it will be skipped", name);
            registry.air()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(name: &str) -> Stile {
        Stile::new(Arc::new(Block::new(name.to_string())), 0, 0, 0, 0)
    }

    #[test]
    fn test_dictionary_first_seen_order() {
        let tiles = vec![tile("router"), tile("conveyor"), tile("router"), tile("sorter"), tile("conveyor")];
        let dictionary = BlockDictionary::build(&tiles).unwrap();

        let names: Vec<_> = dictionary.blocks().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["router", "conveyor", "sorter"]);
        assert_eq!(dictionary.index_of(&Block::new("router".to_string())), Some(0));
        assert_eq!(dictionary.index_of(&Block::new("sorter".to_string())), Some(2));
        assert_eq!(dictionary.index_of(&Block::new("junction".to_string())), None);
        assert_eq!(dictionary.get(1).map(|b| b.name.as_str()), Some("conveyor"));
        assert_eq!(dictionary.get(3), None);
    }

    #[test]
    fn test_dictionary_capacity() {
        let tiles: Vec<_> = (0..MAX_BLOCKS).map(|i| tile(&format!("block-{i}"))).collect();
        let dictionary = BlockDictionary::build(&tiles).unwrap();
        assert_eq!(dictionary.len(), 255);
        assert_eq!(dictionary.index_of(&Block::new("block-254".to_string())), Some(254));

        let tiles: Vec<_> = (0..MAX_BLOCKS + 2).map(|i| tile(&format!("block-{i}"))).collect();
        match BlockDictionary::build(&tiles) {
            Err(SchematicError::TooManyBlocks { count }) => assert_eq!(count, 257),
            other => panic!("expected TooManyBlocks, got {:?}", other),
        }
    }

    #[test]
    fn test_from_names_substitutes_air() {
        let mut registry = BlockRegistry::new();
        registry.register(Block::new("conveyor".to_string()));

        let dictionary = BlockDictionary::from_names(
            &["conveyor".to_string(), "plastanium-conveyor".to_string()],
            &registry,
        );
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get(0).unwrap().name, "conveyor");
        assert!(registry.is_air(dictionary.get(1).unwrap()));
    }
}
