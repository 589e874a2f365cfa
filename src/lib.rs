mod block;
mod bounding_box;
mod config;
mod error;
mod palette;
mod placement;
mod preview;
mod registry;
mod repository;
mod schematic;
mod world;
pub mod formats;
pub mod position;

// Public re-exports
pub use block::Block;
pub use bounding_box::BoundingBox;
pub use config::{SchematicsConfig, DEFAULT_EXTENSION};
pub use error::{Result, SchematicError};
pub use formats::msch;
pub use palette::{BlockDictionary, MAX_BLOCKS};
pub use placement::PlacementRequest;
pub use position::Position;
pub use preview::PreviewCache;
pub use registry::{BlockRegistry, AIR};
pub use repository::Schematics;
pub use schematic::{Schematic, Stile};
pub use world::{Building, TileGrid};
