use std::fs;
use std::path::{Path, PathBuf};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, info, warn};
use crate::bounding_box::BoundingBox;
use crate::config::SchematicsConfig;
use crate::error::Result;
use crate::formats::msch;
use crate::placement::PlacementRequest;
use crate::position;
use crate::registry::BlockRegistry;
use crate::schematic::{Schematic, Stile};
use crate::world::TileGrid;

/// In-memory collection of loaded schematics plus the conversions between
/// schematics, world regions, placement requests and shareable text.
///
/// Owns a scratch buffer reused by [`write_base64`](Schematics::write_base64),
/// so a single instance must not be shared between threads without a lock.
pub struct Schematics {
    config: SchematicsConfig,
    all: Vec<Schematic>,
    out: Vec<u8>,
}

impl Schematics {
    pub fn new(config: SchematicsConfig) -> Self {
        let out = Vec::with_capacity(config.buffer_capacity);
        Schematics {
            config,
            all: Vec::new(),
            out,
        }
    }

    pub fn config(&self) -> &SchematicsConfig {
        &self.config
    }

    pub fn all(&self) -> &[Schematic] {
        &self.all
    }

    pub fn add(&mut self, schematic: Schematic) {
        self.all.push(schematic);
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Replaces the loaded schematics with every readable file in `paths`
    /// carrying the configured extension. Unreadable files are logged and
    /// skipped. Returns the number of schematics loaded.
    pub fn load_files<I>(&mut self, paths: I, registry: &BlockRegistry) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.all.clear();
        for path in paths {
            if !self.has_extension(&path) {
                continue;
            }
            match msch::read_file(&path, registry) {
                Ok(schematic) => {
                    debug!("Loaded schematic {}", path.display());
                    self.all.push(schematic);
                }
                Err(e) => warn!("Skipping schematic {}: {}", path.display(), e),
            }
        }
        info!("Loaded {} schematics", self.all.len());
        self.all.len()
    }

    /// Lists `dir` and loads its schematic files in file-name order.
    pub fn load_dir(&mut self, dir: &Path, registry: &BlockRegistry) -> Result<usize> {
        let mut paths = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        paths.sort();
        Ok(self.load_files(paths, registry))
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some(self.config.extension.as_str())
    }

    /// Maps every tile to a placement centred on `(x, y)`: a tile lands at
    /// `x + tile.x - width / 2`, with the halving truncated toward zero.
    pub fn to_requests(schematic: &Schematic, x: i32, y: i32) -> Vec<PlacementRequest> {
        schematic
            .tiles
            .iter()
            .map(|tile| PlacementRequest {
                x: tile.x + x - schematic.width / 2,
                y: tile.y + y - schematic.height / 2,
                rotation: tile.rotation,
                block: tile.block.clone(),
                config: tile.config,
            })
            .collect()
    }

    /// Carves the rectangle spanned by two opposite corners out of `world`.
    ///
    /// Tiles and position-valued configs are shifted so the rectangle's low
    /// corner becomes the schematic origin.
    pub fn create_from_region<G: TileGrid + ?Sized>(world: &G, x: i32, y: i32, x2: i32, y2: i32) -> Schematic {
        let bounds = BoundingBox::from_corners(x, y, x2, y2);
        let (width, height) = bounds.get_dimensions();
        let (offset_x, offset_y) = (-bounds.min.0, -bounds.min.1);

        let mut tiles = Vec::new();
        for (cx, cy) in bounds.iter_cells() {
            let Some(building) = world.building_at(cx, cy) else {
                continue;
            };
            let config = if building.pos_config {
                position::translate(building.config, offset_x, offset_y)
            } else {
                building.config
            };
            tiles.push(Stile::new(
                building.block,
                cx + offset_x,
                cy + offset_y,
                config,
                building.rotation,
            ));
        }

        debug!("Created {}x{} schematic with {} tiles", width, height, tiles.len());
        Schematic::new(tiles, width, height)
    }

    /// Encodes `schematic` and returns it as standard, padded base64.
    pub fn write_base64(&mut self, schematic: &Schematic) -> Result<String> {
        self.out.clear();
        msch::write(schematic, &mut self.out, self.config.compression())?;
        Ok(STANDARD.encode(&self.out))
    }

    /// Decodes base64 text produced by [`write_base64`](Schematics::write_base64).
    /// Surrounding whitespace, as left by clipboards, is ignored.
    pub fn read_base64(text: &str, registry: &BlockRegistry) -> Result<Schematic> {
        let data = STANDARD.decode(text.trim())?;
        msch::read(data.as_slice(), registry)
    }
}

impl Default for Schematics {
    fn default() -> Self {
        Schematics::new(SchematicsConfig::default())
    }
}
