use flate2::Compression;
use serde::{Deserialize, Serialize};
use crate::error::Result;

pub const DEFAULT_EXTENSION: &str = "msch";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SchematicsConfig {
    /// File extension (without the dot) of schematic files.
    pub extension: String,
    /// Initial capacity of the scratch buffer used for base64 export.
    pub buffer_capacity: usize,
    /// Deflate level, 0 to 9.
    pub compression: u32,
}

impl Default for SchematicsConfig {
    fn default() -> Self {
        SchematicsConfig {
            extension: DEFAULT_EXTENSION.to_string(),
            buffer_capacity: 1024,
            compression: 6,
        }
    }
}

impl SchematicsConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn compression(&self) -> Compression {
        Compression::new(self.compression.min(9))
    }
}
