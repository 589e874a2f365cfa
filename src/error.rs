use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchematicError>;

#[derive(Debug, Error)]
pub enum SchematicError {
    #[error("not a schematic file (missing header)")]
    MissingHeader,

    #[error("unsupported schematic version: {0}")]
    UnsupportedVersion(u8),

    #[error("corrupt schematic body: {0}")]
    CorruptBody(#[source] io::Error),

    #[error("malformed schematic: {0}")]
    Malformed(String),

    #[error("schematic references {count} distinct blocks, at most 255 are supported")]
    TooManyBlocks { count: usize },

    #[error("block name '{name}' is {len} bytes long, at most 65535 are supported")]
    NameTooLong { name: String, len: usize },

    #[error("schematic dimensions {width}x{height} are out of range")]
    DimensionsOutOfRange { width: i32, height: i32 },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SchematicError {
    /// True for errors caused by the bytes being decoded rather than by the
    /// environment or by an unencodable schematic.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            SchematicError::MissingHeader
                | SchematicError::UnsupportedVersion(_)
                | SchematicError::CorruptBody(_)
                | SchematicError::Malformed(_)
                | SchematicError::Base64(_)
        )
    }

    pub fn is_capacity_error(&self) -> bool {
        matches!(
            self,
            SchematicError::TooManyBlocks { .. }
                | SchematicError::NameTooLong { .. }
                | SchematicError::DimensionsOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SchematicError::TooManyBlocks { count: 256 };
        let msg = format!("{err}");
        assert!(msg.contains("256"));
        assert!(msg.contains("255"));

        let err = SchematicError::UnsupportedVersion(3);
        assert!(format!("{err}").contains("unsupported schematic version: 3"));
        assert!(format!("{}", SchematicError::MissingHeader).contains("not a schematic file"));
    }

    #[test]
    fn test_error_families() {
        assert!(SchematicError::MissingHeader.is_format_error());
        assert!(SchematicError::Malformed("x".to_string()).is_format_error());
        assert!(SchematicError::CorruptBody(io::ErrorKind::UnexpectedEof.into()).is_format_error());
        assert!(!SchematicError::TooManyBlocks { count: 300 }.is_format_error());
        assert!(SchematicError::TooManyBlocks { count: 300 }.is_capacity_error());
        assert!(!SchematicError::Io(io::ErrorKind::NotFound.into()).is_format_error());
    }
}
