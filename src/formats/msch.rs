use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use tracing::debug;
use crate::error::{Result, SchematicError};
use crate::palette::BlockDictionary;
use crate::position::{pack, unpack_x, unpack_y};
use crate::registry::BlockRegistry;
use crate::schematic::{Schematic, Stile};

pub const HEADER: [u8; 4] = *b"msch";
pub const VERSION: u8 = 0;
pub const MAX_DIMENSION: i32 = i16::MAX as i32;

// Upper bound on the tile vector reserved up front from an untrusted count.
const PREALLOC_LIMIT: usize = 4096;

/// Cheap check for the `msch` magic bytes.
pub fn is_msch(data: &[u8]) -> bool {
    data.len() > HEADER.len() && data[..HEADER.len()] == HEADER
}

pub fn to_msch(schematic: &Schematic, compression: Compression) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write(schematic, &mut out, compression)?;
    Ok(out)
}

pub fn from_msch(data: &[u8], registry: &BlockRegistry) -> Result<Schematic> {
    read(data, registry)
}

pub fn write_file(schematic: &Schematic, path: &Path, compression: Compression) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write(schematic, &mut out, compression)?;
    out.flush()?;
    Ok(())
}

pub fn read_file(path: &Path, registry: &BlockRegistry) -> Result<Schematic> {
    let file = BufReader::new(File::open(path)?);
    read(file, registry)
}

/// Encodes `schematic` as header, version byte and a zlib-compressed body.
///
/// Every capacity limit is checked before the first byte reaches `output`.
pub fn write<W: Write>(schematic: &Schematic, output: &mut W, compression: Compression) -> Result<()> {
    let (width, height) = schematic.get_dimensions();
    if !(0..=MAX_DIMENSION).contains(&width) || !(0..=MAX_DIMENSION).contains(&height) {
        return Err(SchematicError::DimensionsOutOfRange { width, height });
    }

    let dictionary = BlockDictionary::build(&schematic.tiles)?;
    for block in dictionary.blocks() {
        if block.name.len() > u16::MAX as usize {
            return Err(SchematicError::NameTooLong {
                name: block.name.clone(),
                len: block.name.len(),
            });
        }
    }
    let tile_count = i32::try_from(schematic.tiles.len())
        .map_err(|_| SchematicError::Malformed(format!("{} tiles do not fit in a schematic", schematic.tiles.len())))?;

    output.write_all(&HEADER)?;
    output.write_all(&[VERSION])?;

    let mut stream = ZlibEncoder::new(output, compression);
    stream.write_all(&(width as i16).to_be_bytes())?;
    stream.write_all(&(height as i16).to_be_bytes())?;

    stream.write_all(&[dictionary.len() as u8])?;
    for block in dictionary.blocks() {
        write_utf(&mut stream, &block.name)?;
    }

    stream.write_all(&tile_count.to_be_bytes())?;
    for tile in &schematic.tiles {
        let index = dictionary
            .index_of(&tile.block)
            .ok_or_else(|| SchematicError::Malformed(format!("block '{}' missing from dictionary", tile.block.name)))?;
        stream.write_all(&[index])?;
        stream.write_all(&pack(tile.x, tile.y).to_be_bytes())?;
        stream.write_all(&tile.config.to_be_bytes())?;
        stream.write_all(&[tile.rotation])?;
    }

    stream.finish()?;
    debug!(
        "Encoded {}x{} schematic with {} tiles and {} blocks",
        width,
        height,
        tile_count,
        dictionary.len()
    );
    Ok(())
}

/// Decodes a schematic, resolving block names through `registry`.
///
/// Tiles whose block is unknown to the registry (or is air) are dropped.
/// Both coordinates come from the packed position field.
pub fn read<R: Read>(mut input: R, registry: &BlockRegistry) -> Result<Schematic> {
    let mut header = [0u8; 4];
    match input.read_exact(&mut header) {
        Ok(()) if header == HEADER => {}
        Ok(()) => return Err(SchematicError::MissingHeader),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Err(SchematicError::MissingHeader),
        Err(e) => return Err(SchematicError::Io(e)),
    }

    let mut version = [0u8; 1];
    match input.read_exact(&mut version) {
        Ok(()) if version[0] == VERSION => {}
        Ok(()) => return Err(SchematicError::UnsupportedVersion(version[0])),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            return Err(SchematicError::Malformed("missing version byte".to_string()))
        }
        Err(e) => return Err(SchematicError::Io(e)),
    }

    let mut stream = DataReader::new(ZlibDecoder::new(input));

    let width = stream.read_i16()? as i32;
    let height = stream.read_i16()? as i32;
    if width < 0 || height < 0 {
        return Err(SchematicError::Malformed(format!("negative dimensions {}x{}", width, height)));
    }

    let length = stream.read_u8()?;
    let mut names = Vec::with_capacity(length as usize);
    for _ in 0..length {
        names.push(stream.read_utf()?);
    }
    let dictionary = BlockDictionary::from_names(&names, registry);

    let total = stream.read_i32()?;
    if total < 0 {
        return Err(SchematicError::Malformed(format!("negative tile count {}", total)));
    }

    let mut tiles = Vec::with_capacity((total as usize).min(PREALLOC_LIMIT));
    let mut skipped = 0;
    for _ in 0..total {
        let index = stream.read_u8()?;
        let block = dictionary.get(index).cloned().ok_or_else(|| {
            SchematicError::Malformed(format!(
                "block index {} out of range for a dictionary of {}",
                index,
                dictionary.len()
            ))
        })?;
        let position = stream.read_i32()?;
        let config = stream.read_i32()?;
        let rotation = stream.read_u8()?;

        if registry.is_air(&block) {
            skipped += 1;
            continue;
        }
        tiles.push(Stile::new(block, unpack_x(position), unpack_y(position), config, rotation));
    }

    debug!(
        "Decoded {}x{} schematic with {} tiles ({} skipped)",
        width,
        height,
        tiles.len(),
        skipped
    );
    Ok(Schematic::new(tiles, width, height))
}

fn write_utf<W: Write>(stream: &mut W, value: &str) -> io::Result<()> {
    stream.write_all(&(value.len() as u16).to_be_bytes())?;
    stream.write_all(value.as_bytes())
}

/// Big-endian primitive reader over the decompressed body. Any read failure
/// means the body is truncated or corrupt.
struct DataReader<R> {
    inner: R,
}

impl<R: Read> DataReader<R> {
    fn new(inner: R) -> Self {
        DataReader { inner }
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf).map_err(SchematicError::CorruptBody)?;
        Ok(buf)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    fn read_utf(&mut self) -> Result<String> {
        let len = u16::from_be_bytes(self.read_array()?) as usize;
        let mut buf = vec![0u8; len];
        self.inner.read_exact(&mut buf).map_err(SchematicError::CorruptBody)?;
        String::from_utf8(buf).map_err(|e| SchematicError::Malformed(format!("block name is not UTF-8: {}", e)))
    }
}
