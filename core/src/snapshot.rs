//! On-disk copy of a built graph.
//!
//! Layout: magic `CPGS`, format version (`u32`), store fingerprint
//! (`u64` participations, `i64` max person id, `i64` max work id), all
//! little-endian, followed by the bincode-encoded graph. The header can be
//! read without decoding the body, which is how staleness is checked.

use crate::error::{Error, Result};
use crate::graph::Graph;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{BufWriter, Cursor, ErrorKind, Read, Write},
    path::{Path, PathBuf},
};
use tracing::info;

const MAGIC: &[u8; 4] = b"CPGS";
pub const FORMAT_VERSION: u32 = 1;
const HEADER_LEN: usize = 4 + 4 + 8 + 8 + 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreFingerprint {
    pub participations: u64,
    pub max_person_id: i64,
    pub max_work_id: i64,
}

#[derive(Debug)]
pub struct Snapshot {
    pub fingerprint: StoreFingerprint,
    pub graph: Graph,
}

pub fn save(path: &Path, graph: &Graph, fingerprint: StoreFingerprint) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    // Write to a sibling temp file, then rename over the target
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);
    {
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        write_header(&mut writer, fingerprint)?;
        bincode::serialize_into(&mut writer, graph)?;
        writer.flush()?;
    }
    fs::rename(&temp_path, path)?;

    info!(path = %path.display(), nodes = graph.node_count(), "saved graph snapshot");
    Ok(())
}

/// Reads only the header. `Ok(None)` when no snapshot exists yet.
pub fn read_fingerprint(path: &Path) -> Result<Option<StoreFingerprint>> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut header = [0u8; HEADER_LEN];
    file.read_exact(&mut header)
        .map_err(|_| Error::Snapshot("truncated header".to_string()))?;
    parse_header(&header).map(Some)
}

pub fn load(path: &Path) -> Result<Snapshot> {
    let file = File::open(path)?;
    // The snapshot is only ever replaced by rename, never written in place
    let data = unsafe { Mmap::map(&file)? };

    if data.len() < HEADER_LEN {
        return Err(Error::Snapshot("truncated header".to_string()));
    }

    let fingerprint = parse_header(&data[..HEADER_LEN])?;
    let graph: Graph = bincode::deserialize(&data[HEADER_LEN..])?;

    info!(path = %path.display(), nodes = graph.node_count(), "loaded graph snapshot");
    Ok(Snapshot { fingerprint, graph })
}

fn write_header<W: Write>(writer: &mut W, fingerprint: StoreFingerprint) -> Result<()> {
    writer.write_all(MAGIC)?;
    writer.write_u32::<LittleEndian>(FORMAT_VERSION)?;
    writer.write_u64::<LittleEndian>(fingerprint.participations)?;
    writer.write_i64::<LittleEndian>(fingerprint.max_person_id)?;
    writer.write_i64::<LittleEndian>(fingerprint.max_work_id)?;
    Ok(())
}

fn parse_header(header: &[u8]) -> Result<StoreFingerprint> {
    let mut cursor = Cursor::new(header);

    let mut magic = [0u8; 4];
    cursor.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(Error::Snapshot("not a castpath graph snapshot".to_string()));
    }

    let version = cursor.read_u32::<LittleEndian>()?;
    if version != FORMAT_VERSION {
        return Err(Error::Snapshot(format!(
            "unsupported format version {version} (expected {FORMAT_VERSION})"
        )));
    }

    Ok(StoreFingerprint {
        participations: cursor.read_u64::<LittleEndian>()?,
        max_person_id: cursor.read_i64::<LittleEndian>()?,
        max_work_id: cursor.read_i64::<LittleEndian>()?,
    })
}
