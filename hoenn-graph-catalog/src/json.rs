//! JSON loading for raw dump data and writing of pipeline output.
//!
//! Map descriptors live one per directory under the maps root:
//! ```text
//! base_data/
//!   maps/
//!     LittlerootTown/
//!       map.json
//!     Route101/
//!       map.json
//!     ...
//!   warpMap.json
//! ```

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use walkdir::WalkDir;

use crate::types::{RawLocation, RawWarp};

/// File name of a single map descriptor.
pub const MAP_DESCRIPTOR: &str = "map.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },
}

/// Load every map descriptor found below `maps_dir`.
///
/// The directory is walked recursively in file-name order so the result is
/// the same on every run; synthetic ids downstream depend on this order.
pub fn load_raw_locations(maps_dir: &Path) -> Result<Vec<RawLocation>, CatalogError> {
    if !maps_dir.is_dir() {
        return Err(CatalogError::DirNotFound(maps_dir.display().to_string()));
    }

    let mut locations = Vec::new();
    for entry in WalkDir::new(maps_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| CatalogError::Io {
            path: e
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| maps_dir.display().to_string()),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() || entry.file_name() != MAP_DESCRIPTOR {
            continue;
        }
        log::debug!("Reading {}", entry.path().display());
        locations.push(read_json(entry.path())?);
    }

    Ok(locations)
}

/// Load the flat warp table.
pub fn load_warp_table(path: &Path) -> Result<Vec<RawWarp>, CatalogError> {
    read_json(path)
}

/// Write `value` as 4-space indented JSON, keeping non-ASCII text as-is.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CatalogError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| CatalogError::Serialize {
            path: path.display().to_string(),
            source: e,
        })?;

    let write_err = |e| CatalogError::Write {
        path: path.display().to_string(),
        source: e,
    };
    let mut file = std::fs::File::create(path).map_err(write_err)?;
    file.write_all(&buf).map_err(write_err)?;
    file.write_all(b"\n").map_err(write_err)?;
    Ok(())
}

/// Generic helper: read a whole file and parse it as `T`.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
