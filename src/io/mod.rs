//! Mesh file I/O.
//!
//! Input is a triangle soup read from a mesh file; output is the two-line
//! buffer text written by [`buffers`].
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Notes |
//! |--------|-----------|------|-------|
//! | STL | `.stl` | ✓ | Binary and ASCII |
//!
//! # Usage
//!
//! ```no_run
//! use meshidx::index::{index_soup, IndexOptions};
//! use meshidx::io;
//!
//! let soup = io::load("model.stl").unwrap();
//! let (mesh, _stats) = index_soup::<u32>(&soup, &IndexOptions::default()).unwrap();
//! io::save(&mesh, "model.idx").unwrap();
//! ```

pub mod buffers;
pub mod stl;

use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::{IndexedMesh, MeshIndex, TriangleSoup};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// STL (stereolithography) format.
    Stl,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "stl" => Some(Format::Stl),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Load a triangle soup with automatic format detection.
///
/// The format is determined by the file extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriangleSoup> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        Format::Stl => stl::load(path),
    }
}

/// Save the vertex and index buffers as two comma-joined lines.
pub fn save<P: AsRef<Path>, I: MeshIndex>(mesh: &IndexedMesh<I>, path: P) -> Result<()> {
    buffers::save(mesh, path)
}
