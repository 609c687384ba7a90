//! Two-line text output of an indexed mesh.
//!
//! The first line holds the vertex table as compact coordinates (`x,y,z` per
//! vertex, flattened), the second the index buffer. Both are comma-joined and
//! newline-terminated. There is no other framing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MeshError, Result};
use crate::format::Compact;
use crate::mesh::{IndexedMesh, MeshIndex};

/// Write both buffers to `writer`.
///
/// # Example
/// ```
/// use meshidx::io::buffers;
/// use meshidx::mesh::{IndexedMesh, VertexId};
/// use nalgebra::Point3;
///
/// let mesh: IndexedMesh = IndexedMesh {
///     positions: vec![Point3::new(0.5, 0.0, 1.25)],
///     indices: vec![VertexId::from_raw(0); 3],
/// };
/// let mut out = Vec::new();
/// buffers::write(&mesh, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), ".5,0,1.25\n0,0,0\n");
/// ```
pub fn write<W: Write, I: MeshIndex>(mesh: &IndexedMesh<I>, writer: &mut W) -> Result<()> {
    write_joined(writer, mesh.flat_coordinates().map(Compact))?;
    write_joined(writer, mesh.flat_indices())?;
    Ok(())
}

fn write_joined<W: Write, T: std::fmt::Display>(
    writer: &mut W,
    items: impl Iterator<Item = T>,
) -> Result<()> {
    for (i, item) in items.enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        write!(writer, "{}", item)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// Save both buffers to a file.
pub fn save<P: AsRef<Path>, I: MeshIndex>(mesh: &IndexedMesh<I>, path: P) -> Result<()> {
    let path = path.as_ref();
    let save_error = |e: MeshError| MeshError::SaveError {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(mesh, &mut writer).map_err(save_error)?;
    writer
        .flush()
        .map_err(|e| save_error(MeshError::Io(e)))?;
    Ok(())
}
