//! STL (stereolithography) triangle soup reader.
//!
//! STL stores every triangle's corners in full, which makes it the natural
//! source of a triangle soup. Both ASCII and binary files are accepted.
//!
//! ASCII input is read leniently: only `vertex x y z` lines are consumed and
//! every other line (`solid`, `facet normal`, `outer loop`, ...) is skipped
//! without validation. The coordinate tokens are kept verbatim so that
//! [`KeyMode::Text`](crate::index::KeyMode::Text) can key on them.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::mesh::{SoupVertex, TriangleSoup};

const BINARY_HEADER_LEN: usize = 80;
const BINARY_TRIANGLE_LEN: u64 = 50;

/// Load a triangle soup from an STL file.
///
/// Automatically detects binary vs ASCII format.
///
/// # Example
///
/// ```no_run
/// use meshidx::io::stl;
///
/// let soup = stl::load("model.stl").unwrap();
/// println!("{} triangles", soup.num_triangles());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriangleSoup> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    read(&mut reader).map_err(|e| match e {
        MeshError::Io(_) | MeshError::Parse { .. } => MeshError::LoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
        other => other,
    })
}

/// Read a triangle soup from any reader.
pub fn read<R: Read>(reader: &mut R) -> Result<TriangleSoup> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse(&bytes)
}

/// Parse a triangle soup from the raw bytes of an STL file.
///
/// Text is read as ASCII STL when it starts with `solid` (after an optional
/// byte order mark) or contains at least one `vertex` line.
pub fn parse(bytes: &[u8]) -> Result<TriangleSoup> {
    if !has_binary_size(bytes) {
        if let Some(text) = ascii_text(bytes) {
            log::debug!("reading ASCII STL ({} bytes)", bytes.len());
            return parse_ascii(text);
        }
    }
    log::debug!("reading binary STL ({} bytes)", bytes.len());
    parse_binary(bytes)
}

/// Binary files may also begin with `solid`, so the declared triangle count
/// is checked against the file size first.
fn has_binary_size(bytes: &[u8]) -> bool {
    match bytes.get(BINARY_HEADER_LEN..BINARY_HEADER_LEN + 4) {
        Some(count) => {
            let count = u32::from_le_bytes([count[0], count[1], count[2], count[3]]);
            let expected = (BINARY_HEADER_LEN as u64 + 4) + u64::from(count) * BINARY_TRIANGLE_LEN;
            expected == bytes.len() as u64
        }
        None => false,
    }
}

fn ascii_text(bytes: &[u8]) -> Option<&str> {
    let text = std::str::from_utf8(bytes).ok()?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let looks_ascii = text.trim_start().starts_with("solid")
        || text
            .lines()
            .any(|line| line.split_whitespace().next() == Some("vertex"));
    looks_ascii.then_some(text)
}

fn parse_binary(bytes: &[u8]) -> Result<TriangleSoup> {
    let mut cursor = Cursor::new(bytes);
    let triangles = stl_io::create_stl_reader(&mut cursor)?;

    let mut soup = TriangleSoup::new();
    for tri in triangles {
        let tri = tri?;
        for v in &tri.vertices {
            let position = Point3::new(v[0] as f64, v[1] as f64, v[2] as f64);
            soup.push(SoupVertex::from_position(position));
        }
    }
    Ok(soup)
}

fn parse_ascii(text: &str) -> Result<TriangleSoup> {
    let mut soup = TriangleSoup::new();

    for (i, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("vertex") {
            continue;
        }

        let coords: Vec<&str> = tokens.collect();
        if coords.len() != 3 {
            return Err(MeshError::parse(
                i + 1,
                format!("expected 3 coordinates, found {}", coords.len()),
            ));
        }

        let mut xyz = [0.0; 3];
        for (slot, token) in xyz.iter_mut().zip(&coords) {
            *slot = token
                .parse::<f64>()
                .map_err(|e| MeshError::parse(i + 1, format!("invalid coordinate {:?}: {}", token, e)))?;
        }

        soup.push(SoupVertex::new(Point3::from(xyz), coords.join(" ")));
    }

    Ok(soup)
}
