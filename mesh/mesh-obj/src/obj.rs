//! Wavefront OBJ serialization.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use mesh_types::{Point3, TriMesh};
use tracing::info;

use crate::error::{ObjError, ObjResult};

/// Write `mesh` as OBJ text.
///
/// Comment lines go first, prefixed with `# `, separated from the geometry
/// by a blank line. Vertices use six decimal places; face indices are
/// 1-based per the OBJ convention.
///
/// # Errors
///
/// Any failure of the underlying writer.
pub fn write_obj<W: Write>(mesh: &TriMesh, writer: &mut W, comments: &[&str]) -> ObjResult<()> {
    for comment in comments {
        writeln!(writer, "# {comment}")?;
    }
    if !comments.is_empty() {
        writeln!(writer)?;
    }
    for p in &mesh.positions {
        writeln!(writer, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }
    for tri in &mesh.triangles {
        writeln!(writer, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
    }
    Ok(())
}

/// Write `mesh` to a file at `path`, creating or truncating it.
///
/// # Errors
///
/// Any failure creating or writing the file.
pub fn save_obj<P: AsRef<Path>>(mesh: &TriMesh, path: P, comments: &[&str]) -> ObjResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(mesh, &mut writer, comments)?;
    writer.flush()?;
    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "wrote OBJ file"
    );
    Ok(())
}

/// Parse OBJ text into a mesh.
///
/// Only `v` and `f` records are honored; comments, blank lines, and other
/// record types (`vn`, `vt`, `o`, ...) are skipped. Face tokens of the
/// `index/texture/normal` form use just the leading index. Faces must be
/// triangles.
///
/// # Errors
///
/// [`ObjError::InvalidVertex`] or [`ObjError::InvalidIndex`] naming the
/// offending line, or any reader failure.
pub fn read_obj<R: BufRead>(reader: R) -> ObjResult<TriMesh> {
    let mut mesh = TriMesh::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let number = number + 1;

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let p = parse_vertex(&mut tokens).ok_or(ObjError::InvalidVertex { line: number })?;
                mesh.positions.push(p);
            }
            Some("f") => {
                let tri = parse_face(&mut tokens).ok_or(ObjError::InvalidIndex { line: number })?;
                mesh.triangles.push(tri);
            }
            _ => {}
        }
    }
    Ok(mesh)
}

/// Read a mesh from an OBJ file at `path`.
///
/// # Errors
///
/// Same as [`read_obj`], plus any failure opening the file.
pub fn load_obj<P: AsRef<Path>>(path: P) -> ObjResult<TriMesh> {
    read_obj(BufReader::new(File::open(path)?))
}

fn parse_vertex<'a, I: Iterator<Item = &'a str>>(tokens: &mut I) -> Option<Point3<f64>> {
    let x: f64 = tokens.next()?.parse().ok()?;
    let y: f64 = tokens.next()?.parse().ok()?;
    let z: f64 = tokens.next()?.parse().ok()?;
    if x.is_finite() && y.is_finite() && z.is_finite() {
        Some(Point3::new(x, y, z))
    } else {
        None
    }
}

fn parse_face<'a, I: Iterator<Item = &'a str>>(tokens: &mut I) -> Option<[u32; 3]> {
    let a = parse_face_index(tokens.next()?)?;
    let b = parse_face_index(tokens.next()?)?;
    let c = parse_face_index(tokens.next()?)?;
    // Triangles only
    if tokens.next().is_some() {
        return None;
    }
    Some([a, b, c])
}

/// Parse one face token, tolerating `index/texture/normal` forms, and
/// convert from 1-based to 0-based.
fn parse_face_index(token: &str) -> Option<u32> {
    let index: u32 = token.split('/').next()?.parse().ok()?;
    index.checked_sub(1)
}
