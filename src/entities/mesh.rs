//! Mesh entity

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::{CompileError, Result};
use crate::types::Vector3;

/// Bounds on mesh vertex count
pub const MIN_VERTICES: usize = 3;
pub const MAX_VERTICES: usize = 50_000;

/// Minimum indices per face
pub const MIN_FACE_INDICES: usize = 3;

/// A polygon mesh defined by vertices and index-list faces
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertex positions
    pub vertices: Vec<Vector3>,
    /// Faces as vertex index lists, each at least a triangle
    pub faces: Vec<Vec<u32>>,
}

impl Mesh {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let vertices = CoordinateConverter::points3(
            convert::require(fields, "vertices", "mesh")?,
            "mesh.vertices",
        )?;
        if vertices.len() < MIN_VERTICES || vertices.len() > MAX_VERTICES {
            return Err(CompileError::validation(
                "mesh.vertices",
                format!(
                    "expected {MIN_VERTICES}-{MAX_VERTICES} vertices, got {}",
                    vertices.len()
                ),
            ));
        }

        let raw_faces = convert::require(fields, "faces", "mesh")?
            .as_array()
            .ok_or_else(|| CompileError::validation("mesh.faces", "expected an array of faces"))?;
        let mut faces = Vec::with_capacity(raw_faces.len());
        for (i, raw_face) in raw_faces.iter().enumerate() {
            let indices = raw_face.as_array().ok_or_else(|| {
                CompileError::validation(
                    format!("mesh.faces[{i}]"),
                    "expected an array of vertex indices",
                )
            })?;
            if indices.len() < MIN_FACE_INDICES {
                return Err(CompileError::validation(
                    format!("mesh.faces[{i}]"),
                    format!("face needs at least {MIN_FACE_INDICES} indices, got {}", indices.len()),
                ));
            }
            let mut face = Vec::with_capacity(indices.len());
            for (j, raw_index) in indices.iter().enumerate() {
                let index = convert::integer(
                    raw_index,
                    &format!("mesh.faces[{i}][{j}]"),
                    0,
                    i64::MAX,
                )?;
                if index as usize >= vertices.len() {
                    return Err(CompileError::validation(
                        format!("mesh.faces[{i}][{j}]"),
                        format!(
                            "face index {index} out of range (mesh has {} vertices)",
                            vertices.len()
                        ),
                    ));
                }
                face.push(index as u32);
            }
            faces.push(face);
        }

        Ok(Mesh {
            common,
            vertices,
            faces,
        })
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
