//! Wavefront OBJ import and export.
//!
//! Export walks live vertices and faces in allocation order, so repeated
//! exports of the same mesh are byte-identical. Import parses `v` and `f`
//! records, ignores the rest, and hands the indexed faces to the
//! construction algorithm.

use crate::algs::construction::construct;
use crate::geometry::Point3;
use crate::mesh_error::TopoMeshError;
use crate::topology::manifold::Manifold;

/// Serializes a mesh to OBJ text.
pub fn mesh_to_obj<M: Manifold>(mesh: &M) -> Result<String, TopoMeshError> {
    let mut indices = hashbrown::HashMap::new();
    let mut out = String::new();
    for (index, vertex) in mesh.vertices().enumerate() {
        indices.insert(vertex, index + 1);
        let [x, y, z] = mesh.position(vertex)?;
        out.push_str(&format!("v {x} {y} {z}\n"));
    }
    for face in mesh.faces() {
        out.push('f');
        for vertex in mesh.face_boundary(face)? {
            let index = indices
                .get(&vertex)
                .ok_or_else(|| TopoMeshError::InvalidHandle(vertex.to_string()))?;
            out.push_str(&format!(" {index}"));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Parses OBJ text and constructs a mesh from it.
pub fn obj_to_mesh<M: Manifold + Default>(obj: &str) -> Result<M, TopoMeshError> {
    let mut points: Vec<Point3> = Vec::new();
    let mut faces: Vec<Vec<usize>> = Vec::new();

    for (number, line) in obj.lines().enumerate() {
        let line = line.trim();
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let mut coords = [0.0f64; 3];
                for slot in &mut coords {
                    let token = tokens.next().ok_or_else(|| {
                        TopoMeshError::ObjParse(format!(
                            "line {}: vertex record with fewer than 3 coordinates",
                            number + 1
                        ))
                    })?;
                    *slot = token.parse().map_err(|_| {
                        TopoMeshError::ObjParse(format!(
                            "line {}: invalid coordinate {token:?}",
                            number + 1
                        ))
                    })?;
                }
                points.push(coords);
            }
            Some("f") => {
                let mut face = Vec::new();
                for token in tokens {
                    // Tokens may carry texture/normal references: "7/1/3".
                    let index_token = token.split('/').next().unwrap_or(token);
                    let index: usize = index_token.parse().map_err(|_| {
                        TopoMeshError::ObjParse(format!(
                            "line {}: invalid face index {token:?}",
                            number + 1
                        ))
                    })?;
                    if index == 0 {
                        return Err(TopoMeshError::ObjParse(format!(
                            "line {}: face indices are 1-based",
                            number + 1
                        )));
                    }
                    face.push(index - 1);
                }
                if face.is_empty() {
                    return Err(TopoMeshError::ObjParse(format!(
                        "line {}: face record with no indices",
                        number + 1
                    )));
                }
                faces.push(face);
            }
            // Comments, groups, materials and blank lines are ignored.
            _ => {}
        }
    }

    construct(&points, &faces)
}
