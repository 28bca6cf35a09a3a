//! Manifold construction from an indexed polygon soup.
//!
//! The input is a point list plus faces given as cyclic index sequences,
//! assumed but not guaranteed to describe a closed 2-manifold. Every point
//! becomes a point-sphere, then each boundary edge is inserted with one
//! vertex of context on each side. An edge whose attachment corner cannot
//! yet be determined is postponed to a later pass; if whole passes go by
//! with nothing inserted the input admits several manifold interpretations
//! and construction reports `AmbiguousManifold` rather than guessing.

use crate::geometry::Point3;
use crate::mesh_error::TopoMeshError;
use crate::topology::corner::{Corner, EdgeKey};
use crate::topology::handles::VertexId;
use crate::topology::manifold::Manifold;
use itertools::Itertools;
use std::collections::VecDeque;

/// Tuning knobs for `construct_with`.
#[derive(Copy, Clone, Debug)]
pub struct ConstructOptions {
    /// Number of consecutive passes without progress tolerated before the
    /// input is declared ambiguous.
    pub stall_limit: u32,
}

impl Default for ConstructOptions {
    fn default() -> Self {
        Self { stall_limit: 2 }
    }
}

/// One boundary edge of an input face with one vertex of context on each
/// side: `(before, tail, head, after)`.
type Quadruplet = [VertexId; 4];

/// Builds a mesh from points and indexed faces with default options.
pub fn construct<M: Manifold + Default>(
    points: &[Point3],
    faces: &[Vec<usize>],
) -> Result<M, TopoMeshError> {
    construct_with(points, faces, ConstructOptions::default())
}

/// Builds a mesh from points and indexed faces.
pub fn construct_with<M: Manifold + Default>(
    points: &[Point3],
    faces: &[Vec<usize>],
    options: ConstructOptions,
) -> Result<M, TopoMeshError> {
    let mut mesh = M::default();
    let vertices: Vec<VertexId> = points
        .iter()
        .map(|p| mesh.create_point_sphere(*p).vertex)
        .collect();

    let mut worklist: VecDeque<Quadruplet> = VecDeque::new();
    for face in faces {
        for &index in face {
            if index >= vertices.len() {
                return Err(TopoMeshError::PointIndexOutOfRange(index, vertices.len()));
            }
        }
        if face.is_empty() {
            continue;
        }
        for (a, v1, v2, b) in face.iter().copied().circular_tuple_windows() {
            worklist.push_back([vertices[a], vertices[v1], vertices[v2], vertices[b]]);
        }
    }

    let mut inserted: hashbrown::HashSet<EdgeKey> = hashbrown::HashSet::new();
    let mut null_passes: u32 = 0;
    let mut pass: usize = 0;
    while !worklist.is_empty() {
        let mut pass_inserted: hashbrown::HashSet<EdgeKey> = hashbrown::HashSet::new();
        let mut postponed: VecDeque<Quadruplet> = VecDeque::new();

        while let Some([before, v1, v2, after]) = worklist.pop_front() {
            if v1 == v2 {
                continue;
            }
            let key = EdgeKey::new(v1, v2);
            if inserted.contains(&key) || pass_inserted.contains(&key) {
                continue;
            }
            // The corner for each endpoint is the one preceded by its
            // context vertex or followed by the edge's far endpoint.
            let c1 = resolve(&mesh, v1, |c| {
                c.previous_vertex() == Some(before) || c.next_vertex() == Some(v2)
            })?;
            let c2 = resolve(&mesh, v2, |c| {
                c.previous_vertex() == Some(v1) || c.next_vertex() == Some(after)
            })?;
            match (c1, c2) {
                (Some(c1), Some(c2)) => {
                    mesh.insert_edge(&c1, &c2)?;
                    pass_inserted.insert(key);
                }
                _ => postponed.push_back([before, v1, v2, after]),
            }
        }

        let progressed = !pass_inserted.is_empty();
        inserted.extend(pass_inserted);
        null_passes = if progressed { 0 } else { null_passes + 1 };
        pass += 1;
        log::debug!(
            "construction pass {pass}: {} edges inserted, {} postponed",
            inserted.len(),
            postponed.len()
        );

        if null_passes > options.stall_limit && !postponed.is_empty() {
            log::warn!(
                "construction stalled after {null_passes} passes without progress, \
                 {} edges unresolved",
                postponed.len()
            );
            return Err(TopoMeshError::AmbiguousManifold {
                null_passes,
                remaining: postponed.len(),
            });
        }
        worklist = postponed;
    }

    Ok(mesh)
}

/// Picks the corner of `vertex` matching `accept`, or the sole corner when
/// the rotation has only one. `None` means the attachment is still
/// ambiguous and the edge must be retried later.
fn resolve<M: Manifold>(
    mesh: &M,
    vertex: VertexId,
    accept: impl Fn(&Corner) -> bool,
) -> Result<Option<Corner>, TopoMeshError> {
    let rotation = mesh.vertex_trace(vertex)?;
    if rotation.len() == 1 {
        return Ok(Some(rotation[0]));
    }
    Ok(rotation.into_iter().find(accept))
}
