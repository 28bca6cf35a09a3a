//! Refinement operations composed from the edit primitives.

use crate::geometry;
use crate::mesh_error::TopoMeshError;
use crate::topology::corner::Corner;
use crate::topology::handles::{FaceId, VertexId};
use crate::topology::manifold::Manifold;

/// Splits the edge between two corners at its midpoint.
///
/// The edge is deleted, a point-sphere is created at the midpoint, and two
/// edges reconnect the endpoints through it. Returns the midpoint vertex
/// and the faces produced by the final insertion.
pub fn subdivide_edge<M: Manifold>(
    mesh: &mut M,
    c1: &Corner,
    c2: &Corner,
) -> Result<(VertexId, (FaceId, FaceId)), TopoMeshError> {
    let (v1, v2) = (c1.vertex, c2.vertex);
    let mid = geometry::midpoint(mesh.position(v1)?, mesh.position(v2)?);

    let (after_delete, _) = mesh.delete_edge(c1, c2)?;
    let sphere = mesh.create_point_sphere(mid);

    let anchor_1 = mesh.corner_at(after_delete, v1)?;
    let (joined, _) = mesh.insert_edge(&anchor_1, &sphere)?;

    let anchor_mid = mesh.corner_at(joined, sphere.vertex)?;
    let anchor_2 = mesh.corner_at(joined, v2)?;
    mesh.insert_edge(&anchor_mid, &anchor_2)
        .map(|faces| (sphere.vertex, faces))
}

/// Fans a face into triangles from a vertex created at its centroid.
///
/// Returns the centroid vertex and the faces covering the old face.
pub fn triangulate_face<M: Manifold>(
    mesh: &mut M,
    face: FaceId,
) -> Result<(VertexId, Vec<FaceId>), TopoMeshError> {
    let boundary = mesh.face_boundary(face)?;
    let mut positions = Vec::with_capacity(boundary.len());
    for &v in &boundary {
        positions.push(mesh.position(v)?);
    }
    let sphere = mesh.create_point_sphere(geometry::centroid(&positions));
    let centroid = sphere.vertex;

    let first = mesh.corner_at(face, boundary[0])?;
    let (mut active, _) = mesh.insert_edge(&first, &sphere)?;

    let mut result = Vec::new();
    let mut last = (active, active);
    for &vertex in &boundary[1..] {
        let spoke_end = mesh.corner_at(active, vertex)?;
        let hub = mesh.corner_at(active, centroid)?;
        last = mesh.insert_edge(&spoke_end, &hub)?;
        // Keep fanning from whichever side still has the larger boundary.
        let (a, b) = last;
        if mesh.face_boundary(a)?.len() > mesh.face_boundary(b)?.len() {
            active = a;
            result.push(b);
        } else {
            active = b;
            result.push(a);
        }
    }
    let (a, b) = last;
    if !result.contains(&a) {
        result.push(a);
    }
    if !result.contains(&b) {
        result.push(b);
    }
    Ok((centroid, result))
}
