//! The manifold editing interface implemented by both connectivity encodings.

use crate::geometry::Point3;
use crate::mesh_error::TopoMeshError;
use crate::topology::corner::Corner;
use crate::topology::handles::{FaceId, VertexId};

/// Editable closed orientable 2-manifold mesh.
///
/// All edits go through two primitives, `insert_edge` and `delete_edge`,
/// which are inverse to each other and preserve the manifold property by
/// construction. Both take corners rather than bare vertices: the corner
/// pins down which attachment of the vertex is meant when the vertex appears
/// on several faces, or several times on one face.
pub trait Manifold {
    /// Creates the degenerate one-vertex one-face mesh component and returns
    /// its unique corner.
    fn create_point_sphere(&mut self, position: Point3) -> Corner;

    /// Inserts an edge between two corners.
    ///
    /// When the corners lie on the same face the face is split in two and
    /// both new faces are returned. When they lie on different faces the
    /// faces are merged and the merged face is returned in both slots.
    ///
    /// Fails with `SelfLoop` if both corners name the same vertex.
    fn insert_edge(
        &mut self,
        c1: &Corner,
        c2: &Corner,
    ) -> Result<(FaceId, FaceId), TopoMeshError>;

    /// Deletes the edge between two corners, undoing `insert_edge`.
    ///
    /// When both corners lie on the same face, deletion splits it in two
    /// (possibly leaving a point sphere on either side). When they lie on
    /// different faces, deletion merges them. Fails with `EdgeNotFound` if
    /// no edge joins the two vertices.
    fn delete_edge(
        &mut self,
        c1: &Corner,
        c2: &Corner,
    ) -> Result<(FaceId, FaceId), TopoMeshError>;

    /// The corner at the first occurrence of `vertex` on the boundary of
    /// `face`. Fails with `NotOnBoundary` if the vertex does not occur
    /// there, and `InvalidHandle` if the face is not live.
    fn corner_at(&self, face: FaceId, vertex: VertexId) -> Result<Corner, TopoMeshError>;

    /// The rotation of a vertex: its corners in cyclic order around the
    /// vertex. Fails with `NonManifoldVertex` if the walk does not close.
    fn vertex_trace(&self, vertex: VertexId) -> Result<Vec<Corner>, TopoMeshError>;

    /// The corners of a face in boundary order. Fails with
    /// `NonManifoldFace` if the walk does not close.
    fn face_trace(&self, face: FaceId) -> Result<Vec<Corner>, TopoMeshError>;

    /// The ordered cyclic vertex list bounding `face`.
    fn face_boundary(&self, face: FaceId) -> Result<Vec<VertexId>, TopoMeshError>;

    /// Live vertices in allocation order.
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Live faces in allocation order.
    fn faces(&self) -> Box<dyn Iterator<Item = FaceId> + '_>;

    /// Coordinates of a live vertex.
    fn position(&self, vertex: VertexId) -> Result<Point3, TopoMeshError>;

    /// True if an edge joins `u` and `v`.
    fn has_edge(&self, u: VertexId, v: VertexId) -> bool;

    /// Number of live vertices.
    fn vertex_count(&self) -> usize;

    /// Number of live faces.
    fn face_count(&self) -> usize;

    /// Checks the global corner balance: every corner reached through a
    /// vertex rotation must also be reached through a face boundary, and
    /// vice versa. Intended for settled meshes, typically in tests.
    fn validate(&self) -> Result<(), TopoMeshError> {
        let mut rotations = 0usize;
        for v in self.vertices() {
            rotations += self.vertex_trace(v)?.len();
        }
        let mut boundaries = 0usize;
        for f in self.faces() {
            boundaries += self.face_trace(f)?.len();
        }
        if rotations != boundaries {
            return Err(TopoMeshError::UnbalancedCorners {
                rotations,
                boundaries,
            });
        }
        Ok(())
    }
}
