//! Face-boundary connectivity encoding.
//!
//! Each face owns the ordered cyclic list of vertices on its boundary; each
//! vertex knows the unordered set of faces in its rotation. Edges are not
//! stored for traversal, only mirrored into the shared edge set for
//! existence checks. Traversal works by scanning boundaries and matching
//! directed vertex pairs across faces.

use crate::geometry::Point3;
use crate::mesh_error::TopoMeshError;
use crate::topology::circular;
use crate::topology::core::MeshCore;
use crate::topology::corner::{Corner, EdgeKey};
use crate::topology::handles::{FaceId, VertexId};
use crate::topology::manifold::Manifold;
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default)]
pub struct FaceListMesh {
    core: MeshCore,
    face_vertices: hashbrown::HashMap<FaceId, Vec<VertexId>>,
    // BTreeSet so arbitrary-face picks during traversal are deterministic.
    vertex_faces: hashbrown::HashMap<VertexId, BTreeSet<FaceId>>,
}

impl FaceListMesh {
    pub fn new() -> Self {
        Self::default()
    }

    fn boundary(&self, face: FaceId) -> Result<&Vec<VertexId>, TopoMeshError> {
        self.face_vertices
            .get(&face)
            .ok_or_else(|| TopoMeshError::InvalidHandle(face.to_string()))
    }

    fn rotation_set(&self, vertex: VertexId) -> Result<&BTreeSet<FaceId>, TopoMeshError> {
        self.vertex_faces
            .get(&vertex)
            .ok_or_else(|| TopoMeshError::InvalidHandle(vertex.to_string()))
    }

    /// Corner at occurrence `at` of its vertex on `boundary`.
    fn corner_at_index(face: FaceId, boundary: &[VertexId], at: usize) -> Corner {
        let vertex = boundary[at];
        if boundary.len() == 1 {
            return Corner {
                vertex,
                face,
                edge_in: None,
                edge_out: None,
            };
        }
        let n = boundary.len();
        let prev = boundary[(at + n - 1) % n];
        let next = boundary[(at + 1) % n];
        Corner {
            vertex,
            face,
            edge_in: Some(EdgeKey::new(prev, vertex)),
            edge_out: Some(EdgeKey::new(vertex, next)),
        }
    }

    /// Installs a face with the given boundary, updating rotation sets.
    fn adopt_face(&mut self, boundary: Vec<VertexId>) -> FaceId {
        let face = self.core.create_face();
        for &v in &boundary {
            self.vertex_faces.entry(v).or_default().insert(face);
        }
        self.face_vertices.insert(face, boundary);
        face
    }

    /// Retires a face, removing it from every member's rotation set.
    fn retire_face(&mut self, face: FaceId) -> Result<(), TopoMeshError> {
        let boundary = self
            .face_vertices
            .remove(&face)
            .ok_or_else(|| TopoMeshError::InvalidHandle(face.to_string()))?;
        for v in boundary {
            if let Some(set) = self.vertex_faces.get_mut(&v) {
                set.remove(&face);
            }
        }
        self.core.delete_face(face)
    }

    /// The face whose boundary contains the directed pair `(tail, head)`,
    /// searched among the faces incident to `head`, with the occurrence
    /// index of `head` in it.
    fn face_with_directed_pair(
        &self,
        tail: VertexId,
        head: VertexId,
    ) -> Result<(FaceId, usize), TopoMeshError> {
        for &face in self.rotation_set(head)? {
            let boundary = self.boundary(face)?;
            if let Some(i) = circular::index_of_pair(boundary, (&tail, &head)) {
                return Ok((face, (i + 1) % boundary.len()));
            }
        }
        Err(TopoMeshError::NonManifoldVertex(head))
    }

    fn checked_corner(&self, corner: &Corner) -> Result<(VertexId, FaceId), TopoMeshError> {
        let boundary = self.boundary(corner.face)?;
        if !boundary.contains(&corner.vertex) {
            return Err(TopoMeshError::NotOnBoundary {
                vertex: corner.vertex,
                face: corner.face,
            });
        }
        Ok((corner.vertex, corner.face))
    }
}

impl Manifold for FaceListMesh {
    fn create_point_sphere(&mut self, position: Point3) -> Corner {
        let vertex = self.core.create_vertex(position);
        let face = self.adopt_face(vec![vertex]);
        Corner {
            vertex,
            face,
            edge_in: None,
            edge_out: None,
        }
    }

    fn insert_edge(
        &mut self,
        c1: &Corner,
        c2: &Corner,
    ) -> Result<(FaceId, FaceId), TopoMeshError> {
        let (v1, f1) = self.checked_corner(c1)?;
        let (v2, f2) = self.checked_corner(c2)?;
        if v1 == v2 {
            return Err(TopoMeshError::SelfLoop(v1));
        }

        let result = if f1 == f2 {
            // Cofacial: split the face along the new edge. The two new
            // boundaries are the old one rotated to end with v2, cut after
            // v1, with the far endpoint appended to each half.
            let old = self.boundary(f1)?.clone();
            let rotated = circular::rotated_to_item(&old, &v2)
                .ok_or(TopoMeshError::NotOnBoundary { vertex: v2, face: f1 })?;
            let (half_1, half_2) = circular::split_at_item(&rotated, &v1)
                .ok_or(TopoMeshError::NotOnBoundary { vertex: v1, face: f1 })?;
            let mut new_1 = half_1;
            new_1.push(v2);
            let mut new_2 = half_2;
            new_2.push(v1);
            self.retire_face(f1)?;
            (self.adopt_face(new_1), self.adopt_face(new_2))
        } else {
            // Non-cofacial: merge the two faces. Point-sphere sides
            // contribute their single vertex without a duplicate entry.
            let b1 = self.boundary(f1)?.clone();
            let b2 = self.boundary(f2)?.clone();
            let anchor_2 = circular::previous_item(&b2, &v2)
                .ok_or(TopoMeshError::NotOnBoundary { vertex: v2, face: f2 })?;
            let mut merged = circular::rotated_to_item(&b1, &v1)
                .ok_or(TopoMeshError::NotOnBoundary { vertex: v1, face: f1 })?;
            merged.extend(
                circular::rotated_to_item(&b2, &anchor_2)
                    .ok_or(TopoMeshError::NotOnBoundary { vertex: v2, face: f2 })?,
            );
            if b2.len() > 1 {
                merged.push(v2);
            }
            if b1.len() > 1 {
                merged.push(v1);
            }
            self.retire_face(f1)?;
            self.retire_face(f2)?;
            let merged_face = self.adopt_face(merged);
            (merged_face, merged_face)
        };

        self.core.record_edge(EdgeKey::new(v1, v2));
        Ok(result)
    }

    fn delete_edge(
        &mut self,
        c1: &Corner,
        c2: &Corner,
    ) -> Result<(FaceId, FaceId), TopoMeshError> {
        let (v1, f1) = self.checked_corner(c1)?;
        let (v2, f2) = self.checked_corner(c2)?;
        if !self.core.has_edge(v1, v2) {
            return Err(TopoMeshError::EdgeNotFound(v1, v2));
        }

        let result = if f1 == f2 {
            // Cofacial: the edge is traversed twice by the one face; cutting
            // at both traversals splits it. Each arc ends with a duplicated
            // endpoint to drop, except a length-1 arc, which marks an
            // endpoint left isolated: that endpoint is the trailing vertex
            // of the other arc and becomes a point-sphere.
            let old = self.boundary(f1)?.clone();
            let rotated = circular::rotated_to_pair(&old, (&v1, &v2))
                .ok_or(TopoMeshError::EdgeNotFound(v1, v2))?;
            let (arc_1, arc_2) = circular::split_at_pair(&rotated, (&v2, &v1))
                .ok_or(TopoMeshError::EdgeNotFound(v1, v2))?;
            let last_1 = arc_1.last().copied();
            let last_2 = arc_2.last().copied();
            let new_1 = if arc_1.len() > 1 {
                arc_1[..arc_1.len() - 1].to_vec()
            } else {
                vec![last_2.ok_or(TopoMeshError::EdgeNotFound(v1, v2))?]
            };
            let new_2 = if arc_2.len() > 1 {
                arc_2[..arc_2.len() - 1].to_vec()
            } else {
                vec![last_1.ok_or(TopoMeshError::EdgeNotFound(v1, v2))?]
            };
            self.retire_face(f1)?;
            (self.adopt_face(new_1), self.adopt_face(new_2))
        } else {
            // Non-cofacial: the edge separates two faces; removing it merges
            // them, dropping one duplicate of each endpoint.
            let b1 = self.boundary(f1)?.clone();
            let b2 = self.boundary(f2)?.clone();
            let mut merged = circular::rotated_to_item(&b1, &v1)
                .ok_or(TopoMeshError::NotOnBoundary { vertex: v1, face: f1 })?;
            merged.pop();
            let mut tail = circular::rotated_to_item(&b2, &v2)
                .ok_or(TopoMeshError::NotOnBoundary { vertex: v2, face: f2 })?;
            tail.pop();
            merged.extend(tail);
            self.retire_face(f1)?;
            self.retire_face(f2)?;
            let merged_face = self.adopt_face(merged);
            (merged_face, merged_face)
        };

        self.core.erase_edge(EdgeKey::new(v1, v2))?;
        Ok(result)
    }

    fn corner_at(&self, face: FaceId, vertex: VertexId) -> Result<Corner, TopoMeshError> {
        let boundary = self.boundary(face)?;
        let at = circular::index_of(boundary, &vertex)
            .ok_or(TopoMeshError::NotOnBoundary { vertex, face })?;
        Ok(Self::corner_at_index(face, boundary, at))
    }

    fn vertex_trace(&self, vertex: VertexId) -> Result<Vec<Corner>, TopoMeshError> {
        let rotation = self.rotation_set(vertex)?;
        let start_face = *rotation
            .iter()
            .next()
            .ok_or_else(|| TopoMeshError::InvalidHandle(vertex.to_string()))?;
        let start_boundary = self.boundary(start_face)?;
        if start_boundary.len() == 1 {
            return Ok(vec![Corner {
                vertex,
                face: start_face,
                edge_in: None,
                edge_out: None,
            }]);
        }

        // Walk outgoing half-edges around the vertex: from the corner's
        // outgoing pair (vertex, next), hop to the face carrying the
        // opposite pair (next, vertex) and continue from the occurrence of
        // the vertex reached there.
        let start_at = circular::index_of(start_boundary, &vertex)
            .ok_or(TopoMeshError::NotOnBoundary { vertex, face: start_face })?;
        let start_out = start_boundary[(start_at + 1) % start_boundary.len()];

        let cap = 2 * self.face_count() + 2;
        let mut corners = Vec::new();
        let mut face = start_face;
        let mut at = start_at;
        loop {
            let boundary = self.boundary(face)?;
            corners.push(Self::corner_at_index(face, boundary, at));
            if corners.len() > cap {
                return Err(TopoMeshError::NonManifoldVertex(vertex));
            }
            let out = boundary[(at + 1) % boundary.len()];
            let (next_face, next_at) = self.face_with_directed_pair(out, vertex)?;
            let next_boundary = self.boundary(next_face)?;
            let next_out = next_boundary[(next_at + 1) % next_boundary.len()];
            if next_face == start_face && next_out == start_out {
                break;
            }
            face = next_face;
            at = next_at;
        }
        Ok(corners)
    }

    fn face_trace(&self, face: FaceId) -> Result<Vec<Corner>, TopoMeshError> {
        let boundary = self.boundary(face)?;
        Ok((0..boundary.len())
            .map(|at| Self::corner_at_index(face, boundary, at))
            .collect())
    }

    fn face_boundary(&self, face: FaceId) -> Result<Vec<VertexId>, TopoMeshError> {
        self.boundary(face).cloned()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.core.vertices.iter())
    }

    fn faces(&self) -> Box<dyn Iterator<Item = FaceId> + '_> {
        Box::new(self.core.faces.iter())
    }

    fn position(&self, vertex: VertexId) -> Result<Point3, TopoMeshError> {
        self.core.position(vertex)
    }

    fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.core.has_edge(u, v)
    }

    fn vertex_count(&self) -> usize {
        self.core.vertices.len()
    }

    fn face_count(&self) -> usize {
        self.core.faces.len()
    }
}
