//! Edge-adjacency connectivity encoding.
//!
//! Edges are first-class records. Each record stores its two endpoint
//! vertices, the incident face on each side, and, per endpoint, the next
//! edge met when rotating around that endpoint. Face boundaries are not
//! stored; both traces are recovered by next-pointer hopping. Point-spheres
//! have no edge to hang off, so their vertex/face pairing is kept in a pair
//! of side maps until a first edge arrives.

use crate::geometry::Point3;
use crate::mesh_error::TopoMeshError;
use crate::topology::core::MeshCore;
use crate::topology::corner::{Corner, EdgeKey};
use crate::topology::handles::{EdgeId, FaceId, VertexId};
use crate::topology::manifold::Manifold;
use crate::topology::registry::HandleRegistry;

#[derive(Clone, Debug)]
struct EdgeRecord {
    verts: [VertexId; 2],
    faces: [FaceId; 2],
    next: [EdgeId; 2],
}

impl EdgeRecord {
    fn end_of(&self, v: VertexId) -> Option<usize> {
        if self.verts[0] == v {
            Some(0)
        } else if self.verts[1] == v {
            Some(1)
        } else {
            None
        }
    }

    fn key(&self) -> EdgeKey {
        EdgeKey::new(self.verts[0], self.verts[1])
    }
}

/// One end of one edge record: the corner whose vertex is `verts[end]`,
/// whose incoming edge is the record itself and whose outgoing edge is
/// `next[end]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Side {
    edge: EdgeId,
    end: usize,
}

/// Where a corner lives structurally.
enum Site {
    Sphere,
    Wedge(Side),
}

#[derive(Clone, Debug, Default)]
pub struct EdgeListMesh {
    core: MeshCore,
    edge_ids: HandleRegistry<EdgeId>,
    records: hashbrown::HashMap<EdgeId, EdgeRecord>,
    // Point-sphere pairings, removed as soon as the vertex gains an edge.
    lone_faces: hashbrown::HashMap<VertexId, FaceId>,
    lone_vertices: hashbrown::HashMap<FaceId, VertexId>,
}

impl EdgeListMesh {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, edge: EdgeId) -> Result<&EdgeRecord, TopoMeshError> {
        self.records
            .get(&edge)
            .ok_or_else(|| TopoMeshError::InvalidHandle(edge.to_string()))
    }

    fn side_corner(&self, side: Side) -> Result<Corner, TopoMeshError> {
        let rec = self.record(side.edge)?;
        let out = self.record(rec.next[side.end])?.key();
        Ok(Corner {
            vertex: rec.verts[side.end],
            face: rec.faces[side.end],
            edge_in: Some(rec.key()),
            edge_out: Some(out),
        })
    }

    /// Next side along the face boundary: hop to the outgoing edge and land
    /// on its far endpoint.
    fn boundary_successor(&self, side: Side) -> Result<Side, TopoMeshError> {
        let rec = self.record(side.edge)?;
        let vertex = rec.verts[side.end];
        let out = rec.next[side.end];
        let end = self
            .record(out)?
            .end_of(vertex)
            .ok_or(TopoMeshError::NonManifoldVertex(vertex))?;
        Ok(Side {
            edge: out,
            end: 1 - end,
        })
    }

    /// Next side rotating around the side's vertex.
    fn rotation_successor(&self, side: Side) -> Result<Side, TopoMeshError> {
        let rec = self.record(side.edge)?;
        let vertex = rec.verts[side.end];
        let out = rec.next[side.end];
        let end = self
            .record(out)?
            .end_of(vertex)
            .ok_or(TopoMeshError::NonManifoldVertex(vertex))?;
        Ok(Side { edge: out, end })
    }

    /// The side whose next-pointer leads to `side` in its vertex rotation.
    /// Equals `side` itself when the vertex has a single incident edge.
    fn rotation_predecessor(&self, side: Side) -> Result<Side, TopoMeshError> {
        let vertex = self.record(side.edge)?.verts[side.end];
        let cap = 2 * self.records.len() + 2;
        let mut current = side;
        for _ in 0..cap {
            let next = self.rotation_successor(current)?;
            if next == side {
                return Ok(current);
            }
            current = next;
        }
        Err(TopoMeshError::NonManifoldVertex(vertex))
    }

    /// First side incident to `vertex`, scanning records in allocation order.
    fn first_incident(&self, vertex: VertexId) -> Option<Side> {
        for edge in self.edge_ids.iter() {
            if let Some(end) = self.records.get(&edge).and_then(|r| r.end_of(vertex)) {
                return Some(Side { edge, end });
            }
        }
        None
    }

    fn locate(&self, corner: &Corner) -> Result<Site, TopoMeshError> {
        if !self.core.vertices.contains(corner.vertex) {
            return Err(TopoMeshError::InvalidHandle(corner.vertex.to_string()));
        }
        if !self.core.faces.contains(corner.face) {
            return Err(TopoMeshError::InvalidHandle(corner.face.to_string()));
        }
        if self.lone_faces.get(&corner.vertex) == Some(&corner.face) {
            return Ok(Site::Sphere);
        }
        for edge in self.edge_ids.iter() {
            if let Some(rec) = self.records.get(&edge) {
                for end in 0..2 {
                    if rec.verts[end] == corner.vertex && rec.faces[end] == corner.face {
                        return Ok(Site::Wedge(Side { edge, end }));
                    }
                }
            }
        }
        Err(TopoMeshError::NotOnBoundary {
            vertex: corner.vertex,
            face: corner.face,
        })
    }

    /// Walks a face cycle from `start`, stamping `face` on every side.
    fn assign_face_cycle(&mut self, start: Side, face: FaceId) -> Result<(), TopoMeshError> {
        let cap = 2 * self.records.len() + 2;
        let mut current = start;
        for _ in 0..cap {
            if let Some(rec) = self.records.get_mut(&current.edge) {
                rec.faces[current.end] = face;
            }
            let next = self.boundary_successor(current)?;
            if next == start {
                return Ok(());
            }
            current = next;
        }
        Err(TopoMeshError::NonManifoldFace(face))
    }

    fn replace_face(&mut self, from: FaceId, to: FaceId) {
        for rec in self.records.values_mut() {
            for end in 0..2 {
                if rec.faces[end] == from {
                    rec.faces[end] = to;
                }
            }
        }
    }

    /// Splices a fresh edge into the rotation at one corner site. Returns
    /// the new edge's next-pointer for that endpoint.
    fn splice(&mut self, site: &Site, new_edge: EdgeId) -> Result<EdgeId, TopoMeshError> {
        match site {
            Site::Sphere => Ok(new_edge),
            Site::Wedge(side) => {
                let rec = self
                    .records
                    .get_mut(&side.edge)
                    .ok_or_else(|| TopoMeshError::InvalidHandle(side.edge.to_string()))?;
                let old = rec.next[side.end];
                rec.next[side.end] = new_edge;
                Ok(old)
            }
        }
    }

    /// Removes `edge` from the rotation at its `end` endpoint. Returns true
    /// if the endpoint is left with no incident edge.
    fn unlink(&mut self, edge: EdgeId, end: usize) -> Result<bool, TopoMeshError> {
        let side = Side { edge, end };
        let out = self.record(edge)?.next[end];
        if out == edge {
            return Ok(true);
        }
        let prev = self.rotation_predecessor(side)?;
        if let Some(rec) = self.records.get_mut(&prev.edge) {
            rec.next[prev.end] = out;
        }
        Ok(false)
    }

    fn drop_lone_pair(&mut self, vertex: VertexId) {
        if let Some(face) = self.lone_faces.remove(&vertex) {
            self.lone_vertices.remove(&face);
        }
    }

    fn sphere_corner(&self, vertex: VertexId, face: FaceId) -> Corner {
        Corner {
            vertex,
            face,
            edge_in: None,
            edge_out: None,
        }
    }
}

impl Manifold for EdgeListMesh {
    fn create_point_sphere(&mut self, position: Point3) -> Corner {
        let vertex = self.core.create_vertex(position);
        let face = self.core.create_face();
        self.lone_faces.insert(vertex, face);
        self.lone_vertices.insert(face, vertex);
        self.sphere_corner(vertex, face)
    }

    fn insert_edge(
        &mut self,
        c1: &Corner,
        c2: &Corner,
    ) -> Result<(FaceId, FaceId), TopoMeshError> {
        let (v1, v2) = (c1.vertex, c2.vertex);
        if v1 == v2 {
            return Err(TopoMeshError::SelfLoop(v1));
        }
        let site_1 = self.locate(c1)?;
        let site_2 = self.locate(c2)?;

        let edge = self.edge_ids.allocate();
        let next_1 = self.splice(&site_1, edge)?;
        let next_2 = self.splice(&site_2, edge)?;
        self.records.insert(
            edge,
            EdgeRecord {
                verts: [v1, v2],
                faces: [c1.face, c2.face],
                next: [next_1, next_2],
            },
        );

        let result = if c1.face == c2.face {
            // Splitting: the new edge cuts the one face cycle in two. The
            // side arriving at c2's vertex seeds the first new face.
            let old_face = c1.face;
            let face_1 = self.core.create_face();
            let face_2 = self.core.create_face();
            self.assign_face_cycle(Side { edge, end: 1 }, face_1)?;
            self.assign_face_cycle(Side { edge, end: 0 }, face_2)?;
            self.core.delete_face(old_face)?;
            (face_1, face_2)
        } else {
            let merged = self.core.create_face();
            self.replace_face(c1.face, merged);
            self.replace_face(c2.face, merged);
            if matches!(site_1, Site::Sphere) {
                self.drop_lone_pair(v1);
            }
            if matches!(site_2, Site::Sphere) {
                self.drop_lone_pair(v2);
            }
            self.core.delete_face(c1.face)?;
            self.core.delete_face(c2.face)?;
            (merged, merged)
        };

        self.core.record_edge(EdgeKey::new(v1, v2));
        Ok(result)
    }

    fn delete_edge(
        &mut self,
        c1: &Corner,
        c2: &Corner,
    ) -> Result<(FaceId, FaceId), TopoMeshError> {
        let (v1, v2) = (c1.vertex, c2.vertex);
        if !self.core.has_edge(v1, v2) {
            return Err(TopoMeshError::EdgeNotFound(v1, v2));
        }

        // Find the record joining the two corners. Each corner may name
        // either side of the edge, so a swapped face match is accepted when
        // no exact one exists.
        let mut exact = None;
        let mut swapped = None;
        for edge in self.edge_ids.iter() {
            if let Some(rec) = self.records.get(&edge) {
                if let Some(end_1) = rec.end_of(v1) {
                    if rec.verts[1 - end_1] != v2 {
                        continue;
                    }
                    if rec.faces[end_1] == c1.face && rec.faces[1 - end_1] == c2.face {
                        exact = Some((edge, end_1));
                        break;
                    }
                    if swapped.is_none()
                        && rec.faces[end_1] == c2.face
                        && rec.faces[1 - end_1] == c1.face
                    {
                        swapped = Some((edge, end_1));
                    }
                }
            }
        }
        let (edge, end_1) = exact
            .or(swapped)
            .ok_or(TopoMeshError::EdgeNotFound(v1, v2))?;
        let end_2 = 1 - end_1;
        let rec = self.record(edge)?.clone();
        let cofacial = rec.faces[0] == rec.faces[1];

        let prev_1 = self.rotation_predecessor(Side { edge, end: end_1 })?;
        let prev_2 = self.rotation_predecessor(Side { edge, end: end_2 })?;
        let isolated_1 = self.unlink(edge, end_1)?;
        let isolated_2 = self.unlink(edge, end_2)?;
        self.records.remove(&edge);
        self.edge_ids.free(edge)?;

        let result = if cofacial {
            // Splitting: each endpoint seeds one of the two faces; an
            // endpoint stripped of its last edge becomes a point-sphere.
            let face_1 = self.core.create_face();
            if isolated_2 {
                self.lone_faces.insert(v2, face_1);
                self.lone_vertices.insert(face_1, v2);
            } else {
                self.assign_face_cycle(prev_2, face_1)?;
            }
            let face_2 = self.core.create_face();
            if isolated_1 {
                self.lone_faces.insert(v1, face_2);
                self.lone_vertices.insert(face_2, v1);
            } else {
                self.assign_face_cycle(prev_1, face_2)?;
            }
            self.core.delete_face(rec.faces[0])?;
            (face_1, face_2)
        } else {
            let merged = self.core.create_face();
            self.replace_face(rec.faces[end_1], merged);
            self.replace_face(rec.faces[end_2], merged);
            self.core.delete_face(rec.faces[end_1])?;
            self.core.delete_face(rec.faces[end_2])?;
            (merged, merged)
        };

        let key = EdgeKey::new(v1, v2);
        if !self.records.values().any(|r| r.key() == key) {
            self.core.erase_edge(key)?;
        }
        Ok(result)
    }

    fn corner_at(&self, face: FaceId, vertex: VertexId) -> Result<Corner, TopoMeshError> {
        match self.locate(&self.sphere_corner(vertex, face))? {
            Site::Sphere => Ok(self.sphere_corner(vertex, face)),
            Site::Wedge(side) => self.side_corner(side),
        }
    }

    fn vertex_trace(&self, vertex: VertexId) -> Result<Vec<Corner>, TopoMeshError> {
        if !self.core.vertices.contains(vertex) {
            return Err(TopoMeshError::InvalidHandle(vertex.to_string()));
        }
        if let Some(&face) = self.lone_faces.get(&vertex) {
            return Ok(vec![self.sphere_corner(vertex, face)]);
        }
        let start = self
            .first_incident(vertex)
            .ok_or(TopoMeshError::NonManifoldVertex(vertex))?;
        let cap = 2 * self.records.len() + 2;
        let mut corners = Vec::new();
        let mut current = start;
        loop {
            corners.push(self.side_corner(current)?);
            if corners.len() > cap {
                return Err(TopoMeshError::NonManifoldVertex(vertex));
            }
            current = self.rotation_successor(current)?;
            if current == start {
                break;
            }
        }
        Ok(corners)
    }

    fn face_trace(&self, face: FaceId) -> Result<Vec<Corner>, TopoMeshError> {
        if !self.core.faces.contains(face) {
            return Err(TopoMeshError::InvalidHandle(face.to_string()));
        }
        if let Some(&vertex) = self.lone_vertices.get(&face) {
            return Ok(vec![self.sphere_corner(vertex, face)]);
        }
        let mut start = None;
        for edge in self.edge_ids.iter() {
            if let Some(rec) = self.records.get(&edge) {
                if let Some(end) = (0..2).find(|&end| rec.faces[end] == face) {
                    start = Some(Side { edge, end });
                    break;
                }
            }
        }
        let start = start.ok_or(TopoMeshError::NonManifoldFace(face))?;
        let cap = 2 * self.records.len() + 2;
        let mut corners = Vec::new();
        let mut current = start;
        loop {
            corners.push(self.side_corner(current)?);
            if corners.len() > cap {
                return Err(TopoMeshError::NonManifoldFace(face));
            }
            current = self.boundary_successor(current)?;
            if current == start {
                break;
            }
        }
        Ok(corners)
    }

    fn face_boundary(&self, face: FaceId) -> Result<Vec<VertexId>, TopoMeshError> {
        Ok(self.face_trace(face)?.into_iter().map(|c| c.vertex).collect())
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

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> (EdgeListMesh, [VertexId; 3]) {
        let mut mesh = EdgeListMesh::new();
        let a = mesh.create_point_sphere([0.0, 0.0, 0.0]);
        let b = mesh.create_point_sphere([1.0, 0.0, 0.0]);
        let c = mesh.create_point_sphere([0.0, 1.0, 0.0]);
        let (f, _) = mesh.insert_edge(&a, &b).unwrap();
        let corner_b = mesh.corner_at(f, b.vertex).unwrap();
        let (g, _) = mesh.insert_edge(&corner_b, &c).unwrap();
        let corner_c = mesh.corner_at(g, c.vertex).unwrap();
        let corner_a = mesh.corner_at(g, a.vertex).unwrap();
        mesh.insert_edge(&corner_c, &corner_a).unwrap();
        (mesh, [a.vertex, b.vertex, c.vertex])
    }

    #[test]
    fn point_sphere_shape() {
        let mut mesh = EdgeListMesh::new();
        let c = mesh.create_point_sphere([0.0; 3]);
        assert!(c.is_point_sphere());
        assert_eq!(mesh.vertex_trace(c.vertex).unwrap(), vec![c]);
        assert_eq!(mesh.face_trace(c.face).unwrap(), vec![c]);
        assert_eq!(mesh.face_boundary(c.face).unwrap(), vec![c.vertex]);
    }

    #[test]
    fn two_sphere_merge_has_no_duplicates() {
        let mut mesh = EdgeListMesh::new();
        let a = mesh.create_point_sphere([0.0; 3]);
        let b = mesh.create_point_sphere([1.0, 0.0, 0.0]);
        let (f, g) = mesh.insert_edge(&a, &b).unwrap();
        assert_eq!(f, g);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.face_boundary(f).unwrap(), vec![a.vertex, b.vertex]);
        assert!(mesh.has_edge(b.vertex, a.vertex));
    }

    #[test]
    fn closing_a_triangle_yields_two_faces() {
        let (mesh, [a, b, c]) = triangle_mesh();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 2);
        for face in mesh.faces().collect::<Vec<_>>() {
            assert_eq!(mesh.face_boundary(face).unwrap().len(), 3);
        }
        for vertex in [a, b, c] {
            assert_eq!(mesh.vertex_trace(vertex).unwrap().len(), 2);
        }
        assert!(mesh.has_edge(a, b));
        assert!(mesh.has_edge(b, c));
        assert!(mesh.has_edge(c, a));
        mesh.validate().unwrap();
    }

    #[test]
    fn deleting_a_dangling_edge_restores_the_sphere() {
        let mut mesh = EdgeListMesh::new();
        let a = mesh.create_point_sphere([0.0; 3]);
        let b = mesh.create_point_sphere([1.0, 0.0, 0.0]);
        let (f, _) = mesh.insert_edge(&a, &b).unwrap();
        let c = mesh.create_point_sphere([2.0, 0.0, 0.0]);
        let corner_b = mesh.corner_at(f, b.vertex).unwrap();
        let (g, _) = mesh.insert_edge(&corner_b, &c).unwrap();

        let d1 = mesh.corner_at(g, b.vertex).unwrap();
        let d2 = mesh.corner_at(g, c.vertex).unwrap();
        let (h1, h2) = mesh.delete_edge(&d1, &d2).unwrap();
        assert_ne!(h1, h2);
        let mut boundaries = vec![
            mesh.face_boundary(h1).unwrap(),
            mesh.face_boundary(h2).unwrap(),
        ];
        boundaries.sort_by_key(|b| b.len());
        assert_eq!(boundaries[0], vec![c.vertex]);
        assert_eq!(boundaries[1].len(), 2);
        assert!(!mesh.has_edge(b.vertex, c.vertex));
        assert!(mesh.has_edge(a.vertex, b.vertex));
        mesh.validate().unwrap();
    }

    #[test]
    fn deleting_the_only_edge_restores_both_spheres() {
        let mut mesh = EdgeListMesh::new();
        let a = mesh.create_point_sphere([0.0; 3]);
        let b = mesh.create_point_sphere([1.0, 0.0, 0.0]);
        let (f, _) = mesh.insert_edge(&a, &b).unwrap();
        let c1 = mesh.corner_at(f, a.vertex).unwrap();
        let c2 = mesh.corner_at(f, b.vertex).unwrap();
        let (h1, h2) = mesh.delete_edge(&c1, &c2).unwrap();
        let mut singles = vec![
            mesh.face_boundary(h1).unwrap(),
            mesh.face_boundary(h2).unwrap(),
        ];
        singles.sort();
        let mut expected = vec![vec![a.vertex], vec![b.vertex]];
        expected.sort();
        assert_eq!(singles, expected);
        assert_eq!(mesh.face_count(), 2);
        assert!(!mesh.has_edge(a.vertex, b.vertex));
    }

    #[test]
    fn missing_edge_reports_edge_not_found() {
        let mut mesh = EdgeListMesh::new();
        let a = mesh.create_point_sphere([0.0; 3]);
        let b = mesh.create_point_sphere([1.0, 0.0, 0.0]);
        assert_eq!(
            mesh.delete_edge(&a, &b),
            Err(TopoMeshError::EdgeNotFound(a.vertex, b.vertex))
        );
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut mesh = EdgeListMesh::new();
        let a = mesh.create_point_sphere([0.0; 3]);
        assert_eq!(
            mesh.insert_edge(&a, &a),
            Err(TopoMeshError::SelfLoop(a.vertex))
        );
    }
}
