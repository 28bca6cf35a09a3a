//! Entity bookkeeping shared by both connectivity encodings.
//!
//! `MeshCore` owns the vertex and face registries, the set of undirected
//! edges, and per-vertex coordinates. The encodings layer their own
//! connectivity structures on top and delegate all allocation here.

use crate::geometry::Point3;
use crate::mesh_error::TopoMeshError;
use crate::topology::corner::EdgeKey;
use crate::topology::handles::{FaceId, VertexId};
use crate::topology::registry::HandleRegistry;

#[derive(Clone, Debug, Default)]
pub struct MeshCore {
    pub vertices: HandleRegistry<VertexId>,
    pub faces: HandleRegistry<FaceId>,
    edges: hashbrown::HashSet<EdgeKey>,
    coordinates: hashbrown::HashMap<VertexId, Point3>,
}

impl MeshCore {
    /// Allocates a vertex at `position`.
    pub fn create_vertex(&mut self, position: Point3) -> VertexId {
        let v = self.vertices.allocate();
        self.coordinates.insert(v, position);
        v
    }

    /// Allocates a face.
    pub fn create_face(&mut self) -> FaceId {
        self.faces.allocate()
    }

    /// Retires a face handle.
    pub fn delete_face(&mut self, face: FaceId) -> Result<(), TopoMeshError> {
        self.faces.free(face)
    }

    /// Marks the undirected edge between the endpoints of `key` as present.
    pub fn record_edge(&mut self, key: EdgeKey) {
        self.edges.insert(key);
    }

    /// Removes an edge from the edge set.
    pub fn erase_edge(&mut self, key: EdgeKey) -> Result<(), TopoMeshError> {
        if self.edges.remove(&key) {
            Ok(())
        } else {
            let (u, v) = key.endpoints();
            Err(TopoMeshError::EdgeNotFound(u, v))
        }
    }

    /// True if an edge joins `u` and `v`.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edges.contains(&EdgeKey::new(u, v))
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Coordinates of a live vertex.
    pub fn position(&self, vertex: VertexId) -> Result<Point3, TopoMeshError> {
        if !self.vertices.contains(vertex) {
            return Err(TopoMeshError::InvalidHandle(vertex.to_string()));
        }
        self.coordinates
            .get(&vertex)
            .copied()
            .ok_or_else(|| TopoMeshError::InvalidHandle(vertex.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_set_is_undirected() {
        let mut core = MeshCore::default();
        let u = core.create_vertex([0.0; 3]);
        let v = core.create_vertex([1.0, 0.0, 0.0]);
        core.record_edge(EdgeKey::new(u, v));
        core.record_edge(EdgeKey::new(v, u));
        assert!(core.has_edge(v, u));
        assert_eq!(core.edge_count(), 1);
        core.erase_edge(EdgeKey::new(v, u)).unwrap();
        assert!(!core.has_edge(u, v));
        assert_eq!(core.edge_count(), 0);
        assert!(matches!(
            core.erase_edge(EdgeKey::new(u, v)),
            Err(TopoMeshError::EdgeNotFound(_, _))
        ));
    }

    #[test]
    fn position_of_dead_vertex_fails() {
        let mut core = MeshCore::default();
        let v = core.create_vertex([1.0, 2.0, 3.0]);
        assert_eq!(core.position(v).unwrap(), [1.0, 2.0, 3.0]);
        core.vertices.free(v).unwrap();
        assert!(core.position(v).is_err());
    }
}
