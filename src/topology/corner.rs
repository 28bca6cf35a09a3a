//! Corners and undirected edge keys.
//!
//! A corner is the fundamental addressing unit of the edit operators: the
//! attachment of a face to one occurrence of a vertex on its boundary,
//! together with the two boundary edges meeting there. Corners are ephemeral
//! views computed on demand from the connectivity; they are never stored.

use crate::topology::handles::VertexId;
use serde::{Deserialize, Serialize};

/// Undirected edge identified by its endpoints, stored in canonical order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    a: VertexId,
    b: VertexId,
}

impl EdgeKey {
    /// Builds the canonical key for the edge between `u` and `v`.
    pub fn new(u: VertexId, v: VertexId) -> Self {
        if u <= v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }

    /// Endpoints in canonical order.
    #[inline]
    pub fn endpoints(self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint.
    /// A loop edge (both endpoints equal) reports its single endpoint.
    pub fn other(self, v: VertexId) -> Option<VertexId> {
        if v == self.a {
            Some(self.b)
        } else if v == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}}}", self.a, self.b)
    }
}

/// One attachment of a face to a vertex, with the boundary edges entering
/// and leaving the vertex along the face boundary.
///
/// Both edge slots are `None` exactly when the corner belongs to a point
/// sphere, the degenerate single-vertex single-face mesh that every
/// construction starts from.
///
/// Equality considers only the `(vertex, face)` pair: two corners naming the
/// same attachment compare equal even if their edge context was computed at
/// different times.
#[derive(Copy, Clone, Debug)]
pub struct Corner {
    pub vertex: VertexId,
    pub face: crate::topology::handles::FaceId,
    pub edge_in: Option<EdgeKey>,
    pub edge_out: Option<EdgeKey>,
}

impl PartialEq for Corner {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex && self.face == other.face
    }
}

impl Eq for Corner {}

impl Corner {
    /// True when this corner is the sole corner of a point sphere.
    #[inline]
    pub fn is_point_sphere(&self) -> bool {
        self.edge_in.is_none() && self.edge_out.is_none()
    }

    /// The vertex preceding this corner along the face boundary, if any.
    pub fn previous_vertex(&self) -> Option<VertexId> {
        self.edge_in.and_then(|e| e.other(self.vertex))
    }

    /// The vertex following this corner along the face boundary, if any.
    pub fn next_vertex(&self) -> Option<VertexId> {
        self.edge_out.and_then(|e| e.other(self.vertex))
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.vertex, self.face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::handles::FaceId;

    #[test]
    fn edge_key_is_canonical() {
        let u = VertexId::new(3);
        let v = VertexId::new(7);
        assert_eq!(EdgeKey::new(u, v), EdgeKey::new(v, u));
        assert_eq!(EdgeKey::new(v, u).endpoints(), (u, v));
    }

    #[test]
    fn other_endpoint() {
        let u = VertexId::new(1);
        let v = VertexId::new(2);
        let w = VertexId::new(3);
        let e = EdgeKey::new(u, v);
        assert_eq!(e.other(u), Some(v));
        assert_eq!(e.other(v), Some(u));
        assert_eq!(e.other(w), None);
    }

    #[test]
    fn corner_equality_ignores_edges() {
        let v = VertexId::new(1);
        let w = VertexId::new(2);
        let f = FaceId::new(1);
        let bare = Corner {
            vertex: v,
            face: f,
            edge_in: None,
            edge_out: None,
        };
        let full = Corner {
            vertex: v,
            face: f,
            edge_in: Some(EdgeKey::new(v, w)),
            edge_out: Some(EdgeKey::new(v, w)),
        };
        assert_eq!(bare, full);
        assert!(bare.is_point_sphere());
        assert!(!full.is_point_sphere());
        assert_eq!(full.previous_vertex(), Some(w));
        assert_eq!(full.next_vertex(), Some(w));
    }
}
