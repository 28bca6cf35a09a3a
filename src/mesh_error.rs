//! `TopoMeshError`: unified error type for topomesh public APIs.
//!
//! Every fallible operation in the crate reports through this enum so callers
//! can match on one taxonomy. All variants are terminal for the operation that
//! raised them; the library never retries internally (the construction
//! worklist's postponement loop is part of the algorithm, not error recovery).

use crate::topology::handles::{FaceId, VertexId};
use thiserror::Error;

/// Unified error type for topomesh operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopoMeshError {
    /// Operated on a freed or never-allocated handle. Indicates a caller bug
    /// or prior invariant corruption, never a recoverable condition.
    #[error("unknown or freed handle `{0}`")]
    InvalidHandle(String),
    /// Asked for the corner of a vertex on a face whose boundary does not
    /// contain it.
    #[error("vertex `{vertex}` is not on the boundary of face `{face}`")]
    NotOnBoundary { vertex: VertexId, face: FaceId },
    /// Edge endpoints must be distinct.
    #[error("edge endpoints must be distinct, got `{0}` on both sides")]
    SelfLoop(VertexId),
    /// Deletion of an edge that is not present in the mesh.
    #[error("no edge between `{0}` and `{1}`")]
    EdgeNotFound(VertexId, VertexId),
    /// A vertex rotation failed to close within its iteration bound.
    #[error("rotation around vertex `{0}` does not close (non-manifold vertex)")]
    NonManifoldVertex(VertexId),
    /// A face boundary failed to close within its iteration bound.
    #[error("boundary of face `{0}` does not close (non-manifold face)")]
    NonManifoldFace(FaceId),
    /// Mesh construction stalled: the input admits more than one 2-manifold
    /// interpretation and no default resolution is defined.
    #[error(
        "construction stalled after {null_passes} null passes with {remaining} unresolved edges"
    )]
    AmbiguousManifold { null_passes: u32, remaining: usize },
    /// Whole-mesh validation found unequal rotation and boundary slot totals.
    #[error(
        "corner bookkeeping out of balance: {rotations} rotation slots vs {boundaries} boundary slots"
    )]
    UnbalancedCorners { rotations: usize, boundaries: usize },
    /// A face in a construction input referenced a point index past the end
    /// of the point list.
    #[error("face references point index {0}, but only {1} points were given")]
    PointIndexOutOfRange(usize, usize),
    /// Malformed OBJ input.
    #[error("OBJ parse error: {0}")]
    ObjParse(String),
}
