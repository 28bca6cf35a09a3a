//! # topomesh
//!
//! topomesh is a topological mesh-editing kernel for closed orientable
//! 2-manifold polygonal meshes. Every mutation goes through two
//! manifold-preserving primitives, `insert_edge` and `delete_edge`, operating
//! on corners (vertex/face attachments), so a mesh can never be edited into a
//! non-manifold state.
//!
//! ## Features
//! - Two interchangeable connectivity encodings behind one [`Manifold`]
//!   trait: face-boundary lists ([`FaceListMesh`]) and edge-adjacency records
//!   ([`EdgeListMesh`])
//! - Corner-addressed edit operators with split/merge duality
//! - Construction of a manifold from an indexed polygon soup with
//!   deferred-retry edge resolution
//! - Refinement operators (edge subdivision, centroid fan triangulation)
//!   composed purely from the edit primitives
//! - Wavefront OBJ import/export
//!
//! ## Determinism
//!
//! Traversals and operators make no random choices: where an arbitrary pick
//! is required (a starting face, a first incident edge) the smallest live
//! handle or the oldest allocation wins, so identical edit sequences always
//! produce identical meshes.
//!
//! ## Usage
//!
//! ```
//! use topomesh::prelude::*;
//!
//! let mut mesh = FaceListMesh::new();
//! let a = mesh.create_point_sphere([0.0, 0.0, 0.0]);
//! let b = mesh.create_point_sphere([1.0, 0.0, 0.0]);
//! let (face, _) = mesh.insert_edge(&a, &b)?;
//! assert_eq!(mesh.face_boundary(face)?.len(), 2);
//! # Ok::<(), topomesh::mesh_error::TopoMeshError>(())
//! ```

pub mod algs;
pub mod geometry;
pub mod io;
pub mod mesh_error;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::construction::{construct, construct_with, ConstructOptions};
    pub use crate::algs::primitives;
    pub use crate::algs::subdivision::{subdivide_edge, triangulate_face};
    pub use crate::geometry::Point3;
    pub use crate::io::obj::{mesh_to_obj, obj_to_mesh};
    pub use crate::mesh_error::TopoMeshError;
    pub use crate::topology::corner::{Corner, EdgeKey};
    pub use crate::topology::edge_list::EdgeListMesh;
    pub use crate::topology::face_list::FaceListMesh;
    pub use crate::topology::handles::{EdgeId, FaceId, Handle, VertexId};
    pub use crate::topology::manifold::Manifold;
}
