//! Mesh connectivity: handles, corners, the editing trait and its two
//! encodings.

pub mod circular;
pub mod core;
pub mod corner;
pub mod edge_list;
pub mod face_list;
pub mod handles;
pub mod manifold;
pub mod registry;

pub use corner::{Corner, EdgeKey};
pub use edge_list::EdgeListMesh;
pub use face_list::FaceListMesh;
pub use handles::{EdgeId, FaceId, Handle, VertexId};
pub use manifold::Manifold;
