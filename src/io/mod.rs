//! Mesh import/export codecs.

pub mod obj;

pub use obj::{mesh_to_obj, obj_to_mesh};
