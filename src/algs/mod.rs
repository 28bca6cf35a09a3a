//! Algorithms layered on top of the edit primitives.

pub mod construction;
pub mod primitives;
pub mod subdivision;

pub use construction::{construct, construct_with, ConstructOptions};
pub use subdivision::{subdivide_edge, triangulate_face};
