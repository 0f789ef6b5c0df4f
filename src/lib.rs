//! Geodesic sphere meshes built by recursive subdivision of an icosahedron.

mod builder;
mod controller;
mod error;
mod index;
mod mesh;
mod shape;
mod subdivision;

pub use builder::{build, build_any, max_depth, triangle_count, vertex_count};
pub use controller::{ControllerParameters, DepthController};
pub use error::BuildError;
pub use index::{Index, IndexWidth};
pub use mesh::{AnyMesh, Mesh};
pub use shape::Icosahedron;
pub use subdivision::{subdivide, EdgeKey, EdgeMidpointCache};
