//! Procedural latitude/longitude sphere meshes for the orrery.
//!
//! [`generate_sphere`] tessellates a sphere into a non-indexed triangle list
//! whose four parallel streams (positions, normals, UVs, colors) live in a
//! [`Mesh`]. [`SphereVertex`] is the interleaved layout handed to a GPU.

mod error;
mod mesh;
mod sphere;
mod vertex;

pub use error::MeshError;
pub use mesh::{DEFAULT_COLOR, Mesh};
pub use sphere::{
    DEFAULT_SECTOR_COUNT, DEFAULT_STACK_COUNT, MIN_SECTOR_COUNT, MIN_STACK_COUNT,
    SphereMeshGenerator, generate_sphere,
};
pub use vertex::SphereVertex;
