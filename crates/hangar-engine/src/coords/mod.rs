//! Coordinate types shared across mesh generation and renderers.
//!
//! Model space:
//! - x/y in surface pixels before normalization, origin at the surface center
//! - +X right, +Y up, z passed through to clip space unchanged

mod surface_size;
mod vec3;

pub use surface_size::SurfaceSize;
pub use vec3::Vec3;
