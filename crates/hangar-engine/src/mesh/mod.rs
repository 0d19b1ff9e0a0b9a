//! Procedural mesh generation.
//!
//! Shapes are sampled on CPU into a [`MeshBuilder`], which freezes into an
//! immutable [`Mesh`] of flat attribute and index sequences:
//! - positions (3 floats per vertex, x/y normalized by the surface size)
//! - fill colors and line colors (4 floats per vertex each)
//! - triangle indices (stride 3) and line indices (stride 2)

mod builder;
mod error;
mod mesh;
pub mod surface;
pub mod topology;

pub use builder::{MeshBuilder, ShapeSpan};
pub use error::MeshError;
pub use mesh::Mesh;
pub use surface::{emit_surface, GridDomain, ParametricSurface, SurfacePoint};
pub use topology::{grid_cell, GridCell};
