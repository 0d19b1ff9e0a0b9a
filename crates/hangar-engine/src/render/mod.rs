//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! [`RenderTarget`] supplied by the frame context.
//!
//! Convention:
//! - CPU geometry arrives in clip space (x/y already normalized).
//! - z uses the GL range `[-1, 1]`; shaders remap it to wgpu's `[0, 1]`.

mod ctx;
pub mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
