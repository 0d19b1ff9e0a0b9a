//! Color model shared between mesh generation and renderers.

pub mod color;
pub mod shade;

pub use color::Color;
pub use shade::shade_from_term;
