//! Hangar engine crate.
//!
//! Owns the platform + GPU runtime pieces and the procedural mesh core used by
//! the viewer.

pub mod core;
pub mod device;
pub mod window;

pub mod coords;
pub mod logging;
pub mod mesh;
pub mod paint;
pub mod render;
