//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application: a start hook that runs once with the GPU context, and a paint
//! hook with a per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, StartCtx, WindowCtx};
