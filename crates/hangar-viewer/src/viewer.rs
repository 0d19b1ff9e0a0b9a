use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use hangar_engine::core::{App, AppControl, FrameCtx, StartCtx};
use hangar_engine::device::GpuInit;
use hangar_engine::render::MeshRenderer;
use hangar_engine::window::{Runtime, RuntimeConfig};

use crate::fighter::{build_fighter, FighterConfig};

// ── Viewer ────────────────────────────────────────────────────────────────

/// Builder for the one-shot scene window.
///
/// ```rust,ignore
/// Viewer::new()
///     .title("Hangar")
///     .size(1000.0, 800.0)
///     .run()?;
/// ```
pub struct Viewer {
    title: String,
    width: f64,
    height: f64,
    scene: FighterConfig,
    gpu: GpuInit,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            title: "hangar".to_string(),
            width: 1000.0,
            height: 800.0,
            scene: FighterConfig::default(),
            gpu: GpuInit::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the window size in logical pixels. The window cannot be resized.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn run(self) -> Result<()> {
        let config = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
        };
        Runtime::run(config, self.gpu, SceneApp::new(self.scene))
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

// ── SceneApp ──────────────────────────────────────────────────────────────

/// Builds the mesh once at startup and paints it on every redraw request.
struct SceneApp {
    scene: FighterConfig,
    renderer: MeshRenderer,
}

impl SceneApp {
    fn new(scene: FighterConfig) -> Self {
        Self {
            scene,
            renderer: MeshRenderer::new(),
        }
    }
}

impl App for SceneApp {
    fn on_start(&mut self, ctx: &mut StartCtx<'_, '_>) -> Result<()> {
        // Normalize against the logical size so the scene keeps its
        // proportions on high-DPI displays.
        let size = ctx.logical_size();
        log::info!(
            "surface {}x{} px ({}x{} logical)",
            ctx.surface_size().width,
            ctx.surface_size().height,
            size.width,
            size.height
        );

        let mesh = build_fighter(&self.scene, size).context("failed to build fighter mesh")?;
        self.renderer
            .upload(&ctx.render_ctx(), &mesh)
            .context("failed to upload fighter mesh")?;

        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.frame_index == 0 {
            log::debug!("first paint");
        }

        let renderer = &mut self.renderer;
        ctx.render(self.scene.clear_color, |rctx, target| {
            renderer.render(rctx, target);
        })
    }
}
