//! The fighter scene: a pseudosphere body, a spherical lens and two flat wings.

mod pseudosphere;
mod sphere;
mod wing;

pub use pseudosphere::Pseudosphere;
pub use sphere::Sphere;
pub use wing::Wing;

use hangar_engine::coords::SurfaceSize;
use hangar_engine::mesh::{emit_surface, Mesh, MeshBuilder, MeshError};
use hangar_engine::paint::Color;

/// Wireframe color shared by every shape.
pub const LINE_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);

/// Every constant of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct FighterConfig {
    pub body: Pseudosphere,
    pub lens: Sphere,
    pub left_wing: Wing,
    pub right_wing: Wing,
    pub clear_color: Color,
}

impl Default for FighterConfig {
    fn default() -> Self {
        Self {
            body: Pseudosphere::default(),
            lens: Sphere::default(),
            left_wing: Wing::left(),
            right_wing: Wing::right(),
            clear_color: Color::black(),
        }
    }
}

/// Builds the fighter mesh normalized against `surface`.
///
/// Shapes are emitted in a fixed order (body, lens, left wing, right wing);
/// each one starts at the vertex count left by the previous one.
pub fn build_fighter(config: &FighterConfig, surface: SurfaceSize) -> Result<Mesh, MeshError> {
    let mut builder = MeshBuilder::new(surface)?;

    emit_surface(&mut builder, &config.body)?;
    emit_surface(&mut builder, &config.lens)?;
    config.left_wing.emit(&mut builder)?;
    config.right_wing.emit(&mut builder)?;

    let mesh = builder.finish();
    mesh.validate()?;

    log::info!(
        "fighter mesh: {} vertices, {} triangles, {} lines ({}x{} surface)",
        mesh.vertex_count(),
        mesh.triangle_indices().len() / 3,
        mesh.line_indices().len() / 2,
        mesh.surface().width,
        mesh.surface().height,
    );

    Ok(mesh)
}
