use std::f64::consts::TAU;

use hangar_engine::coords::Vec3;
use hangar_engine::mesh::{GridDomain, ParametricSurface, SurfacePoint};
use hangar_engine::paint::{shade_from_term, Color};

/// Sphere used for the cockpit lens.
///
/// Only x and y are scaled; z stays in `[-1, 1]` so it maps straight onto
/// the clip-space depth range.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Steps along both `u` and `v`.
    pub resolution: u32,
    pub scale: f64,
    pub offset: Vec3,
    pub fill: Color,
    pub line: Color,
}

impl Sphere {
    pub const NAME: &'static str = "sphere";
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            resolution: 16,
            scale: 80.0,
            offset: Vec3::zero(),
            fill: Color::new(0.7, 0.7, 0.9, 1.0),
            line: super::LINE_COLOR,
        }
    }
}

impl ParametricSurface for Sphere {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn domain(&self) -> GridDomain {
        GridDomain {
            u_min: 0.0,
            u_max: TAU,
            u_steps: self.resolution,
            v_min: 0.0,
            v_max: TAU,
            v_steps: self.resolution,
        }
    }

    fn eval(&self, u: f64, v: f64) -> SurfacePoint {
        let position = Vec3::new(
            self.scale * u.sin() * v.sin(),
            self.scale * u.cos() * v.sin(),
            v.cos(),
        ) + self.offset;

        SurfacePoint {
            position,
            shade: shade_from_term(v.cos()),
        }
    }

    fn fill(&self) -> Color {
        self.fill
    }

    fn line(&self) -> Color {
        self.line
    }
}
