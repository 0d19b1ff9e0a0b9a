use std::f64::consts::PI;

use hangar_engine::coords::Vec3;
use hangar_engine::mesh::{GridDomain, MeshError, ParametricSurface, SurfacePoint};
use hangar_engine::paint::{shade_from_term, Color};

/// Tractrix surface of revolution used for the fighter's body.
///
/// The axis of revolution runs along x. `ln(tan(v / 2))` diverges at `v = 0`
/// and is undefined from `v = π` on, so the `v` range must lie strictly
/// inside `(0, π)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pseudosphere {
    pub domain: GridDomain,
    pub scale: f64,
    pub offset: Vec3,
    pub fill: Color,
    pub line: Color,
}

impl Pseudosphere {
    pub const NAME: &'static str = "pseudosphere";
}

impl Default for Pseudosphere {
    fn default() -> Self {
        Self {
            domain: GridDomain {
                u_min: -PI,
                u_max: PI,
                u_steps: 14,
                v_min: 0.10,
                v_max: 3.05,
                v_steps: 10,
            },
            scale: 100.0,
            offset: Vec3::new(0.0, 0.0, 0.6),
            fill: Color::new(0.8, 0.8, 0.8, 1.0),
            line: super::LINE_COLOR,
        }
    }
}

impl ParametricSurface for Pseudosphere {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn domain(&self) -> GridDomain {
        self.domain
    }

    fn eval(&self, u: f64, v: f64) -> SurfacePoint {
        let ring = u.sin() * v.sin();
        let position = Vec3::new(
            v.cos() + (v / 2.0).tan().ln() * self.scale,
            u.cos() * v.sin() * self.scale,
            ring,
        ) + self.offset;

        SurfacePoint {
            position,
            shade: shade_from_term(ring),
        }
    }

    fn fill(&self) -> Color {
        self.fill
    }

    fn line(&self) -> Color {
        self.line
    }

    fn check_domain(&self) -> Result<(), MeshError> {
        let (v_min, v_max) = (self.domain.v_min, self.domain.v_max);
        if v_min.is_nan() || v_min <= 0.0 {
            return Err(MeshError::Singularity { shape: Self::NAME, v: v_min });
        }
        if v_max.is_nan() || v_max >= PI {
            return Err(MeshError::Singularity { shape: Self::NAME, v: v_max });
        }
        Ok(())
    }
}
