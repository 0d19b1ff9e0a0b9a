//! Parametric surface sampling.

use crate::coords::Vec3;
use crate::paint::Color;

use super::topology::grid_cell;
use super::{MeshBuilder, MeshError, ShapeSpan};

/// Sampling grid over the `(u, v)` parameter plane.
///
/// `u` is sampled at `u_steps` columns starting at `u_min` with step
/// `(u_max - u_min) / u_steps`; `u_max` itself is not sampled because the
/// last column connects back to the first. `v` is sampled at `v_steps + 1`
/// rows covering both endpoints.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridDomain {
    pub u_min: f64,
    pub u_max: f64,
    pub u_steps: u32,
    pub v_min: f64,
    pub v_max: f64,
    pub v_steps: u32,
}

impl GridDomain {
    #[inline]
    pub fn delta_u(&self) -> f64 {
        (self.u_max - self.u_min) / self.u_steps as f64
    }

    #[inline]
    pub fn delta_v(&self) -> f64 {
        (self.v_max - self.v_min) / self.v_steps as f64
    }

    /// Vertices per row (also the row stride used by the topology).
    #[inline]
    pub fn columns(&self) -> u32 {
        self.u_steps
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.v_steps + 1
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.rows() * self.columns()
    }

    #[inline]
    pub fn cell_count(&self) -> u32 {
        self.v_steps * self.u_steps
    }

    /// Parameter values at row `i`, column `j`.
    #[inline]
    pub fn at(&self, i: u32, j: u32) -> (f64, f64) {
        (
            self.u_min + j as f64 * self.delta_u(),
            self.v_min + i as f64 * self.delta_v(),
        )
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.u_steps == 0 || self.v_steps == 0
    }
}

/// One evaluated point of a surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfacePoint {
    /// Position in surface pixels (before normalization).
    pub position: Vec3,
    /// Factor in `[0, 1]` applied to the fill color.
    pub shade: f64,
}

/// A surface defined by a mapping from the parameter plane to model space.
pub trait ParametricSurface {
    /// Short name used for logging and span lookup.
    fn name(&self) -> &'static str;

    fn domain(&self) -> GridDomain;

    /// Evaluates the mapping at `(u, v)`.
    fn eval(&self, u: f64, v: f64) -> SurfacePoint;

    /// Base fill color before shading.
    fn fill(&self) -> Color;

    fn line(&self) -> Color;

    /// Rejects domains on which the mapping is undefined.
    fn check_domain(&self) -> Result<(), MeshError> {
        Ok(())
    }
}

/// Samples `surface` over its domain and appends the result to `builder`.
///
/// Vertices are emitted row by row. Every row except the last starts one row
/// of cells; columns wrap so the surface closes along `u`.
pub fn emit_surface<S>(builder: &mut MeshBuilder, surface: &S) -> Result<ShapeSpan, MeshError>
where
    S: ParametricSurface + ?Sized,
{
    let domain = surface.domain();
    if domain.is_empty() {
        return Err(MeshError::EmptyDomain { shape: surface.name() });
    }
    surface.check_domain()?;

    let fill = surface.fill();
    let line = surface.line();

    builder.reserve(domain.vertex_count(), domain.cell_count());
    builder.shape(surface.name(), |b, index_offset| {
        for i in 0..domain.rows() {
            for j in 0..domain.columns() {
                let (u, v) = domain.at(i, j);
                let p = surface.eval(u, v);
                b.push_vertex(p.position, fill.shaded(p.shade), line);

                if i < domain.v_steps {
                    b.push_cell(grid_cell(i, j, domain.columns(), index_offset));
                }
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::SurfaceSize;

    /// Maps the parameter pair straight to x/y.
    struct Plane {
        domain: GridDomain,
    }

    impl ParametricSurface for Plane {
        fn name(&self) -> &'static str {
            "plane"
        }

        fn domain(&self) -> GridDomain {
            self.domain
        }

        fn eval(&self, u: f64, v: f64) -> SurfacePoint {
            SurfacePoint {
                position: Vec3::new(u, v, 0.0),
                shade: 0.5,
            }
        }

        fn fill(&self) -> Color {
            Color::new(1.0, 0.8, 0.6, 1.0)
        }

        fn line(&self) -> Color {
            Color::new(0.2, 0.2, 0.2, 1.0)
        }
    }

    fn plane(u_steps: u32, v_steps: u32) -> Plane {
        Plane {
            domain: GridDomain {
                u_min: 0.0,
                u_max: u_steps as f64,
                u_steps,
                v_min: 0.0,
                v_max: v_steps as f64,
                v_steps,
            },
        }
    }

    // ── domain ────────────────────────────────────────────────────────────

    #[test]
    fn domain_counts() {
        let d = plane(4, 3).domain;
        assert_eq!(d.rows(), 4);
        assert_eq!(d.columns(), 4);
        assert_eq!(d.vertex_count(), 16);
        assert_eq!(d.cell_count(), 12);
    }

    #[test]
    fn domain_samples_v_inclusive_u_exclusive() {
        let d = plane(4, 3).domain;
        assert_eq!(d.at(0, 0), (0.0, 0.0));
        assert_eq!(d.at(3, 3), (3.0, 3.0));
    }

    // ── emission ──────────────────────────────────────────────────────────

    #[test]
    fn emits_grid_topology() {
        let mut b = MeshBuilder::new(SurfaceSize::new(1, 1)).unwrap();
        let span = emit_surface(&mut b, &plane(4, 3)).unwrap();

        assert_eq!(span.vertex_count(), 16);
        assert_eq!(span.triangle_indices.len(), 12 * 6);
        assert_eq!(span.line_indices.len(), 12 * 8);

        let mesh = b.finish();
        assert_eq!(mesh.validate(), Ok(()));
    }

    #[test]
    fn applies_shade_to_fill_only() {
        let mut b = MeshBuilder::new(SurfaceSize::new(1, 1)).unwrap();
        emit_surface(&mut b, &plane(2, 1)).unwrap();
        let mesh = b.finish();

        assert_eq!(mesh.fill_color(0), Some([0.5, 0.4, 0.3, 1.0]));
        assert_eq!(&mesh.line_colors()[..4], &[0.2, 0.2, 0.2, 1.0]);
    }

    #[test]
    fn seam_connects_last_column_to_first() {
        let mut b = MeshBuilder::new(SurfaceSize::new(1, 1)).unwrap();
        emit_surface(&mut b, &plane(4, 1)).unwrap();
        let mesh = b.finish();

        // Last cell of row 0: corners 3, 0, 4, 7.
        let last = &mesh.line_indices()[3 * 8..4 * 8];
        assert_eq!(last, &[3, 0, 0, 4, 4, 7, 7, 3]);
    }

    #[test]
    fn empty_domain_is_rejected() {
        let mut b = MeshBuilder::new(SurfaceSize::new(1, 1)).unwrap();
        let err = emit_surface(&mut b, &plane(0, 3)).unwrap_err();
        assert_eq!(err, MeshError::EmptyDomain { shape: "plane" });
        assert_eq!(b.vertex_count(), 0);
    }
}
