use hangar_engine::coords::Vec3;
use hangar_engine::mesh::{grid_cell, MeshBuilder, MeshError, ShapeSpan};
use hangar_engine::paint::Color;

/// Flat unshaded rectangle centered at `offset`, in the z = 0 plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Wing {
    pub name: &'static str,
    pub offset: Vec3,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub line: Color,
}

impl Wing {
    pub const WIDTH: f64 = 15.0;
    pub const HEIGHT: f64 = 700.0;
    pub const SPREAD: f64 = 305.0;

    pub fn left() -> Self {
        Self::at("left wing", Vec3::new(-Self::SPREAD, 0.0, 0.0))
    }

    pub fn right() -> Self {
        Self::at("right wing", Vec3::new(Self::SPREAD, 0.0, 0.0))
    }

    fn at(name: &'static str, offset: Vec3) -> Self {
        Self {
            name,
            offset,
            width: Self::WIDTH,
            height: Self::HEIGHT,
            fill: Color::new(0.3, 0.3, 0.3, 1.0),
            line: super::LINE_COLOR,
        }
    }

    /// Corner positions in emission order: bottom-left, bottom-right,
    /// top-left, top-right.
    pub fn corners(&self) -> [Vec3; 4] {
        let dx = self.width / 2.0;
        let dy = self.height / 2.0;
        let Vec3 { x, y, .. } = self.offset;
        [
            Vec3::new(x - dx, y - dy, 0.0),
            Vec3::new(x + dx, y - dy, 0.0),
            Vec3::new(x - dx, y + dy, 0.0),
            Vec3::new(x + dx, y + dy, 0.0),
        ]
    }

    /// Appends the rectangle as a single cell of a two-column grid.
    pub fn emit(&self, builder: &mut MeshBuilder) -> Result<ShapeSpan, MeshError> {
        builder.shape(self.name, |b, index_offset| {
            for corner in self.corners() {
                b.push_vertex(corner, self.fill, self.line);
            }
            b.push_cell(grid_cell(0, 0, 2, index_offset));
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangar_engine::coords::SurfaceSize;

    #[test]
    fn corners_surround_offset() {
        let corners = Wing::left().corners();
        assert_eq!(corners[0], Vec3::new(-312.5, -350.0, 0.0));
        assert_eq!(corners[3], Vec3::new(-297.5, 350.0, 0.0));
    }

    #[test]
    fn emits_one_quad() {
        let mut b = MeshBuilder::new(SurfaceSize::new(1, 1)).unwrap();
        let span = Wing::right().emit(&mut b).unwrap();
        assert_eq!(span.vertices, 0..4);

        let mesh = b.finish();
        assert_eq!(mesh.triangle_indices(), &[0, 1, 3, 0, 3, 2]);
        assert_eq!(mesh.line_indices(), &[0, 1, 1, 3, 3, 2, 2, 0]);
    }
}
