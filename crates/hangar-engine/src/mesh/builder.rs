use std::ops::Range;

use crate::coords::{SurfaceSize, Vec3};
use crate::paint::Color;

use super::topology::GridCell;
use super::{Mesh, MeshError};

/// Vertex and index ranges occupied by one shape inside a [`Mesh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeSpan {
    pub name: &'static str,
    pub vertices: Range<u32>,
    pub triangle_indices: Range<usize>,
    pub line_indices: Range<usize>,
}

impl ShapeSpan {
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.end - self.vertices.start
    }
}

/// Accumulates vertex attributes and index lists for a set of shapes.
///
/// Shapes are appended back to back. Each shape receives the running vertex
/// count as its index offset, so index ranges of different shapes never
/// overlap. Positions are normalized by the surface size as they are pushed.
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    surface: SurfaceSize,

    positions: Vec<f32>,
    fill_colors: Vec<f32>,
    line_colors: Vec<f32>,

    triangle_indices: Vec<u32>,
    line_indices: Vec<u32>,

    spans: Vec<ShapeSpan>,
}

impl MeshBuilder {
    /// Creates an empty builder normalizing against `surface`.
    pub fn new(surface: SurfaceSize) -> Result<Self, MeshError> {
        if surface.is_degenerate() {
            return Err(MeshError::DegenerateSurface {
                width: surface.width,
                height: surface.height,
            });
        }

        Ok(Self {
            surface,
            positions: Vec::new(),
            fill_colors: Vec::new(),
            line_colors: Vec::new(),
            triangle_indices: Vec::new(),
            line_indices: Vec::new(),
            spans: Vec::new(),
        })
    }

    /// Number of vertices pushed so far; also the index of the next vertex.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / 3) as u32
    }

    /// Makes room for `vertices` more vertices and `cells` more grid cells.
    pub fn reserve(&mut self, vertices: u32, cells: u32) {
        let (vertices, cells) = (vertices as usize, cells as usize);
        self.positions.reserve(vertices * 3);
        self.fill_colors.reserve(vertices * 4);
        self.line_colors.reserve(vertices * 4);
        self.triangle_indices.reserve(cells * 6);
        self.line_indices.reserve(cells * 8);
    }

    /// Appends one vertex and returns its index.
    ///
    /// `position` is in surface pixels; x and y are divided by the surface
    /// width and height, z is stored as given. The division happens in `f64`
    /// and the result is narrowed to `f32` once.
    pub fn push_vertex(&mut self, position: Vec3, fill: Color, line: Color) -> u32 {
        let index = self.vertex_count();

        self.positions.extend_from_slice(&[
            (position.x / self.surface.width as f64) as f32,
            (position.y / self.surface.height as f64) as f32,
            position.z as f32,
        ]);
        self.fill_colors.extend_from_slice(&fill.to_array());
        self.line_colors.extend_from_slice(&line.to_array());

        index
    }

    /// Appends the triangles and border lines of one grid cell.
    pub fn push_cell(&mut self, cell: GridCell) {
        self.triangle_indices.extend_from_slice(&cell.triangles);
        self.line_indices.extend_from_slice(&cell.lines);
    }

    /// Emits one shape through `emit` and records the ranges it occupied.
    ///
    /// `emit` receives the index offset of the shape's first vertex.
    pub fn shape<F>(&mut self, name: &'static str, emit: F) -> Result<ShapeSpan, MeshError>
    where
        F: FnOnce(&mut Self, u32) -> Result<(), MeshError>,
    {
        let index_offset = self.vertex_count();
        let tri_start = self.triangle_indices.len();
        let line_start = self.line_indices.len();

        emit(self, index_offset)?;

        let span = ShapeSpan {
            name,
            vertices: index_offset..self.vertex_count(),
            triangle_indices: tri_start..self.triangle_indices.len(),
            line_indices: line_start..self.line_indices.len(),
        };

        log::debug!(
            "{name}: {} vertices, {} triangle indices, {} line indices",
            span.vertex_count(),
            span.triangle_indices.len(),
            span.line_indices.len(),
        );

        self.spans.push(span.clone());
        Ok(span)
    }

    /// Freezes the accumulated data.
    pub fn finish(self) -> Mesh {
        Mesh {
            surface: self.surface,
            positions: self.positions,
            fill_colors: self.fill_colors,
            line_colors: self.line_colors,
            triangle_indices: self.triangle_indices,
            line_indices: self.line_indices,
            spans: self.spans,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::topology::grid_cell;

    const FILL: Color = Color::new(0.5, 0.5, 0.5, 1.0);
    const LINE: Color = Color::new(0.2, 0.2, 0.2, 1.0);

    fn quad(b: &mut MeshBuilder, offset: u32) -> Result<(), MeshError> {
        for (x, y) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            b.push_vertex(Vec3::new(x, y, 0.0), FILL, LINE);
        }
        b.push_cell(grid_cell(0, 0, 2, offset));
        Ok(())
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn rejects_zero_width() {
        let err = MeshBuilder::new(SurfaceSize::new(0, 600)).unwrap_err();
        assert_eq!(err, MeshError::DegenerateSurface { width: 0, height: 600 });
    }

    #[test]
    fn rejects_zero_height() {
        assert!(MeshBuilder::new(SurfaceSize::new(800, 0)).is_err());
    }

    // ── normalization ─────────────────────────────────────────────────────

    #[test]
    fn push_vertex_normalizes_xy_only() {
        let mut b = MeshBuilder::new(SurfaceSize::new(800, 400)).unwrap();
        let idx = b.push_vertex(Vec3::new(200.0, -100.0, 0.6), FILL, LINE);
        assert_eq!(idx, 0);

        let mesh = b.finish();
        assert_eq!(mesh.positions(), &[0.25, -0.25, 0.6]);
        assert_eq!(mesh.fill_colors(), &FILL.to_array());
        assert_eq!(mesh.line_colors(), &LINE.to_array());
    }

    #[test]
    fn push_vertex_narrows_after_normalizing() {
        let x = 1.0 / 3.0;
        let mut b = MeshBuilder::new(SurfaceSize::new(1000, 1)).unwrap();
        b.push_vertex(Vec3::new(x, 0.0, 0.0), FILL, LINE);
        assert_eq!(b.finish().positions()[0], (x / 1000.0) as f32);
    }

    #[test]
    fn reserve_leaves_contents_untouched() {
        let mut b = MeshBuilder::new(SurfaceSize::new(10, 10)).unwrap();
        b.reserve(16, 12);
        assert_eq!(b.vertex_count(), 0);
        assert!(b.finish().triangle_indices().is_empty());
    }

    #[test]
    fn push_vertex_returns_running_index() {
        let mut b = MeshBuilder::new(SurfaceSize::new(10, 10)).unwrap();
        assert_eq!(b.push_vertex(Vec3::zero(), FILL, LINE), 0);
        assert_eq!(b.push_vertex(Vec3::zero(), FILL, LINE), 1);
        assert_eq!(b.vertex_count(), 2);
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[test]
    fn shapes_receive_disjoint_offsets() {
        let mut b = MeshBuilder::new(SurfaceSize::new(10, 10)).unwrap();
        let first = b.shape("first", quad).unwrap();
        let second = b.shape("second", quad).unwrap();

        assert_eq!(first.vertices, 0..4);
        assert_eq!(second.vertices, 4..8);
        assert_eq!(second.triangle_indices, 6..12);
        assert_eq!(second.line_indices, 8..16);

        let mesh = b.finish();
        let tris = &mesh.triangle_indices()[second.triangle_indices.clone()];
        assert!(tris.iter().all(|&i| second.vertices.contains(&i)));
        assert_eq!(mesh.spans().len(), 2);
    }

    #[test]
    fn failed_shape_is_not_recorded() {
        let mut b = MeshBuilder::new(SurfaceSize::new(10, 10)).unwrap();
        let err = b
            .shape("broken", |_, _| Err(MeshError::EmptyDomain { shape: "broken" }))
            .unwrap_err();
        assert_eq!(err, MeshError::EmptyDomain { shape: "broken" });
        assert!(b.finish().spans().is_empty());
    }
}
