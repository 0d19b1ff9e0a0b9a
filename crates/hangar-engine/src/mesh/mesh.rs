use crate::coords::SurfaceSize;

use super::{MeshError, ShapeSpan};

/// Finished, immutable mesh data ready for upload.
///
/// Attributes are stored as parallel flat sequences: vertex `i` has its
/// position at `positions[3i..3i+3]` and its colors at `[4i..4i+4]` of the
/// two color sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub(super) surface: SurfaceSize,
    pub(super) positions: Vec<f32>,
    pub(super) fill_colors: Vec<f32>,
    pub(super) line_colors: Vec<f32>,
    pub(super) triangle_indices: Vec<u32>,
    pub(super) line_indices: Vec<u32>,
    pub(super) spans: Vec<ShapeSpan>,
}

impl Mesh {
    /// Surface size the positions were normalized against.
    #[inline]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn fill_colors(&self) -> &[f32] {
        &self.fill_colors
    }

    #[inline]
    pub fn line_colors(&self) -> &[f32] {
        &self.line_colors
    }

    #[inline]
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangle_indices
    }

    #[inline]
    pub fn line_indices(&self) -> &[u32] {
        &self.line_indices
    }

    /// Per-shape ranges in emission order.
    #[inline]
    pub fn spans(&self) -> &[ShapeSpan] {
        &self.spans
    }

    pub fn span(&self, name: &str) -> Option<&ShapeSpan> {
        self.spans.iter().find(|s| s.name == name)
    }

    /// Position of vertex `index` as stored (already normalized).
    pub fn position(&self, index: usize) -> Option<[f32; 3]> {
        let p = self.positions.get(index * 3..index * 3 + 3)?;
        Some([p[0], p[1], p[2]])
    }

    /// Fill color of vertex `index`.
    pub fn fill_color(&self, index: usize) -> Option<[f32; 4]> {
        let c = self.fill_colors.get(index * 4..index * 4 + 4)?;
        Some([c[0], c[1], c[2], c[3]])
    }

    /// Checks the attribute and index invariants.
    ///
    /// Run before handing the mesh to a renderer: a GPU index buffer that
    /// points past the vertex buffer is a validation error in wgpu.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.positions.len() % 3 != 0
            || self.fill_colors.len() % 4 != 0
            || self.line_colors.len() % 4 != 0
            || self.positions.len() / 3 != self.fill_colors.len() / 4
            || self.positions.len() / 3 != self.line_colors.len() / 4
        {
            return Err(MeshError::AttributeMismatch {
                positions: self.positions.len(),
                fill_colors: self.fill_colors.len(),
                line_colors: self.line_colors.len(),
            });
        }

        let vertex_count = self.vertex_count();

        for (kind, indices, stride) in [
            ("triangle", &self.triangle_indices, 3),
            ("line", &self.line_indices, 2),
        ] {
            if indices.len() % stride != 0 {
                return Err(MeshError::RaggedIndices {
                    kind,
                    len: indices.len(),
                    stride,
                });
            }
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    kind,
                    index,
                    vertex_count,
                });
            }
        }

        if let Some(vertex) = self
            .positions
            .chunks_exact(3)
            .position(|p| p.iter().any(|c| !c.is_finite()))
        {
            return Err(MeshError::NonFinitePosition { vertex });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(positions: Vec<f32>, triangle_indices: Vec<u32>, line_indices: Vec<u32>) -> Mesh {
        let n = positions.len() / 3;
        Mesh {
            surface: SurfaceSize::new(1, 1),
            positions,
            fill_colors: vec![1.0; n * 4],
            line_colors: vec![1.0; n * 4],
            triangle_indices,
            line_indices,
            spans: Vec::new(),
        }
    }

    #[test]
    fn valid_triangle_passes() {
        let m = mesh(vec![0.0; 9], vec![0, 1, 2], vec![0, 1, 1, 2, 2, 0]);
        assert_eq!(m.validate(), Ok(()));
        assert_eq!(m.vertex_count(), 3);
    }

    #[test]
    fn index_past_end_is_rejected() {
        let m = mesh(vec![0.0; 9], vec![0, 1, 3], vec![]);
        assert_eq!(
            m.validate(),
            Err(MeshError::IndexOutOfRange {
                kind: "triangle",
                index: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn ragged_lines_are_rejected() {
        let m = mesh(vec![0.0; 9], vec![], vec![0, 1, 2]);
        assert!(matches!(
            m.validate(),
            Err(MeshError::RaggedIndices { kind: "line", len: 3, stride: 2 })
        ));
    }

    #[test]
    fn attribute_mismatch_is_rejected() {
        let mut m = mesh(vec![0.0; 9], vec![], vec![]);
        m.line_colors.truncate(8);
        assert!(matches!(m.validate(), Err(MeshError::AttributeMismatch { .. })));
    }

    #[test]
    fn non_finite_position_is_rejected() {
        let mut p = vec![0.0; 9];
        p[4] = f32::INFINITY;
        let m = mesh(p, vec![], vec![]);
        assert_eq!(m.validate(), Err(MeshError::NonFinitePosition { vertex: 1 }));
    }

    #[test]
    fn accessors_slice_by_vertex() {
        let m = mesh(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![], vec![]);
        assert_eq!(m.position(1), Some([4.0, 5.0, 6.0]));
        assert_eq!(m.position(2), None);
        assert_eq!(m.fill_color(0), Some([1.0; 4]));
    }
}
