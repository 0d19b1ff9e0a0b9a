use std::fmt;

/// Errors produced while building or validating a [`Mesh`](super::Mesh).
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// The render surface has a zero dimension; positions cannot be normalized.
    DegenerateSurface { width: u32, height: u32 },

    /// A parametric domain touches a point where the mapping is undefined.
    Singularity { shape: &'static str, v: f64 },

    /// A parametric domain has no cells to emit.
    EmptyDomain { shape: &'static str },

    /// Attribute sequences disagree on the number of vertices.
    AttributeMismatch {
        positions: usize,
        fill_colors: usize,
        line_colors: usize,
    },

    /// An index sequence length is not a multiple of its primitive stride.
    RaggedIndices { kind: &'static str, len: usize, stride: usize },

    /// An index references a vertex that does not exist.
    IndexOutOfRange { kind: &'static str, index: u32, vertex_count: usize },

    /// A position component is NaN or infinite.
    NonFinitePosition { vertex: usize },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::DegenerateSurface { width, height } => {
                write!(f, "render surface is degenerate ({width}x{height})")
            }
            MeshError::Singularity { shape, v } => {
                write!(f, "{shape}: mapping is undefined at v = {v}")
            }
            MeshError::EmptyDomain { shape } => write!(f, "{shape}: parametric domain is empty"),
            MeshError::AttributeMismatch {
                positions,
                fill_colors,
                line_colors,
            } => write!(
                f,
                "vertex attribute mismatch: {positions} positions, {fill_colors} fill colors, {line_colors} line colors"
            ),
            MeshError::RaggedIndices { kind, len, stride } => {
                write!(f, "{kind} index count {len} is not a multiple of {stride}")
            }
            MeshError::IndexOutOfRange {
                kind,
                index,
                vertex_count,
            } => write!(
                f,
                "{kind} index {index} out of range for {vertex_count} vertices"
            ),
            MeshError::NonFinitePosition { vertex } => {
                write!(f, "vertex {vertex} has a non-finite position")
            }
        }
    }
}

impl std::error::Error for MeshError {}
