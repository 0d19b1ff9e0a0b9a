/// Render surface size in whole pixels.
///
/// Mesh positions are divided by this size on x/y as a stand-in for a
/// projection, so it must be captured before any geometry is generated.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_is_degenerate() {
        assert!(SurfaceSize::new(0, 720).is_degenerate());
        assert!(SurfaceSize::new(1280, 0).is_degenerate());
        assert!(!SurfaceSize::new(1, 1).is_degenerate());
    }
}
