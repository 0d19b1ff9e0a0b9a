/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// Mesh vertices carry colors verbatim; the pass-through shader writes them
/// to the target without blending. Channels narrow to `f32` only in
/// [`Color::to_array`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Scales RGB by `factor`, leaving alpha untouched.
    ///
    /// `factor` is clamped to `[0, 1]` so the result never leaves the range
    /// `[0, channel]`.
    #[inline]
    pub fn shaded(self, factor: f64) -> Self {
        let k = factor.clamp(0.0, 1.0);
        Self {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
            a: self.a,
        }
    }

    /// Vertex attribute layout (`Float32x4`).
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r as f32, self.g as f32, self.b as f32, self.a as f32]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r,
            g: self.g,
            b: self.b,
            a: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shaded_keeps_alpha() {
        let c = Color::new(0.8, 0.6, 0.4, 0.5).shaded(0.5);
        assert_eq!(c, Color::new(0.4, 0.3, 0.2, 0.5));
    }

    #[test]
    fn to_array_narrows_each_channel() {
        let c = Color::new(0.7, 0.7, 0.9, 1.0);
        assert_eq!(c.to_array(), [0.7_f32, 0.7, 0.9, 1.0]);
    }

    #[test]
    fn shaded_clamps_factor() {
        let base = Color::new(0.8, 0.8, 0.8, 1.0);
        assert_eq!(base.shaded(2.0), base);
        assert_eq!(base.shaded(-1.0), Color::new(0.0, 0.0, 0.0, 1.0));
    }
}
