/// Maps a signed lighting term in `[-1, 1]` to a shade factor in `[0, 1]`.
///
/// The result is `1 - (term + 1) / 2`: a term of `-1` is fully lit, `+1` is
/// black. Used as a baked stand-in for directional lighting.
#[inline]
pub fn shade_from_term(term: f64) -> f64 {
    (1.0 - (term + 1.0) / 2.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(shade_from_term(-1.0), 1.0);
        assert_eq!(shade_from_term(1.0), 0.0);
        assert_eq!(shade_from_term(0.0), 0.5);
    }

    #[test]
    fn stays_in_unit_range_for_rounding_overshoot() {
        assert_eq!(shade_from_term(1.000_001), 0.0);
        assert_eq!(shade_from_term(-1.000_001), 1.0);
    }
}
