//! Grid-to-topology conversion.
//!
//! A sampled parametric surface is a row-major grid of vertices with `j_max`
//! columns per row. Columns wrap (the last column connects back to column 0),
//! rows do not.

/// Indices covering one grid cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Two triangles: `c1 c2 c3`, `c1 c3 c4`.
    pub triangles: [u32; 6],
    /// Four border segments: top, right, bottom, left.
    pub lines: [u32; 8],
}

impl GridCell {
    /// The four corners in border order.
    #[inline]
    pub fn corners(&self) -> [u32; 4] {
        [self.lines[0], self.lines[2], self.lines[4], self.lines[6]]
    }
}

/// Computes the cell whose top-left corner is at row `i`, column `j`.
///
/// `index_offset` is the index of the grid's first vertex in the shared vertex
/// sequence. Row `i + 1` must exist; callers iterate `i` over all rows but the
/// last.
pub fn grid_cell(i: u32, j: u32, j_max: u32, index_offset: u32) -> GridCell {
    debug_assert!(j_max > 0, "grid rows need at least one column");
    debug_assert!(j < j_max, "column {j} outside row of {j_max}");

    let next = (j + 1) % j_max;

    let c1 = i * j_max + j + index_offset;
    let c2 = i * j_max + next + index_offset;
    let c3 = (i + 1) * j_max + next + index_offset;
    let c4 = (i + 1) * j_max + j + index_offset;

    GridCell {
        triangles: [c1, c2, c3, c1, c3, c4],
        lines: [c1, c2, c2, c3, c3, c4, c4, c1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── corners ───────────────────────────────────────────────────────────

    #[test]
    fn first_cell_of_grid() {
        let cell = grid_cell(0, 0, 4, 0);
        assert_eq!(cell.corners(), [0, 1, 5, 4]);
        assert_eq!(cell.triangles, [0, 1, 5, 0, 5, 4]);
        assert_eq!(cell.lines, [0, 1, 1, 5, 5, 4, 4, 0]);
    }

    #[test]
    fn offset_shifts_every_index() {
        let plain = grid_cell(2, 3, 7, 0);
        let shifted = grid_cell(2, 3, 7, 100);
        for (a, b) in plain.triangles.iter().zip(shifted.triangles.iter()) {
            assert_eq!(*a + 100, *b);
        }
        for (a, b) in plain.lines.iter().zip(shifted.lines.iter()) {
            assert_eq!(*a + 100, *b);
        }
    }

    // ── seam ──────────────────────────────────────────────────────────────

    #[test]
    fn last_column_wraps_to_first() {
        let cell = grid_cell(3, 15, 16, 0);
        let [c1, c2, c3, c4] = cell.corners();
        assert_eq!(c1, 3 * 16 + 15);
        assert_eq!(c2, 3 * 16);
        assert_eq!(c3, 4 * 16);
        assert_eq!(c4, 4 * 16 + 15);
    }

    #[test]
    fn two_column_quad_is_a_plain_rectangle() {
        // Wings use a single cell on a 2-wide grid; wrapping maps column 1 -> 0
        // only for the cell at j = 1, which is never emitted.
        let cell = grid_cell(0, 0, 2, 10);
        assert_eq!(cell.corners(), [10, 11, 13, 12]);
    }

    #[test]
    fn rows_do_not_wrap() {
        let rows = 5;
        let j_max = 6;
        for i in 0..rows - 1 {
            for j in 0..j_max {
                let cell = grid_cell(i, j, j_max, 0);
                assert!(cell.triangles.iter().all(|&ix| ix < rows * j_max));
            }
        }
    }

    // ── shape ─────────────────────────────────────────────────────────────

    #[test]
    fn border_is_a_closed_loop() {
        let cell = grid_cell(1, 2, 5, 0);
        for seg in 0..4 {
            let end = cell.lines[seg * 2 + 1];
            let next_start = cell.lines[((seg + 1) % 4) * 2];
            assert_eq!(end, next_start);
        }
    }

    #[test]
    fn triangles_share_the_diagonal() {
        let cell = grid_cell(0, 1, 3, 0);
        let t = cell.triangles;
        assert_eq!(t[0], t[3]);
        assert_eq!(t[2], t[4]);
    }
}
