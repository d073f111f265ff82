//! Viewport windowing
//!
//! Maps a scroll position to the contiguous index range of records that must
//! be materialized. The range is recomputed from scratch on every scroll or
//! filter event rather than adjusted incrementally, which costs a constant
//! factor but cannot drift. A buffer margin on both sides of the visible area
//! absorbs scroll-event latency without blank rows flashing in.

use serde::Serialize;

/// Half-open index range `[start, end)` into the filtered record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewWindow {
    pub start: usize,
    pub end: usize,
}

impl ViewWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compute the window of records to render.
///
/// All lengths share one unit (pixels for a browser view, terminal rows for
/// the TUI where `row_height == 1`):
///
/// * `start = max(0, floor(scroll_offset / row_height) - buffer_rows)`
/// * `end   = min(total, start + ceil(viewport_height / row_height) + 2 * buffer_rows)`
///
/// Both bounds are clamped to `[0, total]` and `start <= end` always holds;
/// `total == 0` yields the empty window `{0, 0}` and the caller renders a
/// placeholder instead of a list.
pub fn compute_range(
    scroll_offset: usize,
    viewport_height: usize,
    row_height: usize,
    buffer_rows: usize,
    total: usize,
) -> ViewWindow {
    // A zero row height has no meaningful window (and would divide by zero).
    if total == 0 || row_height == 0 {
        return ViewWindow::default();
    }

    let start = (scroll_offset / row_height)
        .saturating_sub(buffer_rows)
        .min(total);
    let span = viewport_height.div_ceil(row_height) + 2 * buffer_rows;
    let end = start.saturating_add(span).min(total);

    ViewWindow { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_to_short_list() {
        // Unclamped the formula would cover 20 rows; only 2 exist.
        let window = compute_range(0, 300, 30, 5, 2);
        assert_eq!(window, ViewWindow { start: 0, end: 2 });
    }

    #[test]
    fn test_empty_list_yields_empty_window() {
        assert_eq!(compute_range(450, 300, 30, 5, 0), ViewWindow::default());
    }

    #[test]
    fn test_interior_scroll_buffers_both_sides() {
        // scroll row 30, minus 5 buffer rows; 10 visible + 10 buffer rows deep.
        let window = compute_range(900, 300, 30, 5, 1000);
        assert_eq!(window, ViewWindow { start: 25, end: 45 });
    }

    #[test]
    fn test_start_clamped_at_top() {
        let window = compute_range(60, 300, 30, 5, 1000);
        assert_eq!(window.start, 0);
    }

    #[test]
    fn test_end_clamped_at_bottom() {
        let window = compute_range(29_970, 300, 30, 5, 1000);
        assert!(window.end <= 1000);
        assert!(window.start <= window.end);
    }

    #[test]
    fn test_terminal_row_units() {
        // TUI geometry: one row per record, 20-row viewport.
        let window = compute_range(12, 20, 1, 3, 100);
        assert_eq!(window, ViewWindow { start: 9, end: 35 });
    }

    #[test]
    fn test_monotone_in_scroll_offset() {
        let mut previous_start = 0;
        for scroll in (0..3000).step_by(7) {
            let window = compute_range(scroll, 300, 30, 5, 100);
            assert!(window.start >= previous_start, "start regressed at {scroll}");
            assert!(window.start <= window.end);
            assert!(window.end <= 100);
            previous_start = window.start;
        }
    }

    #[test]
    fn test_bounds_hold_across_geometries() {
        for total in [0usize, 1, 2, 50] {
            for scroll in [0usize, 1, 29, 30, 31, 10_000] {
                for buffer in [0usize, 1, 5] {
                    let window = compute_range(scroll, 300, 30, buffer, total);
                    assert!(window.start <= window.end, "start > end for total {total}");
                    assert!(window.end <= total, "end beyond total {total}");
                }
            }
        }
    }
}
