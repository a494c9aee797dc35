//! Coordinate mapping between layout space and the VML drawing surface.
//!
//! Layout space puts the origin at the bottom-left with y growing upward
//! and measures in points. The output document positions everything in a
//! top-left-origin `<div>`, so vertical coordinates flip against the
//! drawing height. At the default 96dpi one layout unit spans 0.75 CSS
//! points, which is where [`PAGE_SCALE`] comes from.

/// Layout units to CSS points at 96dpi.
pub const PAGE_SCALE: f64 = 0.75;

/// Offset matching the default drawing pad; the coordinate origin and
/// oval positions shift by this much so strokes at the drawing edge stay
/// visible.
pub const ORIGIN_NUDGE: f64 = 4.0;

/// Correction applied to font sizes. Empirical; nominal point sizes come
/// out visibly too large in VML viewers otherwise.
pub const FONT_SIZE_SCALE: f64 = 0.81;

/// Baseline adjustment for text runs, in pixels.
pub const TEXT_TOP_NUDGE: f64 = 14.0;

/// The style/coordsize/coordorigin attribute trio shared by the graph
/// `<div>` and every `<v:shape>` in the document.
pub fn graph_coords(width: f64, height: f64) -> String {
    let w = width * PAGE_SCALE;
    let h = height * PAGE_SCALE;
    format!(
        "style=\"width: {w:.0}pt; height: {h:.0}pt\" coordsize=\"{w:.0},{h:.0}\" coordorigin=\"-4,-{:.0}\"",
        h - ORIGIN_NUDGE
    )
}

/// CSS `left` for a text run, in pixels.
pub fn text_left(x: f64) -> f64 {
    x / PAGE_SCALE
}

/// CSS `top` for a text run, in pixels, measured from the drawing height.
pub fn text_top(height: f64, y: f64) -> f64 {
    height - y / PAGE_SCALE - TEXT_TOP_NUDGE
}

/// CSS `left` for an oval: the center mirrored through the corner gives
/// the opposite corner, nudged into the padded surface.
pub fn oval_left(center_x: f64, corner_x: f64) -> f64 {
    2.0 * center_x - corner_x + ORIGIN_NUDGE
}

/// CSS `top` for an oval, flipped against the scaled drawing height.
pub fn oval_top(height: f64, corner_y: f64) -> f64 {
    height * PAGE_SCALE - corner_y - ORIGIN_NUDGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_coords_scales_and_nudges() {
        assert_eq!(
            graph_coords(100.0, 200.0),
            "style=\"width: 75pt; height: 150pt\" coordsize=\"75,150\" coordorigin=\"-4,-146\""
        );
    }

    #[test]
    fn graph_coords_rounds_fractional_sizes() {
        assert_eq!(
            graph_coords(98.0, 98.0),
            "style=\"width: 74pt; height: 74pt\" coordsize=\"74,74\" coordorigin=\"-4,-70\""
        );
    }

    #[test]
    fn text_position_flips_y_and_adjusts_baseline() {
        assert_eq!(text_left(45.0), 60.0);
        assert_eq!(text_top(150.0, 30.0), 96.0);
    }

    #[test]
    fn oval_position_mirrors_center_through_corner() {
        assert_eq!(oval_left(50.0, 70.0), 34.0);
        assert_eq!(oval_top(200.0, 60.0), 86.0);
    }
}
