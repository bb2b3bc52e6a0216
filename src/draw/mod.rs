//! Defines the helper method [`DrawCurve::add_curve`] on various drawing contexts
//! and the colours control points are drawn with.
//!
//! The crate itself never draws; this only translates a sampled curve into what a context needs.
use crate::spline::Spline;

/// Draw curves on different "drawing contexts" with ease.
///
/// Use different crate features to implement different contexts:
/// - `draw-svg` to draw curves using svg paths
pub trait DrawCurve {
    /// Add a curve to the drawing context.
    ///
    /// What this actually means depends on the context.
    /// But generally this samples the curve and prepares the polyline to be drawn.
    /// Curves which can't be evaluated yet add nothing.
    fn add_curve(&mut self, curve: &Spline);
}

/// Maps a point weight to the colour its control point is drawn in.
///
/// The ramp runs from black at `0` to red at `1`, yellow at `5`, green at `10`,
/// cyan at `15` and blue at `20`. Heavier weights stay blue.
pub fn weight_color(weight: f64) -> (u8, u8, u8) {
    // Float to int casts saturate, so out of range channels clamp to 0 or 255
    let channel = |value: f64| (value * 255.0) as u8;
    let w = weight;
    if w <= 1.0 {
        (channel(w), 0, 0)
    } else if w <= 5.0 {
        (255, channel((w - 1.0) / 4.0), 0)
    } else if w <= 10.0 {
        (channel((10.0 - w) / 5.0), 255, 0)
    } else if w <= 15.0 {
        (0, 255, channel((w - 10.0) / 5.0))
    } else if w <= 20.0 {
        (0, channel((20.0 - w) / 5.0), 255)
    } else {
        (0, 0, 255)
    }
}

#[cfg(feature = "draw-svg")]
pub mod svg;
