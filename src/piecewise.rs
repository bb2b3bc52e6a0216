//! Piecewise polynomial splines over uniformly spaced segments.
//!
//! A spline of degree `d` over `n` De Boor points has `n - d` segments, one unit of `t` each.
//! Segment `s` is controlled by the points `s..=s + d`.

use crate::curve::sealed::PolygonAccess;
use crate::curve::{Axis, Curve};
use crate::polygon::ControlPolygon;

/// Index of the first control point of the segment containing `t`.
///
/// `t == max_t` would start a segment past the end, so the index is clamped to the last one.
/// Requires `count > degree`.
pub fn segment(t: f64, count: usize, degree: usize) -> usize {
    (t as usize).min(count - (degree + 1))
}

/// Upper parameter bound for `count` points and the given degree, one unit per segment
pub fn segments_max_t(count: usize, degree: usize) -> f64 {
    count as f64 - degree as f64
}

/// Point on the quadratic segment with De Boor points `p` at local parameter `u`
pub fn quadratic_segment([p0, p1, p2]: [f64; 3], u: f64) -> f64 {
    let b0 = (p0 + p1) / 2.0;
    let b1 = p1;
    let b2 = (p1 + p2) / 2.0;

    let u_inv = 1.0 - u;
    b0 * u_inv * u_inv + b1 * 2.0 * u * u_inv + b2 * u * u
}

/// Point on the cubic segment with De Boor points `p` at local parameter `u`
pub fn cubic_segment([p0, p1, p2, p3]: [f64; 4], u: f64) -> f64 {
    let b0 = (p0 + 4.0 * p1 + p2) / 6.0;
    let b1 = (2.0 * p1 + p2) / 3.0;
    let b2 = (p1 + 2.0 * p2) / 3.0;
    let b3 = (p1 + 4.0 * p2 + p3) / 6.0;

    let u_inv = 1.0 - u;
    b0 * u_inv * u_inv * u_inv
        + b1 * 3.0 * u * u_inv * u_inv
        + b2 * 3.0 * u * u * u_inv
        + b3 * u * u * u
}

/// Point on the cardinal segment running from `p1` to `p2` at local parameter `u`
pub fn cardinal_segment([p0, p1, p2, p3]: [f64; 4], tension: f64, u: f64) -> f64 {
    let s = tension;
    let constant = p1;
    let linear = -s * p0 + s * p2;
    let quadratic = 2.0 * s * p0 + (s - 3.0) * p1 + (3.0 - 2.0 * s) * p2 - s * p3;
    let cubic = -s * p0 + (2.0 - s) * p1 + (s - 2.0) * p2 + s * p3;

    constant + u * linear + u * u * quadratic + u * u * u * cubic
}

/// Piecewise quadratic bezier spline with C1 continuity between segments.
///
/// Each segment is controlled by three De Boor points.
/// The spline approximates its points; it doesn't pass through its first or last one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuadraticBezierSpline {
    polygon: ControlPolygon,
}

impl QuadraticBezierSpline {
    /// Creates a spline without any points
    pub fn new() -> Self {
        QuadraticBezierSpline {
            polygon: ControlPolygon::new(),
        }
    }
}

impl PolygonAccess for QuadraticBezierSpline {
    fn polygon_mut(&mut self) -> &mut ControlPolygon {
        &mut self.polygon
    }
}

impl Curve for QuadraticBezierSpline {
    fn name(&self) -> &'static str {
        "Quadratic Bezier Spline"
    }

    fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    fn max_t(&self) -> f64 {
        segments_max_t(self.polygon.len(), 2)
    }

    fn evaluate(&self, _axis: Axis, coords: &[f64], t: f64) -> f64 {
        let s = segment(t, coords.len(), 2);
        quadratic_segment([coords[s], coords[s + 1], coords[s + 2]], t - s as f64)
    }
}

/// Piecewise cubic bezier spline with C2 continuity between segments.
///
/// Each segment is controlled by four De Boor points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CubicBezierSpline {
    polygon: ControlPolygon,
}

impl CubicBezierSpline {
    /// Creates a spline without any points
    pub fn new() -> Self {
        CubicBezierSpline {
            polygon: ControlPolygon::new(),
        }
    }
}

impl PolygonAccess for CubicBezierSpline {
    fn polygon_mut(&mut self) -> &mut ControlPolygon {
        &mut self.polygon
    }
}

impl Curve for CubicBezierSpline {
    fn name(&self) -> &'static str {
        "Cubic Bezier Spline"
    }

    fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    fn max_t(&self) -> f64 {
        segments_max_t(self.polygon.len(), 3)
    }

    fn evaluate(&self, _axis: Axis, coords: &[f64], t: f64) -> f64 {
        let s = segment(t, coords.len(), 3);
        cubic_segment(
            [coords[s], coords[s + 1], coords[s + 2], coords[s + 3]],
            t - s as f64,
        )
    }
}

/// Cubic cardinal spline with uniform parameterization.
///
/// Passes through every control point but the first and the last.
/// `tension` controls how tightly it bends towards its points;
/// a tension of `0.5` makes it a Catmull-Rom spline.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicCardinalSpline {
    polygon: ControlPolygon,
    tension: f64,
}

impl CubicCardinalSpline {
    /// Creates a spline without any points
    pub fn new(tension: f64) -> Self {
        CubicCardinalSpline {
            polygon: ControlPolygon::new(),
            tension,
        }
    }

    /// Creates a Catmull-Rom spline, i.e. a cardinal spline with tension `0.5`
    pub fn catmull_rom() -> Self {
        CubicCardinalSpline::new(0.5)
    }

    /// The spline's tension
    pub fn tension(&self) -> f64 {
        self.tension
    }
}

impl PolygonAccess for CubicCardinalSpline {
    fn polygon_mut(&mut self) -> &mut ControlPolygon {
        &mut self.polygon
    }
}

impl Curve for CubicCardinalSpline {
    fn name(&self) -> &'static str {
        "Cubic Cardinal Spline"
    }

    fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    fn max_t(&self) -> f64 {
        segments_max_t(self.polygon.len(), 3)
    }

    fn evaluate(&self, _axis: Axis, coords: &[f64], t: f64) -> f64 {
        let s = segment(t, coords.len(), 3);
        cardinal_segment(
            [coords[s], coords[s + 1], coords[s + 2], coords[s + 3]],
            self.tension,
            t - s as f64,
        )
    }
}
