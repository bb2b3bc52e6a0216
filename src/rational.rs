//! Rational curves: every control point's basis value is scaled by the point's weight
//! and the result is normalized by the sum of the scaled values.
//!
//! With all weights equal the rational curves reduce to their polynomial counterparts.
//! If the weights relevant at some `t` sum to zero the result is NaN; keeping weights
//! positive is the caller's responsibility.

use crate::bezier::bernstein_weights;
use crate::curve::sealed::PolygonAccess;
use crate::curve::{Axis, Curve};
use crate::piecewise::{segment, segments_max_t};
use crate::polygon::ControlPolygon;

/// Weighted average of `coords`, each weighted by its basis value times its point weight.
fn rational_average(coords: &[f64], weights: &[f64], basis: &[f64]) -> f64 {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for ((c, w), b) in coords.iter().zip(weights).zip(basis) {
        let weight = b * w;
        numerator += weight * c;
        denominator += weight;
    }
    numerator / denominator
}

/// Uniform quadratic B-spline basis values of the three points controlling `segment` at `t`.
///
/// Each basis function spans three unit segments. It is evaluated at the point's own offset,
/// i.e. the first point contributes its third piece and the last point its first one.
/// The values are scaled by 2 and sum to 2.
pub fn quadratic_basis(t: f64, segment: usize) -> [f64; 3] {
    let s = segment as f64;
    let l0 = t - (s - 2.0);
    let l1 = t - (s - 1.0);
    let l2 = t - s;
    [
        (3.0 - l0) * (3.0 - l0),
        l1 * l1 - 3.0 * (l1 - 1.0) * (l1 - 1.0),
        l2 * l2,
    ]
}

/// Uniform cubic B-spline basis values of the four points controlling `segment` at `t`.
///
/// Each basis function spans four unit segments, see [`quadratic_basis`].
/// The values are scaled by 6 and sum to 6.
pub fn cubic_basis(t: f64, segment: usize) -> [f64; 4] {
    let s = segment as f64;
    let l0 = t - (s - 3.0);
    let l1 = t - (s - 2.0);
    let l2 = t - (s - 1.0);
    let l3 = t - s;
    [
        (4.0 - l0).powi(3),
        (4.0 - l1).powi(3) - 4.0 * (3.0 - l1).powi(3),
        l2.powi(3) - 4.0 * (l2 - 1.0).powi(3),
        l3.powi(3),
    ]
}

/// Rational bezier curve over all control points.
///
/// Like [`BernsteinBezierCurve`](crate::bezier::BernsteinBezierCurve) with the bernstein
/// weights scaled by each point's weight.
#[derive(Clone, Debug, PartialEq)]
pub struct RationalBezierCurve {
    polygon: ControlPolygon,
}

impl RationalBezierCurve {
    /// Creates a curve without any points
    pub fn new() -> Self {
        RationalBezierCurve {
            polygon: ControlPolygon::weighted(),
        }
    }
}

impl Default for RationalBezierCurve {
    fn default() -> Self {
        RationalBezierCurve::new()
    }
}

impl PolygonAccess for RationalBezierCurve {
    fn polygon_mut(&mut self) -> &mut ControlPolygon {
        &mut self.polygon
    }
}

impl Curve for RationalBezierCurve {
    fn name(&self) -> &'static str {
        "Rational Bezier Curve"
    }

    fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    fn evaluate(&self, _axis: Axis, coords: &[f64], t: f64) -> f64 {
        let weights = self.polygon.weights().unwrap_or_default();
        let basis = bernstein_weights(coords.len(), t);
        rational_average(coords, weights, &basis)
    }
}

/// Quadratic rational B-spline with uniformly spaced knots.
///
/// With all weights equal it matches [`QuadraticBezierSpline`](crate::piecewise::QuadraticBezierSpline).
#[derive(Clone, Debug, PartialEq)]
pub struct QuadraticRationalBSpline {
    polygon: ControlPolygon,
}

impl QuadraticRationalBSpline {
    /// Creates a spline without any points
    pub fn new() -> Self {
        QuadraticRationalBSpline {
            polygon: ControlPolygon::weighted(),
        }
    }
}

impl Default for QuadraticRationalBSpline {
    fn default() -> Self {
        QuadraticRationalBSpline::new()
    }
}

impl PolygonAccess for QuadraticRationalBSpline {
    fn polygon_mut(&mut self) -> &mut ControlPolygon {
        &mut self.polygon
    }
}

impl Curve for QuadraticRationalBSpline {
    fn name(&self) -> &'static str {
        "Quadratic Rational B-Spline"
    }

    fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    fn max_t(&self) -> f64 {
        segments_max_t(self.polygon.len(), 2)
    }

    fn evaluate(&self, _axis: Axis, coords: &[f64], t: f64) -> f64 {
        let weights = self.polygon.weights().unwrap_or_default();
        let s = segment(t, coords.len(), 2);
        rational_average(&coords[s..s + 3], &weights[s..s + 3], &quadratic_basis(t, s))
    }
}

/// Cubic rational B-spline with uniformly spaced knots.
///
/// With all weights equal it matches [`CubicBezierSpline`](crate::piecewise::CubicBezierSpline).
#[derive(Clone, Debug, PartialEq)]
pub struct CubicRationalBSpline {
    polygon: ControlPolygon,
}

impl CubicRationalBSpline {
    /// Creates a spline without any points
    pub fn new() -> Self {
        CubicRationalBSpline {
            polygon: ControlPolygon::weighted(),
        }
    }
}

impl Default for CubicRationalBSpline {
    fn default() -> Self {
        CubicRationalBSpline::new()
    }
}

impl PolygonAccess for CubicRationalBSpline {
    fn polygon_mut(&mut self) -> &mut ControlPolygon {
        &mut self.polygon
    }
}

impl Curve for CubicRationalBSpline {
    fn name(&self) -> &'static str {
        "Cubic Rational B-Spline"
    }

    fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    fn max_t(&self) -> f64 {
        segments_max_t(self.polygon.len(), 3)
    }

    fn evaluate(&self, _axis: Axis, coords: &[f64], t: f64) -> f64 {
        let weights = self.polygon.weights().unwrap_or_default();
        let s = segment(t, coords.len(), 3);
        rational_average(&coords[s..s + 4], &weights[s..s + 4], &cubic_basis(t, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Point;
    use approx::assert_abs_diff_eq;

    #[test]
    fn basis_sums() {
        for i in 0..=40 {
            let t = i as f64 / 10.0;
            let s = (t as usize).min(3);
            let quadratic: f64 = quadratic_basis(t, s).iter().sum();
            let cubic: f64 = cubic_basis(t, s).iter().sum();
            assert_abs_diff_eq!(quadratic, 2.0, epsilon = 1e-9);
            assert_abs_diff_eq!(cubic, 6.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn basis_at_segment_start() {
        assert_eq!(quadratic_basis(2.0, 2), [1.0, 1.0, 0.0]);
        assert_eq!(cubic_basis(1.0, 1), [1.0, 4.0, 1.0, 0.0]);
    }

    #[test]
    fn quarter_circle() {
        let mut curve = RationalBezierCurve::new();
        curve.add_point(Point::new(1.0, 0.0));
        curve.add_point(Point::new(1.0, 1.0));
        curve.add_point(Point::new(0.0, 1.0));
        curve.set_weight(1, std::f64::consts::FRAC_1_SQRT_2).unwrap();

        for i in 0..=20 {
            let p = curve.point_at(i as f64 / 20.0);
            assert_abs_diff_eq!(p.coords.norm(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn heavier_points_attract() {
        let mut curve = CubicRationalBSpline::new();
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (20.0, 20.0), (30.0, 0.0), (40.0, 0.0)] {
            curve.add_point(Point::new(x, y));
        }
        let target = Point::new(20.0, 20.0);
        let before = nalgebra::distance(&curve.point_at(1.0), &target);
        curve.set_weight(2, 10.0).unwrap();
        let after = nalgebra::distance(&curve.point_at(1.0), &target);
        assert!(after < before);
    }

    #[test]
    fn zero_weights_give_nan() {
        let mut curve = QuadraticRationalBSpline::new();
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (20.0, 20.0)] {
            curve.add_point(Point::new(x, y));
        }
        for i in 0..3 {
            curve.set_weight(i, 0.0).unwrap();
        }
        assert!(curve.point_at(0.5).x.is_nan());
    }

    #[test]
    fn remove_drops_matching_weight() {
        let mut curve = RationalBezierCurve::new();
        for i in 0..4 {
            curve.add_point(Point::new(i as f64, 0.0));
            curve.set_weight(i, i as f64 + 1.0).unwrap();
        }
        assert_eq!(curve.remove_point(&Point::new(1.0, 0.0)), Some(1));
        assert_eq!(curve.weights(), Some(&[1.0, 3.0, 4.0][..]));
        assert_eq!(curve.remove_point(&Point::new(7.0, 0.0)), None);
        assert_eq!(curve.points().len(), curve.weights().map_or(0, <[f64]>::len));
    }
}
