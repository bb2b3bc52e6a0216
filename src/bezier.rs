//! Single segment bezier curves over all control points.
//!
//! [`BezierCurve`] and [`BernsteinBezierCurve`] describe the same curve of degree `n - 1` for `n`
//! control points, but compute it differently: the former by repeated linear interpolation
//! (de castlejau), the latter through the explicit bernstein basis.

use num::{BigUint, One, ToPrimitive};
use smallvec::SmallVec;

use crate::curve::sealed::PolygonAccess;
use crate::curve::{Axis, Curve};
use crate::polygon::ControlPolygon;

/// Per point scratch values, stack allocated for curves up to degree 7
pub type Scratch = SmallVec<[f64; 8]>;

/// Evaluates a bezier curve's coordinate at `t` using de castlejau's algorithm.
///
/// Every pass replaces each value by the interpolation with its successor
/// and drops the last one, until a single value is left.
/// Costs `O(n^2)` but is numerically stable, since only convex combinations are formed.
pub fn castlejau_eval(coords: &[f64], t: f64) -> f64 {
    let mut coords: Scratch = coords.iter().copied().collect();
    let t_inv = 1.0 - t;
    for passes in (1..coords.len()).rev() {
        for i in 0..passes {
            coords[i] = coords[i] * t_inv + coords[i + 1] * t;
        }
    }
    coords[0]
}

/// Computes `0!, 1!, ..., n!` exactly
pub fn factorials(n: usize) -> Vec<BigUint> {
    let mut factorials = Vec::with_capacity(n + 1);
    let mut factorial = BigUint::one();
    factorials.push(factorial.clone());
    for k in 1..=n {
        factorial *= BigUint::from(k as u64);
        factorials.push(factorial.clone());
    }
    factorials
}

/// Computes `n` choose `k` exactly.
///
/// Returns zero for `k > n`.
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::default();
    }
    let f = factorials(n);
    &f[n] / (&f[k] * &f[n - k])
}

/// Computes `n` choose `i` for every `i` in `0..=n` as floats.
///
/// The coefficients are divided out exactly before being converted, so no precision is lost
/// to overflowing intermediate factorials. Coefficients beyond `f64::MAX` become infinite.
pub fn binomial_row(n: usize) -> Scratch {
    let f = factorials(n);
    (0..=n)
        .map(|i| {
            let coefficient = &f[n] / (&f[i] * &f[n - i]);
            coefficient.to_f64().unwrap_or(f64::INFINITY)
        })
        .collect()
}

/// Evaluates the `count` bernstein polynomials of degree `count - 1` at `t`.
///
/// The `i`-th value is `C(n, i) * t^i * (1 - t)^(n - i)` with `n = count - 1`.
/// For `t` in `[0, 1]` the values sum to one.
///
/// Both the basis size and the exact factorials grow with `count`,
/// which makes this the slow path for curves with many points.
pub fn bernstein_weights(count: usize, t: f64) -> Scratch {
    if count == 0 {
        return Scratch::new();
    }
    let n = count - 1;
    let t_inv = 1.0 - t;
    binomial_row(n)
        .into_iter()
        .enumerate()
        .map(|(i, coefficient)| coefficient * t.powi(i as i32) * t_inv.powi((n - i) as i32))
        .collect()
}

/// Bezier curve evaluated with de castlejau's algorithm.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BezierCurve {
    polygon: ControlPolygon,
}

impl BezierCurve {
    /// Creates a curve without any points
    pub fn new() -> Self {
        BezierCurve {
            polygon: ControlPolygon::new(),
        }
    }
}

impl PolygonAccess for BezierCurve {
    fn polygon_mut(&mut self) -> &mut ControlPolygon {
        &mut self.polygon
    }
}

impl Curve for BezierCurve {
    fn name(&self) -> &'static str {
        "De Casteljau's Bezier Curve"
    }

    fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    fn evaluate(&self, _axis: Axis, coords: &[f64], t: f64) -> f64 {
        castlejau_eval(coords, t)
    }
}

/// Bezier curve evaluated as a sum over the bernstein basis.
///
/// Same curve as [`BezierCurve`] up to rounding, but slows down noticeably with many points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BernsteinBezierCurve {
    polygon: ControlPolygon,
}

impl BernsteinBezierCurve {
    /// Creates a curve without any points
    pub fn new() -> Self {
        BernsteinBezierCurve {
            polygon: ControlPolygon::new(),
        }
    }
}

impl PolygonAccess for BernsteinBezierCurve {
    fn polygon_mut(&mut self) -> &mut ControlPolygon {
        &mut self.polygon
    }
}

impl Curve for BernsteinBezierCurve {
    fn name(&self) -> &'static str {
        "Bernstein Bezier Curve"
    }

    fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    fn evaluate(&self, _axis: Axis, coords: &[f64], t: f64) -> f64 {
        // The basis is a partition of unity, so no normalization is needed
        bernstein_weights(coords.len(), t)
            .iter()
            .zip(coords)
            .map(|(b, c)| b * c)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Point;
    use approx::assert_abs_diff_eq;

    #[test]
    fn line_midpoint() {
        let mut curve = BezierCurve::new();
        curve.add_point(Point::new(0.0, 0.0));
        curve.add_point(Point::new(10.0, 10.0));
        assert_eq!(curve.evaluate(Axis::X, &[0.0, 10.0], 0.5), 5.0);
        assert_eq!(curve.evaluate(Axis::Y, &[0.0, 10.0], 0.5), 5.0);
        assert_eq!(curve.point_at(0.5), Point::new(5.0, 5.0));
    }

    #[test]
    fn quadratic_by_hand() {
        // (1-t)^2 * 0 + 2t(1-t) * 1 + t^2 * 0 at t = 0.5
        assert_abs_diff_eq!(castlejau_eval(&[0.0, 1.0, 0.0], 0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(castlejau_eval(&[0.0, 1.0, 0.0], 0.25), 0.375, epsilon = 1e-12);
    }

    #[test]
    fn endpoints_interpolate() {
        let coords = [3.0, -7.0, 12.0, 0.5, 9.0];
        assert_eq!(castlejau_eval(&coords, 0.0), 3.0);
        assert_eq!(castlejau_eval(&coords, 1.0), 9.0);

        let curve = BernsteinBezierCurve::new();
        assert_abs_diff_eq!(curve.evaluate(Axis::X, &coords, 0.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.evaluate(Axis::X, &coords, 1.0), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn exact_binomials() {
        assert_eq!(binomial(4, 2), BigUint::from(6u32));
        assert_eq!(binomial(5, 0), BigUint::from(1u32));
        assert_eq!(binomial(3, 4), BigUint::from(0u32));
        // 100! alone is far beyond u128
        assert_eq!(
            binomial(100, 50),
            "100891344545564193334812497256".parse::<BigUint>().unwrap()
        );
        assert_eq!(&binomial_row(4)[..], &[1.0, 4.0, 6.0, 4.0, 1.0]);
    }

    #[test]
    fn bernstein_partition_of_unity() {
        for count in 1..30 {
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let sum: f64 = bernstein_weights(count, t).iter().sum();
                assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
            }
        }
        assert!(bernstein_weights(0, 0.5).is_empty());
    }

    #[test]
    fn methods_agree() {
        let xs = [50.0, 200.0, 0.0, 50.0, 120.0, -30.0, 77.0, 10.0, 5.0, 300.0, 42.0];
        let castlejau = BezierCurve::new();
        let bernstein = BernsteinBezierCurve::new();
        for len in 2..=xs.len() {
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                assert_abs_diff_eq!(
                    castlejau.evaluate(Axis::X, &xs[..len], t),
                    bernstein.evaluate(Axis::X, &xs[..len], t),
                    epsilon = 1e-6
                );
            }
        }
    }
}
