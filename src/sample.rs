//! Sweeping a curve's parameter domain to build a polyline.

use log::debug;

use crate::curve::{Axis, Curve, Point};
use crate::error::{Result, SplineError};

/// Iterator over the points of a curve at evenly spaced parameters.
///
/// Yields the point at `t = 0`, then keeps advancing `t` by the step (never past `max_t`)
/// until `max_t` itself has been yielded.
/// The coordinates are copied once on creation instead of on every evaluation.
///
/// ```
/// use nspline::{BezierCurve, Curve, Point, Samples};
///
/// let mut curve = BezierCurve::new();
/// curve.add_point(Point::new(0.0, 0.0));
/// curve.add_point(Point::new(10.0, 10.0));
///
/// let points: Vec<Point> = Samples::new(&curve)?.with_step_size(0.5)?.collect();
/// assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 10.0)]);
/// # Ok::<(), nspline::SplineError>(())
/// ```
pub struct Samples<'a, C: ?Sized + Curve> {
    curve: &'a C,
    xs: Vec<f64>,
    ys: Vec<f64>,
    max_t: f64,
    step: f64,
    next: Option<f64>,
}

impl<'a, C: ?Sized + Curve> Samples<'a, C> {
    /// Starts a sweep with the curve's recommended step size.
    ///
    /// Fails if the curve can't be evaluated yet.
    pub fn new(curve: &'a C) -> Result<Self> {
        let polygon = curve.polygon();
        if polygon.len() < 2 {
            return Err(SplineError::NotEnoughPoints(polygon.len()));
        }
        let max_t = curve.max_t();
        if !(max_t > 0.0) {
            return Err(SplineError::EmptyDomain(max_t));
        }
        let step = curve.step_size();
        debug!(
            "{}: sampling {} points over [0, {}] with step {}",
            curve.name(),
            polygon.len(),
            max_t,
            step
        );

        Ok(Samples {
            curve,
            xs: polygon.coords(Axis::X),
            ys: polygon.coords(Axis::Y),
            max_t,
            step,
            next: Some(0.0),
        })
    }

    /// Replaces the step size.
    ///
    /// The step has to be large enough to move `t` at the end of the domain,
    /// otherwise the sweep would never arrive there.
    pub fn with_step_size(mut self, step: f64) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) || self.max_t + step == self.max_t {
            return Err(SplineError::InvalidStepSize(step));
        }
        self.step = step;
        Ok(self)
    }

    /// Upper bound of the sweep
    pub fn max_t(&self) -> f64 {
        self.max_t
    }
}

impl<'a, C: ?Sized + Curve> Iterator for Samples<'a, C> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let t = self.next?;
        self.next = if t < self.max_t {
            let advanced = (t + self.step).min(self.max_t);
            // A step lost to rounding jumps straight to the end
            Some(if advanced > t { advanced } else { self.max_t })
        } else {
            None
        };
        Some(Point::new(
            self.curve.evaluate(Axis::X, &self.xs, t),
            self.curve.evaluate(Axis::Y, &self.ys, t),
        ))
    }
}

/// Collects the curve's polyline at its recommended step size
pub fn sample<C: ?Sized + Curve>(curve: &C) -> Result<Vec<Point>> {
    Ok(Samples::new(curve)?.collect())
}
