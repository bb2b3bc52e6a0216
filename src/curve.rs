//! The capability shared by every curve family.

use log::debug;

use crate::error::{Result, SplineError};
use crate::polygon::ControlPolygon;

/// A point in the plane
pub type Point = nalgebra::Point2<f64>;

/// Recommended sampling increment unless a family says otherwise
pub const DEFAULT_STEP_SIZE: f64 = 0.001;

/// Selects which coordinate an evaluation works on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal coordinate
    X,
    /// The vertical coordinate
    Y,
}

impl Axis {
    /// Both axes in order
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Picks this axis' coordinate of `point`
    pub fn of(self, point: &Point) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }
}

pub(crate) mod sealed {
    use crate::polygon::ControlPolygon;

    /// Mutable polygon access, only reachable through the provided mutators of
    /// [`Curve`](super::Curve) which refresh derived state afterwards.
    pub trait PolygonAccess {
        fn polygon_mut(&mut self) -> &mut ControlPolygon;
    }
}

/// A parametric curve steered by an ordered set of control points.
///
/// The families of this crate store their points in a [`ControlPolygon`] and provide the
/// evaluation algorithm. The polygon can only be changed through the provided mutators,
/// which keep it and any derived state consistent: each of them calls [`Curve::refresh`]
/// once the polygon changed. The trait is sealed for that reason.
///
/// # Evaluation precondition
///
/// [`Curve::evaluate`] may only be called while [`Curve::can_evaluate`] holds,
/// i.e. with at least two points and a positive [`Curve::max_t`], and with `t` in `[0, max_t]`.
/// Nothing checks this; the [`Samples`](crate::sample::Samples) iterator does it once for a
/// whole parameter sweep.
pub trait Curve: sealed::PolygonAccess {
    /// Human readable family name
    fn name(&self) -> &'static str;

    /// The control points (and weights) of this curve
    fn polygon(&self) -> &ControlPolygon;

    /// Closed upper bound of the parameter domain `[0, max_t]`.
    ///
    /// May depend on the number of control points.
    fn max_t(&self) -> f64 {
        1.0
    }

    /// Recommended increment when sweeping `t` across the domain
    fn step_size(&self) -> f64 {
        DEFAULT_STEP_SIZE
    }

    /// Recomputes state derived from the control points
    fn refresh(&mut self) {}

    /// Evaluates one coordinate of the curve at `t`.
    ///
    /// `coords` holds the `axis` coordinate of every control point in order.
    fn evaluate(&self, axis: Axis, coords: &[f64], t: f64) -> f64;

    /// The control points in insertion order
    fn points(&self) -> &[Point] {
        self.polygon().points()
    }

    /// The per point weights of rational families
    fn weights(&self) -> Option<&[f64]> {
        self.polygon().weights()
    }

    /// Whether the curve carries per point weights
    fn is_weighted(&self) -> bool {
        self.polygon().is_weighted()
    }

    /// Whether [`Curve::evaluate`] may currently be called
    fn can_evaluate(&self) -> bool {
        self.points().len() >= 2 && self.max_t() > 0.0
    }

    /// Appends a control point
    fn add_point(&mut self, point: Point) {
        debug!("{}: adding point ({}, {})", self.name(), point.x, point.y);
        self.polygon_mut().push(point);
        self.refresh();
    }

    /// Removes the control point at `index`
    fn remove_at(&mut self, index: usize) -> Result<Point> {
        let point = self.polygon_mut().remove(index)?;
        debug!("{}: removed point {} ({}, {})", self.name(), index, point.x, point.y);
        self.refresh();
        Ok(point)
    }

    /// Removes the first control point equal to `point`.
    ///
    /// Returns the index it was removed from or `None` if no such point exists,
    /// in which case nothing changes.
    fn remove_point(&mut self, point: &Point) -> Option<usize> {
        let index = self.polygon().position(point)?;
        self.remove_at(index).ok().map(|_| index)
    }

    /// Sets the weight of the point at `index`.
    ///
    /// Fails for unweighted families and out of range indices. The value itself is not checked.
    fn set_weight(&mut self, index: usize, weight: f64) -> Result<()> {
        if !self.is_weighted() {
            return Err(SplineError::Unweighted(self.name()));
        }
        self.polygon_mut().set_weight(index, weight)?;
        debug!("{}: weight of point {} set to {}", self.name(), index, weight);
        self.refresh();
        Ok(())
    }

    /// Evaluates both coordinates at `t`.
    ///
    /// Copies the coordinates on every call; use [`Samples`](crate::sample::Samples) for sweeps.
    fn point_at(&self, t: f64) -> Point {
        let polygon = self.polygon();
        Point::new(
            self.evaluate(Axis::X, &polygon.coords(Axis::X), t),
            self.evaluate(Axis::Y, &polygon.coords(Axis::Y), t),
        )
    }
}
