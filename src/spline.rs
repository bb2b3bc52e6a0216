//! A single datatype for curves of every family.
//!
//! Lets a caller switch families at runtime by [`CurveKind`] without boxing.

use log::debug;

use crate::bezier::{BernsteinBezierCurve, BezierCurve};
use crate::curve::sealed::PolygonAccess;
use crate::curve::{Axis, Curve};
use crate::elevation::DegreeElevationCurve;
use crate::kind::CurveKind;
use crate::piecewise::{CubicBezierSpline, CubicCardinalSpline, QuadraticBezierSpline};
use crate::polygon::ControlPolygon;
use crate::rational::{CubicRationalBSpline, QuadraticRationalBSpline, RationalBezierCurve};

/// Curve of any family
#[derive(Clone, Debug, PartialEq)]
pub enum Spline {
    /// See [`BezierCurve`]
    Bezier(BezierCurve),
    /// See [`BernsteinBezierCurve`]
    BernsteinBezier(BernsteinBezierCurve),
    /// See [`DegreeElevationCurve`]
    DegreeElevation(DegreeElevationCurve),
    /// See [`QuadraticBezierSpline`]
    QuadraticBezierSpline(QuadraticBezierSpline),
    /// See [`CubicBezierSpline`]
    CubicBezierSpline(CubicBezierSpline),
    /// See [`CubicCardinalSpline`]
    CubicCardinalSpline(CubicCardinalSpline),
    /// See [`RationalBezierCurve`]
    RationalBezierCurve(RationalBezierCurve),
    /// See [`QuadraticRationalBSpline`]
    QuadraticRationalBSpline(QuadraticRationalBSpline),
    /// See [`CubicRationalBSpline`]
    CubicRationalBSpline(CubicRationalBSpline),
}

/// Runs `$body` with `$curve` bound to the wrapped curve
macro_rules! dispatch {
    ($spline:expr, $curve:ident => $body:expr) => {
        match $spline {
            Spline::Bezier($curve) => $body,
            Spline::BernsteinBezier($curve) => $body,
            Spline::DegreeElevation($curve) => $body,
            Spline::QuadraticBezierSpline($curve) => $body,
            Spline::CubicBezierSpline($curve) => $body,
            Spline::CubicCardinalSpline($curve) => $body,
            Spline::RationalBezierCurve($curve) => $body,
            Spline::QuadraticRationalBSpline($curve) => $body,
            Spline::CubicRationalBSpline($curve) => $body,
        }
    };
}

impl Spline {
    /// Creates an empty curve of the given family
    pub fn new(kind: CurveKind) -> Self {
        debug!("creating {}", kind.label());
        match kind {
            CurveKind::Bezier => BezierCurve::new().into(),
            CurveKind::BernsteinBezier => BernsteinBezierCurve::new().into(),
            CurveKind::DegreeElevation { times } => DegreeElevationCurve::new(times).into(),
            CurveKind::QuadraticBezierSpline => QuadraticBezierSpline::new().into(),
            CurveKind::CubicBezierSpline => CubicBezierSpline::new().into(),
            CurveKind::RationalBezierCurve => RationalBezierCurve::new().into(),
            CurveKind::QuadraticRationalBSpline => QuadraticRationalBSpline::new().into(),
            CurveKind::CubicRationalBSpline => CubicRationalBSpline::new().into(),
            CurveKind::CubicCardinalSpline { tension } => CubicCardinalSpline::new(tension).into(),
        }
    }

    /// The family (and parameters) this curve was created with
    pub fn kind(&self) -> CurveKind {
        match self {
            Spline::Bezier(_) => CurveKind::Bezier,
            Spline::BernsteinBezier(_) => CurveKind::BernsteinBezier,
            Spline::DegreeElevation(curve) => CurveKind::DegreeElevation {
                times: curve.times(),
            },
            Spline::QuadraticBezierSpline(_) => CurveKind::QuadraticBezierSpline,
            Spline::CubicBezierSpline(_) => CurveKind::CubicBezierSpline,
            Spline::CubicCardinalSpline(curve) => CurveKind::CubicCardinalSpline {
                tension: curve.tension(),
            },
            Spline::RationalBezierCurve(_) => CurveKind::RationalBezierCurve,
            Spline::QuadraticRationalBSpline(_) => CurveKind::QuadraticRationalBSpline,
            Spline::CubicRationalBSpline(_) => CurveKind::CubicRationalBSpline,
        }
    }
}

impl From<CurveKind> for Spline {
    fn from(kind: CurveKind) -> Self {
        Spline::new(kind)
    }
}

impl PolygonAccess for Spline {
    fn polygon_mut(&mut self) -> &mut ControlPolygon {
        dispatch!(self, curve => curve.polygon_mut())
    }
}

impl Curve for Spline {
    fn name(&self) -> &'static str {
        dispatch!(self, curve => curve.name())
    }

    fn polygon(&self) -> &ControlPolygon {
        dispatch!(self, curve => curve.polygon())
    }

    fn max_t(&self) -> f64 {
        dispatch!(self, curve => curve.max_t())
    }

    fn step_size(&self) -> f64 {
        dispatch!(self, curve => curve.step_size())
    }

    fn refresh(&mut self) {
        dispatch!(self, curve => curve.refresh())
    }

    fn evaluate(&self, axis: Axis, coords: &[f64], t: f64) -> f64 {
        dispatch!(self, curve => curve.evaluate(axis, coords, t))
    }
}

macro_rules! impl_from {
    ($($variant:ident($curve:ty)),* $(,)?) => {
        $(
            impl From<$curve> for Spline {
                fn from(curve: $curve) -> Self {
                    Spline::$variant(curve)
                }
            }
        )*
    };
}
impl_from!(
    Bezier(BezierCurve),
    BernsteinBezier(BernsteinBezierCurve),
    DegreeElevation(DegreeElevationCurve),
    QuadraticBezierSpline(QuadraticBezierSpline),
    CubicBezierSpline(CubicBezierSpline),
    CubicCardinalSpline(CubicCardinalSpline),
    RationalBezierCurve(RationalBezierCurve),
    QuadraticRationalBSpline(QuadraticRationalBSpline),
    CubicRationalBSpline(CubicRationalBSpline),
);
