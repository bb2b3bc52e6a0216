#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bezier;
pub mod bounding_box;
pub mod curve;
pub mod draw;
pub mod elevation;
pub mod error;
pub mod kind;
pub mod piecewise;
pub mod polygon;
pub mod rational;
pub mod sample;
pub mod spline;

pub use crate::bezier::{BernsteinBezierCurve, BezierCurve};
pub use crate::bounding_box::BoundingBox;
pub use crate::curve::{Axis, Curve, Point};
pub use crate::elevation::DegreeElevationCurve;
pub use crate::error::{Result, SplineError};
pub use crate::kind::CurveKind;
pub use crate::piecewise::{CubicBezierSpline, CubicCardinalSpline, QuadraticBezierSpline};
pub use crate::polygon::ControlPolygon;
pub use crate::rational::{CubicRationalBSpline, QuadraticRationalBSpline, RationalBezierCurve};
pub use crate::sample::{sample, Samples};
pub use crate::spline::Spline;
