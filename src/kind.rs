//! Selecting a curve family, including the family's construction parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SplineError};

/// Every curve family together with its parameters.
///
/// Parses from and displays as the identifiers `bezier`, `bernsteinBezier`,
/// `degreeElevationX<times>`, `quadraticBezierSpline`, `cubicBezierSpline`,
/// `rationalBezierCurve`, `quadraticRationalBSpline`, `cubicRationalBSpline` and
/// `cubicCardinalSpline<tension>` where the tension's decimal point is written as `_`
/// (e.g. `cubicCardinalSpline0_5`).
///
/// ```
/// use nspline::CurveKind;
///
/// let kind: CurveKind = "cubicCardinalSpline0_35".parse().unwrap();
/// assert_eq!(kind, CurveKind::CubicCardinalSpline { tension: 0.35 });
/// assert_eq!(kind.to_string(), "cubicCardinalSpline0_35");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveKind {
    /// Bezier curve evaluated with de castlejau's algorithm
    Bezier,
    /// Bezier curve evaluated through the bernstein basis
    BernsteinBezier,
    /// Bezier curve approximated by its control polygon after elevating the degree `times` times
    DegreeElevation {
        /// Number of elevations
        times: usize,
    },
    /// Piecewise quadratic bezier spline
    QuadraticBezierSpline,
    /// Piecewise cubic bezier spline
    CubicBezierSpline,
    /// Rational bezier curve
    RationalBezierCurve,
    /// Quadratic rational B-spline
    QuadraticRationalBSpline,
    /// Cubic rational B-spline
    CubicRationalBSpline,
    /// Cubic cardinal spline
    CubicCardinalSpline {
        /// Tension, `0.5` for Catmull-Rom
        tension: f64,
    },
}

impl CurveKind {
    /// Families and parameters offered for selection by default
    pub const PRESETS: [CurveKind; 20] = [
        CurveKind::Bezier,
        CurveKind::BernsteinBezier,
        CurveKind::DegreeElevation { times: 1 },
        CurveKind::DegreeElevation { times: 2 },
        CurveKind::DegreeElevation { times: 5 },
        CurveKind::DegreeElevation { times: 10 },
        CurveKind::DegreeElevation { times: 100 },
        CurveKind::DegreeElevation { times: 1000 },
        CurveKind::QuadraticBezierSpline,
        CurveKind::CubicBezierSpline,
        CurveKind::RationalBezierCurve,
        CurveKind::QuadraticRationalBSpline,
        CurveKind::CubicRationalBSpline,
        CurveKind::CubicCardinalSpline { tension: 0.2 },
        CurveKind::CubicCardinalSpline { tension: 0.35 },
        CurveKind::CubicCardinalSpline { tension: 0.5 },
        CurveKind::CubicCardinalSpline { tension: 0.65 },
        CurveKind::CubicCardinalSpline { tension: 0.8 },
        CurveKind::CubicCardinalSpline { tension: 1.0 },
        CurveKind::CubicCardinalSpline { tension: 2.0 },
    ];

    /// Whether curves of this family carry per point weights
    pub fn is_weighted(self) -> bool {
        matches!(
            self,
            CurveKind::RationalBezierCurve
                | CurveKind::QuadraticRationalBSpline
                | CurveKind::CubicRationalBSpline
        )
    }

    /// Human readable name including the parameters
    pub fn label(self) -> String {
        match self {
            CurveKind::Bezier => "De Casteljau's Bezier Curve".to_string(),
            CurveKind::BernsteinBezier => "Bernstein Bezier Curve".to_string(),
            CurveKind::DegreeElevation { times } => format!("Degree Elevation x{}", times),
            CurveKind::QuadraticBezierSpline => "Quadratic Bezier Spline".to_string(),
            CurveKind::CubicBezierSpline => "Cubic Bezier Spline".to_string(),
            CurveKind::RationalBezierCurve => "Rational Bezier Curve".to_string(),
            CurveKind::QuadraticRationalBSpline => "Quadratic Rational B-Spline".to_string(),
            CurveKind::CubicRationalBSpline => "Cubic Rational B-Spline".to_string(),
            CurveKind::CubicCardinalSpline { tension } if tension == 0.5 => {
                "Cubic Cardinal Spline τ=0.5 (Catmull-Rom)".to_string()
            }
            CurveKind::CubicCardinalSpline { tension } => {
                format!("Cubic Cardinal Spline τ={}", tension)
            }
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveKind::Bezier => f.write_str("bezier"),
            CurveKind::BernsteinBezier => f.write_str("bernsteinBezier"),
            CurveKind::DegreeElevation { times } => write!(f, "degreeElevationX{}", times),
            CurveKind::QuadraticBezierSpline => f.write_str("quadraticBezierSpline"),
            CurveKind::CubicBezierSpline => f.write_str("cubicBezierSpline"),
            CurveKind::RationalBezierCurve => f.write_str("rationalBezierCurve"),
            CurveKind::QuadraticRationalBSpline => f.write_str("quadraticRationalBSpline"),
            CurveKind::CubicRationalBSpline => f.write_str("cubicRationalBSpline"),
            CurveKind::CubicCardinalSpline { tension } => {
                write!(f, "cubicCardinalSpline{}", tension.to_string().replace('.', "_"))
            }
        }
    }
}

impl FromStr for CurveKind {
    type Err = SplineError;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || SplineError::UnknownKind(s.to_string());
        let kind = match s {
            "bezier" => CurveKind::Bezier,
            "bernsteinBezier" => CurveKind::BernsteinBezier,
            "quadraticBezierSpline" => CurveKind::QuadraticBezierSpline,
            "cubicBezierSpline" => CurveKind::CubicBezierSpline,
            "rationalBezierCurve" => CurveKind::RationalBezierCurve,
            "quadraticRationalBSpline" => CurveKind::QuadraticRationalBSpline,
            "cubicRationalBSpline" => CurveKind::CubicRationalBSpline,
            _ => {
                if let Some(times) = s.strip_prefix("degreeElevationX") {
                    let times = times.parse().map_err(|_| unknown())?;
                    CurveKind::DegreeElevation { times }
                } else if let Some(tension) = s.strip_prefix("cubicCardinalSpline") {
                    let tension = tension
                        .replacen('_', ".", 1)
                        .parse::<f64>()
                        .ok()
                        .filter(|tension| tension.is_finite())
                        .ok_or_else(unknown)?;
                    CurveKind::CubicCardinalSpline { tension }
                } else {
                    return Err(unknown());
                }
            }
        };
        Ok(kind)
    }
}
