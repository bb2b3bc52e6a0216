//! Draw a curve in a svg

use std::fmt::{Display, Formatter, Write};
use std::marker::PhantomData;

use crate::bounding_box::BoundingBox;
use crate::curve::{Curve, Point};
use crate::draw::{weight_color, DrawCurve};
use crate::sample::Samples;
use crate::spline::Spline;

/// Helper trait implemented by [`Absolute`] and [`Relative`] to choose
/// how the coordinates are interpreted in the svg's path.
///
/// This effectively toggles between lower and upper case letters for the path commands.
pub trait CoordRepr {
    /// Character to use for the MoveTo command
    const M: &'static str;

    /// Character to use for the LineTo command
    const L: &'static str;

    /// Whether each point is written as the offset from its predecessor
    const RELATIVE: bool;
}

/// Interpret the svg path's coordinates as absolute.
pub struct Absolute;
impl CoordRepr for Absolute {
    const M: &'static str = "M";
    const L: &'static str = "L";
    const RELATIVE: bool = false;
}

/// Interpret the svg path's coordinates as relative.
pub struct Relative;
impl CoordRepr for Relative {
    const M: &'static str = "m";
    const L: &'static str = "l";
    const RELATIVE: bool = true;
}

/// Writes `points` as a polyline in path data syntax
fn write_polyline<R: CoordRepr>(out: &mut String, points: &[Point]) {
    let mut previous = Point::origin();
    for (i, point) in points.iter().enumerate() {
        let command = if i == 0 { R::M } else { R::L };
        let written = if R::RELATIVE {
            Point::from(point - previous)
        } else {
            *point
        };
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = write!(out, "{} {},{}", command, written.x, written.y);
        previous = *point;
    }
}

/// This type wraps a mutable String reference and implements [`DrawCurve`] on it.
/// The [`DrawCurve::add_curve`] samples the curve and writes the polyline to the string
/// using the path commands used in a svg `<path>`'s d attribute
///
/// ```
/// use nspline::{Curve, CurveKind, Point, Spline};
/// use nspline::draw::DrawCurve;
/// use nspline::draw::svg::SVGAbsolutePath;
///
/// let mut curve = Spline::new(CurveKind::DegreeElevation { times: 0 });
/// curve.add_point(Point::new(0.0, 1.0));
/// curve.add_point(Point::new(2.0, 3.0));
/// let mut d = String::new();
/// SVGAbsolutePath::from(&mut d).add_curve(&curve);
/// assert_eq!(d, "M 0,1 L 2,3 L 2,3");
/// ```
pub struct SVGPath<'s, R: CoordRepr>(&'s mut String, PhantomData<&'s R>);

/// Wrapper for writing a curve to a svg's path using absolute coordinates
pub type SVGAbsolutePath<'s> = SVGPath<'s, Absolute>;

/// Wrapper for writing a curve to a svg's path using relative coordinates
pub type SVGRelativePath<'s> = SVGPath<'s, Relative>;

impl<'s, R: CoordRepr> From<&'s mut String> for SVGPath<'s, R> {
    fn from(string: &'s mut String) -> Self {
        SVGPath(string, PhantomData)
    }
}

impl<'s, R: CoordRepr> DrawCurve for SVGPath<'s, R> {
    fn add_curve(&mut self, curve: &Spline) {
        if let Ok(samples) = Samples::new(curve) {
            let points: Vec<Point> = samples.collect();
            write_polyline::<R>(self.0, &points);
        }
    }
}

/// Formats a colour channel triple for svg attributes
fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("rgb({},{},{})", r, g, b)
}

/// Space left around the drawing's content
const MARGIN: f64 = 10.0;

/// Radius of a drawn control point
const POINT_RADIUS: f64 = 3.0;

/// Small svg document made of [`Line`]s, [`Circle`]s, [`Path`]s and [`Text`]s
pub struct SvgScene {
    /// Visible area of the document
    pub view_box: BoundingBox,
    /// Elements in drawing order
    pub elements: Vec<Box<dyn Display>>,
}

impl SvgScene {
    /// Creates an empty document showing `view_box`
    pub fn new(view_box: BoundingBox) -> Self {
        SvgScene {
            view_box,
            elements: Vec::new(),
        }
    }

    /// Appends an element, drawn on top of the previous ones
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }

    /// Draws a curve the way an editor shows it.
    ///
    /// The control polygon is drawn in black below the curve in red.
    /// Control points are black or, for weighted curves, coloured by [`weight_color`]
    /// and labelled with their weight.
    pub fn from_spline(spline: &Spline) -> Self {
        let samples: Vec<Point> = Samples::new(spline)
            .map(|samples| samples.collect())
            .unwrap_or_default();
        let points = spline.points();
        let view_box = BoundingBox::from_iter(points.iter().chain(samples.iter()).copied())
            .map(|bb| bb.padded(MARGIN))
            .unwrap_or(BoundingBox {
                min: Point::origin(),
                max: Point::origin(),
            });
        let mut scene = SvgScene::new(view_box);

        for pair in points.windows(2) {
            scene.add_elem(Line {
                from: pair[0],
                to: pair[1],
                width: None,
                color: "black".to_string(),
            });
        }

        if !samples.is_empty() {
            let mut d = String::new();
            write_polyline::<Absolute>(&mut d, &samples);
            scene.add_elem(Path {
                stroke_color: "red".to_string(),
                d,
                ..Path::default()
            });
        }

        let weights = spline.weights();
        for (i, &center) in points.iter().enumerate() {
            let weight = weights.and_then(|weights| weights.get(i)).copied();
            let color = weight.map_or_else(|| "black".to_string(), |w| rgb(weight_color(w)));
            scene.add_elem(Circle {
                center,
                radius: POINT_RADIUS,
                color: color.clone(),
            });
            if let Some(weight) = weight {
                scene.add_elem(Text {
                    position: Point::new(center.x + POINT_RADIUS * 2.0, center.y - POINT_RADIUS * 2.0),
                    content: format!("{:.2}", weight),
                    color,
                });
            }
        }
        scene
    }
}

impl Display for SvgScene {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.view_box.min.x,
            self.view_box.min.y,
            self.view_box.width(),
            self.view_box.height()
        )?;
        for elem in self.elements.iter() {
            write!(f, "{}", elem)?;
        }
        writeln!(f, "</svg>")
    }
}

/// Straight line between two points
pub struct Line {
    /// Start point
    pub from: Point,
    /// End point
    pub to: Point,
    /// Stroke width, the viewer's default if `None`
    pub width: Option<f64>,
    /// Stroke colour
    pub color: String,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"",
            self.from.x, self.from.y, self.to.x, self.to.y, self.color
        )?;
        if let Some(width) = self.width {
            write!(f, " stroke-width=\"{}\"", width)?;
        }
        writeln!(f, "/>")
    }
}

/// Filled circle
pub struct Circle {
    /// Center
    pub center: Point,
    /// Radius
    pub radius: f64,
    /// Fill colour
    pub color: String,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            self.center.x, self.center.y, self.radius, self.color
        )
    }
}

/// Path given as path data, see [`SVGPath`]
pub struct Path {
    /// Stroke colour
    pub stroke_color: String,
    /// Fill colour
    pub fill_color: String,
    /// Stroke width
    pub width: f64,
    /// The path's d attribute
    pub d: String,
}

impl Default for Path {
    fn default() -> Self {
        Path {
            stroke_color: "black".to_string(),
            fill_color: "none".to_string(),
            width: 1.0,
            d: String::new(),
        }
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<path stroke=\"{}\" fill=\"{}\" stroke-width=\"{}\" d=\"{}\"/>",
            self.stroke_color, self.fill_color, self.width, self.d
        )
    }
}

/// Text label
pub struct Text {
    /// Start of the text's baseline
    pub position: Point,
    /// The label
    pub content: String,
    /// Fill colour
    pub color: String,
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<text x=\"{}\" y=\"{}\" fill=\"{}\">{}</text>",
            self.position.x, self.position.y, self.color, self.content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::CurveKind;

    fn spline(kind: CurveKind, points: &[(f64, f64)]) -> Spline {
        let mut spline = Spline::new(kind);
        for &(x, y) in points {
            spline.add_point(Point::new(x, y));
        }
        spline
    }

    #[test]
    fn path_data() {
        let curve = spline(
            CurveKind::DegreeElevation { times: 0 },
            &[(0.0, 0.0), (10.0, 10.0)],
        );

        let mut d = String::new();
        SVGAbsolutePath::from(&mut d).add_curve(&curve);
        assert_eq!(d, "M 0,0 L 10,10 L 10,10");

        let mut d = String::new();
        SVGRelativePath::from(&mut d).add_curve(&curve);
        assert_eq!(d, "m 0,0 l 10,10 l 0,0");
    }

    #[test]
    fn nothing_to_draw() {
        let curve = spline(CurveKind::Bezier, &[(0.0, 0.0)]);
        let mut d = String::new();
        SVGAbsolutePath::from(&mut d).add_curve(&curve);
        assert!(d.is_empty());
    }

    #[test]
    fn scene_of_unweighted_curve() {
        let curve = spline(CurveKind::Bezier, &[(0.0, 0.0), (0.0, 100.0), (100.0, 100.0)]);
        let svg = SvgScene::from_spline(&curve).to_string();
        assert!(svg.starts_with("<svg viewBox=\"-10 -10 120 120\""));
        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(svg.matches("<path stroke=\"red\"").count(), 1);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("fill=\"black\"/>").count(), 3);
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn scene_of_weighted_curve() {
        let mut curve = spline(
            CurveKind::QuadraticRationalBSpline,
            &[(0.0, 0.0), (0.0, 100.0), (100.0, 100.0)],
        );
        curve.set_weight(1, 5.0).unwrap();
        let svg = SvgScene::from_spline(&curve).to_string();
        assert_eq!(svg.matches("fill=\"rgb(255,0,0)\"/>").count(), 2);
        assert_eq!(svg.matches("fill=\"rgb(255,255,0)\"/>").count(), 1);
        assert!(svg.contains(">5.00</text>"));
        assert_eq!(svg.matches("<text").count(), 3);
    }
}
