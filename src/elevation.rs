//! Bezier curves approximated by repeatedly elevating their degree.

use log::trace;
use nalgebra::Matrix2xX;

use crate::curve::sealed::PolygonAccess;
use crate::curve::{Axis, Curve, Point};
use crate::polygon::ControlPolygon;

/// A bezier curve drawn as its control polygon after elevating the degree `times` times.
///
/// Each elevation adds a vertex while keeping the curve's shape. The elevated polygon converges
/// to the curve itself, so sampling its vertices approximates the curve. This is not an exact
/// evaluation between the vertices.
///
/// The domain has one unit of `t` per elevated vertex and the recommended step is `1`,
/// so a sweep visits exactly the vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct DegreeElevationCurve {
    polygon: ControlPolygon,
    times: usize,
    /// Elevated control polygon, one vertex per column
    elevated: Matrix2xX<f64>,
}

impl DegreeElevationCurve {
    /// Creates a curve without any points which will be elevated `times` times
    pub fn new(times: usize) -> Self {
        DegreeElevationCurve {
            polygon: ControlPolygon::new(),
            times,
            elevated: Matrix2xX::zeros(0),
        }
    }

    /// Number of degree elevations applied to the control points
    pub fn times(&self) -> usize {
        self.times
    }

    /// The elevated control polygon's vertices
    pub fn elevated(&self) -> Vec<Point> {
        self.elevated
            .column_iter()
            .map(|column| Point::new(column[0], column[1]))
            .collect()
    }
}

/// Elevates the degree of the bezier curve whose control points are `matrix`' columns.
///
/// Every step turns `m` control points into `m + 1`:
/// the new last point repeats the old last one, the first point stays and every point
/// in between becomes `old[j - 1] * j / m + old[j] * (m - j) / m`.
pub fn elevate(matrix: Matrix2xX<f64>, times: usize) -> Matrix2xX<f64> {
    let n = matrix.ncols();
    let mut elevated = matrix.resize_horizontally(n + times, 0.0);
    if n == 0 {
        return elevated;
    }

    for step in 0..times {
        let m = n + step;
        let last = elevated.column(m - 1).clone_owned();
        elevated.set_column(m, &last);

        // Backwards, so old[j - 1] is still untouched when new[j] is written
        let m_f = m as f64;
        for j in (1..m).rev() {
            let j_f = j as f64;
            let column =
                elevated.column(j - 1) * j_f / m_f + elevated.column(j) * (m_f - j_f) / m_f;
            elevated.set_column(j, &column);
        }
        trace!("elevated to degree {}", m);
    }
    elevated
}

impl PolygonAccess for DegreeElevationCurve {
    fn polygon_mut(&mut self) -> &mut ControlPolygon {
        &mut self.polygon
    }
}

impl Curve for DegreeElevationCurve {
    fn name(&self) -> &'static str {
        "Degree Elevation"
    }

    fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    fn max_t(&self) -> f64 {
        (self.polygon.len() + self.times) as f64
    }

    fn step_size(&self) -> f64 {
        1.0
    }

    fn refresh(&mut self) {
        let points = self.polygon.points();
        let matrix = Matrix2xX::from_fn(points.len(), |row, col| match row {
            0 => points[col].x,
            _ => points[col].y,
        });
        self.elevated = elevate(matrix, self.times);
    }

    fn evaluate(&self, axis: Axis, _coords: &[f64], t: f64) -> f64 {
        let row = match axis {
            Axis::X => 0,
            Axis::Y => 1,
        };
        // t == max_t lies one past the last vertex
        let column = (t as usize).min(self.elevated.ncols() - 1);
        self.elevated[(row, column)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bezier::castlejau_eval;
    use approx::assert_abs_diff_eq;

    fn curve(times: usize, points: &[(f64, f64)]) -> DegreeElevationCurve {
        let mut curve = DegreeElevationCurve::new(times);
        for &(x, y) in points {
            curve.add_point(Point::new(x, y));
        }
        curve
    }

    #[test]
    fn no_elevation_keeps_points() {
        let points = [(300.0, 150.0), (210.0, 240.0), (420.0, 360.0)];
        let curve = curve(0, &points);
        assert_eq!(curve.max_t(), 3.0);
        assert_eq!(curve.step_size(), 1.0);
        for (i, &(x, y)) in points.iter().enumerate() {
            assert_eq!(curve.point_at(i as f64), Point::new(x, y));
        }
        // Upper bound clamps to the last vertex
        assert_eq!(curve.point_at(3.0), Point::new(420.0, 360.0));
    }

    #[test]
    fn elevate_line() {
        let curve = curve(1, &[(0.0, 0.0), (10.0, 10.0)]);
        assert_eq!(curve.max_t(), 3.0);
        assert_eq!(
            curve.elevated(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(5.0, 5.0),
                Point::new(10.0, 10.0)
            ]
        );
    }

    #[test]
    fn elevate_quadratic() {
        let curve = curve(1, &[(0.0, 0.0), (3.0, 6.0), (9.0, 0.0)]);
        let elevated = curve.elevated();
        assert_eq!(elevated.len(), 4);
        assert_eq!(elevated[0], Point::new(0.0, 0.0));
        assert_abs_diff_eq!(elevated[1].x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(elevated[1].y, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(elevated[2].x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(elevated[2].y, 4.0, epsilon = 1e-12);
        assert_eq!(elevated[3], Point::new(9.0, 0.0));
    }

    #[test]
    fn elevation_preserves_shape() {
        let xs = [0.0, 40.0, 100.0, 70.0];
        let matrix = Matrix2xX::from_fn(xs.len(), |_, col| xs[col]);
        let elevated = elevate(matrix, 3);
        let elevated_xs: Vec<f64> = elevated.row(0).iter().copied().collect();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_abs_diff_eq!(
                castlejau_eval(&xs, t),
                castlejau_eval(&elevated_xs, t),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn converges_to_curve() {
        let points = [(0.0, 0.0), (0.0, 100.0), (100.0, 100.0)];
        let curve = curve(1000, &points);
        let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.1).collect();

        let vertices = curve.elevated();
        let degree = (vertices.len() - 1) as f64;
        for (j, vertex) in vertices.iter().enumerate().step_by(50) {
            let t = j as f64 / degree;
            assert_abs_diff_eq!(vertex.x, castlejau_eval(&xs, t), epsilon = 1.0);
            assert_abs_diff_eq!(vertex.y, castlejau_eval(&ys, t), epsilon = 1.0);
        }
    }

    #[test]
    fn follows_mutations() {
        let mut curve = curve(2, &[(0.0, 0.0), (10.0, 0.0)]);
        assert_eq!(curve.elevated().len(), 4);
        curve.add_point(Point::new(10.0, 10.0));
        assert_eq!(curve.elevated().len(), 5);
        assert_eq!(curve.point_at(4.0), Point::new(10.0, 10.0));
        curve.remove_at(0).unwrap();
        assert_eq!(curve.elevated().len(), 4);
        assert_eq!(curve.point_at(0.0), Point::new(10.0, 0.0));
    }
}
