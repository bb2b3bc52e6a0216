//! The ordered, mutable set of control points a curve is built from.

use crate::bounding_box::BoundingBox;
use crate::curve::{Axis, Point};
use crate::error::{Result, SplineError};

/// Weight given to every newly added point of a weighted polygon
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Control points in insertion order, optionally paired with one weight per point.
///
/// A polygon is either weighted or not for its whole lifetime.
/// For weighted polygons `weights[i]` always belongs to `points[i]`:
/// adding a point appends [`DEFAULT_WEIGHT`] and removing a point removes its weight.
///
/// Weights are not range checked. Restricting them (e.g. to `0..=20`) is up to the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlPolygon {
    points: Vec<Point>,
    weights: Option<Vec<f64>>,
}

impl ControlPolygon {
    /// Creates an empty polygon without weights
    pub fn new() -> Self {
        ControlPolygon {
            points: Vec::new(),
            weights: None,
        }
    }

    /// Creates an empty polygon carrying one weight per point
    pub fn weighted() -> Self {
        ControlPolygon {
            points: Vec::new(),
            weights: Some(Vec::new()),
        }
    }

    /// The control points in insertion order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The per point weights, `None` if the polygon is unweighted
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// Whether this polygon carries weights
    pub fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no control points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a point (and a default weight if weighted)
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
        if let Some(weights) = &mut self.weights {
            weights.push(DEFAULT_WEIGHT);
        }
    }

    /// Removes the point (and its weight) at `index`, shifting later points down.
    pub fn remove(&mut self, index: usize) -> Result<Point> {
        if index >= self.points.len() {
            return Err(SplineError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        if let Some(weights) = &mut self.weights {
            weights.remove(index);
        }
        Ok(self.points.remove(index))
    }

    /// Index of the first point equal to `point`
    pub fn position(&self, point: &Point) -> Option<usize> {
        self.points.iter().position(|p| p == point)
    }

    /// Overwrites the weight of the point at `index`
    pub fn set_weight(&mut self, index: usize, weight: f64) -> Result<()> {
        let len = self.points.len();
        let weights = self
            .weights
            .as_mut()
            .ok_or(SplineError::UnweightedPolygon)?;
        let slot = weights
            .get_mut(index)
            .ok_or(SplineError::IndexOutOfRange { index, len })?;
        *slot = weight;
        Ok(())
    }

    /// Copies one coordinate of every point into a new vector
    pub fn coords(&self, axis: Axis) -> Vec<f64> {
        self.points.iter().map(|p| axis.of(p)).collect()
    }

    /// Finds the point closest to `target` which is strictly less than `radius` away.
    ///
    /// On ties the earlier point wins.
    pub fn nearest(&self, target: Point, radius: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in self.points.iter().enumerate() {
            let d = nalgebra::distance_squared(p, &target);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }
        best.filter(|&(_, d)| d < radius * radius).map(|(i, _)| i)
    }

    /// Box around all control points, `None` while empty
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_iter(self.points.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> ControlPolygon {
        let mut polygon = ControlPolygon::weighted();
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)] {
            polygon.push(Point::new(x, y));
        }
        polygon
    }

    #[test]
    fn weights_follow_points() {
        let mut polygon = square();
        assert_eq!(polygon.weights(), Some(&[1.0; 4][..]));

        polygon.set_weight(1, 2.0).unwrap();
        polygon.set_weight(2, 3.0).unwrap();
        assert_eq!(polygon.remove(1), Ok(Point::new(10.0, 0.0)));
        assert_eq!(polygon.weights(), Some(&[1.0, 3.0, 1.0][..]));
        assert_eq!(polygon.len(), 3);

        polygon.push(Point::new(5.0, 5.0));
        assert_eq!(polygon.weights(), Some(&[1.0, 3.0, 1.0, 1.0][..]));
    }

    #[test]
    fn out_of_range() {
        let mut polygon = square();
        assert_eq!(
            polygon.remove(4),
            Err(SplineError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            polygon.set_weight(7, 1.0),
            Err(SplineError::IndexOutOfRange { index: 7, len: 4 })
        );
        assert_eq!(polygon.len(), 4);
    }

    #[test]
    fn unweighted_has_no_weights() {
        let mut polygon = ControlPolygon::new();
        polygon.push(Point::new(1.0, 2.0));
        assert!(!polygon.is_weighted());
        assert_eq!(polygon.weights(), None);
        assert_eq!(polygon.set_weight(0, 2.0), Err(SplineError::UnweightedPolygon));
    }

    #[test]
    fn duplicates_resolve_to_first() {
        let mut polygon = ControlPolygon::new();
        polygon.push(Point::new(1.0, 1.0));
        polygon.push(Point::new(2.0, 2.0));
        polygon.push(Point::new(1.0, 1.0));
        assert_eq!(polygon.position(&Point::new(1.0, 1.0)), Some(0));
        assert_eq!(polygon.position(&Point::new(3.0, 3.0)), None);
    }

    #[test]
    fn coordinates_per_axis() {
        let polygon = square();
        assert_eq!(polygon.coords(Axis::X), vec![0.0, 10.0, 10.0, 0.0]);
        assert_eq!(polygon.coords(Axis::Y), vec![0.0, 0.0, 10.0, 10.0]);
    }

    #[test]
    fn nearest_within_radius() {
        let polygon = square();
        assert_eq!(polygon.nearest(Point::new(9.0, 1.0), 10.0), Some(1));
        assert_eq!(polygon.nearest(Point::new(5.0, 5.0), 1.0), None);
        assert_eq!(ControlPolygon::new().nearest(Point::new(0.0, 0.0), 10.0), None);
    }
}
