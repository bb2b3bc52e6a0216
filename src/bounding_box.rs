//! Axis aligned bounding boxes around control points and sampled curves.

use crate::curve::Point;

/// Axis aligned box spanned by its minimal and maximal corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Corner with the smallest coordinates
    pub min: Point,
    /// Corner with the largest coordinates
    pub max: Point,
}

impl BoundingBox {
    /// Constructs the smallest box containing every point.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_iter<I: IntoIterator<Item = Point>>(points: I) -> Option<BoundingBox> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bb = BoundingBox {
            min: first,
            max: first,
        };
        for p in points {
            bb.include(p);
        }
        Some(bb)
    }

    /// Grows the box until it contains `p`
    pub fn include(&mut self, p: Point) {
        if self.min.x > p.x {
            self.min.x = p.x;
        }
        if self.min.y > p.y {
            self.min.y = p.y;
        }
        if self.max.x < p.x {
            self.max.x = p.x;
        }
        if self.max.y < p.y {
            self.max.y = p.y;
        }
    }

    /// Returns a copy grown by `margin` on every side
    pub fn padded(&self, margin: f64) -> BoundingBox {
        BoundingBox {
            min: Point::new(self.min.x - margin, self.min.y - margin),
            max: Point::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Checks whether `p` lies inside or on the border of the box
    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// Extent along the x axis
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along the y axis
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

impl From<[Point; 2]> for BoundingBox {
    fn from(array: [Point; 2]) -> Self {
        BoundingBox {
            min: array[0],
            max: array[1],
        }
    }
}

impl From<BoundingBox> for [Point; 2] {
    fn from(bb: BoundingBox) -> Self {
        [bb.min, bb.max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_all_points() {
        let bb = BoundingBox::from_iter([
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.5, 0.5),
        ])
        .unwrap();
        assert_eq!(bb.min, Point::new(-2.0, -1.0));
        assert_eq!(bb.max, Point::new(3.0, 4.0));
        assert_eq!(bb.width(), 5.0);
        assert_eq!(bb.height(), 5.0);
        assert!(bb.contains(Point::new(0.0, 0.0)));
        assert!(!bb.contains(Point::new(0.0, 5.0)));
    }

    #[test]
    fn empty_has_no_box() {
        assert!(BoundingBox::from_iter(std::iter::empty()).is_none());
    }

    #[test]
    fn padding() {
        let bb = BoundingBox::from([Point::new(0.0, 0.0), Point::new(1.0, 2.0)]).padded(1.0);
        assert_eq!(<[Point; 2]>::from(bb), [Point::new(-1.0, -1.0), Point::new(2.0, 3.0)]);
    }
}
