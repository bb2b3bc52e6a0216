use nspline::{Curve, CurveKind, Point, Spline};
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(12):
///     print(f"({random()*400:.3f}, {random()*300:.3f}),")
/// ```
pub static POINTS: [(f64, f64); 12] = [
    (52.127, 18.904),
    (311.740, 42.365),
    (7.582, 131.027),
    (198.410, 287.116),
    (366.093, 74.851),
    (140.266, 201.739),
    (24.915, 259.480),
    (279.302, 166.208),
    (392.671, 295.013),
    (88.539, 93.672),
    (233.018, 8.447),
    (161.854, 148.390),
];

/// One curve per preset, all built from [`POINTS`]
pub static SPLINES: Lazy<Vec<Spline>> = Lazy::new(|| {
    CurveKind::PRESETS
        .into_iter()
        .map(|kind| {
            let mut spline = Spline::new(kind);
            for (x, y) in POINTS {
                spline.add_point(Point::new(x, y));
            }
            spline
        })
        .collect()
});
