//! Line/segment intersection with an axis-aligned box.

/// A point in 2D coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Intersections of the line through `through` with slope `slope` and
/// the box spanned by `lower_left` and `upper_right`.
///
/// Returns up to two points; a line through a corner reports that
/// corner once. A horizontal line (slope 0) can only cut the left and
/// right edges.
pub fn line_box_intersections(
    through: Point,
    slope: f64,
    lower_left: Point,
    upper_right: Point,
) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();
    let mut push = |p: Point| {
        if !points.contains(&p) {
            points.push(p);
        }
    };

    // Left and right edges
    let y = through.y + (lower_left.x - through.x) * slope;
    if lower_left.y <= y && y <= upper_right.y {
        push(Point::new(lower_left.x, y));
    }
    let y = through.y + (upper_right.x - through.x) * slope;
    if lower_left.y <= y && y <= upper_right.y {
        push(Point::new(upper_right.x, y));
    }

    // Bottom and top edges
    if slope != 0.0 {
        let x = through.x + (lower_left.y - through.y) / slope;
        if lower_left.x <= x && x <= upper_right.x {
            push(Point::new(x, lower_left.y));
        }
        let x = through.x + (upper_right.y - through.y) / slope;
        if lower_left.x <= x && x <= upper_right.x {
            push(Point::new(x, upper_right.y));
        }
    }

    points
}

/// Intersections of the segment `p1`-`p2` with the box spanned by
/// `lower_left` and `upper_right`.
///
/// Line intersections are filtered down to the segment's extent. A
/// vertical segment has an infinite slope and propagates non-finite
/// intermediate values; no intersections are reported for it.
pub fn segment_box_intersections(
    p1: Point,
    p2: Point,
    lower_left: Point,
    upper_right: Point,
) -> Vec<Point> {
    let slope = (p2.y - p1.y) / (p2.x - p1.x);
    let (x_lo, x_hi) = (p1.x.min(p2.x), p1.x.max(p2.x));
    let (y_lo, y_hi) = (p1.y.min(p2.y), p1.y.max(p2.y));

    line_box_intersections(p1, slope, lower_left, upper_right)
        .into_iter()
        .filter(|p| x_lo <= p.x && p.x <= x_hi && y_lo <= p.y && p.y <= y_hi)
        .collect()
}
