#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;
pub type Transform = euclid::Transform2D<f64, Unit, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Euclidean length of `v`.
pub fn norm(v: Vector) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// `v` scaled to length 1, or `None` for the zero vector.
pub fn unit(v: Vector) -> Option<Vector> {
    let n = norm(v);
    if n == 0.0 { None } else { Some(v / n) }
}

/// Counter-clockwise quarter turn: `(x, y)` -> `(-y, x)`.
pub fn rotate90(v: Vector) -> Vector {
    vector(-v.y, v.x)
}

pub fn midpoint(a: Point, b: Point) -> Point {
    point((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
