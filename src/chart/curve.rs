//! Monotone cubic line path
//!
//! Tangents use Steffen's method so each cubic segment stays within the
//! vertical band of its two endpoints: the line never overshoots a data point.

use std::fmt::Write;

/// A position in chart coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One drawing instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
}

/// Build a monotone path through `points` (ordered by x).
///
/// Fewer than two points produce no path; two points produce a straight
/// segment.
pub fn monotone_path(points: &[Point]) -> Vec<PathCommand> {
    match points {
        [] | [_] => Vec::new(),
        [a, b] => vec![PathCommand::MoveTo(*a), PathCommand::LineTo(*b)],
        _ => {
            let tangents = monotone_tangents(points);
            let mut commands = Vec::with_capacity(points.len());
            commands.push(PathCommand::MoveTo(points[0]));

            for i in 0..points.len() - 1 {
                let (p0, p1) = (points[i], points[i + 1]);
                let dx = (p1.x - p0.x) / 3.0;
                commands.push(PathCommand::CubicTo {
                    c1: Point::new(p0.x + dx, p0.y + dx * tangents[i]),
                    c2: Point::new(p1.x - dx, p1.y - dx * tangents[i + 1]),
                    to: p1,
                });
            }
            commands
        }
    }
}

fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn secant(a: Point, b: Point) -> f64 {
    let h = b.x - a.x;
    if h == 0.0 {
        0.0
    } else {
        (b.y - a.y) / h
    }
}

/// Per-point tangents for three or more points
fn monotone_tangents(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    let secants: Vec<f64> = points.windows(2).map(|w| secant(w[0], w[1])).collect();
    let mut tangents = vec![0.0; n];

    for i in 1..n - 1 {
        let h0 = points[i].x - points[i - 1].x;
        let h1 = points[i + 1].x - points[i].x;
        let (s0, s1) = (secants[i - 1], secants[i]);
        let p = if h0 + h1 == 0.0 {
            0.0
        } else {
            (s0 * h1 + s1 * h0) / (h0 + h1)
        };
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        tangents[i] = if t.is_finite() { t } else { 0.0 };
    }

    // End tangents continue the neighbouring curvature
    tangents[0] = end_tangent(secants[0], tangents[1]);
    tangents[n - 1] = end_tangent(secants[n - 2], tangents[n - 2]);
    tangents
}

fn end_tangent(secant: f64, neighbour: f64) -> f64 {
    (3.0 * secant - neighbour) / 2.0
}

/// Serialize commands as an SVG path `d` attribute
pub fn to_svg_path(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for command in commands {
        // Writing into a String cannot fail
        let _ = match command {
            PathCommand::MoveTo(p) => write!(d, "M{:.2},{:.2}", p.x, p.y),
            PathCommand::LineTo(p) => write!(d, "L{:.2},{:.2}", p.x, p.y),
            PathCommand::CubicTo { c1, c2, to } => write!(
                d,
                "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                c1.x, c1.y, c2.x, c2.y, to.x, to.y
            ),
        };
    }
    d
}
