//! Arrow curve geometry.

use serde::Serialize;

use tracelane_core::geometry::Point;

/// Fraction of the horizontal distance by which control points are offset
/// from their endpoints.
pub const CONTROL_OFFSET_RATIO: f32 = 0.4;

/// A cubic Bézier curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicCurve {
    start: Point,
    control1: Point,
    control2: Point,
    end: Point,
}

impl CubicCurve {
    pub fn new(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Creates the curve for an arrow at height `y` between two lane centers.
    ///
    /// Both control points share `y` and sit [`CONTROL_OFFSET_RATIO`] of the
    /// way in from their endpoint.
    ///
    /// ```
    /// # use tracelane::layout::CubicCurve;
    /// let curve = CubicCurve::horizontal(100.0, 200.0, 50.0);
    /// assert_eq!(curve.to_path_data(), "M 100 50 C 140 50, 160 50, 200 50");
    /// ```
    pub fn horizontal(start_x: f32, end_x: f32, y: f32) -> Self {
        let start = Point::new(start_x, y);
        let end = Point::new(end_x, y);
        Self {
            start,
            control1: start.lerp(end, CONTROL_OFFSET_RATIO),
            control2: end.lerp(start, CONTROL_OFFSET_RATIO),
            end,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn control1(&self) -> Point {
        self.control1
    }

    pub fn control2(&self) -> Point {
        self.control2
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Evaluates the curve at `t` in `[0, 1]` (de Casteljau).
    pub fn point_at(&self, t: f32) -> Point {
        let ab = self.start.lerp(self.control1, t);
        let bc = self.control1.lerp(self.control2, t);
        let cd = self.control2.lerp(self.end, t);
        let abc = ab.lerp(bc, t);
        let bcd = bc.lerp(cd, t);
        abc.lerp(bcd, t)
    }

    /// The point at `t = 0.5`.
    pub fn midpoint(&self) -> Point {
        self.point_at(0.5)
    }

    /// SVG path data for this curve.
    pub fn to_path_data(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x(),
            self.start.y(),
            self.control1.x(),
            self.control1.y(),
            self.control2.x(),
            self.control2.y(),
            self.end.x(),
            self.end.y()
        )
    }
}
