use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Two endpoints defining a segment, or the infinite line through them.
pub type Segment = [DVec2; 2];

/// Intersection of the infinite lines through `a` and `b`.
///
/// The segments are not clipped: the returned point may lie outside both of
/// them. Parallel and coincident lines have no single intersection and fail
/// with [`GeometryError::DegenerateGeometry`]. Only an exactly zero
/// determinant counts as degenerate, so tiny but non-parallel inputs still
/// intersect.
pub fn line_intersection(a: Segment, b: Segment) -> Result<DVec2, GeometryError> {
    let xdiff = DVec2::new(a[0].x - a[1].x, b[0].x - b[1].x);
    let ydiff = DVec2::new(a[0].y - a[1].y, b[0].y - b[1].y);

    let div = xdiff.perp_dot(ydiff);
    if div == 0.0 {
        return Err(GeometryError::DegenerateGeometry { a, b });
    }

    let d = DVec2::new(a[0].perp_dot(a[1]), b[0].perp_dot(b[1]));
    Ok(DVec2::new(d.perp_dot(xdiff) / div, d.perp_dot(ydiff) / div))
}

/// True when the two segments cross at a single point strictly inside both.
/// Touching endpoints and collinear overlap do not count.
#[cfg(test)]
pub(crate) fn segments_cross(a: Segment, b: Segment) -> bool {
    let side = |p: DVec2, q: DVec2, r: DVec2| (q - p).perp_dot(r - p);

    let d1 = side(b[0], b[1], a[0]);
    let d2 = side(b[0], b[1], a[1]);
    let d3 = side(a[0], a[1], b[0]);
    let d4 = side(a[0], a[1], b[1]);

    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

/// How the stroke margin is added around a raw shape box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoxPadding {
    /// `2 * stroke` on all four sides.
    #[default]
    Symmetric,
    /// `2 * stroke` added to `x_max` and `y_max` only.
    MaxCorner,
}

/// Unpadded box in continuous canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl RawBox {
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Pads by the stroke margin and truncates to whole pixels.
    pub fn pad(self, mode: BoxPadding, stroke_width: u32) -> BoundingBox {
        let margin = DVec2::splat(2.0 * stroke_width as f64);
        let (min, max) = match mode {
            BoxPadding::Symmetric => (self.min - margin, self.max + margin),
            BoxPadding::MaxCorner => (self.min, self.max + margin),
        };

        BoundingBox {
            x_min: min.x as i32,
            y_min: min.y as i32,
            x_max: max.x as i32,
            y_max: max.y as i32,
        }
    }
}

/// Axis-aligned pixel box, inclusive of the stroke margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl BoundingBox {
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.x_min + self.x_max) as f64 / 2.0,
            (self.y_min + self.y_max) as f64 / 2.0,
        )
    }

    /// Clamps every edge into `[0, width] x [0, height]`.
    pub fn clip(self, width: u32, height: u32) -> Self {
        let (w, h) = (width as i32, height as i32);
        Self {
            x_min: self.x_min.clamp(0, w),
            y_min: self.y_min.clamp(0, h),
            x_max: self.x_max.clamp(0, w),
            y_max: self.y_max.clamp(0, h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_line(p: DVec2, line: Segment) -> bool {
        let dir = line[1] - line[0];
        (p - line[0]).perp_dot(dir).abs() / dir.length() < 1e-6
    }

    #[test]
    fn intersection_of_axis_lines() {
        let a = [DVec2::new(0.0, 5.0), DVec2::new(10.0, 5.0)];
        let b = [DVec2::new(3.0, -1.0), DVec2::new(3.0, 1.0)];
        let p = line_intersection(a, b).unwrap();
        assert!((p - DVec2::new(3.0, 5.0)).length() < 1e-9);
    }

    #[test]
    fn intersection_lies_on_both_infinite_lines() {
        let pairs = [
            (
                [DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0)],
                [DVec2::new(0.0, 10.0), DVec2::new(1.0, 9.0)],
            ),
            (
                [DVec2::new(-40.0, 13.0), DVec2::new(-20.0, 77.5)],
                [DVec2::new(300.0, -2.0), DVec2::new(310.0, 4.0)],
            ),
            (
                [DVec2::new(120.0, 64.0), DVec2::new(157.0, 115.0)],
                [DVec2::new(59.0, 84.0), DVec2::new(181.0, 84.0)],
            ),
        ];

        for (a, b) in pairs {
            let p = line_intersection(a, b).unwrap();
            assert!(on_line(p, a), "{p} not on {a:?}");
            assert!(on_line(p, b), "{p} not on {b:?}");
        }
    }

    #[test]
    fn intersection_is_not_clipped_to_segments() {
        let a = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)];
        let b = [DVec2::new(10.0, 1.0), DVec2::new(10.0, 2.0)];
        let p = line_intersection(a, b).unwrap();
        assert!((p - DVec2::new(10.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn parallel_lines_are_degenerate() {
        let a = [DVec2::new(0.0, 0.0), DVec2::new(4.0, 2.0)];
        let b = [DVec2::new(0.0, 3.0), DVec2::new(8.0, 7.0)];
        assert!(matches!(
            line_intersection(a, b),
            Err(GeometryError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn coincident_lines_are_degenerate() {
        let a = [DVec2::new(1.0, 1.0), DVec2::new(2.0, 2.0)];
        let b = [DVec2::new(5.0, 5.0), DVec2::new(9.0, 9.0)];
        assert!(line_intersection(a, b).is_err());
    }

    #[test]
    fn tiny_perpendicular_lines_still_intersect() {
        let a = [DVec2::new(0.0, 0.0), DVec2::new(1e-9, 0.0)];
        let b = [DVec2::new(5e-10, -1e-9), DVec2::new(5e-10, 1e-9)];
        let p = line_intersection(a, b).unwrap();
        assert!((p - DVec2::new(5e-10, 0.0)).length() < 1e-20, "{p}");
    }

    #[test]
    fn crossing_requires_interior_intersection() {
        let a = [DVec2::new(0.0, 0.0), DVec2::new(4.0, 4.0)];
        let b = [DVec2::new(0.0, 4.0), DVec2::new(4.0, 0.0)];
        assert!(segments_cross(a, b));

        let touching = [DVec2::new(4.0, 4.0), DVec2::new(8.0, 0.0)];
        assert!(!segments_cross(a, touching));

        let apart = [DVec2::new(10.0, 0.0), DVec2::new(10.0, 5.0)];
        assert!(!segments_cross(a, apart));
    }

    #[test]
    fn symmetric_padding_grows_every_side() {
        let raw = RawBox::from_corners(DVec2::new(100.0, 100.0), DVec2::new(200.0, 180.0));
        assert_eq!(
            raw.pad(BoxPadding::Symmetric, 4),
            BoundingBox::new(92, 92, 208, 188)
        );
    }

    #[test]
    fn max_corner_padding_keeps_origin() {
        let raw = RawBox::from_corners(DVec2::new(200.0, 180.0), DVec2::new(100.0, 100.0));
        assert_eq!(
            raw.pad(BoxPadding::MaxCorner, 3),
            BoundingBox::new(100, 100, 206, 186)
        );
    }

    #[test]
    fn padding_truncates_fractions() {
        let raw = RawBox::from_corners(DVec2::new(10.7, 20.2), DVec2::new(30.9, 40.5));
        assert_eq!(
            raw.pad(BoxPadding::Symmetric, 0),
            BoundingBox::new(10, 20, 30, 40)
        );
    }

    #[test]
    fn clip_keeps_box_inside_canvas() {
        let b = BoundingBox::new(-5, 10, 700, 470).clip(640, 480);
        assert_eq!(b, BoundingBox::new(0, 10, 640, 470));
    }
}
