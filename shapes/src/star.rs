//! Five-pointed star: pentagram skeleton and its simple fill outline.

use std::f64::consts::PI;

use glam::DVec2;

use crate::{
    error::GeometryError,
    geom::{RawBox, Segment, line_intersection},
};

/// Angle between consecutive skeleton vertices. Stepping by 4π/5 visits
/// every second corner of a regular pentagon.
pub const STAR_ROTATION: f64 = 4.0 * PI / 5.0;

/// Outer points of the star, rounded to whole pixels, named by position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarSkeleton {
    pub top_center: DVec2,
    pub bottom_right: DVec2,
    pub middle_left: DVec2,
    pub middle_right: DVec2,
    pub bottom_left: DVec2,
}

impl StarSkeleton {
    /// Places the skeleton on a circle of `radius` around `center`.
    ///
    /// `radius` should be at least one pixel. Below that the rounded points
    /// collapse onto each other and [`outline`](Self::outline) fails with
    /// [`GeometryError::DegenerateGeometry`].
    pub fn new(center: DVec2, radius: f64) -> Self {
        let vertex = |i: u32| {
            let unit = DVec2::from_angle(i as f64 * STAR_ROTATION).rotate(DVec2::NEG_Y);
            (unit * radius + center).round()
        };

        Self {
            top_center: vertex(0),
            bottom_right: vertex(1),
            middle_left: vertex(2),
            middle_right: vertex(3),
            bottom_left: vertex(4),
        }
    }

    /// The five chords in drawing order, each ending where the next starts.
    pub fn edges(&self) -> [Segment; 5] {
        [
            [self.top_center, self.bottom_right],
            [self.bottom_right, self.middle_left],
            [self.middle_left, self.middle_right],
            [self.middle_right, self.bottom_left],
            [self.bottom_left, self.top_center],
        ]
    }

    /// Ten-point outline alternating outer tips with the inner corners where
    /// the chords cross. Unlike the skeleton, this polygon never crosses
    /// itself, so it can be scan-filled.
    pub fn outline(&self) -> Result<[DVec2; 10], GeometryError> {
        let [e1, e2, e3, e4, e5] = self.edges();

        Ok([
            self.top_center,
            line_intersection(e1, e3)?,
            self.middle_right,
            line_intersection(e1, e4)?,
            self.bottom_right,
            line_intersection(e2, e4)?,
            self.bottom_left,
            line_intersection(e2, e5)?,
            self.middle_left,
            line_intersection(e3, e5)?,
        ])
    }

    pub fn raw_box(&self) -> RawBox {
        RawBox::from_corners(
            DVec2::new(self.middle_left.x, self.top_center.y),
            DVec2::new(self.middle_right.x, self.bottom_right.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::segments_cross;

    fn is_simple(poly: &[DVec2]) -> bool {
        let n = poly.len();
        let edge = |i: usize| [poly[i], poly[(i + 1) % n]];
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                if segments_cross(edge(i), edge(j)) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn skeleton_vertices_sit_where_named() {
        let s = StarSkeleton::new(DVec2::new(100.0, 100.0), 50.0);

        assert_eq!(s.top_center, DVec2::new(100.0, 50.0));
        assert!(s.middle_left.x < s.bottom_left.x);
        assert!(s.middle_right.x > s.bottom_right.x);
        assert!(s.bottom_left.y > s.middle_left.y);
        assert_eq!(s.bottom_left.y, s.bottom_right.y);
        assert_eq!(s.middle_left.y, s.middle_right.y);
    }

    #[test]
    fn skeleton_itself_self_intersects() {
        let s = StarSkeleton::new(DVec2::ZERO, 40.0);
        let pts = [
            s.top_center,
            s.bottom_right,
            s.middle_left,
            s.middle_right,
            s.bottom_left,
        ];
        assert!(!is_simple(&pts));
    }

    #[test]
    fn outline_is_simple_for_any_radius_and_center() {
        let centers = [
            DVec2::new(0.0, 0.0),
            DVec2::new(320.0, 240.0),
            DVec2::new(-75.0, 1013.0),
            DVec2::new(64.5, 17.25),
        ];
        for center in centers {
            for radius in (4..=256).step_by(3) {
                let s = StarSkeleton::new(center, radius as f64);
                let outline = s.outline().unwrap();
                assert!(is_simple(&outline), "radius {radius} center {center}");
            }
        }
    }

    #[test]
    fn smallest_stars_stay_simple() {
        for center in [DVec2::ZERO, DVec2::new(320.0, 240.0)] {
            for radius in [1.0, 1.5, 2.0, 3.0] {
                let outline = StarSkeleton::new(center, radius).outline().unwrap();
                assert!(is_simple(&outline), "radius {radius} center {center}");
            }
        }
    }

    #[test]
    fn inner_corners_lie_inside_outer_box() {
        let s = StarSkeleton::new(DVec2::new(200.0, 150.0), 60.0);
        let raw = s.raw_box();
        for p in s.outline().unwrap() {
            assert!(p.x >= raw.min.x && p.x <= raw.max.x, "{p}");
            assert!(p.y >= raw.min.y && p.y <= raw.max.y, "{p}");
        }
    }

    #[test]
    fn box_uses_named_extremes() {
        let s = StarSkeleton::new(DVec2::new(80.0, 90.0), 32.0);
        let raw = s.raw_box();
        assert_eq!(raw.min, DVec2::new(s.middle_left.x, s.top_center.y));
        assert_eq!(raw.max, DVec2::new(s.middle_right.x, s.bottom_right.y));
    }

    #[test]
    fn sub_pixel_radius_is_degenerate() {
        for radius in [0.0, 0.5] {
            let s = StarSkeleton::new(DVec2::new(10.0, 10.0), radius);
            assert!(
                matches!(s.outline(), Err(GeometryError::DegenerateGeometry { .. })),
                "radius {radius}"
            );
        }
    }
}
