//! Stroke and fill primitives on top of `imageproc`.
//!
//! `imageproc` only draws one pixel wide outlines, so thick strokes are built
//! from filled quads, discs and annuli here. All primitives clip against the
//! canvas and never panic on out of range coordinates.

use std::f64::consts::FRAC_PI_4;

use glam::DVec2;
use image::Rgb;
use imageproc::{
    drawing::{
        draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_polygon_mut,
    },
    point::Point,
};

use crate::{canvas::Canvas, color::Color};

/// Arrowhead wing length as a fraction of the shaft length.
pub const ARROW_TIP_RATIO: f64 = 0.1;
/// Angle between the shaft and each wing.
pub const ARROW_WING_ANGLE: f64 = FRAC_PI_4;

fn to_pixel(p: DVec2) -> Point<i32> {
    Point::new(p.x.round() as i32, p.y.round() as i32)
}

fn to_tuple(p: DVec2) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

/// Fills the polygon outlined by `points`.
///
/// A repeated closing vertex and consecutive duplicates are dropped first.
/// Fewer than three distinct vertices degrade to a segment or a dot.
pub fn fill_polygon(canvas: &mut Canvas, points: &[DVec2], color: Color) {
    let px: Rgb<u8> = color.into();

    let mut poly: Vec<Point<i32>> = points.iter().copied().map(to_pixel).collect();
    poly.dedup();
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }

    match poly.len() {
        0 => {}
        1 => {
            let (x, y) = (poly[0].x, poly[0].y);
            if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
                canvas.put_pixel(x as u32, y as u32, px);
            }
        }
        2 => draw_line_segment_mut(
            canvas,
            (poly[0].x as f32, poly[0].y as f32),
            (poly[1].x as f32, poly[1].y as f32),
            px,
        ),
        _ => draw_polygon_mut(canvas, &poly, px),
    }
}

/// Draws the segment `a`-`b` with round caps, `width` pixels across.
pub fn stroke_segment(canvas: &mut Canvas, a: DVec2, b: DVec2, width: u32, color: Color) {
    let px: Rgb<u8> = color.into();

    if width <= 1 {
        draw_line_segment_mut(canvas, (a.x as f32, a.y as f32), (b.x as f32, b.y as f32), px);
        return;
    }

    let half = width as f64 / 2.0;
    let cap = half.round() as i32;
    draw_filled_circle_mut(canvas, to_tuple(a), cap, px);
    draw_filled_circle_mut(canvas, to_tuple(b), cap, px);

    let dir = b - a;
    let len = dir.length();
    if len < f64::EPSILON {
        return;
    }

    let offset = dir.perp() / len * half;
    fill_polygon(
        canvas,
        &[a + offset, b + offset, b - offset, a - offset],
        color,
    );
}

pub fn stroke_polyline(
    canvas: &mut Canvas,
    points: &[DVec2],
    closed: bool,
    width: u32,
    color: Color,
) {
    for pair in points.windows(2) {
        stroke_segment(canvas, pair[0], pair[1], width, color);
    }
    if closed && points.len() > 2 {
        stroke_segment(canvas, points[points.len() - 1], points[0], width, color);
    }
}

/// Outline of a circle: an annulus `width` pixels thick centred on `radius`.
pub fn stroke_circle(canvas: &mut Canvas, center: DVec2, radius: f64, width: u32, color: Color) {
    let px: Rgb<u8> = color.into();

    if width <= 1 {
        draw_hollow_circle_mut(canvas, to_tuple(center), radius.round() as i32, px);
        return;
    }

    let half = width as f64 / 2.0;
    let inner = (radius - half).max(0.0);
    let outer = radius + half;

    let (w, h) = canvas.dimensions();
    let x0 = ((center.x - outer).floor() as i64).max(0);
    let x1 = ((center.x + outer).ceil() as i64).min(w as i64 - 1);
    let y0 = ((center.y - outer).floor() as i64).max(0);
    let y1 = ((center.y + outer).ceil() as i64).min(h as i64 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = DVec2::new(x as f64, y as f64).distance(center);
            if d >= inner && d <= outer {
                canvas.put_pixel(x as u32, y as u32, px);
            }
        }
    }
}

/// Outline of the axis-aligned rectangle spanned by `min` and `max`.
pub fn stroke_rect(canvas: &mut Canvas, min: DVec2, max: DVec2, width: u32, color: Color) {
    let corners = [
        min,
        DVec2::new(max.x, min.y),
        max,
        DVec2::new(min.x, max.y),
    ];
    stroke_polyline(canvas, &corners, true, width, color);
}

/// Wing endpoints of an arrowhead sitting on `end`, for a shaft from `start`.
pub fn arrowhead(start: DVec2, end: DVec2) -> [DVec2; 2] {
    let back = start - end;
    let tip = back.length() * ARROW_TIP_RATIO;
    let angle = back.y.atan2(back.x);

    let wing = |a: f64| end + DVec2::new(a.cos(), a.sin()) * tip;
    [wing(angle + ARROW_WING_ANGLE), wing(angle - ARROW_WING_ANGLE)]
}
