//! Draws one [`Shape`] onto a canvas and reports the box that encloses it.

use glam::{DVec2, IVec2, UVec2};
use image::Rgb;
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut},
    rect::Rect,
};

use crate::{
    canvas::Canvas,
    color::Color,
    draw::{arrowhead, fill_polygon, stroke_circle, stroke_polyline, stroke_rect, stroke_segment},
    error::RenderResult,
    geom::{BoundingBox, BoxPadding, RawBox},
    shape::Shape,
    star::StarSkeleton,
};

/// Line width of the debug box outline.
pub const OVERLAY_STROKE: u32 = 2;

/// How a shape is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub stroke_width: u32,
    pub padding: BoxPadding,
    /// When set, the final box is outlined in this color after drawing.
    pub overlay: Option<Color>,
}

impl Style {
    pub fn new(fill: Color, stroke_width: u32) -> Self {
        Self {
            fill,
            stroke_width,
            padding: BoxPadding::default(),
            overlay: None,
        }
    }
}

/// Renders `shape` in place and returns its stroke-padded pixel box.
///
/// The overlay, if requested, is drawn from the returned box and does not
/// influence it.
pub fn render(canvas: &mut Canvas, shape: &Shape, style: &Style) -> RenderResult<BoundingBox> {
    let raw = match *shape {
        Shape::Circle { origin, diameter } => circle(canvas, origin, diameter, style),
        Shape::Ellipse { origin, size } => ellipse(canvas, origin, size, style),
        Shape::Square { origin, side } => rectangle(canvas, origin, UVec2::splat(side), style),
        Shape::Rectangle { origin, size } => rectangle(canvas, origin, size, style),
        Shape::Line { start, end } => line(canvas, start, end, style),
        Shape::Arrow { start, end } => arrow(canvas, start, end, style),
        Shape::Triangle { origin, size } => triangle(canvas, origin, size, style),
        Shape::Star { origin, diameter } => star(canvas, origin, diameter, style)?,
    };

    let bbox = raw.pad(style.padding, style.stroke_width);
    log::trace!("{} -> {:?}", shape.kind(), bbox);

    if let Some(color) = style.overlay {
        stroke_rect(
            canvas,
            DVec2::new(bbox.x_min as f64, bbox.y_min as f64),
            DVec2::new(bbox.x_max as f64, bbox.y_max as f64),
            OVERLAY_STROKE,
            color,
        );
    }

    Ok(bbox)
}

fn circle(canvas: &mut Canvas, origin: IVec2, diameter: u32, style: &Style) -> RawBox {
    let radius = (diameter / 2) as i32;
    let center = origin + IVec2::splat(radius);
    let c = center.as_dvec2();

    stroke_circle(canvas, c, radius as f64, style.stroke_width, style.fill);
    draw_filled_circle_mut(canvas, (center.x, center.y), radius, Rgb::from(style.fill));

    let r = DVec2::splat(radius as f64);
    RawBox::from_corners(c - r, c + r)
}

fn ellipse(canvas: &mut Canvas, origin: IVec2, size: UVec2, style: &Style) -> RawBox {
    let half = size.as_dvec2() / 2.0;
    let center = (origin.as_dvec2() + half).trunc();

    draw_filled_ellipse_mut(
        canvas,
        (center.x as i32, center.y as i32),
        (size.x / 2) as i32,
        (size.y / 2) as i32,
        Rgb::from(style.fill),
    );

    RawBox::from_corners(center - half, center + half)
}

fn rectangle(canvas: &mut Canvas, origin: IVec2, size: UVec2, style: &Style) -> RawBox {
    let min = origin.as_dvec2();
    let max = (origin + size.as_ivec2()).as_dvec2();

    stroke_rect(canvas, min, max, style.stroke_width, style.fill);
    // corners are inclusive, as in the outline
    draw_filled_rect_mut(
        canvas,
        Rect::at(origin.x, origin.y).of_size(size.x + 1, size.y + 1),
        Rgb::from(style.fill),
    );

    RawBox::from_corners(min, max)
}

fn line(canvas: &mut Canvas, start: IVec2, end: IVec2, style: &Style) -> RawBox {
    let (a, b) = (start.as_dvec2(), end.as_dvec2());
    stroke_segment(canvas, a, b, style.stroke_width, style.fill);
    RawBox::from_corners(a, b)
}

/// Same box as [`line`]. Wing tips are clamped into the shaft's box, so a
/// thin stroke with little padding cannot push them outside it.
fn arrow(canvas: &mut Canvas, start: IVec2, end: IVec2, style: &Style) -> RawBox {
    let (a, b) = (start.as_dvec2(), end.as_dvec2());
    let raw = RawBox::from_corners(a, b);

    stroke_segment(canvas, a, b, style.stroke_width, style.fill);
    for wing in arrowhead(a, b) {
        let wing = wing.clamp(raw.min, raw.max);
        stroke_segment(canvas, b, wing, style.stroke_width, style.fill);
    }
    raw
}

fn triangle(canvas: &mut Canvas, origin: IVec2, size: UVec2, style: &Style) -> RawBox {
    let o = origin.as_dvec2();
    let s = size.as_dvec2();
    let pts = [o, o + s, DVec2::new(o.x + s.x / 2.0, o.y + s.y)];

    stroke_polyline(canvas, &pts, true, style.stroke_width, style.fill);
    fill_polygon(canvas, &pts, style.fill);

    RawBox::from_corners(o, DVec2::new(pts[1].x, pts[1].y.max(pts[2].y)))
}

fn star(canvas: &mut Canvas, origin: IVec2, diameter: u32, style: &Style) -> RenderResult<RawBox> {
    let radius = (diameter / 2) as f64;
    let skeleton = StarSkeleton::new(origin.as_dvec2(), radius);
    let outline = skeleton.outline()?.map(DVec2::trunc);
    fill_polygon(canvas, &outline, style.fill);

    Ok(skeleton.raw_box())
}
