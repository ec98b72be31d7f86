use std::fmt;

use serde::Serialize;
use shapes::{BoundingBox, ShapeKind};

/// Darknet-style label: `class x_center y_center width height`, spatial
/// fields relative to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Annotation {
    pub class_index: usize,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

impl Annotation {
    /// Normalises `bbox` against the canvas. The box is clipped to the canvas
    /// first, so every spatial field lands in `[0, 1]`.
    pub fn from_box(kind: ShapeKind, bbox: BoundingBox, canvas_w: u32, canvas_h: u32) -> Self {
        let b = bbox.clip(canvas_w, canvas_h);
        let (w, h) = (canvas_w as f64, canvas_h as f64);
        let center = b.center();

        Self {
            class_index: kind.class_index(),
            x_center: center.x / w,
            y_center: center.y / h,
            width: b.width() as f64 / w,
            height: b.height() as f64 / h,
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.class_index, self.x_center, self.y_center, self.width, self.height
        )
    }
}

/// One line of `labels.jsonl`, describing a written image/label pair.
#[derive(Serialize, Debug)]
pub struct JsonRecord<'a> {
    pub schema: &'static str,
    pub image: String,
    pub label: String,
    pub shape: ShapeKind,
    pub class: usize,
    pub bbox: BoundingBox,
    pub canvas_color: &'a str,
    pub shape_color: &'a str,
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalised_box_denormalises_back() {
        let bbox = BoundingBox::new(100, 100, 200, 180);
        let a = Annotation::from_box(ShapeKind::Square, bbox, 640, 480);

        let x_min = a.x_center * 640.0 - a.width * 640.0 / 2.0;
        let y_min = a.y_center * 480.0 - a.height * 480.0 / 2.0;
        let x_max = a.x_center * 640.0 + a.width * 640.0 / 2.0;
        let y_max = a.y_center * 480.0 + a.height * 480.0 / 2.0;

        assert!((x_min - 100.0).abs() < 1e-9);
        assert!((y_min - 100.0).abs() < 1e-9);
        assert!((x_max - 200.0).abs() < 1e-9);
        assert!((y_max - 180.0).abs() < 1e-9);
        assert_eq!(a.class_index, 2);
    }

    #[test]
    fn line_format_is_space_separated() {
        let a = Annotation::from_box(ShapeKind::Circle, BoundingBox::new(0, 0, 320, 240), 640, 480);
        assert_eq!(a.to_string(), "1 0.25 0.25 0.5 0.5");
    }

    #[test]
    fn box_past_the_edge_is_clipped() {
        let a = Annotation::from_box(ShapeKind::Star, BoundingBox::new(-10, 400, 100, 500), 640, 480);
        for v in [a.x_center, a.y_center, a.width, a.height] {
            assert!((0.0..=1.0).contains(&v), "{a}");
        }
        assert_eq!(a.height, 80.0 / 480.0);
    }

    #[test]
    fn record_serialises_flat() {
        let rec = JsonRecord {
            schema: "v1",
            image: "gold/star_aqua_0.jpg".into(),
            label: "gold/star_aqua_0.txt".into(),
            shape: ShapeKind::Star,
            class: 7,
            bbox: BoundingBox::new(1, 2, 3, 4),
            canvas_color: "gold",
            shape_color: "aqua",
            seed: 42,
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains(r#""shape":"star""#));
        assert!(json.contains(r#""bbox":{"x_min":1,"y_min":2,"x_max":3,"y_max":4}"#));
    }
}
