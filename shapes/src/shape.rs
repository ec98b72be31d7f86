use std::{fmt, str::FromStr};

use glam::{IVec2, UVec2};
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// The eight shape families. Declaration order is the class index order
/// written to annotation files and the class list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Ellipse,
    Circle,
    Square,
    Rectangle,
    Line,
    Arrow,
    Triangle,
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Ellipse,
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Line,
        ShapeKind::Arrow,
        ShapeKind::Triangle,
        ShapeKind::Star,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Line => "line",
            ShapeKind::Arrow => "arrow",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Star => "star",
        }
    }

    pub const fn class_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RenderError::UnknownShape(s.to_string()))
    }
}

/// A shape ready to be rendered, carrying only the geometry its family uses.
///
/// `origin` is the anchor the layout places: the top-left corner of the
/// extent for most families. Lines and arrows start there and a star is
/// centred on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Ellipse { origin: IVec2, size: UVec2 },
    Circle { origin: IVec2, diameter: u32 },
    Square { origin: IVec2, side: u32 },
    Rectangle { origin: IVec2, size: UVec2 },
    Line { start: IVec2, end: IVec2 },
    Arrow { start: IVec2, end: IVec2 },
    Triangle { origin: IVec2, size: UVec2 },
    Star { origin: IVec2, diameter: u32 },
}

impl Shape {
    /// Builds the `kind` shape anchored at `origin` with extent `size`.
    /// Square, circle and star only read the width.
    pub fn new(kind: ShapeKind, origin: IVec2, size: UVec2) -> RenderResult<Self> {
        if size.x == 0 || size.y == 0 {
            return Err(RenderError::InvalidSize {
                width: size.x,
                height: size.y,
            });
        }

        let far = origin + size.as_ivec2();
        Ok(match kind {
            ShapeKind::Ellipse => Shape::Ellipse { origin, size },
            ShapeKind::Circle => Shape::Circle {
                origin,
                diameter: size.x,
            },
            ShapeKind::Square => Shape::Square { origin, side: size.x },
            ShapeKind::Rectangle => Shape::Rectangle { origin, size },
            ShapeKind::Line => Shape::Line { start: origin, end: far },
            ShapeKind::Arrow => Shape::Arrow { start: origin, end: far },
            ShapeKind::Triangle => Shape::Triangle { origin, size },
            ShapeKind::Star => Shape::Star {
                origin,
                diameter: size.x,
            },
        })
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Ellipse { .. } => ShapeKind::Ellipse,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Square { .. } => ShapeKind::Square,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Arrow { .. } => ShapeKind::Arrow,
            Shape::Triangle { .. } => ShapeKind::Triangle,
            Shape::Star { .. } => ShapeKind::Star,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_index_follows_declaration_order() {
        for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.class_index(), i);
        }
        assert_eq!(ShapeKind::Ellipse.class_index(), 0);
        assert_eq!(ShapeKind::Star.class_index(), 7);
    }

    #[test]
    fn names_parse_back() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
        }
        assert_eq!("Circle".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "hexagon".parse::<ShapeKind>(),
            Err(RenderError::UnknownShape("hexagon".into()))
        );
    }

    #[test]
    fn zero_extent_is_rejected() {
        let err = Shape::new(ShapeKind::Rectangle, IVec2::new(5, 5), UVec2::new(0, 10));
        assert_eq!(
            err,
            Err(RenderError::InvalidSize {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn line_runs_from_origin_across_extent() {
        let shape = Shape::new(ShapeKind::Arrow, IVec2::new(10, 20), UVec2::new(30, 40)).unwrap();
        assert_eq!(
            shape,
            Shape::Arrow {
                start: IVec2::new(10, 20),
                end: IVec2::new(40, 60)
            }
        );
        assert_eq!(shape.kind(), ShapeKind::Arrow);
    }
}
