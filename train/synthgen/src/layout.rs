//! Random size and placement of one shape on the canvas.

use std::ops::Range;

use rand::Rng;
use shapes::{IVec2, ShapeKind, UVec2};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("extent {extent} does not fit canvas dimension {canvas} with padding {padding}")]
    InvalidPlacementRange { canvas: u32, padding: u32, extent: u32 },
}

/// Draws an extent for `kind` from `range`, which must not be empty.
///
/// Circles, squares and stars are 1:1, rectangles and ellipses 2:1, the
/// rest take an independent height.
pub fn sample_size<R: Rng + ?Sized>(kind: ShapeKind, range: Range<u32>, rng: &mut R) -> UVec2 {
    debug_assert!(!range.is_empty());

    let w = rng.random_range(range.clone());
    match kind {
        ShapeKind::Circle | ShapeKind::Square | ShapeKind::Star => UVec2::splat(w),
        ShapeKind::Rectangle | ShapeKind::Ellipse => UVec2::new(w * 2, w),
        ShapeKind::Line | ShapeKind::Arrow | ShapeKind::Triangle => {
            UVec2::new(w, rng.random_range(range))
        }
    }
}

/// Positions where an `extent` wide shape keeps `padding` clear on both
/// sides of a `canvas` wide axis.
pub fn placement_range(canvas: u32, padding: u32, extent: u32) -> Result<Range<u32>, LayoutError> {
    let hi = canvas
        .checked_sub(padding)
        .and_then(|rest| rest.checked_sub(extent));

    match hi {
        Some(hi) if hi > padding => Ok(padding..hi),
        _ => Err(LayoutError::InvalidPlacementRange {
            canvas,
            padding,
            extent,
        }),
    }
}

pub fn sample_origin<R: Rng + ?Sized>(
    canvas: UVec2,
    padding: u32,
    size: UVec2,
    rng: &mut R,
) -> Result<IVec2, LayoutError> {
    let xs = placement_range(canvas.x, padding, size.x)?;
    let ys = placement_range(canvas.y, padding, size.y)?;
    Ok(IVec2::new(
        rng.random_range(xs) as i32,
        rng.random_range(ys) as i32,
    ))
}
