//! Rendering of labelled geometric shapes for detector training data.
//!
//! Every renderer draws onto a [`Canvas`] and returns the [`BoundingBox`] a
//! label is derived from.

pub mod canvas;
pub mod color;
pub mod draw;
pub mod error;
pub mod geom;
pub mod render;
pub mod shape;
pub mod star;

pub use canvas::{Canvas, create_canvas};
pub use color::{Color, ParseColorError};
pub use error::{GeometryError, RenderError, RenderResult};
pub use geom::{BoundingBox, BoxPadding, line_intersection};
pub use render::{Style, render};
pub use shape::{Shape, ShapeKind};
pub use star::StarSkeleton;

pub use glam::{IVec2, UVec2};
