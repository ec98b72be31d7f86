use glam::DVec2;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("lines through {a:?} and {b:?} are parallel or coincident")]
    DegenerateGeometry { a: [DVec2; 2], b: [DVec2; 2] },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("unknown shape kind `{0}`")]
    UnknownShape(String),
    #[error("shape extent must be positive, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

pub type RenderResult<T> = Result<T, RenderError>;
