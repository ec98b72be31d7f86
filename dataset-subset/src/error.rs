use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubsetError {
    #[error("fraction must be in (0, 1], got {0}")]
    InvalidFraction(f64),
    #[error("source directory {} does not exist", .0.display())]
    MissingSource(PathBuf),
    #[error("destination {} overlaps source {}", .dest.display(), .src.display())]
    OverlappingDestination { src: PathBuf, dest: PathBuf },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
