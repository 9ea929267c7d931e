//! CLI error types.

use mandelplot_core::RegionError;
use thiserror::Error;

/// Errors from resolving command line arguments into renderable views.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Unknown view '{0}', try --list-views")]
    UnknownView(String),

    #[error("Invalid region: {0}")]
    Region(#[from] RegionError),
}

#[derive(Debug, Error)]
pub enum FigureError {
    #[error("Figure has no panels")]
    Empty,

    #[error("Failed to write figure: {0}")]
    Write(#[from] image::ImageError),
}
