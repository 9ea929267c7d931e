//! Core error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    #[error("Region bounds must be finite, got ({xmin}, {xmax}) x ({ymin}, {ymax})")]
    NonFinite {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },

    #[error("Real axis bounds are not increasing: xmin={min}, xmax={max}")]
    InvertedReal { min: f64, max: f64 },

    #[error("Imaginary axis bounds are not increasing: ymin={min}, ymax={max}")]
    InvertedImag { min: f64, max: f64 },

    #[error("Pixel density must be at least 1")]
    ZeroDensity,
}
