pub mod stability;

pub use stability::{StabilityClassifier, STABILITY_RADIUS};

// Re-export core types for convenience
pub use mandelplot_core::*;
