pub mod config;
pub mod error;
pub mod grid;
pub mod mask;
pub mod region;

pub use config::{get_view, Highlight, ViewSpec, FIGURE_VIEWS};
pub use error::RegionError;
pub use grid::SampleGrid;
pub use mask::StabilityMask;
pub use region::Region;
