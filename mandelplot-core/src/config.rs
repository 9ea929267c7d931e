//! Built-in figure views.
//!
//! This module contains the fixed view definitions behind the default
//! two-panel figure: a wide overview of the whole set and a deep crop of
//! the filament region west of the main antenna. Each view carries its own
//! sampling density and iteration budget alongside the styling hints the
//! renderer needs.

use crate::{Region, RegionError};

/// Circle drawn over a view to call out a feature, in fractal units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    /// Center as (real, imaginary)
    pub center: (f64, f64),
    /// Radius in fractal units
    pub radius: f64,
}

/// Configuration for one rendered view of the set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewSpec {
    /// Unique identifier (matches the `--list-views` CLI output)
    pub id: &'static str,
    /// Human-readable panel title
    pub title: &'static str,
    /// Real axis lower bound
    pub xmin: f64,
    /// Real axis upper bound
    pub xmax: f64,
    /// Imaginary axis lower bound
    pub ymin: f64,
    /// Imaginary axis upper bound
    pub ymax: f64,
    /// Samples per axis
    pub pixel_density: usize,
    /// Iteration budget for the stability test
    pub num_iterations: u32,
    /// Real-axis grid line positions
    pub x_ticks: &'static [f64],
    /// Imaginary-axis grid line positions
    pub y_ticks: &'static [f64],
    /// Optional feature call-out circle
    pub highlight: Option<Highlight>,
}

impl ViewSpec {
    /// Build the sampling region for this view.
    pub fn region(&self) -> Result<Region, RegionError> {
        Region::new(
            self.xmin,
            self.xmax,
            self.ymin,
            self.ymax,
            self.pixel_density,
        )
    }
}

/// The views that make up the default figure, in panel order.
pub static FIGURE_VIEWS: &[ViewSpec] = &[
    ViewSpec {
        id: "overview",
        title: "The Mandelbrot Set",
        xmin: -2.0,
        xmax: 0.5,
        ymin: -1.5,
        ymax: 1.5,
        pixel_density: 6000,
        num_iterations: 75,
        x_ticks: &[-2.0, -1.5, -1.0, -0.5, 0.0, 0.5],
        y_ticks: &[-1.0, -0.5, 0.0, 0.5, 1.0],
        highlight: Some(Highlight {
            center: (-1.76, 0.0),
            radius: 0.1,
        }),
    },
    ViewSpec {
        id: "detail",
        title: "Highlighted Fractal Recursion",
        xmin: -1.8,
        xmax: -1.74,
        ymin: -0.025,
        ymax: 0.025,
        pixel_density: 2048,
        num_iterations: 100,
        x_ticks: &[-1.8, -1.79, -1.78, -1.77, -1.76, -1.75, -1.74],
        y_ticks: &[-0.02, -0.01, 0.0, 0.01, 0.02],
        highlight: None,
    },
];

/// Look up a built-in view by ID.
pub fn get_view(id: &str) -> Option<&'static ViewSpec> {
    FIGURE_VIEWS.iter().find(|view| view.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // get_view() lookup tests
    // ============================================================================

    #[test]
    fn get_view_finds_overview() {
        let view = get_view("overview").unwrap();
        assert_eq!(view.id, "overview");
    }

    #[test]
    fn get_view_finds_detail() {
        let view = get_view("detail").unwrap();
        assert_eq!(view.id, "detail");
    }

    #[test]
    fn get_view_returns_none_for_unknown_id() {
        assert!(get_view("julia").is_none());
    }

    // ============================================================================
    // Built-in view parameter tests
    // ============================================================================

    #[test]
    fn overview_matches_published_parameters() {
        let view = get_view("overview").unwrap();

        assert_eq!(view.title, "The Mandelbrot Set");
        assert_eq!(view.xmin, -2.0);
        assert_eq!(view.xmax, 0.5);
        assert_eq!(view.ymin, -1.5);
        assert_eq!(view.ymax, 1.5);
        assert_eq!(view.pixel_density, 6000);
        assert_eq!(view.num_iterations, 75);
        assert_eq!(
            view.highlight,
            Some(Highlight {
                center: (-1.76, 0.0),
                radius: 0.1
            })
        );
    }

    #[test]
    fn detail_matches_published_parameters() {
        let view = get_view("detail").unwrap();

        assert_eq!(view.title, "Highlighted Fractal Recursion");
        assert_eq!(view.xmin, -1.8);
        assert_eq!(view.xmax, -1.74);
        assert_eq!(view.ymin, -0.025);
        assert_eq!(view.ymax, 0.025);
        assert_eq!(view.pixel_density, 2048);
        assert_eq!(view.num_iterations, 100);
        assert_eq!(view.highlight, None);
    }

    #[test]
    fn figure_lists_overview_before_detail() {
        let ids: Vec<&str> = FIGURE_VIEWS.iter().map(|view| view.id).collect();
        assert_eq!(ids, vec!["overview", "detail"]);
    }

    #[test]
    fn view_ids_are_unique() {
        for (i, a) in FIGURE_VIEWS.iter().enumerate() {
            for b in &FIGURE_VIEWS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    // ============================================================================
    // region() construction tests
    // ============================================================================

    #[test]
    fn every_view_builds_a_valid_region() {
        for view in FIGURE_VIEWS {
            let region = view.region().unwrap();
            assert_eq!(region.pixel_density, view.pixel_density);
        }
    }

    #[test]
    fn tick_positions_lie_within_view_bounds() {
        for view in FIGURE_VIEWS {
            for &tick in view.x_ticks {
                assert!(tick >= view.xmin && tick <= view.xmax, "view {}", view.id);
            }
            for &tick in view.y_ticks {
                assert!(tick >= view.ymin && tick <= view.ymax, "view {}", view.id);
            }
        }
    }
}
