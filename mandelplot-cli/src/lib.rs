pub mod cli;
pub mod error;
pub mod render;

pub use error::{FigureError, ViewError};

use anyhow::Context;
use image::RgbImage;
use log::{debug, info};
use mandelplot_compute::StabilityClassifier;
use mandelplot_core::{get_view, Highlight, Region, SampleGrid, ViewSpec, FIGURE_VIEWS};
use std::time::Instant;

use crate::cli::Args;
use crate::render::{compose_figure, render_panel, save_figure, PanelStyle};

/// Samples per axis for a custom `--region` view without an explicit density.
pub const DEFAULT_CUSTOM_DENSITY: usize = 1000;

/// Iteration budget for a custom `--region` view without an explicit budget.
pub const DEFAULT_CUSTOM_ITERATIONS: u32 = 100;

/// Margin between panels and around the figure, in pixels.
pub const FIGURE_MARGIN: u32 = 40;

/// One fully resolved view: bounds, budget and styling, ready to render.
#[derive(Clone, Debug)]
pub struct ViewJob {
    pub id: String,
    pub region: Region,
    pub num_iterations: u32,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub highlight: Option<Highlight>,
}

/// Resolve CLI arguments into the list of views to render.
///
/// Without `--region` or `--view` this is every built-in view with any
/// density or budget overrides applied; `--view` narrows it to one built-in
/// view, and `--region` replaces it with one custom view carrying no ticks
/// and no highlight.
pub fn resolve_jobs(args: &Args) -> Result<Vec<ViewJob>, ViewError> {
    if let Some(bounds) = args.region {
        let density = args.pixel_density.unwrap_or(DEFAULT_CUSTOM_DENSITY);
        let region = Region::new(bounds.xmin, bounds.xmax, bounds.ymin, bounds.ymax, density)?;
        return Ok(vec![ViewJob {
            id: "custom".to_string(),
            region,
            num_iterations: args.num_iterations.unwrap_or(DEFAULT_CUSTOM_ITERATIONS),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            highlight: None,
        }]);
    }

    if let Some(id) = &args.view {
        let view = get_view(id).ok_or_else(|| ViewError::UnknownView(id.clone()))?;
        return Ok(vec![view_job(view, args)?]);
    }

    FIGURE_VIEWS
        .iter()
        .map(|view| view_job(view, args))
        .collect()
}

/// Turn one built-in view into a job, applying any CLI overrides.
fn view_job(view: &ViewSpec, args: &Args) -> Result<ViewJob, ViewError> {
    let density = args.pixel_density.unwrap_or(view.pixel_density);
    let region = Region::new(view.xmin, view.xmax, view.ymin, view.ymax, density)?;
    Ok(ViewJob {
        id: view.id.to_string(),
        region,
        num_iterations: args.num_iterations.unwrap_or(view.num_iterations),
        x_ticks: view.x_ticks.to_vec(),
        y_ticks: view.y_ticks.to_vec(),
        highlight: view.highlight,
    })
}

/// Render every requested view and write the composed figure.
pub fn run(args: &Args) -> anyhow::Result<()> {
    if args.list_views {
        print_views();
        return Ok(());
    }

    let jobs = resolve_jobs(args)?;
    let style = PanelStyle::default();

    let mut panels = Vec::with_capacity(jobs.len());
    for job in &jobs {
        panels.push(render_view(job, args.panel_size, &style));
    }

    let figure = compose_figure(&panels, FIGURE_MARGIN, style.figure_background)?;
    save_figure(&figure, &args.output)
        .with_context(|| format!("writing figure to {}", args.output.display()))?;
    info!(
        "wrote {}x{} figure to {}",
        figure.width(),
        figure.height(),
        args.output.display()
    );
    Ok(())
}

/// Classify one view's grid and paint its panel.
fn render_view(job: &ViewJob, panel_size: u32, style: &PanelStyle) -> RgbImage {
    let n = job.region.pixel_density;
    info!(
        "view '{}': {n}x{n} samples, {} iterations",
        job.id, job.num_iterations
    );

    let started = Instant::now();
    let grid = SampleGrid::from_region(&job.region);
    let classifier = StabilityClassifier::new(job.num_iterations);
    let members = classifier.members(&grid);
    info!(
        "view '{}': {} of {} points stable ({:.1}%) in {:.2?}",
        job.id,
        members.len(),
        grid.len(),
        100.0 * members.len() as f64 / grid.len() as f64,
        started.elapsed()
    );

    let panel = render_panel(
        &job.region,
        &members,
        &job.x_ticks,
        &job.y_ticks,
        job.highlight.as_ref(),
        panel_size,
        style,
    );
    debug!(
        "view '{}': panel {}x{}",
        job.id,
        panel.width(),
        panel.height()
    );
    panel
}

fn print_views() {
    for view in FIGURE_VIEWS {
        println!(
            "{:<10} {:<34} ({}, {}) x ({}, {}), {} samples/axis, {} iterations",
            view.id,
            view.title,
            view.xmin,
            view.xmax,
            view.ymin,
            view.ymax,
            view.pixel_density,
            view.num_iterations
        );
    }
}
