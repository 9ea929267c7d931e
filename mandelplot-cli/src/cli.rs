//! Command line interface.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mandelplot",
    version,
    about = "Renders a scatter figure of the Mandelbrot set"
)]
pub struct Args {
    /// Output image path (PNG)
    #[arg(short, long, default_value = "mandelbrot.png")]
    pub output: PathBuf,

    /// Pixel length of each panel's longer edge
    #[arg(long, default_value_t = 1200)]
    pub panel_size: u32,

    /// Override every view's samples per axis
    #[arg(long)]
    pub pixel_density: Option<usize>,

    /// Override every view's iteration budget
    #[arg(long)]
    pub num_iterations: Option<u32>,

    /// Render one custom region instead of the built-in views
    #[arg(
        long,
        value_name = "XMIN,XMAX,YMIN,YMAX",
        allow_hyphen_values = true,
        value_parser = parse_region
    )]
    pub region: Option<RegionBounds>,

    /// Render a single built-in view by ID (see --list-views)
    #[arg(long, value_name = "ID", conflicts_with = "region")]
    pub view: Option<String>,

    /// List the built-in views and exit
    #[arg(long)]
    pub list_views: bool,
}

/// Region bounds as given on the command line, before validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionBounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

fn parse_region(raw: &str) -> Result<RegionBounds, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(format!(
            "expected 4 comma-separated bounds, got {}",
            parts.len()
        ));
    }

    let mut bounds = [0.0_f64; 4];
    for (slot, part) in bounds.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("invalid bound '{part}'"))?;
    }

    Ok(RegionBounds {
        xmin: bounds[0],
        xmax: bounds[1],
        ymin: bounds[2],
        ymax: bounds[3],
    })
}
