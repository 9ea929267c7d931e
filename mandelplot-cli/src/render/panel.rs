use crate::render::PanelStyle;
use image::{Rgb, RgbImage};
use mandelplot_core::{Highlight, Region};
use num_complex::Complex64;

/// Pixel dimensions for a panel, preserving the region's aspect ratio.
///
/// The longer region edge gets `panel_size` pixels and the shorter edge
/// scales down proportionally, never below one pixel.
pub fn panel_dimensions(region: &Region, panel_size: u32) -> (u32, u32) {
    let panel_size = panel_size.max(1);
    let aspect = region.aspect_ratio();
    if aspect >= 1.0 {
        let height = ((panel_size as f64 / aspect).round() as u32).max(1);
        (panel_size, height)
    } else {
        let width = ((panel_size as f64 * aspect).round() as u32).max(1);
        (width, panel_size)
    }
}

/// Map a fractal-space point to panel pixel coordinates.
///
/// Real parts grow left to right and imaginary parts grow bottom to top,
/// with the region corners landing on the border pixels. Points outside
/// the region map to `None`.
fn point_to_pixel(
    point: Complex64,
    region: &Region,
    width: u32,
    height: u32,
) -> Option<(u32, u32)> {
    let nx = (point.re - region.xmin) / region.width();
    let ny = (point.im - region.ymin) / region.height();
    if !(0.0..=1.0).contains(&nx) || !(0.0..=1.0).contains(&ny) {
        return None;
    }

    let px = (nx * (width - 1) as f64).round() as u32;
    let py = ((1.0 - ny) * (height - 1) as f64).round() as u32;
    Some((px, py))
}

/// Render one view panel.
///
/// Layering order: plot background, grid lines at the tick positions,
/// member points, then the optional call-out ring. Members paint over the
/// grid so the lines sit beneath the data.
pub fn render_panel(
    region: &Region,
    members: &[Complex64],
    x_ticks: &[f64],
    y_ticks: &[f64],
    highlight: Option<&Highlight>,
    panel_size: u32,
    style: &PanelStyle,
) -> RgbImage {
    let (width, height) = panel_dimensions(region, panel_size);
    let mut panel = RgbImage::from_pixel(width, height, style.plot_background);

    for &tick in x_ticks {
        let at = Complex64::new(tick, region.ymin);
        if let Some((px, _)) = point_to_pixel(at, region, width, height) {
            for y in 0..height {
                panel.put_pixel(px, y, style.grid_line);
            }
        }
    }
    for &tick in y_ticks {
        let at = Complex64::new(region.xmin, tick);
        if let Some((_, py)) = point_to_pixel(at, region, width, height) {
            for x in 0..width {
                panel.put_pixel(x, py, style.grid_line);
            }
        }
    }

    for &member in members {
        if let Some((px, py)) = point_to_pixel(member, region, width, height) {
            panel.put_pixel(px, py, style.member_point);
        }
    }

    if let Some(highlight) = highlight {
        draw_ring(&mut panel, region, highlight, style.highlight);
    }

    panel
}

/// Ring half thickness in pixels.
const RING_HALF_WIDTH: f64 = 1.5;

/// Draw the call-out circle as an unfilled ring.
///
/// Panels preserve the region aspect ratio, so pixels are square and one
/// scale factor serves both axes.
fn draw_ring(panel: &mut RgbImage, region: &Region, highlight: &Highlight, color: Rgb<u8>) {
    let (width, height) = panel.dimensions();

    let cx = (highlight.center.0 - region.xmin) / region.width() * (width - 1) as f64;
    let cy = (1.0 - (highlight.center.1 - region.ymin) / region.height()) * (height - 1) as f64;
    let radius = highlight.radius / region.width() * (width - 1) as f64;

    let reach = radius + RING_HALF_WIDTH + 1.0;
    let x0 = (cx - reach).floor().max(0.0) as u32;
    let x1 = (cx + reach).ceil().min((width - 1) as f64).max(0.0) as u32;
    let y0 = (cy - reach).floor().max(0.0) as u32;
    let y1 = (cy + reach).ceil().min((height - 1) as f64).max(0.0) as u32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if (dist - radius).abs() <= RING_HALF_WIDTH {
                panel.put_pixel(x, y, color);
            }
        }
    }
}
