//! Figure composition and output.

use crate::FigureError;
use image::{imageops, Rgb, RgbImage};
use std::path::Path;

/// Lay panels out left to right on a shared background.
///
/// Each panel keeps its own size. A `margin` border separates panels from
/// each other and from the figure edge, and shorter panels are centered
/// vertically.
pub fn compose_figure(
    panels: &[RgbImage],
    margin: u32,
    background: Rgb<u8>,
) -> Result<RgbImage, FigureError> {
    if panels.is_empty() {
        return Err(FigureError::Empty);
    }

    let content_width: u32 = panels.iter().map(|panel| panel.width()).sum();
    let content_height = panels.iter().map(|panel| panel.height()).max().unwrap_or(0);
    let width = content_width + margin * (panels.len() as u32 + 1);
    let height = content_height + 2 * margin;

    let mut figure = RgbImage::from_pixel(width, height, background);
    let mut x_offset = margin;
    for panel in panels {
        let y_offset = margin + (content_height - panel.height()) / 2;
        imageops::replace(&mut figure, panel, x_offset as i64, y_offset as i64);
        x_offset += panel.width() + margin;
    }

    Ok(figure)
}

/// Encode the figure as PNG at `path`.
pub fn save_figure(figure: &RgbImage, path: &Path) -> Result<(), FigureError> {
    figure.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

    // ============================================================================
    // compose_figure() layout tests
    // ============================================================================

    #[test]
    fn figure_size_adds_margins_around_panels() {
        let panels = vec![
            RgbImage::from_pixel(10, 20, Rgb([1, 1, 1])),
            RgbImage::from_pixel(30, 40, Rgb([2, 2, 2])),
        ];

        let figure = compose_figure(&panels, 5, WHITE).unwrap();

        // 10 + 30 content plus three 5px gaps; 40 content plus two 5px gaps.
        assert_eq!(figure.dimensions(), (55, 50));
    }

    #[test]
    fn shorter_panels_are_centered_vertically() {
        let panels = vec![
            RgbImage::from_pixel(10, 20, Rgb([1, 1, 1])),
            RgbImage::from_pixel(30, 40, Rgb([2, 2, 2])),
        ];

        let figure = compose_figure(&panels, 5, WHITE).unwrap();

        // First panel starts at y = 5 + (40 - 20) / 2 = 15.
        assert_eq!(*figure.get_pixel(5, 15), Rgb([1, 1, 1]));
        assert_eq!(*figure.get_pixel(5, 14), WHITE);
        // Second panel spans the full content height from y = 5.
        assert_eq!(*figure.get_pixel(20, 5), Rgb([2, 2, 2]));
    }

    #[test]
    fn margins_keep_the_background_color() {
        let panels = vec![RgbImage::from_pixel(8, 8, Rgb([9, 9, 9]))];
        let figure = compose_figure(&panels, 4, WHITE).unwrap();

        assert_eq!(figure.dimensions(), (16, 16));
        assert_eq!(*figure.get_pixel(0, 0), WHITE);
        assert_eq!(*figure.get_pixel(15, 15), WHITE);
        assert_eq!(*figure.get_pixel(4, 4), Rgb([9, 9, 9]));
    }

    #[test]
    fn empty_panel_list_is_an_error() {
        let result = compose_figure(&[], 5, WHITE);
        assert!(matches!(result, Err(FigureError::Empty)));
    }

    // ============================================================================
    // save_figure() tests
    // ============================================================================

    #[test]
    fn save_writes_a_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.png");
        let figure = RgbImage::from_pixel(12, 7, Rgb([3, 4, 5]));

        save_figure(&figure, &path).unwrap();

        let restored = image::open(&path).unwrap().to_rgb8();
        assert_eq!(restored.dimensions(), (12, 7));
        assert_eq!(*restored.get_pixel(6, 3), Rgb([3, 4, 5]));
    }

    #[test]
    fn save_to_a_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("figure.png");
        let figure = RgbImage::from_pixel(4, 4, WHITE);

        let result = save_figure(&figure, &path);
        assert!(matches!(result, Err(FigureError::Write(_))));
    }
}
