use image::Rgb;

/// Panel and figure colors.
///
/// Defaults reproduce the published figure: a pale lavender plot area with
/// white grid lines, black member points and a red call-out ring, composed
/// on a white figure background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelStyle {
    /// Plot area fill
    pub plot_background: Rgb<u8>,
    /// Axis grid lines, drawn beneath the data
    pub grid_line: Rgb<u8>,
    /// Stable member points
    pub member_point: Rgb<u8>,
    /// Feature call-out ring
    pub highlight: Rgb<u8>,
    /// Margin fill around the composed panels
    pub figure_background: Rgb<u8>,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            plot_background: Rgb([0xEA, 0xEA, 0xF2]),
            grid_line: Rgb([0xFF, 0xFF, 0xFF]),
            member_point: Rgb([0x00, 0x00, 0x00]),
            highlight: Rgb([0xFF, 0x00, 0x00]),
            figure_background: Rgb([0xFF, 0xFF, 0xFF]),
        }
    }
}
