pub mod figure;
pub mod panel;
pub mod style;

pub use figure::{compose_figure, save_figure};
pub use panel::{panel_dimensions, render_panel};
pub use style::PanelStyle;
