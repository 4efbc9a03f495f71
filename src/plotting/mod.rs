mod chart;
mod export;
mod styles;

#[cfg(test)]
mod tests;

pub use chart::{draw_chart, legend_entries, LegendEntry, PlotError};
pub use export::{
    draw_dashboard, export_svg, export_to_file, render_chart_rgb, render_page_rgb, ExportFormat,
};
pub use styles::{
    resolve_style, CardTheme, ChartStyle, GridTheme, LabelStyle, LegendPosition, Padding, Palette,
    Shadow, StyleOverrides, Theme,
};
