//! Page and chart rasterisation
//!
//! Paints a [`DashboardTree`] with plotters, either into an SVG document or
//! into an RGB buffer that is written out with `image` or uploaded as an egui
//! texture.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use super::chart::{draw_chart, PlotError};
use crate::app::{CardNode, CardRegions, DashboardTree, PageGeometry, Rect};
use crate::error::{DashboardError, DashboardResult};
use crate::types::{ChartDefinition, Rgba};
use crate::utils::rounded_rect;

/// Output format picked from a file extension
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    /// Any raster format `image` can write (png, jpg, bmp, ...)
    Image,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ExportFormat::Svg,
            _ => ExportFormat::Image,
        }
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> DashboardError {
    DashboardError::Render(e.to_string())
}

/// Paint the whole page: background, heading and every card.
pub fn draw_dashboard<DB>(
    root: &DrawingArea<DB, Shift>,
    tree: &DashboardTree,
    geometry: &PageGeometry,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let page = &tree.page;
    root.fill(&page.background.to_plotters())?;

    let heading = &page.heading;
    let heading_font = ("sans-serif", heading.font_size)
        .into_font()
        .color(&heading.color.to_plotters())
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        heading.text.clone(),
        (
            geometry.heading.x + geometry.heading.width as i32 / 2,
            geometry.heading.y,
        ),
        heading_font,
    ))?;

    for (card, rect) in page.grid.cards.iter().zip(&geometry.cards) {
        draw_card(root, card, *rect)?;
    }

    Ok(())
}

fn draw_card<DB>(root: &DrawingArea<DB, Shift>, card: &CardNode, rect: Rect) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let style = &card.style;
    let shadow = &style.shadow;

    root.draw(&Polygon::new(
        rounded_rect(
            rect.x + shadow.offset_x,
            rect.y + shadow.offset_y,
            rect.width,
            rect.height,
            style.corner_radius,
        ),
        shadow.color.to_plotters().filled(),
    ))?;

    let mut outline = rounded_rect(rect.x, rect.y, rect.width, rect.height, style.corner_radius);
    root.draw(&Polygon::new(
        outline.clone(),
        style.background.to_plotters().filled(),
    ))?;
    if style.border_width > 0 {
        if let Some(first) = outline.first().copied() {
            outline.push(first);
        }
        root.draw(&PathElement::new(
            outline,
            style.border_color.to_plotters().stroke_width(style.border_width),
        ))?;
    }

    let regions = CardRegions::compute(card, rect);
    let title_font = ("sans-serif", style.title_font_size)
        .into_font()
        .color(&card.accent.to_plotters())
        .pos(Pos::new(HPos::Left, VPos::Center));
    root.draw(&Text::new(
        card.title.clone(),
        (regions.title.x, regions.title.y + regions.title.height as i32 / 2),
        title_font,
    ))?;

    if regions.chart.width > 0 && regions.chart.height > 0 {
        let chart_area = root.clone().shrink(
            (regions.chart.x, regions.chart.y),
            (regions.chart.width, regions.chart.height),
        );
        draw_chart(&chart_area, &card.chart)?;
    }

    Ok(())
}

/// Render the page as an SVG document.
pub fn export_svg(tree: &DashboardTree, canvas_width: u32) -> DashboardResult<String> {
    let geometry = PageGeometry::compute(tree, canvas_width);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (geometry.width, geometry.height))
            .into_drawing_area();
        draw_dashboard(&root, tree, &geometry).map_err(render_err)?;
        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

/// Render the page into a packed RGB buffer; returns the buffer and its size.
pub fn render_page_rgb(tree: &DashboardTree, canvas_width: u32) -> DashboardResult<(Vec<u8>, (u32, u32))> {
    let geometry = PageGeometry::compute(tree, canvas_width);
    let size = (geometry.width, geometry.height);
    let mut buffer = vec![0u8; size.0 as usize * size.1 as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        draw_dashboard(&root, tree, &geometry).map_err(render_err)?;
        root.present().map_err(render_err)?;
    }
    Ok((buffer, size))
}

/// Render one chart on a solid background into a packed RGB buffer.
pub fn render_chart_rgb(
    definition: &ChartDefinition,
    background: Rgba,
    size: (u32, u32),
) -> DashboardResult<Vec<u8>> {
    let mut buffer = vec![0u8; size.0 as usize * size.1 as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        root.fill(&background.to_plotters()).map_err(render_err)?;
        draw_chart(&root, definition).map_err(render_err)?;
        root.present().map_err(render_err)?;
    }
    Ok(buffer)
}

/// Write the page to `path`, choosing SVG or a raster format by extension.
pub fn export_to_file(tree: &DashboardTree, canvas_width: u32, path: &Path) -> DashboardResult<()> {
    match ExportFormat::from_path(path) {
        ExportFormat::Svg => {
            let svg = export_svg(tree, canvas_width)?;
            std::fs::write(path, svg)?;
        }
        ExportFormat::Image => {
            let (buffer, (width, height)) = render_page_rgb(tree, canvas_width)?;
            let image = image::RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
                DashboardError::Render(format!("buffer does not match {}x{}", width, height))
            })?;
            image.save(path)?;
        }
    }

    tracing::info!("dashboard exported to {}", path.display());
    Ok(())
}
