use super::*;
use crate::app::{DashboardTree, DashboardView, PageGeometry};
use crate::registry::ChartConfigRegistry;
use crate::types::{ChartId, Rgba};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

fn setup_tree() -> (DashboardTree, Theme) {
    let theme = Theme::default();
    let registry = ChartConfigRegistry::new(&theme);
    let tree = DashboardView::new(&registry, &theme).render();
    (tree, theme)
}

fn pixel(buffer: &[u8], width: u32, x: u32, y: u32) -> (u8, u8, u8) {
    let offset = ((y * width + x) * 3) as usize;
    (buffer[offset], buffer[offset + 1], buffer[offset + 2])
}

#[test]
fn test_ring_legend_lists_categories() {
    let registry = ChartConfigRegistry::default();
    let palette = Palette::default();
    let entries = legend_entries(registry.get(ChartId::RiskDistribution));

    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["High Risk", "Medium Risk", "Low Risk"]);
    assert_eq!(entries[0].fill, palette.dark_red);
    assert_eq!(entries[1].fill, palette.purple);
    assert_eq!(entries[2].fill, palette.dark_blue);
}

#[test]
fn test_grouped_bar_legend_lists_datasets() {
    let registry = ChartConfigRegistry::default();
    let entries = legend_entries(registry.get(ChartId::AcquisitionVsLoss));

    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Acquired", "Lost"]);
}

#[test]
fn test_line_legend_uses_border_color() {
    let registry = ChartConfigRegistry::default();
    let revenue = registry.get(ChartId::RevenueRisk);
    let entries = legend_entries(revenue);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].stroke, revenue.accent);
    assert_eq!(entries[0].fill, Palette::default().light_red);
}

#[test]
fn test_render_every_chart() {
    let registry = ChartConfigRegistry::default();
    let background = Rgba::rgb(0x1E, 0x1E, 0x1E);
    let size = (640, 300);

    for definition in registry.definitions() {
        let buffer = render_chart_rgb(definition, background, size).unwrap();
        assert_eq!(buffer.len(), 640 * 300 * 3);
        // The padding corner is left untouched
        assert_eq!(pixel(&buffer, size.0, 0, 0), (0x1E, 0x1E, 0x1E));
        // Something other than the background was drawn
        assert!(buffer.chunks(3).any(|px| px != &[0x1E, 0x1E, 0x1E][..]));
    }
}

#[test]
fn test_export_svg_carries_theme_colors() {
    let (tree, theme) = setup_tree();
    let svg = export_svg(&tree, 1600).unwrap().to_uppercase();

    assert!(svg.starts_with("<SVG") || svg.contains("<SVG"));
    assert!(svg.contains(&theme.page_background.to_hex()));
    for card in &tree.page.grid.cards {
        assert!(svg.contains(&card.accent.to_hex()), "missing accent of {}", card.title);
    }
}

#[test]
fn test_export_png() {
    let (tree, _theme) = setup_tree();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dashboard.png");

    export_to_file(&tree, 1200, &path).unwrap();

    let geometry = PageGeometry::compute(&tree, 1200);
    let image = image::open(&path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (geometry.width, geometry.height));
    assert_eq!(image.get_pixel(0, 0).0, [0x12, 0x12, 0x12]);
}

#[test]
fn test_page_buffer_size() {
    let (tree, _theme) = setup_tree();
    let (buffer, (width, height)) = render_page_rgb(&tree, 1000).unwrap();
    assert_eq!(buffer.len(), (width * height * 3) as usize);
    assert_eq!(pixel(&buffer, width, width - 1, height - 1), (0x12, 0x12, 0x12));
}

#[test]
fn test_export_format_from_path() {
    assert_eq!(ExportFormat::from_path(Path::new("out.svg")), ExportFormat::Svg);
    assert_eq!(ExportFormat::from_path(Path::new("out.SVG")), ExportFormat::Svg);
    assert_eq!(ExportFormat::from_path(Path::new("out.png")), ExportFormat::Image);
    assert_eq!(ExportFormat::from_path(Path::new("out")), ExportFormat::Image);
}
