use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;

use super::styles::{ChartStyle, LabelStyle, LegendPosition};
use crate::types::{ChartDefinition, ChartKind, ChartSeries, Dataset, Rgba};
use crate::utils::{
    arc_polygon, category_label, format_value, grouped_bar_bounds, ring_segments, smooth_points,
    value_range,
};

pub type PlotError = Box<dyn Error + Send + Sync>;

type CategoryChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Samples drawn between two smoothed line points
const SPLINE_SAMPLES: usize = 16;
const LINE_WIDTH: u32 = 3;
const POINT_RADIUS: i32 = 4;
/// Width of the color swatch in front of each legend label
const LEGEND_BOX_WIDTH: u32 = 40;
/// Hole radius as a share of the outer radius
const RING_CUTOUT: f64 = 0.5;

// Helper function to wrap errors
fn wrap_err<E>(e: E) -> PlotError
where
    E: Into<PlotError>,
{
    e.into()
}

/// One legend row: a swatch and its label
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub fill: Rgba,
    pub stroke: Rgba,
}

/// Legend rows for a chart: one per category for ring charts, one per labelled
/// dataset otherwise.
pub fn legend_entries(definition: &ChartDefinition) -> Vec<LegendEntry> {
    let series = &definition.series;
    match definition.kind {
        ChartKind::Doughnut => match series.datasets.first() {
            Some(dataset) => series
                .labels
                .iter()
                .enumerate()
                .map(|(i, label)| LegendEntry {
                    label: label.clone(),
                    fill: dataset.fill.color_at(i),
                    stroke: dataset.border_color.unwrap_or(dataset.fill.color_at(i)),
                })
                .collect(),
            None => Vec::new(),
        },
        ChartKind::Line | ChartKind::Bar => series
            .datasets
            .iter()
            .filter_map(|dataset| {
                dataset.label.as_ref().map(|label| LegendEntry {
                    label: label.clone(),
                    fill: dataset.fill.color_at(0),
                    stroke: dataset.stroke_color(),
                })
            })
            .collect(),
    }
}

/// Draw a chart, its legend and axes inside `area`.
///
/// The caller paints the background; this only draws the chart itself.
pub fn draw_chart<DB>(area: &DrawingArea<DB, Shift>, definition: &ChartDefinition) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let style = &definition.style;
    let padded = area.margin(
        style.padding.top,
        style.padding.bottom,
        style.padding.left,
        style.padding.right,
    );

    let entries = legend_entries(definition);
    let plot_area = if entries.is_empty() {
        padded
    } else {
        let (legend_area, plot_area) = split_legend(&padded, style, &entries)?;
        draw_legend(&legend_area, style, &entries)?;
        plot_area
    };

    match definition.kind {
        ChartKind::Line => draw_category_chart(&plot_area, definition, false),
        ChartKind::Bar => draw_category_chart(&plot_area, definition, true),
        ChartKind::Doughnut => draw_ring(&plot_area, &definition.series),
    }
}

fn legend_font(labels: &LabelStyle) -> TextStyle<'static> {
    ("sans-serif", labels.font_size)
        .into_font()
        .color(&labels.color.to_plotters())
}

/// Split `area` into (legend, plot) according to the legend position.
fn split_legend<DB>(
    area: &DrawingArea<DB, Shift>,
    style: &ChartStyle,
    entries: &[LegendEntry],
) -> Result<(DrawingArea<DB, Shift>, DrawingArea<DB, Shift>), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let labels = &style.legend_labels;
    let font = legend_font(labels);
    let (width, height) = area.dim_in_pixel();

    match style.legend_position {
        LegendPosition::Top | LegendPosition::Bottom => {
            let extent = (labels.font_size + labels.padding).min(height / 2);
            if style.legend_position == LegendPosition::Top {
                Ok(area.split_vertically(extent))
            } else {
                let (plot, legend) = area.split_vertically(height - extent);
                Ok((legend, plot))
            }
        }
        LegendPosition::Left | LegendPosition::Right => {
            let mut widest = 0;
            for entry in entries {
                let (w, _) = area.estimate_text_size(&entry.label, &font)?;
                widest = widest.max(w);
            }
            let extent = (widest + LEGEND_BOX_WIDTH + labels.padding * 2).min(width / 2);
            if style.legend_position == LegendPosition::Left {
                Ok(area.split_horizontally(extent))
            } else {
                let (plot, legend) = area.split_horizontally(width - extent);
                Ok((legend, plot))
            }
        }
    }
}

fn draw_legend<DB>(
    area: &DrawingArea<DB, Shift>,
    style: &ChartStyle,
    entries: &[LegendEntry],
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let labels = &style.legend_labels;
    let font = legend_font(labels);
    let box_height = labels.font_size as i32;
    let gap = (labels.padding / 2) as i32;
    let (width, height) = area.dim_in_pixel();

    let mut widths = Vec::with_capacity(entries.len());
    for entry in entries {
        let (w, _) = area.estimate_text_size(&entry.label, &font)?;
        widths.push(w as i32);
    }

    let draw_entry = |entry: &LegendEntry, x: i32, y: i32| -> Result<(), PlotError> {
        area.draw(&Rectangle::new(
            [(x, y - box_height / 2), (x + LEGEND_BOX_WIDTH as i32, y + box_height / 2)],
            entry.fill.to_plotters().filled(),
        ))?;
        area.draw(&Rectangle::new(
            [(x, y - box_height / 2), (x + LEGEND_BOX_WIDTH as i32, y + box_height / 2)],
            entry.stroke.to_plotters().stroke_width(1),
        ))?;
        area.draw(&Text::new(
            entry.label.clone(),
            (x + LEGEND_BOX_WIDTH as i32 + gap, y),
            font.clone().pos(Pos::new(HPos::Left, VPos::Center)),
        ))?;
        Ok(())
    };

    match style.legend_position {
        LegendPosition::Top | LegendPosition::Bottom => {
            let item_width = |w: i32| LEGEND_BOX_WIDTH as i32 + gap + w;
            let total: i32 = widths.iter().map(|w| item_width(*w)).sum::<i32>()
                + labels.padding as i32 * (entries.len() as i32 - 1);
            let mut x = (width as i32 - total).max(0) / 2;
            let y = height as i32 / 2;
            for (entry, w) in entries.iter().zip(&widths) {
                draw_entry(entry, x, y)?;
                x += item_width(*w) + labels.padding as i32;
            }
        }
        LegendPosition::Left | LegendPosition::Right => {
            let row_height = labels.font_size as i32 + gap;
            let total = row_height * entries.len() as i32;
            let mut y = (height as i32 - total).max(0) / 2 + row_height / 2;
            let x = labels.padding as i32;
            for entry in entries {
                draw_entry(entry, x, y)?;
                y += row_height;
            }
        }
    }

    Ok(())
}

/// Line and bar charts: category x axis, value y axis.
fn draw_category_chart<DB>(
    area: &DrawingArea<DB, Shift>,
    definition: &ChartDefinition,
    begin_at_zero: bool,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let series = &definition.series;
    let style = &definition.style;
    let ticks = &style.ticks;

    let values: Vec<f64> = series.values().collect();
    let (y_min, y_max) = value_range(&values, begin_at_zero);
    let x_min = -0.5;
    let x_max = series.labels.len().max(1) as f64 - 0.5;

    let mut chart = ChartBuilder::on(area)
        .x_label_area_size(ticks.font_size + ticks.padding * 2)
        .y_label_area_size(40 + ticks.padding)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    let tick_font = ("sans-serif", ticks.font_size)
        .into_font()
        .color(&ticks.color.to_plotters());
    let axis_color = style
        .border_color
        .map(Rgba::to_plotters)
        .unwrap_or(TRANSPARENT);

    let labels = series.labels.clone();
    let x_label_formatter = move |x: &f64| category_label(&labels, *x);

    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(style.grid_color.to_plotters())
        .axis_style(axis_color)
        .label_style(tick_font)
        .x_labels(series.labels.len() * 2 + 1)
        .y_labels(6)
        .x_label_formatter(&x_label_formatter)
        .y_label_formatter(&|y: &f64| format_value(*y))
        .draw()?;

    match definition.kind {
        ChartKind::Bar => {
            draw_bars(&mut chart, series).map_err(wrap_err)?;
            if y_min < 0.0 {
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![(x_min, 0.0), (x_max, 0.0)],
                    axis_color.stroke_width(1),
                )))?;
            }
        }
        _ => {
            for dataset in &series.datasets {
                draw_line(&mut chart, dataset).map_err(wrap_err)?;
            }
        }
    }

    Ok(())
}

fn draw_line<DB>(chart: &mut CategoryChart<'_, DB>, dataset: &Dataset) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let points: Vec<(f64, f64)> = dataset
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();

    let path = if dataset.tension > 0.0 {
        smooth_points(&points, dataset.tension, SPLINE_SAMPLES)
    } else {
        points.clone()
    };

    let stroke = dataset.stroke_color().to_plotters();
    chart.draw_series(LineSeries::new(path, stroke.stroke_width(LINE_WIDTH)))?;

    // Point markers: translucent fill with the line color as outline
    chart.draw_series(points.iter().enumerate().map(|(i, point)| {
        Circle::new(*point, POINT_RADIUS, dataset.fill.color_at(i).to_plotters().filled())
    }))?;
    chart.draw_series(
        points
            .iter()
            .map(|point| Circle::new(*point, POINT_RADIUS, stroke.stroke_width(1))),
    )?;

    Ok(())
}

fn draw_bars<DB>(chart: &mut CategoryChart<'_, DB>, series: &ChartSeries) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let count = series.datasets.len();
    for (index, dataset) in series.datasets.iter().enumerate() {
        chart.draw_series(dataset.values.iter().enumerate().map(|(category, value)| {
            let (x0, x1) = grouped_bar_bounds(category, index, count);
            Rectangle::new(
                [(x0, 0.0), (x1, *value)],
                dataset.fill.color_at(category).to_plotters().filled(),
            )
        }))?;
    }
    Ok(())
}

/// Ring chart; several datasets are drawn as concentric rings.
fn draw_ring<DB>(area: &DrawingArea<DB, Shift>, series: &ChartSeries) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    if series.datasets.is_empty() {
        return Ok(());
    }

    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let outer = (width.min(height) as f64 / 2.0 - 4.0).max(1.0);
    let band = outer * (1.0 - RING_CUTOUT) / series.datasets.len() as f64;

    for (ring, dataset) in series.datasets.iter().enumerate() {
        let outer_radius = outer - band * ring as f64;
        let inner_radius = outer_radius - band;

        for (i, (start, end)) in ring_segments(&dataset.values).into_iter().enumerate() {
            if end <= start {
                continue;
            }
            let mut outline = arc_polygon(center, outer_radius, inner_radius, start, end);
            area.draw(&Polygon::new(
                outline.clone(),
                dataset.fill.color_at(i).to_plotters().filled(),
            ))?;

            if let Some(first) = outline.first().copied() {
                outline.push(first);
            }
            area.draw(&PathElement::new(outline, WHITE.stroke_width(2)))?;
        }
    }

    Ok(())
}
