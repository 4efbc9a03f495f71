//! # Dashboard Layout
//!
//! Turns the chart registry into the dashboard's visual tree: a dark page with
//! a centred heading and a two-column grid of cards, one per chart. Building
//! the tree is a pure function of the registry and the theme; renderers (the
//! egui window and the plotters export) only walk it.

use serde::Serialize;

use super::mount::{resolve_anchor, Anchor, Host};
use crate::error::DashboardResult;
use crate::plotting::{CardTheme, Theme};
use crate::registry::ChartConfigRegistry;
use crate::types::{ChartDefinition, Rgba};

pub const DASHBOARD_HEADING: &str = "Customer Churn Analytics Dashboard";

/// Root of the rendered dashboard
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardTree {
    pub page: PageNode,
}

/// Full-height page background with the heading and grid on top
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageNode {
    pub background: Rgba,
    pub text_color: Rgba,
    pub padding: u32,
    pub heading: HeadingNode,
    pub grid: GridNode,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeadingNode {
    pub text: String,
    pub color: Rgba,
    pub font_size: u32,
    pub font_weight: u16,
    pub margin_bottom: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridNode {
    pub columns: u32,
    pub gap: u32,
    pub max_width: u32,
    pub cards: Vec<CardNode>,
}

/// One grid cell: a themed card with a colored title and a chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardNode {
    pub title: String,
    pub accent: Rgba,
    pub style: CardTheme,
    pub chart: ChartDefinition,
}

/// A dashboard attached to its anchor
#[derive(Clone, Debug, PartialEq)]
pub struct MountedDashboard {
    pub anchor: Anchor,
    pub tree: DashboardTree,
}

impl MountedDashboard {
    /// Page geometry for the anchor's viewport width.
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::compute(&self.tree, self.anchor.viewport.width)
    }
}

/// Composes registry entries into the dashboard
pub struct DashboardView<'a> {
    registry: &'a ChartConfigRegistry,
    theme: &'a Theme,
}

impl<'a> DashboardView<'a> {
    pub fn new(registry: &'a ChartConfigRegistry, theme: &'a Theme) -> Self {
        Self { registry, theme }
    }

    /// Build the visual tree. Cards follow the registry's dashboard order.
    pub fn render(&self) -> DashboardTree {
        let theme = self.theme;
        let cards = self
            .registry
            .definitions()
            .iter()
            .map(|definition| card(&definition.title, definition.accent, definition, theme))
            .collect();

        DashboardTree {
            page: PageNode {
                background: theme.page_background,
                text_color: theme.text_color,
                padding: theme.page_padding,
                heading: HeadingNode {
                    text: DASHBOARD_HEADING.to_string(),
                    color: theme.text_color,
                    font_size: theme.heading_font_size,
                    font_weight: 500,
                    margin_bottom: theme.heading_margin_bottom,
                },
                grid: GridNode {
                    columns: theme.grid.columns,
                    gap: theme.grid.gap,
                    max_width: theme.grid.max_width,
                    cards,
                },
            },
        }
    }

    /// Attach to the host's anchor and render. Fails with `MountNotFound`
    /// before anything is built when the anchor is missing.
    pub fn mount<H: Host + ?Sized>(&self, host: &H, anchor_id: &str) -> DashboardResult<MountedDashboard> {
        let anchor = resolve_anchor(host, anchor_id)?;
        tracing::info!(
            "mounting dashboard on '{}' ({}x{})",
            anchor.id,
            anchor.viewport.width,
            anchor.viewport.height
        );

        let tree = self.render();
        tracing::debug!("rendered {} cards", tree.page.grid.cards.len());
        Ok(MountedDashboard { anchor, tree })
    }
}

/// One card of the grid.
pub fn card(title: &str, accent: Rgba, definition: &ChartDefinition, theme: &Theme) -> CardNode {
    CardNode {
        title: title.to_string(),
        accent,
        style: theme.card.clone(),
        chart: definition.clone(),
    }
}

/// Axis-aligned pixel rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Shrink on every side, never below zero size.
    pub fn inset(&self, amount: u32) -> Rect {
        Rect {
            x: self.x + amount as i32,
            y: self.y + amount as i32,
            width: self.width.saturating_sub(amount * 2),
            height: self.height.saturating_sub(amount * 2),
        }
    }
}

/// Title and chart regions inside a card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardRegions {
    pub title: Rect,
    pub chart: Rect,
}

/// Line height used for headings and titles
fn line_height(font_size: u32) -> u32 {
    font_size * 6 / 5
}

impl CardRegions {
    /// Card heights are outer heights: padding, title and chart all fit inside.
    pub fn compute(card: &CardNode, rect: Rect) -> Self {
        let inner = rect.inset(card.style.padding);
        let title_height = line_height(card.style.title_font_size).min(inner.height);
        let title = Rect {
            height: title_height,
            ..inner
        };
        let chart_top = title_height + card.style.title_margin_bottom;
        let chart = Rect {
            x: inner.x,
            y: inner.y + chart_top as i32,
            width: inner.width,
            height: inner.height.saturating_sub(chart_top),
        };
        Self { title, chart }
    }
}

/// Where everything sits on a page of a given width
#[derive(Clone, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: u32,
    pub height: u32,
    pub heading: Rect,
    pub cards: Vec<Rect>,
}

impl PageGeometry {
    pub fn compute(tree: &DashboardTree, canvas_width: u32) -> Self {
        let page = &tree.page;
        let grid = &page.grid;
        let columns = grid.columns.max(1);
        let gaps = grid.gap * (columns - 1);

        let content_width = canvas_width
            .saturating_sub(page.padding * 2)
            .min(grid.max_width)
            .max(columns + gaps);
        let width = canvas_width.max(content_width + page.padding * 2);
        let left = ((width - content_width) / 2) as i32;
        let column_width = (content_width - gaps) / columns;

        let heading = Rect {
            x: left,
            y: page.padding as i32,
            width: content_width,
            height: line_height(page.heading.font_size),
        };
        let grid_top = heading.bottom() + page.heading.margin_bottom as i32;

        let mut cards = Vec::with_capacity(grid.cards.len());
        let mut row_top = grid_top;
        for row in grid.cards.chunks(columns as usize) {
            let row_height = row.iter().map(|c| c.style.height).max().unwrap_or(0);
            for (column, card) in row.iter().enumerate() {
                cards.push(Rect {
                    x: left + (column as u32 * (column_width + grid.gap)) as i32,
                    y: row_top,
                    width: column_width,
                    height: card.style.height,
                });
            }
            row_top += (row_height + grid.gap) as i32;
        }

        let content_bottom = if grid.cards.is_empty() {
            grid_top
        } else {
            row_top - grid.gap as i32
        };

        Self {
            width,
            height: (content_bottom + page.padding as i32).max(0) as u32,
            heading,
            cards,
        }
    }
}
