use serde::Serialize;

use crate::types::Rgba;

/// Named color tokens shared by the page and the charts
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Palette {
    pub dark_blue: Rgba,
    pub dark_red: Rgba,
    pub purple: Rgba,
    pub light_blue: Rgba,
    pub light_red: Rgba,
    pub light_purple: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        let dark_blue = Rgba::rgb(0x1A, 0x23, 0x7E);
        let dark_red = Rgba::rgb(0xB7, 0x1C, 0x1C);
        let purple = Rgba::rgb(0x4A, 0x14, 0x8C);
        Self {
            dark_blue,
            dark_red,
            purple,
            light_blue: dark_blue.with_alpha(0.5),
            light_red: dark_red.with_alpha(0.5),
            light_purple: purple.with_alpha(0.5),
        }
    }
}

/// Drop shadow under a card
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shadow {
    pub offset_x: i32,
    pub offset_y: i32,
    pub blur: u32,
    pub color: Rgba,
}

/// Card (grid cell) appearance
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardTheme {
    pub background: Rgba,
    pub padding: u32,
    pub corner_radius: u32,
    pub height: u32,
    pub border_width: u32,
    pub border_color: Rgba,
    pub shadow: Shadow,
    pub title_font_size: u32,
    pub title_margin_bottom: u32,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(0x1E, 0x1E, 0x1E),
            padding: 25,
            corner_radius: 15,
            height: 380,
            border_width: 1,
            border_color: Rgba::rgba(255, 255, 255, 0.1),
            shadow: Shadow {
                offset_x: 0,
                offset_y: 4,
                blur: 6,
                color: Rgba::rgba(0, 0, 0, 0.1),
            },
            title_font_size: 24,
            title_margin_bottom: 20,
        }
    }
}

/// Grid container appearance
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridTheme {
    pub columns: u32,
    pub gap: u32,
    pub max_width: u32,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            columns: 2,
            gap: 30,
            max_width: 1800,
        }
    }
}

/// Immutable page theme, passed explicitly to the registry and the layout
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub palette: Palette,
    pub page_background: Rgba,
    pub text_color: Rgba,
    pub page_padding: u32,
    pub heading_font_size: u32,
    pub heading_margin_bottom: u32,
    pub grid: GridTheme,
    pub card: CardTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            page_background: Rgba::rgb(0x12, 0x12, 0x12),
            text_color: Rgba::rgb(255, 255, 255),
            page_padding: 30,
            heading_font_size: 40,
            heading_margin_bottom: 40,
            grid: GridTheme::default(),
            card: CardTheme::default(),
        }
    }
}

/// Where a chart legend sits relative to the plot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Right,
    Bottom,
    Left,
}

/// Text style of legend labels and axis ticks
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelStyle {
    pub color: Rgba,
    pub padding: u32,
    pub font_size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

/// Chart style options
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartStyle {
    pub legend_position: LegendPosition,
    pub legend_labels: LabelStyle,
    pub ticks: LabelStyle,
    pub grid_color: Rgba,
    /// Axis line color, `None` hides the axis border
    pub border_color: Option<Rgba>,
    pub padding: Padding,
}

impl ChartStyle {
    /// Base options for charts drawn on a dark theme.
    pub fn base(theme: &Theme) -> Self {
        Self {
            legend_position: LegendPosition::Top,
            legend_labels: LabelStyle {
                color: theme.text_color,
                padding: 20,
                font_size: 12,
            },
            ticks: LabelStyle {
                color: theme.text_color,
                padding: 10,
                font_size: 12,
            },
            grid_color: Rgba::rgba(255, 255, 255, 0.1),
            border_color: Some(Rgba::rgba(255, 255, 255, 0.3)),
            padding: Padding {
                left: 15,
                right: 15,
                top: 15,
                bottom: 25,
            },
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::base(&Theme::default())
    }
}

/// Per-chart changes to the base style. `None` keeps the base value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOverrides {
    pub legend_position: Option<LegendPosition>,
    pub legend_labels: Option<LabelStyle>,
    pub ticks: Option<LabelStyle>,
    pub grid_color: Option<Rgba>,
    pub border_color: Option<Option<Rgba>>,
    pub padding: Option<Padding>,
}

impl StyleOverrides {
    pub fn legend(position: LegendPosition) -> Self {
        Self {
            legend_position: Some(position),
            ..Self::default()
        }
    }
}

/// Shallow-merge `overrides` onto `base`; override fields win.
pub fn resolve_style(base: &ChartStyle, overrides: &StyleOverrides) -> ChartStyle {
    ChartStyle {
        legend_position: overrides.legend_position.unwrap_or(base.legend_position),
        legend_labels: overrides
            .legend_labels
            .clone()
            .unwrap_or_else(|| base.legend_labels.clone()),
        ticks: overrides.ticks.clone().unwrap_or_else(|| base.ticks.clone()),
        grid_color: overrides.grid_color.unwrap_or(base.grid_color),
        border_color: overrides.border_color.unwrap_or(base.border_color),
        padding: overrides.padding.unwrap_or(base.padding),
    }
}
