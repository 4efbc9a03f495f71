//! # Common Types
//!
//! This module contains the value types shared by the registry, the layout and
//! the renderers: colors, chart identifiers, series data and chart definitions.
//! Everything here is immutable once constructed.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::plotting::ChartStyle;

/// An 8-bit RGB color with a floating alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`
    pub a: f64,
}

impl Rgba {
    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// A color with an explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with a different alpha.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Hex notation without alpha, e.g. `#B71C1C`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_plotters(self) -> plotters::style::RGBAColor {
        plotters::style::RGBAColor(self.r, self.g, self.b, self.a)
    }

    pub fn to_egui(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.alpha_u8())
    }

    fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Identifies one of the six dashboard charts.
///
/// The declaration order is the order of the cards on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartId {
    RevenueRisk,
    ChurnBySpend,
    CustomerJourney,
    AcquisitionVsLoss,
    MostValuedCustomers,
    RiskDistribution,
}

impl ChartId {
    /// All charts in dashboard order.
    pub const ALL: [ChartId; 6] = [
        ChartId::RevenueRisk,
        ChartId::ChurnBySpend,
        ChartId::CustomerJourney,
        ChartId::AcquisitionVsLoss,
        ChartId::MostValuedCustomers,
        ChartId::RiskDistribution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartId::RevenueRisk => "revenue-risk",
            ChartId::ChurnBySpend => "churn-by-spend",
            ChartId::CustomerJourney => "customer-journey",
            ChartId::AcquisitionVsLoss => "acquisition-vs-loss",
            ChartId::MostValuedCustomers => "most-valued-customers",
            ChartId::RiskDistribution => "risk-distribution",
        }
    }

    /// Position of the chart on the dashboard.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown chart id: {}", s))
    }
}

/// The kind of chart a definition is drawn as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    /// A ring chart: a proportion chart with a hollow centre
    Doughnut,
}

/// How the inside of a dataset's marks is painted.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fill {
    /// One color for every point, bar or slice
    Single(Rgba),
    /// One color per category
    PerPoint(Vec<Rgba>),
}

impl Fill {
    /// Color used for the point at `index`. Per-point fills cycle when shorter
    /// than the series.
    pub fn color_at(&self, index: usize) -> Rgba {
        match self {
            Fill::Single(color) => *color,
            Fill::PerPoint(colors) if colors.is_empty() => Rgba::rgba(0, 0, 0, 0.1),
            Fill::PerPoint(colors) => colors[index % colors.len()],
        }
    }
}

/// One sequence of values feeding a chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dataset {
    pub label: Option<String>,
    pub values: Vec<f64>,
    pub border_color: Option<Rgba>,
    pub fill: Fill,
    /// Bezier smoothing between line points, `0.0` draws straight segments
    pub tension: f64,
}

impl Dataset {
    pub fn new(label: Option<&str>, values: Vec<f64>, fill: Fill) -> Self {
        Self {
            label: label.map(str::to_string),
            values,
            border_color: None,
            fill,
            tension: 0.0,
        }
    }

    pub fn border(mut self, color: Rgba) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    /// The color a line or legend swatch uses for this dataset.
    pub fn stroke_color(&self) -> Rgba {
        self.border_color.unwrap_or_else(|| self.fill.color_at(0))
    }
}

/// Category labels with one or more datasets of matching length.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSeries {
    pub fn new(labels: &[&str], datasets: Vec<Dataset>) -> Self {
        Self {
            labels: labels.iter().map(|label| label.to_string()).collect(),
            datasets,
        }
    }

    /// True when every dataset has exactly one value per label.
    pub fn is_consistent(&self) -> bool {
        self.datasets
            .iter()
            .all(|dataset| dataset.values.len() == self.labels.len())
    }

    /// Every value of every dataset.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.datasets.iter().flat_map(|d| d.values.iter().copied())
    }

    pub fn find(&self, label: &str) -> Option<&Dataset> {
        self.datasets
            .iter()
            .find(|d| d.label.as_deref() == Some(label))
    }
}

/// A fully resolved chart: what to draw, with which data and options.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartDefinition {
    pub id: ChartId,
    pub kind: ChartKind,
    pub title: String,
    pub accent: Rgba,
    pub series: ChartSeries,
    pub style: ChartStyle,
}
