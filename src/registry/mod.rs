//! # Chart Configuration Registry
//!
//! Maps each [`ChartId`] to its chart kind, sample series and resolved style.
//! Every definition starts from one shared base [`ChartStyle`]; charts that
//! need something different (the ring charts put their legend on the right)
//! apply a [`StyleOverrides`] through [`resolve_style`].

mod datasets;

use crate::plotting::{resolve_style, ChartStyle, LegendPosition, StyleOverrides, Theme};
use crate::types::{ChartDefinition, ChartId, ChartKind, ChartSeries, Rgba};

/// Holds the six chart definitions of the dashboard
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfigRegistry {
    base_style: ChartStyle,
    definitions: Vec<ChartDefinition>,
}

impl ChartConfigRegistry {
    /// Build every definition against the given theme
    pub fn new(theme: &Theme) -> Self {
        let base_style = ChartStyle::base(theme);
        let definitions = ChartId::ALL
            .iter()
            .map(|&id| build_definition(id, theme, &base_style))
            .collect();

        tracing::debug!("chart registry built with {} definitions", ChartId::ALL.len());

        Self {
            base_style,
            definitions,
        }
    }

    pub fn base_style(&self) -> &ChartStyle {
        &self.base_style
    }

    /// Definitions in dashboard order
    pub fn definitions(&self) -> &[ChartDefinition] {
        &self.definitions
    }

    pub fn get(&self, id: ChartId) -> &ChartDefinition {
        &self.definitions[id.index()]
    }
}

impl Default for ChartConfigRegistry {
    fn default() -> Self {
        Self::new(&Theme::default())
    }
}

fn build_definition(id: ChartId, theme: &Theme, base: &ChartStyle) -> ChartDefinition {
    let palette = &theme.palette;
    let ring_legend = StyleOverrides::legend(LegendPosition::Right);
    let no_overrides = StyleOverrides::default();

    let (kind, title, accent, series, overrides): (ChartKind, &str, Rgba, ChartSeries, &StyleOverrides) =
        match id {
            ChartId::RevenueRisk => (
                ChartKind::Line,
                "Revenue Risk",
                palette.dark_red,
                datasets::revenue_risk(palette),
                &no_overrides,
            ),
            ChartId::ChurnBySpend => (
                ChartKind::Bar,
                "Churn by Spend",
                palette.dark_blue,
                datasets::churn_by_spend(palette),
                &no_overrides,
            ),
            ChartId::CustomerJourney => (
                ChartKind::Line,
                "Customer Journey Risk",
                palette.purple,
                datasets::customer_journey(palette),
                &no_overrides,
            ),
            ChartId::AcquisitionVsLoss => (
                ChartKind::Bar,
                "Customer Acquisition vs Loss",
                palette.dark_blue,
                datasets::acquisition_vs_loss(palette),
                &no_overrides,
            ),
            ChartId::MostValuedCustomers => (
                ChartKind::Doughnut,
                "Most Valued Customers",
                palette.dark_red,
                datasets::most_valued_customers(palette),
                &ring_legend,
            ),
            ChartId::RiskDistribution => (
                ChartKind::Doughnut,
                "Customer Risk Distribution",
                palette.purple,
                datasets::risk_distribution(palette),
                &ring_legend,
            ),
        };

    ChartDefinition {
        id,
        kind,
        title: title.to_string(),
        accent,
        series,
        style: resolve_style(base, overrides),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_series_has_one_value_per_label() {
        let registry = ChartConfigRegistry::default();
        for definition in registry.definitions() {
            assert!(
                definition.series.is_consistent(),
                "{} has mismatched series lengths",
                definition.id
            );
            for dataset in &definition.series.datasets {
                assert_eq!(dataset.values.len(), definition.series.labels.len());
            }
        }
    }

    #[test]
    fn test_definitions_follow_dashboard_order() {
        let registry = ChartConfigRegistry::default();
        let ids: Vec<ChartId> = registry.definitions().iter().map(|d| d.id).collect();
        assert_eq!(ids, ChartId::ALL.to_vec());

        for id in ChartId::ALL {
            assert_eq!(registry.get(id).id, id);
        }
    }

    #[test]
    fn test_chart_kinds() {
        let registry = ChartConfigRegistry::default();
        let kinds: Vec<ChartKind> = registry.definitions().iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::Line,
                ChartKind::Bar,
                ChartKind::Line,
                ChartKind::Bar,
                ChartKind::Doughnut,
                ChartKind::Doughnut,
            ]
        );
    }

    #[test]
    fn test_acquisition_sign_convention() {
        let registry = ChartConfigRegistry::default();
        let series = &registry.get(ChartId::AcquisitionVsLoss).series;

        let acquired = series.find("Acquired").unwrap();
        let lost = series.find("Lost").unwrap();
        assert!(acquired.values.iter().all(|v| *v >= 0.0));
        assert!(lost.values.iter().all(|v| *v <= 0.0));
        assert_eq!(series.labels.len(), 6);
    }

    #[test]
    fn test_ring_charts_put_legend_on_the_right() {
        let registry = ChartConfigRegistry::default();
        for definition in registry.definitions() {
            let expected = match definition.kind {
                ChartKind::Doughnut => LegendPosition::Right,
                _ => LegendPosition::Top,
            };
            assert_eq!(definition.style.legend_position, expected);
            assert_eq!(definition.style.ticks, registry.base_style().ticks);
            assert_eq!(definition.style.padding, registry.base_style().padding);
        }
    }

    #[test]
    fn test_revenue_values() {
        let registry = ChartConfigRegistry::default();
        let revenue = &registry.get(ChartId::RevenueRisk);
        let values = &revenue.series.datasets[0].values;

        assert_eq!(values.len(), 6);
        assert!(values.iter().all(|v| (100_000.0..1_000_000.0).contains(v)));
        assert_eq!(revenue.accent, Theme::default().palette.dark_red);
        assert_eq!(revenue.series.datasets[0].border_color, Some(revenue.accent));
    }

    #[test]
    fn test_journey_is_smoothed() {
        let registry = ChartConfigRegistry::default();
        let journey = &registry.get(ChartId::CustomerJourney).series.datasets[0];
        assert_eq!(journey.tension, 0.4);
        assert_eq!(journey.values, vec![12.0, 15.0, 28.0, 15.0, 20.0]);
    }

    #[test]
    fn test_churn_rates_are_percentages() {
        let registry = ChartConfigRegistry::default();
        let churn = &registry.get(ChartId::ChurnBySpend).series;
        assert_eq!(churn.labels.len(), 5);
        assert!(churn.values().all(|v| (0.0..=100.0).contains(&v)));
    }

    #[test]
    fn test_proportion_charts_have_three_categories() {
        let registry = ChartConfigRegistry::default();
        for id in [ChartId::MostValuedCustomers, ChartId::RiskDistribution] {
            let series = &registry.get(id).series;
            assert_eq!(series.labels.len(), 3);
            assert_eq!(series.datasets.len(), 1);
        }
    }
}
