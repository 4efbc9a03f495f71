//! Sample data behind the six dashboard charts

use crate::plotting::Palette;
use crate::types::{ChartSeries, Dataset, Fill};

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub fn revenue_risk(palette: &Palette) -> ChartSeries {
    ChartSeries::new(
        &MONTHS,
        vec![Dataset::new(
            Some("Revenue at Risk"),
            vec![200000.0, 180000.0, 220000.0, 250000.0, 220000.0, 300000.0],
            Fill::Single(palette.light_red),
        )
        .border(palette.dark_red)],
    )
}

pub fn churn_by_spend(palette: &Palette) -> ChartSeries {
    ChartSeries::new(
        &["0-10k", "10-50k", "50-100k", "100-250k", "250k+"],
        vec![Dataset::new(
            Some("Churn Rate by Spend"),
            vec![25.0, 15.0, 10.0, 18.0, 35.0],
            Fill::Single(palette.dark_blue),
        )],
    )
}

pub fn customer_journey(palette: &Palette) -> ChartSeries {
    ChartSeries::new(
        &["Allocation", "Onboard", "Engage", "Enhance", "Renewal"],
        vec![Dataset::new(
            Some("Customers at Risk by Journey"),
            vec![12.0, 15.0, 28.0, 15.0, 20.0],
            Fill::Single(palette.light_purple),
        )
        .border(palette.purple)
        .tension(0.4)],
    )
}

/// Losses are stored as negative counts so they drop below the zero baseline.
pub fn acquisition_vs_loss(palette: &Palette) -> ChartSeries {
    ChartSeries::new(
        &MONTHS,
        vec![
            Dataset::new(
                Some("Acquired"),
                vec![45.0, 52.0, 38.0, 41.0, 35.0, 48.0],
                Fill::Single(palette.dark_blue),
            ),
            Dataset::new(
                Some("Lost"),
                vec![-20.0, -15.0, -18.0, -22.0, -16.0, -19.0],
                Fill::Single(palette.dark_red),
            ),
        ],
    )
}

pub fn most_valued_customers(palette: &Palette) -> ChartSeries {
    ChartSeries::new(
        &["Premium", "Standard", "Basic"],
        vec![Dataset::new(
            None,
            vec![120.0, 200.0, 300.0],
            Fill::PerPoint(vec![palette.dark_red, palette.dark_blue, palette.purple]),
        )],
    )
}

pub fn risk_distribution(palette: &Palette) -> ChartSeries {
    ChartSeries::new(
        &["High Risk", "Medium Risk", "Low Risk"],
        vec![Dataset::new(
            None,
            vec![30.0, 45.0, 25.0],
            Fill::PerPoint(vec![palette.dark_red, palette.purple, palette.dark_blue]),
        )],
    )
}
