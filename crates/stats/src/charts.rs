//! Chart series wire models.
//!
//! Rendering is the shell's concern; this stops at typed series data.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One plotted series: values plus their category axis labels.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct ChartSeries {
    pub data: Vec<Decimal>,
    pub categories: Vec<String>,
}

impl ChartSeries {
    /// Whether every value has a matching category label.
    pub fn is_aligned(&self) -> bool {
        self.data.len() == self.categories.len()
    }
}

/// `GET /dashboard/charts` response body: the three dashboard charts.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardCharts {
    pub weekly_orders: ChartSeries,
    pub monthly_revenue: ChartSeries,
    pub monthly_weight: ChartSeries,
}
