//! `washboard-stats` — dashboard wire models and pure view mappings.
//!
//! The server aggregates everything; this crate only shapes the returned
//! counters and recent transactions for display.

pub mod charts;
pub mod dashboard;

pub use charts::{ChartSeries, DashboardCharts};
pub use dashboard::{
    orders_in_process, recent_activity, stat_cards, ActivityEntry, CardColor, DashboardStats,
    OrderInProcess, StatCard,
};
