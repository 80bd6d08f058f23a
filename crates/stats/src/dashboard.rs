//! Aggregate counters and their card/row mappings.

use rust_decimal::Decimal;
use serde::Deserialize;

use washboard_core::Money;
use washboard_transactions::{LaundryStatus, StatusColor, Transaction};

/// `GET /dashboard/stats` response body (camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_revenue_today: Money,
    pub revenue_change_percent: Decimal,
    pub new_orders_today: u64,
    pub total_customers: u64,
    pub total_processing_orders: u64,
    pub processing_percentage: Decimal,
}

/// Accent color of a stat card.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardColor {
    Green,
    Pink,
    Blue,
    Orange,
}

/// One headline card on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub color: CardColor,
    pub title: &'static str,
    pub value: String,
    pub footer_value: String,
    pub footer_label: &'static str,
    /// Revenue-trend cards highlight growth; everything else is neutral.
    pub positive_trend: Option<bool>,
}

/// The four headline cards, in display order.
pub fn stat_cards(stats: &DashboardStats) -> [StatCard; 4] {
    let change = stats.revenue_change_percent;
    let change_sign = if change >= Decimal::ZERO { "+" } else { "" };
    [
        StatCard {
            color: CardColor::Green,
            title: "Pendapatan Hari Ini",
            value: stats.total_revenue_today.to_string(),
            footer_value: format!("{change_sign}{change}%"),
            footer_label: "vs kemarin",
            positive_trend: Some(change > Decimal::ZERO),
        },
        StatCard {
            color: CardColor::Pink,
            title: "Order Baru Hari Ini",
            value: stats.new_orders_today.to_string(),
            footer_value: stats.new_orders_today.to_string(),
            footer_label: "total order hari ini",
            positive_trend: None,
        },
        StatCard {
            color: CardColor::Blue,
            title: "Total Pelanggan",
            value: stats.total_customers.to_string(),
            footer_value: stats.total_customers.to_string(),
            footer_label: "pelanggan terdaftar",
            positive_trend: None,
        },
        StatCard {
            color: CardColor::Orange,
            title: "Order Aktif Diproses",
            value: stats.total_processing_orders.to_string(),
            footer_value: format!("{}%", stats.processing_percentage.round()),
            footer_label: "dari total order",
            positive_trend: None,
        },
    ]
}

/// One row of the orders-in-process table.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderInProcess {
    pub invoice_code: String,
    pub customer: String,
    pub service: String,
    pub weight: Decimal,
    pub progress: u8,
    pub color: StatusColor,
}

/// Rows for the in-process table: one per transaction, summarized by its
/// leading line item (`N/A` / 0 when the list endpoint omitted details).
pub fn orders_in_process(transactions: &[Transaction]) -> Vec<OrderInProcess> {
    transactions
        .iter()
        .map(|tx| {
            let leading = tx.leading_detail();
            OrderInProcess {
                invoice_code: tx.invoice_code.clone(),
                customer: tx.customer.name.clone(),
                service: leading
                    .map(|d| d.package.name.clone())
                    .unwrap_or_else(|| "N/A".to_owned()),
                weight: leading.map(|d| d.qty_weight).unwrap_or_default(),
                progress: tx.laundry_status.progress(),
                color: tx.laundry_status.badge().color,
            }
        })
        .collect()
}

/// One recent-activity feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub title: String,
    pub status_label: String,
    /// `HH:MM` of the record timestamp, empty when the server omitted it.
    pub time: String,
    /// Picked-up orders get the completed highlight.
    pub completed: bool,
}

pub fn recent_activity(transactions: &[Transaction]) -> Vec<ActivityEntry> {
    transactions
        .iter()
        .map(|tx| ActivityEntry {
            title: format!("Order #{}", tx.invoice_code),
            status_label: tx.laundry_status.badge().label,
            time: tx
                .created_at
                .map(|at| at.format("%H:%M").to_string())
                .unwrap_or_default(),
            completed: tx.laundry_status == LaundryStatus::Taken,
        })
        .collect()
}
