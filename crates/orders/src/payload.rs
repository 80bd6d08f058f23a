//! Wire payload for creating a transaction.
//!
//! Built from a validated draft and sent verbatim; the server recomputes and
//! owns the authoritative totals and the invoice number.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use washboard_core::{CustomerId, Money, PackageId, UserId};
use washboard_packages::Package;
use washboard_transactions::PaymentStatus;

use crate::draft::{OrderDraft, SubmissionBlocked};

/// `POST /transaction` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTransaction {
    pub customer_id: CustomerId,
    pub drop_off_date: NaiveDate,
    pub subtotal_before_discount: Money,
    pub discount_amount: Money,
    pub final_total_price: Money,
    /// Longest estimated duration (days) across the selected packages.
    pub max_duration: u32,
    pub payment_status: PaymentStatus,
    /// Cashier id, as reported by the create-data endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub items: Vec<CreateTransactionItem>,
}

/// One stored line of the payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTransactionItem {
    pub package_id: PackageId,
    pub qty_weight: Decimal,
    pub price_per_unit: Money,
    pub subtotal: Money,
}

impl OrderDraft {
    /// Builds the create payload, or the reason submission is blocked.
    ///
    /// Lines with no package or a zero quantity contribute nothing and are
    /// filtered out. `packages` is the master list the draft was composed
    /// from; it supplies the per-package estimated durations.
    pub fn payload(
        &self,
        packages: &[Package],
        cashier: Option<UserId>,
    ) -> Result<CreateTransaction, SubmissionBlocked> {
        self.ready_for_submission()?;

        let customer_id = self.customer_id().ok_or(SubmissionBlocked::NoCustomer)?;
        let totals = self.totals();

        let items: Vec<CreateTransactionItem> = self
            .items()
            .iter()
            .filter(|line| line.quantity() > Decimal::ZERO)
            .filter_map(|line| {
                line.package_id().map(|package_id| CreateTransactionItem {
                    package_id,
                    qty_weight: line.quantity(),
                    price_per_unit: line.unit_price(),
                    subtotal: line.subtotal(),
                })
            })
            .collect();

        Ok(CreateTransaction {
            customer_id,
            drop_off_date: self.drop_off_date(),
            subtotal_before_discount: totals.subtotal,
            discount_amount: totals.discount,
            final_total_price: totals.final_total,
            max_duration: self.max_duration(packages),
            payment_status: self.payment_status().clone(),
            user_id: cashier,
            items,
        })
    }

    /// Longest estimated duration across the selected packages, floored at
    /// one day.
    pub fn max_duration(&self, packages: &[Package]) -> u32 {
        self.items()
            .iter()
            .filter_map(|line| line.package_id())
            .filter_map(|id| packages.iter().find(|p| p.id == id))
            .map(|p| p.estimated_duration)
            .fold(1, u32::max)
    }
}
