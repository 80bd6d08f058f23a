use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use washboard_core::{CustomerId, DomainError, DomainResult, Money, PackageId};
use washboard_packages::{Package, ServiceUnit};
use washboard_transactions::PaymentStatus;

/// Smallest meaningful quantity. Anything below is coerced to zero so a
/// priced line can never contribute a degenerate non-zero amount.
pub fn min_quantity() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

/// One package selection within the draft.
///
/// `unit_price` and `unit` are copied from the package at selection time and
/// not re-fetched; `subtotal` is always derived from `unit_price × quantity`
/// and never independently editable.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    package_id: Option<PackageId>,
    quantity: Decimal,
    unit_price: Money,
    unit: Option<ServiceUnit>,
    subtotal: Money,
}

impl LineItem {
    fn blank() -> Self {
        Self {
            package_id: None,
            quantity: Decimal::ZERO,
            unit_price: Money::ZERO,
            unit: None,
            subtotal: Money::ZERO,
        }
    }

    pub fn package_id(&self) -> Option<PackageId> {
        self.package_id
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn unit(&self) -> Option<&ServiceUnit> {
        self.unit.as_ref()
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// A line counts toward submission only when a package is chosen and the
    /// quantity clears the floor.
    pub fn is_complete(&self) -> bool {
        self.package_id.is_some() && self.quantity >= min_quantity()
    }

    fn recompute(&mut self) {
        self.subtotal = self.unit_price.times(self.quantity);
    }
}

/// Derived totals; recomputed, never stored independently of the draft.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Totals {
    pub subtotal: Money,
    pub discount: Money,
    pub final_total: Money,
}

/// Reason submission is currently blocked. Exactly one reason is surfaced
/// at a time, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionBlocked {
    #[error("select a customer before submitting")]
    NoCustomer,
    #[error("line {line} needs a package and a quantity of at least 0.01")]
    IncompleteLine { line: usize },
    #[error("discount cannot exceed the subtotal")]
    DiscountExceedsSubtotal,
    #[error("order total must be greater than zero")]
    NothingToCharge,
}

/// In-memory, uncommitted point-of-sale transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    customer_id: Option<CustomerId>,
    drop_off_date: NaiveDate,
    discount_amount: Money,
    items: Vec<LineItem>,
    payment_status: PaymentStatus,
    totals: Totals,
}

impl OrderDraft {
    /// Fresh draft: one blank line, no discount, payment pending.
    pub fn new(drop_off_date: NaiveDate) -> Self {
        let mut draft = Self {
            customer_id: None,
            drop_off_date,
            discount_amount: Money::ZERO,
            items: vec![LineItem::blank()],
            payment_status: PaymentStatus::Pending,
            totals: Totals::default(),
        };
        draft.recompute();
        draft
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    pub fn drop_off_date(&self) -> NaiveDate {
        self.drop_off_date
    }

    pub fn discount_amount(&self) -> Money {
        self.discount_amount
    }

    pub fn payment_status(&self) -> &PaymentStatus {
        &self.payment_status
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn select_customer(&mut self, customer_id: CustomerId) {
        self.customer_id = Some(customer_id);
    }

    pub fn set_drop_off_date(&mut self, date: NaiveDate) {
        self.drop_off_date = date;
    }

    pub fn set_payment_status(&mut self, status: PaymentStatus) {
        self.payment_status = status;
    }

    /// Pricing rule: copy the chosen package's current price and unit into
    /// the line, then recompute its subtotal.
    pub fn select_package(&mut self, index: usize, package: &Package) -> DomainResult<()> {
        let line = self.line_mut(index)?;
        line.package_id = Some(package.id);
        line.unit_price = package.price;
        line.unit = Some(package.unit.clone());
        line.recompute();
        self.recompute();
        Ok(())
    }

    /// Quantity rule: values below the floor (0.01) are coerced to zero,
    /// then the line subtotal is recomputed.
    pub fn set_quantity(&mut self, index: usize, quantity: Decimal) -> DomainResult<()> {
        let line = self.line_mut(index)?;
        line.quantity = if quantity < min_quantity() {
            Decimal::ZERO
        } else {
            quantity
        };
        line.recompute();
        self.recompute();
        Ok(())
    }

    pub fn add_line(&mut self) {
        self.items.push(LineItem::blank());
        self.recompute();
    }

    /// Removes a line; the draft always keeps at least one.
    pub fn remove_line(&mut self, index: usize) -> DomainResult<()> {
        if self.items.len() <= 1 {
            return Err(DomainError::invariant("the draft keeps at least one line"));
        }
        if index >= self.items.len() {
            return Err(DomainError::validation(format!("no line at index {index}")));
        }
        self.items.remove(index);
        self.recompute();
        Ok(())
    }

    /// Discounts are never negative; the effective amount is clamped down
    /// to the subtotal on recomputation (never clamped upward).
    pub fn set_discount(&mut self, amount: Money) {
        self.discount_amount = if amount.is_negative() {
            Money::ZERO
        } else {
            amount
        };
        self.recompute();
    }

    fn line_mut(&mut self, index: usize) -> DomainResult<&mut LineItem> {
        self.items
            .get_mut(index)
            .ok_or_else(|| DomainError::validation(format!("no line at index {index}")))
    }

    /// Total aggregation. Runs synchronously after every mutation: the sum
    /// is order-independent, the stored discount is clamped to the subtotal,
    /// and the final total is guarded against going negative.
    fn recompute(&mut self) {
        let subtotal: Money = self.items.iter().map(LineItem::subtotal).sum();
        self.discount_amount = self.discount_amount.min(subtotal);
        self.totals = Totals {
            subtotal,
            discount: self.discount_amount,
            final_total: subtotal.saturating_sub(self.discount_amount),
        };
    }

    /// Submission gate. Blocks unless a customer is selected, every line is
    /// fully specified, the discount does not exceed the subtotal, and the
    /// final total is positive. Surfaces a single reason; never submits
    /// partially.
    pub fn ready_for_submission(&self) -> Result<(), SubmissionBlocked> {
        if self.customer_id.is_none() {
            return Err(SubmissionBlocked::NoCustomer);
        }
        for (i, line) in self.items.iter().enumerate() {
            if !line.is_complete() {
                return Err(SubmissionBlocked::IncompleteLine { line: i + 1 });
            }
        }
        if self.discount_amount > self.totals.subtotal {
            return Err(SubmissionBlocked::DiscountExceedsSubtotal);
        }
        if !self.totals.final_total.is_positive() {
            return Err(SubmissionBlocked::NothingToCharge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use washboard_core::PackageId;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 2).unwrap()
    }

    fn package(id: i64, price: i64, duration: u32) -> Package {
        Package {
            id: PackageId::new(id),
            name: format!("Paket {id}"),
            description: None,
            unit: ServiceUnit::Kg,
            price: Money::from_units(price),
            estimated_duration: duration,
            is_active: true,
        }
    }

    fn qty(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn fresh_draft_has_one_blank_line_and_zero_totals() {
        let draft = OrderDraft::new(date());
        assert_eq!(draft.items().len(), 1);
        assert!(!draft.items()[0].is_complete());
        assert_eq!(draft.totals(), Totals::default());
        assert_eq!(*draft.payment_status(), PaymentStatus::Pending);
    }

    #[test]
    fn selecting_a_package_copies_price_and_unit() {
        let mut draft = OrderDraft::new(date());
        let p = package(1, 7000, 1);
        draft.select_package(0, &p).unwrap();

        let line = &draft.items()[0];
        assert_eq!(line.package_id(), Some(p.id));
        assert_eq!(line.unit_price(), Money::from_units(7000));
        assert_eq!(line.unit(), Some(&ServiceUnit::Kg));
    }

    #[test]
    fn reselecting_a_package_replaces_price_and_reprices_the_line() {
        let mut draft = OrderDraft::new(date());
        draft.select_package(0, &package(1, 7000, 1)).unwrap();
        draft.set_quantity(0, qty(2)).unwrap();
        assert_eq!(draft.items()[0].subtotal(), Money::from_units(14000));

        draft.select_package(0, &package(2, 15000, 2)).unwrap();
        let line = &draft.items()[0];
        assert_eq!(line.unit_price(), Money::from_units(15000));
        assert_eq!(line.subtotal(), Money::from_units(30000));
        assert_eq!(draft.totals().subtotal, Money::from_units(30000));
    }

    #[test]
    fn two_lines_with_discount_produce_the_expected_totals() {
        let mut draft = OrderDraft::new(date());
        draft.select_package(0, &package(1, 7000, 1)).unwrap();
        draft.set_quantity(0, qty(3)).unwrap();
        draft.add_line();
        draft.select_package(1, &package(2, 15000, 2)).unwrap();
        draft.set_quantity(1, qty(1)).unwrap();
        draft.set_discount(Money::from_units(5000));

        let totals = draft.totals();
        assert_eq!(totals.subtotal, Money::from_units(36000));
        assert_eq!(totals.discount, Money::from_units(5000));
        assert_eq!(totals.final_total, Money::from_units(31000));
    }

    #[test]
    fn oversized_discount_clamps_to_subtotal() {
        let mut draft = OrderDraft::new(date());
        draft.select_package(0, &package(1, 7000, 1)).unwrap();
        draft.set_quantity(0, qty(3)).unwrap();
        draft.add_line();
        draft.select_package(1, &package(2, 15000, 2)).unwrap();
        draft.set_quantity(1, qty(1)).unwrap();

        draft.set_discount(Money::from_units(50000));
        let totals = draft.totals();
        assert_eq!(totals.discount, Money::from_units(36000));
        assert_eq!(totals.final_total, Money::ZERO);
        // The stored amount is clamped too, as the form displays it.
        assert_eq!(draft.discount_amount(), Money::from_units(36000));
    }

    #[test]
    fn discount_reclamps_when_lines_shrink() {
        let mut draft = OrderDraft::new(date());
        draft.select_package(0, &package(1, 10000, 1)).unwrap();
        draft.set_quantity(0, qty(2)).unwrap();
        draft.add_line();
        draft.select_package(1, &package(2, 5000, 1)).unwrap();
        draft.set_quantity(1, qty(1)).unwrap();
        draft.set_discount(Money::from_units(24000));
        assert_eq!(draft.discount_amount(), Money::from_units(24000));

        draft.remove_line(1).unwrap();
        // Subtotal dropped to 20000, discount follows it down.
        assert_eq!(draft.discount_amount(), Money::from_units(20000));
        assert_eq!(draft.totals().final_total, Money::ZERO);
    }

    #[test]
    fn negative_discount_is_coerced_to_zero() {
        let mut draft = OrderDraft::new(date());
        draft.select_package(0, &package(1, 7000, 1)).unwrap();
        draft.set_quantity(0, qty(1)).unwrap();
        draft.set_discount(Money::from_units(-500));
        assert_eq!(draft.discount_amount(), Money::ZERO);
        assert_eq!(draft.totals().final_total, Money::from_units(7000));
    }

    #[test]
    fn tiny_quantity_is_coerced_to_zero() {
        let mut draft = OrderDraft::new(date());
        draft.select_package(0, &package(1, 7000, 1)).unwrap();
        draft.set_quantity(0, Decimal::new(9, 3)).unwrap(); // 0.009
        let line = &draft.items()[0];
        assert_eq!(line.quantity(), Decimal::ZERO);
        assert_eq!(line.subtotal(), Money::ZERO);
        assert_eq!(draft.totals().subtotal, Money::ZERO);

        // 0.01 exactly clears the floor.
        draft.set_quantity(0, min_quantity()).unwrap();
        assert_eq!(draft.items()[0].subtotal(), Money::from_units(70));
    }

    #[test]
    fn last_line_cannot_be_removed() {
        let mut draft = OrderDraft::new(date());
        let err = draft.remove_line(0).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(draft.items().len(), 1);
    }

    #[test]
    fn out_of_range_line_is_rejected() {
        let mut draft = OrderDraft::new(date());
        assert!(draft.set_quantity(5, qty(1)).is_err());
        assert!(draft.select_package(5, &package(1, 7000, 1)).is_err());
    }

    #[test]
    fn gate_reports_reasons_in_form_order() {
        let mut draft = OrderDraft::new(date());
        assert_eq!(
            draft.ready_for_submission().unwrap_err(),
            SubmissionBlocked::NoCustomer
        );

        draft.select_customer(CustomerId::new(3));
        assert_eq!(
            draft.ready_for_submission().unwrap_err(),
            SubmissionBlocked::IncompleteLine { line: 1 }
        );

        draft.select_package(0, &package(1, 7000, 1)).unwrap();
        draft.set_quantity(0, qty(2)).unwrap();
        assert!(draft.ready_for_submission().is_ok());

        draft.add_line();
        assert_eq!(
            draft.ready_for_submission().unwrap_err(),
            SubmissionBlocked::IncompleteLine { line: 2 }
        );
        draft.remove_line(1).unwrap();

        // Fully discounted order charges nothing and stays blocked.
        draft.set_discount(Money::from_units(14000));
        assert_eq!(
            draft.ready_for_submission().unwrap_err(),
            SubmissionBlocked::NothingToCharge
        );
    }

    #[test]
    fn gate_messages_are_human_readable() {
        assert_eq!(
            SubmissionBlocked::IncompleteLine { line: 2 }.to_string(),
            "line 2 needs a package and a quantity of at least 0.01"
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_lines() -> impl Strategy<Value = Vec<(i64, u32)>> {
            // (price in whole units, quantity in hundredths)
            prop::collection::vec((0i64..200_000, 0u32..5_000), 1..8)
        }

        fn build(lines: &[(i64, u32)], discount: i64) -> OrderDraft {
            let mut draft = OrderDraft::new(NaiveDate::from_ymd_opt(2024, 11, 2).unwrap());
            for (i, (price, qty_cents)) in lines.iter().enumerate() {
                if i > 0 {
                    draft.add_line();
                }
                let p = package(i as i64 + 1, *price, 1);
                draft.select_package(i, &p).unwrap();
                draft
                    .set_quantity(i, Decimal::new(i64::from(*qty_cents), 2))
                    .unwrap();
            }
            draft.set_discount(Money::from_units(discount));
            draft
        }

        proptest! {
            /// Subtotal is the exact sum of unit_price × quantity,
            /// regardless of the order lines were entered in.
            #[test]
            fn subtotal_is_edit_order_independent(
                lines in arb_lines(),
                discount in -10_000i64..400_000,
            ) {
                let forward = build(&lines, discount);
                let mut reversed_lines = lines.clone();
                reversed_lines.reverse();
                let reversed = build(&reversed_lines, discount);

                let expected: Money = lines
                    .iter()
                    .map(|(price, qty_cents)| {
                        let q = Decimal::new(i64::from(*qty_cents), 2);
                        let q = if q < min_quantity() { Decimal::ZERO } else { q };
                        Money::from_units(*price).times(q)
                    })
                    .sum();

                prop_assert_eq!(forward.totals().subtotal, expected);
                prop_assert_eq!(reversed.totals().subtotal, expected);
            }

            /// Discount never exceeds the subtotal and is never negative;
            /// the final total is never negative and is exact whenever the
            /// discount fits.
            #[test]
            fn aggregator_invariants_hold(
                lines in arb_lines(),
                discount in -10_000i64..400_000,
            ) {
                let draft = build(&lines, discount);
                let totals = draft.totals();

                prop_assert!(!totals.discount.is_negative());
                prop_assert!(totals.discount <= totals.subtotal);
                prop_assert!(!totals.final_total.is_negative());
                prop_assert_eq!(
                    totals.final_total,
                    totals.subtotal.saturating_sub(totals.discount)
                );
            }
        }
    }
}
