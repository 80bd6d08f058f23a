//! Read-only transaction projection.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use washboard_core::{Money, TransactionId};

use crate::status::{LaundryStatus, PaymentStatus};

/// Customer fields snapshotted into a transaction at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Cashier (user) snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashierSnapshot {
    pub name: String,
}

/// Package snapshot inside a transaction line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSnapshot {
    pub name: String,
}

/// One line of a stored transaction. All amounts were fixed server-side at
/// creation; nothing here is recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetail {
    pub package: PackageSnapshot,
    pub qty_weight: Decimal,
    pub price_per_unit: Money,
    pub subtotal: Money,
}

/// A stored transaction as served by the remote API.
///
/// Created server-side from a submitted order draft; the only client-visible
/// mutations are the two status fields, via explicit transition requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub invoice_code: String,
    pub customer: CustomerSnapshot,
    pub cashier: CashierSnapshot,
    pub laundry_status: LaundryStatus,
    pub payment_status: PaymentStatus,
    pub drop_off_date: NaiveDate,
    #[serde(default)]
    pub estimated_pickup_date: Option<NaiveDate>,
    pub total_price: Money,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub details: Vec<TransactionDetail>,
}

impl Transaction {
    /// Leading line item, used by dashboard summaries.
    pub fn leading_detail(&self) -> Option<&TransactionDetail> {
        self.details.first()
    }
}

/// Patch the laundry status of one cached record after the server accepted
/// the transition. Returns whether a record was patched; the caller should
/// schedule a list refresh either way, since nothing else in the cached copy
/// is updated.
pub fn apply_laundry_status(
    transactions: &mut [Transaction],
    id: TransactionId,
    status: LaundryStatus,
) -> bool {
    match transactions.iter_mut().find(|tx| tx.id == id) {
        Some(tx) => {
            tx.laundry_status = status;
            true
        }
        None => false,
    }
}

/// Payment-status counterpart of [`apply_laundry_status`].
pub fn apply_payment_status(
    transactions: &mut [Transaction],
    id: TransactionId,
    status: PaymentStatus,
) -> bool {
    match transactions.iter_mut().find(|tx| tx.id == id) {
        Some(tx) => {
            tx.payment_status = status;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 21,
            "invoice_code": "INV-2024-0021",
            "customer": { "name": "Budi Santoso", "phone": "0812-1111-2222" },
            "cashier": { "name": "Rina" },
            "laundry_status": "processing",
            "payment_status": "pending",
            "drop_off_date": "2024-11-02",
            "estimated_pickup_date": "2024-11-04",
            "total_price": 31000,
            "createdAt": "2024-11-02T08:15:00.000Z",
            "details": [
                {
                    "package": { "name": "Cuci Kering Ekspres" },
                    "qty_weight": 3,
                    "price_per_unit": 7000,
                    "subtotal": 21000
                },
                {
                    "package": { "name": "Bed Cover" },
                    "qty_weight": 1,
                    "price_per_unit": 15000,
                    "subtotal": 15000
                }
            ]
        }"#
    }

    fn sample() -> Transaction {
        serde_json::from_str(sample_json()).unwrap()
    }

    #[test]
    fn deserializes_server_record() {
        let tx = sample();
        assert_eq!(tx.id, TransactionId::new(21));
        assert_eq!(tx.invoice_code, "INV-2024-0021");
        assert_eq!(tx.laundry_status, LaundryStatus::Processing);
        assert_eq!(tx.payment_status, PaymentStatus::Pending);
        assert_eq!(tx.total_price, Money::from_units(31000));
        assert_eq!(tx.details.len(), 2);
        assert_eq!(
            tx.leading_detail().unwrap().package.name,
            "Cuci Kering Ekspres"
        );
    }

    #[test]
    fn list_payloads_omit_details() {
        // The list endpoint serves rows without line items; `details`
        // defaults to empty rather than failing.
        let json = r#"{
            "id": 3,
            "invoice_code": "INV-2024-0003",
            "customer": { "name": "Siti" },
            "cashier": { "name": "Rina" },
            "laundry_status": "done",
            "payment_status": "paid",
            "drop_off_date": "2024-10-30",
            "total_price": 12000
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert!(tx.details.is_empty());
        assert!(tx.leading_detail().is_none());
        assert!(tx.estimated_pickup_date.is_none());
    }

    #[test]
    fn optimistic_laundry_patch_touches_only_the_target() {
        let mut list = vec![sample(), {
            let mut other = sample();
            other.id = TransactionId::new(22);
            other
        }];

        let patched = apply_laundry_status(&mut list, TransactionId::new(22), LaundryStatus::Done);
        assert!(patched);
        assert_eq!(list[0].laundry_status, LaundryStatus::Processing);
        assert_eq!(list[1].laundry_status, LaundryStatus::Done);
        // The rest of the cached record is untouched.
        assert_eq!(list[1].payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn optimistic_patch_on_missing_record_reports_false() {
        let mut list = vec![sample()];
        let patched = apply_payment_status(&mut list, TransactionId::new(99), PaymentStatus::Paid);
        assert!(!patched);
        assert_eq!(list[0].payment_status, PaymentStatus::Pending);
    }
}
