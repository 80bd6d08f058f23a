//! `washboard-transactions` — transaction read models and the status
//! workflow display model.
//!
//! Transactions are created server-side from a submitted order draft and
//! only ever mutated through explicit status-transition requests; this crate
//! holds the client's read-only projection of them.

pub mod model;
pub mod status;

pub use model::{
    apply_laundry_status, apply_payment_status, CashierSnapshot, CustomerSnapshot,
    PackageSnapshot, Transaction, TransactionDetail,
};
pub use status::{LaundryStatus, PaymentStatus, StatusBadge, StatusColor};
