//! `washboard-core` — shared foundation for the laundry POS client.
//!
//! Typed identifiers, the domain error taxonomy, and the `Money` amount type.
//! Nothing in here talks to the network.

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, PackageId, TransactionId, UserId};
pub use money::Money;
