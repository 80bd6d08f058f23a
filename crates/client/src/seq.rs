//! Per-resource request sequencing.
//!
//! In-flight requests are never cancelled, so a slow response can outlive
//! the interaction that issued it. Each logical resource tags its requests
//! with a monotonically increasing sequence number; a response is applied
//! only if its ticket is still the latest issued.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic sequence for one logical resource.
#[derive(Debug, Default)]
pub struct RequestSeq(AtomicU64);

/// Ticket identifying one issued request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SeqTicket(u64);

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket; every later issue supersedes it.
    pub fn issue(&self) -> SeqTicket {
        SeqTicket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the ticket is still the latest issued.
    pub fn is_current(&self, ticket: SeqTicket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}
