//! Laundry and payment status workflow.
//!
//! Two independent enumerations, each transitioned only by an explicit
//! request to the server. Unrecognized wire values pass through as their own
//! label with a neutral color so a server-side vocabulary change degrades
//! gracefully instead of failing deserialization. Transition menus, on the
//! other hand, only ever offer recognized values.

use serde::{Deserialize, Serialize};

/// Chip/badge color vocabulary shared with the UI shell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Blue,
    Orange,
    Green,
    Red,
    Gray,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Blue => "blue",
            StatusColor::Orange => "orange",
            StatusColor::Green => "green",
            StatusColor::Red => "red",
            StatusColor::Gray => "gray",
        }
    }
}

/// Display mapping of one status value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub color: StatusColor,
    pub label: String,
}

impl StatusBadge {
    fn known(color: StatusColor, label: &str) -> Self {
        Self {
            color,
            label: label.to_owned(),
        }
    }

    /// Neutral badge for values outside the recognized vocabulary.
    fn passthrough(raw: &str) -> Self {
        Self {
            color: StatusColor::Gray,
            label: raw.to_owned(),
        }
    }
}

/// Physical processing stage: new → processing → done → taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LaundryStatus {
    New,
    Processing,
    Done,
    Taken,
    /// Server value outside the recognized vocabulary, kept verbatim.
    Other(String),
}

impl LaundryStatus {
    /// The recognized workflow, in order.
    pub fn recognized() -> [LaundryStatus; 4] {
        [
            LaundryStatus::New,
            LaundryStatus::Processing,
            LaundryStatus::Done,
            LaundryStatus::Taken,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            LaundryStatus::New => "new",
            LaundryStatus::Processing => "processing",
            LaundryStatus::Done => "done",
            LaundryStatus::Taken => "taken",
            LaundryStatus::Other(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, LaundryStatus::Other(_))
    }

    pub fn badge(&self) -> StatusBadge {
        match self {
            LaundryStatus::New => StatusBadge::known(StatusColor::Blue, "Baru Masuk"),
            LaundryStatus::Processing => StatusBadge::known(StatusColor::Orange, "Diproses"),
            LaundryStatus::Done => StatusBadge::known(StatusColor::Green, "Selesai Cuci"),
            LaundryStatus::Taken => StatusBadge::known(StatusColor::Red, "Sudah Diambil"),
            LaundryStatus::Other(raw) => StatusBadge::passthrough(raw),
        }
    }

    /// Progress-bar weight. Presentation only, not a business percentage.
    pub fn progress(&self) -> u8 {
        match self {
            LaundryStatus::New => 25,
            LaundryStatus::Processing => 60,
            LaundryStatus::Done => 95,
            LaundryStatus::Taken => 100,
            LaundryStatus::Other(_) => 0,
        }
    }

    /// Transition targets to offer: the recognized set minus the current
    /// value. An unrecognized current value gets the full recognized set,
    /// and is itself never offered as a target.
    pub fn transition_targets(&self) -> Vec<LaundryStatus> {
        Self::recognized()
            .into_iter()
            .filter(|s| s != self)
            .collect()
    }
}

impl From<String> for LaundryStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "new" => LaundryStatus::New,
            "processing" => LaundryStatus::Processing,
            "done" => LaundryStatus::Done,
            "taken" => LaundryStatus::Taken,
            _ => LaundryStatus::Other(raw),
        }
    }
}

impl From<LaundryStatus> for String {
    fn from(status: LaundryStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl core::fmt::Display for LaundryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment stage: pending → paid. Independent of the laundry workflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Pending,
    Paid,
    /// Server value outside the recognized vocabulary, kept verbatim.
    Other(String),
}

impl PaymentStatus {
    pub fn recognized() -> [PaymentStatus; 2] {
        [PaymentStatus::Pending, PaymentStatus::Paid]
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Other(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, PaymentStatus::Other(_))
    }

    pub fn badge(&self) -> StatusBadge {
        match self {
            PaymentStatus::Pending => StatusBadge::known(StatusColor::Red, "Belum Bayar"),
            PaymentStatus::Paid => StatusBadge::known(StatusColor::Green, "Lunas"),
            PaymentStatus::Other(raw) => StatusBadge::passthrough(raw),
        }
    }

    pub fn transition_targets(&self) -> Vec<PaymentStatus> {
        Self::recognized()
            .into_iter()
            .filter(|s| s != self)
            .collect()
    }
}

impl From<String> for PaymentStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" => PaymentStatus::Pending,
            "paid" => PaymentStatus::Paid,
            _ => PaymentStatus::Other(raw),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

impl core::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_maps_to_baru_masuk_with_weight_25() {
        let badge = LaundryStatus::New.badge();
        assert_eq!(badge.label, "Baru Masuk");
        assert_eq!(badge.color, StatusColor::Blue);
        assert_eq!(LaundryStatus::New.progress(), 25);
    }

    #[test]
    fn recognized_laundry_weights_are_monotone() {
        let weights: Vec<u8> = LaundryStatus::recognized()
            .iter()
            .map(LaundryStatus::progress)
            .collect();
        assert_eq!(weights, vec![25, 60, 95, 100]);
    }

    #[test]
    fn unknown_status_passes_through_with_neutral_color() {
        let status = LaundryStatus::from("archived".to_owned());
        assert!(!status.is_recognized());
        let badge = status.badge();
        assert_eq!(badge.label, "archived");
        assert_eq!(badge.color, StatusColor::Gray);
        assert_eq!(status.progress(), 0);
    }

    #[test]
    fn transition_targets_exclude_current_value() {
        let targets = LaundryStatus::Processing.transition_targets();
        assert_eq!(
            targets,
            vec![LaundryStatus::New, LaundryStatus::Done, LaundryStatus::Taken]
        );
    }

    #[test]
    fn unknown_current_value_is_never_a_target() {
        let targets = LaundryStatus::from("archived".to_owned()).transition_targets();
        assert_eq!(targets, LaundryStatus::recognized().to_vec());
        assert!(targets.iter().all(LaundryStatus::is_recognized));
    }

    #[test]
    fn payment_badges() {
        assert_eq!(PaymentStatus::Pending.badge().label, "Belum Bayar");
        assert_eq!(PaymentStatus::Pending.badge().color, StatusColor::Red);
        assert_eq!(PaymentStatus::Paid.badge().label, "Lunas");
        assert_eq!(PaymentStatus::Paid.badge().color, StatusColor::Green);
    }

    #[test]
    fn payment_transition_is_the_other_value() {
        assert_eq!(
            PaymentStatus::Pending.transition_targets(),
            vec![PaymentStatus::Paid]
        );
        assert_eq!(
            PaymentStatus::Paid.transition_targets(),
            vec![PaymentStatus::Pending]
        );
    }

    #[test]
    fn wire_round_trip() {
        let status: LaundryStatus = serde_json::from_str(r#""processing""#).unwrap();
        assert_eq!(status, LaundryStatus::Processing);
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""processing""#);

        let odd: LaundryStatus = serde_json::from_str(r#""archived""#).unwrap();
        assert_eq!(serde_json::to_string(&odd).unwrap(), r#""archived""#);
    }
}
