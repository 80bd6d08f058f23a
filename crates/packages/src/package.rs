use serde::{Deserialize, Serialize};

use washboard_core::{DomainError, DomainResult, Money, PackageId};

/// Billing unit of a service package.
///
/// The server vocabulary is `kg` / `pcs` / `item`; anything else passes
/// through untouched so a new server-side unit degrades to its raw label
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceUnit {
    Kg,
    Pcs,
    Item,
    Other(String),
}

impl ServiceUnit {
    pub fn as_str(&self) -> &str {
        match self {
            ServiceUnit::Kg => "kg",
            ServiceUnit::Pcs => "pcs",
            ServiceUnit::Item => "item",
            ServiceUnit::Other(raw) => raw,
        }
    }

    /// Uppercased label for form captions (`Qty (KG)`).
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Whether quantities in this unit are meaningfully fractional.
    pub fn is_weight(&self) -> bool {
        matches!(self, ServiceUnit::Kg)
    }
}

impl From<String> for ServiceUnit {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "kg" => ServiceUnit::Kg,
            "pcs" => ServiceUnit::Pcs,
            "item" => ServiceUnit::Item,
            _ => ServiceUnit::Other(raw),
        }
    }
}

impl From<ServiceUnit> for String {
    fn from(unit: ServiceUnit) -> Self {
        unit.as_str().to_owned()
    }
}

impl core::fmt::Display for ServiceUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service package as served by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub unit: ServiceUnit,
    pub price: Money,
    /// Estimated processing duration in days.
    pub estimated_duration: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Package {
    /// Package as shown in pickers: `Name (Rp 7.000/kg)`.
    pub fn display_label(&self) -> String {
        format!("{} ({}/{})", self.name, self.price, self.unit)
    }
}

/// Create/update form for a service package.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub unit: ServiceUnit,
    pub price: Money,
    pub estimated_duration: u32,
    pub is_active: bool,
}

impl PackageDraft {
    pub fn new(name: impl Into<String>, unit: ServiceUnit, price: Money) -> Self {
        Self {
            name: name.into(),
            description: None,
            unit,
            price,
            estimated_duration: 1,
            is_active: true,
        }
    }

    /// First validation failure, if any: name and unit must be present,
    /// price strictly positive, duration at least one day.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("package name cannot be empty"));
        }
        if self.unit.as_str().trim().is_empty() {
            return Err(DomainError::validation("package unit cannot be empty"));
        }
        if !self.price.is_positive() {
            return Err(DomainError::validation("package price must be positive"));
        }
        if self.estimated_duration < 1 {
            return Err(DomainError::validation(
                "estimated duration must be at least one day",
            ));
        }
        Ok(())
    }
}
