use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use washboard_core::{CustomerId, DomainError, DomainResult};

/// Customer record as served by the remote API. Read-only on this side;
/// edits go through [`CustomerDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    /// Registration timestamp; the server names this field in camelCase.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Customer as shown in pickers and tables: `Name (phone)`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.phone)
    }
}

/// Create/update form for a customer. Name and phone are mandatory;
/// address is free-form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerDraft {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CustomerDraft {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// First validation failure, if any. The server revalidates; this only
    /// keeps obviously incomplete forms from leaving the client.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if self.phone.trim().is_empty() {
            return Err(DomainError::validation("customer phone cannot be empty"));
        }
        Ok(())
    }
}
