//! `/customer` endpoints.

use serde::Deserialize;

use washboard_core::CustomerId;
use washboard_customers::{Customer, CustomerDraft};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::pagination::{ListQuery, Paginated};

/// `{ "message": ... }` acknowledgement body used by the write endpoints.
#[derive(Debug, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CustomerApi {
    client: ApiClient,
}

impl CustomerApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<Customer>, ApiError> {
        self.client
            .get_json("/customer", &query.to_query_pairs())
            .await
    }

    /// Register a customer; returns the server's acknowledgement message,
    /// if it sent one.
    pub async fn create(&self, draft: &CustomerDraft) -> Result<Option<String>, ApiError> {
        let ack: Acknowledgement = self.client.post_json("/customer", draft).await?;
        Ok(ack.message)
    }

    pub async fn update(
        &self,
        id: CustomerId,
        draft: &CustomerDraft,
    ) -> Result<Option<String>, ApiError> {
        let ack: Acknowledgement = self
            .client
            .put_json(&format!("/customer/{id}"), draft)
            .await?;
        Ok(ack.message)
    }

    pub async fn delete(&self, id: CustomerId) -> Result<Option<String>, ApiError> {
        let ack: Acknowledgement = self.client.delete_json(&format!("/customer/{id}")).await?;
        Ok(ack.message)
    }
}
