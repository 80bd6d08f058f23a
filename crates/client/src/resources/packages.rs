//! `/package` endpoints.

use washboard_core::PackageId;
use washboard_packages::{Package, PackageDraft};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::pagination::{ListQuery, Paginated};
use crate::resources::customers::Acknowledgement;

#[derive(Debug, Clone)]
pub struct PackageApi {
    client: ApiClient,
}

impl PackageApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<Package>, ApiError> {
        self.client
            .get_json("/package", &query.to_query_pairs())
            .await
    }

    pub async fn create(&self, draft: &PackageDraft) -> Result<Option<String>, ApiError> {
        let ack: Acknowledgement = self.client.post_json("/package", draft).await?;
        Ok(ack.message)
    }

    pub async fn update(
        &self,
        id: PackageId,
        draft: &PackageDraft,
    ) -> Result<Option<String>, ApiError> {
        let ack: Acknowledgement = self
            .client
            .put_json(&format!("/package/{id}"), draft)
            .await?;
        Ok(ack.message)
    }

    pub async fn delete(&self, id: PackageId) -> Result<Option<String>, ApiError> {
        let ack: Acknowledgement = self.client.delete_json(&format!("/package/{id}")).await?;
        Ok(ack.message)
    }
}
