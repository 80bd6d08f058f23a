//! `/dashboard` endpoints.

use washboard_stats::{DashboardCharts, DashboardStats};

use crate::error::ApiError;
use crate::http::{ApiClient, Enveloped};

#[derive(Debug, Clone)]
pub struct DashboardApi {
    client: ApiClient,
}

impl DashboardApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self) -> Result<DashboardStats, ApiError> {
        let env: Enveloped<DashboardStats> =
            self.client.get_json("/dashboard/stats", &[]).await?;
        Ok(env.data)
    }

    pub async fn charts(&self) -> Result<DashboardCharts, ApiError> {
        let env: Enveloped<DashboardCharts> =
            self.client.get_json("/dashboard/charts", &[]).await?;
        Ok(env.data)
    }
}
