//! One typed module per remote resource.

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod packages;
pub mod transactions;

use crate::http::ApiClient;

/// All resource clients over one shared base client.
#[derive(Debug, Clone)]
pub struct RemoteApi {
    pub customers: customers::CustomerApi,
    pub packages: packages::PackageApi,
    pub transactions: transactions::TransactionApi,
    pub dashboard: dashboard::DashboardApi,
}

impl RemoteApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            customers: customers::CustomerApi::new(client.clone()),
            packages: packages::PackageApi::new(client.clone()),
            transactions: transactions::TransactionApi::new(client.clone()),
            dashboard: dashboard::DashboardApi::new(client),
        }
    }
}
