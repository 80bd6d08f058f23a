//! `/transaction` endpoints.

use serde::{Deserialize, Serialize};

use washboard_core::{TransactionId, UserId};
use washboard_customers::Customer;
use washboard_orders::CreateTransaction;
use washboard_packages::Package;
use washboard_transactions::{LaundryStatus, PaymentStatus, Transaction};

use crate::error::ApiError;
use crate::http::{ApiClient, Enveloped};
use crate::pagination::Paginated;

/// Master data for composing a new order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateData {
    pub customers: Vec<Customer>,
    pub packages: Vec<Package>,
    /// Cashier id of the signed-in user, fed into the create payload.
    #[serde(rename = "currentUserId", default)]
    pub current_user_id: Option<UserId>,
}

/// Acknowledgement of a created transaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InvoiceReceipt {
    #[serde(rename = "invoiceCode")]
    pub invoice_code: String,
}

/// Query for the transaction list: pagination plus an optional laundry
/// status filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status_in: Vec<LaundryStatus>,
}

impl TransactionQuery {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn latest(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn with_status_in(mut self, statuses: impl IntoIterator<Item = LaundryStatus>) -> Self {
        self.status_in = statuses.into_iter().collect();
        self
    }

    /// Query pairs; the status filter repeats its key per value.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_owned(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        for status in &self.status_in {
            pairs.push(("status_in".to_owned(), status.as_str().to_owned()));
        }
        pairs
    }
}

#[derive(Debug, Serialize)]
struct LaundryStatusBody<'a> {
    status: &'a LaundryStatus,
}

#[derive(Debug, Serialize)]
struct PaymentStatusBody<'a> {
    payment_status: &'a PaymentStatus,
}

#[derive(Debug, Clone)]
pub struct TransactionApi {
    client: ApiClient,
}

impl TransactionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Master data for the POS form: customers, packages, and the cashier
    /// id, in one round trip.
    pub async fn create_data(&self) -> Result<CreateData, ApiError> {
        let env: Enveloped<CreateData> =
            self.client.get_json("/transaction/create-data", &[]).await?;
        Ok(env.data)
    }

    /// Submit an order draft payload; the server assigns the invoice code.
    pub async fn create(&self, payload: &CreateTransaction) -> Result<InvoiceReceipt, ApiError> {
        self.client.post_json("/transaction", payload).await
    }

    pub async fn list(&self, query: &TransactionQuery) -> Result<Paginated<Transaction>, ApiError> {
        self.client
            .get_json("/transaction", &query.to_query_pairs())
            .await
    }

    pub async fn get(&self, id: TransactionId) -> Result<Transaction, ApiError> {
        let env: Enveloped<Transaction> = self
            .client
            .get_json(&format!("/transaction/{id}"), &[])
            .await?;
        Ok(env.data)
    }

    /// Request a laundry-status transition; returns the updated record.
    pub async fn set_laundry_status(
        &self,
        id: TransactionId,
        status: &LaundryStatus,
    ) -> Result<Transaction, ApiError> {
        let env: Enveloped<Transaction> = self
            .client
            .put_json(
                &format!("/transaction/status/{id}"),
                &LaundryStatusBody { status },
            )
            .await?;
        Ok(env.data)
    }

    /// Request a payment-status transition; returns the updated record.
    pub async fn set_payment_status(
        &self,
        id: TransactionId,
        status: &PaymentStatus,
    ) -> Result<Transaction, ApiError> {
        let env: Enveloped<Transaction> = self
            .client
            .put_json(
                &format!("/transaction/payment/{id}"),
                &PaymentStatusBody {
                    payment_status: status,
                },
            )
            .await?;
        Ok(env.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_data_unwraps_the_camel_case_cashier_id() {
        let env: Enveloped<CreateData> = serde_json::from_str(
            r#"{
                "data": {
                    "customers": [{"id": 1, "name": "Budi", "phone": "0812"}],
                    "packages": [{
                        "id": 1, "name": "Cuci Kering", "unit": "kg",
                        "price": 7000, "estimated_duration": 1, "is_active": true
                    }],
                    "currentUserId": 7
                }
            }"#,
        )
        .unwrap();
        let data = env.data;
        assert_eq!(data.customers.len(), 1);
        assert_eq!(data.packages.len(), 1);
        assert_eq!(data.current_user_id, Some(UserId::new(7)));
    }

    #[test]
    fn invoice_receipt_reads_the_camel_case_key() {
        let receipt: InvoiceReceipt =
            serde_json::from_str(r#"{"invoiceCode": "INV-2024-0021"}"#).unwrap();
        assert_eq!(receipt.invoice_code, "INV-2024-0021");
    }

    #[test]
    fn status_filter_repeats_its_key() {
        let query = TransactionQuery::latest(5)
            .with_status_in([LaundryStatus::New, LaundryStatus::Processing]);
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("limit".to_owned(), "5".to_owned()),
                ("status_in".to_owned(), "new".to_owned()),
                ("status_in".to_owned(), "processing".to_owned()),
            ]
        );
    }

    #[test]
    fn status_bodies_use_the_wire_field_names() {
        let body = serde_json::to_value(LaundryStatusBody {
            status: &LaundryStatus::Done,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"status": "done"}));

        let body = serde_json::to_value(PaymentStatusBody {
            payment_status: &PaymentStatus::Paid,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"payment_status": "paid"}));
    }
}
