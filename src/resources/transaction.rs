//! The transactions resource, scoped to one order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;

/// A money movement against an order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    /// Amount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// `authorization`, `capture`, `sale`, `void` or `refund`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Id of the transaction being captured, voided or refunded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing)]
    pub status: Option<String>,
    #[serde(skip_serializing)]
    pub message: Option<String>,
    #[serde(skip_serializing)]
    pub authorization: Option<String>,
    #[serde(skip_serializing)]
    pub error_code: Option<String>,
    #[serde(skip_serializing)]
    pub source_name: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

#[derive(Deserialize)]
struct TransactionEnvelope {
    transaction: Transaction,
}

#[derive(Deserialize)]
struct TransactionsEnvelope {
    transactions: Vec<Transaction>,
}

#[derive(Serialize)]
struct TransactionRequest<'a> {
    transaction: &'a Transaction,
}

/// Operations on `orders/{order_id}/transactions` endpoints.
pub struct TransactionService<'a> {
    pub(crate) client: &'a Client,
    pub(crate) order_id: u64,
}

impl TransactionService<'_> {
    fn path(&self, suffix: &str) -> String {
        format!("orders/{}/{suffix}", self.order_id)
    }

    pub async fn list<Q>(&self, options: Option<&Q>) -> Result<Vec<Transaction>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: TransactionsEnvelope = self
            .client
            .get(&self.path("transactions.json"), options)
            .await?;
        Ok(envelope.transactions)
    }

    pub async fn count(&self) -> Result<u64, Error> {
        self.client
            .count(&self.path("transactions/count.json"), None::<&()>)
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Transaction, Error> {
        let envelope: TransactionEnvelope = self
            .client
            .get(&self.path(&format!("transactions/{id}.json")), None::<&()>)
            .await?;
        Ok(envelope.transaction)
    }

    pub async fn create(&self, transaction: &Transaction) -> Result<Transaction, Error> {
        let envelope: TransactionEnvelope = self
            .client
            .post(
                &self.path("transactions.json"),
                Some(&TransactionRequest { transaction }),
            )
            .await?;
        Ok(envelope.transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Client;

    #[test]
    fn test_paths_are_scoped_to_the_order() {
        let client = Client::builder("my-shop", "token").build().unwrap();
        let service = client.transactions(450_789_469);

        assert_eq!(
            service.path("transactions.json"),
            "orders/450789469/transactions.json"
        );
        assert_eq!(
            service.path("transactions/389404469.json"),
            "orders/450789469/transactions/389404469.json"
        );
    }

    #[test]
    fn test_transaction_envelope_decodes() {
        let body = r#"{"transaction":{"id":389404469,"order_id":450789469,"kind":"capture","amount":"10.00","status":"success"}}"#;
        let envelope: TransactionEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.transaction.kind.as_deref(), Some("capture"));
        assert_eq!(envelope.transaction.status.as_deref(), Some("success"));
    }
}
