//! The usage charges resource, scoped to one recurring application charge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;

/// A metered charge billed against a recurring application charge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageCharge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Amount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing)]
    pub currency: Option<String>,
    #[serde(skip_serializing)]
    pub balance_used: Option<f64>,
    #[serde(skip_serializing)]
    pub balance_remaining: Option<f64>,
    #[serde(skip_serializing)]
    pub risk_level: Option<f64>,
    #[serde(skip_serializing)]
    pub billing_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct UsageChargeEnvelope {
    usage_charge: UsageCharge,
}

#[derive(Deserialize)]
struct UsageChargesEnvelope {
    usage_charges: Vec<UsageCharge>,
}

#[derive(Serialize)]
struct UsageChargeRequest<'a> {
    usage_charge: &'a UsageCharge,
}

/// Operations on `recurring_application_charges/{id}/usage_charges`
/// endpoints.
pub struct UsageChargeService<'a> {
    pub(crate) client: &'a Client,
    pub(crate) recurring_application_charge_id: u64,
}

impl UsageChargeService<'_> {
    fn path(&self, suffix: &str) -> String {
        format!(
            "recurring_application_charges/{}/{suffix}",
            self.recurring_application_charge_id
        )
    }

    pub async fn list<Q>(&self, options: Option<&Q>) -> Result<Vec<UsageCharge>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: UsageChargesEnvelope = self
            .client
            .get(&self.path("usage_charges.json"), options)
            .await?;
        Ok(envelope.usage_charges)
    }

    pub async fn get(&self, id: u64) -> Result<UsageCharge, Error> {
        let envelope: UsageChargeEnvelope = self
            .client
            .get(&self.path(&format!("usage_charges/{id}.json")), None::<&()>)
            .await?;
        Ok(envelope.usage_charge)
    }

    pub async fn create(&self, usage_charge: &UsageCharge) -> Result<UsageCharge, Error> {
        let envelope: UsageChargeEnvelope = self
            .client
            .post(
                &self.path("usage_charges.json"),
                Some(&UsageChargeRequest { usage_charge }),
            )
            .await?;
        Ok(envelope.usage_charge)
    }
}
