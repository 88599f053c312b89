//! Typed client for consumption line-items.
//!
//! | Method | Path | Operation |
//! |--------|------------------------|-------------------------------|
//! | GET    | `/searchItens/{movId}` | Line items of a movement      |
//! | POST   | `/newItem`             | Launch (add) a line item      |
//! | POST   | `/removeItem`          | Withdraw (remove) a line item |
//!
//! There is no update-in-place: editing a confirmed line is modeled as a
//! withdrawal followed by a fresh launch. Line totals are computed by the
//! service from quantity and unit price and are never submitted.

use serde::{Deserialize, Serialize};

use suiteops_core::MovementId;

use crate::error::ApiError;
use crate::transport;

/// One consumption line of a movement, from `GET /searchItens/{movId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionItem {
    /// Owning movement (`movSuiId`).
    #[serde(rename = "movSuiId")]
    pub movement_id: MovementId,
    /// Product code the line was launched with (`movSuiProId`).
    #[serde(rename = "movSuiProId")]
    pub product_code: String,
    /// Quantity (`movSuiProQtd`); fractional quantities are valid.
    #[serde(rename = "movSuiProQtd", default)]
    pub quantity: f64,
    /// Unit price at launch time (`movSuiProVUnit`).
    #[serde(rename = "movSuiProVUnit", default)]
    pub unit_price: f64,
    /// Line total as recorded by the service (`movSuiProVTotal`).
    #[serde(rename = "movSuiProVTotal", default)]
    pub line_total: f64,
    /// Sales unit (`prdUnidade`).
    #[serde(rename = "prdUnidade", default)]
    pub unit: Option<String>,
    /// Product description (`prdDescricao`).
    #[serde(rename = "prdDescricao", default)]
    pub description: Option<String>,
    /// Product reference code (`prdReferencia`).
    #[serde(rename = "prdReferencia", default)]
    pub reference: Option<String>,
}

/// Payload for `POST /newItem`.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchItemRequest {
    /// Movement receiving the line (`movId`).
    #[serde(rename = "movId")]
    pub movement_id: MovementId,
    /// Product code (`movConProId`).
    #[serde(rename = "movConProId")]
    pub product_code: String,
    /// Quantity (`movConProQtd`).
    #[serde(rename = "movConProQtd")]
    pub quantity: f64,
    /// Unit price resolved from the product catalog
    /// (`movConProVlrUnitario`).
    #[serde(rename = "movConProVlrUnitario")]
    pub unit_price: f64,
}

/// Payload for `POST /removeItem`.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawItemRequest {
    /// Movement losing the line (`movId`).
    #[serde(rename = "movId")]
    pub movement_id: MovementId,
    /// Product code (`movConProId`).
    #[serde(rename = "movConProId")]
    pub product_code: String,
    /// Quantity to withdraw (`movConProQtd`).
    #[serde(rename = "movConProQtd")]
    pub quantity: f64,
}

// -- Client -------------------------------------------------------------------

/// Client for consumption line-items.
#[derive(Debug, Clone)]
pub struct ConsumptionClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl ConsumptionClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// List the consumption lines of a movement.
    ///
    /// Calls `GET {base_url}/searchItens/{movId}`.
    pub async fn items(&self, movement: MovementId) -> Result<Vec<ConsumptionItem>, ApiError> {
        let endpoint = format!("GET /searchItens/{movement}");
        let url = format!("{}searchItens/{movement}", self.base_url);
        transport::request_json(self.http.get(&url), &endpoint).await
    }

    /// Launch a consumption line.
    ///
    /// Calls `POST {base_url}/newItem`.
    pub async fn launch(&self, req: &LaunchItemRequest) -> Result<(), ApiError> {
        let url = format!("{}newItem", self.base_url);
        transport::request_unit(self.http.post(&url).json(req), "POST /newItem").await
    }

    /// Withdraw a consumption line.
    ///
    /// Calls `POST {base_url}/removeItem`.
    pub async fn withdraw(&self, req: &WithdrawItemRequest) -> Result<(), ApiError> {
        let url = format!("{}removeItem", self.base_url);
        transport::request_unit(self.http.post(&url).json(req), "POST /removeItem").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_request_uses_wire_field_names() {
        let req = LaunchItemRequest {
            movement_id: MovementId::new(41),
            product_code: "123".into(),
            quantity: 2.5,
            unit_price: 8.0,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["movId"], 41);
        assert_eq!(value["movConProId"], "123");
        assert_eq!(value["movConProQtd"], 2.5);
        assert_eq!(value["movConProVlrUnitario"], 8.0);
    }

    #[test]
    fn withdraw_request_never_carries_a_price() {
        let req = WithdrawItemRequest {
            movement_id: MovementId::new(41),
            product_code: "123".into(),
            quantity: 1.0,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("movConProVlrUnitario").is_none());
    }
}
