//! Typed client for movements — the occupancy episodes of suites.
//!
//! | Method | Path | Operation |
//! |--------|--------------------------------------|-----------------------------------|
//! | GET    | `/searchMovim/{suiId}`               | The suite's open movement, if any |
//! | GET    | `/dadosMovim/{movId}`                | Full movement record              |
//! | GET    | `/vlrPermanencia/{movSuiId}/{duration}` | Permanence fee for a duration  |
//! | POST   | `/entrada`                           | Open a movement (check-in)        |
//! | POST   | `/fechar`                            | Close a movement                  |
//!
//! A movement with no exit timestamp is open; the service guarantees at
//! most one open movement per suite. The client never assumes more than
//! that — duplicate submissions are arbitrated server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use suiteops_core::{MovementId, Permanence, SuiteId, UserId};

use crate::error::ApiError;
use crate::transport;

/// The abbreviated movement record `GET /searchMovim/{suiId}` returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementSummary {
    /// Movement identifier (`movId`).
    #[serde(rename = "movId")]
    pub id: MovementId,
    /// Occupied suite (`movSuiId`).
    #[serde(rename = "movSuiId")]
    pub suite_id: SuiteId,
    /// Entry timestamp (`movSuiEntrada`).
    #[serde(rename = "movSuiEntrada")]
    pub entered_at: DateTime<Utc>,
    /// Movement status string (`movSuiStatus`).
    #[serde(rename = "movSuiStatus", default)]
    pub status: Option<String>,
}

/// Full movement record from `GET /dadosMovim/{movId}`.
///
/// Monetary fields are optional on the wire; billing coerces absent
/// operands to zero. Only identifiers and the entry timestamp are
/// required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    /// Movement identifier (`movId`).
    #[serde(rename = "movId")]
    pub id: MovementId,
    /// Occupied suite (`movSuiId`).
    #[serde(rename = "movSuiId")]
    pub suite_id: SuiteId,
    /// Business date the movement was opened on (`movSuiData`).
    #[serde(rename = "movSuiData", default)]
    pub opened_on: Option<String>,
    /// Entry timestamp (`movSuiEntrada`).
    #[serde(rename = "movSuiEntrada")]
    pub entered_at: DateTime<Utc>,
    /// Exit timestamp (`movSuiSaida`); `None` while the movement is open.
    #[serde(rename = "movSuiSaida", default)]
    pub exited_at: Option<DateTime<Utc>>,
    /// Permanence recorded at close (`movSuiTmpPer`).
    #[serde(rename = "movSuiTmpPer", default)]
    pub recorded_permanence: Option<String>,
    /// Base suite amount (`movSuiVlr`).
    #[serde(rename = "movSuiVlr", default)]
    pub suite_amount: Option<f64>,
    /// Permanence amount recorded at close (`movSuiVlrPer`).
    #[serde(rename = "movSuiVlrPer", default)]
    pub permanence_amount: Option<f64>,
    /// Accumulated consumption total (`movSuiTotConsumo`).
    #[serde(rename = "movSuiTotConsumo", default)]
    pub consumption_total: Option<f64>,
    /// Surcharge (`movSuiVlrAcrescimo`).
    #[serde(rename = "movSuiVlrAcrescimo", default)]
    pub surcharge: Option<f64>,
    /// Discount (`movSuiVlrDesconto`).
    #[serde(rename = "movSuiVlrDesconto", default)]
    pub discount: Option<f64>,
    /// Total recorded by the service at close (`movSuiTotPagar`).
    #[serde(rename = "movSuiTotPagar", default)]
    pub recorded_total: Option<f64>,
    /// Staff user who opened the movement (`movSuiUsrEnt`).
    #[serde(rename = "movSuiUsrEnt", default)]
    pub entered_by: Option<UserId>,
    /// Staff user who closed it (`movSuiUsrSai`).
    #[serde(rename = "movSuiUsrSai", default)]
    pub exited_by: Option<UserId>,
    /// Extra-guest count (`movSuiUsrQtdExtra`).
    #[serde(rename = "movSuiUsrQtdExtra", default)]
    pub extra_guests: Option<u32>,
    /// Extra-guest fee (`movSuiUsrVlrExtra`).
    #[serde(rename = "movSuiUsrVlrExtra", default)]
    pub extra_guest_fee: Option<f64>,
    /// Permanence-rate identifier (`movSuiPrmId`).
    #[serde(rename = "movSuiPrmId", default)]
    pub rate_id: Option<i64>,
    /// Permanence-rate amount (`movSuiPrmValor`).
    #[serde(rename = "movSuiPrmValor", default)]
    pub rate_amount: Option<f64>,
    /// Deposit already paid (`movSuiVlrDeposito`).
    #[serde(rename = "movSuiVlrDeposito", default)]
    pub deposit: Option<f64>,
    /// Movement status string (`movSuiStatus`).
    #[serde(rename = "movSuiStatus", default)]
    pub status: Option<String>,
}

impl Movement {
    /// A movement with no exit timestamp is open.
    pub fn is_open(&self) -> bool {
        self.exited_at.is_none()
    }

    /// Elapsed permanence at `now`, frozen at the exit timestamp once
    /// the movement is closed.
    pub fn permanence_at(&self, now: DateTime<Utc>) -> Permanence {
        let end = self.exited_at.unwrap_or(now);
        Permanence::between(self.entered_at, end)
    }
}

/// Payload for `POST /entrada`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    /// Suite being checked into.
    pub sui_id: SuiteId,
    /// Staff user performing the check-in.
    pub usr_id: UserId,
    /// Number of extra guests; non-negative by construction.
    pub qtd_usr_extra: u32,
}

/// Payload for `POST /fechar`.
#[derive(Debug, Clone, Serialize)]
pub struct CloseRequest {
    /// The movement to close (`movim`).
    pub movim: MovementId,
}

/// Response of `GET /vlrPermanencia/{movSuiId}/{duration}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermanenceQuote {
    /// Quoted fee; absent coerces to zero.
    #[serde(default)]
    pub valor_total: f64,
}

// -- Client -------------------------------------------------------------------

/// Client for the movements resource family.
#[derive(Debug, Clone)]
pub struct MovementClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl MovementClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Look up the suite's open movement.
    ///
    /// Calls `GET {base_url}/searchMovim/{suiId}`. A suite with no open
    /// movement is `Ok(None)`.
    pub async fn open_movement(
        &self,
        suite: SuiteId,
    ) -> Result<Option<MovementSummary>, ApiError> {
        let endpoint = format!("GET /searchMovim/{suite}");
        let url = format!("{}searchMovim/{suite}", self.base_url);
        transport::request_json_opt(self.http.get(&url), &endpoint).await
    }

    /// Fetch a full movement record.
    ///
    /// Calls `GET {base_url}/dadosMovim/{movId}`.
    pub async fn movement(&self, movement: MovementId) -> Result<Option<Movement>, ApiError> {
        let endpoint = format!("GET /dadosMovim/{movement}");
        let url = format!("{}dadosMovim/{movement}", self.base_url);
        transport::request_json_opt(self.http.get(&url), &endpoint).await
    }

    /// Quote the permanence fee for an elapsed duration.
    ///
    /// Calls `GET {base_url}/vlrPermanencia/{movSuiId}/{duration}` with
    /// the duration formatted `HH:MM:00`.
    pub async fn permanence_quote(
        &self,
        suite: SuiteId,
        permanence: &Permanence,
    ) -> Result<f64, ApiError> {
        let endpoint = format!("GET /vlrPermanencia/{suite}/{permanence}");
        let url = format!("{}vlrPermanencia/{suite}/{permanence}", self.base_url);
        let quote: PermanenceQuote =
            transport::request_json(self.http.get(&url), &endpoint).await?;
        Ok(quote.valor_total)
    }

    /// Open a movement (check-in).
    ///
    /// Calls `POST {base_url}/entrada` and returns the created movement.
    pub async fn check_in(&self, req: &CheckInRequest) -> Result<Movement, ApiError> {
        let url = format!("{}entrada", self.base_url);
        transport::request_json(self.http.post(&url).json(req), "POST /entrada").await
    }

    /// Close a movement.
    ///
    /// Calls `POST {base_url}/fechar` and returns the finalized record.
    pub async fn close(&self, movement: MovementId) -> Result<Movement, ApiError> {
        let url = format!("{}fechar", self.base_url);
        let req = CloseRequest { movim: movement };
        transport::request_json(self.http.post(&url).json(&req), "POST /fechar").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_in_request_uses_wire_field_names() {
        let req = CheckInRequest {
            sui_id: SuiteId::new(3),
            usr_id: UserId::new(7),
            qtd_usr_extra: 2,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["suiId"], 3);
        assert_eq!(value["usrId"], 7);
        assert_eq!(value["qtdUsrExtra"], 2);
    }

    #[test]
    fn close_request_wraps_the_movement_id() {
        let value = serde_json::to_value(CloseRequest {
            movim: MovementId::new(41),
        })
        .unwrap();
        assert_eq!(value["movim"], 41);
    }

    #[test]
    fn permanence_freezes_at_exit() {
        let movement: Movement = serde_json::from_value(serde_json::json!({
            "movId": 1,
            "movSuiId": 2,
            "movSuiEntrada": "2024-01-01T10:00:00Z",
            "movSuiSaida": "2024-01-01T11:30:00Z"
        }))
        .unwrap();
        assert!(!movement.is_open());

        let much_later = "2024-01-02T00:00:00Z".parse().unwrap();
        assert_eq!(movement.permanence_at(much_later).to_string(), "01:30:00");
    }

    #[test]
    fn movement_tolerates_missing_money_fields() {
        let movement: Movement = serde_json::from_value(serde_json::json!({
            "movId": 1,
            "movSuiId": 2,
            "movSuiEntrada": "2024-01-01T10:00:00Z"
        }))
        .unwrap();
        assert!(movement.is_open());
        assert_eq!(movement.consumption_total, None);
        assert_eq!(movement.deposit, None);
        assert_eq!(movement.extra_guests, None);
    }
}
