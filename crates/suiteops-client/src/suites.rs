//! Typed client for suite occupancy and status commands.
//!
//! | Method | Path | Operation |
//! |--------|---------------------------|----------------------------------|
//! | GET    | `/categorias`             | Categories with nested suites    |
//! | GET    | `/searchSuite/{suiId}`    | Current suite record             |
//! | PUT    | `/limpezaSuite/{suiId}`   | Force suite into cleaning        |
//! | PUT    | `/manutencaoSuite/{suiId}`| Force suite into maintenance     |
//!
//! The two PUTs are the only status-affecting commands in this family;
//! both are unconditional from the client's perspective and the service
//! answers with the updated suite record.

use serde::{Deserialize, Serialize};

use suiteops_core::{CategoryId, StatusTally, SuiteId, SuiteStatus};

use crate::error::ApiError;
use crate::transport;

/// A suite as reported by the PMS service.
///
/// Fields use `#[serde(default)]` for resilience against schema
/// evolution; only the identifier is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suite {
    /// Suite identifier (`suiId`).
    #[serde(rename = "suiId")]
    pub id: SuiteId,
    /// Display name (`suiDescricao`).
    #[serde(rename = "suiDescricao", default)]
    pub description: Option<String>,
    /// Owning category (`catId`).
    #[serde(rename = "catId", default)]
    pub category_id: Option<CategoryId>,
    /// Reported occupancy status (`suiStatus`).
    #[serde(rename = "suiStatus", default)]
    pub status: Option<SuiteStatus>,
}

/// A suite category with its nested suites, from `GET /categorias`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier (`catId`).
    #[serde(rename = "catId")]
    pub id: CategoryId,
    /// Display name (`catDescricao`).
    #[serde(rename = "catDescricao", default)]
    pub description: Option<String>,
    /// Suites in this category; empty when none are registered.
    #[serde(default)]
    pub suites: Vec<Suite>,
}

/// Tally suite statuses across a categories listing (the board legend).
pub fn tally_statuses(categories: &[Category]) -> StatusTally {
    StatusTally::count(
        categories
            .iter()
            .flat_map(|c| c.suites.iter())
            .map(|s| s.status),
    )
}

// -- Client -------------------------------------------------------------------

/// Client for the suites resource family.
#[derive(Debug, Clone)]
pub struct SuiteClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl SuiteClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// List all categories with their nested suites.
    ///
    /// Calls `GET {base_url}/categorias`.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = format!("{}categorias", self.base_url);
        transport::request_json(self.http.get(&url), "GET /categorias").await
    }

    /// Fetch the current record of one suite.
    ///
    /// Calls `GET {base_url}/searchSuite/{suiId}`. Unknown suites are
    /// `Ok(None)`.
    pub async fn get(&self, suite: SuiteId) -> Result<Option<Suite>, ApiError> {
        let endpoint = format!("GET /searchSuite/{suite}");
        let url = format!("{}searchSuite/{suite}", self.base_url);
        transport::request_json_opt(self.http.get(&url), &endpoint).await
    }

    /// Force a suite into cleaning status.
    ///
    /// Calls `PUT {base_url}/limpezaSuite/{suiId}` and returns the
    /// updated suite record.
    pub async fn set_cleaning(&self, suite: SuiteId) -> Result<Suite, ApiError> {
        let endpoint = format!("PUT /limpezaSuite/{suite}");
        let url = format!("{}limpezaSuite/{suite}", self.base_url);
        transport::request_json(self.http.put(&url), &endpoint).await
    }

    /// Force a suite into maintenance status.
    ///
    /// Calls `PUT {base_url}/manutencaoSuite/{suiId}` and returns the
    /// updated suite record.
    pub async fn set_maintenance(&self, suite: SuiteId) -> Result<Suite, ApiError> {
        let endpoint = format!("PUT /manutencaoSuite/{suite}");
        let url = format!("{}manutencaoSuite/{suite}", self.base_url);
        transport::request_json(self.http.put(&url), &endpoint).await
    }
}
