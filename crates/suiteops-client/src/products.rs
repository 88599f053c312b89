//! Typed client for the product catalog.
//!
//! | Method | Path | Operation |
//! |--------|--------------------------|----------------------------------|
//! | GET    | `/searchProd/{code}`     | Product lookup by reference code |
//! | GET    | `/searchProdDesc/{text}` | Fuzzy lookup by description      |
//!
//! Lookups resolve the unit price a consumption line is launched with;
//! the operator never types a price by hand.

use serde::{Deserialize, Serialize};

use suiteops_core::ProductId;

use crate::error::ApiError;
use crate::transport;

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier (`prdId`).
    #[serde(rename = "prdId")]
    pub id: ProductId,
    /// Description (`prdDescricao`).
    #[serde(rename = "prdDescricao", default)]
    pub description: Option<String>,
    /// Reference code (`prdReferencia`).
    #[serde(rename = "prdReferencia", default)]
    pub reference: Option<String>,
    /// Sales unit (`prdUnidade`).
    #[serde(rename = "prdUnidade", default)]
    pub unit: Option<String>,
    /// Current unit price (`prdPrcUnitario`).
    #[serde(rename = "prdPrcUnitario", default)]
    pub unit_price: Option<f64>,
}

// -- Client -------------------------------------------------------------------

/// Client for the product catalog.
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl ProductClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Look up a product by its reference code.
    ///
    /// Calls `GET {base_url}/searchProd/{code}`. Unknown codes are
    /// `Ok(None)`.
    pub async fn by_code(&self, code: &str) -> Result<Option<Product>, ApiError> {
        let endpoint = format!("GET /searchProd/{code}");
        let url = format!("{}searchProd/{code}", self.base_url);
        transport::request_json_opt(self.http.get(&url), &endpoint).await
    }

    /// Search products by description fragment.
    ///
    /// Calls `GET {base_url}/searchProdDesc/{text}`.
    pub async fn search_description(&self, text: &str) -> Result<Vec<Product>, ApiError> {
        let endpoint = format!("GET /searchProdDesc/{text}");
        let url = format!("{}searchProdDesc/{text}", self.base_url);
        transport::request_json(self.http.get(&url), &endpoint).await
    }
}
