//! # suiteops-client — Typed Rust client for the PMS REST service
//!
//! Provides ergonomic, typed access to the PMS resource families:
//! - **Auth** — `/signIn`, `/newuser`
//! - **Suites** — `/categorias`, `/searchSuite/{suiId}`,
//!   `/limpezaSuite/{suiId}`, `/manutencaoSuite/{suiId}`
//! - **Movements** — `/searchMovim/{suiId}`, `/dadosMovim/{movId}`,
//!   `/entrada`, `/fechar`, `/vlrPermanencia/{movSuiId}/{duration}`
//! - **Consumption** — `/searchItens/{movId}`, `/newItem`, `/removeItem`
//! - **Products** — `/searchProd/{code}`, `/searchProdDesc/{text}`
//!
//! ## Architecture
//!
//! This crate is the only path to the PMS service for the rest of the
//! workspace. It owns the wire contract: field names, status codes, and
//! error mapping. Callers receive domain types from `suiteops-core` plus
//! the response structs defined alongside each sub-client.
//!
//! ## Error Mapping
//!
//! Transport failures map to [`ApiError::Http`], non-success responses to
//! [`ApiError::Api`] (carrying status and body), and body-decode failures
//! to [`ApiError::Deserialization`]. Singular lookups (`/searchSuite`,
//! `/searchMovim`, `/dadosMovim`, `/searchProd`) treat a 404 — or a 200
//! with a `null` body — as `Ok(None)`.

pub mod auth;
pub mod config;
pub mod consumption;
pub mod error;
pub mod movements;
pub mod products;
pub mod suites;
pub(crate) mod transport;

pub use auth::Session;
pub use config::PmsApiConfig;
pub use error::ApiError;

use std::time::Duration;

/// Top-level PMS client. Holds sub-clients for each resource family.
#[derive(Debug, Clone)]
pub struct PmsClient {
    auth: auth::AuthClient,
    suites: suites::SuiteClient,
    movements: movements::MovementClient,
    consumption: consumption::ConsumptionClient,
    products: products::ProductClient,
}

impl PmsClient {
    /// Create a new PMS client from configuration.
    ///
    /// When the configuration carries a session token it is attached to
    /// every request as a bearer `Authorization` header, marked sensitive
    /// so it never appears in logs.
    pub fn new(config: PmsApiConfig) -> Result<Self, ApiError> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));

        if let Some(token) = &config.session_token {
            let mut headers = reqwest::header::HeaderMap::new();
            let mut value =
                reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
                    .map_err(|_| ApiError::Config(config::ConfigError::InvalidToken))?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        let http = builder.build().map_err(|e| ApiError::Http {
            endpoint: "client_init".into(),
            source: e,
        })?;

        Ok(Self {
            auth: auth::AuthClient::new(http.clone(), config.base_url.clone()),
            suites: suites::SuiteClient::new(http.clone(), config.base_url.clone()),
            movements: movements::MovementClient::new(http.clone(), config.base_url.clone()),
            consumption: consumption::ConsumptionClient::new(http.clone(), config.base_url.clone()),
            products: products::ProductClient::new(http, config.base_url),
        })
    }

    /// Access the authentication client.
    pub fn auth(&self) -> &auth::AuthClient {
        &self.auth
    }

    /// Access the suites (categories and status commands) client.
    pub fn suites(&self) -> &suites::SuiteClient {
        &self.suites
    }

    /// Access the movements (occupancy episodes and pricing) client.
    pub fn movements(&self) -> &movements::MovementClient {
        &self.movements
    }

    /// Access the consumption line-items client.
    pub fn consumption(&self) -> &consumption::ConsumptionClient {
        &self.consumption
    }

    /// Access the product catalog client.
    pub fn products(&self) -> &products::ProductClient {
        &self.products
    }
}
