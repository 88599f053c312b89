//! Typed client for authentication and registration.
//!
//! | Method | Path | Operation |
//! |--------|-----------|-------------------------------|
//! | POST   | `/signIn` | Credential exchange -> session |
//! | POST   | `/newuser` | Staff registration            |
//!
//! Registration input is validated client-side before it is sent, so a
//! typo is caught without a round-trip; the service revalidates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use suiteops_core::{UserId, ValidationError};

use crate::error::ApiError;
use crate::transport;

/// Credentials for `POST /signIn`.
///
/// Custom `Debug` redacts the password.
#[derive(Clone, Serialize)]
pub struct SignInRequest {
    /// Staff e-mail address.
    pub email: String,
    /// Password, sent verbatim; the service owns hashing.
    pub password: String,
}

impl std::fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Session issued by `POST /signIn`.
///
/// The token is what the consuming layer attaches to subsequent requests;
/// `Debug` redacts both token fields.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Resolved staff user identity.
    pub id: UserId,
    /// Display name, if the service returned one.
    #[serde(default)]
    pub name: Option<String>,
    /// E-mail, if the service returned one.
    #[serde(default)]
    pub email: Option<String>,
    /// Session token.
    pub token: String,
    /// Refresh token, if issued.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Registration payload for `POST /newuser`.
///
/// Wire field names follow the service contract; `Debug` redacts the
/// password.
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    /// Full name (`nome` on the wire).
    #[serde(rename = "nome")]
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Phone number (`telefone`), 8-15 digits with optional `+` prefix.
    #[serde(rename = "telefone")]
    pub phone: String,
    /// Birth date (`dataNascimento`) as `YYYY-MM-DD`.
    #[serde(rename = "dataNascimento")]
    pub birth_date: String,
    /// Password, at least 6 characters.
    pub password: String,
    /// Favorite team (`timeDoCoracao`), a required profile field.
    #[serde(rename = "timeDoCoracao")]
    pub favorite_team: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("birth_date", &self.birth_date)
            .field("password", &"[REDACTED]")
            .field("favorite_team", &self.favorite_team)
            .finish()
    }
}

impl RegisterRequest {
    /// Validate the registration form against today's date.
    ///
    /// `password_confirmation` is checked against the password and is
    /// never sent to the service.
    pub fn validate(&self, password_confirmation: &str) -> Result<(), ValidationError> {
        self.validate_at(chrono::Utc::now().date_naive(), password_confirmation)
    }

    /// Validate against an explicit "today", for deterministic tests.
    pub fn validate_at(
        &self,
        today: NaiveDate,
        password_confirmation: &str,
    ) -> Result<(), ValidationError> {
        if self.name.trim().chars().count() < 2 {
            return Err(ValidationError::NameTooShort);
        }
        if !is_plausible_email(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone(self.phone.clone()));
        }
        validate_birth_date(&self.birth_date, today)?;
        if self.password.chars().count() < 6 {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password != password_confirmation {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.favorite_team.trim().is_empty() {
            return Err(ValidationError::MissingFavoriteTeam);
        }
        Ok(())
    }
}

/// Shape check only; the service remains the authority on addresses.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// 8-15 digits, optionally prefixed with `+`.
fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (8..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

fn validate_birth_date(value: &str, today: NaiveDate) -> Result<(), ValidationError> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidBirthDate {
            value: value.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        }
    })?;

    let floor = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN);
    if date < floor {
        return Err(ValidationError::InvalidBirthDate {
            value: value.to_string(),
            reason: "before 1900-01-01".to_string(),
        });
    }
    if date > today {
        return Err(ValidationError::InvalidBirthDate {
            value: value.to_string(),
            reason: "in the future".to_string(),
        });
    }
    Ok(())
}

// -- Client -------------------------------------------------------------------

/// Client for authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl AuthClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Exchange credentials for a session.
    ///
    /// Calls `POST {base_url}/signIn`.
    pub async fn sign_in(&self, req: &SignInRequest) -> Result<Session, ApiError> {
        let url = format!("{}signIn", self.base_url);
        transport::request_json(self.http.post(&url).json(req), "POST /signIn").await
    }

    /// Register a new staff user.
    ///
    /// Calls `POST {base_url}/newuser`. Callers are expected to run
    /// [`RegisterRequest::validate`] first; the service revalidates.
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        let url = format!("{}newuser", self.base_url);
        transport::request_unit(self.http.post(&url).json(req), "POST /newuser").await
    }
}
