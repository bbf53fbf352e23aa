//! Login request and response

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::api::{Validate, ValidationError};

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$";

/// Credentials sent to `auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    /// E-mail address
    pub login: String,
    /// Password
    pub password: String,
}

impl Validate for AuthRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let email = Regex::new(EMAIL_PATTERN).map_err(|e| ValidationError::new(e.to_string()))?;
        if !email.is_match(&self.login) {
            return Err(ValidationError::at("login", "L'adresse email n'est pas valide."));
        }
        Ok(())
    }
}

/// Successful login payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Connected user ID
    pub id: i64,
    /// Bearer token
    pub access_token: String,
    /// Project selected at login
    pub id_project: i64,
}
