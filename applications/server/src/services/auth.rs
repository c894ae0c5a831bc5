/// Authentication service - shared bearer credential
use crate::error::{Result, ServerError};

#[derive(Debug, Clone)]
pub struct AuthService {
    api_token: String,
}

impl AuthService {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
        }
    }

    /// Verify the value of an `Authorization` header
    pub fn verify_header(&self, header: Option<&str>) -> Result<()> {
        let header = header.ok_or_else(|| ServerError::Auth("Missing bearer token".to_string()))?;

        // Scheme names are case-insensitive (RFC 7235)
        let token = header
            .split_once(' ')
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
            .map(|(_, token)| token)
            .ok_or_else(|| ServerError::Auth("Expected a bearer token".to_string()))?;

        self.verify_token(token.trim())
    }

    /// Verify a raw token against the configured credential
    pub fn verify_token(&self, token: &str) -> Result<()> {
        if self.api_token.is_empty() || token != self.api_token {
            return Err(ServerError::Auth("Invalid token".to_string()));
        }
        Ok(())
    }
}
