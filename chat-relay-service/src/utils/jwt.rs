use anyhow::Result;
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;

/// Claims the relay cares about, all optional. Identity providers differ on
/// which of these they populate.
#[derive(Debug, Deserialize)]
pub struct JwtClaims {
    pub sub: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "cognito:username")]
    pub username: Option<String>,
}

impl JwtClaims {
    /// Best available display identity for log lines.
    pub fn identity(&self) -> Option<&str> {
        self.email
            .as_deref()
            .or(self.username.as_deref())
            .or(self.sub.as_deref())
    }
}

/// Decode JWT claims without validation
///
/// The fronting gateway has already authenticated the caller; the relay only
/// reads claims for log attribution and never gates on them, so the signature
/// is not checked here.
pub fn decode_jwt_claims(token: &str) -> Result<JwtClaims> {
    let parts: Vec<&str> = token.split('.').collect();

    if parts.len() != 3 {
        return Err(anyhow::anyhow!("Invalid JWT format"));
    }

    // Decode the payload (second part)
    let payload = general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| anyhow::anyhow!("Failed to decode JWT payload: {}", e))?;

    let claims: JwtClaims = serde_json::from_slice(&payload)
        .map_err(|e| anyhow::anyhow!("Failed to parse JWT claims: {}", e))?;

    Ok(claims)
}
