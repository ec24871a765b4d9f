// ============================================================================
// AUTH SERVICE - login, token handling, session restore
// ============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::models::{LoginResponse, Role, Session, TokenClaims};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::services::mock_client::MockApi;
use crate::utils::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USE_MOCK_DATA};
use crate::utils::storage::{load_raw, remove_raw, save_raw};

/// Log in against the configured backend, persist the tokens, and build
/// the session from the access-token claims.
pub async fn login(email: &str, password: &str) -> Result<Session, ApiError> {
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Http {
            status: 400,
            message: "Please enter both email and password".to_string(),
        });
    }

    let response = if USE_MOCK_DATA {
        MockApi::login(email)
    } else {
        ApiClient::new().login(email, password).await?
    };

    let session = session_from_login(&response, email)?;

    save_raw(ACCESS_TOKEN_KEY, &response.access);
    if let Some(refresh) = &response.refresh {
        save_raw(REFRESH_TOKEN_KEY, refresh);
    }

    log::info!("✅ Logged in as {} ({})", session.email, session.role);
    Ok(session)
}

/// Rebuild the session from a persisted access token, if one is stored
/// and its claims still parse. Called once at startup.
pub fn restore_session() -> Option<Session> {
    let token = load_raw(ACCESS_TOKEN_KEY)?;
    match session_from_token(&token, None, None) {
        Ok(session) => {
            log::info!("💾 Session restored from storage for {}", session.email);
            Some(session)
        }
        Err(e) => {
            log::warn!("⚠️ Stored token unusable ({}), clearing it", e);
            clear_tokens();
            None
        }
    }
}

/// Drop the persisted tokens. Safe to call repeatedly.
pub fn clear_tokens() {
    remove_raw(ACCESS_TOKEN_KEY);
    remove_raw(REFRESH_TOKEN_KEY);
}

/// Decode the payload segment of a JWT. No signature verification
/// client-side; the backend re-checks every request.
pub fn decode_claims(token: &str) -> Result<TokenClaims, ApiError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ApiError::Decode("token is not a JWT".to_string()))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ApiError::Decode(format!("token payload is not base64: {}", e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::Decode(format!("token claims malformed: {}", e)))
}

fn session_from_login(response: &LoginResponse, typed_email: &str) -> Result<Session, ApiError> {
    session_from_token(
        &response.access,
        response.email.as_deref().or(Some(typed_email)),
        response.name.clone(),
    )
}

fn session_from_token(
    token: &str,
    fallback_email: Option<&str>,
    name: Option<String>,
) -> Result<Session, ApiError> {
    let claims = decode_claims(token)?;
    let role = Role::parse(&claims.role)
        .ok_or_else(|| ApiError::Decode(format!("unknown role in token: {}", claims.role)))?;
    let email = claims
        .email
        .or_else(|| fallback_email.map(|e| e.to_string()))
        .ok_or_else(|| ApiError::Decode("no email in token or response".to_string()))?;
    Ok(Session {
        user_id: claims.user_id,
        role,
        email,
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_with(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(json!({"alg": "none"}).to_string());
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{}.{}.sig", header, body)
    }

    #[test]
    fn decodes_role_and_user_id() {
        let token = token_with(json!({"user_id": 101, "role": "student", "email": "s@mess.edu"}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_id, 101);
        assert_eq!(claims.role, "student");
    }

    #[test]
    fn rejects_non_jwt_token() {
        assert!(matches!(decode_claims("garbage"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn session_prefers_claim_email_over_fallback() {
        let token = token_with(json!({"user_id": 1, "role": "manager", "email": "m@mess.edu"}));
        let session = session_from_token(&token, Some("typed@mess.edu"), None).unwrap();
        assert_eq!(session.email, "m@mess.edu");
        assert_eq!(session.role, Role::Manager);
    }

    #[test]
    fn session_falls_back_to_typed_email() {
        let token = token_with(json!({"user_id": 2, "role": "student"}));
        let session = session_from_token(&token, Some("typed@mess.edu"), None).unwrap();
        assert_eq!(session.email, "typed@mess.edu");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let token = token_with(json!({"user_id": 3, "role": "chef"}));
        assert!(session_from_token(&token, Some("x@mess.edu"), None).is_err());
    }

    #[test]
    fn mock_login_token_decodes_through_the_same_path() {
        let response = MockApi::login("manager@mess.edu");
        let session = session_from_login(&response, "manager@mess.edu").unwrap();
        assert_eq!(session.role, Role::Manager);
        assert_eq!(session.email, "manager@mess.edu");
    }
}
