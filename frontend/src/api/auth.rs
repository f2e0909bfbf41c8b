use gloo_storage::{LocalStorage, Storage};
use log::debug;

use shared::{ErrorResponse, SessionDto};

use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post};
use crate::auth::TOKEN_STORAGE_KEY;

/// Result of resolving the stored token into a session: authenticated,
/// anonymous (no token, or the token was rejected), or a transient failure
/// that should not log the user out.
#[derive(Debug)]
pub enum SessionCheckResult {
    Ok(SessionDto),
    LoggedOut,
    Other(String),
}

pub async fn get_session() -> SessionCheckResult {
    if LocalStorage::get::<String>(TOKEN_STORAGE_KEY).is_err() {
        return SessionCheckResult::LoggedOut;
    }

    debug!("Fetching current session");

    let response = match authenticated_get(&api_url("/api/auth/whoami")).send().await {
        Ok(r) => r,
        Err(e) => {
            debug!("Session check request failed (network): {}", e);
            return SessionCheckResult::Other(format!("Connection error: {}", e));
        }
    };

    if response.status() == 401 || response.status() == 403 {
        return SessionCheckResult::LoggedOut;
    }

    if !response.ok() {
        let msg = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return SessionCheckResult::Other(msg);
    }

    match response.json::<SessionDto>().await {
        Ok(session) => {
            debug!("Session belongs to {}", session.current.name);
            SessionCheckResult::Ok(session)
        }
        Err(e) => SessionCheckResult::Other(format!("Invalid response: {}", e)),
    }
}

pub async fn logout() -> Result<(), String> {
    debug!("Attempting logout");

    let response = authenticated_post(&api_url("/api/auth/logout"))
        .send()
        .await
        .map_err(|e| format!("Failed to send logout request: {}", e))?;

    if !response.ok() {
        let error = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error occurred".to_string());
        return Err(format!("Logout failed: {}", error));
    }

    debug!("Logout successful");
    Ok(())
}
