// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session flows that pair an auth endpoint call with the matching
//! [`AuthStore`] transition.
//!
//! Handles:
//! - Sign in / sign up / sign out
//! - Silent refresh with the stored refresh token
//! - Proactive refresh when the access token is about to expire

use crate::error::{ApiError, Result};
use crate::models::NewAccount;
use crate::services::AuthService;
use crate::store::AuthStore;
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

/// Margin before token expiration when we proactively refresh (5 minutes).
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 5 * 60;

/// Error code returned when a refresh is requested without a refresh token.
pub const NO_REFRESH_TOKEN: &str = "NO_REFRESH_TOKEN";

/// Log in with email and password and store the resulting session.
pub async fn sign_in(
    auth: &AuthService,
    store: &mut AuthStore,
    email: &str,
    password: &str,
) -> Result<()> {
    store.set_loading(true);
    let result = auth.login(email, password).await;
    store.set_loading(false);

    let session = result?;
    tracing::info!(user_id = %session.user.id, "Signed in");
    store.login(session.user, session.token, session.refresh_token);
    Ok(())
}

/// Create an account and store the resulting session.
pub async fn sign_up(
    auth: &AuthService,
    store: &mut AuthStore,
    account: &NewAccount,
) -> Result<()> {
    store.set_loading(true);
    let result = auth.register(account).await;
    store.set_loading(false);

    let session = result?;
    tracing::info!(user_id = %session.user.id, "Account created");
    store.login(session.user, session.token, session.refresh_token);
    Ok(())
}

/// Log out locally. The server-side logout is best effort.
pub async fn sign_out(auth: &AuthService, store: &mut AuthStore) {
    if store.token().is_some() {
        if let Err(e) = auth.logout().await {
            tracing::warn!(error = %e, "Server logout failed, continuing anyway");
        }
    }
    store.logout();
    tracing::info!("Signed out");
}

/// Exchange the stored refresh token for a new token pair.
///
/// A 401 from the refresh endpoint means the session is dead, so the store
/// is logged out. Any other failure leaves the session untouched.
pub async fn refresh_session(auth: &AuthService, store: &mut AuthStore) -> Result<()> {
    let Some(refresh_token) = store.refresh_token().map(str::to_owned) else {
        return Err(ApiError::Http {
            status: 401,
            code: Some(NO_REFRESH_TOKEN.to_string()),
            message: "No refresh token available".to_string(),
        });
    };

    match auth.refresh_token(&refresh_token).await {
        Ok(pair) => {
            store.set_tokens(pair.token, Some(pair.refresh_token));
            tracing::info!("Session refreshed");
            Ok(())
        }
        Err(e) if e.is_unauthorized() => {
            tracing::warn!(error = %e, "Refresh token rejected, logging out");
            store.logout();
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Refresh the session if the access token expires within the margin.
///
/// Returns `true` when a refresh happened. Tokens without a readable `exp`
/// claim are treated as never expiring.
pub async fn ensure_fresh_token(
    auth: &AuthService,
    store: &mut AuthStore,
    now: DateTime<Utc>,
) -> Result<bool> {
    let Some(expires_at) = store.token().and_then(token_expiry) else {
        return Ok(false);
    };

    let margin = Duration::seconds(TOKEN_REFRESH_MARGIN_SECS);
    if now + margin < expires_at {
        return Ok(false);
    }

    tracing::debug!(%expires_at, "Access token expiring soon, refreshing");
    refresh_session(auth, store).await?;
    Ok(true)
}

#[derive(Debug, Deserialize)]
struct ExpiryClaim {
    exp: i64,
}

/// Read the `exp` claim of a JWT without checking its signature.
///
/// The client cannot verify the server's signature; it only needs to know
/// when to refresh.
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;

    let data = decode::<ExpiryClaim>(token, &DecodingKey::from_secret(&[]), &validation).ok()?;
    Utc.timestamp_opt(data.claims.exp, 0).single()
}
