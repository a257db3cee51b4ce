// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Token-based authentication.
//!
//! Tokens are opaque session tokens persisted with an expiry; the token
//! encodes nothing itself and resolves to its user through the store.

use time::{Duration, OffsetDateTime};

use anglo_rota_persistence::{SessionRecord, Store, UserRecord};

use crate::error::AuthError;
use crate::request_response::TokenResponse;

/// Token issuance and verification configuration.
///
/// Passed into the authentication service at construction; there is no
/// process-wide configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenConfig {
    /// How long an issued token stays valid.
    pub validity: Duration,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            validity: Duration::minutes(30),
        }
    }
}

/// An authenticated API user.
///
/// This is the subject a validated token resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The user's login name.
    pub user_name: String,
}

/// Authentication service for issuing and validating bearer tokens.
pub struct AuthenticationService {
    /// Token issuance configuration.
    config: TokenConfig,
}

impl AuthenticationService {
    /// Creates a new authentication service.
    #[must_use]
    pub const fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Verifies credentials and issues a new token.
    ///
    /// # Arguments
    ///
    /// * `store` - The entity store
    /// * `user_name` - The login name
    /// * `password` - The plain-text password to verify
    ///
    /// # Errors
    ///
    /// Returns an error if the user is unknown, the password does not
    /// verify, or the session cannot be persisted.
    pub fn issue_token(
        &self,
        store: &mut Store,
        user_name: &str,
        password: &str,
    ) -> Result<TokenResponse, AuthError> {
        let user: UserRecord = store
            .user_by_name(user_name)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: format!("Unknown user: {user_name}"),
            })?;

        let verified: bool = bcrypt::verify(password, &user.password_hash).map_err(|e| {
            AuthError::AuthenticationFailed {
                reason: format!("Failed to verify password: {e}"),
            }
        })?;
        if !verified {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Invalid password"),
            });
        }

        let token: String = Self::generate_session_token();

        let expires_at: OffsetDateTime = OffsetDateTime::now_utc() + self.config.validity;
        let expiration: String = expires_at
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })?;

        store
            .create_session(&token, user.user_id, &expiration)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        store
            .update_last_login(user.user_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        Ok(TokenResponse { token, expiration })
    }

    /// Validates a bearer token and returns the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is unknown or expired, or the user
    /// no longer exists.
    pub fn validate_token(
        store: &mut Store,
        token: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        let session: SessionRecord = store
            .session_by_token(token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to parse session expiration: {e}"),
        })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let user: UserRecord = store
            .user_by_id(session.user_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("User not found"),
            })?;

        Ok(AuthenticatedUser {
            user_name: user.user_name,
        })
    }

    /// Deletes the session behind a token (logout).
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion fails.
    pub fn logout(store: &mut Store, token: &str) -> Result<(), AuthError> {
        store
            .delete_session(token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        Ok(())
    }

    /// Generates an opaque session token.
    fn generate_session_token() -> String {
        let entropy: u128 = rand::random::<u128>();
        format!("rota_{entropy:032x}")
    }
}
