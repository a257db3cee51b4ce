// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// An API user account as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// The store-assigned identifier.
    pub user_id: i64,
    /// The unique login name.
    pub user_name: String,
    /// The bcrypt password hash.
    pub password_hash: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last successful token issuance, if any (ISO 8601).
    pub last_login_at: Option<String>,
}

/// An issued bearer-token session as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The store-assigned identifier.
    pub session_id: i64,
    /// The opaque bearer token.
    pub session_token: String,
    /// The user the token was issued to.
    pub user_id: i64,
    /// Issuance timestamp (ISO 8601).
    pub created_at: String,
    /// Expiry timestamp (ISO 8601).
    pub expires_at: String,
}
