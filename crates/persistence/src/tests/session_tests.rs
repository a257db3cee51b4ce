// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_store;
use crate::{PersistenceError, SessionRecord, Store, UserRecord};

#[test]
fn test_create_user_hashes_password() {
    let mut store: Store = create_test_store();
    let user_id: i64 = store.create_user("admin", "swordfish").unwrap();

    let user: UserRecord = store.user_by_name("admin").unwrap().unwrap();
    assert_eq!(user.user_id, user_id);
    assert_ne!(user.password_hash, "swordfish");
    assert!(bcrypt::verify("swordfish", &user.password_hash).unwrap());
    assert!(!bcrypt::verify("wrong", &user.password_hash).unwrap());
}

#[test]
fn test_duplicate_user_name_rejected() {
    let mut store: Store = create_test_store();
    store.create_user("admin", "swordfish").unwrap();

    let result: Result<i64, PersistenceError> = store.create_user("admin", "other");
    assert!(result.is_err());
}

#[test]
fn test_unknown_user_lookup_is_none() {
    let mut store: Store = create_test_store();
    assert!(store.user_by_name("ghost").unwrap().is_none());
}

#[test]
fn test_session_round_trip() {
    let mut store: Store = create_test_store();
    let user_id: i64 = store.create_user("admin", "swordfish").unwrap();

    store
        .create_session("token-abc", user_id, "2031-01-01T00:00:00Z")
        .unwrap();

    let session: SessionRecord = store.session_by_token("token-abc").unwrap().unwrap();
    assert_eq!(session.user_id, user_id);
    assert_eq!(session.expires_at, "2031-01-01T00:00:00Z");

    store.delete_session("token-abc").unwrap();
    assert!(store.session_by_token("token-abc").unwrap().is_none());
}

#[test]
fn test_expired_session_sweep_removes_only_expired() {
    let mut store: Store = create_test_store();
    let user_id: i64 = store.create_user("admin", "swordfish").unwrap();

    store
        .create_session("stale", user_id, "2001-01-01 00:00:00")
        .unwrap();
    store
        .create_session("fresh", user_id, "2031-01-01 00:00:00")
        .unwrap();

    let removed: usize = store.delete_expired_sessions().unwrap();
    assert_eq!(removed, 1);
    assert!(store.session_by_token("stale").unwrap().is_none());
    assert!(store.session_by_token("fresh").unwrap().is_some());
}

#[test]
fn test_update_last_login_sets_timestamp() {
    let mut store: Store = create_test_store();
    let user_id: i64 = store.create_user("admin", "swordfish").unwrap();

    let before: UserRecord = store.user_by_name("admin").unwrap().unwrap();
    assert!(before.last_login_at.is_none());

    store.update_last_login(user_id).unwrap();

    let after: UserRecord = store.user_by_name("admin").unwrap().unwrap();
    assert!(after.last_login_at.is_some());
}
