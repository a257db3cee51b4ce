// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_store, seed_shift};
use crate::{PersistenceError, Store};
use anglo_rota_domain::{Shift, ShiftName};

#[test]
fn test_insert_shift_normalizes_name() {
    let mut store: Store = create_test_store();
    let id: i64 = seed_shift(&mut store, "early morning", 480);

    let shift: Shift = store.shift_by_id(id).unwrap().unwrap();
    assert_eq!(shift.name.value(), "Early Morning");
    assert_eq!(shift.duration_minutes, 480);
}

#[test]
fn test_shift_by_name_resolves_normalized_spelling() {
    let mut store: Store = create_test_store();
    seed_shift(&mut store, "early", 480);

    let found: Option<Shift> = store
        .shift_by_name(&ShiftName::new("EARLY").unwrap())
        .unwrap();
    assert!(found.is_some());
}

#[test]
fn test_update_shift_persists_both_fields() {
    let mut store: Store = create_test_store();
    let id: i64 = seed_shift(&mut store, "Early", 480);

    store
        .update_shift(id, &ShiftName::new("Late").unwrap(), 420)
        .unwrap();

    let shift: Shift = store.shift_by_id(id).unwrap().unwrap();
    assert_eq!(shift.name.value(), "Late");
    assert_eq!(shift.duration_minutes, 420);
}

#[test]
fn test_delete_shift_removes_record() {
    let mut store: Store = create_test_store();
    let id: i64 = seed_shift(&mut store, "Early", 480);

    store.delete_shift(id).unwrap();
    assert!(store.shift_by_id(id).unwrap().is_none());
}

#[test]
fn test_delete_missing_shift_is_not_found() {
    let mut store: Store = create_test_store();
    let err: PersistenceError = store.delete_shift(7).unwrap_err();
    assert!(matches!(err, PersistenceError::NotFound(_)));
}
