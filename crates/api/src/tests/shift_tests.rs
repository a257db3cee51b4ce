// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_store, seed_rota_entry, seed_rota_fixtures, seed_shift};
use crate::request_response::{CreateShiftRequest, ShiftResponse, UpdateShiftRequest};
use crate::{ApiError, create_shift, delete_shift, list_shifts, update_shift};
use anglo_rota_persistence::Store;

#[test]
fn test_create_shift_stores_title_cased_name() {
    let mut store: Store = create_test_store();
    seed_shift(&mut store, "early morning", 480);

    let shifts: Vec<ShiftResponse> = list_shifts(&mut store).unwrap();
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].shift_name, "Early Morning");
    assert_eq!(shifts[0].duration_in_mins, 480);
}

#[test]
fn test_create_shift_rejects_duplicate_name() {
    let mut store: Store = create_test_store();
    seed_shift(&mut store, "Early", 480);

    let err: ApiError = create_shift(
        &mut store,
        &CreateShiftRequest {
            shift_name: String::from("EARLY"),
            duration_in_mins: 300,
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::DuplicateName {
            entity: "Shift",
            ..
        }
    ));
}

#[test]
fn test_create_shift_rejects_out_of_range_duration() {
    let mut store: Store = create_test_store();
    let err: ApiError = create_shift(
        &mut store,
        &CreateShiftRequest {
            shift_name: String::from("Marathon"),
            duration_in_mins: 2000,
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::ValidationFailed { .. }));

    let err: ApiError = create_shift(
        &mut store,
        &CreateShiftRequest {
            shift_name: String::from("Negative"),
            duration_in_mins: -1,
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::ValidationFailed { .. }));
}

#[test]
fn test_update_shift_to_fresh_name_succeeds() {
    let mut store: Store = create_test_store();
    seed_shift(&mut store, "Early", 480);
    let id: i64 = list_shifts(&mut store).unwrap()[0].shift_id;

    update_shift(
        &mut store,
        &UpdateShiftRequest {
            shift_id: id,
            shift_name: String::from("Late"),
            duration_in_mins: 420,
        },
    )
    .unwrap();

    let shifts: Vec<ShiftResponse> = list_shifts(&mut store).unwrap();
    assert_eq!(shifts[0].shift_name, "Late");
    assert_eq!(shifts[0].duration_in_mins, 420);
}

#[test]
fn test_update_shift_to_its_own_name_is_rejected() {
    // The uniqueness check on update is strict: it does not exempt the
    // record being updated, so a self-rename is also a duplicate.
    let mut store: Store = create_test_store();
    seed_shift(&mut store, "Early", 480);
    let id: i64 = list_shifts(&mut store).unwrap()[0].shift_id;

    let err: ApiError = update_shift(
        &mut store,
        &UpdateShiftRequest {
            shift_id: id,
            shift_name: String::from("Early"),
            duration_in_mins: 300,
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::DuplicateName { .. }));
}

#[test]
fn test_update_missing_shift_is_not_found() {
    let mut store: Store = create_test_store();
    let err: ApiError = update_shift(
        &mut store,
        &UpdateShiftRequest {
            shift_id: 3,
            shift_name: String::from("Ghost"),
            duration_in_mins: 60,
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
}

#[test]
fn test_delete_referenced_shift_is_in_use() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);
    seed_rota_entry(&mut store, 1, "2019-03-04", "Early");
    let id: i64 = list_shifts(&mut store).unwrap()[0].shift_id;

    let err: ApiError = delete_shift(&mut store, id).unwrap_err();
    assert!(matches!(err, ApiError::InUse { .. }));
}

#[test]
fn test_delete_unreferenced_shift_succeeds() {
    let mut store: Store = create_test_store();
    seed_shift(&mut store, "Early", 480);
    let id: i64 = list_shifts(&mut store).unwrap()[0].shift_id;

    delete_shift(&mut store, id).unwrap();
    assert!(list_shifts(&mut store).unwrap().is_empty());
}

#[test]
fn test_delete_missing_shift_is_not_found() {
    let mut store: Store = create_test_store();
    let err: ApiError = delete_shift(&mut store, 9).unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
}
