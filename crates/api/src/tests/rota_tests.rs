// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_test_store, rota_request, seed_rota_entry, seed_rota_fixtures, seed_shift,
};
use crate::request_response::{RotaRequest, RotaResponse};
use crate::{ApiError, create_rota, get_rota, list_rota, patch_rota};
use anglo_rota_persistence::Store;

#[test]
fn test_create_rota_entry_and_read_back() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);

    create_rota(&mut store, &rota_request(1, "2019-03-04", Some("Early"))).unwrap();

    let entry: RotaResponse = get_rota(&mut store, 1, "2019-03-04").unwrap();
    assert_eq!(entry.employee_id, 1);
    assert_eq!(entry.employee_name, "John Smith");
    assert_eq!(entry.shift_name, "Early");
    assert_eq!(entry.duration_in_mins, 480);
    assert_eq!(entry.date, "2019-03-04");
}

#[test]
fn test_create_rota_unknown_employee_is_not_found() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);

    let err: ApiError =
        create_rota(&mut store, &rota_request(9, "2019-03-04", Some("Early"))).unwrap_err();
    assert!(matches!(
        err,
        ApiError::NotFound {
            entity: "Employee",
            ..
        }
    ));
}

#[test]
fn test_create_rota_unknown_shift_is_not_found() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);

    let err: ApiError =
        create_rota(&mut store, &rota_request(1, "2019-03-04", Some("Night"))).unwrap_err();
    assert!(matches!(
        err,
        ApiError::NotFound {
            entity: "Shift",
            ..
        }
    ));
}

#[test]
fn test_create_rota_mismatched_employee_name_is_inconsistent() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);

    let request: RotaRequest = RotaRequest {
        employee_name: Some(String::from("Jane Doe")),
        ..rota_request(1, "2019-03-04", Some("Early"))
    };
    let err: ApiError = create_rota(&mut store, &request).unwrap_err();
    assert!(matches!(err, ApiError::Inconsistent { .. }));
}

#[test]
fn test_create_rota_matching_employee_name_passes() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);

    let request: RotaRequest = RotaRequest {
        employee_name: Some(String::from("john smith")),
        ..rota_request(1, "2019-03-04", Some("Early"))
    };
    create_rota(&mut store, &request).unwrap();
}

#[test]
fn test_create_rota_mismatched_duration_is_inconsistent() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);

    let request: RotaRequest = RotaRequest {
        duration_in_mins: 300,
        ..rota_request(1, "2019-03-04", Some("Early"))
    };
    let err: ApiError = create_rota(&mut store, &request).unwrap_err();
    assert!(matches!(err, ApiError::Inconsistent { .. }));
}

#[test]
fn test_patch_without_existing_entry_creates() {
    // PATCH for a missing key with a valid shift behaves like POST.
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);

    patch_rota(&mut store, &rota_request(1, "2019-03-04", Some("Early"))).unwrap();

    let entry: RotaResponse = get_rota(&mut store, 1, "2019-03-04").unwrap();
    assert_eq!(entry.shift_name, "Early");
}

#[test]
fn test_patch_with_existing_entry_swaps_shift() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);
    seed_shift(&mut store, "Late", 420);
    seed_rota_entry(&mut store, 1, "2019-03-04", "Early");

    patch_rota(&mut store, &rota_request(1, "2019-03-04", Some("Late"))).unwrap();

    let entry: RotaResponse = get_rota(&mut store, 1, "2019-03-04").unwrap();
    assert_eq!(entry.shift_name, "Late");
    assert_eq!(entry.duration_in_mins, 420);
}

#[test]
fn test_patch_with_empty_shift_deletes_existing_entry() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);
    seed_rota_entry(&mut store, 1, "2019-03-04", "Early");

    patch_rota(&mut store, &rota_request(1, "2019-03-04", None)).unwrap();

    let err: ApiError = get_rota(&mut store, 1, "2019-03-04").unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
}

#[test]
fn test_patch_missing_entry_with_empty_shift_is_not_found() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);

    let err: ApiError = patch_rota(&mut store, &rota_request(1, "2019-03-04", None)).unwrap_err();
    assert!(matches!(
        err,
        ApiError::NotFound {
            entity: "Rota entry",
            ..
        }
    ));
}

#[test]
fn test_patch_update_rejects_date_outside_window() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);
    seed_shift(&mut store, "Late", 420);

    // The window check applies on the update branch, so an entry must
    // exist first; create one directly (POST does not window-check).
    create_rota(&mut store, &rota_request(1, "2020-03-04", Some("Early"))).unwrap();

    let err: ApiError =
        patch_rota(&mut store, &rota_request(1, "2020-03-04", Some("Late"))).unwrap_err();
    assert!(matches!(err, ApiError::ValidationFailed { .. }));
}

#[test]
fn test_patch_update_accepts_date_inside_window() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);
    seed_shift(&mut store, "Late", 420);
    seed_rota_entry(&mut store, 1, "2019-06-15", "Early");

    patch_rota(&mut store, &rota_request(1, "2019-06-15", Some("Late"))).unwrap();
}

#[test]
fn test_patch_update_unknown_shift_is_not_found() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);
    seed_rota_entry(&mut store, 1, "2019-03-04", "Early");

    let err: ApiError =
        patch_rota(&mut store, &rota_request(1, "2019-03-04", Some("Night"))).unwrap_err();
    assert!(matches!(
        err,
        ApiError::NotFound {
            entity: "Shift",
            ..
        }
    ));
}

#[test]
fn test_rota_rejects_invalid_date() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);

    let err: ApiError =
        patch_rota(&mut store, &rota_request(1, "04/03/2019", Some("Early"))).unwrap_err();
    assert!(matches!(err, ApiError::ValidationFailed { .. }));
}

#[test]
fn test_list_rota_projects_names_and_durations() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);
    seed_rota_entry(&mut store, 1, "2019-03-04", "Early");
    seed_rota_entry(&mut store, 1, "2019-03-05", "Early");

    let entries: Vec<RotaResponse> = list_rota(&mut store).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].employee_name, "John Smith");
    assert_eq!(entries[0].shift_name, "Early");
}

#[test]
fn test_get_missing_rota_entry_is_not_found() {
    let mut store: Store = create_test_store();
    seed_rota_fixtures(&mut store);

    let err: ApiError = get_rota(&mut store, 1, "2019-12-25").unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
}
