// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, EntityKind, RotaEntry, RotaPatchAction, format_rota_date, parse_rota_date,
    plan_rota_patch, validate_rota_date,
};
use time::Date;
use time::macros::date;

fn create_test_entry(employee_id: i64, on: Date) -> RotaEntry {
    RotaEntry {
        id: 1,
        employee_id,
        date: on,
        shift_id: 1,
    }
}

#[test]
fn test_patch_without_existing_entry_creates() {
    let action: RotaPatchAction =
        plan_rota_patch(1, date!(2019 - 03 - 04), None, Some("Early")).unwrap();
    assert_eq!(action, RotaPatchAction::Create);
}

#[test]
fn test_patch_with_existing_entry_and_shift_updates() {
    let entry: RotaEntry = create_test_entry(1, date!(2019 - 03 - 04));
    let action: RotaPatchAction =
        plan_rota_patch(1, date!(2019 - 03 - 04), Some(&entry), Some("Late")).unwrap();
    assert_eq!(action, RotaPatchAction::Update);
}

#[test]
fn test_patch_with_existing_entry_and_no_shift_deletes() {
    let entry: RotaEntry = create_test_entry(1, date!(2019 - 03 - 04));
    let action: RotaPatchAction =
        plan_rota_patch(1, date!(2019 - 03 - 04), Some(&entry), None).unwrap();
    assert_eq!(action, RotaPatchAction::Delete);
}

#[test]
fn test_patch_treats_blank_shift_name_as_absent() {
    let entry: RotaEntry = create_test_entry(1, date!(2019 - 03 - 04));
    let action: RotaPatchAction =
        plan_rota_patch(1, date!(2019 - 03 - 04), Some(&entry), Some("   ")).unwrap();
    assert_eq!(action, RotaPatchAction::Delete);
}

#[test]
fn test_patch_without_entry_and_without_shift_is_not_found() {
    // Not-found takes precedence: there is nothing to delete and nothing
    // to create, so the operation fails instead of becoming a no-op.
    let err: DomainError = plan_rota_patch(5, date!(2019 - 03 - 04), None, None).unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound {
            entity: EntityKind::RotaEntry,
            ..
        }
    ));
}

#[test]
fn test_rota_date_inside_window_accepted() {
    assert!(validate_rota_date(date!(2019 - 01 - 01)).is_ok());
    assert!(validate_rota_date(date!(2019 - 12 - 31)).is_ok());
}

#[test]
fn test_rota_date_outside_window_rejected() {
    let err: DomainError = validate_rota_date(date!(2020 - 01 - 01)).unwrap_err();
    assert!(matches!(err, DomainError::DateOutsideWindow { .. }));

    assert!(validate_rota_date(date!(2018 - 12 - 31)).is_err());
}

#[test]
fn test_parse_rota_date_round_trip() {
    let parsed: Date = parse_rota_date("2019-06-15").unwrap();
    assert_eq!(parsed, date!(2019 - 06 - 15));
    assert_eq!(format_rota_date(parsed), "2019-06-15");
}

#[test]
fn test_parse_rota_date_rejects_garbage() {
    let err: DomainError = parse_rota_date("not-a-date").unwrap_err();
    assert!(matches!(err, DomainError::InvalidName { field: "date", .. }));
}
