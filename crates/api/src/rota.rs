// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rota operations.
//!
//! POST creates an entry; PATCH runs the upsert state machine: it
//! resolves the entry by `(employee_id, date)` and branches between the
//! create, update and delete paths based on the payload shape.

use time::Date;
use tracing::{info, warn};

use anglo_rota_domain::{
    DomainError, Employee, EntityKind, RotaEntry, RotaPatchAction, Shift, ShiftName,
    format_rota_date, parse_rota_date, plan_rota_patch, validate_rota_date,
    validate_rota_duration, validate_rota_employee_name,
};
use anglo_rota_persistence::Store;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{RotaRequest, RotaResponse};

/// Resolves an employee by id or fails with `NotFound`.
fn employee_for_rota(store: &mut Store, employee_id: i64) -> Result<Employee, ApiError> {
    store.employee_by_id(employee_id)?.ok_or_else(|| {
        warn!("Employee with id {} was not found", employee_id);
        translate_domain_error(DomainError::NotFound {
            entity: EntityKind::Employee,
            key: employee_id.to_string(),
        })
    })
}

/// Resolves a shift by the payload's name or fails with `NotFound`.
///
/// A missing or empty name is a validation failure; the rota PATCH
/// handles that shape before calling this.
fn shift_for_rota(store: &mut Store, shift_name: Option<&str>) -> Result<Shift, ApiError> {
    let raw: &str = shift_name.unwrap_or_default();
    let name: ShiftName = ShiftName::new(raw).map_err(translate_domain_error)?;

    store.shift_by_name(&name)?.ok_or_else(|| {
        warn!("Shift with name {} was not found", name);
        translate_domain_error(DomainError::NotFound {
            entity: EntityKind::Shift,
            key: name.into_string(),
        })
    })
}

/// Projects a rota entry, resolving the employee and shift it references.
fn rota_to_response(store: &mut Store, entry: &RotaEntry) -> Result<RotaResponse, ApiError> {
    let employee: Employee =
        store
            .employee_by_id(entry.employee_id)?
            .ok_or_else(|| ApiError::Unexpected {
                message: format!(
                    "Rota entry {} references missing employee {}",
                    entry.id, entry.employee_id
                ),
            })?;
    let shift: Shift = store
        .shift_by_id(entry.shift_id)?
        .ok_or_else(|| ApiError::Unexpected {
            message: format!(
                "Rota entry {} references missing shift {}",
                entry.id, entry.shift_id
            ),
        })?;

    Ok(RotaResponse {
        employee_id: employee.id,
        employee_name: employee.name.into_string(),
        date: format_rota_date(entry.date),
        shift_name: shift.name.into_string(),
        duration_in_mins: shift.duration_minutes,
    })
}

/// Parses the request's date field.
fn parse_request_date(raw: &str) -> Result<Date, ApiError> {
    parse_rota_date(raw).map_err(translate_domain_error)
}

/// Lists all rota entries ordered by employee.
///
/// # Errors
///
/// Returns an error if a store query fails.
pub fn list_rota(store: &mut Store) -> Result<Vec<RotaResponse>, ApiError> {
    let entries: Vec<RotaEntry> = store.all_rota_entries()?;

    let mut responses: Vec<RotaResponse> = Vec::with_capacity(entries.len());
    for entry in &entries {
        responses.push(rota_to_response(store, entry)?);
    }

    info!("Loaded {} rota entries", responses.len());
    Ok(responses)
}

/// Reads a single rota entry by its natural key.
///
/// # Errors
///
/// Returns `NotFound` if no entry exists for the pair.
pub fn get_rota(
    store: &mut Store,
    employee_id: i64,
    date_raw: &str,
) -> Result<RotaResponse, ApiError> {
    let date: Date = parse_request_date(date_raw)?;

    let entry: RotaEntry = store.rota_entry_by_key(employee_id, date)?.ok_or_else(|| {
        warn!(
            "Rota entry for employee {} on {} was not found",
            employee_id, date
        );
        translate_domain_error(DomainError::NotFound {
            entity: EntityKind::RotaEntry,
            key: format!("employee {employee_id} on {date}"),
        })
    })?;

    rota_to_response(store, &entry)
}

/// Creates a new rota entry.
///
/// The employee resolves by id and the shift by name; the optional
/// employee name and duration in the payload must match the stored
/// records.
///
/// # Errors
///
/// Returns `NotFound` for an unknown employee or shift, or
/// `Inconsistent` if the optional fields disagree with the store.
pub fn create_rota(store: &mut Store, request: &RotaRequest) -> Result<(), ApiError> {
    let employee: Employee = employee_for_rota(store, request.employee_id)?;
    let shift: Shift = shift_for_rota(store, request.shift_name.as_deref())?;

    validate_rota_employee_name(request.employee_name.as_deref(), &employee).map_err(|e| {
        warn!(
            "Submitted employee id {} and name pair do not match",
            request.employee_id
        );
        translate_domain_error(e)
    })?;
    validate_rota_duration(request.duration_in_mins, &shift).map_err(|e| {
        warn!(
            "Submitted shift name and duration {} pair do not match",
            request.duration_in_mins
        );
        translate_domain_error(e)
    })?;

    let date: Date = parse_request_date(&request.date)?;
    store.insert_rota_entry(employee.id, date, shift.id)?;

    info!(employee_id = employee.id, %date, "Rota entry created");
    Ok(())
}

/// Patches the rota for `(employee_id, date)`.
///
/// The upsert state machine:
/// - no entry and a shift name: implicit create with the same payload
/// - an entry and no shift name: implicit delete
/// - an entry and a shift name: update, with the date checked against
///   the permitted window
/// - no entry and no shift name: `NotFound`
///
/// # Errors
///
/// Returns the error of whichever branch runs.
pub fn patch_rota(store: &mut Store, request: &RotaRequest) -> Result<(), ApiError> {
    let date: Date = parse_request_date(&request.date)?;
    let existing: Option<RotaEntry> = store.rota_entry_by_key(request.employee_id, date)?;

    let action: RotaPatchAction = plan_rota_patch(
        request.employee_id,
        date,
        existing.as_ref(),
        request.shift_name.as_deref(),
    )
    .map_err(translate_domain_error)?;

    match action {
        RotaPatchAction::Create => create_rota(store, request),
        RotaPatchAction::Delete => delete_rota(store, request.employee_id, date),
        RotaPatchAction::Update => {
            let shift: Shift = shift_for_rota(store, request.shift_name.as_deref())?;
            let employee: Employee = employee_for_rota(store, request.employee_id)?;
            validate_rota_date(date).map_err(|e| {
                warn!(
                    "Date {} is outside the permitted window for employee {}",
                    date, employee.id
                );
                translate_domain_error(e)
            })?;

            store.update_rota_entry_shift(employee.id, date, shift.id)?;

            info!(employee_id = employee.id, %date, "Rota entry updated");
            Ok(())
        }
    }
}

/// Deletes a rota entry by its natural key.
///
/// Reached through the PATCH state machine when the payload carries no
/// shift name.
///
/// # Errors
///
/// Returns an error if the deletion fails.
pub fn delete_rota(store: &mut Store, employee_id: i64, date: Date) -> Result<(), ApiError> {
    store.delete_rota_entry(employee_id, date)?;

    info!(employee_id, %date, "Rota entry deleted");
    Ok(())
}
