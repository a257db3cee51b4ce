// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift operations.

use tracing::{info, warn};

use anglo_rota_domain::{
    DomainError, EntityKind, Shift, ShiftName, validate_shift_delete, validate_unique_shift_name,
};
use anglo_rota_persistence::Store;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{CreateShiftRequest, ShiftResponse, UpdateShiftRequest};

/// Longest permitted shift, in minutes (32 hours).
const MAX_SHIFT_MINUTES: i32 = 1920;

/// Resolves a shift by id or fails with `NotFound`.
fn shift_by_id_required(store: &mut Store, id: i64) -> Result<Shift, ApiError> {
    store.shift_by_id(id)?.ok_or_else(|| {
        warn!("Shift with id {} was not found", id);
        translate_domain_error(DomainError::NotFound {
            entity: EntityKind::Shift,
            key: id.to_string(),
        })
    })
}

/// Validates the duration field's permitted range.
fn validate_duration(duration_in_mins: i32) -> Result<(), ApiError> {
    if (0..=MAX_SHIFT_MINUTES).contains(&duration_in_mins) {
        Ok(())
    } else {
        Err(ApiError::ValidationFailed {
            field: String::from("durationInMins"),
            message: format!("duration must be between 0 and {MAX_SHIFT_MINUTES} minutes"),
        })
    }
}

/// Projects a shift.
fn shift_to_response(shift: &Shift) -> ShiftResponse {
    ShiftResponse {
        shift_id: shift.id,
        shift_name: shift.name.value().to_string(),
        duration_in_mins: shift.duration_minutes,
    }
}

/// Lists all shifts.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_shifts(store: &mut Store) -> Result<Vec<ShiftResponse>, ApiError> {
    let shifts: Vec<Shift> = store.all_shifts()?;

    info!("Loaded {} shifts", shifts.len());
    Ok(shifts.iter().map(shift_to_response).collect())
}

/// Creates a new shift.
///
/// Any client-supplied id is ignored; the store assigns one.
///
/// # Errors
///
/// Returns `DuplicateName` if a shift with the normalized name exists,
/// or `ValidationFailed` for a bad name or duration.
pub fn create_shift(store: &mut Store, request: &CreateShiftRequest) -> Result<(), ApiError> {
    let name: ShiftName = ShiftName::new(&request.shift_name).map_err(translate_domain_error)?;
    validate_duration(request.duration_in_mins)?;

    let existing: Option<Shift> = store.shift_by_name(&name)?;
    validate_unique_shift_name(&name, existing.as_ref()).map_err(|e| {
        warn!("Shift with name {} already exists", name);
        translate_domain_error(e)
    })?;

    let shift_id: i64 = store.insert_shift(&name, request.duration_in_mins)?;

    info!(shift_id, %name, "Shift created");
    Ok(())
}

/// Updates a shift, resolved by id.
///
/// The name-uniqueness check is strict: it rejects the target name if
/// any shift row holds it, including the row being updated.
///
/// # Errors
///
/// Returns `NotFound` if no shift has the id, or `DuplicateName` per
/// the strict policy.
pub fn update_shift(store: &mut Store, request: &UpdateShiftRequest) -> Result<(), ApiError> {
    let shift: Shift = shift_by_id_required(store, request.shift_id)?;

    let name: ShiftName = ShiftName::new(&request.shift_name).map_err(translate_domain_error)?;
    validate_duration(request.duration_in_mins)?;

    let existing: Option<Shift> = store.shift_by_name(&name)?;
    validate_unique_shift_name(&name, existing.as_ref()).map_err(|e| {
        warn!("Shift with name {} already exists", name);
        translate_domain_error(e)
    })?;

    store.update_shift(shift.id, &name, request.duration_in_mins)?;

    info!(shift_id = shift.id, %name, "Shift updated");
    Ok(())
}

/// Deletes a shift.
///
/// # Errors
///
/// Returns `NotFound` if no shift has the id, or `InUse` if any rota
/// entry references it.
pub fn delete_shift(store: &mut Store, shift_id: i64) -> Result<(), ApiError> {
    let shift: Shift = shift_by_id_required(store, shift_id)?;

    let in_use: bool = store.shift_in_use(shift_id)?;
    validate_shift_delete(&shift, in_use).map_err(|e| {
        warn!("Shift {} is used in the rota", shift.name);
        translate_domain_error(e)
    })?;

    store.delete_shift(shift_id)?;

    info!(shift_id, "Shift deleted");
    Ok(())
}
