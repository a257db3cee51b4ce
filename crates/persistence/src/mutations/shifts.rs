// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use anglo_rota_domain::ShiftName;

use crate::diesel_schema::shifts;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new shift and returns its assigned id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_shift(
    conn: &mut SqliteConnection,
    name: &ShiftName,
    duration_minutes: i32,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(shifts::table)
        .values((
            shifts::name.eq(name.value()),
            shifts::duration_minutes.eq(duration_minutes),
        ))
        .execute(conn)?;

    let shift_id: i64 = get_last_insert_rowid(conn)?;

    info!(shift_id, name = %name, duration_minutes, "Shift created");
    Ok(shift_id)
}

/// Updates a shift's name and duration.
///
/// # Errors
///
/// Returns `NotFound` if no shift has the id, or an error if the update
/// fails.
pub fn update_shift(
    conn: &mut SqliteConnection,
    shift_id: i64,
    name: &ShiftName,
    duration_minutes: i32,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(shifts::table)
        .filter(shifts::shift_id.eq(shift_id))
        .set((
            shifts::name.eq(name.value()),
            shifts::duration_minutes.eq(duration_minutes),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Shift with id {shift_id} not found"
        )));
    }

    info!(shift_id, name = %name, "Shift updated");
    Ok(())
}

/// Deletes a shift.
///
/// # Errors
///
/// Returns `NotFound` if no shift has the id, or an error if the delete
/// fails.
pub fn delete_shift(conn: &mut SqliteConnection, shift_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(shifts::table)
        .filter(shifts::shift_id.eq(shift_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Shift with id {shift_id} not found"
        )));
    }

    info!(shift_id, "Shift deleted");
    Ok(())
}
