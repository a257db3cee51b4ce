// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rota mutations.
//!
//! Writes address entries through the natural key `(employee_id, date)`.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::Date;
use tracing::info;

use anglo_rota_domain::format_rota_date;

use crate::diesel_schema::rota_entries;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new rota entry and returns its surrogate id.
///
/// # Errors
///
/// Returns an error if the insert fails (including a violated
/// `(employee_id, date)` uniqueness constraint).
pub fn insert_rota_entry(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: Date,
    shift_id: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(rota_entries::table)
        .values((
            rota_entries::employee_id.eq(employee_id),
            rota_entries::date.eq(format_rota_date(date)),
            rota_entries::shift_id.eq(shift_id),
        ))
        .execute(conn)?;

    let rota_id: i64 = get_last_insert_rowid(conn)?;

    info!(rota_id, employee_id, %date, shift_id, "Rota entry created");
    Ok(rota_id)
}

/// Re-points an existing rota entry at a different shift.
///
/// # Errors
///
/// Returns `NotFound` if no entry exists for the natural key, or an
/// error if the update fails.
pub fn update_rota_entry_shift(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: Date,
    shift_id: i64,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(rota_entries::table)
        .filter(rota_entries::employee_id.eq(employee_id))
        .filter(rota_entries::date.eq(format_rota_date(date)))
        .set(rota_entries::shift_id.eq(shift_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Rota entry for employee {employee_id} on {date} not found"
        )));
    }

    info!(employee_id, %date, shift_id, "Rota entry updated");
    Ok(())
}

/// Deletes a rota entry by its natural key.
///
/// # Errors
///
/// Returns `NotFound` if no entry exists for the pair, or an error if
/// the delete fails.
pub fn delete_rota_entry(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: Date,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(rota_entries::table)
        .filter(rota_entries::employee_id.eq(employee_id))
        .filter(rota_entries::date.eq(format_rota_date(date)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Rota entry for employee {employee_id} on {date} not found"
        )));
    }

    info!(employee_id, %date, "Rota entry deleted");
    Ok(())
}
