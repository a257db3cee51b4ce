// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rota queries.
//!
//! Rota entries resolve through the natural key `(employee_id, date)`;
//! the surrogate `rota_id` never appears in a lookup.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::Date;
use tracing::debug;

use anglo_rota_domain::{RotaEntry, format_rota_date, parse_rota_date};

use crate::diesel_schema::rota_entries;
use crate::error::PersistenceError;

/// Diesel Queryable struct for rota rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = rota_entries)]
struct RotaRow {
    rota_id: i64,
    employee_id: i64,
    date: String,
    shift_id: i64,
}

impl RotaRow {
    /// Converts a stored row back into a domain value.
    fn into_domain(self) -> Result<RotaEntry, PersistenceError> {
        Ok(RotaEntry {
            id: self.rota_id,
            employee_id: self.employee_id,
            date: parse_rota_date(&self.date)?,
            shift_id: self.shift_id,
        })
    }
}

/// Retrieves all rota entries ordered by employee.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn all_rota_entries(conn: &mut SqliteConnection) -> Result<Vec<RotaEntry>, PersistenceError> {
    let rows: Vec<RotaRow> = rota_entries::table
        .order((
            rota_entries::employee_id.asc(),
            rota_entries::date.asc(),
        ))
        .select(RotaRow::as_select())
        .load(conn)?;

    rows.into_iter().map(RotaRow::into_domain).collect()
}

/// Retrieves a rota entry by its natural key.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no entry exists for the pair.
pub fn rota_entry_by_key(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: Date,
) -> Result<Option<RotaEntry>, PersistenceError> {
    debug!(
        "Looking up rota entry for employee {} on {}",
        employee_id, date
    );

    let row: Option<RotaRow> = rota_entries::table
        .filter(rota_entries::employee_id.eq(employee_id))
        .filter(rota_entries::date.eq(format_rota_date(date)))
        .select(RotaRow::as_select())
        .first(conn)
        .optional()?;

    row.map(RotaRow::into_domain).transpose()
}

/// Checks whether any rota entry references a shift.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn shift_in_use(conn: &mut SqliteConnection, shift_id: i64) -> Result<bool, PersistenceError> {
    let count: i64 = rota_entries::table
        .filter(rota_entries::shift_id.eq(shift_id))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}
