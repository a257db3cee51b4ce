// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use anglo_rota_domain::{Shift, ShiftName};

use crate::diesel_schema::shifts;
use crate::error::PersistenceError;

/// Diesel Queryable struct for shift rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = shifts)]
struct ShiftRow {
    shift_id: i64,
    name: String,
    duration_minutes: i32,
}

impl ShiftRow {
    /// Converts a stored row back into a domain value.
    fn into_domain(self) -> Result<Shift, PersistenceError> {
        Ok(Shift {
            id: self.shift_id,
            name: ShiftName::new(&self.name)?,
            duration_minutes: self.duration_minutes,
        })
    }
}

/// Retrieves all shifts ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn all_shifts(conn: &mut SqliteConnection) -> Result<Vec<Shift>, PersistenceError> {
    let rows: Vec<ShiftRow> = shifts::table
        .order(shifts::shift_id.asc())
        .select(ShiftRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ShiftRow::into_domain).collect()
}

/// Retrieves a shift by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the shift is not found.
pub fn shift_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Shift>, PersistenceError> {
    debug!("Looking up shift by id: {}", id);

    let row: Option<ShiftRow> = shifts::table
        .filter(shifts::shift_id.eq(id))
        .select(ShiftRow::as_select())
        .first(conn)
        .optional()?;

    row.map(ShiftRow::into_domain).transpose()
}

/// Retrieves a shift by its normalized name.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the shift is not found.
pub fn shift_by_name(
    conn: &mut SqliteConnection,
    name: &ShiftName,
) -> Result<Option<Shift>, PersistenceError> {
    debug!("Looking up shift by name: {}", name);

    let row: Option<ShiftRow> = shifts::table
        .filter(shifts::name.eq(name.value()))
        .select(ShiftRow::as_select())
        .first(conn)
        .optional()?;

    row.map(ShiftRow::into_domain).transpose()
}
