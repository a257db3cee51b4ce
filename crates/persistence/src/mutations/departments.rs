// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use anglo_rota_domain::DepartmentName;

use crate::diesel_schema::departments;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new department and returns its assigned id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_department(
    conn: &mut SqliteConnection,
    name: &DepartmentName,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(departments::table)
        .values(departments::name.eq(name.value()))
        .execute(conn)?;

    let department_id: i64 = get_last_insert_rowid(conn)?;

    info!(department_id, name = %name, "Department created");
    Ok(department_id)
}

/// Renames a department.
///
/// # Errors
///
/// Returns `NotFound` if no department has the id, or an error if the
/// update fails.
pub fn rename_department(
    conn: &mut SqliteConnection,
    department_id: i64,
    name: &DepartmentName,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(departments::table)
        .filter(departments::department_id.eq(department_id))
        .set(departments::name.eq(name.value()))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Department with id {department_id} not found"
        )));
    }

    info!(department_id, name = %name, "Department renamed");
    Ok(())
}

/// Deletes a department.
///
/// # Errors
///
/// Returns `NotFound` if no department has the id, or an error if the
/// delete fails.
pub fn delete_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(departments::table)
        .filter(departments::department_id.eq(department_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Department with id {department_id} not found"
        )));
    }

    info!(department_id, "Department deleted");
    Ok(())
}
