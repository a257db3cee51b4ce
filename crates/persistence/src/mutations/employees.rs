// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use anglo_rota_domain::Employee;

use crate::diesel_schema::employees;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new employee and returns its id.
///
/// An employee id may be client-supplied; a non-positive id means
/// "unassigned" and the store picks the next rowid.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_employee(
    conn: &mut SqliteConnection,
    employee: &Employee,
) -> Result<i64, PersistenceError> {
    if employee.id > 0 {
        diesel::insert_into(employees::table)
            .values((
                employees::employee_id.eq(employee.id),
                employees::name.eq(employee.name.value()),
                employees::email.eq(employee.email.as_deref()),
                employees::phone.eq(employee.phone.as_deref()),
                employees::department_id.eq(employee.department_id),
                employees::job_title_id.eq(employee.job_title_id),
                employees::holiday_quota.eq(employee.holiday_quota),
            ))
            .execute(conn)?;

        info!(employee_id = employee.id, name = %employee.name, "Employee created");
        return Ok(employee.id);
    }

    diesel::insert_into(employees::table)
        .values((
            employees::name.eq(employee.name.value()),
            employees::email.eq(employee.email.as_deref()),
            employees::phone.eq(employee.phone.as_deref()),
            employees::department_id.eq(employee.department_id),
            employees::job_title_id.eq(employee.job_title_id),
            employees::holiday_quota.eq(employee.holiday_quota),
        ))
        .execute(conn)?;

    let employee_id: i64 = get_last_insert_rowid(conn)?;

    info!(employee_id, name = %employee.name, "Employee created");
    Ok(employee_id)
}

/// Updates an employee record field-by-field.
///
/// # Errors
///
/// Returns `NotFound` if no employee has the id, or an error if the
/// update fails.
pub fn update_employee(
    conn: &mut SqliteConnection,
    employee: &Employee,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(employees::table)
        .filter(employees::employee_id.eq(employee.id))
        .set((
            employees::name.eq(employee.name.value()),
            employees::email.eq(employee.email.as_deref()),
            employees::phone.eq(employee.phone.as_deref()),
            employees::department_id.eq(employee.department_id),
            employees::job_title_id.eq(employee.job_title_id),
            employees::holiday_quota.eq(employee.holiday_quota),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Employee with id {} not found",
            employee.id
        )));
    }

    info!(employee_id = employee.id, "Employee updated");
    Ok(())
}

/// Deletes an employee.
///
/// # Errors
///
/// Returns `NotFound` if no employee has the id, or an error if the
/// delete fails.
pub fn delete_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(employees::table)
        .filter(employees::employee_id.eq(employee_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Employee with id {employee_id} not found"
        )));
    }

    info!(employee_id, "Employee deleted");
    Ok(())
}
