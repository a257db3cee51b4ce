// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use anglo_rota_domain::{Employee, EmployeeName};

use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Diesel Queryable struct for employee rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = employees)]
struct EmployeeRow {
    employee_id: i64,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    department_id: i64,
    job_title_id: i64,
    holiday_quota: i32,
}

impl EmployeeRow {
    /// Converts a stored row back into a domain value.
    fn into_domain(self) -> Result<Employee, PersistenceError> {
        Ok(Employee {
            id: self.employee_id,
            name: EmployeeName::new(&self.name)?,
            email: self.email,
            phone: self.phone,
            department_id: self.department_id,
            job_title_id: self.job_title_id,
            holiday_quota: self.holiday_quota,
        })
    }
}

/// Retrieves all employees ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn all_employees(conn: &mut SqliteConnection) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .order(employees::employee_id.asc())
        .select(EmployeeRow::as_select())
        .load(conn)?;

    rows.into_iter().map(EmployeeRow::into_domain).collect()
}

/// Retrieves an employee by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee is not found.
pub fn employee_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Employee>, PersistenceError> {
    debug!("Looking up employee by id: {}", id);

    let row: Option<EmployeeRow> = employees::table
        .filter(employees::employee_id.eq(id))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;

    row.map(EmployeeRow::into_domain).transpose()
}

/// Retrieves an employee by exact email address.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no employee has the email.
pub fn employee_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<Employee>, PersistenceError> {
    debug!("Looking up employee by email: {}", email);

    let row: Option<EmployeeRow> = employees::table
        .filter(employees::email.eq(email))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;

    row.map(EmployeeRow::into_domain).transpose()
}

/// Retrieves all employees assigned to a department.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn employees_by_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .filter(employees::department_id.eq(department_id))
        .order(employees::employee_id.asc())
        .select(EmployeeRow::as_select())
        .load(conn)?;

    rows.into_iter().map(EmployeeRow::into_domain).collect()
}

/// Retrieves all employees holding a job title.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn employees_by_job_title(
    conn: &mut SqliteConnection,
    job_title_id: i64,
) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .filter(employees::job_title_id.eq(job_title_id))
        .order(employees::employee_id.asc())
        .select(EmployeeRow::as_select())
        .load(conn)?;

    rows.into_iter().map(EmployeeRow::into_domain).collect()
}
