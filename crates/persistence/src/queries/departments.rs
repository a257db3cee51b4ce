// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use anglo_rota_domain::{Department, DepartmentName};

use crate::diesel_schema::{departments, employees, job_titles};
use crate::error::PersistenceError;

/// Diesel Queryable struct for department rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = departments)]
struct DepartmentRow {
    department_id: i64,
    name: String,
}

impl DepartmentRow {
    /// Converts a stored row back into a domain value.
    fn into_domain(self) -> Result<Department, PersistenceError> {
        Ok(Department {
            id: self.department_id,
            name: DepartmentName::new(&self.name)?,
        })
    }
}

/// Retrieves all departments ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn all_departments(conn: &mut SqliteConnection) -> Result<Vec<Department>, PersistenceError> {
    let rows: Vec<DepartmentRow> = departments::table
        .order(departments::department_id.asc())
        .select(DepartmentRow::as_select())
        .load(conn)?;

    rows.into_iter().map(DepartmentRow::into_domain).collect()
}

/// Retrieves a department by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the department is not found.
pub fn department_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Department>, PersistenceError> {
    debug!("Looking up department by id: {}", id);

    let row: Option<DepartmentRow> = departments::table
        .filter(departments::department_id.eq(id))
        .select(DepartmentRow::as_select())
        .first(conn)
        .optional()?;

    row.map(DepartmentRow::into_domain).transpose()
}

/// Retrieves a department by its normalized name.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the department is not found.
pub fn department_by_name(
    conn: &mut SqliteConnection,
    name: &DepartmentName,
) -> Result<Option<Department>, PersistenceError> {
    debug!("Looking up department by name: {}", name);

    let row: Option<DepartmentRow> = departments::table
        .filter(departments::name.eq(name.value()))
        .select(DepartmentRow::as_select())
        .first(conn)
        .optional()?;

    row.map(DepartmentRow::into_domain).transpose()
}

/// Counts the job titles linked to a department.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn job_title_count_for_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<usize, PersistenceError> {
    let count: i64 = job_titles::table
        .filter(job_titles::department_id.eq(department_id))
        .count()
        .get_result(conn)?;

    Ok(usize::try_from(count).unwrap_or(0))
}

/// Counts the employees assigned to a department.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn employee_count_for_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<usize, PersistenceError> {
    let count: i64 = employees::table
        .filter(employees::department_id.eq(department_id))
        .count()
        .get_result(conn)?;

    Ok(usize::try_from(count).unwrap_or(0))
}
