// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job title queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use anglo_rota_domain::{JobTitle, JobTitleName};

use crate::diesel_schema::{employees, job_titles};
use crate::error::PersistenceError;

/// Diesel Queryable struct for job title rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = job_titles)]
struct JobTitleRow {
    job_title_id: i64,
    name: String,
    department_id: i64,
}

impl JobTitleRow {
    /// Converts a stored row back into a domain value.
    fn into_domain(self) -> Result<JobTitle, PersistenceError> {
        Ok(JobTitle {
            id: self.job_title_id,
            name: JobTitleName::new(&self.name)?,
            department_id: self.department_id,
        })
    }
}

/// Retrieves all job titles ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn all_job_titles(conn: &mut SqliteConnection) -> Result<Vec<JobTitle>, PersistenceError> {
    let rows: Vec<JobTitleRow> = job_titles::table
        .order(job_titles::job_title_id.asc())
        .select(JobTitleRow::as_select())
        .load(conn)?;

    rows.into_iter().map(JobTitleRow::into_domain).collect()
}

/// Retrieves a job title by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the job title is not found.
pub fn job_title_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<JobTitle>, PersistenceError> {
    debug!("Looking up job title by id: {}", id);

    let row: Option<JobTitleRow> = job_titles::table
        .filter(job_titles::job_title_id.eq(id))
        .select(JobTitleRow::as_select())
        .first(conn)
        .optional()?;

    row.map(JobTitleRow::into_domain).transpose()
}

/// Retrieves a job title by its normalized name.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the job title is not found.
pub fn job_title_by_name(
    conn: &mut SqliteConnection,
    name: &JobTitleName,
) -> Result<Option<JobTitle>, PersistenceError> {
    debug!("Looking up job title by name: {}", name);

    let row: Option<JobTitleRow> = job_titles::table
        .filter(job_titles::name.eq(name.value()))
        .select(JobTitleRow::as_select())
        .first(conn)
        .optional()?;

    row.map(JobTitleRow::into_domain).transpose()
}

/// Counts the employees holding a job title.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn employee_count_for_job_title(
    conn: &mut SqliteConnection,
    job_title_id: i64,
) -> Result<usize, PersistenceError> {
    let count: i64 = employees::table
        .filter(employees::job_title_id.eq(job_title_id))
        .count()
        .get_result(conn)?;

    Ok(usize::try_from(count).unwrap_or(0))
}
