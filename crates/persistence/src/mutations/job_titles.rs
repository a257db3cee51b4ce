// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job title mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use anglo_rota_domain::JobTitleName;

use crate::diesel_schema::job_titles;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new job title linked to a department and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_job_title(
    conn: &mut SqliteConnection,
    name: &JobTitleName,
    department_id: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(job_titles::table)
        .values((
            job_titles::name.eq(name.value()),
            job_titles::department_id.eq(department_id),
        ))
        .execute(conn)?;

    let job_title_id: i64 = get_last_insert_rowid(conn)?;

    info!(job_title_id, name = %name, department_id, "Job title created");
    Ok(job_title_id)
}

/// Updates a job title's name and department link.
///
/// # Errors
///
/// Returns `NotFound` if no job title has the id, or an error if the
/// update fails.
pub fn update_job_title(
    conn: &mut SqliteConnection,
    job_title_id: i64,
    name: &JobTitleName,
    department_id: i64,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(job_titles::table)
        .filter(job_titles::job_title_id.eq(job_title_id))
        .set((
            job_titles::name.eq(name.value()),
            job_titles::department_id.eq(department_id),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Job title with id {job_title_id} not found"
        )));
    }

    info!(job_title_id, name = %name, department_id, "Job title updated");
    Ok(())
}

/// Deletes a job title.
///
/// # Errors
///
/// Returns `NotFound` if no job title has the id, or an error if the
/// delete fails.
pub fn delete_job_title(
    conn: &mut SqliteConnection,
    job_title_id: i64,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(job_titles::table)
        .filter(job_titles::job_title_id.eq(job_title_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Job title with id {job_title_id} not found"
        )));
    }

    info!(job_title_id, "Job title deleted");
    Ok(())
}
