// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job title operations.

use tracing::{info, warn};

use anglo_rota_domain::{
    Department, DepartmentName, DomainError, EntityKind, JobTitle, JobTitleName,
    validate_job_title_delete, validate_unique_job_title_name,
};
use anglo_rota_persistence::Store;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{CreateJobTitleRequest, JobTitleResponse, UpdateJobTitleRequest};

/// Resolves a job title by id or fails with `NotFound`.
fn job_title_by_id_required(store: &mut Store, id: i64) -> Result<JobTitle, ApiError> {
    store.job_title_by_id(id)?.ok_or_else(|| {
        warn!("Job title with id {} was not found", id);
        translate_domain_error(DomainError::NotFound {
            entity: EntityKind::JobTitle,
            key: id.to_string(),
        })
    })
}

/// Resolves a department by name or fails with `NotFound`.
fn department_by_name_required(
    store: &mut Store,
    raw_name: &str,
) -> Result<Department, ApiError> {
    let name: DepartmentName = DepartmentName::new(raw_name).map_err(translate_domain_error)?;
    store.department_by_name(&name)?.ok_or_else(|| {
        warn!("Department {} was not found", name);
        translate_domain_error(DomainError::NotFound {
            entity: EntityKind::Department,
            key: name.into_string(),
        })
    })
}

/// Projects a job title with its department name and derived count.
fn job_title_to_response(
    store: &mut Store,
    job_title: &JobTitle,
) -> Result<JobTitleResponse, ApiError> {
    let department: Department = store
        .department_by_id(job_title.department_id)?
        .ok_or_else(|| ApiError::Unexpected {
            message: format!(
                "Job title {} references missing department {}",
                job_title.id, job_title.department_id
            ),
        })?;
    let number_of_employees: usize = store.employee_count_for_job_title(job_title.id)?;

    Ok(JobTitleResponse {
        id: job_title.id,
        job_title_name: job_title.name.value().to_string(),
        in_department: department.name.into_string(),
        number_of_employees,
    })
}

/// Lists all job titles with live employee counts.
///
/// # Errors
///
/// Returns an error if a store query fails.
pub fn list_job_titles(store: &mut Store) -> Result<Vec<JobTitleResponse>, ApiError> {
    let job_titles: Vec<JobTitle> = store.all_job_titles()?;

    let mut responses: Vec<JobTitleResponse> = Vec::with_capacity(job_titles.len());
    for job_title in &job_titles {
        responses.push(job_title_to_response(store, job_title)?);
    }

    info!("Loaded {} job titles", responses.len());
    Ok(responses)
}

/// Creates a new job title linked to a department.
///
/// Any client-supplied id is ignored; the store assigns one.
///
/// # Errors
///
/// Returns `DuplicateName` if the job title name is taken, or
/// `NotFound` if the named department does not exist.
pub fn create_job_title(
    store: &mut Store,
    request: &CreateJobTitleRequest,
) -> Result<(), ApiError> {
    let name: JobTitleName =
        JobTitleName::new(&request.job_title_name).map_err(translate_domain_error)?;

    let existing: Option<JobTitle> = store.job_title_by_name(&name)?;
    validate_unique_job_title_name(&name, existing.as_ref()).map_err(|e| {
        warn!("Job title with name {} already exists", name);
        translate_domain_error(e)
    })?;

    let department: Department = department_by_name_required(store, &request.in_department)?;

    let job_title_id: i64 = store.insert_job_title(&name, department.id)?;

    info!(job_title_id, %name, department_id = department.id, "Job title created");
    Ok(())
}

/// Updates a job title's name and department, resolved by id.
///
/// Re-links the title to the (possibly new) department.
///
/// # Errors
///
/// Returns `NotFound` if the job title or the target department does
/// not resolve.
pub fn update_job_title(
    store: &mut Store,
    request: &UpdateJobTitleRequest,
) -> Result<(), ApiError> {
    let job_title: JobTitle = job_title_by_id_required(store, request.id)?;

    let name: JobTitleName =
        JobTitleName::new(&request.job_title_name).map_err(translate_domain_error)?;
    let department: Department = department_by_name_required(store, &request.in_department)?;

    store.update_job_title(job_title.id, &name, department.id)?;

    info!(job_title_id = job_title.id, %name, "Job title updated");
    Ok(())
}

/// Deletes a job title.
///
/// # Errors
///
/// Returns `NotFound` if no job title has the id, or `HasDependents`
/// if employees still hold it.
pub fn delete_job_title(store: &mut Store, job_title_id: i64) -> Result<(), ApiError> {
    let job_title: JobTitle = job_title_by_id_required(store, job_title_id)?;

    let employee_count: usize = store.employee_count_for_job_title(job_title_id)?;
    validate_job_title_delete(&job_title, employee_count).map_err(translate_domain_error)?;

    store.delete_job_title(job_title_id)?;

    info!(job_title_id, "Job title deleted");
    Ok(())
}
