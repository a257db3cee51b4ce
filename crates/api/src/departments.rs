// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department operations.

use tracing::{info, warn};

use anglo_rota_domain::{
    Department, DepartmentName, DomainError, EntityKind, validate_department_delete,
    validate_unique_department_name,
};
use anglo_rota_persistence::Store;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    CreateDepartmentRequest, DepartmentResponse, UpdateDepartmentRequest,
};

/// Resolves a department by id or fails with `NotFound`.
fn department_by_id_required(store: &mut Store, id: i64) -> Result<Department, ApiError> {
    store.department_by_id(id)?.ok_or_else(|| {
        warn!("Department with id {} was not found", id);
        translate_domain_error(DomainError::NotFound {
            entity: EntityKind::Department,
            key: id.to_string(),
        })
    })
}

/// Projects a department with its derived counts.
fn department_to_response(
    store: &mut Store,
    department: &Department,
) -> Result<DepartmentResponse, ApiError> {
    let number_of_job_titles: usize = store.job_title_count_for_department(department.id)?;
    let number_of_employees: usize = store.employee_count_for_department(department.id)?;

    Ok(DepartmentResponse {
        department_id: department.id,
        department_name: department.name.value().to_string(),
        number_of_job_titles,
        number_of_employees,
    })
}

/// Lists all departments with live dependent counts.
///
/// # Errors
///
/// Returns an error if a store query fails.
pub fn list_departments(store: &mut Store) -> Result<Vec<DepartmentResponse>, ApiError> {
    let departments: Vec<Department> = store.all_departments()?;

    let mut responses: Vec<DepartmentResponse> = Vec::with_capacity(departments.len());
    for department in &departments {
        responses.push(department_to_response(store, department)?);
    }

    info!("Loaded {} departments", responses.len());
    Ok(responses)
}

/// Creates a new department.
///
/// Any client-supplied id is ignored; the store assigns one.
///
/// # Errors
///
/// Returns `DuplicateName` if a department with the normalized name
/// already exists, or `ValidationFailed` if the name is invalid.
pub fn create_department(
    store: &mut Store,
    request: &CreateDepartmentRequest,
) -> Result<(), ApiError> {
    let name: DepartmentName =
        DepartmentName::new(&request.department_name).map_err(translate_domain_error)?;

    let existing: Option<Department> = store.department_by_name(&name)?;
    validate_unique_department_name(&name, existing.as_ref()).map_err(|e| {
        warn!("Department with name {} already exists", name);
        translate_domain_error(e)
    })?;

    let department_id: i64 = store.insert_department(&name)?;

    info!(department_id, %name, "Department created");
    Ok(())
}

/// Renames a department, resolved by id.
///
/// # Errors
///
/// Returns `NotFound` if no department has the id, or
/// `ValidationFailed` if the new name is invalid.
pub fn update_department(
    store: &mut Store,
    request: &UpdateDepartmentRequest,
) -> Result<(), ApiError> {
    let department: Department = department_by_id_required(store, request.department_id)?;
    let name: DepartmentName =
        DepartmentName::new(&request.department_name).map_err(translate_domain_error)?;

    store.rename_department(department.id, &name)?;

    info!(department_id = department.id, %name, "Department updated");
    Ok(())
}

/// Deletes a department.
///
/// # Errors
///
/// Returns `NotFound` if no department has the id, or `HasDependents`
/// if job titles or employees still reference it.
pub fn delete_department(store: &mut Store, department_id: i64) -> Result<(), ApiError> {
    let department: Department = department_by_id_required(store, department_id)?;

    let job_title_count: usize = store.job_title_count_for_department(department_id)?;
    let employee_count: usize = store.employee_count_for_department(department_id)?;
    validate_department_delete(&department, job_title_count, employee_count)
        .map_err(translate_domain_error)?;

    store.delete_department(department_id)?;

    info!(department_id, "Department deleted");
    Ok(())
}
