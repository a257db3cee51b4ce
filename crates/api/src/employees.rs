// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee operations.
//!
//! Employee writes name their department and job title; both are
//! resolved by normalized name and checked for cross-field consistency
//! before any mutation.

use tracing::{info, warn};

use anglo_rota_domain::{
    Department, DepartmentName, DomainError, Employee, EmployeeName, EntityKind, JobTitle,
    JobTitleName, validate_employee_consistency, validate_employee_id_free,
};
use anglo_rota_persistence::Store;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{EmployeeRequest, EmployeeResponse};

/// Resolves an employee by id or fails with `NotFound`.
fn employee_by_id_required(store: &mut Store, id: i64) -> Result<Employee, ApiError> {
    store.employee_by_id(id)?.ok_or_else(|| {
        warn!("Employee with id {} was not found", id);
        translate_domain_error(DomainError::NotFound {
            entity: EntityKind::Employee,
            key: id.to_string(),
        })
    })
}

/// Resolves the department and job title named in a request and runs
/// the cross-field consistency check.
fn resolve_references(
    store: &mut Store,
    request: &EmployeeRequest,
) -> Result<(Department, JobTitle), ApiError> {
    let department_name: DepartmentName =
        DepartmentName::new(&request.department).map_err(translate_domain_error)?;
    let department: Department =
        store.department_by_name(&department_name)?.ok_or_else(|| {
            warn!("Department {} was not found", department_name);
            translate_domain_error(DomainError::NotFound {
                entity: EntityKind::Department,
                key: department_name.into_string(),
            })
        })?;

    let job_title_name: JobTitleName =
        JobTitleName::new(&request.job_title).map_err(translate_domain_error)?;
    let job_title: JobTitle = store.job_title_by_name(&job_title_name)?.ok_or_else(|| {
        warn!("Job title {} was not found", job_title_name);
        translate_domain_error(DomainError::NotFound {
            entity: EntityKind::JobTitle,
            key: job_title_name.into_string(),
        })
    })?;

    validate_employee_consistency(&job_title, &department).map_err(|e| {
        warn!(
            "Job title {} does not belong to department {}",
            job_title.name, department.name
        );
        translate_domain_error(e)
    })?;

    Ok((department, job_title))
}

/// Projects an employee with its department and job title names.
fn employee_to_response(
    store: &mut Store,
    employee: &Employee,
) -> Result<EmployeeResponse, ApiError> {
    let department: Department = store
        .department_by_id(employee.department_id)?
        .ok_or_else(|| ApiError::Unexpected {
            message: format!(
                "Employee {} references missing department {}",
                employee.id, employee.department_id
            ),
        })?;
    let job_title: JobTitle =
        store
            .job_title_by_id(employee.job_title_id)?
            .ok_or_else(|| ApiError::Unexpected {
                message: format!(
                    "Employee {} references missing job title {}",
                    employee.id, employee.job_title_id
                ),
            })?;

    Ok(EmployeeResponse {
        employee_id: employee.id,
        name: employee.name.value().to_string(),
        email: employee.email.clone(),
        phone_number: employee.phone.clone(),
        department: department.name.into_string(),
        job_title: job_title.name.into_string(),
        holiday_quota: employee.holiday_quota,
    })
}

/// Lists all employees.
///
/// # Errors
///
/// Returns an error if a store query fails.
pub fn list_employees(store: &mut Store) -> Result<Vec<EmployeeResponse>, ApiError> {
    let employees: Vec<Employee> = store.all_employees()?;

    let mut responses: Vec<EmployeeResponse> = Vec::with_capacity(employees.len());
    for employee in &employees {
        responses.push(employee_to_response(store, employee)?);
    }

    Ok(responses)
}

/// Reads a single employee by id.
///
/// # Errors
///
/// Returns `NotFound` if no employee has the id.
pub fn get_employee(store: &mut Store, employee_id: i64) -> Result<EmployeeResponse, ApiError> {
    let employee: Employee = employee_by_id_required(store, employee_id)?;
    employee_to_response(store, &employee)
}

/// Creates a new employee.
///
/// The id may be client-supplied; it is checked for duplication first.
/// The named department and job title must both resolve and agree.
///
/// # Errors
///
/// Returns `DuplicateId`, `NotFound` or `Inconsistent` per the
/// integrity ruleset.
pub fn create_employee(
    store: &mut Store,
    request: &EmployeeRequest,
) -> Result<EmployeeResponse, ApiError> {
    let existing: Option<Employee> = store.employee_by_id(request.employee_id)?;
    validate_employee_id_free(request.employee_id, existing.as_ref()).map_err(|e| {
        warn!("Employee id {} is already in use", request.employee_id);
        translate_domain_error(e)
    })?;

    let (department, job_title) = resolve_references(store, request)?;

    let name: EmployeeName = EmployeeName::new(&request.name).map_err(translate_domain_error)?;
    let employee: Employee = Employee {
        id: request.employee_id,
        name,
        email: request.email.clone(),
        phone: request.phone_number.clone(),
        department_id: department.id,
        job_title_id: job_title.id,
        holiday_quota: request.holiday_quota,
    };

    let employee_id: i64 = store.insert_employee(&employee)?;
    let created: Employee = employee_by_id_required(store, employee_id)?;

    info!(employee_id, name = %created.name, "Employee created");
    employee_to_response(store, &created)
}

/// Updates an employee, resolved by id, merging fields from the request.
///
/// # Errors
///
/// Returns `NotFound` or `Inconsistent` per the integrity ruleset.
pub fn update_employee(store: &mut Store, request: &EmployeeRequest) -> Result<(), ApiError> {
    let existing: Employee = employee_by_id_required(store, request.employee_id)?;

    let (department, job_title) = resolve_references(store, request)?;

    let name: EmployeeName = EmployeeName::new(&request.name).map_err(translate_domain_error)?;
    let updated: Employee = Employee {
        id: existing.id,
        name,
        email: request.email.clone(),
        phone: request.phone_number.clone(),
        department_id: department.id,
        job_title_id: job_title.id,
        holiday_quota: request.holiday_quota,
    };

    store.update_employee(&updated)?;

    info!(employee_id = existing.id, "Employee updated");
    Ok(())
}

/// Deletes an employee. Employees have no delete-blocking dependents.
///
/// # Errors
///
/// Returns `NotFound` if no employee has the id.
pub fn delete_employee(store: &mut Store, employee_id: i64) -> Result<(), ApiError> {
    employee_by_id_required(store, employee_id)?;

    store.delete_employee(employee_id)?;

    info!(employee_id, "Employee deleted");
    Ok(())
}
