// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The referential-integrity ruleset.
//!
//! Pure decision functions invoked before mutating operations. Callers
//! resolve referenced entities through the store and pass them in; these
//! functions only decide allow/deny. All uniqueness and existence checks
//! are name-based for departments, job titles and shifts, operating on
//! normalized names.

use crate::error::{DependentKind, DomainError, EntityKind};
use crate::names::{DepartmentName, JobTitleName, ShiftName, title_case};
use crate::types::{Department, Employee, JobTitle, Shift};

/// Validates that a department name is not already taken.
///
/// # Arguments
///
/// * `name` - The normalized name of the department to create
/// * `existing` - The result of looking the name up in the store
///
/// # Errors
///
/// Returns `DuplicateName` if a department with the normalized name
/// already exists.
pub fn validate_unique_department_name(
    name: &DepartmentName,
    existing: Option<&Department>,
) -> Result<(), DomainError> {
    if existing.is_some() {
        return Err(DomainError::DuplicateName {
            entity: EntityKind::Department,
            name: name.value().to_string(),
        });
    }
    Ok(())
}

/// Validates that a job title name is not already taken.
///
/// # Errors
///
/// Returns `DuplicateName` if a job title with the normalized name
/// already exists.
pub fn validate_unique_job_title_name(
    name: &JobTitleName,
    existing: Option<&JobTitle>,
) -> Result<(), DomainError> {
    if existing.is_some() {
        return Err(DomainError::DuplicateName {
            entity: EntityKind::JobTitle,
            name: name.value().to_string(),
        });
    }
    Ok(())
}

/// Validates that a shift name is not already taken.
///
/// Used by both create and update. The check is strict on update: a shift
/// being renamed to a name any shift row holds, including its own current
/// name, is rejected.
///
/// # Errors
///
/// Returns `DuplicateName` if a shift with the normalized name exists.
pub fn validate_unique_shift_name(
    name: &ShiftName,
    existing: Option<&Shift>,
) -> Result<(), DomainError> {
    if existing.is_some() {
        return Err(DomainError::DuplicateName {
            entity: EntityKind::Shift,
            name: name.value().to_string(),
        });
    }
    Ok(())
}

/// Validates that a department may be deleted.
///
/// # Arguments
///
/// * `department` - The department to delete
/// * `job_title_count` - Live count of job titles linked to it
/// * `employee_count` - Live count of employees assigned to it
///
/// # Errors
///
/// Returns `DepartmentHasDependents` naming the blocking dependent kind
/// and its count if either count is non-zero. Job titles are reported
/// first, matching the order the checks run in.
pub fn validate_department_delete(
    department: &Department,
    job_title_count: usize,
    employee_count: usize,
) -> Result<(), DomainError> {
    if job_title_count > 0 {
        return Err(DomainError::DepartmentHasDependents {
            name: department.name.value().to_string(),
            dependent: DependentKind::JobTitles,
            count: job_title_count,
        });
    }

    if employee_count > 0 {
        return Err(DomainError::DepartmentHasDependents {
            name: department.name.value().to_string(),
            dependent: DependentKind::Employees,
            count: employee_count,
        });
    }

    Ok(())
}

/// Validates that a job title may be deleted.
///
/// # Errors
///
/// Returns `JobTitleHasEmployees` if any employee still holds the title.
pub fn validate_job_title_delete(
    job_title: &JobTitle,
    employee_count: usize,
) -> Result<(), DomainError> {
    if employee_count > 0 {
        return Err(DomainError::JobTitleHasEmployees {
            name: job_title.name.value().to_string(),
            count: employee_count,
        });
    }
    Ok(())
}

/// Validates that a shift may be deleted.
///
/// # Errors
///
/// Returns `ShiftInUse` if any rota entry references the shift.
pub fn validate_shift_delete(shift: &Shift, in_use: bool) -> Result<(), DomainError> {
    if in_use {
        return Err(DomainError::ShiftInUse {
            name: shift.name.value().to_string(),
        });
    }
    Ok(())
}

/// Validates that a client-supplied employee id is free.
///
/// # Errors
///
/// Returns `DuplicateEmployeeId` if an employee with the id exists.
pub fn validate_employee_id_free(
    id: i64,
    existing: Option<&Employee>,
) -> Result<(), DomainError> {
    if existing.is_some() {
        return Err(DomainError::DuplicateEmployeeId(id));
    }
    Ok(())
}

/// The cross-field consistency check for employee and rota writes.
///
/// A request that names both a department and a job title is only valid
/// if the resolved job title actually belongs to the resolved department.
///
/// # Errors
///
/// Returns `JobTitleNotInDepartment` on mismatch.
pub fn validate_employee_consistency(
    job_title: &JobTitle,
    department: &Department,
) -> Result<(), DomainError> {
    if job_title.department_id != department.id {
        return Err(DomainError::JobTitleNotInDepartment {
            job_title: job_title.name.value().to_string(),
            department: department.name.value().to_string(),
        });
    }
    Ok(())
}

/// Validates a rota payload's optional employee name against the stored
/// employee.
///
/// An absent or empty name passes; a supplied name must normalize to the
/// stored (already-normalized) name.
///
/// # Errors
///
/// Returns `EmployeeNameMismatch` if the supplied name does not match.
pub fn validate_rota_employee_name(
    submitted: Option<&str>,
    employee: &Employee,
) -> Result<(), DomainError> {
    match submitted {
        None => Ok(()),
        Some(raw) if raw.trim().is_empty() => Ok(()),
        Some(raw) => {
            if title_case(raw) == employee.name.value() {
                Ok(())
            } else {
                Err(DomainError::EmployeeNameMismatch {
                    id: employee.id,
                    submitted: raw.to_string(),
                })
            }
        }
    }
}

/// Validates a rota payload's optional duration against the stored shift.
///
/// A zero duration means "not supplied" and passes; a non-zero duration
/// must equal the stored shift duration.
///
/// # Errors
///
/// Returns `ShiftDurationMismatch` if the supplied duration differs.
pub fn validate_rota_duration(submitted: i32, shift: &Shift) -> Result<(), DomainError> {
    if submitted != 0 && submitted != shift.duration_minutes {
        return Err(DomainError::ShiftDurationMismatch {
            name: shift.name.value().to_string(),
            submitted,
        });
    }
    Ok(())
}
