// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Kinds of entities the rota system manages.
///
/// Used in error reporting so that messages name the entity that
/// failed to resolve or collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A department.
    Department,
    /// A job title within a department.
    JobTitle,
    /// An employee.
    Employee,
    /// A shift definition.
    Shift,
    /// A rota entry (one employee, one shift, one date).
    RotaEntry,
}

impl EntityKind {
    /// Returns the display name for this entity kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Department => "Department",
            Self::JobTitle => "Job title",
            Self::Employee => "Employee",
            Self::Shift => "Shift",
            Self::RotaEntry => "Rota entry",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of dependent records blocking a department deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependentKind {
    /// Job titles still linked to the department.
    JobTitles,
    /// Employees still assigned to the department.
    Employees,
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity with the normalized name already exists.
    DuplicateName {
        /// The entity kind that collided.
        entity: EntityKind,
        /// The normalized name that is already taken.
        name: String,
    },
    /// The supplied employee id is already in use.
    DuplicateEmployeeId(i64),
    /// A referenced entity does not exist.
    NotFound {
        /// The entity kind that failed to resolve.
        entity: EntityKind,
        /// The name or id used for the lookup.
        key: String,
    },
    /// A department still has dependent records.
    DepartmentHasDependents {
        /// The department name.
        name: String,
        /// The kind of dependent blocking the deletion.
        dependent: DependentKind,
        /// How many dependents are attached.
        count: usize,
    },
    /// A job title still has employees assigned.
    JobTitleHasEmployees {
        /// The job title name.
        name: String,
        /// How many employees are assigned.
        count: usize,
    },
    /// A shift is referenced by at least one rota entry.
    ShiftInUse {
        /// The shift name.
        name: String,
    },
    /// The named job title does not belong to the named department.
    JobTitleNotInDepartment {
        /// The job title name.
        job_title: String,
        /// The department name from the request.
        department: String,
    },
    /// The submitted employee id and employee name do not match.
    EmployeeNameMismatch {
        /// The employee id from the request.
        id: i64,
        /// The employee name from the request.
        submitted: String,
    },
    /// The submitted shift name and duration do not match.
    ShiftDurationMismatch {
        /// The shift name from the request.
        name: String,
        /// The duration from the request.
        submitted: i32,
    },
    /// A field failed basic validation (empty, too long).
    InvalidName {
        /// The field that was invalid.
        field: &'static str,
        /// A human-readable description of the error.
        message: String,
    },
    /// A rota date falls outside the permitted window.
    DateOutsideWindow {
        /// The rejected date (ISO 8601).
        date: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName { entity, name } => {
                write!(
                    f,
                    "{entity} with the name '{name}' already exists. Choose a unique name"
                )
            }
            Self::DuplicateEmployeeId(id) => {
                write!(f, "Employee id {id} is already in use")
            }
            Self::NotFound { entity, key } => {
                write!(f, "{entity} '{key}' was not found")
            }
            Self::DepartmentHasDependents {
                name,
                dependent,
                count,
            } => match dependent {
                DependentKind::JobTitles => write!(
                    f,
                    "There are {count} job title(s) linked to department '{name}'. Remove the job titles before deleting"
                ),
                DependentKind::Employees => write!(
                    f,
                    "There are {count} employee(s) in department '{name}'. Remove the employees before deleting"
                ),
            },
            Self::JobTitleHasEmployees { name, count } => {
                write!(
                    f,
                    "There are {count} employee(s) assigned to job title '{name}'. Reassign them before deleting"
                )
            }
            Self::ShiftInUse { name } => {
                write!(
                    f,
                    "Shift '{name}' cannot be deleted because it is used in the rota"
                )
            }
            Self::JobTitleNotInDepartment {
                job_title,
                department,
            } => {
                write!(
                    f,
                    "Job title '{job_title}' does not exist in department '{department}'"
                )
            }
            Self::EmployeeNameMismatch { id, submitted } => {
                write!(
                    f,
                    "The submitted employee id {id} and name '{submitted}' do not match each other"
                )
            }
            Self::ShiftDurationMismatch { name, submitted } => {
                write!(
                    f,
                    "The submitted shift '{name}' and duration {submitted} do not match each other"
                )
            }
            Self::InvalidName { field, message } => {
                write!(f, "Invalid {field}: {message}")
            }
            Self::DateOutsideWindow { date } => {
                write!(f, "Date {date} is outside the permitted rota window")
            }
        }
    }
}

impl std::error::Error for DomainError {}
