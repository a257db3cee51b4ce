// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity records for the rota system.
//!
//! Relationships are one-directional: each record carries the id of the
//! entity it belongs to, and reverse lookups ("employees in department X")
//! are computed by query rather than maintained as live back-pointers.

use crate::names::{DepartmentName, EmployeeName, JobTitleName, ShiftName};
use serde::{Deserialize, Serialize};

/// A department. Owns job titles and employees by reference only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// The store-assigned identifier.
    pub id: i64,
    /// The unique, normalized department name.
    pub name: DepartmentName,
}

/// A job title. Belongs to exactly one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTitle {
    /// The store-assigned identifier.
    pub id: i64,
    /// The unique, normalized job title name.
    pub name: JobTitleName,
    /// The department this job title belongs to.
    pub department_id: i64,
}

/// An employee. Belongs to exactly one department and one job title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The identifier; may be client-supplied at creation.
    pub id: i64,
    /// The normalized employee name.
    pub name: EmployeeName,
    /// Contact email, if known.
    pub email: Option<String>,
    /// Contact phone number, if known.
    pub phone: Option<String>,
    /// The department the employee belongs to.
    pub department_id: i64,
    /// The job title the employee holds.
    pub job_title_id: i64,
    /// Annual holiday quota in days.
    pub holiday_quota: i32,
}

/// A shift definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The store-assigned identifier.
    pub id: i64,
    /// The unique, normalized shift name.
    pub name: ShiftName,
    /// Shift duration in minutes.
    pub duration_minutes: i32,
}

/// A rota entry assigning one employee to one shift on one date.
///
/// The natural key is `(employee_id, date)`: at most one entry exists per
/// employee per date, and lookups resolve through the pair, never through
/// `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotaEntry {
    /// The store-assigned identifier (surrogate only).
    pub id: i64,
    /// The employee this entry schedules.
    pub employee_id: i64,
    /// The date of the shift.
    pub date: time::Date,
    /// The shift worked on that date.
    pub shift_id: i64,
}
