// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs.
//!
//! These are the wire contract and are distinct from domain types. Field
//! names follow the camelCase JSON convention of the REST surface.

use serde::{Deserialize, Serialize};

/// Request to issue an API token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// The user's login name.
    pub user_name: String,
    /// The user's password.
    pub password: String,
}

/// Response carrying a freshly issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// The opaque bearer token.
    pub token: String,
    /// The token's expiry timestamp (ISO 8601).
    pub expiration: String,
}

/// Request to create a department.
///
/// Any client-supplied id is ignored; the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    /// The department name.
    pub department_name: String,
}

/// Request to rename a department, resolved by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    /// The department id.
    pub department_id: i64,
    /// The new department name.
    pub department_name: String,
}

/// A department as presented to clients.
///
/// The counts are derived at response time, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    /// The department id.
    pub department_id: i64,
    /// The department name.
    pub department_name: String,
    /// Live count of job titles linked to the department.
    pub number_of_job_titles: usize,
    /// Live count of employees in the department.
    pub number_of_employees: usize,
}

/// Request to create a job title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobTitleRequest {
    /// The job title name.
    pub job_title_name: String,
    /// The name of the department the title belongs to.
    pub in_department: String,
}

/// Request to update a job title, resolved by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobTitleRequest {
    /// The job title id.
    pub id: i64,
    /// The new job title name.
    pub job_title_name: String,
    /// The name of the (possibly new) department.
    pub in_department: String,
}

/// A job title as presented to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTitleResponse {
    /// The job title id.
    pub id: i64,
    /// The job title name.
    pub job_title_name: String,
    /// The name of the department the title belongs to.
    pub in_department: String,
    /// Live count of employees holding the title.
    pub number_of_employees: usize,
}

/// An employee write request. Create and update share this shape;
/// departments and job titles are referenced by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// The employee id. Client-supplied on create; resolves the record
    /// on update.
    #[serde(default)]
    pub employee_id: i64,
    /// The employee's name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// The department name.
    pub department: String,
    /// The job title name.
    pub job_title: String,
    /// Annual holiday quota in days.
    #[serde(default)]
    pub holiday_quota: i32,
}

/// An employee as presented to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    /// The employee id.
    pub employee_id: i64,
    /// The employee's name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// The department name.
    pub department: String,
    /// The job title name.
    pub job_title: String,
    /// Annual holiday quota in days.
    pub holiday_quota: i32,
}

/// Request to create a shift.
///
/// Any client-supplied id is ignored; the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShiftRequest {
    /// The shift name.
    pub shift_name: String,
    /// Shift duration in minutes.
    pub duration_in_mins: i32,
}

/// Request to update a shift, resolved by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftRequest {
    /// The shift id.
    pub shift_id: i64,
    /// The new shift name.
    pub shift_name: String,
    /// The new duration in minutes.
    pub duration_in_mins: i32,
}

/// A shift as presented to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftResponse {
    /// The shift id.
    pub shift_id: i64,
    /// The shift name.
    pub shift_name: String,
    /// Shift duration in minutes.
    pub duration_in_mins: i32,
}

/// A rota write request.
///
/// POST creates; PATCH branches between create, update and delete based
/// on the payload shape and whether an entry exists for
/// `(employeeId, date)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotaRequest {
    /// The employee id.
    pub employee_id: i64,
    /// Optional employee name; when supplied it must match the stored
    /// name.
    #[serde(default)]
    pub employee_name: Option<String>,
    /// The date of the shift (`YYYY-MM-DD`).
    pub date: String,
    /// The shift name. An absent or empty name turns a PATCH into a
    /// delete.
    #[serde(default)]
    pub shift_name: Option<String>,
    /// Optional duration; when non-zero it must match the stored shift
    /// duration.
    #[serde(default)]
    pub duration_in_mins: i32,
}

/// A rota entry as presented to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotaResponse {
    /// The employee id.
    pub employee_id: i64,
    /// The employee's name.
    pub employee_name: String,
    /// The date of the shift (`YYYY-MM-DD`).
    pub date: String,
    /// The shift name.
    pub shift_name: String,
    /// The shift duration in minutes.
    pub duration_in_mins: i32,
}
