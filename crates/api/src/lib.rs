// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation layer for AngloRota.
//!
//! One function per REST operation. Each operation resolves the entities
//! a request references through the store, runs the domain
//! referential-integrity ruleset, mutates the store, and projects the
//! response. Errors are translated into the [`ApiError`] taxonomy at
//! this boundary; the server maps each kind to an HTTP status.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod departments;
mod employees;
mod error;
mod job_titles;
mod password_policy;
mod request_response;
mod rota;
mod shifts;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedUser, AuthenticationService, TokenConfig};
pub use departments::{
    create_department, delete_department, list_departments, update_department,
};
pub use employees::{
    create_employee, delete_employee, get_employee, list_employees, update_employee,
};
pub use error::{ApiError, AuthError, translate_domain_error};
pub use job_titles::{create_job_title, delete_job_title, list_job_titles, update_job_title};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    CreateDepartmentRequest, CreateJobTitleRequest, CreateShiftRequest, DepartmentResponse,
    EmployeeRequest, EmployeeResponse, JobTitleResponse, RotaRequest, RotaResponse, ShiftResponse,
    TokenRequest, TokenResponse, UpdateDepartmentRequest, UpdateJobTitleRequest,
    UpdateShiftRequest,
};
pub use rota::{create_rota, delete_rota, get_rota, list_rota, patch_rota};
pub use shifts::{create_shift, delete_shift, list_shifts, update_shift};
