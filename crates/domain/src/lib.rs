// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod names;
mod rota;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{DependentKind, DomainError, EntityKind};
pub use names::{DepartmentName, EmployeeName, JobTitleName, ShiftName, title_case};
pub use rota::{
    ROTA_WINDOW_YEAR, RotaPatchAction, format_rota_date, parse_rota_date, plan_rota_patch,
    validate_rota_date,
};
pub use types::{Department, Employee, JobTitle, RotaEntry, Shift};
pub use validation::{
    validate_department_delete, validate_employee_consistency, validate_employee_id_free,
    validate_job_title_delete, validate_rota_duration, validate_rota_employee_name,
    validate_shift_delete, validate_unique_department_name, validate_unique_job_title_name,
    validate_unique_shift_name,
};
