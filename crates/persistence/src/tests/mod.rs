// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used)]

mod department_tests;
mod session_tests;
mod shift_tests;

use crate::Store;
use anglo_rota_domain::{
    DepartmentName, Employee, EmployeeName, JobTitleName, ShiftName, parse_rota_date,
};

/// Creates an isolated in-memory store.
fn create_test_store() -> Store {
    Store::new_in_memory().unwrap()
}

/// Seeds a department and returns its id.
fn seed_department(store: &mut Store, name: &str) -> i64 {
    store
        .insert_department(&DepartmentName::new(name).unwrap())
        .unwrap()
}

/// Seeds a job title in a department and returns its id.
fn seed_job_title(store: &mut Store, name: &str, department_id: i64) -> i64 {
    store
        .insert_job_title(&JobTitleName::new(name).unwrap(), department_id)
        .unwrap()
}

/// Seeds an employee and returns its id.
fn seed_employee(store: &mut Store, id: i64, name: &str, department_id: i64, job_title_id: i64) -> i64 {
    let employee: Employee = Employee {
        id,
        name: EmployeeName::new(name).unwrap(),
        email: Some(format!("{}@anglorota.test", name.to_lowercase().replace(' ', "."))),
        phone: None,
        department_id,
        job_title_id,
        holiday_quota: 25,
    };
    store.insert_employee(&employee).unwrap()
}

/// Seeds a shift and returns its id.
fn seed_shift(store: &mut Store, name: &str, duration_minutes: i32) -> i64 {
    store
        .insert_shift(&ShiftName::new(name).unwrap(), duration_minutes)
        .unwrap()
}

/// Parses a test date.
fn test_date(raw: &str) -> time::Date {
    parse_rota_date(raw).unwrap()
}
