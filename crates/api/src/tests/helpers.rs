// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for the operation tests.

use anglo_rota_persistence::Store;

use crate::request_response::{
    CreateDepartmentRequest, CreateJobTitleRequest, CreateShiftRequest, EmployeeRequest,
    RotaRequest,
};
use crate::{create_department, create_employee, create_job_title, create_rota, create_shift};

/// Creates an isolated in-memory store.
pub fn create_test_store() -> Store {
    Store::new_in_memory().unwrap()
}

/// Seeds a department through the operation layer.
pub fn seed_department(store: &mut Store, name: &str) {
    create_department(
        store,
        &CreateDepartmentRequest {
            department_name: String::from(name),
        },
    )
    .unwrap();
}

/// Seeds a job title through the operation layer.
pub fn seed_job_title(store: &mut Store, name: &str, department: &str) {
    create_job_title(
        store,
        &CreateJobTitleRequest {
            job_title_name: String::from(name),
            in_department: String::from(department),
        },
    )
    .unwrap();
}

/// Builds an employee request for the standard fixture department.
pub fn employee_request(id: i64, name: &str, department: &str, job_title: &str) -> EmployeeRequest {
    EmployeeRequest {
        employee_id: id,
        name: String::from(name),
        email: Some(format!("{id}@anglorota.test")),
        phone_number: None,
        department: String::from(department),
        job_title: String::from(job_title),
        holiday_quota: 25,
    }
}

/// Seeds an employee through the operation layer.
pub fn seed_employee(store: &mut Store, id: i64, name: &str, department: &str, job_title: &str) {
    create_employee(store, &employee_request(id, name, department, job_title)).unwrap();
}

/// Seeds a shift through the operation layer.
pub fn seed_shift(store: &mut Store, name: &str, duration_in_mins: i32) {
    create_shift(
        store,
        &CreateShiftRequest {
            shift_name: String::from(name),
            duration_in_mins,
        },
    )
    .unwrap();
}

/// Builds a rota request.
pub fn rota_request(employee_id: i64, date: &str, shift_name: Option<&str>) -> RotaRequest {
    RotaRequest {
        employee_id,
        employee_name: None,
        date: String::from(date),
        shift_name: shift_name.map(String::from),
        duration_in_mins: 0,
    }
}

/// Seeds a department, job title, employee and shift in one call.
///
/// Returns nothing; the fixture uses employee id 1, department
/// "Engineering", job title "Engineer" and shift "Early" (480 minutes).
pub fn seed_rota_fixtures(store: &mut Store) {
    seed_department(store, "Engineering");
    seed_job_title(store, "Engineer", "Engineering");
    seed_employee(store, 1, "John Smith", "Engineering", "Engineer");
    seed_shift(store, "Early", 480);
}

/// Seeds a rota entry for the standard fixture.
pub fn seed_rota_entry(store: &mut Store, employee_id: i64, date: &str, shift: &str) {
    create_rota(store, &rota_request(employee_id, date, Some(shift))).unwrap();
}
