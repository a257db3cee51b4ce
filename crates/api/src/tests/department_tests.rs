// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_store, seed_department, seed_employee, seed_job_title};
use crate::request_response::{
    CreateDepartmentRequest, CreateJobTitleRequest, DepartmentResponse, JobTitleResponse,
    UpdateDepartmentRequest, UpdateJobTitleRequest,
};
use crate::{
    ApiError, create_department, create_job_title, delete_department, delete_job_title,
    list_departments, list_job_titles, update_department, update_job_title,
};
use anglo_rota_persistence::Store;

#[test]
fn test_create_department_stores_title_cased_name() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "sales team");

    let departments: Vec<DepartmentResponse> = list_departments(&mut store).unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].department_name, "Sales Team");
}

#[test]
fn test_recreating_same_normalized_name_is_duplicate() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "sales team");

    // A differently-cased spelling normalizes to the same name.
    let err: ApiError = create_department(
        &mut store,
        &CreateDepartmentRequest {
            department_name: String::from("SALES TEAM"),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::DuplicateName {
            entity: "Department",
            ..
        }
    ));
}

#[test]
fn test_create_department_rejects_empty_name() {
    let mut store: Store = create_test_store();
    let err: ApiError = create_department(
        &mut store,
        &CreateDepartmentRequest {
            department_name: String::from("  "),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::ValidationFailed { .. }));
}

#[test]
fn test_department_counts_are_live() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "Engineering");
    seed_job_title(&mut store, "Engineer", "Engineering");
    seed_employee(&mut store, 1, "John Smith", "Engineering", "Engineer");
    seed_employee(&mut store, 2, "Jane Doe", "Engineering", "Engineer");

    let departments: Vec<DepartmentResponse> = list_departments(&mut store).unwrap();
    assert_eq!(departments[0].number_of_job_titles, 1);
    assert_eq!(departments[0].number_of_employees, 2);
}

#[test]
fn test_update_department_renames_by_id() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "Engineering");
    let id: i64 = list_departments(&mut store).unwrap()[0].department_id;

    update_department(
        &mut store,
        &UpdateDepartmentRequest {
            department_id: id,
            department_name: String::from("platform"),
        },
    )
    .unwrap();

    let departments: Vec<DepartmentResponse> = list_departments(&mut store).unwrap();
    assert_eq!(departments[0].department_name, "Platform");
}

#[test]
fn test_update_missing_department_is_not_found() {
    let mut store: Store = create_test_store();
    let err: ApiError = update_department(
        &mut store,
        &UpdateDepartmentRequest {
            department_id: 99,
            department_name: String::from("Ghost"),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
}

#[test]
fn test_delete_department_with_job_titles_has_dependents() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "Engineering");
    seed_job_title(&mut store, "Engineer", "Engineering");
    let id: i64 = list_departments(&mut store).unwrap()[0].department_id;

    let err: ApiError = delete_department(&mut store, id).unwrap_err();
    assert!(matches!(err, ApiError::HasDependents { .. }));
    // The reason names the department and the count.
    let message: String = format!("{err}");
    assert!(message.contains("Engineering"));
    assert!(message.contains('1'));
}

#[test]
fn test_delete_department_without_dependents_succeeds() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "Engineering");
    let id: i64 = list_departments(&mut store).unwrap()[0].department_id;

    delete_department(&mut store, id).unwrap();
    assert!(list_departments(&mut store).unwrap().is_empty());
}

#[test]
fn test_delete_missing_department_is_not_found() {
    let mut store: Store = create_test_store();
    let err: ApiError = delete_department(&mut store, 42).unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
}

#[test]
fn test_create_job_title_requires_department() {
    let mut store: Store = create_test_store();
    let err: ApiError = create_job_title(
        &mut store,
        &CreateJobTitleRequest {
            job_title_name: String::from("Engineer"),
            in_department: String::from("Nowhere"),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::NotFound {
            entity: "Department",
            ..
        }
    ));
}

#[test]
fn test_create_job_title_rejects_duplicate_name() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "Engineering");
    seed_job_title(&mut store, "Engineer", "Engineering");

    let err: ApiError = create_job_title(
        &mut store,
        &CreateJobTitleRequest {
            job_title_name: String::from("ENGINEER"),
            in_department: String::from("Engineering"),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::DuplicateName { .. }));
}

#[test]
fn test_job_title_projection_includes_department_and_count() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "Engineering");
    seed_job_title(&mut store, "Engineer", "Engineering");
    seed_employee(&mut store, 1, "John Smith", "Engineering", "Engineer");

    let job_titles: Vec<JobTitleResponse> = list_job_titles(&mut store).unwrap();
    assert_eq!(job_titles.len(), 1);
    assert_eq!(job_titles[0].in_department, "Engineering");
    assert_eq!(job_titles[0].number_of_employees, 1);
}

#[test]
fn test_update_job_title_relinks_department() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "Engineering");
    seed_department(&mut store, "Sales");
    seed_job_title(&mut store, "Manager", "Engineering");
    let id: i64 = list_job_titles(&mut store).unwrap()[0].id;

    update_job_title(
        &mut store,
        &UpdateJobTitleRequest {
            id,
            job_title_name: String::from("Manager"),
            in_department: String::from("Sales"),
        },
    )
    .unwrap();

    let job_titles: Vec<JobTitleResponse> = list_job_titles(&mut store).unwrap();
    assert_eq!(job_titles[0].in_department, "Sales");
}

#[test]
fn test_update_job_title_with_unknown_department_is_not_found() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "Engineering");
    seed_job_title(&mut store, "Manager", "Engineering");
    let id: i64 = list_job_titles(&mut store).unwrap()[0].id;

    let err: ApiError = update_job_title(
        &mut store,
        &UpdateJobTitleRequest {
            id,
            job_title_name: String::from("Manager"),
            in_department: String::from("Nowhere"),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::NotFound {
            entity: "Department",
            ..
        }
    ));
}

#[test]
fn test_delete_job_title_with_employees_has_dependents() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "Engineering");
    seed_job_title(&mut store, "Engineer", "Engineering");
    seed_employee(&mut store, 1, "John Smith", "Engineering", "Engineer");
    let id: i64 = list_job_titles(&mut store).unwrap()[0].id;

    let err: ApiError = delete_job_title(&mut store, id).unwrap_err();
    assert!(matches!(err, ApiError::HasDependents { .. }));
}

#[test]
fn test_delete_unreferenced_job_title_succeeds() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "Engineering");
    seed_job_title(&mut store, "Engineer", "Engineering");
    let id: i64 = list_job_titles(&mut store).unwrap()[0].id;

    delete_job_title(&mut store, id).unwrap();
    assert!(list_job_titles(&mut store).unwrap().is_empty());
}
