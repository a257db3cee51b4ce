// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_store, seed_department, seed_employee, seed_job_title};
use crate::{PersistenceError, Store};
use anglo_rota_domain::{Department, DepartmentName};

#[test]
fn test_insert_department_assigns_sequential_ids() {
    let mut store: Store = create_test_store();

    let first: i64 = seed_department(&mut store, "Engineering");
    let second: i64 = seed_department(&mut store, "Sales");

    assert!(first > 0);
    assert_eq!(second, first + 1);
}

#[test]
fn test_department_stored_name_is_normalized() {
    let mut store: Store = create_test_store();
    let id: i64 = seed_department(&mut store, "sales team");

    let department: Department = store.department_by_id(id).unwrap().unwrap();
    assert_eq!(department.name.value(), "Sales Team");
}

#[test]
fn test_department_by_name_resolves_normalized_spelling() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "sales team");

    // Lookup by a differently-cased spelling normalizes to the same key.
    let name: DepartmentName = DepartmentName::new("SALES TEAM").unwrap();
    let found: Option<Department> = store.department_by_name(&name).unwrap();
    assert!(found.is_some());
}

#[test]
fn test_department_by_name_misses_unknown() {
    let mut store: Store = create_test_store();
    let name: DepartmentName = DepartmentName::new("Nowhere").unwrap();
    assert!(store.department_by_name(&name).unwrap().is_none());
}

#[test]
fn test_all_departments_ordered_by_id() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "Engineering");
    seed_department(&mut store, "Sales");

    let all: Vec<Department> = store.all_departments().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name.value(), "Engineering");
    assert_eq!(all[1].name.value(), "Sales");
}

#[test]
fn test_dependent_counts_reflect_links() {
    let mut store: Store = create_test_store();
    let department_id: i64 = seed_department(&mut store, "Engineering");
    let job_title_id: i64 = seed_job_title(&mut store, "Engineer", department_id);
    seed_employee(&mut store, 1, "John Smith", department_id, job_title_id);
    seed_employee(&mut store, 2, "Jane Doe", department_id, job_title_id);

    assert_eq!(store.job_title_count_for_department(department_id).unwrap(), 1);
    assert_eq!(store.employee_count_for_department(department_id).unwrap(), 2);
    assert_eq!(store.employee_count_for_job_title(job_title_id).unwrap(), 2);
}

#[test]
fn test_rename_department_persists() {
    let mut store: Store = create_test_store();
    let id: i64 = seed_department(&mut store, "Engineering");

    store
        .rename_department(id, &DepartmentName::new("platform team").unwrap())
        .unwrap();

    let department: Department = store.department_by_id(id).unwrap().unwrap();
    assert_eq!(department.name.value(), "Platform Team");
}

#[test]
fn test_rename_missing_department_is_not_found() {
    let mut store: Store = create_test_store();
    let err: PersistenceError = store
        .rename_department(99, &DepartmentName::new("Ghost").unwrap())
        .unwrap_err();
    assert!(matches!(err, PersistenceError::NotFound(_)));
}

#[test]
fn test_delete_department_removes_record() {
    let mut store: Store = create_test_store();
    let id: i64 = seed_department(&mut store, "Engineering");

    store.delete_department(id).unwrap();
    assert!(store.department_by_id(id).unwrap().is_none());
}

#[test]
fn test_duplicate_department_name_violates_unique_constraint() {
    let mut store: Store = create_test_store();
    seed_department(&mut store, "Engineering");

    let result: Result<i64, PersistenceError> =
        store.insert_department(&DepartmentName::new("Engineering").unwrap());
    assert!(result.is_err());
}
