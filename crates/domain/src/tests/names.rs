// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DepartmentName, DomainError, EmployeeName, JobTitleName, ShiftName, title_case};

#[test]
fn test_title_case_capitalizes_each_word() {
    assert_eq!(title_case("sales team"), "Sales Team");
    assert_eq!(title_case("night shift"), "Night Shift");
}

#[test]
fn test_title_case_lowercases_word_tails() {
    // Normalized equality must be total: both spellings collapse to one form.
    assert_eq!(title_case("SALES TEAM"), "Sales Team");
    assert_eq!(title_case("sALES tEAM"), "Sales Team");
}

#[test]
fn test_title_case_preserves_empty_string() {
    assert_eq!(title_case(""), "");
}

#[test]
fn test_title_case_single_word() {
    assert_eq!(title_case("engineering"), "Engineering");
}

#[test]
fn test_department_name_normalizes_on_construction() {
    let name: DepartmentName = DepartmentName::new("sales team").unwrap();
    assert_eq!(name.value(), "Sales Team");
}

#[test]
fn test_department_name_rejects_empty() {
    let result: Result<DepartmentName, DomainError> = DepartmentName::new("   ");
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidName { field, .. } if field == "department name"
    ));
}

#[test]
fn test_department_name_rejects_over_thirty_chars() {
    let raw: String = "a".repeat(31);
    let result: Result<DepartmentName, DomainError> = DepartmentName::new(&raw);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidName { .. }
    ));
}

#[test]
fn test_department_name_accepts_exactly_thirty_chars() {
    let raw: String = "a".repeat(30);
    assert!(DepartmentName::new(&raw).is_ok());
}

#[test]
fn test_normalized_spellings_are_equal() {
    let first: DepartmentName = DepartmentName::new("sales team").unwrap();
    let second: DepartmentName = DepartmentName::new("SALES TEAM").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_job_title_name_normalizes() {
    let name: JobTitleName = JobTitleName::new("senior engineer").unwrap();
    assert_eq!(name.value(), "Senior Engineer");
}

#[test]
fn test_shift_name_rejects_over_twenty_chars() {
    let raw: String = "b".repeat(21);
    let result: Result<ShiftName, DomainError> = ShiftName::new(&raw);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidName { field, .. } if field == "shift name"
    ));
}

#[test]
fn test_shift_name_normalizes() {
    let name: ShiftName = ShiftName::new("early morning").unwrap();
    assert_eq!(name.value(), "Early Morning");
}

#[test]
fn test_employee_name_has_no_length_cap() {
    let raw: String = "very long name ".repeat(10);
    assert!(EmployeeName::new(&raw).is_ok());
}

#[test]
fn test_employee_name_rejects_empty() {
    assert!(EmployeeName::new("").is_err());
}

#[test]
fn test_employee_name_normalizes() {
    let name: EmployeeName = EmployeeName::new("john smith").unwrap();
    assert_eq!(name.value(), "John Smith");
}
