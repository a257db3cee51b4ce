// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for AngloRota.
//!
//! This crate owns the canonical records for departments, job titles,
//! employees, shifts and rota entries, plus the user and session tables
//! backing token authentication. It is built on Diesel over `SQLite`.
//!
//! The store exposes lookup-by-id/name and persistence operations only;
//! all allow/deny decisions live in the domain crate and are made by the
//! api crate before a mutation is issued.
//!
//! ## Testing
//!
//! Tests run against unique in-memory databases. Each call to
//! [`Store::new_in_memory`] receives a fresh database via an atomic
//! counter, ensuring deterministic isolation without time-based
//! collisions.

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

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;

use anglo_rota_domain::{
    Department, DepartmentName, Employee, JobTitle, JobTitleName, RotaEntry, Shift, ShiftName,
};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{SessionRecord, UserRecord};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The entity store.
///
/// Owns a single `SQLite` connection; the server wraps the store in a
/// mutex and holds it for the duration of each request's store
/// round-trips.
pub struct Store {
    conn: SqliteConnection,
}

impl Store {
    /// Creates a store backed by an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Unique shared in-memory database name per call so tests are isolated.
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_rota_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a store backed by a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ---- Departments ----

    /// Retrieves all departments ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn all_departments(&mut self) -> Result<Vec<Department>, PersistenceError> {
        queries::departments::all_departments(&mut self.conn)
    }

    /// Retrieves a department by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn department_by_id(&mut self, id: i64) -> Result<Option<Department>, PersistenceError> {
        queries::departments::department_by_id(&mut self.conn, id)
    }

    /// Retrieves a department by its normalized name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn department_by_name(
        &mut self,
        name: &DepartmentName,
    ) -> Result<Option<Department>, PersistenceError> {
        queries::departments::department_by_name(&mut self.conn, name)
    }

    /// Counts the job titles linked to a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn job_title_count_for_department(
        &mut self,
        department_id: i64,
    ) -> Result<usize, PersistenceError> {
        queries::departments::job_title_count_for_department(&mut self.conn, department_id)
    }

    /// Counts the employees assigned to a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employee_count_for_department(
        &mut self,
        department_id: i64,
    ) -> Result<usize, PersistenceError> {
        queries::departments::employee_count_for_department(&mut self.conn, department_id)
    }

    /// Inserts a new department and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_department(&mut self, name: &DepartmentName) -> Result<i64, PersistenceError> {
        mutations::departments::insert_department(&mut self.conn, name)
    }

    /// Renames a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn rename_department(
        &mut self,
        department_id: i64,
        name: &DepartmentName,
    ) -> Result<(), PersistenceError> {
        mutations::departments::rename_department(&mut self.conn, department_id, name)
    }

    /// Deletes a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_department(&mut self, department_id: i64) -> Result<(), PersistenceError> {
        mutations::departments::delete_department(&mut self.conn, department_id)
    }

    // ---- Job titles ----

    /// Retrieves all job titles ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn all_job_titles(&mut self) -> Result<Vec<JobTitle>, PersistenceError> {
        queries::job_titles::all_job_titles(&mut self.conn)
    }

    /// Retrieves a job title by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn job_title_by_id(&mut self, id: i64) -> Result<Option<JobTitle>, PersistenceError> {
        queries::job_titles::job_title_by_id(&mut self.conn, id)
    }

    /// Retrieves a job title by its normalized name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn job_title_by_name(
        &mut self,
        name: &JobTitleName,
    ) -> Result<Option<JobTitle>, PersistenceError> {
        queries::job_titles::job_title_by_name(&mut self.conn, name)
    }

    /// Counts the employees holding a job title.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employee_count_for_job_title(
        &mut self,
        job_title_id: i64,
    ) -> Result<usize, PersistenceError> {
        queries::job_titles::employee_count_for_job_title(&mut self.conn, job_title_id)
    }

    /// Inserts a new job title linked to a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_job_title(
        &mut self,
        name: &JobTitleName,
        department_id: i64,
    ) -> Result<i64, PersistenceError> {
        mutations::job_titles::insert_job_title(&mut self.conn, name, department_id)
    }

    /// Updates a job title's name and department link.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_job_title(
        &mut self,
        job_title_id: i64,
        name: &JobTitleName,
        department_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::job_titles::update_job_title(&mut self.conn, job_title_id, name, department_id)
    }

    /// Deletes a job title.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_job_title(&mut self, job_title_id: i64) -> Result<(), PersistenceError> {
        mutations::job_titles::delete_job_title(&mut self.conn, job_title_id)
    }

    // ---- Employees ----

    /// Retrieves all employees ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn all_employees(&mut self) -> Result<Vec<Employee>, PersistenceError> {
        queries::employees::all_employees(&mut self.conn)
    }

    /// Retrieves an employee by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employee_by_id(&mut self, id: i64) -> Result<Option<Employee>, PersistenceError> {
        queries::employees::employee_by_id(&mut self.conn, id)
    }

    /// Retrieves an employee by exact email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employee_by_email(&mut self, email: &str) -> Result<Option<Employee>, PersistenceError> {
        queries::employees::employee_by_email(&mut self.conn, email)
    }

    /// Retrieves all employees assigned to a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employees_by_department(
        &mut self,
        department_id: i64,
    ) -> Result<Vec<Employee>, PersistenceError> {
        queries::employees::employees_by_department(&mut self.conn, department_id)
    }

    /// Retrieves all employees holding a job title.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employees_by_job_title(
        &mut self,
        job_title_id: i64,
    ) -> Result<Vec<Employee>, PersistenceError> {
        queries::employees::employees_by_job_title(&mut self.conn, job_title_id)
    }

    /// Inserts a new employee, honoring a client-supplied id if positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_employee(&mut self, employee: &Employee) -> Result<i64, PersistenceError> {
        mutations::employees::insert_employee(&mut self.conn, employee)
    }

    /// Updates an employee record field-by-field.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_employee(&mut self, employee: &Employee) -> Result<(), PersistenceError> {
        mutations::employees::update_employee(&mut self.conn, employee)
    }

    /// Deletes an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_employee(&mut self, employee_id: i64) -> Result<(), PersistenceError> {
        mutations::employees::delete_employee(&mut self.conn, employee_id)
    }

    // ---- Shifts ----

    /// Retrieves all shifts ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn all_shifts(&mut self) -> Result<Vec<Shift>, PersistenceError> {
        queries::shifts::all_shifts(&mut self.conn)
    }

    /// Retrieves a shift by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn shift_by_id(&mut self, id: i64) -> Result<Option<Shift>, PersistenceError> {
        queries::shifts::shift_by_id(&mut self.conn, id)
    }

    /// Retrieves a shift by its normalized name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn shift_by_name(&mut self, name: &ShiftName) -> Result<Option<Shift>, PersistenceError> {
        queries::shifts::shift_by_name(&mut self.conn, name)
    }

    /// Inserts a new shift and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_shift(
        &mut self,
        name: &ShiftName,
        duration_minutes: i32,
    ) -> Result<i64, PersistenceError> {
        mutations::shifts::insert_shift(&mut self.conn, name, duration_minutes)
    }

    /// Updates a shift's name and duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_shift(
        &mut self,
        shift_id: i64,
        name: &ShiftName,
        duration_minutes: i32,
    ) -> Result<(), PersistenceError> {
        mutations::shifts::update_shift(&mut self.conn, shift_id, name, duration_minutes)
    }

    /// Deletes a shift.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_shift(&mut self, shift_id: i64) -> Result<(), PersistenceError> {
        mutations::shifts::delete_shift(&mut self.conn, shift_id)
    }

    // ---- Rota ----

    /// Retrieves all rota entries ordered by employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn all_rota_entries(&mut self) -> Result<Vec<RotaEntry>, PersistenceError> {
        queries::rota::all_rota_entries(&mut self.conn)
    }

    /// Retrieves a rota entry by its natural key `(employee_id, date)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn rota_entry_by_key(
        &mut self,
        employee_id: i64,
        date: Date,
    ) -> Result<Option<RotaEntry>, PersistenceError> {
        queries::rota::rota_entry_by_key(&mut self.conn, employee_id, date)
    }

    /// Checks whether any rota entry references a shift.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn shift_in_use(&mut self, shift_id: i64) -> Result<bool, PersistenceError> {
        queries::rota::shift_in_use(&mut self.conn, shift_id)
    }

    /// Inserts a new rota entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_rota_entry(
        &mut self,
        employee_id: i64,
        date: Date,
        shift_id: i64,
    ) -> Result<i64, PersistenceError> {
        mutations::rota::insert_rota_entry(&mut self.conn, employee_id, date, shift_id)
    }

    /// Re-points an existing rota entry at a different shift.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_rota_entry_shift(
        &mut self,
        employee_id: i64,
        date: Date,
        shift_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::rota::update_rota_entry_shift(&mut self.conn, employee_id, date, shift_id)
    }

    /// Deletes a rota entry by its natural key.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_rota_entry(
        &mut self,
        employee_id: i64,
        date: Date,
    ) -> Result<(), PersistenceError> {
        mutations::rota::delete_rota_entry(&mut self.conn, employee_id, date)
    }

    // ---- Users and sessions ----

    /// Retrieves a user by login name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn user_by_name(&mut self, user_name: &str) -> Result<Option<UserRecord>, PersistenceError> {
        queries::users::user_by_name(&mut self.conn, user_name)
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn user_by_id(&mut self, user_id: i64) -> Result<Option<UserRecord>, PersistenceError> {
        queries::users::user_by_id(&mut self.conn, user_id)
    }

    /// Creates a new API user with a bcrypt-hashed password.
    ///
    /// # Errors
    ///
    /// Returns an error if the user cannot be created.
    pub fn create_user(&mut self, user_name: &str, password: &str) -> Result<i64, PersistenceError> {
        mutations::users::create_user(&mut self.conn, user_name, password)
    }

    /// Updates the last login timestamp for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_last_login(&mut self, user_id: i64) -> Result<(), PersistenceError> {
        mutations::users::update_last_login(&mut self.conn, user_id)
    }

    /// Creates a new session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_session(
        &mut self,
        session_token: &str,
        user_id: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::users::create_session(&mut self.conn, session_token, user_id, expires_at)
    }

    /// Retrieves a session by its token.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionRecord>, PersistenceError> {
        queries::users::session_by_token(&mut self.conn, session_token)
    }

    /// Deletes a session by token (logout).
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::users::delete_session(&mut self.conn, session_token)
    }

    /// Deletes all expired sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_expired_sessions(&mut self) -> Result<usize, PersistenceError> {
        mutations::users::delete_expired_sessions(&mut self.conn)
    }
}
