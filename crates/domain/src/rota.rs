// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The rota upsert state machine.
//!
//! A PATCH against the rota resolves the existing entry by its natural key
//! `(employee_id, date)` and then branches between create, update and
//! delete based on the shape of the payload. The branching is pure and
//! isolated here so the precedence rules are testable without a store.

use crate::error::{DomainError, EntityKind};
use crate::types::RotaEntry;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// The only calendar year rota entries may be scheduled in.
///
/// The permitted window is fixed; dates outside it are rejected on the
/// rota update path.
pub const ROTA_WINDOW_YEAR: i32 = 2019;

/// Wire format for rota dates.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The action a rota PATCH resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotaPatchAction {
    /// No entry exists for the key: delegate to the create path with the
    /// same payload.
    Create,
    /// An entry exists and a shift name was supplied: merge and persist.
    Update,
    /// An entry exists and no shift name was supplied: remove the entry.
    Delete,
}

/// Decides which branch a rota PATCH takes.
///
/// Precedence when the entry is missing *and* the shift name is empty:
/// the not-found branch wins, and the operation fails rather than
/// attempting to delete a record that was never resolved.
///
/// # Arguments
///
/// * `employee_id` - The employee id from the request (for error context)
/// * `date` - The date from the request (for error context)
/// * `existing` - The entry resolved by `(employee_id, date)`, if any
/// * `shift_name` - The shift name from the payload, if any
///
/// # Errors
///
/// Returns `NotFound` if no entry exists and no shift name was supplied.
pub fn plan_rota_patch(
    employee_id: i64,
    date: Date,
    existing: Option<&RotaEntry>,
    shift_name: Option<&str>,
) -> Result<RotaPatchAction, DomainError> {
    let shift_supplied: bool = shift_name.is_some_and(|name| !name.trim().is_empty());

    match (existing, shift_supplied) {
        (None, true) => Ok(RotaPatchAction::Create),
        (None, false) => Err(DomainError::NotFound {
            entity: EntityKind::RotaEntry,
            key: format!("employee {employee_id} on {date}"),
        }),
        (Some(_), false) => Ok(RotaPatchAction::Delete),
        (Some(_), true) => Ok(RotaPatchAction::Update),
    }
}

/// Checks that a rota date falls inside the permitted window.
///
/// # Errors
///
/// Returns `DateOutsideWindow` if the date is not in [`ROTA_WINDOW_YEAR`].
pub fn validate_rota_date(date: Date) -> Result<(), DomainError> {
    if date.year() == ROTA_WINDOW_YEAR {
        Ok(())
    } else {
        Err(DomainError::DateOutsideWindow {
            date: date.to_string(),
        })
    }
}

/// Parses a rota date from its `YYYY-MM-DD` wire form.
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_rota_date(raw: &str) -> Result<Date, DomainError> {
    Date::parse(raw, DATE_FORMAT).map_err(|e| DomainError::InvalidName {
        field: "date",
        message: format!("'{raw}' is not a valid date: {e}"),
    })
}

/// Formats a rota date into its `YYYY-MM-DD` wire form.
#[must_use]
pub fn format_rota_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
