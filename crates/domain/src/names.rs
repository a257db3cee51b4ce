// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Name value types with write-time normalization.
//!
//! Department, job title, shift and employee names are title-cased at
//! construction and never stored un-normalized. Uniqueness comparisons
//! therefore operate on normalized values only.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Title-cases a string: the first letter of each space-separated word is
/// upper-cased and the remaining letters are lower-cased.
///
/// `"sales team"` and `"SALES TEAM"` both normalize to `"Sales Team"`,
/// which is what makes normalized equality total.
#[must_use]
pub fn title_case(source: &str) -> String {
    let mut destination: String = String::with_capacity(source.len());
    let mut upper_next: bool = true;

    for letter in source.chars() {
        if upper_next {
            destination.extend(letter.to_uppercase());
        } else {
            destination.extend(letter.to_lowercase());
        }
        upper_next = letter == ' ';
    }

    destination
}

/// Validates and normalizes a raw name.
///
/// Rejects empty/whitespace-only input and input longer than `max_len`
/// characters, then applies [`title_case`].
fn normalized_name(
    field: &'static str,
    raw: &str,
    max_len: usize,
) -> Result<String, DomainError> {
    if raw.trim().is_empty() {
        return Err(DomainError::InvalidName {
            field,
            message: String::from("name cannot be empty"),
        });
    }

    let char_count: usize = raw.chars().count();
    if char_count > max_len {
        return Err(DomainError::InvalidName {
            field,
            message: format!("name cannot be longer than {max_len} characters"),
        });
    }

    Ok(title_case(raw))
}

/// A department name, unique across the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartmentName {
    /// The normalized name value.
    value: String,
}

impl DepartmentName {
    /// Maximum length in characters.
    pub const MAX_LEN: usize = 30;

    /// Creates a new `DepartmentName`, normalizing the input.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or longer than
    /// [`Self::MAX_LEN`] characters.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        Ok(Self {
            value: normalized_name("department name", raw, Self::MAX_LEN)?,
        })
    }

    /// Returns the normalized name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the name, returning the normalized `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

impl std::fmt::Display for DepartmentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A job title name, unique across the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobTitleName {
    /// The normalized name value.
    value: String,
}

impl JobTitleName {
    /// Maximum length in characters.
    pub const MAX_LEN: usize = 30;

    /// Creates a new `JobTitleName`, normalizing the input.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or longer than
    /// [`Self::MAX_LEN`] characters.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        Ok(Self {
            value: normalized_name("job title name", raw, Self::MAX_LEN)?,
        })
    }

    /// Returns the normalized name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the name, returning the normalized `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

impl std::fmt::Display for JobTitleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A shift name, unique across the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftName {
    /// The normalized name value.
    value: String,
}

impl ShiftName {
    /// Maximum length in characters.
    pub const MAX_LEN: usize = 20;

    /// Creates a new `ShiftName`, normalizing the input.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or longer than
    /// [`Self::MAX_LEN`] characters.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        Ok(Self {
            value: normalized_name("shift name", raw, Self::MAX_LEN)?,
        })
    }

    /// Returns the normalized name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the name, returning the normalized `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

impl std::fmt::Display for ShiftName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An employee's display name.
///
/// Employee names are title-cased like the other names but are not a
/// uniqueness key and carry no length cap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeName {
    /// The normalized name value.
    value: String,
}

impl EmployeeName {
    /// Creates a new `EmployeeName`, normalizing the input.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::InvalidName {
                field: "employee name",
                message: String::from("name cannot be empty"),
            });
        }
        Ok(Self {
            value: title_case(raw),
        })
    }

    /// Returns the normalized name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the name, returning the normalized `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

impl std::fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
