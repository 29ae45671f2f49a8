//! Required-field checks for request parameter structs.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::value::RawValue;

const BLANK: &str = "cannot be blank";

/// Implemented by every request parameter struct.
pub trait Validate {
    /// Check required fields, collecting every violation.
    ///
    /// # Errors
    /// Returns [`ValidationErrors`] listing each offending field.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Field-name to message map, rendered in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, &'static str>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `field` as blank when the id is zero.
    pub fn require_id(&mut self, field: &'static str, value: i64) -> &mut Self {
        if value == 0 {
            self.errors.insert(field, BLANK);
        }
        self
    }

    /// Record `field` as blank when the string is empty.
    pub fn require_str(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.errors.insert(field, BLANK);
        }
        self
    }

    /// Record `field` as blank when no payload was supplied.
    pub fn require_payload(
        &mut self,
        field: &'static str,
        value: Option<&RawValue>,
    ) -> &mut Self {
        if value.is_none_or(|raw| raw.get().trim().is_empty()) {
            self.errors.insert(field, BLANK);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Names of the offending fields, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// `Ok(())` when nothing was recorded.
    ///
    /// # Errors
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, msg)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {msg}")?;
        }
        if !self.errors.is_empty() {
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
