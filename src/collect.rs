//! Input collection: turns raw form text into typed request fields.
//!
//! Field-level helpers return [`AppError::Validation`] when a value cannot be
//! used, so a submit handler can `?` its way through a form and stop before
//! anything is dispatched. Repeated entry blocks go through [`EntryDraft`],
//! which drops incomplete blocks instead of failing the whole form.

use crate::error::{AppError, Result};
use crate::models::{CategoryAmounts, GoalInput};

/// Parses a required decimal field.
pub fn parse_number(label: &str, raw: &str) -> Result<f64> {
    parse_finite(raw).ok_or_else(|| AppError::validation(format!("{} must be a number", label)))
}

/// Parses a required whole-number field. A decimal entry keeps its integer
/// part (`"6.7"` → `6`).
pub fn parse_integer(label: &str, raw: &str) -> Result<i64> {
    parse_integer_prefix(raw)
        .ok_or_else(|| AppError::validation(format!("{} must be a whole number", label)))
}

/// Parses an optional decimal field; blank input becomes `None`.
pub fn parse_optional_number(label: &str, raw: &str) -> Result<Option<f64>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_number(label, raw).map(Some)
}

/// Splits a comma-separated series, silently dropping tokens that are not
/// numbers.
pub fn parse_series(raw: &str) -> Vec<f64> {
    raw.split(',').filter_map(parse_finite).collect()
}

/// Rejects a collected list shorter than `min`.
pub fn require_at_least<T>(items: Vec<T>, min: usize, message: &str) -> Result<Vec<T>> {
    if items.len() < min {
        return Err(AppError::validation(message));
    }
    Ok(items)
}

pub(crate) fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub(crate) fn parse_integer_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let digits_start = usize::from(trimmed.starts_with(['-', '+']));
    let digits_len = trimmed[digits_start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..digits_start + digits_len].parse().ok()
}

/// One repeated block of a form (an investment row, a goal row, ...).
pub trait EntryDraft {
    type Entry;

    /// Returns the well-formed entry, or `None` when a required field is
    /// missing or not numeric.
    fn parse(&self) -> Option<Self::Entry>;
}

/// Collects every well-formed block in order and enforces a minimum count.
pub fn collect_entries<D: EntryDraft>(
    drafts: &[D],
    min: usize,
    message: &str,
) -> Result<Vec<D::Entry>> {
    let entries: Vec<D::Entry> = drafts.iter().filter_map(EntryDraft::parse).collect();
    if entries.len() < drafts.len() {
        log::debug!(
            "skipped {} incomplete entries of {}",
            drafts.len() - entries.len(),
            drafts.len()
        );
    }
    require_at_least(entries, min, message)
}

/// Raw text of the four fixed category inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub savings: String,
    pub investments: String,
    pub personal: String,
    pub misc: String,
}

impl CategoryDraft {
    pub fn get(&self, category: &str) -> &str {
        match category {
            "savings" => &self.savings,
            "investments" => &self.investments,
            "personal" => &self.personal,
            _ => &self.misc,
        }
    }

    pub fn set(&mut self, category: &str, value: String) {
        match category {
            "savings" => self.savings = value,
            "investments" => self.investments = value,
            "personal" => self.personal = value,
            _ => self.misc = value,
        }
    }

    /// `group` prefixes the field name in validation messages.
    pub fn collect(&self, group: &str) -> Result<CategoryAmounts> {
        let field = |category: &str| format!("{} {}", group, category);
        Ok(CategoryAmounts {
            savings: parse_number(&field("savings"), &self.savings)?,
            investments: parse_number(&field("investments"), &self.investments)?,
            personal: parse_number(&field("personal"), &self.personal)?,
            misc: parse_number(&field("misc"), &self.misc)?,
        })
    }
}

/// One goal block. Expected return starts at `"0"`.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: String,
    pub timeline_months: String,
    pub expected_return: String,
}

impl Default for GoalDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            target_amount: String::new(),
            timeline_months: String::new(),
            expected_return: "0".to_string(),
        }
    }
}

impl EntryDraft for GoalDraft {
    type Entry = GoalInput;

    fn parse(&self) -> Option<GoalInput> {
        if self.name.is_empty() {
            return None;
        }
        Some(GoalInput {
            name: self.name.clone(),
            target_amount: parse_finite(&self.target_amount)?,
            timeline_months: parse_integer_prefix(&self.timeline_months)?,
            expected_return: parse_finite(&self.expected_return).unwrap_or(0.0),
        })
    }
}
