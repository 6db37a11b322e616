// ABOUTME: Field-level validation for wizard input values
// ABOUTME: Checks presence, format, and cross-field confirm constraints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::{Map, Value};

use super::date_input::CompositeDateInput;
use super::schema::{FieldKind, FieldSpec};

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 8;

// Anchored, case-insensitive; the pattern is a compile-time constant
#[allow(clippy::unwrap_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap());

/// Whether a value counts as empty for its kind
#[must_use]
pub fn is_empty(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::Checkbox => value.is_null(),
        FieldKind::CheckboxGroup => match value {
            Value::Array(items) => items.is_empty(),
            _ => true,
        },
        FieldKind::Number => match value {
            Value::Number(_) => false,
            Value::String(s) => s.trim().is_empty(),
            _ => true,
        },
        _ => match value {
            Value::String(s) => s.trim().is_empty(),
            Value::Object(_) => false,
            _ => value.is_null(),
        },
    }
}

/// Validate one field against its spec
///
/// Returns the canonical value to merge into the draft, or a message
/// describing why the input is invalid. `draft_and_input` is consulted for
/// `must_match` constraints.
pub fn check_field(
    spec: &FieldSpec,
    value: Option<&Value>,
    draft_and_input: &Map<String, Value>,
) -> Result<Value, String> {
    let value = value.filter(|v| !is_empty(spec.kind, v));

    let Some(value) = value else {
        if spec.required {
            return Err(format!("{} is required", spec.name));
        }
        return Ok(spec.kind.empty_default());
    };

    match spec.kind {
        FieldKind::Text | FieldKind::TextArea => match value {
            Value::String(s) => Ok(Value::String(s.trim().to_owned())),
            _ => Err(format!("{} must be text", spec.name)),
        },
        FieldKind::Select => match value {
            Value::String(s) => {
                let choice = s.trim();
                if spec.choices.is_empty() || spec.choices.contains(&choice) {
                    Ok(Value::String(choice.to_owned()))
                } else {
                    Err(format!("{} is not an available choice", spec.name))
                }
            }
            _ => Err(format!("{} must be text", spec.name)),
        },
        FieldKind::Email => match value {
            Value::String(s) if EMAIL_RE.is_match(s.trim()) => {
                Ok(Value::String(s.trim().to_lowercase()))
            }
            _ => Err("Invalid email address".into()),
        },
        FieldKind::Password => {
            let Value::String(s) = value else {
                return Err(format!("{} must be text", spec.name));
            };
            if s.len() < MIN_PASSWORD_LEN {
                return Err(format!(
                    "Password must be at least {MIN_PASSWORD_LEN} characters"
                ));
            }
            if let Some(other) = spec.must_match {
                let matches = draft_and_input
                    .get(other)
                    .and_then(Value::as_str)
                    .is_some_and(|o| o == s);
                if !matches {
                    return Err("Passwords do not match".into());
                }
            }
            Ok(Value::String(s.clone()))
        }
        FieldKind::Date => {
            let Value::String(s) = value else {
                return Err(format!("{} must be a date", spec.name));
            };
            match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
                Ok(d) => Ok(Value::String(d.format("%Y-%m-%d").to_string())),
                Err(_) => Err(format!("{} must be a valid date (YYYY-MM-DD)", spec.name)),
            }
        }
        FieldKind::YearMonth => match CompositeDateInput::from_value(value) {
            Some(d) => Ok(Value::String(d.format("%Y-%m-%d").to_string())),
            None => Err(format!("{} must name a valid year and month", spec.name)),
        },
        FieldKind::Number => {
            let parsed = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            match parsed {
                Some(n) if n >= 0.0 && n.is_finite() => Ok(number_value(n)),
                Some(_) => Err(format!("{} must not be negative", spec.name)),
                None => Err(format!("{} must be a number", spec.name)),
            }
        }
        FieldKind::Checkbox => match value {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            Value::String(s) => Ok(Value::Bool(s == "true" || s == "on")),
            _ => Err(format!("{} must be a boolean", spec.name)),
        },
        FieldKind::CheckboxGroup => match value {
            Value::Array(items) if items.iter().all(Value::is_string) => {
                Ok(Value::Array(items.clone()))
            }
            _ => Err(format!("{} must be a list of choices", spec.name)),
        },
    }
}

/// Build a JSON number, preserving integer representation where possible
#[must_use]
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}
