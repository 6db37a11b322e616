// ABOUTME: Wizard session engine: stepwise validation, draft merging, submit
// ABOUTME: Advance validates only the current step; retreat never validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Role;

use super::schema::{FieldKind, WizardSchema};
use super::validate::check_field;

/// Failures surfaced by wizard operations
#[derive(Debug, Error)]
pub enum WizardError {
    /// One or more fields failed validation
    #[error("validation failed for {} field(s)", fields.len())]
    Validation {
        /// Per-field messages
        fields: BTreeMap<String, String>,
    },
    /// Submit attempted before the review step
    #[error("submit is only allowed from the review step (currently at step {step})")]
    NotAtReview {
        /// Step the session is currently on
        step: usize,
    },
    /// Referenced field is not in the registry
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// Toggle applied to a field that is not a checkbox group
    #[error("{0} is not a checkbox group")]
    NotAToggleField(String),
}

impl From<WizardError> for AppError {
    fn from(e: WizardError) -> Self {
        match e {
            WizardError::Validation { fields } => Self::validation(fields),
            WizardError::NotAtReview { .. } => Self::conflict(e.to_string()),
            WizardError::UnknownField(_) | WizardError::NotAToggleField(_) => {
                Self::invalid_input(e.to_string())
            }
        }
    }
}

/// Credentials and document produced by a successful submit
#[derive(Debug, Clone)]
pub struct RegistrationDocument {
    /// Role the wizard registered
    pub role: Role,
    /// Normalized email address, the document key
    pub email: String,
    /// Plain password, to be hashed before storage
    pub password: String,
    /// Normalized document fields, write-only fields stripped
    pub fields: Map<String, Value>,
}

/// Serializable view of a wizard session for the state endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    /// Session id
    pub id: Uuid,
    /// Role being registered
    pub role: Role,
    /// Current step index
    pub step: usize,
    /// Title of the current step
    pub step_title: &'static str,
    /// Total number of steps
    pub step_count: usize,
    /// Draft with write-only values withheld
    pub draft: Map<String, Value>,
    /// Field errors from the last failed advance or submit
    pub errors: BTreeMap<String, String>,
}

/// A resumable registration in progress
#[derive(Debug, Clone)]
pub struct WizardSession {
    id: Uuid,
    schema: &'static WizardSchema,
    step: usize,
    draft: Map<String, Value>,
    errors: BTreeMap<String, String>,
}

impl WizardSession {
    /// Start a fresh session for the given role
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            schema: WizardSchema::for_role(role),
            step: 0,
            draft: Map::new(),
            errors: BTreeMap::new(),
        }
    }

    /// Session id
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Role this session registers
    #[must_use]
    pub const fn role(&self) -> Role {
        self.schema.role
    }

    /// Current step index
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Accumulated draft values
    #[must_use]
    pub const fn draft(&self) -> &Map<String, Value> {
        &self.draft
    }

    /// Validate the current step against `input` and move forward
    ///
    /// Only the current step's registry fields are considered. On failure
    /// the per-field messages are recorded, the draft is left untouched,
    /// and the step does not change. On success the validated values are
    /// merged into the draft (absent optional fields coerced to their
    /// kind's empty default) and the step advances, clamped to the review
    /// step.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::Validation`] when any field fails.
    pub fn advance(&mut self, input: &Map<String, Value>) -> Result<(), WizardError> {
        let fields = self.schema.steps[self.step].fields;

        // confirm-password checks see input overlaid on the draft
        let mut context = self.draft.clone();
        for (k, v) in input {
            context.insert(k.clone(), v.clone());
        }

        let mut merged = Vec::with_capacity(fields.len());
        let mut errors = BTreeMap::new();
        for spec in fields {
            let value = input.get(spec.name).or_else(|| self.draft.get(spec.name));
            match check_field(spec, value, &context) {
                Ok(canonical) => merged.push((spec.name, canonical)),
                Err(message) => {
                    errors.insert(spec.name.to_owned(), message);
                }
            }
        }

        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(WizardError::Validation { fields: errors });
        }

        for (name, value) in merged {
            self.draft.insert(name.to_owned(), value);
        }
        self.errors.clear();
        self.step = (self.step + 1).min(self.schema.final_step());
        Ok(())
    }

    /// Move back one step without validating; the draft is untouched
    pub fn retreat(&mut self) {
        self.step = self.step.saturating_sub(1);
        self.errors.clear();
    }

    /// Toggle a choice inside a checkbox-group field
    ///
    /// Removes the choice when present, appends it when absent; list order
    /// is preserved, so the operation is its own inverse.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is unknown or not a checkbox group.
    pub fn toggle(&mut self, field: &str, choice: &str) -> Result<(), WizardError> {
        let spec = self
            .schema
            .field(field)
            .ok_or_else(|| WizardError::UnknownField(field.to_owned()))?;
        if spec.kind != FieldKind::CheckboxGroup {
            return Err(WizardError::NotAToggleField(field.to_owned()));
        }

        let entry = self
            .draft
            .entry(field.to_owned())
            .or_insert_with(|| Value::Array(Vec::new()));
        let Value::Array(items) = entry else {
            *entry = Value::Array(Vec::new());
            return self.toggle(field, choice);
        };

        if items.iter().any(|v| v.as_str() == Some(choice)) {
            items.retain(|v| v.as_str() != Some(choice));
        } else {
            items.push(Value::String(choice.to_owned()));
        }
        Ok(())
    }

    /// Finalize the wizard and produce the registration document
    ///
    /// Only legal on the review step. The whole draft is re-validated
    /// against the registry; normalization then strips write-only fields
    /// and emits canonical values (ISO dates, real numbers and booleans,
    /// lists defaulted to empty).
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotAtReview`] before the final step and
    /// [`WizardError::Validation`] when any required field is missing or
    /// invalid.
    pub fn submit(&mut self) -> Result<RegistrationDocument, WizardError> {
        if self.step != self.schema.final_step() {
            return Err(WizardError::NotAtReview { step: self.step });
        }

        let mut document = Map::new();
        let mut password = String::new();
        let mut errors = BTreeMap::new();
        for step in self.schema.steps {
            for spec in step.fields {
                match check_field(spec, self.draft.get(spec.name), &self.draft) {
                    Ok(canonical) => {
                        if spec.name == "password" {
                            password = canonical.as_str().unwrap_or_default().to_owned();
                        }
                        if !spec.write_only {
                            document.insert(spec.name.to_owned(), canonical);
                        }
                    }
                    Err(message) => {
                        errors.insert(spec.name.to_owned(), message);
                    }
                }
            }
        }

        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(WizardError::Validation { fields: errors });
        }

        let email = document
            .get("email")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        Ok(RegistrationDocument {
            role: self.schema.role,
            email,
            password,
            fields: document,
        })
    }

    /// Snapshot of the session for the state endpoint
    #[must_use]
    pub fn state(&self) -> WizardState {
        let mut draft = self.draft.clone();
        for step in self.schema.steps {
            for spec in step.fields {
                if spec.write_only {
                    draft.remove(spec.name);
                }
            }
        }
        WizardState {
            id: self.id,
            role: self.schema.role,
            step: self.step,
            step_title: self.schema.steps[self.step].title,
            step_count: self.schema.step_count(),
            draft,
            errors: self.errors.clone(),
        }
    }
}
