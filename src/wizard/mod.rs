// ABOUTME: Multi-step registration wizard: schemas, validation, and engine
// ABOUTME: Sessions validate per step, merge drafts, and normalize on submit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

/// Composite year-month date input
pub mod date_input;
/// Session engine for advance, retreat, toggle, and submit
pub mod engine;
/// In-memory session registry with idle-time eviction
pub mod registry;
/// Per-step field registries for both roles
pub mod schema;
/// Field-level validation rules
pub mod validate;

pub use date_input::CompositeDateInput;
pub use engine::{RegistrationDocument, WizardError, WizardSession, WizardState};
pub use registry::{WizardRegistry, WIZARD_SESSION_TTL};
pub use schema::{FieldKind, FieldSpec, StepSpec, WizardSchema, COACH_SCHEMA, PLAYER_SCHEMA};
pub use validate::MIN_PASSWORD_LEN;
