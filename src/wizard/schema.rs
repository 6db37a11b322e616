// ABOUTME: Typed per-step field registries for the registration wizards
// ABOUTME: Declares the player and coach step sequences and field kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use serde_json::Value;

use crate::models::Role;

/// Kind of a wizard field, driving validation and normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, trimmed
    Text,
    /// Multi-line free text
    TextArea,
    /// Email address, pattern-checked
    Email,
    /// Password, minimum 8 characters
    Password,
    /// Calendar date, ISO `YYYY-MM-DD`
    Date,
    /// Year and month combined into the first day of the month
    YearMonth,
    /// Non-negative number, accepted as number or numeric string
    Number,
    /// One of a fixed set of choices
    Select,
    /// Boolean flag
    Checkbox,
    /// Ordered list of toggled choices
    CheckboxGroup,
}

impl FieldKind {
    /// Value an absent optional field is coerced to when a step is merged
    #[must_use]
    pub fn empty_default(self) -> Value {
        match self {
            Self::Checkbox => Value::Bool(false),
            Self::CheckboxGroup => Value::Array(Vec::new()),
            _ => Value::String(String::new()),
        }
    }
}

/// A single field in the registry
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Document key, camelCase
    pub name: &'static str,
    /// Field kind
    pub kind: FieldKind,
    /// Whether the field must hold a non-empty value
    pub required: bool,
    /// Write-only fields are stripped from the submitted document
    pub write_only: bool,
    /// Name of another field this one must match (confirm-password)
    pub must_match: Option<&'static str>,
    /// Accepted values for a select field; empty means unconstrained
    pub choices: &'static [&'static str],
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            kind,
            required,
            write_only: false,
            must_match: None,
            choices: &[],
        }
    }

    const fn write_only(mut self) -> Self {
        self.write_only = true;
        self
    }

    const fn matching(mut self, other: &'static str) -> Self {
        self.must_match = Some(other);
        self
    }

    const fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = choices;
        self
    }
}

/// Sports offered by the registration selects
pub const SPORT_CHOICES: &[&str] = &["football", "cricket", "basketball", "tennis", "badminton"];
/// Skill and coaching levels
pub const LEVEL_CHOICES: &[&str] = &["beginner", "intermediate", "advanced", "professional"];
/// Gender options
pub const GENDER_CHOICES: &[&str] = &["male", "female", "other"];
/// Dominant side options
pub const SIDE_CHOICES: &[&str] = &["left", "right", "both"];
/// Blood group options
pub const BLOOD_GROUP_CHOICES: &[&str] = &["a+", "a-", "b+", "b-", "o+", "o-", "ab+", "ab-"];
/// Career goal options
pub const CAREER_GOAL_CHOICES: &[&str] = &["professional", "university", "scholarship", "hobby"];

/// One step of a wizard: a title and the fields it collects
#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    /// Step title shown to the user
    pub title: &'static str,
    /// Fields validated and merged when this step advances
    pub fields: &'static [FieldSpec],
}

/// Complete wizard definition for one role
#[derive(Debug, Clone, Copy)]
pub struct WizardSchema {
    /// Role this wizard registers
    pub role: Role,
    /// Ordered steps, the last one being the review step
    pub steps: &'static [StepSpec],
}

impl WizardSchema {
    /// Number of steps
    #[must_use]
    pub const fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Index of the final (review) step
    #[must_use]
    pub const fn final_step(&self) -> usize {
        self.steps.len() - 1
    }

    /// Look up a field by name across all steps
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.name == name)
    }

    /// Schema for the given role
    #[must_use]
    pub const fn for_role(role: Role) -> &'static Self {
        match role {
            Role::Player => &PLAYER_SCHEMA,
            Role::Coach => &COACH_SCHEMA,
        }
    }
}

/// Seven-step player registration
pub static PLAYER_SCHEMA: WizardSchema = WizardSchema {
    role: Role::Player,
    steps: &[
        StepSpec {
            title: "Personal Information",
            fields: &[
                FieldSpec::new("fullName", FieldKind::Text, true),
                FieldSpec::new("email", FieldKind::Email, true),
                FieldSpec::new("password", FieldKind::Password, true).write_only(),
                FieldSpec::new("confirmPassword", FieldKind::Password, true)
                    .write_only()
                    .matching("password"),
                FieldSpec::new("dateOfBirth", FieldKind::Date, true),
                FieldSpec::new("gender", FieldKind::Select, true).choices(GENDER_CHOICES),
                FieldSpec::new("phone", FieldKind::Text, true),
                FieldSpec::new("location", FieldKind::Text, true),
                FieldSpec::new("dataConsent", FieldKind::Checkbox, true).write_only(),
            ],
        },
        StepSpec {
            title: "Athletic Background",
            fields: &[
                FieldSpec::new("primarySport", FieldKind::Select, true).choices(SPORT_CHOICES),
                FieldSpec::new("secondarySport", FieldKind::Select, false).choices(SPORT_CHOICES),
                FieldSpec::new("currentLevel", FieldKind::Select, true).choices(LEVEL_CHOICES),
                FieldSpec::new("playingExperience", FieldKind::Number, true),
                FieldSpec::new("achievements", FieldKind::TextArea, false),
                FieldSpec::new("previousTeams", FieldKind::TextArea, false),
            ],
        },
        StepSpec {
            title: "Physical Attributes",
            fields: &[
                FieldSpec::new("height", FieldKind::Number, true),
                FieldSpec::new("weight", FieldKind::Number, true),
                FieldSpec::new("dominantSide", FieldKind::Select, true).choices(SIDE_CHOICES),
                FieldSpec::new("bloodGroup", FieldKind::Select, false).choices(BLOOD_GROUP_CHOICES),
            ],
        },
        StepSpec {
            title: "Medical & Health",
            fields: &[
                FieldSpec::new("existingInjuries", FieldKind::Checkbox, false),
                FieldSpec::new("hasAsthma", FieldKind::Checkbox, false),
                FieldSpec::new("hasDiabetes", FieldKind::Checkbox, false),
                FieldSpec::new("hasHeartCondition", FieldKind::Checkbox, false),
                FieldSpec::new("otherConditions", FieldKind::TextArea, false),
                FieldSpec::new("allergies", FieldKind::Text, false),
                FieldSpec::new("emergencyContactName", FieldKind::Text, true),
                FieldSpec::new("emergencyContactRelation", FieldKind::Text, true),
                FieldSpec::new("emergencyContactPhone", FieldKind::Text, true),
            ],
        },
        StepSpec {
            title: "Career Goals",
            fields: &[
                FieldSpec::new("careerGoal", FieldKind::Select, true).choices(CAREER_GOAL_CHOICES),
                FieldSpec::new("lookingForCoach", FieldKind::Checkbox, false),
                FieldSpec::new("lookingForTeam", FieldKind::Checkbox, false),
                FieldSpec::new("availabilityPartTime", FieldKind::Checkbox, false),
                FieldSpec::new("availabilityFullTime", FieldKind::Checkbox, false),
                FieldSpec::new("availabilityFlexible", FieldKind::Checkbox, false),
            ],
        },
        StepSpec {
            title: "Social Media",
            fields: &[
                FieldSpec::new("instagram", FieldKind::Text, false),
                FieldSpec::new("youtube", FieldKind::Text, false),
                FieldSpec::new("twitter", FieldKind::Text, false),
                FieldSpec::new("linkedin", FieldKind::Text, false),
            ],
        },
        StepSpec {
            title: "Review",
            fields: &[],
        },
    ],
};

/// Seven-step coach registration
pub static COACH_SCHEMA: WizardSchema = WizardSchema {
    role: Role::Coach,
    steps: &[
        StepSpec {
            title: "Personal Details",
            fields: &[
                FieldSpec::new("fullName", FieldKind::Text, true),
                FieldSpec::new("dateOfBirth", FieldKind::Date, true),
                FieldSpec::new("gender", FieldKind::Select, true).choices(GENDER_CHOICES),
            ],
        },
        StepSpec {
            title: "Contact Information",
            fields: &[
                FieldSpec::new("phone", FieldKind::Text, true),
                FieldSpec::new("location", FieldKind::Text, true),
            ],
        },
        StepSpec {
            title: "Professional Details",
            fields: &[
                FieldSpec::new("primarySport", FieldKind::Select, true).choices(SPORT_CHOICES),
                FieldSpec::new("coachingLevel", FieldKind::Select, true).choices(LEVEL_CHOICES),
                FieldSpec::new("coachingExperience", FieldKind::Number, true),
                FieldSpec::new("coachingStart", FieldKind::YearMonth, false),
                FieldSpec::new("organization", FieldKind::Text, false),
            ],
        },
        StepSpec {
            title: "Verification",
            fields: &[
                FieldSpec::new("certifications", FieldKind::TextArea, true),
                FieldSpec::new("licenseNumber", FieldKind::Text, false),
                FieldSpec::new("idProof", FieldKind::Text, false),
                FieldSpec::new("linkedinProfile", FieldKind::Text, false),
            ],
        },
        StepSpec {
            title: "Additional Info",
            fields: &[
                FieldSpec::new("preferredAgeGroups", FieldKind::CheckboxGroup, false),
                FieldSpec::new("coachingPhilosophy", FieldKind::TextArea, false),
                FieldSpec::new("bio", FieldKind::TextArea, false),
                FieldSpec::new("availabilityPartTime", FieldKind::Checkbox, false),
                FieldSpec::new("availabilityFullTime", FieldKind::Checkbox, false),
                FieldSpec::new("availabilityFlexible", FieldKind::Checkbox, false),
            ],
        },
        StepSpec {
            title: "Authentication",
            fields: &[
                FieldSpec::new("email", FieldKind::Email, true),
                FieldSpec::new("password", FieldKind::Password, true).write_only(),
                FieldSpec::new("confirmPassword", FieldKind::Password, true)
                    .write_only()
                    .matching("password"),
            ],
        },
        StepSpec {
            title: "Review",
            fields: &[],
        },
    ],
};
