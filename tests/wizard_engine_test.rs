// ABOUTME: Unit tests for the registration wizard engine
// ABOUTME: Covers step clamping, draft safety, toggling, and submit normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

// Test files: allow missing_docs (rustc lint), unwrap, and panic (valid in tests)
#![allow(missing_docs, clippy::unwrap_used, clippy::panic)]

use std::time::Duration;

use rosterhub::models::Role;
use rosterhub::wizard::{
    CompositeDateInput, WizardError, WizardRegistry, WizardSession, COACH_SCHEMA, PLAYER_SCHEMA,
};
use serde_json::{json, Map, Value};

fn obj(value: Value) -> Map<String, Value> {
    let Value::Object(map) = value else {
        panic!("expected object");
    };
    map
}

fn player_step_one() -> Map<String, Value> {
    obj(json!({
        "fullName": "Dana Silva",
        "email": "dana@example.com",
        "password": "secret-pass-9",
        "confirmPassword": "secret-pass-9",
        "dateOfBirth": "2004-03-15",
        "gender": "female",
        "phone": "+1-555-0100",
        "location": "Lisbon",
        "dataConsent": true
    }))
}

fn coach_inputs() -> Vec<Map<String, Value>> {
    vec![
        obj(json!({
            "fullName": "Marco Reis",
            "dateOfBirth": "1980-07-01",
            "gender": "male"
        })),
        obj(json!({ "phone": "+1-555-0200", "location": "Porto" })),
        obj(json!({
            "primarySport": "football",
            "coachingLevel": "advanced",
            "coachingExperience": "12",
            "coachingStart": { "year": 2011, "month": 9 }
        })),
        obj(json!({
            "certifications": "UEFA B",
            "idProof": "https://docs.example.com/marco-id",
            "linkedinProfile": "https://linkedin.com/in/marco-reis"
        })),
        obj(json!({
            "preferredAgeGroups": ["u16"],
            "bio": "Youth focus",
            "coachingPhilosophy": "Technique before tactics",
            "availabilityPartTime": true
        })),
        obj(json!({
            "email": "marco@example.com",
            "password": "coach-pass-1",
            "confirmPassword": "coach-pass-1"
        })),
    ]
}

#[test]
fn advance_moves_one_step_on_valid_input() {
    let mut session = WizardSession::new(Role::Player);
    assert_eq!(session.step(), 0);
    session.advance(&player_step_one()).unwrap();
    assert_eq!(session.step(), 1);
    assert_eq!(
        session.draft().get("fullName"),
        Some(&json!("Dana Silva"))
    );
}

#[test]
fn failed_advance_keeps_step_and_draft() {
    let mut session = WizardSession::new(Role::Player);
    session.advance(&player_step_one()).unwrap();
    let before = session.draft().clone();

    // Step two requires primarySport and a non-negative experience
    let err = session
        .advance(&obj(json!({ "playingExperience": "-3" })))
        .unwrap_err();
    let WizardError::Validation { fields } = err else {
        panic!("expected validation error");
    };
    assert!(fields.contains_key("primarySport"));
    assert!(fields.contains_key("currentLevel"));
    assert!(fields.contains_key("playingExperience"));

    assert_eq!(session.step(), 1);
    assert_eq!(session.draft(), &before);
}

#[test]
fn retreat_clamps_at_zero_and_never_validates() {
    let mut session = WizardSession::new(Role::Player);
    session.advance(&player_step_one()).unwrap();
    let draft = session.draft().clone();

    session.retreat();
    assert_eq!(session.step(), 0);
    session.retreat();
    assert_eq!(session.step(), 0);
    assert_eq!(session.draft(), &draft);
}

#[test]
fn advance_clamps_at_review_step() {
    let mut session = WizardSession::new(Role::Coach);
    for input in coach_inputs() {
        session.advance(&input).unwrap();
    }
    assert_eq!(session.step(), COACH_SCHEMA.final_step());
    // Review step has no fields; advancing again stays put
    session.advance(&Map::new()).unwrap();
    assert_eq!(session.step(), COACH_SCHEMA.final_step());
}

#[test]
fn mismatched_confirm_password_is_rejected() {
    let mut session = WizardSession::new(Role::Player);
    let mut input = player_step_one();
    input.insert("confirmPassword".into(), json!("different-pass"));
    let err = session.advance(&input).unwrap_err();
    let WizardError::Validation { fields } = err else {
        panic!("expected validation error");
    };
    assert_eq!(
        fields.get("confirmPassword").map(String::as_str),
        Some("Passwords do not match")
    );
}

#[test]
fn absent_optional_fields_take_empty_defaults() {
    let mut session = WizardSession::new(Role::Coach);
    for input in coach_inputs().into_iter().take(4) {
        session.advance(&input).unwrap();
    }
    // Additional Info advanced with nothing filled in
    session.advance(&Map::new()).unwrap();
    assert_eq!(session.draft().get("preferredAgeGroups"), Some(&json!([])));
    assert_eq!(session.draft().get("bio"), Some(&json!("")));
    assert_eq!(session.draft().get("availabilityPartTime"), Some(&json!(false)));
}

#[test]
fn select_values_outside_the_choice_list_are_rejected() {
    let mut session = WizardSession::new(Role::Player);
    session.advance(&player_step_one()).unwrap();

    let err = session
        .advance(&obj(json!({
            "primarySport": "volleyball",
            "currentLevel": "intermediate",
            "playingExperience": "6"
        })))
        .unwrap_err();
    let WizardError::Validation { fields } = err else {
        panic!("expected validation error");
    };
    assert_eq!(
        fields.get("primarySport").map(String::as_str),
        Some("primarySport is not an available choice")
    );
    assert_eq!(session.step(), 1);
    assert!(!session.draft().contains_key("primarySport"));

    // The listed sport goes through fine
    session
        .advance(&obj(json!({
            "primarySport": "football",
            "currentLevel": "intermediate",
            "playingExperience": "6"
        })))
        .unwrap();
    assert_eq!(session.step(), 2);
}

#[test]
fn optional_background_fields_survive_to_the_document() {
    let mut session = WizardSession::new(Role::Player);
    session.advance(&player_step_one()).unwrap();
    session
        .advance(&obj(json!({
            "primarySport": "football",
            "secondarySport": "cricket",
            "currentLevel": "intermediate",
            "playingExperience": "6"
        })))
        .unwrap();
    session
        .advance(&obj(json!({
            "height": 181,
            "weight": 74,
            "dominantSide": "left",
            "bloodGroup": "o+"
        })))
        .unwrap();
    session
        .advance(&obj(json!({
            "existingInjuries": true,
            "allergies": "pollen",
            "emergencyContactName": "Rui Silva",
            "emergencyContactRelation": "father",
            "emergencyContactPhone": "+1-555-0101"
        })))
        .unwrap();
    session
        .advance(&obj(json!({ "careerGoal": "professional", "lookingForCoach": true })))
        .unwrap();
    session
        .advance(&obj(json!({ "linkedin": "https://linkedin.com/in/dana-silva" })))
        .unwrap();

    let document = session.submit().unwrap();
    assert_eq!(document.fields.get("secondarySport"), Some(&json!("cricket")));
    assert_eq!(document.fields.get("bloodGroup"), Some(&json!("o+")));
    assert_eq!(document.fields.get("existingInjuries"), Some(&json!(true)));
    assert_eq!(document.fields.get("allergies"), Some(&json!("pollen")));
    assert_eq!(
        document.fields.get("linkedin"),
        Some(&json!("https://linkedin.com/in/dana-silva"))
    );
}

#[test]
fn idle_sessions_are_evicted() {
    let expired = WizardRegistry::new(Duration::ZERO);
    let session = WizardSession::new(Role::Player);
    let id = session.id();
    expired.insert(session);

    // Past the idle TTL the session is unreachable and dropped on touch
    assert!(expired.with_session(id, |s| s.state()).is_none());
    assert!(expired.is_empty());

    let live = WizardRegistry::new(Duration::from_secs(3600));
    let session = WizardSession::new(Role::Coach);
    let id = session.id();
    live.insert(session);
    assert!(live.with_session(id, |s| s.state()).is_some());
    assert_eq!(live.len(), 1);
}

#[test]
fn sweep_drops_only_stale_sessions() {
    let registry = WizardRegistry::new(Duration::ZERO);
    registry.insert(WizardSession::new(Role::Player));
    registry.insert(WizardSession::new(Role::Coach));
    assert_eq!(registry.len(), 2);
    registry.sweep();
    assert!(registry.is_empty());

    let keeper = WizardRegistry::new(Duration::from_secs(3600));
    keeper.insert(WizardSession::new(Role::Player));
    keeper.sweep();
    assert_eq!(keeper.len(), 1);
}

#[test]
fn toggle_appends_and_removes_preserving_order() {
    let mut session = WizardSession::new(Role::Coach);
    session.toggle("preferredAgeGroups", "u14").unwrap();
    session.toggle("preferredAgeGroups", "u16").unwrap();
    session.toggle("preferredAgeGroups", "u18").unwrap();
    assert_eq!(
        session.draft().get("preferredAgeGroups"),
        Some(&json!(["u14", "u16", "u18"]))
    );

    session.toggle("preferredAgeGroups", "u16").unwrap();
    assert_eq!(
        session.draft().get("preferredAgeGroups"),
        Some(&json!(["u14", "u18"]))
    );

    // Double toggle is the identity
    session.toggle("preferredAgeGroups", "u12").unwrap();
    session.toggle("preferredAgeGroups", "u12").unwrap();
    assert_eq!(
        session.draft().get("preferredAgeGroups"),
        Some(&json!(["u14", "u18"]))
    );
}

#[test]
fn toggle_rejects_non_group_fields() {
    let mut session = WizardSession::new(Role::Coach);
    assert!(matches!(
        session.toggle("bio", "anything"),
        Err(WizardError::NotAToggleField(_))
    ));
    assert!(matches!(
        session.toggle("nonexistent", "anything"),
        Err(WizardError::UnknownField(_))
    ));
}

#[test]
fn submit_requires_review_step() {
    let mut session = WizardSession::new(Role::Player);
    session.advance(&player_step_one()).unwrap();
    assert!(matches!(
        session.submit(),
        Err(WizardError::NotAtReview { step: 1 })
    ));
}

#[test]
fn submit_normalizes_and_strips_write_only_fields() {
    let mut session = WizardSession::new(Role::Coach);
    for input in coach_inputs() {
        session.advance(&input).unwrap();
    }
    let document = session.submit().unwrap();

    assert_eq!(document.role, Role::Coach);
    assert_eq!(document.email, "marco@example.com");
    assert_eq!(document.password, "coach-pass-1");
    // Credentials never reach the document
    assert!(!document.fields.contains_key("password"));
    assert!(!document.fields.contains_key("confirmPassword"));
    // Numeric string coerced to a real number
    assert_eq!(document.fields.get("coachingExperience"), Some(&json!(12)));
    // Year-month input became the first of the month
    assert_eq!(document.fields.get("coachingStart"), Some(&json!("2011-09-01")));
    assert_eq!(document.fields.get("dateOfBirth"), Some(&json!("1980-07-01")));
    assert_eq!(document.fields.get("preferredAgeGroups"), Some(&json!(["u16"])));
    assert_eq!(
        document.fields.get("idProof"),
        Some(&json!("https://docs.example.com/marco-id"))
    );
    assert_eq!(
        document.fields.get("linkedinProfile"),
        Some(&json!("https://linkedin.com/in/marco-reis"))
    );
    assert_eq!(
        document.fields.get("coachingPhilosophy"),
        Some(&json!("Technique before tactics"))
    );
    assert_eq!(document.fields.get("availabilityPartTime"), Some(&json!(true)));
}

#[test]
fn submit_revalidates_whole_draft() {
    let mut session = WizardSession::new(Role::Coach);
    let inputs = coach_inputs();
    for input in &inputs {
        session.advance(input).unwrap();
    }
    // Wipe a required earlier field behind the engine's back via toggle-free
    // path: retreat to step 0 and advance with an empty name
    for _ in 0..COACH_SCHEMA.steps.len() {
        session.retreat();
    }
    let err = session
        .advance(&obj(json!({ "fullName": "   " })))
        .unwrap_err();
    assert!(matches!(err, WizardError::Validation { .. }));
}

#[test]
fn write_only_values_withheld_from_state() {
    let mut session = WizardSession::new(Role::Player);
    session.advance(&player_step_one()).unwrap();
    let state = session.state();
    assert!(!state.draft.contains_key("password"));
    assert!(!state.draft.contains_key("confirmPassword"));
    assert!(!state.draft.contains_key("dataConsent"));
    assert_eq!(state.step, 1);
    assert_eq!(state.step_count, PLAYER_SCHEMA.step_count());
}

#[test]
fn composite_date_combines_in_any_order() {
    let mut input = CompositeDateInput::new();
    assert!(input.value().is_none());

    input.pick_month(9);
    assert!(input.value().is_none());
    input.pick_year(2011);
    assert_eq!(
        input.value().map(|d| d.to_string()),
        Some("2011-09-01".into())
    );

    // Invalid month is rejected and the previous value retained
    input.pick_month(13);
    assert_eq!(
        input.value().map(|d| d.to_string()),
        Some("2011-09-01".into())
    );

    input.pick_month(2);
    assert_eq!(
        input.value().map(|d| d.to_string()),
        Some("2011-02-01".into())
    );
}
