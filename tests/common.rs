// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database and registered-profile creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code, clippy::must_use_candidate)]

use rosterhub::database::Database;
use rosterhub::models::{CoachProfile, PlayerProfile};
use serde_json::json;

/// In-memory database with migrations applied
pub async fn create_test_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

/// A complete player profile document for tests
pub fn sample_player(email: &str, name: &str, looking_for_coach: bool) -> PlayerProfile {
    let fields = json!({
        "email": email,
        "fullName": name,
        "primarySport": "football",
        "currentLevel": "intermediate",
        "lookingForCoach": looking_for_coach,
        "dateOfBirth": "2004-03-15",
        "gender": "female",
        "phone": "+1-555-0100",
        "location": "Lisbon",
        "playingExperience": 6,
        "achievements": "regional cup winner, u18 captain",
        "previousTeams": "FC Alvalade youth",
        "height": 172,
        "weight": 64,
        "dominantSide": "left",
        "careerGoal": "professional",
        "lookingForTeam": false
    });
    let serde_json::Value::Object(fields) = fields else {
        unreachable!()
    };
    PlayerProfile::from_wizard_fields(fields)
}

/// A complete coach profile document for tests
pub fn sample_coach(email: &str, name: &str) -> CoachProfile {
    let fields = json!({
        "email": email,
        "fullName": name,
        "primarySport": "football",
        "coachingLevel": "advanced",
        "dateOfBirth": "1980-07-01",
        "gender": "male",
        "phone": "+1-555-0200",
        "location": "Porto",
        "coachingExperience": 12,
        "certifications": "UEFA B",
        "preferredAgeGroups": ["u16", "u18"],
        "bio": "Youth development focus"
    });
    let serde_json::Value::Object(fields) = fields else {
        unreachable!()
    };
    CoachProfile::from_wizard_fields(fields)
}

/// Register a player directly against the database
pub async fn register_player(db: &Database, email: &str, name: &str, looking: bool) {
    let profile = sample_player(email, name, looking);
    db.create_player(&profile, "test-hash").await.unwrap();
}

/// Register a coach directly against the database
pub async fn register_coach(db: &Database, email: &str, name: &str) {
    let profile = sample_coach(email, name);
    db.create_coach(&profile, "test-hash").await.unwrap();
}
