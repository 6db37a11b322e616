// ABOUTME: Unit tests for the profile document store
// ABOUTME: Covers create, duplicate rejection, lookups, and coach approval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use common::{create_test_db, register_coach, register_player, sample_player};
use rosterhub::errors::ErrorCode;
use rosterhub::models::{ProfileStatus, SkillLevel, Sport};

#[tokio::test]
async fn create_and_fetch_player_roundtrip() {
    let db = create_test_db().await;
    register_player(&db, "dana@example.com", "Dana Silva", true).await;

    let player = db.get_player_required("dana@example.com").await.unwrap();
    assert_eq!(player.full_name, "Dana Silva");
    assert_eq!(player.primary_sport, Sport::Football);
    assert_eq!(player.current_level, SkillLevel::Intermediate);
    assert_eq!(player.status, ProfileStatus::Pending);
    assert!(player.looking_for_coach);
    assert!(!player.is_verified);
    assert!(player.interest_requests.is_empty());
    // Wizard extras survive in the document
    assert_eq!(
        player.details.get("location").and_then(|v| v.as_str()),
        Some("Lisbon")
    );
}

#[tokio::test]
async fn duplicate_player_email_is_a_conflict() {
    let db = create_test_db().await;
    register_player(&db, "dana@example.com", "Dana Silva", true).await;

    let again = sample_player("dana@example.com", "Other Dana", false);
    let err = db.create_player(&again, "hash").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::Conflict);
}

#[tokio::test]
async fn missing_player_is_not_found() {
    let db = create_test_db().await;
    assert!(db.get_player("ghost@example.com").await.unwrap().is_none());
    let err = db.get_player_required("ghost@example.com").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn password_hash_is_kept_out_of_the_document() {
    let db = create_test_db().await;
    register_player(&db, "dana@example.com", "Dana Silva", true).await;

    let player = db.get_player_required("dana@example.com").await.unwrap();
    let serialized = serde_json::to_value(&player).unwrap();
    assert!(serialized.get("password").is_none());
    assert!(serialized.get("passwordHash").is_none());

    let hash = db
        .get_player_password_hash("dana@example.com")
        .await
        .unwrap();
    assert_eq!(hash.as_deref(), Some("test-hash"));
}

#[tokio::test]
async fn coach_roundtrip_and_duplicate_rejection() {
    let db = create_test_db().await;
    register_coach(&db, "marco@example.com", "Marco Reis").await;

    let coach = db.get_coach_required("marco@example.com").await.unwrap();
    assert_eq!(coach.coaching_level, SkillLevel::Advanced);
    assert_eq!(coach.status, ProfileStatus::Pending);
    assert!(coach.interested_players.is_empty());

    let again = common::sample_coach("marco@example.com", "Marco Again");
    let err = db.create_coach(&again, "hash").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::Conflict);
}

#[tokio::test]
async fn approve_coach_flips_pending_to_approved() {
    let db = create_test_db().await;
    register_coach(&db, "marco@example.com", "Marco Reis").await;

    let approved = db.approve_coach("marco@example.com").await.unwrap();
    assert_eq!(approved.status, ProfileStatus::Approved);

    let err = db.approve_coach("ghost@example.com").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn summaries_list_all_profiles() {
    let db = create_test_db().await;
    register_player(&db, "a@example.com", "Ana", true).await;
    register_player(&db, "b@example.com", "Bruno", false).await;
    register_coach(&db, "c@example.com", "Carla").await;

    let players = db.list_players().await.unwrap();
    assert_eq!(players.len(), 2);
    let coaches = db.list_coaches().await.unwrap();
    assert_eq!(coaches.len(), 1);
    assert_eq!(coaches[0].full_name, "Carla");
}
