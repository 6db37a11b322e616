// ABOUTME: End-to-end HTTP tests against a spawned server instance
// ABOUTME: Drives registration, login, directory, and marketplace over REST
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

use std::sync::Arc;

use reqwest::StatusCode;
use rosterhub::database::Database;
use rosterhub::routes::{app_router, ServerResources};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const JWT_SECRET: &str = "test-secret";
const ADMIN_TOKEN: &str = "test-admin-token";

/// Spawn the app on an ephemeral port and return its base URL
async fn spawn_server() -> String {
    let database = Database::new("sqlite::memory:").await.unwrap();
    let resources = Arc::new(ServerResources::new(database, JWT_SECRET, ADMIN_TOKEN));
    let app = app_router(resources);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Walk a wizard through every step and submit, returning the profile
async fn register(
    client: &reqwest::Client,
    base: &str,
    role: &str,
    steps: &[Value],
) -> Value {
    let started: Value = client
        .post(format!("{base}/api/register/{role}/start"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = started["id"].as_str().unwrap().to_owned();

    for step in steps {
        let response = client
            .post(format!("{base}/api/register/{role}/{id}/advance"))
            .json(step)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "step failed: {step}");
    }

    let response = client
        .post(format!("{base}/api/register/{role}/{id}/submit"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.unwrap()
}

fn player_steps(email: &str, name: &str) -> Vec<Value> {
    vec![
        json!({
            "fullName": name,
            "email": email,
            "password": "player-pass-1",
            "confirmPassword": "player-pass-1",
            "dateOfBirth": "2004-03-15",
            "gender": "female",
            "phone": "+1-555-0100",
            "location": "Lisbon",
            "dataConsent": true
        }),
        json!({
            "primarySport": "football",
            "currentLevel": "intermediate",
            "playingExperience": "6",
            "achievements": "regional cup winner"
        }),
        json!({ "height": "172", "weight": "64", "dominantSide": "left" }),
        json!({
            "emergencyContactName": "Rui Silva",
            "emergencyContactRelation": "father",
            "emergencyContactPhone": "+1-555-0101"
        }),
        json!({ "careerGoal": "professional", "lookingForCoach": true }),
        json!({ "instagram": "@dana" }),
    ]
}

fn coach_steps(email: &str, name: &str) -> Vec<Value> {
    vec![
        json!({ "fullName": name, "dateOfBirth": "1980-07-01", "gender": "male" }),
        json!({ "phone": "+1-555-0200", "location": "Porto" }),
        json!({
            "primarySport": "football",
            "coachingLevel": "advanced",
            "coachingExperience": "12"
        }),
        json!({ "certifications": "UEFA B" }),
        json!({ "preferredAgeGroups": ["u16"] }),
        json!({
            "email": email,
            "password": "coach-pass-1",
            "confirmPassword": "coach-pass-1"
        }),
    ]
}

async fn login(client: &reqwest::Client, base: &str, email: &str, password: &str) -> String {
    let response: Value = client
        .post(format!("{base}/api/auth/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    response["token"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn full_registration_login_and_marketplace_flow() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let player = register(&client, &base, "player", &player_steps("dana@example.com", "Dana Silva")).await;
    assert_eq!(player["email"], "dana@example.com");
    assert_eq!(player["status"], "pending");
    assert!(player.get("password").is_none());
    // Numbers arrived as strings and left as numbers
    assert_eq!(player["playingExperience"], json!(6));

    let coach = register(&client, &base, "coach", &coach_steps("marco@example.com", "Marco Reis")).await;
    assert_eq!(coach["coachingLevel"], "advanced");

    let player_token = login(&client, &base, "dana@example.com", "player-pass-1").await;
    let coach_token = login(&client, &base, "marco@example.com", "coach-pass-1").await;

    // Session snapshot reflects the role resolved at login
    let session: Value = client
        .get(format!("{base}/api/auth/session"))
        .bearer_auth(&coach_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(session["role"], "coach");
    assert_eq!(session["fullName"], "Marco Reis");

    // Player publishes a listing
    let listing: Value = client
        .post(format!("{base}/api/marketplace/listings"))
        .bearer_auth(&player_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listing_id = listing["id"].as_str().unwrap().to_owned();

    // Coach expresses interest; a repeat is rejected
    let response = client
        .post(format!("{base}/api/marketplace/interest"))
        .bearer_auth(&coach_token)
        .json(&json!({ "playerEmail": "dana@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = client
        .post(format!("{base}/api/marketplace/interest"))
        .bearer_auth(&coach_token)
        .json(&json!({ "playerEmail": "dana@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Coach accepts the listing, which verifies the player and removes it
    let response = client
        .post(format!("{base}/api/marketplace/listings/{listing_id}/accept"))
        .bearer_auth(&coach_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let profile: Value = client
        .get(format!("{base}/api/players/dana@example.com"))
        .bearer_auth(&coach_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile["isVerified"], json!(true));
    assert_eq!(profile["verifiedBy"], "marco@example.com");

    let listings: Value = client
        .get(format!("{base}/api/marketplace/listings"))
        .bearer_auth(&coach_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listings.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn failed_step_reports_field_errors_and_stays_resumable() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let started: Value = client
        .post(format!("{base}/api/register/player/start"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = started["id"].as_str().unwrap().to_owned();

    let response = client
        .post(format!("{base}/api/register/player/{id}/advance"))
        .json(&json!({ "fullName": "Dana", "email": "not-an-email" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "validation_failed");
    assert_eq!(body["fields"]["email"], "Invalid email address");

    // Session survives the failure and can be resumed
    let state: Value = client
        .get(format!("{base}/api/register/player/{id}/state"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state["step"], 0);
    assert!(state["errors"]["email"].is_string());
}

#[tokio::test]
async fn directory_endpoints_require_authentication() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/api/coaches"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_approval_needs_the_admin_token() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let _ = register(&client, &base, "coach", &coach_steps("marco@example.com", "Marco Reis")).await;

    let response = client
        .post(format!("{base}/api/admin/coaches/marco@example.com/approve"))
        .bearer_auth("wrong-token")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let approved: Value = client
        .post(format!("{base}/api/admin/coaches/marco@example.com/approve"))
        .bearer_auth(ADMIN_TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(approved["status"], "approved");
}
