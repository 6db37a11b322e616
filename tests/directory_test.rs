// ABOUTME: Tests for directory filtering over profile summaries
// ABOUTME: Substring search plus sport and experience equality, AND-composed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

use rosterhub::directory::DirectoryFilter;
use rosterhub::models::{CoachSummary, ProfileStatus, SkillLevel, Sport};

fn coaches() -> Vec<CoachSummary> {
    let coach = |name: &str, sport: Sport, level: SkillLevel| CoachSummary {
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        full_name: name.to_owned(),
        primary_sport: sport,
        coaching_level: level,
        status: ProfileStatus::Approved,
    };
    vec![
        coach("Marco Reis", Sport::Football, SkillLevel::Advanced),
        coach("Sofia Mendes", Sport::Tennis, SkillLevel::Professional),
        coach("Ravi Sharma", Sport::Cricket, SkillLevel::Advanced),
        coach("Mei Chen", Sport::Football, SkillLevel::Intermediate),
    ]
}

#[test]
fn empty_filter_matches_everything() {
    let filter = DirectoryFilter::default();
    assert_eq!(filter.apply(coaches()).len(), 4);
}

#[test]
fn search_matches_name_substring_case_insensitively() {
    let filter = DirectoryFilter {
        search: Some("MARCO".into()),
        ..DirectoryFilter::default()
    };
    let matched = filter.apply(coaches());
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].full_name, "Marco Reis");
}

#[test]
fn search_also_matches_the_sport() {
    // "foot" hits football coaches even though no name contains it
    let filter = DirectoryFilter {
        search: Some("foot".into()),
        ..DirectoryFilter::default()
    };
    let matched = filter.apply(coaches());
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|c| c.primary_sport == Sport::Football));
}

#[test]
fn sport_and_experience_filters_are_exact() {
    let filter = DirectoryFilter {
        search: None,
        sport: Some(Sport::Football),
        experience: Some(SkillLevel::Advanced),
    };
    let matched = filter.apply(coaches());
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].full_name, "Marco Reis");
}

#[test]
fn filters_compose_with_and() {
    let filter = DirectoryFilter {
        search: Some("mendes".into()),
        sport: Some(Sport::Football),
        experience: None,
    };
    assert!(filter.apply(coaches()).is_empty());
}

#[test]
fn blank_search_is_ignored() {
    let filter = DirectoryFilter {
        search: Some("   ".into()),
        ..DirectoryFilter::default()
    };
    assert_eq!(filter.apply(coaches()).len(), 4);
}
