// ABOUTME: Common data models for profiles, listings, and interest mirrors
// ABOUTME: Documents serialize camelCase; enums store lowercase strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Athlete looking for coaching or teams
    Player,
    /// Coach browsing and verifying athletes
    Coach,
}

impl Role {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Coach => "coach",
        }
    }

    /// Parse from string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "player" => Some(Self::Player),
            "coach" => Some(Self::Coach),
            _ => None,
        }
    }
}

/// Sports supported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Association football
    Football,
    /// Cricket
    Cricket,
    /// Basketball
    Basketball,
    /// Tennis
    Tennis,
    /// Badminton
    Badminton,
    /// Any sport not listed explicitly
    #[default]
    Other,
}

impl Sport {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Football => "football",
            Self::Cricket => "cricket",
            Self::Basketball => "basketball",
            Self::Tennis => "tennis",
            Self::Badminton => "badminton",
            Self::Other => "other",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "football" => Self::Football,
            "cricket" => Self::Cricket,
            "basketball" => Self::Basketball,
            "tennis" => Self::Tennis,
            "badminton" => Self::Badminton,
            _ => Self::Other,
        }
    }
}

/// Competitive level of a player or coaching level of a coach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    /// New to the sport
    #[default]
    Beginner,
    /// Regular club or school level
    Intermediate,
    /// Competitive regional level
    Advanced,
    /// Professional or national level
    Professional,
}

impl SkillLevel {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Professional => "professional",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            "professional" => Self::Professional,
            _ => Self::Beginner,
        }
    }
}

/// Account approval status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    /// Awaiting review (default after registration)
    #[default]
    Pending,
    /// Approved by an admin
    Approved,
}

impl ProfileStatus {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "approved" => Self::Approved,
            _ => Self::Pending,
        }
    }
}

/// Status of an interest pair or a marketplace listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterestStatus {
    /// Expressed but not yet acted on
    #[default]
    Pending,
    /// Accepted by the other party
    Accepted,
}

impl InterestStatus {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "accepted" => Self::Accepted,
            _ => Self::Pending,
        }
    }
}

/// Player-side mirror of an expressed interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestRequest {
    /// Email of the coach who expressed interest
    pub coach_id: String,
    /// Display name of the coach at the time of the request
    pub coach_name: String,
    /// Current status of the pair
    pub status: InterestStatus,
    /// When the interest was expressed
    pub date: DateTime<Utc>,
}

/// Coach-side mirror of an expressed interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestedPlayer {
    /// Email of the player the coach is interested in
    pub player_id: String,
    /// Display name of the player at the time of the request
    pub player_name: String,
    /// Current status of the pair
    pub status: InterestStatus,
    /// When the interest was expressed
    pub date: DateTime<Utc>,
}

/// Stored player profile document
///
/// Workflow state lives in typed fields; the remaining wizard-collected
/// attributes (date of birth, physicals, medical, goals, social links)
/// stay in `details` and are flattened into the serialized document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    /// Email address, the document key
    pub email: String,
    /// Full display name
    pub full_name: String,
    /// Primary sport
    pub primary_sport: Sport,
    /// Current competitive level
    pub current_level: SkillLevel,
    /// Account approval status
    pub status: ProfileStatus,
    /// Whether a coach has verified this player
    pub is_verified: bool,
    /// Whether the player wants to be matched with a coach
    pub looking_for_coach: bool,
    /// Email of the verifying coach, if verified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<String>,
    /// When verification happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_date: Option<DateTime<Utc>>,
    /// Interests expressed by coaches, player-side mirror
    pub interest_requests: Vec<InterestRequest>,
    /// Remaining wizard-collected attributes, flattened
    #[serde(flatten)]
    pub details: serde_json::Value,
    /// Registration time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl PlayerProfile {
    /// Build a fresh profile from normalized wizard fields
    ///
    /// Column-backed keys are lifted out of the field map so the
    /// flattened document never carries duplicates.
    #[must_use]
    pub fn from_wizard_fields(mut fields: serde_json::Map<String, serde_json::Value>) -> Self {
        let take_str = |fields: &mut serde_json::Map<String, serde_json::Value>, key: &str| {
            fields
                .remove(key)
                .and_then(|v| v.as_str().map(str::to_owned))
                .unwrap_or_default()
        };
        let email = take_str(&mut fields, "email");
        let full_name = take_str(&mut fields, "fullName");
        let primary_sport = Sport::parse(&take_str(&mut fields, "primarySport"));
        let current_level = SkillLevel::parse(&take_str(&mut fields, "currentLevel"));
        let looking_for_coach = fields
            .remove("lookingForCoach")
            .and_then(|v| v.as_bool())
            .unwrap_or_default();
        let now = Utc::now();

        Self {
            email,
            full_name,
            primary_sport,
            current_level,
            status: ProfileStatus::Pending,
            is_verified: false,
            looking_for_coach,
            verified_by: None,
            verification_date: None,
            interest_requests: Vec::new(),
            details: serde_json::Value::Object(fields),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Stored coach profile document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachProfile {
    /// Email address, the document key
    pub email: String,
    /// Full display name
    pub full_name: String,
    /// Primary sport coached
    pub primary_sport: Sport,
    /// Level the coach works at
    pub coaching_level: SkillLevel,
    /// Account approval status
    pub status: ProfileStatus,
    /// Interests this coach has expressed, coach-side mirror
    pub interested_players: Vec<InterestedPlayer>,
    /// Remaining wizard-collected attributes, flattened
    #[serde(flatten)]
    pub details: serde_json::Value,
    /// Registration time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl CoachProfile {
    /// Build a fresh profile from normalized wizard fields
    #[must_use]
    pub fn from_wizard_fields(mut fields: serde_json::Map<String, serde_json::Value>) -> Self {
        let take_str = |fields: &mut serde_json::Map<String, serde_json::Value>, key: &str| {
            fields
                .remove(key)
                .and_then(|v| v.as_str().map(str::to_owned))
                .unwrap_or_default()
        };
        let email = take_str(&mut fields, "email");
        let full_name = take_str(&mut fields, "fullName");
        let primary_sport = Sport::parse(&take_str(&mut fields, "primarySport"));
        let coaching_level = SkillLevel::parse(&take_str(&mut fields, "coachingLevel"));
        let now = Utc::now();

        Self {
            email,
            full_name,
            primary_sport,
            coaching_level,
            status: ProfileStatus::Pending,
            interested_players: Vec::new(),
            details: serde_json::Value::Object(fields),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Denormalized marketplace listing snapshot
///
/// Captured from the player document at publication time and immutable
/// afterwards; accepting a listing deletes it rather than mutating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceListing {
    /// Listing id
    pub id: Uuid,
    /// Email of the publishing player
    pub player_id: String,
    /// Player display name at publication time
    pub player_name: String,
    /// Player's primary sport
    pub primary_sport: Sport,
    /// Years of playing experience
    pub experience: f64,
    /// Competitive level at publication time
    pub current_level: SkillLevel,
    /// Achievements, split from the free-text field
    pub achievements: Vec<String>,
    /// Whether the player is looking for a coach
    pub looking_for_coach: bool,
    /// Whether the player is looking for a team
    pub looking_for_team: bool,
    /// Player location
    pub location: String,
    /// Contact details
    pub contact_info: String,
    /// Free-text pitch from the player
    pub player_details: String,
    /// Listing status
    pub status: InterestStatus,
    /// Emails of coaches who flagged interest on the listing
    pub interested_coaches: Vec<String>,
    /// Publication time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Compact player row for directory listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    /// Email address
    pub email: String,
    /// Full display name
    pub full_name: String,
    /// Primary sport
    pub primary_sport: Sport,
    /// Current competitive level
    pub current_level: SkillLevel,
    /// Whether a coach has verified this player
    pub is_verified: bool,
    /// Whether the player wants to be matched with a coach
    pub looking_for_coach: bool,
}

impl From<&PlayerProfile> for PlayerSummary {
    fn from(p: &PlayerProfile) -> Self {
        Self {
            email: p.email.clone(),
            full_name: p.full_name.clone(),
            primary_sport: p.primary_sport,
            current_level: p.current_level,
            is_verified: p.is_verified,
            looking_for_coach: p.looking_for_coach,
        }
    }
}

/// Compact coach row for directory listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachSummary {
    /// Email address
    pub email: String,
    /// Full display name
    pub full_name: String,
    /// Primary sport coached
    pub primary_sport: Sport,
    /// Level the coach works at
    pub coaching_level: SkillLevel,
    /// Account approval status
    pub status: ProfileStatus,
}

impl From<&CoachProfile> for CoachSummary {
    fn from(c: &CoachProfile) -> Self {
        Self {
            email: c.email.clone(),
            full_name: c.full_name.clone(),
            primary_sport: c.primary_sport,
            coaching_level: c.coaching_level,
            status: c.status,
        }
    }
}
