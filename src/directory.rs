// ABOUTME: Pure filtering over directory summaries
// ABOUTME: Free-text search composes with sport and experience equality
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use serde::Deserialize;

use crate::models::{CoachSummary, PlayerSummary, SkillLevel, Sport};

/// Anything that can appear in a filterable directory
pub trait DirectoryEntry {
    /// Display name matched by free-text search
    fn display_name(&self) -> &str;
    /// Sport matched by search and the sport filter
    fn sport(&self) -> Sport;
    /// Level matched by the experience filter
    fn experience(&self) -> SkillLevel;
}

impl DirectoryEntry for PlayerSummary {
    fn display_name(&self) -> &str {
        &self.full_name
    }
    fn sport(&self) -> Sport {
        self.primary_sport
    }
    fn experience(&self) -> SkillLevel {
        self.current_level
    }
}

impl DirectoryEntry for CoachSummary {
    fn display_name(&self) -> &str {
        &self.full_name
    }
    fn sport(&self) -> Sport {
        self.primary_sport
    }
    fn experience(&self) -> SkillLevel {
        self.coaching_level
    }
}

/// Query parameters accepted by the directory endpoints
///
/// All filters compose with AND; an absent filter matches everything.
/// `search` is a case-insensitive substring match against the display
/// name or the sport.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryFilter {
    /// Free-text needle
    pub search: Option<String>,
    /// Exact sport
    pub sport: Option<Sport>,
    /// Exact experience level
    pub experience: Option<SkillLevel>,
}

impl DirectoryFilter {
    /// Whether one entry passes every active filter
    #[must_use]
    pub fn matches<E: DirectoryEntry>(&self, entry: &E) -> bool {
        if let Some(needle) = self.search.as_deref() {
            let needle = needle.trim().to_lowercase();
            if !needle.is_empty() {
                let in_name = entry.display_name().to_lowercase().contains(&needle);
                let in_sport = entry.sport().as_str().contains(&needle);
                if !in_name && !in_sport {
                    return false;
                }
            }
        }
        if let Some(sport) = self.sport {
            if entry.sport() != sport {
                return false;
            }
        }
        if let Some(level) = self.experience {
            if entry.experience() != level {
                return false;
            }
        }
        true
    }

    /// Keep only the entries that pass every active filter
    #[must_use]
    pub fn apply<E: DirectoryEntry>(&self, entries: Vec<E>) -> Vec<E> {
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}
