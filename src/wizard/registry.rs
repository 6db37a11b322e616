// ABOUTME: In-memory registry of in-flight wizard sessions keyed by id
// ABOUTME: Tracks last activity per session and evicts ones idle past a TTL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

use super::engine::WizardSession;

/// How long a registration draft survives without activity
pub const WIZARD_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct RegistryEntry {
    session: WizardSession,
    touched: Instant,
}

/// Concurrent store of registration sessions with idle-time eviction
pub struct WizardRegistry {
    sessions: DashMap<Uuid, RegistryEntry>,
    ttl: Duration,
}

impl WizardRegistry {
    /// Registry whose sessions expire after `ttl` of inactivity
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Store a freshly started session
    pub fn insert(&self, session: WizardSession) {
        self.sessions.insert(
            session.id(),
            RegistryEntry {
                session,
                touched: Instant::now(),
            },
        );
    }

    /// Run `apply` against a live session, refreshing its idle clock.
    ///
    /// Returns `None` when the id is unknown or the session sat idle past
    /// the TTL, in which case the stale entry is dropped.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut WizardSession) -> T,
    ) -> Option<T> {
        let mut entry = self.sessions.get_mut(&id)?;
        if entry.touched.elapsed() >= self.ttl {
            drop(entry);
            self.sessions.remove(&id);
            return None;
        }
        entry.touched = Instant::now();
        Some(apply(&mut entry.session))
    }

    /// Drop every session idle longer than the TTL
    pub fn sweep(&self) {
        self.sessions
            .retain(|_, entry| entry.touched.elapsed() < self.ttl);
    }

    /// Remove a session outright, stale or not
    pub fn remove(&self, id: Uuid) {
        self.sessions.remove(&id);
    }

    /// Number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the registry holds no sessions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for WizardRegistry {
    fn default() -> Self {
        Self::new(WIZARD_SESSION_TTL)
    }
}
