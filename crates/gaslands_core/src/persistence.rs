//! Persistence of the current team through an injected token store.
//!
//! [`RosterSession`] reads the store once when opened and writes the
//! encoded team back after edits settle. Time is passed in by the caller,
//! so the debounce is deterministic.

use std::time::Instant;

use rand::Rng;

use crate::codec::RosterCodec;
use crate::config::BuilderConfig;
use crate::team::{Team, TeamIntent};

/// Where the roster token lives (the address bar, a file, a test buffer).
pub trait TokenStore {
    /// Current token, if any.
    fn read_token(&self) -> Option<String>;

    /// Replace the stored token.
    fn write_token(&mut self, token: &str);
}

/// In-memory token store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTokenStore {
    token: Option<String>,
    writes: usize,
}

impl MemoryTokenStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            writes: 0,
        }
    }

    /// Current token.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Number of writes since creation.
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }
}

impl TokenStore for MemoryTokenStore {
    fn read_token(&self) -> Option<String> {
        self.token.clone()
    }

    fn write_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
        self.writes += 1;
    }
}

/// The team being edited plus its pending write-back.
#[derive(Debug)]
pub struct RosterSession<'c, S: TokenStore> {
    store: S,
    codec: RosterCodec<'c>,
    config: BuilderConfig,
    team: Team,
    deadline: Option<Instant>,
}

impl<'c, S: TokenStore> RosterSession<'c, S> {
    /// Read the store once and decode its token.
    ///
    /// A leading `?` is ignored. A store without a token, or with one that
    /// cannot be read, starts a fresh team named after
    /// `config.default_team_name`.
    pub fn open(store: S, codec: RosterCodec<'c>, config: BuilderConfig) -> Self {
        let token = store.read_token().unwrap_or_default();
        let token = token.strip_prefix('?').unwrap_or(&token);
        let fresh = || Team::named(config.default_team_name.clone());

        let team = if token.trim().is_empty() {
            fresh()
        } else {
            codec.try_decode(token).unwrap_or_else(|error| {
                tracing::warn!("Unable to parse roster token, starting a new team: {}", error);
                fresh()
            })
        };

        Self {
            store,
            codec,
            config,
            team,
            deadline: None,
        }
    }

    /// Team as currently edited.
    #[must_use]
    pub const fn team(&self) -> &Team {
        &self.team
    }

    /// Underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Session configuration.
    #[must_use]
    pub const fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Whether a write-back is scheduled.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Apply an intent at time `now`.
    ///
    /// A change schedules a write-back for `now + debounce`, replacing any
    /// earlier deadline.
    pub fn apply<R: Rng + ?Sized>(&mut self, intent: TeamIntent, rng: &mut R, now: Instant) {
        let next = self
            .team
            .apply(intent, self.codec.catalog(), rng, &self.config);
        self.replace_team(next, now);
    }

    /// Replace the whole team at time `now`.
    pub fn replace_team(&mut self, team: Team, now: Instant) {
        if team == self.team {
            return;
        }
        self.team = team;
        self.deadline = Some(now + self.config.debounce());
    }

    /// Write the team if its deadline has passed. Returns whether a write
    /// happened.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.write();
                true
            }
            _ => false,
        }
    }

    /// Write any pending change immediately. Returns whether a write
    /// happened.
    pub fn flush(&mut self) -> bool {
        if self.deadline.is_none() {
            return false;
        }
        self.write();
        true
    }

    /// Close the session and hand back the store. Pending changes are
    /// dropped; call [`flush`](Self::flush) first to keep them.
    pub fn into_store(self) -> S {
        self.store
    }

    fn write(&mut self) {
        self.deadline = None;
        match self.codec.encode(&self.team) {
            Ok(token) => self.store.write_token(&token),
            Err(error) => tracing::warn!("Roster not saved: {}", error),
        }
    }
}
