//! Roster tokens.
//!
//! A [`Team`] is condensed to abbreviations and short codes, then written
//! in the current compact format. Decoding tries every known format in
//! priority order, so links produced by older versions still open.

mod compact;
mod condensed;
mod json;

pub use compact::{CompactFormat, COMPACT_VERSION};
pub use condensed::{
    CondensedTeam, CondensedUpgrade, CondensedVehicle, CondensedWeapon, MAX_DECODED_AMOUNT,
};
pub use json::JsonFormat;

use crate::catalog::Catalog;
use crate::error::{Result, RosterError};
use crate::team::Team;

/// A token encoding for condensed teams.
pub trait RosterFormat: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Write a condensed team as a token.
    fn encode(&self, team: &CondensedTeam) -> Result<String>;

    /// Read a token written by this format.
    fn decode(&self, token: &str) -> Result<CondensedTeam>;
}

/// Encoder and decoder for team tokens, bound to a catalog.
pub struct RosterCodec<'c> {
    catalog: &'c Catalog,
    formats: Vec<Box<dyn RosterFormat>>,
}

impl std::fmt::Debug for RosterCodec<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterCodec")
            .field("formats", &self.format_names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl<'c> RosterCodec<'c> {
    /// Codec writing compact tokens and reading compact then legacy JSON.
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_formats(catalog, vec![Box::new(CompactFormat), Box::new(JsonFormat)])
    }

    /// Codec with a custom format list. The first format is used for
    /// encoding; decoding tries each in order.
    #[must_use]
    pub fn with_formats(catalog: &'c Catalog, formats: Vec<Box<dyn RosterFormat>>) -> Self {
        Self { catalog, formats }
    }

    /// Catalog tokens are resolved against.
    #[must_use]
    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Names of the formats in priority order.
    pub fn format_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.iter().map(|f| f.name())
    }

    /// Encode a team with the primary format.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Encode`] if no format is configured or the
    /// team is too large for the token.
    pub fn encode(&self, team: &Team) -> Result<String> {
        let format = self
            .formats
            .first()
            .ok_or_else(|| RosterError::Encode("no roster format configured".to_string()))?;
        format.encode(&CondensedTeam::from(team))
    }

    /// Decode a token, reporting why it could not be read.
    ///
    /// An empty token is the initial team.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Decode`] listing each format's failure.
    pub fn try_decode(&self, token: &str) -> Result<Team> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(Team::initial());
        }

        let mut failures = Vec::with_capacity(self.formats.len());
        for format in &self.formats {
            match format.decode(token) {
                Ok(condensed) => {
                    tracing::debug!("Decoded roster token as {}", format.name());
                    return Ok(condensed.hydrate(self.catalog));
                }
                Err(error) => failures.push(error.to_string()),
            }
        }

        Err(RosterError::Decode(failures.join("; ")))
    }

    /// Decode a token, falling back to the initial team on failure.
    #[must_use]
    pub fn decode(&self, token: &str) -> Team {
        match self.try_decode(token) {
            Ok(team) => team,
            Err(error) => {
                tracing::warn!("Unable to parse roster token, starting a new team: {}", error);
                Team::initial()
            }
        }
    }
}
