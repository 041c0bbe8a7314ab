//! Legacy token: URL-encoded JSON.
//!
//! Still read so old shared links keep working. Written only on request.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use super::condensed::CondensedTeam;
use super::RosterFormat;
use crate::error::{Result, RosterError};

/// `{"name": .., "vehicles": [[abbr, [[weapon, facing]], ..]]}` behind
/// percent encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl RosterFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, team: &CondensedTeam) -> Result<String> {
        let json = serde_json::to_string(team)
            .map_err(|e| RosterError::Encode(format!("json: {e}")))?;
        Ok(utf8_percent_encode(&json, NON_ALPHANUMERIC).to_string())
    }

    fn decode(&self, token: &str) -> Result<CondensedTeam> {
        let json = percent_decode_str(token)
            .decode_utf8()
            .map_err(|e| RosterError::Decode(format!("json percent-encoding: {e}")))?;
        serde_json::from_str(&json).map_err(|e| RosterError::Decode(format!("json: {e}")))
    }
}
