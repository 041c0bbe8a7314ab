//! Compact binary token: `base64url(version ‖ bincode(team))`.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use bincode::Options;

use super::condensed::CondensedTeam;
use super::RosterFormat;
use crate::error::{Result, RosterError};

/// Leading byte of every compact token. Bump when the condensed layout
/// changes incompatibly.
pub const COMPACT_VERSION: u8 = 1;

/// Upper bound on the decoded payload size.
const MAX_PAYLOAD_BYTES: u64 = 64 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_varint_encoding()
        .with_limit(MAX_PAYLOAD_BYTES)
}

/// Current token format, emitted by the codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactFormat;

impl RosterFormat for CompactFormat {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn encode(&self, team: &CondensedTeam) -> Result<String> {
        let payload = options()
            .serialize(team)
            .map_err(|e| RosterError::Encode(format!("compact payload: {e}")))?;

        let mut bytes = Vec::with_capacity(payload.len() + 1);
        bytes.push(COMPACT_VERSION);
        bytes.extend_from_slice(&payload);
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }

    fn decode(&self, token: &str) -> Result<CondensedTeam> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|e| RosterError::Decode(format!("compact base64: {e}")))?;

        let (&version, payload) = bytes
            .split_first()
            .ok_or_else(|| RosterError::Decode("compact token is empty".to_string()))?;
        if version != COMPACT_VERSION {
            return Err(RosterError::Decode(format!(
                "compact version mismatch: expected {COMPACT_VERSION}, got {version}"
            )));
        }

        options()
            .deserialize(payload)
            .map_err(|e| RosterError::Decode(format!("compact payload: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::condensed::{CondensedUpgrade, CondensedVehicle, CondensedWeapon};

    fn sample() -> CondensedTeam {
        CondensedTeam {
            name: "Road Warriors".to_string(),
            vehicles: vec![CondensedVehicle(
                "c".to_string(),
                vec![
                    CondensedWeapon("hg".to_string(), "c".to_string()),
                    CondensedWeapon("mg".to_string(), "u:t".to_string()),
                ],
                vec![CondensedUpgrade("r".to_string(), Some(1), Some("s".to_string()))],
                Some("Interceptor".to_string()),
            )],
        }
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = CompactFormat.encode(&sample()).expect("encodes");
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_encode_decode() {
        let token = CompactFormat.encode(&sample()).expect("encodes");
        assert_eq!(CompactFormat.decode(&token).expect("decodes"), sample());
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let token = CompactFormat.encode(&sample()).expect("encodes");
        let mut bytes = URL_SAFE_NO_PAD.decode(&token).expect("base64");
        bytes[0] = COMPACT_VERSION + 1;
        let stale = URL_SAFE_NO_PAD.encode(bytes);

        assert!(matches!(
            CompactFormat.decode(&stale),
            Err(RosterError::Decode(_))
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(CompactFormat.decode("%7B%22name%22").is_err());
        assert!(CompactFormat.decode("AQ").is_err());
        assert!(CompactFormat.decode("").is_err());
    }
}
