//! Wire format of the external transcription service and its conversion
//! into the engine's token track.

use serde::Deserialize;

use crate::foundation::error::{SignwaveError, SignwaveResult};
use crate::transcript::model::{SignToken, TokenTrack};

/// Decoded transcription-service reply.
///
/// The service answers `{"success": true, "signTokens": [...]}` with an
/// optional `warnings` string (e.g. skipped malformed timestamps), or
/// `{"success": false, "error": "..."}` with optional `details`.
#[derive(Debug, Clone)]
pub enum TranscribeReply {
    /// Transcription succeeded.
    Tokens {
        /// Validated token track for the video.
        track: TokenTrack,
        /// Non-fatal warning to surface alongside readiness.
        warnings: Option<String>,
    },
    /// The service reported a failure.
    Failure {
        /// User-facing failure message.
        error: String,
        /// Extra diagnostic detail, when the service attaches one.
        details: Option<String>,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRepr {
    success: bool,
    #[serde(default)]
    sign_tokens: Vec<SignToken>,
    #[serde(default)]
    warnings: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

impl TranscribeReply {
    /// Decode a service reply from its JSON body.
    pub fn from_json(json: &str) -> SignwaveResult<Self> {
        let repr: ReplyRepr = serde_json::from_str(json)
            .map_err(|e| SignwaveError::validation(format!("transcribe reply: {e}")))?;
        if repr.success {
            Ok(Self::Tokens {
                track: TokenTrack::new(repr.sign_tokens)?,
                warnings: repr.warnings,
            })
        } else {
            Ok(Self::Failure {
                error: repr
                    .error
                    .unwrap_or_else(|| "transcription failed".to_owned()),
                details: repr.details,
            })
        }
    }

    /// Convert into a track, mapping service failures to
    /// [`SignwaveError::Upstream`].
    pub fn into_track(self) -> SignwaveResult<(TokenTrack, Option<String>)> {
        match self {
            Self::Tokens { track, warnings } => Ok((track, warnings)),
            Self::Failure { error, details } => Err(SignwaveError::upstream(match details {
                Some(details) => format!("{error}: {details}"),
                None => error,
            })),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transcript/wire.rs"]
mod tests;
