//! Time-stamped sign tokens and the ordered track that holds them.

use serde::{Deserialize, Serialize};

use crate::foundation::error::{SignwaveError, SignwaveResult};
use crate::foundation::time::Seconds;

/// One transcribed segment: a time range plus the words spoken in it.
///
/// Produced once per video by the transcription service and immutable
/// afterwards. Ranges are inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignToken {
    /// Segment start in video time, seconds.
    pub start: f64,
    /// Segment end in video time, seconds.
    pub end: f64,
    /// Words to sign for this segment, in source order.
    pub tokens: Vec<String>,
}

impl SignToken {
    /// `true` when `position` falls inside `[start, end]`.
    pub fn contains(&self, position: Seconds) -> bool {
        self.start <= position.0 && position.0 <= self.end
    }

    fn validate(&self) -> SignwaveResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(SignwaveError::validation(
                "SignToken start/end must be finite",
            ));
        }
        if self.start > self.end {
            return Err(SignwaveError::validation("SignToken start must be <= end"));
        }
        Ok(())
    }
}

/// Immutable, ordered set of [`SignToken`]s for one video.
///
/// Segments are usually non-overlapping but the engine does not rely on it:
/// resolution is strictly first-match in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenTrack {
    tokens: Vec<SignToken>,
}

impl TokenTrack {
    /// Build a validated track.
    ///
    /// Every segment must have finite `start <= end`. Overlapping segments
    /// are tolerated; they resolve first-match.
    pub fn new(tokens: Vec<SignToken>) -> SignwaveResult<Self> {
        for token in &tokens {
            token.validate()?;
        }
        Ok(Self { tokens })
    }

    /// Number of segments in the track.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `true` when the track has no segments.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The first segment containing `position`, in declaration order.
    ///
    /// Exactly one segment resolves per call even when ranges overlap.
    pub fn resolve_at(&self, position: Seconds) -> Option<&SignToken> {
        self.tokens.iter().find(|t| t.contains(position))
    }

    /// All segments, in declaration order.
    pub fn segments(&self) -> &[SignToken] {
        &self.tokens
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transcript/model.rs"]
mod tests;
