//! Precomputed sign clips and the clip-store seam used to fetch them by word.

use std::collections::BTreeMap;

use crate::foundation::error::SignwaveResult;

/// Binary clip payload (e.g. an animated image) for one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipData(pub Vec<u8>);

impl ClipData {
    /// Raw clip bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Store of precomputed word clips, keyed by lowercased word.
///
/// Retrieval may fail (network-backed stores); `Ok(None)` means the word has
/// no clip and the avatar fallback should run. Either outcome is recovered
/// locally by the channel selector, never surfaced past a log line.
pub trait ClipStore {
    /// Fetch the clip for `word`. The key is already lowercased.
    fn fetch(&mut self, word: &str) -> SignwaveResult<Option<ClipData>>;
}

/// In-memory clip index.
///
/// Mirrors a directory scan of clip files keyed by lowercase word; useful as
/// a cache front for hosts and as a deterministic store under test.
#[derive(Debug, Clone, Default)]
pub struct StaticClipStore {
    clips: BTreeMap<String, ClipData>,
}

impl StaticClipStore {
    /// Empty store; every fetch misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clip under `word`. Keys are lowercased on insert.
    pub fn insert(&mut self, word: impl Into<String>, data: ClipData) {
        self.clips.insert(word.into().to_lowercase(), data);
    }

    /// Number of stored clips.
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// `true` when the store has no clips.
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

impl ClipStore for StaticClipStore {
    fn fetch(&mut self, word: &str) -> SignwaveResult<Option<ClipData>> {
        Ok(self.clips.get(&word.to_lowercase()).cloned())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clip.rs"]
mod tests;
