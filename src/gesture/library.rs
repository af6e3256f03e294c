//! The gesture library: word and letter lookup over externally supplied
//! gesture data, with keys case-normalized at load time.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::foundation::error::{SignwaveError, SignwaveResult};
use crate::gesture::model::Gesture;

/// Lookup from whole words and single letters to gestures.
///
/// Whole-word entries take precedence over spelling. Lookup keys are
/// case-normalized to upper case, matching how the interpreter normalizes
/// words before playback.
#[derive(Debug, Clone, Default)]
pub struct GestureLibrary {
    words: BTreeMap<String, Gesture>,
    letters: BTreeMap<char, Gesture>,
}

#[derive(Deserialize)]
struct LibraryDef {
    #[serde(default)]
    words: BTreeMap<String, Gesture>,
    #[serde(default)]
    letters: BTreeMap<String, Gesture>,
}

impl GestureLibrary {
    /// Empty library. Every lookup misses; spelled words degrade to bare
    /// text markers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a library from already-typed entries. Keys are upper-cased.
    pub fn new(
        words: impl IntoIterator<Item = (String, Gesture)>,
        letters: impl IntoIterator<Item = (char, Gesture)>,
    ) -> SignwaveResult<Self> {
        let mut lib = Self::default();
        for (word, gesture) in words {
            gesture.validate()?;
            lib.words.insert(word.to_uppercase(), gesture);
        }
        for (ch, gesture) in letters {
            gesture.validate()?;
            lib.letters.insert(ch.to_ascii_uppercase(), gesture);
        }
        Ok(lib)
    }

    /// Load a library from its JSON definition.
    ///
    /// The definition has a `words` map and a `letters` map; letter keys must
    /// be exactly one character. Gestures accept either a bare batch list or
    /// an object with a `batches` field.
    pub fn from_json(json: &str) -> SignwaveResult<Self> {
        let def: LibraryDef = serde_json::from_str(json)
            .map_err(|e| SignwaveError::validation(format!("gesture library: {e}")))?;

        let mut letters = Vec::with_capacity(def.letters.len());
        for (key, gesture) in def.letters {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(SignwaveError::validation(format!(
                    "letter key '{key}' must be a single character"
                )));
            };
            letters.push((ch, gesture));
        }
        Self::new(def.words, letters)
    }

    /// Whole-word gesture for `word`, if one exists.
    pub fn word(&self, word: &str) -> Option<&Gesture> {
        self.words.get(&word.to_uppercase())
    }

    /// Single-letter gesture for `ch`, if one exists.
    pub fn letter(&self, ch: char) -> Option<&Gesture> {
        self.letters.get(&ch.to_ascii_uppercase())
    }

    /// `true` when the library has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.letters.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/library.rs"]
mod tests;
