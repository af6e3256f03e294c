use std::cell::Cell;
use std::rc::Rc;

use crate::foundation::time::Seconds;

/// One-shot completion signal for a word's playback.
///
/// The engine is single-threaded and cooperatively scheduled, so the handle
/// is a plain shared cell. It fires at most once and never un-fires.
#[derive(Clone, Debug, Default)]
pub struct Completion(Rc<Cell<bool>>);

impl Completion {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A signal that is already complete.
    pub(crate) fn fired() -> Self {
        let done = Self::default();
        done.fire();
        done
    }

    pub(crate) fn fire(&self) {
        self.0.set(true);
    }

    /// `true` once the word this signal tracks has finished playing.
    pub fn is_complete(&self) -> bool {
        self.0.get()
    }
}

/// Rendering path chosen for one word.
#[derive(Debug)]
pub(crate) enum Channel {
    /// Precomputed clip shown until the deadline passes. Clip length is never
    /// introspected; the presentation duration is a fixed constant.
    Clip {
        /// Monotonic deadline after which the word counts as played.
        until: Seconds,
    },
    /// Avatar spelling; completes when the interpreter drains its queue.
    Avatar {
        /// Signal fired by the interpreter.
        done: Completion,
    },
    /// Recovery hold after a hard failure; advances at the deadline so a bad
    /// word can never stall the queue.
    Hold {
        /// Monotonic deadline after which the queue advances.
        until: Seconds,
    },
}

/// Ephemeral per-word playback state.
///
/// Created when the dispatcher dequeues a word, dropped when its completion
/// is observed. At most one session exists at a time.
#[derive(Debug)]
pub(crate) struct PlaybackSession {
    pub(crate) word: String,
    pub(crate) channel: Channel,
}

impl PlaybackSession {
    pub(crate) fn is_complete(&self, now: Seconds) -> bool {
        match &self.channel {
            Channel::Clip { until } | Channel::Hold { until } => now.at_or_past(*until),
            Channel::Avatar { done } => done.is_complete(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/session.rs"]
mod tests;
