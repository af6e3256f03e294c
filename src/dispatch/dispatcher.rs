use std::collections::VecDeque;

use crate::foundation::time::Seconds;
use crate::playback::selector::{ChannelSelector, PlaybackCtx};
use crate::playback::session::PlaybackSession;
use crate::playback::surface::StatusLine;
use crate::transcript::model::TokenTrack;

/// Snapshot of the host video element at poll time.
#[derive(Clone, Copy, Debug)]
pub struct PlayheadSnapshot {
    /// Current playback position in video time.
    pub position: Seconds,
    /// Whether the video is paused.
    pub paused: bool,
}

/// Maps the externally driven video clock onto the word queue and keeps
/// playback strictly sequential.
///
/// The dispatcher exclusively owns the word queue and the single active
/// session; it reaches the animator and surface only through the selector's
/// narrow play-one-word contract. The video clock is not ours: it can pause,
/// jump, or disappear between ticks, and every operation here tolerates that.
pub(crate) struct Dispatcher {
    selector: ChannelSelector,
    queue: VecDeque<String>,
    last_segment_start: Option<f64>,
    // Most recently enqueued word, surviving its own dequeue. Adjacent
    // repeats from overlapping segments dedup against this, not the whole
    // queue; cleared whenever the queue is cleared or playback goes idle.
    last_enqueued: Option<String>,
    session: Option<PlaybackSession>,
    segment_epsilon: f64,
    queue_cap: usize,
}

impl Dispatcher {
    pub(crate) fn new(selector: ChannelSelector, segment_epsilon: f64, queue_cap: usize) -> Self {
        Self {
            selector,
            queue: VecDeque::new(),
            last_segment_start: None,
            last_enqueued: None,
            session: None,
            segment_epsilon,
            queue_cap,
        }
    }

    pub(crate) fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.session.is_some()
    }

    pub(crate) fn current_word(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.word.as_str())
    }

    /// Resolve the active segment for the playhead and extend the queue.
    ///
    /// Segment containment is first-match in declaration order, so
    /// overlapping segments resolve exactly once per tick. A segment counts
    /// as new when its start differs from the previous one by more than the
    /// epsilon; polling jitter within the epsilon never re-enqueues.
    pub(crate) fn on_time_tick(
        &mut self,
        now: Seconds,
        playhead: PlayheadSnapshot,
        track: &TokenTrack,
        ctx: &mut PlaybackCtx<'_>,
    ) {
        if playhead.paused {
            return;
        }

        let token = track
            .resolve_at(playhead.position)
            .filter(|t| !t.tokens.is_empty());
        let Some(token) = token else {
            if self.session.is_none() && self.queue.is_empty() {
                ctx.surface.set_status(StatusLine::Listening);
            }
            return;
        };

        let is_new = self
            .last_segment_start
            .is_none_or(|start| (token.start - start).abs() > self.segment_epsilon);
        if !is_new {
            return;
        }

        tracing::debug!(start = token.start, words = token.tokens.len(), "new segment");
        self.last_segment_start = Some(token.start);

        if self.queue.len() > self.queue_cap {
            // Full clear, never a partial trim.
            tracing::warn!(
                len = self.queue.len(),
                cap = self.queue_cap,
                "word queue backed up; clearing"
            );
            self.queue.clear();
            self.last_enqueued = None;
        }

        for word in &token.tokens {
            let duplicate = self
                .last_enqueued
                .as_deref()
                .is_some_and(|last| last.eq_ignore_ascii_case(word));
            if !duplicate {
                self.queue.push_back(word.clone());
                self.last_enqueued = Some(word.clone());
            }
        }

        if self.session.is_none() {
            self.play_next(now, ctx);
        }
    }

    /// Cancellation point for seeks and navigation.
    ///
    /// Clears both queues and the rig pose synchronously, then re-runs the
    /// time tick so the display does not lag the jump.
    pub(crate) fn on_seek(
        &mut self,
        now: Seconds,
        playhead: PlayheadSnapshot,
        track: &TokenTrack,
        ctx: &mut PlaybackCtx<'_>,
    ) {
        self.reset(ctx);
        self.on_time_tick(now, playhead, track, ctx);
    }

    /// Drop all pending and in-flight playback.
    pub(crate) fn reset(&mut self, ctx: &mut PlaybackCtx<'_>) {
        self.last_segment_start = None;
        self.queue.clear();
        self.last_enqueued = None;
        self.session = None;
        ctx.animator.clear();
        ctx.surface.hide_clip();
    }

    /// Dequeue and start the next word, or settle into the idle state.
    ///
    /// Blank words are skipped without starting a session.
    fn play_next(&mut self, now: Seconds, ctx: &mut PlaybackCtx<'_>) {
        loop {
            let Some(word) = self.queue.pop_front() else {
                self.session = None;
                self.last_enqueued = None;
                ctx.animator.clear();
                ctx.surface.set_status(StatusLine::Listening);
                return;
            };
            if word.trim().is_empty() {
                continue;
            }
            self.session = Some(self.selector.start_word(&word, now, ctx));
            return;
        }
    }

    /// Advance past completed sessions.
    ///
    /// Strictly sequential: the next word starts only after the previous
    /// session's completion is observed, so two words never animate
    /// concurrently. Any failure path still lands here via its session's
    /// deadline, so one bad word can never stall the queue.
    pub(crate) fn poll_session(&mut self, now: Seconds, ctx: &mut PlaybackCtx<'_>) {
        loop {
            let finished = match &self.session {
                Some(session) => session.is_complete(now),
                None => return,
            };
            if !finished {
                return;
            }
            self.play_next(now, ctx);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dispatch/dispatcher.rs"]
mod tests;
