use std::collections::VecDeque;

use crate::foundation::error::{SignwaveError, SignwaveResult};
use crate::foundation::time::Seconds;
use crate::gesture::library::GestureLibrary;
use crate::gesture::model::BoneBatch;
use crate::playback::session::Completion;
use crate::rig::skeleton::Skeleton;

/// One unit of interpreter work.
#[derive(Clone, Debug)]
pub(crate) enum AnimationStep {
    /// Update the spelled-letter indicator. Zero frame cost.
    Text(String),
    /// Drive a batch of bone moves to their limits.
    Bones(BoneBatch),
}

/// Interpreter stepping options.
#[derive(Clone, Copy, Debug)]
pub struct AnimatorOpts {
    /// Channel units advanced per frame tick.
    pub step_speed: f64,
    /// Pause after a bone batch resolves, before the next step, seconds.
    pub inter_step_pause: f64,
}

impl Default for AnimatorOpts {
    fn default() -> Self {
        Self {
            step_speed: 0.1,
            inter_step_pause: 0.8,
        }
    }
}

/// Frame-stepped interpreter that drives the skeleton to spell words.
///
/// The animator owns the animation queue and the rig's live pose; nothing
/// else mutates either. It is ticked once per rendered frame by the host's
/// frame-presentation callback and never blocks: each tick advances the head
/// of the queue by at most one speed increment per bone channel.
///
/// State machine per tick: idle (queue empty, rig at rest) -> stepping
/// (advancing the head step) -> inter-step pause (after a batch resolves) ->
/// stepping, or idle once the queue drains.
pub struct AvatarAnimator {
    queue: VecDeque<AnimationStep>,
    skeleton: Skeleton,
    library: GestureLibrary,
    opts: AnimatorOpts,
    paused: bool,
    pause_until: Option<Seconds>,
    spelled: String,
    text_dirty: bool,
    pending: Option<Completion>,
}

impl AvatarAnimator {
    /// Build an animator over a skeleton and gesture library.
    pub fn new(skeleton: Skeleton, library: GestureLibrary, opts: AnimatorOpts) -> Self {
        Self {
            queue: VecDeque::new(),
            skeleton,
            library,
            opts,
            paused: false,
            pause_until: None,
            spelled: String::new(),
            text_dirty: false,
            pending: None,
        }
    }

    /// Live skeleton pose, for the rendering substrate to read each frame.
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// `true` when the queue is drained and no pause is in flight.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty() && self.pause_until.is_none()
    }

    /// Suspend stepping. The pose holds as-is until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume stepping after [`pause`](Self::pause).
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// `true` while stepping is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current spelled-letter indicator text.
    pub fn spelled_text(&self) -> &str {
        &self.spelled
    }

    /// Take the latest indicator text if it changed since the last call.
    pub fn take_text_update(&mut self) -> Option<String> {
        if self.text_dirty {
            self.text_dirty = false;
            Some(self.spelled.clone())
        } else {
            None
        }
    }

    /// Number of steps waiting in the animation queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Advance the interpreter by one frame.
    ///
    /// `now` is host-monotonic time, used only for the inter-step pause.
    /// When the queue empties while a completion signal is pending, the
    /// signal fires exactly once.
    pub fn tick(&mut self, now: Seconds) {
        if self.paused {
            return;
        }

        if let Some(until) = self.pause_until {
            if !now.at_or_past(until) {
                return;
            }
            // Pause over: retire the batch that triggered it.
            self.pause_until = None;
            self.queue.pop_front();
            return;
        }

        let Some(step) = self.queue.front_mut() else {
            if let Some(done) = self.pending.take() {
                done.fire();
            }
            return;
        };

        match step {
            AnimationStep::Text(text) => {
                self.spelled = std::mem::take(text);
                self.text_dirty = true;
                self.queue.pop_front();
            }
            AnimationStep::Bones(batch) => {
                let speed = self.opts.step_speed;
                advance_batch(&mut self.skeleton, batch, speed);
                if batch.is_empty() {
                    self.pause_until = Some(now.after(self.opts.inter_step_pause));
                }
            }
        }
    }

    /// Queue `word` for playback and return its completion signal.
    ///
    /// The word is upper-cased. A whole-word gesture wins when the library
    /// has one; otherwise each character is spelled in order, skipping
    /// characters with no gesture (their text marker still shows). The
    /// signal resolves once everything enqueued here has drained.
    ///
    /// Concurrent words are not supported: the caller must wait for the
    /// previous signal. A still-pending signal is released immediately so no
    /// caller can hang on it.
    #[tracing::instrument(skip(self))]
    pub fn play_word(&mut self, word: &str) -> SignwaveResult<Completion> {
        if !self.skeleton.is_loaded() {
            return Err(SignwaveError::unready("avatar rig is not loaded"));
        }

        let word = word.trim();
        if word.is_empty() {
            return Ok(Completion::fired());
        }

        if let Some(stale) = self.pending.take() {
            tracing::warn!("previous word still pending; releasing its completion");
            stale.fire();
        }

        let upper = word.to_uppercase();
        if let Some(gesture) = self.library.word(&upper).cloned() {
            self.queue.push_back(AnimationStep::Text(upper));
            for batch in gesture.batches {
                self.queue.push_back(AnimationStep::Bones(batch));
            }
        } else {
            for ch in upper.chars() {
                self.queue.push_back(AnimationStep::Text(ch.to_string()));
                match self.library.letter(ch) {
                    Some(gesture) => {
                        for batch in gesture.batches.clone() {
                            self.queue.push_back(AnimationStep::Bones(batch));
                        }
                    }
                    None => tracing::debug!(letter = %ch, "no gesture for letter; skipping"),
                }
            }
        }

        let done = Completion::new();
        self.pending = Some(done.clone());
        Ok(done)
    }

    /// Cancel everything in flight and return the rig to rest.
    ///
    /// Empties the queue, releases a pending completion (firing it so no
    /// caller hangs), resets the pose, and clears the indicator text.
    /// Idempotent: a second call is a no-op apart from the rest-pose write.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.pause_until = None;
        if let Some(done) = self.pending.take() {
            done.fire();
        }
        self.skeleton.reset();
        if !self.spelled.is_empty() {
            self.spelled.clear();
            self.text_dirty = true;
        }
    }
}

/// Advance every move in `batch` by one speed increment, dropping moves that
/// reached their limit. Moves naming unknown bones are dropped too; the
/// batch still resolves.
fn advance_batch(skeleton: &mut Skeleton, batch: &mut BoneBatch, speed: f64) {
    batch.retain(|mv| {
        let Some(bone) = skeleton.bone_mut(&mv.bone) else {
            tracing::debug!(bone = %mv.bone, "unknown bone in batch; dropping move");
            return false;
        };
        let channel = bone.channel_mut(mv.property, mv.axis);
        if mv.at_limit(*channel) {
            return false;
        }
        *channel = mv.advance(*channel, speed);
        !mv.at_limit(*channel)
    });
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/animator.rs"]
mod tests;
