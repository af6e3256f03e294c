use crate::avatar::animator::{AnimatorOpts, AvatarAnimator};
use crate::dispatch::dispatcher::Dispatcher;
use crate::foundation::error::SignwaveResult;
use crate::foundation::time::Seconds;
use crate::gesture::library::GestureLibrary;
use crate::playback::clip::ClipStore;
use crate::playback::selector::{ChannelSelector, PlaybackCtx};
use crate::playback::surface::{OverlaySurface, StatusLine};
use crate::rig::skeleton::Skeleton;
use crate::transcript::model::TokenTrack;
use crate::transcript::wire::TranscribeReply;

pub use crate::dispatch::dispatcher::PlayheadSnapshot;

/// Engine tuning knobs.
///
/// The timing constants are deliberate simplifications: clip length is never
/// introspected and segment starts are compared with a fixed tolerance.
#[derive(Clone, Copy, Debug)]
pub struct EngineOpts {
    /// Tolerance when comparing segment starts, seconds.
    pub segment_epsilon: f64,
    /// Hard cap on pending words before the queue self-clears.
    pub queue_cap: usize,
    /// Fixed clip presentation duration, seconds.
    pub clip_secs: f64,
    /// Hold duration when even the avatar path fails, seconds.
    pub fallback_secs: f64,
    /// Interpreter stepping options.
    pub animator: AnimatorOpts,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            segment_epsilon: 0.1,
            queue_cap: 50,
            clip_secs: 1.5,
            fallback_secs: 1.0,
            animator: AnimatorOpts::default(),
        }
    }
}

/// Session-oriented facade over the dispatcher, channel selector, and avatar
/// interpreter.
///
/// One engine per overlay instance; all mutable state lives here, so several
/// engines can coexist and tests are deterministic. The host drives it with
/// two tick sources: a poll timer forwarding the video playhead
/// ([`on_time_tick`](Self::on_time_tick)) and the frame-presentation
/// callback ([`on_frame_tick`](Self::on_frame_tick)).
pub struct SignEngine {
    opts: EngineOpts,
    enabled: bool,
    track: Option<TokenTrack>,
    dispatcher: Dispatcher,
    animator: AvatarAnimator,
    clips: Box<dyn ClipStore>,
    surface: Box<dyn OverlaySurface>,
}

impl SignEngine {
    /// Build an engine over its collaborators.
    pub fn new(
        skeleton: Skeleton,
        library: GestureLibrary,
        clips: Box<dyn ClipStore>,
        surface: Box<dyn OverlaySurface>,
        opts: EngineOpts,
    ) -> Self {
        let selector = ChannelSelector::new(opts.clip_secs, opts.fallback_secs);
        Self {
            opts,
            enabled: false,
            track: None,
            dispatcher: Dispatcher::new(selector, opts.segment_epsilon, opts.queue_cap),
            animator: AvatarAnimator::new(skeleton, library, opts.animator),
            clips,
            surface,
        }
    }

    /// `true` while the overlay is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable the overlay. Idempotent.
    ///
    /// Without a loaded track the status shows that transcription is still
    /// in flight upstream.
    pub fn enable(&mut self) {
        self.enabled = true;
        let status = if self.track.is_some() {
            StatusLine::Ready
        } else {
            StatusLine::Loading
        };
        self.surface.set_status(status);
    }

    /// Disable the overlay, cancelling everything in flight.
    pub fn disable(&mut self) {
        let mut ctx = PlaybackCtx {
            clips: self.clips.as_mut(),
            surface: self.surface.as_mut(),
            animator: &mut self.animator,
        };
        self.dispatcher.reset(&mut ctx);
        self.enabled = false;
    }

    /// Install the token track for the current video.
    ///
    /// Replaces any previous track and cancels in-flight playback, so a
    /// navigation to a new video starts clean.
    pub fn load_track(&mut self, track: TokenTrack) {
        let mut ctx = PlaybackCtx {
            clips: self.clips.as_mut(),
            surface: self.surface.as_mut(),
            animator: &mut self.animator,
        };
        self.dispatcher.reset(&mut ctx);
        self.track = Some(track);
        self.surface.set_status(StatusLine::Ready);
    }

    /// Install the track from a decoded transcription-service reply.
    ///
    /// Service warnings surface through the status line; a service failure
    /// becomes an error status and an [`Upstream`](crate::SignwaveError::Upstream)
    /// error, leaving the engine idle until retried.
    #[tracing::instrument(skip(self, reply))]
    pub fn load_reply(&mut self, reply: TranscribeReply) -> SignwaveResult<()> {
        match reply.into_track() {
            Ok((track, warnings)) => {
                self.load_track(track);
                if let Some(warnings) = warnings {
                    tracing::warn!(%warnings, "transcription finished with warnings");
                    self.surface.set_status(StatusLine::Warning(warnings));
                }
                Ok(())
            }
            Err(error) => {
                self.surface.set_status(StatusLine::Error(error.to_string()));
                Err(error)
            }
        }
    }

    /// Forward one poll-timer tick.
    ///
    /// `now` is host-monotonic time; `playhead` is a snapshot of the video
    /// element. No-op while disabled, while no track is loaded, or while the
    /// video is paused.
    pub fn on_time_tick(&mut self, now: Seconds, playhead: PlayheadSnapshot) {
        if !self.enabled {
            return;
        }
        let Some(track) = self.track.as_ref() else {
            return;
        };
        let mut ctx = PlaybackCtx {
            clips: self.clips.as_mut(),
            surface: self.surface.as_mut(),
            animator: &mut self.animator,
        };
        self.dispatcher.on_time_tick(now, playhead, track, &mut ctx);
    }

    /// Forward a seek or navigation jump.
    ///
    /// Cancels both queues and the rig pose synchronously, then re-resolves
    /// the playhead so the display does not lag the jump.
    pub fn on_seek(&mut self, now: Seconds, playhead: PlayheadSnapshot) {
        if !self.enabled {
            return;
        }
        let Some(track) = self.track.as_ref() else {
            return;
        };
        let mut ctx = PlaybackCtx {
            clips: self.clips.as_mut(),
            surface: self.surface.as_mut(),
            animator: &mut self.animator,
        };
        self.dispatcher.on_seek(now, playhead, track, &mut ctx);
    }

    /// Forward one frame-presentation tick.
    ///
    /// Advances the interpreter by one step, propagates its spelled-letter
    /// indicator to the surface, and advances the word queue past completed
    /// sessions.
    pub fn on_frame_tick(&mut self, now: Seconds) {
        if !self.enabled {
            return;
        }
        self.animator.tick(now);
        if let Some(text) = self.animator.take_text_update() {
            // An empty update is the clear-on-idle; the status line already
            // moved on by then.
            if !text.is_empty() {
                self.surface.set_status(StatusLine::Spelling(text));
            }
        }
        let mut ctx = PlaybackCtx {
            clips: self.clips.as_mut(),
            surface: self.surface.as_mut(),
            animator: &mut self.animator,
        };
        self.dispatcher.poll_session(now, &mut ctx);
    }

    /// Effective engine options.
    pub fn opts(&self) -> &EngineOpts {
        &self.opts
    }

    /// Live skeleton pose, for the rendering substrate to read each frame.
    pub fn skeleton(&self) -> &Skeleton {
        self.animator.skeleton()
    }

    /// Word currently playing, if any.
    pub fn current_word(&self) -> Option<&str> {
        self.dispatcher.current_word()
    }

    /// Number of words waiting in the queue.
    pub fn queue_len(&self) -> usize {
        self.dispatcher.queue_len()
    }

    /// `true` while a word playback session is active.
    pub fn is_playing(&self) -> bool {
        self.dispatcher.is_playing()
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
