use crate::avatar::animator::AvatarAnimator;
use crate::foundation::time::Seconds;
use crate::playback::clip::ClipStore;
use crate::playback::session::{Channel, PlaybackSession};
use crate::playback::surface::{OverlaySurface, StatusLine};

/// Mutable collaborators a playback operation may touch.
///
/// The dispatcher and selector reach the animator and surface only through
/// this context; neither owns them.
pub(crate) struct PlaybackCtx<'a> {
    pub(crate) clips: &'a mut dyn ClipStore,
    pub(crate) surface: &'a mut dyn OverlaySurface,
    pub(crate) animator: &'a mut AvatarAnimator,
}

/// Chooses the rendering channel for one word and normalizes both channels
/// into a single completion signal.
///
/// Clip first; on any miss or failure, the avatar spells the word; when even
/// that fails, a fixed hold keeps the queue moving. Visibility toggles happen
/// before any waiting so the surface never shows both channels at once.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ChannelSelector {
    clip_secs: f64,
    fallback_secs: f64,
}

impl ChannelSelector {
    pub(crate) fn new(clip_secs: f64, fallback_secs: f64) -> Self {
        Self {
            clip_secs,
            fallback_secs,
        }
    }

    /// Start playback for `word` and return its session.
    pub(crate) fn start_word(
        &self,
        word: &str,
        now: Seconds,
        ctx: &mut PlaybackCtx<'_>,
    ) -> PlaybackSession {
        let upper = word.to_uppercase();
        ctx.surface.set_status(StatusLine::Signing(upper.clone()));

        let key = word.to_lowercase();
        match ctx.clips.fetch(&key) {
            Ok(Some(clip)) => {
                // Stop any leftover avatar motion before the clip shows.
                ctx.animator.clear();
                ctx.surface.set_avatar_visible(false);
                ctx.surface.show_clip(&clip);
                return PlaybackSession {
                    word: word.to_owned(),
                    channel: Channel::Clip {
                        until: now.after(self.clip_secs),
                    },
                };
            }
            Ok(None) => {
                tracing::debug!(word, "no clip; falling back to avatar spelling");
            }
            Err(error) => {
                tracing::warn!(word, %error, "clip fetch failed; falling back to avatar spelling");
            }
        }

        ctx.surface.hide_clip();
        ctx.surface.set_avatar_visible(true);
        ctx.surface.set_status(StatusLine::Spelling(upper));

        let channel = match ctx.animator.play_word(word) {
            Ok(done) => Channel::Avatar { done },
            Err(error) => {
                tracing::warn!(word, %error, "avatar playback failed; holding before advancing");
                Channel::Hold {
                    until: now.after(self.fallback_secs),
                }
            }
        };

        PlaybackSession {
            word: word.to_owned(),
            channel,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/selector.rs"]
mod tests;
