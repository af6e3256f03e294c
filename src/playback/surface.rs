//! The overlay surface seam: how rendered clips and status are presented.

use crate::playback::clip::ClipData;

/// Status line shown under the sign rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusLine {
    /// Transcription is being prepared upstream.
    Loading,
    /// Tokens are loaded and playback can begin.
    Ready,
    /// Ready, with a non-fatal upstream warning attached.
    Warning(String),
    /// Idle between segments.
    Listening,
    /// A clip for the word is showing.
    Signing(String),
    /// The avatar is spelling the text.
    Spelling(String),
    /// Upstream failure message.
    Error(String),
}

impl StatusLine {
    /// Human-readable status text.
    pub fn message(&self) -> String {
        match self {
            Self::Loading => "Transcribing video...".to_owned(),
            Self::Ready => "Ready".to_owned(),
            Self::Warning(warning) => format!("Ready ({warning})"),
            Self::Listening => "Listening...".to_owned(),
            Self::Signing(word) => format!("Signing: {word}"),
            Self::Spelling(text) => format!("Spelling: {text}"),
            Self::Error(message) => message.clone(),
        }
    }
}

/// Visual region that presents either the clip or the avatar canvas plus a
/// status line.
///
/// The engine only toggles visibility and status text; layout, styling, and
/// actual rendering belong to the host. Implementations must tolerate
/// redundant calls (hiding an already-hidden clip, repeating a status).
pub trait OverlaySurface {
    /// Show `clip` in the clip region.
    fn show_clip(&mut self, clip: &ClipData);
    /// Hide the clip region.
    fn hide_clip(&mut self);
    /// Toggle the avatar canvas visibility.
    fn set_avatar_visible(&mut self, visible: bool);
    /// Replace the status line.
    fn set_status(&mut self, status: StatusLine);
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// `show_clip` with the clip payload.
    ClipShown(ClipData),
    /// `hide_clip`.
    ClipHidden,
    /// `set_avatar_visible`.
    AvatarVisible(bool),
    /// `set_status`.
    Status(StatusLine),
}

/// Headless [`OverlaySurface`] that records every call.
///
/// Used by the engine's tests and by hosts without a UI (diagnostics,
/// dry runs).
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    /// Empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first.
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// The most recent status, if any was set.
    pub fn last_status(&self) -> Option<&StatusLine> {
        self.events.iter().rev().find_map(|e| match e {
            SurfaceEvent::Status(status) => Some(status),
            _ => None,
        })
    }

    /// Discard recorded calls.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl OverlaySurface for RecordingSurface {
    fn show_clip(&mut self, clip: &ClipData) {
        self.events.push(SurfaceEvent::ClipShown(clip.clone()));
    }

    fn hide_clip(&mut self) {
        self.events.push(SurfaceEvent::ClipHidden);
    }

    fn set_avatar_visible(&mut self, visible: bool) {
        self.events.push(SurfaceEvent::AvatarVisible(visible));
    }

    fn set_status(&mut self, status: StatusLine) {
        self.events.push(SurfaceEvent::Status(status));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/surface.rs"]
mod tests;
