//! Signwave is a synchronized sign-language playback engine.
//!
//! It keeps an on-screen sign rendering (precomputed clips where available,
//! otherwise a skeletal avatar spelling words letter by letter) in lockstep
//! with an externally owned video clock. The public API is session-oriented:
//!
//! - Decode a [`TranscribeReply`] (or build a [`TokenTrack`] directly)
//! - Create a [`SignEngine`] over a clip store and an overlay surface
//! - Forward the host's poll-timer ticks and frame-presentation ticks
//!
//! The engine never reads wall-clock time and never spawns threads: both tick
//! sources are pushed in by the host, which makes playback fully
//! deterministic under test.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod avatar;
pub(crate) mod dispatch;
/// Session facade and host-facing options.
pub mod engine;
/// Gesture data model and library lookup.
pub mod gesture;
/// Playback channels and collaborator seams.
pub mod playback;
/// Skeletal rig pose and named-bone lookup.
pub mod rig;
/// Time-stamped tokens and the transcription-service wire format.
pub mod transcript;

pub use crate::foundation::error::{SignwaveError, SignwaveResult};
pub use crate::foundation::time::Seconds;

pub use crate::avatar::animator::{AnimatorOpts, AvatarAnimator};
pub use crate::engine::{EngineOpts, PlayheadSnapshot, SignEngine};
pub use crate::gesture::library::GestureLibrary;
pub use crate::gesture::model::{Axis, BoneBatch, BoneMove, BoneProperty, Gesture, MoveDirection};
pub use crate::playback::clip::{ClipData, ClipStore, StaticClipStore};
pub use crate::playback::session::Completion;
pub use crate::playback::surface::{
    OverlaySurface, RecordingSurface, StatusLine, SurfaceEvent,
};
pub use crate::rig::pose::{AxisTriple, BonePose};
pub use crate::rig::skeleton::Skeleton;
pub use crate::transcript::model::{SignToken, TokenTrack};
pub use crate::transcript::wire::TranscribeReply;
