use super::*;
use std::collections::BTreeMap;

use smallvec::smallvec;

use crate::avatar::animator::{AnimatorOpts, AvatarAnimator};
use crate::foundation::error::{SignwaveError, SignwaveResult};
use crate::gesture::library::GestureLibrary;
use crate::gesture::model::{Axis, BoneMove, BoneProperty, Gesture, MoveDirection};
use crate::playback::clip::{ClipData, StaticClipStore};
use crate::playback::session::Channel;
use crate::playback::surface::{RecordingSurface, SurfaceEvent};
use crate::rig::pose::BonePose;
use crate::rig::skeleton::Skeleton;

struct FailingStore;

impl ClipStore for FailingStore {
    fn fetch(&mut self, _word: &str) -> SignwaveResult<Option<ClipData>> {
        Err(SignwaveError::lookup("store offline"))
    }
}

fn rig() -> Skeleton {
    let mut rest = BTreeMap::new();
    rest.insert("hand".to_owned(), BonePose::default());
    Skeleton::from_rest(rest)
}

fn library() -> GestureLibrary {
    GestureLibrary::new(
        [],
        [(
            'A',
            Gesture {
                batches: vec![smallvec![BoneMove {
                    bone: "hand".to_owned(),
                    property: BoneProperty::Rotation,
                    axis: Axis::X,
                    limit: 0.3,
                    direction: MoveDirection::Increase,
                }]],
            },
        )],
    )
    .unwrap()
}

fn animator() -> AvatarAnimator {
    AvatarAnimator::new(rig(), library(), AnimatorOpts::default())
}

fn selector() -> ChannelSelector {
    ChannelSelector::new(1.5, 1.0)
}

#[test]
fn clip_hit_toggles_visibility_before_the_wait() {
    let mut store = StaticClipStore::new();
    store.insert("aloha", ClipData(vec![7]));
    let mut surface = RecordingSurface::new();
    let mut animator = animator();

    let session = selector().start_word(
        "Aloha",
        Seconds(10.0),
        &mut PlaybackCtx {
            clips: &mut store,
            surface: &mut surface,
            animator: &mut animator,
        },
    );

    assert_eq!(
        surface.events(),
        &[
            SurfaceEvent::Status(StatusLine::Signing("ALOHA".to_owned())),
            SurfaceEvent::AvatarVisible(false),
            SurfaceEvent::ClipShown(ClipData(vec![7])),
        ]
    );
    match session.channel {
        Channel::Clip { until } => assert_eq!(until, Seconds(11.5)),
        other => panic!("expected clip channel, got {other:?}"),
    }
    assert!(!session.is_complete(Seconds(11.4)));
    assert!(session.is_complete(Seconds(11.5)));
}

#[test]
fn clip_hit_cancels_leftover_avatar_motion() {
    let mut store = StaticClipStore::new();
    store.insert("a", ClipData(vec![1]));
    let mut surface = RecordingSurface::new();
    let mut animator = animator();
    animator.play_word("a").unwrap();
    assert!(!animator.is_idle());

    selector().start_word(
        "a",
        Seconds(0.0),
        &mut PlaybackCtx {
            clips: &mut store,
            surface: &mut surface,
            animator: &mut animator,
        },
    );
    assert!(animator.is_idle());
}

#[test]
fn lookup_miss_falls_back_to_avatar_spelling() {
    let mut store = StaticClipStore::new();
    let mut surface = RecordingSurface::new();
    let mut animator = animator();

    let session = selector().start_word(
        "a",
        Seconds(0.0),
        &mut PlaybackCtx {
            clips: &mut store,
            surface: &mut surface,
            animator: &mut animator,
        },
    );

    assert_eq!(
        surface.events(),
        &[
            SurfaceEvent::Status(StatusLine::Signing("A".to_owned())),
            SurfaceEvent::ClipHidden,
            SurfaceEvent::AvatarVisible(true),
            SurfaceEvent::Status(StatusLine::Spelling("A".to_owned())),
        ]
    );
    assert!(matches!(session.channel, Channel::Avatar { .. }));
    assert!(animator.queue_len() > 0);
    assert!(!session.is_complete(Seconds(1e6)));
}

#[test]
fn fetch_failure_also_falls_back_to_avatar() {
    let mut store = FailingStore;
    let mut surface = RecordingSurface::new();
    let mut animator = animator();

    let session = selector().start_word(
        "a",
        Seconds(0.0),
        &mut PlaybackCtx {
            clips: &mut store,
            surface: &mut surface,
            animator: &mut animator,
        },
    );
    assert!(matches!(session.channel, Channel::Avatar { .. }));
}

#[test]
fn unready_rig_degrades_to_a_timed_hold() {
    let mut store = StaticClipStore::new();
    let mut surface = RecordingSurface::new();
    let mut animator = AvatarAnimator::new(Skeleton::empty(), library(), AnimatorOpts::default());

    let session = selector().start_word(
        "a",
        Seconds(5.0),
        &mut PlaybackCtx {
            clips: &mut store,
            surface: &mut surface,
            animator: &mut animator,
        },
    );
    match session.channel {
        Channel::Hold { until } => assert_eq!(until, Seconds(6.0)),
        other => panic!("expected hold channel, got {other:?}"),
    }
    assert!(session.is_complete(Seconds(6.0)));
}
