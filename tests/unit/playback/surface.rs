use super::*;

#[test]
fn status_messages_match_the_product_strings() {
    assert_eq!(StatusLine::Loading.message(), "Transcribing video...");
    assert_eq!(StatusLine::Ready.message(), "Ready");
    assert_eq!(StatusLine::Listening.message(), "Listening...");
    assert_eq!(
        StatusLine::Signing("HELLO".to_owned()).message(),
        "Signing: HELLO"
    );
    assert_eq!(StatusLine::Spelling("A".to_owned()).message(), "Spelling: A");
    assert_eq!(
        StatusLine::Error("Transcription failed".to_owned()).message(),
        "Transcription failed"
    );
    assert_eq!(
        StatusLine::Warning("skipped 2".to_owned()).message(),
        "Ready (skipped 2)"
    );
}

#[test]
fn recording_surface_captures_calls_in_order() {
    let mut surface = RecordingSurface::new();
    surface.set_status(StatusLine::Ready);
    surface.show_clip(&ClipData(vec![9]));
    surface.set_avatar_visible(true);
    surface.hide_clip();
    surface.set_status(StatusLine::Listening);

    assert_eq!(
        surface.events(),
        &[
            SurfaceEvent::Status(StatusLine::Ready),
            SurfaceEvent::ClipShown(ClipData(vec![9])),
            SurfaceEvent::AvatarVisible(true),
            SurfaceEvent::ClipHidden,
            SurfaceEvent::Status(StatusLine::Listening),
        ]
    );
    assert_eq!(surface.last_status(), Some(&StatusLine::Listening));

    surface.clear_events();
    assert!(surface.events().is_empty());
    assert_eq!(surface.last_status(), None);
}
