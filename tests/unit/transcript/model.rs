use super::*;

fn token(start: f64, end: f64, words: &[&str]) -> SignToken {
    SignToken {
        start,
        end,
        tokens: words.iter().map(|w| (*w).to_owned()).collect(),
    }
}

#[test]
fn new_rejects_inverted_ranges() {
    assert!(TokenTrack::new(vec![token(2.0, 1.0, &["a"])]).is_err());
    assert!(TokenTrack::new(vec![token(1.0, 1.0, &["a"])]).is_ok());
}

#[test]
fn new_rejects_non_finite_bounds() {
    assert!(TokenTrack::new(vec![token(f64::NAN, 1.0, &[])]).is_err());
    assert!(TokenTrack::new(vec![token(0.0, f64::INFINITY, &[])]).is_err());
}

#[test]
fn contains_is_inclusive_on_both_ends() {
    let t = token(1.0, 2.0, &["a"]);
    assert!(t.contains(Seconds(1.0)));
    assert!(t.contains(Seconds(2.0)));
    assert!(!t.contains(Seconds(0.99)));
    assert!(!t.contains(Seconds(2.01)));
}

#[test]
fn resolve_at_picks_first_match_for_overlapping_segments() {
    let track = TokenTrack::new(vec![
        token(0.0, 2.0, &["first"]),
        token(1.0, 3.0, &["second"]),
    ])
    .unwrap();

    let hit = track.resolve_at(Seconds(1.5)).unwrap();
    assert_eq!(hit.tokens, vec!["first".to_owned()]);

    let hit = track.resolve_at(Seconds(2.5)).unwrap();
    assert_eq!(hit.tokens, vec!["second".to_owned()]);
}

#[test]
fn resolve_at_misses_outside_every_segment() {
    let track = TokenTrack::new(vec![token(1.0, 2.0, &["a"])]).unwrap();
    assert!(track.resolve_at(Seconds(5.0)).is_none());
    assert!(TokenTrack::default().resolve_at(Seconds(0.0)).is_none());
}
