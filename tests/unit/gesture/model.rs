use super::*;
use smallvec::smallvec;

fn mv(direction: MoveDirection, limit: f64) -> BoneMove {
    BoneMove {
        bone: "arm".to_owned(),
        property: BoneProperty::Rotation,
        axis: Axis::X,
        limit,
        direction,
    }
}

#[test]
fn increase_advances_and_clamps_at_limit() {
    let m = mv(MoveDirection::Increase, 0.25);
    assert!(!m.at_limit(0.0));
    assert_eq!(m.advance(0.0, 0.1), 0.1);
    assert_eq!(m.advance(0.2, 0.1), 0.25);
    assert!(m.at_limit(0.25));
    assert!(m.at_limit(0.3));
}

#[test]
fn decrease_advances_and_clamps_at_limit() {
    let m = mv(MoveDirection::Decrease, -0.25);
    assert!(!m.at_limit(0.0));
    assert_eq!(m.advance(0.0, 0.1), -0.1);
    assert_eq!(m.advance(-0.2, 0.1), -0.25);
    assert!(m.at_limit(-0.25));
    assert!(m.at_limit(-0.3));
}

#[test]
fn value_already_past_limit_counts_as_done() {
    let m = mv(MoveDirection::Increase, 1.0);
    assert!(m.at_limit(1.5));
    let m = mv(MoveDirection::Decrease, 1.0);
    assert!(m.at_limit(0.5));
}

#[test]
fn serde_uses_compact_wire_names() {
    let m = mv(MoveDirection::Increase, 1.2);
    let json = serde_json::to_string(&m).unwrap();
    assert!(json.contains(r#""property":"rotation""#));
    assert!(json.contains(r#""axis":"x""#));
    assert!(json.contains(r#""direction":"+""#));

    let back: BoneMove = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn gesture_accepts_bare_and_wrapped_batch_lists() {
    let bare = r#"[[{"bone":"arm","property":"rotation","axis":"x","limit":1.0,"direction":"+"}]]"#;
    let wrapped = format!(r#"{{"batches":{bare}}}"#);

    let from_bare: Gesture = serde_json::from_str(bare).unwrap();
    let from_wrapped: Gesture = serde_json::from_str(&wrapped).unwrap();
    assert_eq!(from_bare, from_wrapped);
    assert_eq!(from_bare.batches.len(), 1);
    assert_eq!(from_bare.batches[0].len(), 1);
}

#[test]
fn validate_rejects_empty_bone_and_non_finite_limit() {
    let gesture = Gesture {
        batches: vec![smallvec![BoneMove {
            bone: String::new(),
            property: BoneProperty::Position,
            axis: Axis::Y,
            limit: 1.0,
            direction: MoveDirection::Increase,
        }]],
    };
    assert!(gesture.validate().is_err());

    let gesture = Gesture {
        batches: vec![smallvec![mv(MoveDirection::Increase, f64::NAN)]],
    };
    assert!(gesture.validate().is_err());
}
