use super::*;

#[test]
fn approx_eq_uses_inclusive_epsilon() {
    assert!(Seconds(1.0).approx_eq(Seconds(1.05), 0.1));
    assert!(Seconds(1.0).approx_eq(Seconds(1.1), 0.1));
    assert!(!Seconds(1.0).approx_eq(Seconds(1.2), 0.1));
    assert!(Seconds(1.0).approx_eq(Seconds(0.95), 0.1));
}

#[test]
fn after_and_deadline_checks() {
    let deadline = Seconds(2.0).after(1.5);
    assert_eq!(deadline, Seconds(3.5));
    assert!(!Seconds(3.4).at_or_past(deadline));
    assert!(Seconds(3.5).at_or_past(deadline));
    assert!(Seconds(4.0).at_or_past(deadline));
}
