// Host-side tests for the reveal and typing-reset state machines.

#![allow(dead_code)]
mod state {
    include!("../src/state.rs");
}

use state::*;

#[test]
fn reveal_starts_hidden() {
    assert_eq!(RevealState::default(), RevealState::Hidden);
    assert!(!RevealState::default().is_revealed());
}

#[test]
fn reveal_ignores_non_intersecting_notifications() {
    let mut s = RevealState::Hidden;
    assert!(!s.observe(false));
    assert!(!s.observe(false));
    assert_eq!(s, RevealState::Hidden);
}

#[test]
fn reveal_is_one_shot_and_monotonic() {
    let mut s = RevealState::Hidden;
    assert!(s.observe(true));
    assert!(s.is_revealed());

    // Scrolling out and back in never hides or re-triggers
    for intersecting in [false, true, false, true, false] {
        assert!(!s.observe(intersecting));
        assert!(s.is_revealed());
    }
}

#[test]
fn reveal_state_from_class() {
    assert_eq!(RevealState::from_revealed(true), RevealState::Revealed);
    assert_eq!(RevealState::from_revealed(false), RevealState::Hidden);

    // An element that already carries the class is never revealed again
    let mut s = RevealState::from_revealed(true);
    assert!(!s.observe(true));
}

#[test]
fn typing_reset_fires_exactly_once() {
    let latch = ResetLatch::new();
    let mut fired = 0;
    for _ in 0..3 {
        // enter, leave
        if latch.try_fire(true) {
            fired += 1;
        }
        if latch.try_fire(false) {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
    assert!(latch.has_fired());
}

#[test]
fn typing_reset_waits_for_first_entry() {
    let latch = ResetLatch::new();
    assert!(!latch.try_fire(false));
    assert!(!latch.has_fired());
    assert!(latch.try_fire(true));
    assert!(!latch.try_fire(true));
}

#[test]
fn setup_waits_only_while_loading() {
    assert!(should_defer("loading"));
    assert!(!should_defer("interactive"));
    assert!(!should_defer("complete"));
}
