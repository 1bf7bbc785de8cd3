// Host-side tests for the paging state machine and gesture classification.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod gesture {
    include!("../src/core/gesture.rs");
}
mod pager {
    include!("../src/core/pager.rs");
}

use constants::*;
use gesture::*;
use pager::*;

fn flat_page() -> ScrollMetrics {
    ScrollMetrics::new(800.0, 800.0, 0.0)
}

fn tall_page(scroll_top: f64) -> ScrollMetrics {
    ScrollMetrics::new(2000.0, 800.0, scroll_top)
}

fn down() -> Gesture {
    Gesture::from_wheel(120.0).unwrap()
}

fn up() -> Gesture {
    Gesture::from_wheel(-120.0).unwrap()
}

#[test]
fn move_to_out_of_range_is_ignored() {
    let mut p = Pager::new(3);
    for target in [3usize, 4, 100, usize::MAX] {
        assert!(!p.move_to(target));
        assert_eq!(p.current(), 0);
        assert!(!p.is_transitioning());
    }
}

#[test]
fn move_to_sets_index_lock_and_offset() {
    for i in 0..4 {
        let mut p = Pager::new(4);
        assert!(p.move_to(i));
        assert_eq!(p.current(), i);
        assert!(p.is_transitioning());
        p.release_lock();
        assert!(!p.is_transitioning());
        assert_eq!(p.offset_vh(), -(i as f32 * 100.0));
    }
}

#[test]
fn translate_css_matches_offset() {
    assert_eq!(translate_css(0), "translateY(0vh)");
    assert_eq!(translate_css(1), "translateY(-100vh)");
    assert_eq!(translate_css(2), "translateY(-200vh)");
}

#[test]
fn move_to_is_refused_while_locked() {
    let mut p = Pager::new(3);
    assert!(p.move_to(1));
    assert!(!p.move_to(2));
    assert_eq!(p.current(), 1);
    p.release_lock();
    assert!(p.move_to(2));
    assert_eq!(p.current(), 2);
}

#[test]
fn gestures_are_dropped_while_transitioning() {
    let mut p = Pager::new(3);
    assert!(p.move_to(1));
    assert_eq!(p.decide(down(), &flat_page()), PageDecision::Locked);
    assert_eq!(p.handle_gesture(down(), &flat_page()), None);
    assert_eq!(p.handle_gesture(up(), &flat_page()), None);
    let swipe = Gesture::from_touch(400.0, 100.0, SWIPE_THRESHOLD_PX).unwrap();
    assert_eq!(p.handle_gesture(swipe, &flat_page()), None);
    assert_eq!(p.current(), 1);
}

#[test]
fn flat_page_pages_immediately_in_gesture_direction() {
    let mut p = Pager::new(3);
    assert_eq!(p.handle_gesture(down(), &flat_page()), Some(1));
    p.release_lock();
    assert_eq!(p.handle_gesture(down(), &flat_page()), Some(2));
    p.release_lock();
    assert_eq!(p.handle_gesture(up(), &flat_page()), Some(1));
}

#[test]
fn edges_absorb_without_wraparound() {
    let mut p = Pager::new(2);
    assert_eq!(p.decide(up(), &flat_page()), PageDecision::AtEdge);
    assert_eq!(p.handle_gesture(up(), &flat_page()), None);
    assert!(!p.is_transitioning());

    assert_eq!(p.handle_gesture(down(), &flat_page()), Some(1));
    p.release_lock();
    assert_eq!(p.decide(down(), &flat_page()), PageDecision::AtEdge);
    assert_eq!(p.handle_gesture(down(), &flat_page()), None);
    assert_eq!(p.current(), 1);
}

#[test]
fn single_page_never_moves() {
    let mut p = Pager::new(1);
    assert_eq!(p.handle_gesture(down(), &flat_page()), None);
    assert_eq!(p.handle_gesture(up(), &flat_page()), None);
    assert_eq!(p.current(), 0);
}

#[test]
fn zero_pages_is_treated_as_one() {
    let p = Pager::new(0);
    assert_eq!(p.page_count(), 1);
}

#[test]
fn scrollable_page_absorbs_until_bottom() {
    let mut p = Pager::new(3);
    // simulate the browser scrolling the page on each absorbed wheel tick
    let mut top = 300.0;
    loop {
        let m = tall_page(top);
        match p.decide(down(), &m) {
            PageDecision::Absorbed => {
                assert_eq!(p.current(), 0);
                top = (top + 400.0).min(1200.0);
            }
            PageDecision::Move(t) => {
                assert_eq!(t, 1);
                assert_eq!(top, 1200.0);
                break;
            }
            other => panic!("unexpected decision {:?}", other),
        }
    }
    assert_eq!(p.handle_gesture(down(), &tall_page(1200.0)), Some(1));
}

#[test]
fn scrollable_page_absorbs_upward_until_top() {
    let mut p = Pager::new(3);
    assert!(p.move_to(1));
    p.release_lock();
    assert_eq!(p.decide(up(), &tall_page(10.0)), PageDecision::Absorbed);
    assert_eq!(p.handle_gesture(up(), &tall_page(0.0)), Some(0));
}

#[test]
fn scrollable_page_at_top_still_absorbs_downward() {
    let p = Pager::new(3);
    assert_eq!(p.decide(down(), &tall_page(0.0)), PageDecision::Absorbed);
}

#[test]
fn bottom_detection_tolerates_subpixel_slack() {
    let m = ScrollMetrics::new(2000.0, 800.0, 1199.5);
    assert!(m.at_bottom());
    assert!(!m.absorbs(Direction::Forward));
    let m = ScrollMetrics::new(2000.0, 800.0, 1198.0);
    assert!(!m.at_bottom());
    assert!(m.absorbs(Direction::Forward));
}

#[test]
fn non_scrollable_page_never_absorbs() {
    let m = ScrollMetrics::new(600.0, 800.0, 0.0);
    assert!(!m.is_scrollable());
    assert!(!m.absorbs(Direction::Forward));
    assert!(!m.absorbs(Direction::Backward));
}

#[test]
fn touch_threshold_filters_short_swipes() {
    assert_eq!(Gesture::from_touch(500.0, 451.0, SWIPE_THRESHOLD_PX), None); // 49
    let g = Gesture::from_touch(500.0, 449.0, SWIPE_THRESHOLD_PX).unwrap(); // 51
    assert_eq!(g.direction, Direction::Forward);
    assert_eq!(g.magnitude, 51.0);
    let g = Gesture::from_touch(449.0, 500.0, SWIPE_THRESHOLD_PX).unwrap(); // -51
    assert_eq!(g.direction, Direction::Backward);
    // exactly at the threshold counts as a swipe
    assert!(Gesture::from_touch(100.0, 50.0, SWIPE_THRESHOLD_PX).is_some());
}

#[test]
fn short_touch_never_changes_page() {
    let mut p = Pager::new(3);
    for delta in [-49.0, -10.0, 0.0, 10.0, 49.0] {
        if let Some(g) = Gesture::from_touch(300.0, 300.0 - delta, SWIPE_THRESHOLD_PX) {
            p.handle_gesture(g, &flat_page());
        }
        assert_eq!(p.current(), 0);
    }
    let g = Gesture::from_touch(300.0, 249.0, SWIPE_THRESHOLD_PX).unwrap();
    assert_eq!(p.handle_gesture(g, &flat_page()), Some(1));
}

#[test]
fn wheel_direction_follows_delta_sign() {
    assert_eq!(Gesture::from_wheel(3.0).unwrap().direction, Direction::Forward);
    assert_eq!(Gesture::from_wheel(-3.0).unwrap().direction, Direction::Backward);
    assert_eq!(Gesture::from_wheel(0.0), None);
}

#[test]
fn wheel_delta_is_normalised_to_px() {
    assert_eq!(wheel_delta_px(100.0, 0, 900.0), 100.0);
    assert_eq!(wheel_delta_px(3.0, 1, 900.0), 3.0 * WHEEL_LINE_PX);
    assert_eq!(wheel_delta_px(-1.0, 2, 900.0), -900.0);
}

#[test]
fn tap_is_not_a_swipe_even_with_zero_threshold() {
    assert_eq!(Gesture::from_touch(300.0, 300.0, 0.0), None);
    let mut p = Pager::new(3);
    assert!(p.move_to(1));
    p.release_lock();
    if let Some(g) = Gesture::from_touch(300.0, 300.0, 0.0) {
        p.handle_gesture(g, &flat_page());
    }
    assert_eq!(p.current(), 1);
    // any travel at all still counts
    let g = Gesture::from_touch(300.0, 301.0, 0.0).unwrap();
    assert_eq!(g.direction, Direction::Backward);
}

#[test]
fn lock_dropped_at_teardown_does_not_freeze_paging() {
    let mut p = Pager::new(3);
    assert_eq!(p.handle_gesture(down(), &flat_page()), Some(1));
    assert!(p.is_transitioning());
    // pagehide cancels the timer and frees the lock in the same step
    p.release_lock();
    assert_eq!(p.decide(down(), &flat_page()), PageDecision::Move(2));
    assert_eq!(p.handle_gesture(down(), &flat_page()), Some(2));
}
