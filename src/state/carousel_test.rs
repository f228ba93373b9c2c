#![allow(clippy::float_cmp)]

use super::*;

const MOBILE: f64 = 375.0;
const TABLET: f64 = 900.0;
const DESKTOP: f64 = 1440.0;

fn carousel(total: usize) -> CarouselState {
    CarouselState::new(total, Breakpoints::default())
}

// =============================================================
// Breakpoints
// =============================================================

#[test]
fn cards_per_view_follows_breakpoints() {
    let c = carousel(6);
    assert_eq!(c.cards_per_view(320.0), 1);
    assert_eq!(c.cards_per_view(768.0), 1);
    assert_eq!(c.cards_per_view(769.0), 2);
    assert_eq!(c.cards_per_view(1024.0), 2);
    assert_eq!(c.cards_per_view(1025.0), 3);
    assert_eq!(c.cards_per_view(1920.0), 3);
}

#[test]
fn card_basis_matches_tier() {
    assert_eq!(Breakpoint::Mobile.card_basis(), "100%");
    assert_eq!(Breakpoint::Tablet.card_basis(), "calc(50% - 15px)");
    assert_eq!(Breakpoint::Desktop.card_basis(), "calc(33.333% - 20px)");
}

#[test]
fn max_slide_saturates_for_short_strips() {
    assert_eq!(carousel(6).max_slide(DESKTOP), 3);
    assert_eq!(carousel(6).max_slide(TABLET), 4);
    assert_eq!(carousel(6).max_slide(MOBILE), 5);
    assert_eq!(carousel(2).max_slide(DESKTOP), 0);
    assert_eq!(carousel(0).max_slide(MOBILE), 0);
}

// =============================================================
// Advance / wrap
// =============================================================

#[test]
fn next_from_one_moves_to_two_on_desktop() {
    let mut c = carousel(6);
    c.go_to(1, DESKTOP);
    c.advance(Direction::Next, DESKTOP);
    assert_eq!(c.current(), 2);
}

#[test]
fn next_from_last_window_wraps_to_zero() {
    let mut c = carousel(6);
    c.go_to(3, DESKTOP);
    c.advance(Direction::Next, DESKTOP);
    assert_eq!(c.current(), 0);
}

#[test]
fn prev_from_zero_wraps_to_last_window() {
    let mut c = carousel(6);
    c.advance(Direction::Prev, DESKTOP);
    assert_eq!(c.current(), 3);
    let mut c = carousel(6);
    c.advance(Direction::Prev, MOBILE);
    assert_eq!(c.current(), 5);
}

#[test]
fn prev_steps_back_one() {
    let mut c = carousel(6);
    c.go_to(2, TABLET);
    c.advance(Direction::Prev, TABLET);
    assert_eq!(c.current(), 1);
}

#[test]
fn max_slide_is_recomputed_per_call() {
    let mut c = carousel(6);
    c.go_to(4, TABLET);
    // Desktop's last window is 3, so 4 is already past it and wraps.
    c.advance(Direction::Next, DESKTOP);
    assert_eq!(c.current(), 0);
}

#[test]
fn bounds_hold_for_any_advance_sequence() {
    let directions = [
        Direction::Next,
        Direction::Next,
        Direction::Prev,
        Direction::Next,
        Direction::Next,
        Direction::Next,
        Direction::Prev,
        Direction::Prev,
        Direction::Prev,
        Direction::Prev,
        Direction::Next,
    ];
    for width in [MOBILE, TABLET, DESKTOP] {
        let mut c = carousel(6);
        let max = c.max_slide(width);
        for direction in directions {
            c.advance(direction, width);
            assert!(c.current() <= max, "current {} exceeds {max} at width {width}", c.current());
        }
    }
}

#[test]
fn full_cycle_visits_every_window() {
    let mut c = carousel(6);
    let mut seen = vec![c.current()];
    for _ in 0..4 {
        c.advance(Direction::Next, DESKTOP);
        seen.push(c.current());
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 0]);
}

#[test]
fn single_page_strip_stays_at_zero() {
    let mut c = carousel(2);
    c.advance(Direction::Next, DESKTOP);
    assert_eq!(c.current(), 0);
    c.advance(Direction::Prev, DESKTOP);
    assert_eq!(c.current(), 0);
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_clamps_into_new_window() {
    let mut c = carousel(6);
    c.go_to(5, MOBILE);
    let layout = c.resize(DESKTOP);
    assert_eq!(c.current(), 3);
    assert_eq!(layout.active_dot, 3);
}

#[test]
fn resize_keeps_in_bounds_index() {
    let mut c = carousel(6);
    c.go_to(2, DESKTOP);
    c.resize(MOBILE);
    assert_eq!(c.current(), 2);
}

// =============================================================
// Layout
// =============================================================

#[test]
fn layout_at_zero_has_no_offset() {
    let layout = carousel(6).layout(DESKTOP);
    assert_eq!(layout.offset_percent, 0.0);
    assert_eq!(layout.transform(), "translateX(0%)");
    assert_eq!(layout.active_dot, 0);
}

#[test]
fn layout_offset_scales_with_cards_per_view() {
    let mut c = carousel(6);
    let layout = c.go_to(2, MOBILE);
    assert_eq!(layout.offset_percent, -200.0);
    assert_eq!(layout.transform(), "translateX(-200%)");
    assert_eq!(layout.card_basis, "100%");

    let layout = c.layout(TABLET);
    assert_eq!(layout.offset_percent, -100.0);
    assert_eq!(layout.card_flex(), "0 0 calc(50% - 15px)");

    let layout = c.layout(DESKTOP);
    assert!((layout.offset_percent + 66.666_666).abs() < 1e-3);
    assert_eq!(layout.card_basis, "calc(33.333% - 20px)");
}

#[test]
fn go_to_marks_matching_dot() {
    let mut c = carousel(6);
    assert_eq!(c.go_to(4, MOBILE).active_dot, 4);
}
