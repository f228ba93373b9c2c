#![allow(clippy::float_cmp)]

use super::*;

fn sections(tops: &[(&str, f64)]) -> Vec<SectionBounds> {
    tops.iter()
        .map(|(id, top)| SectionBounds { id: Some((*id).to_owned()), top: *top })
        .collect()
}

fn snapshot_with_stats(scroll_y: f64, viewport_height: f64, top: f64, height: f64) -> ScrollSnapshot {
    ScrollSnapshot {
        scroll_y,
        viewport_height,
        sections: Vec::new(),
        stats: Some(StatsBounds { top, height }),
    }
}

// =============================================================
// Thresholds
// =============================================================

#[test]
fn navbar_threshold_is_exclusive() {
    assert!(!navbar_scrolled(0.0, 100.0));
    assert!(!navbar_scrolled(100.0, 100.0));
    assert!(navbar_scrolled(101.0, 100.0));
}

#[test]
fn scroll_top_threshold_is_exclusive() {
    assert!(!scroll_top_visible(500.0, 500.0));
    assert!(scroll_top_visible(500.5, 500.0));
}

// =============================================================
// Active section
// =============================================================

#[test]
fn active_section_picks_last_qualifying() {
    let s = sections(&[("home", 0.0), ("services", 800.0), ("contact", 1600.0)]);
    assert_eq!(active_section(&s, 650.0, 200.0), Some("services"));
}

#[test]
fn active_section_at_top_is_first() {
    let s = sections(&[("home", 0.0), ("services", 800.0)]);
    assert_eq!(active_section(&s, 0.0, 200.0), Some("home"));
    assert_eq!(active_section(&s, 599.0, 200.0), Some("home"));
    assert_eq!(active_section(&s, 600.0, 200.0), Some("services"));
}

#[test]
fn active_section_none_when_nothing_qualifies() {
    let s = sections(&[("about", 900.0)]);
    assert_eq!(active_section(&s, 100.0, 200.0), None);
    assert_eq!(active_section(&[], 100.0, 200.0), None);
}

#[test]
fn later_section_wins_ties() {
    let s = sections(&[("a", 400.0), ("b", 400.0)]);
    assert_eq!(active_section(&s, 300.0, 200.0), Some("b"));
}

#[test]
fn trailing_section_without_id_clears_match() {
    let mut s = sections(&[("home", 0.0)]);
    s.push(SectionBounds { id: None, top: 300.0 });
    assert_eq!(active_section(&s, 200.0, 200.0), None);
    assert_eq!(active_section(&s, 50.0, 200.0), Some("home"));
}

#[test]
fn link_matching_requires_hash_prefix() {
    assert!(link_is_active(Some("#services"), Some("services")));
    assert!(!link_is_active(Some("services"), Some("services")));
    assert!(!link_is_active(Some("#home"), Some("services")));
    assert!(!link_is_active(Some("#"), None));
    assert!(!link_is_active(None, Some("services")));
}

#[test]
fn anchor_offset_subtracts_header() {
    assert_eq!(anchor_scroll_top(1200.0, 80.0), 1120.0);
    assert_eq!(anchor_scroll_top(40.0, 80.0), -40.0);
}

// =============================================================
// Stats trigger
// =============================================================

#[test]
fn stats_trigger_fires_when_midpoint_enters_view() {
    let mut trigger = StatsTrigger::default();
    // Midpoint at 2000 + 200 = 2200.
    assert!(!trigger.check(&snapshot_with_stats(1000.0, 1200.0, 2000.0, 400.0)));
    assert!(!trigger.has_fired());
    assert!(trigger.check(&snapshot_with_stats(1001.0, 1200.0, 2000.0, 400.0)));
    assert!(trigger.has_fired());
}

#[test]
fn stats_trigger_fires_only_once() {
    let mut trigger = StatsTrigger::default();
    let mut fired = 0;
    for scroll_y in [0.0, 1500.0, 3000.0, 200.0, 1500.0, 5000.0] {
        if trigger.check(&snapshot_with_stats(scroll_y, 900.0, 2000.0, 400.0)) {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
}

#[test]
fn stats_trigger_ignores_pages_without_stats() {
    let mut trigger = StatsTrigger::default();
    let snapshot = ScrollSnapshot { scroll_y: 10_000.0, viewport_height: 900.0, ..Default::default() };
    assert!(!trigger.check(&snapshot));
    assert!(!trigger.has_fired());
}
