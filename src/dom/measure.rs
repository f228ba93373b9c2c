//! Live page measurements fed into scroll and resize events.

use web_sys::Window;

use super::elements::PageElements;
use crate::state::scroll::{ScrollSnapshot, SectionBounds, StatsBounds};

/// `window.innerWidth`, or 0 when unreadable (treated as the narrowest tier).
pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_snapshot(window: &Window, elements: &PageElements) -> ScrollSnapshot {
    let sections = elements
        .sections
        .iter()
        .map(|section| SectionBounds {
            id: section.get_attribute("id"),
            top: f64::from(section.offset_top()),
        })
        .collect();
    let stats = elements.stats_section.as_ref().map(|stats| StatsBounds {
        top: f64::from(stats.offset_top()),
        height: f64::from(stats.client_height()),
    });
    ScrollSnapshot {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        viewport_height: viewport_height(window),
        sections,
        stats,
    }
}
