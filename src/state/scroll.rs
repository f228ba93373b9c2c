//! Scroll-position driven page state.
//!
//! Every check here is recomputed from a fresh [`ScrollSnapshot`] on each
//! scroll event. Only [`StatsTrigger`] carries state between events.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// A `<section>` as measured at event time.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    /// The section's `id`, if it has one.
    pub id: Option<String>,
    /// Document offset of the section's top edge.
    pub top: f64,
}

/// Vertical extent of the statistics band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsBounds {
    pub top: f64,
    pub height: f64,
}

/// Page measurements taken when a scroll (or load) event fires.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Sections in document order.
    pub sections: Vec<SectionBounds>,
    pub stats: Option<StatsBounds>,
}

#[must_use]
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[must_use]
pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Id of the section the reader is in: the last section in document order
/// whose top, less `lead`, is at or above the scroll position. A later
/// qualifying section without an id clears the match.
#[must_use]
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, lead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - lead)
        .and_then(|section| section.id.as_deref())
}

/// Whether a nav link `href` points at the active section.
#[must_use]
pub fn link_is_active(href: Option<&str>, active: Option<&str>) -> bool {
    match (href, active) {
        (Some(href), Some(id)) => href.strip_prefix('#') == Some(id),
        _ => false,
    }
}

/// Scroll destination for an in-page anchor, compensating for the fixed
/// header.
#[must_use]
pub fn anchor_scroll_top(target_top: f64, header_offset: f64) -> f64 {
    target_top - header_offset
}

/// One-shot latch for the statistics counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsTrigger {
    fired: bool,
}

impl StatsTrigger {
    #[must_use]
    pub fn has_fired(self) -> bool {
        self.fired
    }

    /// Returns `true` exactly once: the first time the bottom of the viewport
    /// passes the midpoint of the stats band.
    pub fn check(&mut self, snapshot: &ScrollSnapshot) -> bool {
        if self.fired {
            return false;
        }
        let Some(stats) = snapshot.stats else {
            return false;
        };
        let viewport_bottom = snapshot.scroll_y + snapshot.viewport_height;
        if viewport_bottom > stats.top + stats.height / 2.0 {
            self.fired = true;
            return true;
        }
        false
    }
}
