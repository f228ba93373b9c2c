//! Testimonial carousel model.
//!
//! The strip shows `cards_per_view` cards at once and pages one card at a
//! time. `current` is the index of the leftmost visible card. Stepping past
//! the last full window wraps to the start and stepping back from the start
//! wraps to the last full window.
//!
//! The page width is passed into every operation rather than cached: the
//! last full window depends on the breakpoint in effect at the moment of the
//! call.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::config::SiteConfig;

/// Responsive layout tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    #[must_use]
    pub fn cards_per_view(self) -> usize {
        match self {
            Self::Mobile => 1,
            Self::Tablet => 2,
            Self::Desktop => 3,
        }
    }

    /// CSS `flex-basis` / `max-width` for each card at this tier.
    #[must_use]
    pub fn card_basis(self) -> &'static str {
        match self {
            Self::Mobile => "100%",
            Self::Tablet => "calc(50% - 15px)",
            Self::Desktop => "calc(33.333% - 20px)",
        }
    }
}

/// Width thresholds separating the tiers. Both bounds are inclusive on the
/// narrower side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub mobile_max: f64,
    pub tablet_max: f64,
}

impl Breakpoints {
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self { mobile_max: config.mobile_max_width, tablet_max: config.tablet_max_width }
    }

    #[must_use]
    pub fn classify(self, width: f64) -> Breakpoint {
        if width <= self.mobile_max {
            Breakpoint::Mobile
        } else if width <= self.tablet_max {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Everything the browser layer needs to draw the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderLayout {
    /// Horizontal strip offset in percent (zero or negative).
    pub offset_percent: f64,
    /// Dot index to mark active.
    pub active_dot: usize,
    /// Per-card `flex-basis` and `max-width`.
    pub card_basis: &'static str,
}

impl SliderLayout {
    /// CSS `transform` value for the strip.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent)
    }

    /// CSS `flex` shorthand for each card.
    #[must_use]
    pub fn card_flex(&self) -> String {
        format!("0 0 {}", self.card_basis)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    current: usize,
    total: usize,
    breakpoints: Breakpoints,
}

impl CarouselState {
    #[must_use]
    pub fn new(total: usize, breakpoints: Breakpoints) -> Self {
        Self { current: 0, total, breakpoints }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn cards_per_view(&self, width: f64) -> usize {
        self.breakpoints.classify(width).cards_per_view()
    }

    /// Index of the last full window at `width`. Zero when there are fewer
    /// cards than fit on one page.
    #[must_use]
    pub fn max_slide(&self, width: f64) -> usize {
        self.total.saturating_sub(self.cards_per_view(width))
    }

    pub fn advance(&mut self, direction: Direction, width: f64) -> SliderLayout {
        let max = self.max_slide(width);
        self.current = match direction {
            Direction::Next if self.current >= max => 0,
            Direction::Next => self.current + 1,
            Direction::Prev if self.current == 0 => max,
            Direction::Prev => self.current - 1,
        };
        self.layout(width)
    }

    /// Jump straight to `index`. Dot indices are valid by construction, so
    /// only the window bound is left unchecked here.
    pub fn go_to(&mut self, index: usize, width: f64) -> SliderLayout {
        self.current = index;
        self.layout(width)
    }

    /// Re-layout after a viewport change, pulling `current` back inside the
    /// last full window for the new width.
    pub fn resize(&mut self, width: f64) -> SliderLayout {
        self.current = self.current.min(self.max_slide(width));
        self.layout(width)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(&self, width: f64) -> SliderLayout {
        let tier = self.breakpoints.classify(width);
        let slide_width = 100.0 / tier.cards_per_view() as f64;
        // `+ 0.0` turns -0 into 0 so slide 0 renders as `translateX(0%)`.
        let offset_percent = -(self.current as f64 * slide_width) + 0.0;
        SliderLayout { offset_percent, active_dot: self.current, card_basis: tier.card_basis() }
    }
}
