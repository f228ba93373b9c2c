//! Scroll-reveal bookkeeping.
//!
//! Watched cards start hidden and are revealed the first time they
//! intersect the viewport. Nothing ever hides them again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const REVEAL_TRANSITION: &str = "opacity 0.4s ease, transform 0.4s ease";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStyle {
    Hidden,
    Shown,
}

impl RevealStyle {
    #[must_use]
    pub fn opacity(self) -> &'static str {
        match self {
            Self::Hidden => "0",
            Self::Shown => "1",
        }
    }

    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Hidden => "translateY(20px)",
            Self::Shown => "translateY(0)",
        }
    }
}

/// Reveal state for every watched element, indexed in query order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn style(&self, index: usize) -> RevealStyle {
        if self.is_revealed(index) { RevealStyle::Shown } else { RevealStyle::Hidden }
    }

    /// Record an intersection callback. Returns `true` only for the
    /// hidden → shown transition.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}
