//! Statistic counter animation.
//!
//! A counter climbs from zero to its target in equal per-frame increments
//! sized so the climb lasts roughly `duration_ms` at one frame every
//! `frame_ms`. Intermediate frames show the floored value with thousands
//! separators; the final frame shows the exact target followed by `+`.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: u64, duration_ms: f64, frame_ms: f64) -> Self {
        let increment = target as f64 / (duration_ms / frame_ms);
        Self { target, increment, current: 0.0, finished: false }
    }

    /// Advance one frame. Returns `None` once the final frame was produced.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            let shown = self.current.floor() as u64;
            return Some(CounterFrame { text: format_thousands(shown), finished: false });
        }
        self.finished = true;
        Some(CounterFrame { text: format!("{}+", format_thousands(self.target)), finished: true })
    }
}

/// Parse a `data-target` attribute from its leading run of digits, so
/// `"500+"` reads as 500 and `"10,000"` stops at the comma. Leading
/// whitespace and a `+` sign are skipped. `None` when no digit leads or
/// the value does not fit.
#[must_use]
pub fn parse_target(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}

/// Group digits in threes with commas (`1234567` → `1,234,567`).
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
