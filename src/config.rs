//! Page behavior configuration.
//!
//! Defaults mirror [`crate::consts`]. A page may override any subset by
//! embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="siteConfig">
//!   { "auto_advance_ms": 8000, "log_level": "debug" }
//! </script>
//! ```
//!
//! Missing keys keep their defaults. Invalid JSON or inconsistent values are
//! rejected as a whole and the caller falls back to [`SiteConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ACTIVE_SECTION_LEAD_PX, ANCHOR_OFFSET_PX, AUTO_ADVANCE_MS, COUNTER_DURATION_MS, COUNTER_FRAME_MS,
    MOBILE_MAX_WIDTH, NAVBAR_SCROLLED_PX, QUOTE_NOTICE, SCROLL_TOP_VISIBLE_PX, TABLET_MAX_WIDTH, THEME_STORAGE_KEY,
};
use crate::error::SiteError;
use crate::state::theme::Theme;

/// Console log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub mobile_max_width: f64,
    pub tablet_max_width: f64,
    pub navbar_scrolled_px: f64,
    pub scroll_top_visible_px: f64,
    pub active_section_lead_px: f64,
    pub anchor_offset_px: f64,
    pub auto_advance_ms: u32,
    pub counter_duration_ms: f64,
    pub counter_frame_ms: f64,
    pub storage_key: String,
    pub default_theme: Theme,
    pub quote_notice: String,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: MOBILE_MAX_WIDTH,
            tablet_max_width: TABLET_MAX_WIDTH,
            navbar_scrolled_px: NAVBAR_SCROLLED_PX,
            scroll_top_visible_px: SCROLL_TOP_VISIBLE_PX,
            active_section_lead_px: ACTIVE_SECTION_LEAD_PX,
            anchor_offset_px: ANCHOR_OFFSET_PX,
            auto_advance_ms: AUTO_ADVANCE_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            counter_frame_ms: COUNTER_FRAME_MS,
            storage_key: THEME_STORAGE_KEY.to_owned(),
            default_theme: Theme::Dark,
            quote_notice: QUOTE_NOTICE.to_owned(),
            log_level: LogLevel::Info,
        }
    }
}

impl SiteConfig {
    /// Parse an override block and validate the merged result.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SiteError> {
        if !(self.mobile_max_width > 0.0 && self.mobile_max_width < self.tablet_max_width) {
            return Err(SiteError::Config(format!(
                "breakpoints must satisfy 0 < mobile ({}) < tablet ({})",
                self.mobile_max_width, self.tablet_max_width
            )));
        }
        if self.auto_advance_ms == 0 {
            return Err(SiteError::Config("auto_advance_ms must be positive".into()));
        }
        if !(self.counter_frame_ms > 0.0 && self.counter_duration_ms >= self.counter_frame_ms) {
            return Err(SiteError::Config(format!(
                "counter timing must satisfy 0 < frame ({}) <= duration ({})",
                self.counter_frame_ms, self.counter_duration_ms
            )));
        }
        if self.storage_key.trim().is_empty() {
            return Err(SiteError::Config("storage_key must not be empty".into()));
        }
        Ok(())
    }
}
