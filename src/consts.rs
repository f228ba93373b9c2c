//! Shared constants for the page behaviors.
//!
//! Numeric values here are the defaults behind [`crate::config::SiteConfig`];
//! element ids and class names are the markup contract and are not
//! configurable.

// ── Layout breakpoints ──────────────────────────────────────────

/// Widths at or below this show one testimonial per page.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Widths at or below this (and above [`MOBILE_MAX_WIDTH`]) show two.
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

// ── Scroll thresholds ───────────────────────────────────────────

/// Scroll offset past which the navbar gets its `scrolled` style.
pub const NAVBAR_SCROLLED_PX: f64 = 100.0;

/// Scroll offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_VISIBLE_PX: f64 = 500.0;

/// A section counts as current once the scroll position is within this
/// distance above its top.
pub const ACTIVE_SECTION_LEAD_PX: f64 = 200.0;

/// Fixed-header compensation for in-page anchor scrolling.
pub const ANCHOR_OFFSET_PX: f64 = 80.0;

// ── Timing ──────────────────────────────────────────────────────

/// Carousel auto-advance period.
pub const AUTO_ADVANCE_MS: u32 = 5000;

/// Total counter animation time.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Assumed animation frame period (~60 fps).
pub const COUNTER_FRAME_MS: f64 = 16.0;

// ── Reveal observer ─────────────────────────────────────────────

pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_SELECTOR: &str = ".service-card, .process-step, .gallery-item, .testimonial-card";

// ── Storage ─────────────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "theme";

// ── Messages ────────────────────────────────────────────────────

pub const QUOTE_NOTICE: &str = "Thank you for your inquiry! We will contact you soon.";
pub const LOADED_MESSAGE: &str = "Apoorva Packers and Movers website loaded successfully!";

// ── Markup contract ─────────────────────────────────────────────

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const ID_THEME_TOGGLE: &str = "themeToggle";
pub const ID_HAMBURGER: &str = "hamburger";
pub const ID_NAV_MENU: &str = "navMenu";
pub const ID_NAVBAR: &str = "navbar";
pub const ID_SCROLL_TOP: &str = "scrollTop";
pub const ID_QUOTE_FORM: &str = "quoteForm";
pub const ID_SLIDER: &str = "testimonialsSlider";
pub const ID_PREV: &str = "prevBtn";
pub const ID_NEXT: &str = "nextBtn";
pub const ID_SITE_CONFIG: &str = "siteConfig";

pub const SEL_NAV_LINKS: &str = ".nav-link";
pub const SEL_SECTIONS: &str = "section";
pub const SEL_STATS_SECTION: &str = ".stats";
pub const SEL_STAT_NUMBERS: &str = ".stat-number";
pub const SEL_TESTIMONIALS: &str = ".testimonial-card";
pub const SEL_DOTS: &str = ".dot";
pub const SEL_ANCHORS: &str = "a[href^=\"#\"]";

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
