//! Page-wide event dispatch.
//!
//! [`PageCore`] owns every piece of component state for the page and turns
//! each [`PageEvent`] into a list of [`PageAction`]s. It never touches the
//! browser: the hydrate-only `dom` layer measures the page, feeds events
//! in, and applies the actions that come back.
//!
//! Events are handled one at a time to completion, matching the browser
//! event loop. Components do not see each other's state; the only shared
//! thing is the action list, applied in order.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::SiteConfig;
use crate::state::carousel::{Breakpoints, CarouselState, Direction, SliderLayout};
use crate::state::counter::CounterAnimation;
use crate::state::nav::NavMenu;
use crate::state::quote::QuoteRequest;
use crate::state::reveal::{RevealSet, RevealStyle};
use crate::state::scroll::{
    ScrollSnapshot, StatsTrigger, active_section, anchor_scroll_top, navbar_scrolled, scroll_top_visible,
};
use crate::state::theme::Theme;

/// What the page looked like at start-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    /// Theme in effect at start-up, already resolved against the stored
    /// preference by [`load_theme`](crate::state::theme::load_theme).
    pub theme: Theme,
    /// Parsed `data-target` of every stat number, in document order.
    pub stat_targets: Vec<u64>,
    /// Number of testimonial cards, or `None` when the slider is absent.
    pub testimonial_count: Option<usize>,
    /// Number of carousel dots.
    pub dot_count: usize,
    /// Number of elements under scroll-reveal.
    pub reveal_count: usize,
}

/// Inputs from the browser. Widths are `window.innerWidth` at dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// `window` load.
    Load { width: f64, scroll: ScrollSnapshot },
    Scroll(ScrollSnapshot),
    Resize { width: f64 },
    ThemeToggleClicked,
    HamburgerClicked,
    NavLinkClicked,
    /// In-page anchor click; `target_top` is `None` when the id is missing.
    AnchorClicked { target_top: Option<f64> },
    ScrollTopClicked,
    CarouselStep { direction: Direction, width: f64 },
    DotClicked { index: usize, width: f64 },
    AutoAdvanceTick { width: f64 },
    AnimationFrame,
    RevealIntersection { index: usize, intersecting: bool },
    QuoteSubmitted(QuoteRequest),
}

/// Effects for the browser layer, applied in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    ApplyTheme(Theme),
    PersistTheme(Theme),
    SetNavOpen(bool),
    SetNavbarScrolled(bool),
    /// Mark links pointing at this section id; clear all others.
    SetActiveSection(Option<String>),
    SetScrollTopVisible(bool),
    SetStatText { index: usize, text: String },
    RequestAnimationFrame,
    RenderSlider(SliderLayout),
    StartAutoAdvance,
    RestartAutoAdvance,
    SmoothScrollTo(f64),
    Reveal(usize),
    ShowNotice(String),
    ResetForm,
}

pub struct PageCore {
    config: SiteConfig,
    theme: Theme,
    nav: NavMenu,
    stats: StatsTrigger,
    stat_targets: Vec<u64>,
    counters: Vec<CounterAnimation>,
    carousel: Option<CarouselState>,
    dot_count: usize,
    reveal: RevealSet,
}

impl PageCore {
    #[must_use]
    pub fn new(config: SiteConfig, layout: PageLayout) -> Self {
        let breakpoints = Breakpoints::from_config(&config);
        let carousel = layout
            .testimonial_count
            .map(|total| CarouselState::new(total, breakpoints));
        Self {
            theme: layout.theme,
            nav: NavMenu::default(),
            stats: StatsTrigger::default(),
            stat_targets: layout.stat_targets,
            counters: Vec::new(),
            carousel,
            dot_count: layout.dot_count,
            reveal: RevealSet::new(layout.reveal_count),
            config,
        }
    }

    /// Actions to run as soon as the script is evaluated, before `load`.
    #[must_use]
    pub fn init(&self) -> Vec<PageAction> {
        vec![PageAction::ApplyTheme(self.theme)]
    }

    pub fn handle(&mut self, event: PageEvent) -> Vec<PageAction> {
        match event {
            PageEvent::Load { width, scroll } => self.on_load(width, &scroll),
            PageEvent::Scroll(scroll) => self.on_scroll(&scroll),
            PageEvent::Resize { width } => self.render_slider(|c| c.resize(width)),
            PageEvent::ThemeToggleClicked => self.toggle_theme(),
            PageEvent::HamburgerClicked => vec![PageAction::SetNavOpen(self.nav.toggle())],
            PageEvent::NavLinkClicked => {
                self.nav.close();
                vec![PageAction::SetNavOpen(false)]
            }
            PageEvent::AnchorClicked { target_top } => target_top
                .map(|top| PageAction::SmoothScrollTo(anchor_scroll_top(top, self.config.anchor_offset_px)))
                .into_iter()
                .collect(),
            PageEvent::ScrollTopClicked => vec![PageAction::SmoothScrollTo(0.0)],
            PageEvent::CarouselStep { direction, width } => {
                self.manual_slide(|c| Some(c.advance(direction, width)))
            }
            PageEvent::DotClicked { index, width } => {
                let dot_count = self.dot_count;
                self.manual_slide(|c| (index < dot_count).then(|| c.go_to(index, width)))
            }
            PageEvent::AutoAdvanceTick { width } => self.render_slider(|c| c.advance(Direction::Next, width)),
            PageEvent::AnimationFrame => self.step_counters(),
            PageEvent::RevealIntersection { index, intersecting } => {
                if self.reveal.observe(index, intersecting) {
                    vec![PageAction::Reveal(index)]
                } else {
                    Vec::new()
                }
            }
            PageEvent::QuoteSubmitted(quote) => {
                log::info!(
                    "quote request received: {} of {} fields filled ({})",
                    quote.filled_count(),
                    quote.fields.len(),
                    quote.field_names().join(", ")
                );
                vec![PageAction::ShowNotice(self.config.quote_notice.clone()), PageAction::ResetForm]
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    #[must_use]
    pub fn stats_started(&self) -> bool {
        self.stats.has_fired()
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&CarouselState> {
        self.carousel.as_ref()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.reveal.is_revealed(index)
    }

    /// Inline style for reveal element `index` as of now.
    #[must_use]
    pub fn reveal_style(&self, index: usize) -> RevealStyle {
        self.reveal.style(index)
    }

    // --- Handlers ---

    fn on_load(&mut self, width: f64, scroll: &ScrollSnapshot) -> Vec<PageAction> {
        let mut actions = self.check_stats(scroll);
        if let Some(carousel) = &self.carousel {
            actions.push(PageAction::RenderSlider(carousel.layout(width)));
            actions.push(PageAction::StartAutoAdvance);
        }
        actions
    }

    fn on_scroll(&mut self, scroll: &ScrollSnapshot) -> Vec<PageAction> {
        let config = &self.config;
        let active = active_section(&scroll.sections, scroll.scroll_y, config.active_section_lead_px);
        let mut actions = vec![
            PageAction::SetNavbarScrolled(navbar_scrolled(scroll.scroll_y, config.navbar_scrolled_px)),
            PageAction::SetActiveSection(active.map(str::to_owned)),
        ];
        actions.extend(self.check_stats(scroll));
        actions.push(PageAction::SetScrollTopVisible(scroll_top_visible(
            scroll.scroll_y,
            self.config.scroll_top_visible_px,
        )));
        actions
    }

    fn toggle_theme(&mut self) -> Vec<PageAction> {
        self.theme = self.theme.other();
        log::debug!("theme switched to {}", self.theme.as_str());
        vec![PageAction::ApplyTheme(self.theme), PageAction::PersistTheme(self.theme)]
    }

    fn check_stats(&mut self, scroll: &ScrollSnapshot) -> Vec<PageAction> {
        if !self.stats.check(scroll) {
            return Vec::new();
        }
        log::debug!("starting {} stat counters", self.stat_targets.len());
        self.counters = self
            .stat_targets
            .iter()
            .map(|&target| {
                CounterAnimation::new(target, self.config.counter_duration_ms, self.config.counter_frame_ms)
            })
            .collect();
        // The first frame renders synchronously with the trigger.
        self.step_counters()
    }

    fn step_counters(&mut self) -> Vec<PageAction> {
        let mut actions = Vec::new();
        let mut running = false;
        for (index, counter) in self.counters.iter_mut().enumerate() {
            if let Some(frame) = counter.step() {
                running |= !frame.finished;
                actions.push(PageAction::SetStatText { index, text: frame.text });
            }
        }
        if running {
            actions.push(PageAction::RequestAnimationFrame);
        }
        actions
    }

    fn render_slider(&mut self, op: impl FnOnce(&mut CarouselState) -> SliderLayout) -> Vec<PageAction> {
        self.carousel
            .as_mut()
            .map(|carousel| PageAction::RenderSlider(op(carousel)))
            .into_iter()
            .collect()
    }

    /// Next/prev/dot: re-render and reset the auto-advance period.
    fn manual_slide(&mut self, op: impl FnOnce(&mut CarouselState) -> Option<SliderLayout>) -> Vec<PageAction> {
        let Some(layout) = self.carousel.as_mut().and_then(op) else {
            return Vec::new();
        };
        vec![PageAction::RenderSlider(layout), PageAction::RestartAutoAdvance]
    }
}
