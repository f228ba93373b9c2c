//! Event dispatch and action application.
//!
//! ARCHITECTURE
//! ============
//! A single [`PageBinding`] is created at start-up and shared by every
//! listener through an `Rc`. The core is borrowed only for the duration of
//! `handle`; actions are applied after the borrow ends, so an action that
//! synchronously fires another event (a blocking `alert`, a form reset)
//! can never observe a held borrow.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::elements::PageElements;
use super::measure::{scroll_snapshot, viewport_width};
use super::storage::LocalStorage;
use super::{set_class, set_style};
use crate::config::SiteConfig;
use crate::consts::{CLASS_ACTIVE, CLASS_SCROLLED, THEME_ATTRIBUTE};
use crate::error::SiteError;
use crate::page::{PageAction, PageCore, PageEvent};
use crate::state::carousel::SliderLayout;
use crate::state::reveal::{REVEAL_TRANSITION, RevealStyle};
use crate::state::scroll::link_is_active;
use crate::state::theme::{Theme, load_theme, save_theme};

pub struct PageBinding {
    pub(super) window: Window,
    pub(super) elements: PageElements,
    core: RefCell<PageCore>,
    store: RefCell<LocalStorage>,
    auto_advance: RefCell<Option<Interval>>,
    frame_pending: Cell<bool>,
}

impl PageBinding {
    pub fn new(window: Window, elements: PageElements, config: SiteConfig) -> Rc<Self> {
        let store = LocalStorage::open();
        let layout = elements.layout(load_theme(&store, &config.storage_key, config.default_theme));
        let core = PageCore::new(config, layout);
        Rc::new(Self {
            window,
            elements,
            core: RefCell::new(core),
            store: RefCell::new(store),
            auto_advance: RefCell::new(None),
            frame_pending: Cell::new(false),
        })
    }

    /// Apply start-up state before any event has fired.
    pub fn init(self: &Rc<Self>) {
        let actions = self.core.borrow().init();
        self.apply_all(actions);
        for (index, el) in self.elements.reveal.iter().enumerate() {
            let style = self.core.borrow().reveal_style(index);
            apply_reveal_style(el, style);
            set_style(el, "transition", REVEAL_TRANSITION);
        }
    }

    pub fn dispatch(self: &Rc<Self>, event: PageEvent) {
        let actions = self.core.borrow_mut().handle(event);
        self.apply_all(actions);
    }

    // --- Measured events ---

    pub fn width(&self) -> f64 {
        viewport_width(&self.window)
    }

    pub fn dispatch_scroll(self: &Rc<Self>) {
        let snapshot = scroll_snapshot(&self.window, &self.elements);
        self.dispatch(PageEvent::Scroll(snapshot));
    }

    pub fn dispatch_load(self: &Rc<Self>) {
        let scroll = scroll_snapshot(&self.window, &self.elements);
        let width = self.width();
        self.dispatch(PageEvent::Load { width, scroll });
    }

    // --- Actions ---

    fn apply_all(self: &Rc<Self>, actions: Vec<PageAction>) {
        for action in actions {
            self.apply(action);
        }
    }

    fn apply(self: &Rc<Self>, action: PageAction) {
        let el = &self.elements;
        match action {
            PageAction::ApplyTheme(theme) => self.apply_theme(theme),
            PageAction::PersistTheme(theme) => {
                let key = self.core.borrow().config().storage_key.clone();
                if let Err(err) = save_theme(&mut *self.store.borrow_mut(), &key, theme) {
                    log::warn!("theme not saved: {err}");
                }
            }
            PageAction::SetNavOpen(open) => {
                for target in [&el.hamburger, &el.nav_menu].into_iter().flatten() {
                    set_class(target, CLASS_ACTIVE, open);
                }
            }
            PageAction::SetNavbarScrolled(on) => {
                if let Some(navbar) = &el.navbar {
                    set_class(navbar, CLASS_SCROLLED, on);
                }
            }
            PageAction::SetActiveSection(active) => {
                for link in &el.nav_links {
                    let href = link.get_attribute("href");
                    set_class(link, CLASS_ACTIVE, link_is_active(href.as_deref(), active.as_deref()));
                }
            }
            PageAction::SetScrollTopVisible(on) => {
                if let Some(button) = &el.scroll_top {
                    set_class(button, CLASS_ACTIVE, on);
                }
            }
            PageAction::SetStatText { index, text } => {
                if let Some(stat) = el.stat_numbers.get(index) {
                    stat.set_text_content(Some(&text));
                }
            }
            PageAction::RequestAnimationFrame => self.request_frame(),
            PageAction::RenderSlider(layout) => self.render_slider(&layout),
            PageAction::StartAutoAdvance => self.start_auto_advance(),
            PageAction::RestartAutoAdvance => {
                self.auto_advance.borrow_mut().take();
                self.start_auto_advance();
            }
            PageAction::SmoothScrollTo(top) => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            PageAction::Reveal(index) => {
                if let Some(target) = el.reveal.get(index) {
                    apply_reveal_style(target, RevealStyle::Shown);
                }
            }
            PageAction::ShowNotice(message) => {
                if let Err(err) = self.window.alert_with_message(&message) {
                    log::warn!("alert failed: {}", SiteError::from(err));
                }
            }
            PageAction::ResetForm => {
                if let Some(form) = &el.quote_form {
                    form.reset();
                }
            }
        }
    }

    fn apply_theme(&self, theme: Theme) {
        if let Some(root) = &self.elements.root {
            if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                log::warn!("theme attribute not set: {}", SiteError::from(err));
            }
        }
        if let Some(icon) = &self.elements.theme_icon {
            for class in Theme::ICON_CLASSES {
                set_class(icon, class, class == theme.icon_class());
            }
        }
    }

    fn render_slider(&self, layout: &SliderLayout) {
        let el = &self.elements;
        if let Some(slider) = &el.slider {
            set_style(slider, "transform", &layout.transform());
        }
        for (index, dot) in el.dots.iter().enumerate() {
            set_class(dot, CLASS_ACTIVE, index == layout.active_dot);
        }
        let flex = layout.card_flex();
        for card in &el.cards {
            set_style(card, "flex", &flex);
            set_style(card, "max-width", layout.card_basis);
        }
    }

    /// Replace any running interval. Dropping the old one cancels it.
    fn start_auto_advance(self: &Rc<Self>) {
        let period = self.core.borrow().config().auto_advance_ms;
        let binding = Rc::clone(self);
        let interval = Interval::new(period, move || {
            let width = binding.width();
            binding.dispatch(PageEvent::AutoAdvanceTick { width });
        });
        *self.auto_advance.borrow_mut() = Some(interval);
    }

    /// Schedule one `AnimationFrame` event. Requests made while one is
    /// already pending coalesce.
    fn request_frame(self: &Rc<Self>) {
        if self.frame_pending.replace(true) {
            return;
        }
        let binding = Rc::clone(self);
        // One-shot closure: freed by wasm-bindgen after it runs.
        let callback = Closure::once_into_js(move |_ts: f64| {
            binding.frame_pending.set(false);
            binding.dispatch(PageEvent::AnimationFrame);
        });
        if let Err(err) = self.window.request_animation_frame(callback.unchecked_ref()) {
            self.frame_pending.set(false);
            log::warn!("requestAnimationFrame failed: {}", SiteError::from(err));
        }
    }
}

fn apply_reveal_style(el: &HtmlElement, style: RevealStyle) {
    set_style(el, "opacity", style.opacity());
    set_style(el, "transform", style.transform());
}
