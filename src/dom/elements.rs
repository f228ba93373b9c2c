//! One-time lookup of every element the page behaviors touch.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use super::{by_id, by_id_as, optional, query_all, query_all_html};
use crate::consts::{
    ID_HAMBURGER, ID_NAV_MENU, ID_NAVBAR, ID_NEXT, ID_PREV, ID_QUOTE_FORM, ID_SCROLL_TOP, ID_SLIDER,
    ID_THEME_TOGGLE, REVEAL_SELECTOR, SEL_ANCHORS, SEL_DOTS, SEL_NAV_LINKS, SEL_SECTIONS, SEL_STAT_NUMBERS,
    SEL_STATS_SECTION, SEL_TESTIMONIALS,
};
use crate::error::SiteError;
use crate::page::PageLayout;
use crate::state::counter::parse_target;
use crate::state::theme::Theme;

pub struct PageElements {
    pub root: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub theme_icon: Option<Element>,
    pub hamburger: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_links: Vec<Element>,
    pub navbar: Option<Element>,
    pub scroll_top: Option<Element>,
    pub sections: Vec<HtmlElement>,
    pub stats_section: Option<HtmlElement>,
    pub stat_numbers: Vec<Element>,
    pub quote_form: Option<HtmlFormElement>,
    pub slider: Option<HtmlElement>,
    pub cards: Vec<HtmlElement>,
    pub dots: Vec<Element>,
    pub prev: Option<Element>,
    pub next: Option<Element>,
    pub reveal: Vec<HtmlElement>,
    pub anchors: Vec<Element>,
}

impl PageElements {
    pub fn collect(doc: &Document) -> Self {
        let theme_toggle = optional(by_id(doc, ID_THEME_TOGGLE), "theme toggle");
        let theme_icon = theme_toggle
            .as_ref()
            .and_then(|toggle| optional(first_child(toggle, "i"), "theme icon"));
        Self {
            root: optional(
                doc.document_element().ok_or_else(|| SiteError::missing("html")),
                "theme",
            ),
            theme_toggle,
            theme_icon,
            hamburger: optional(by_id(doc, ID_HAMBURGER), "mobile menu"),
            nav_menu: optional(by_id(doc, ID_NAV_MENU), "mobile menu"),
            nav_links: many(query_all(doc, SEL_NAV_LINKS), "nav links"),
            navbar: optional(by_id(doc, ID_NAVBAR), "navbar style"),
            scroll_top: optional(by_id(doc, ID_SCROLL_TOP), "scroll-to-top"),
            sections: many(query_all_html(doc, SEL_SECTIONS), "active link"),
            stats_section: doc
                .query_selector(SEL_STATS_SECTION)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            stat_numbers: many(query_all(doc, SEL_STAT_NUMBERS), "stat counters"),
            quote_form: optional(by_id_as::<HtmlFormElement>(doc, ID_QUOTE_FORM, "form"), "quote form"),
            slider: optional(by_id_as::<HtmlElement>(doc, ID_SLIDER, "html element"), "carousel"),
            cards: many(query_all_html(doc, SEL_TESTIMONIALS), "carousel"),
            dots: many(query_all(doc, SEL_DOTS), "carousel dots"),
            prev: optional(by_id(doc, ID_PREV), "carousel prev"),
            next: optional(by_id(doc, ID_NEXT), "carousel next"),
            reveal: many(query_all_html(doc, REVEAL_SELECTOR), "scroll reveal"),
            anchors: many(query_all(doc, SEL_ANCHORS), "smooth scroll"),
        }
    }

    /// Static page facts the core needs at construction.
    pub fn layout(&self, theme: Theme) -> PageLayout {
        let stat_targets = self
            .stat_numbers
            .iter()
            .map(|el| {
                let raw = el.get_attribute("data-target").unwrap_or_default();
                parse_target(&raw).unwrap_or_else(|| {
                    log::warn!("stat number has invalid data-target {raw:?}; counting to 0");
                    0
                })
            })
            .collect();
        PageLayout {
            theme,
            stat_targets,
            testimonial_count: self.slider.as_ref().map(|_| self.cards.len()),
            dot_count: self.dots.len(),
            reveal_count: self.reveal.len(),
        }
    }
}

fn first_child(parent: &Element, selector: &str) -> Result<Element, SiteError> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| SiteError::missing(selector))
}

fn many<T>(result: Result<Vec<T>, SiteError>, component: &str) -> Vec<T> {
    optional(result, component).unwrap_or_default()
}
