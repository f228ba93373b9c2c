//! Browser binding for [`crate::page::PageCore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything under this module needs a real `window` and is compiled only
//! with the `hydrate` feature. It looks up the page's elements once,
//! measures the page when events fire, forwards [`crate::page::PageEvent`]s
//! to the core and applies the returned actions.
//!
//! Lookups return [`SiteError`]; a missing element disables the component
//! that needs it and is logged, rather than aborting the whole page.

pub mod binding;
pub mod elements;
pub mod listeners;
pub mod measure;
pub mod storage;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::SiteConfig;
use crate::consts::ID_SITE_CONFIG;
use crate::error::SiteError;
use binding::PageBinding;
use elements::PageElements;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or_else(|| SiteError::missing("window"))
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or_else(|| SiteError::missing("document"))
}

pub fn by_id(doc: &Document, id: &str) -> Result<Element, SiteError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| SiteError::missing(format!("#{id}")))
}

/// Look up `#id` and downcast it to a concrete element type.
pub fn by_id_as<T: JsCast>(doc: &Document, id: &str, expected: &'static str) -> Result<T, SiteError> {
    by_id(doc, id)?
        .dyn_into::<T>()
        .map_err(|_| SiteError::WrongElementType { selector: format!("#{id}"), expected })
}

/// All elements matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Like [`query_all`] but keeps only elements that carry inline style.
pub fn query_all_html(doc: &Document, selector: &str) -> Result<Vec<HtmlElement>, SiteError> {
    Ok(query_all(doc, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Set or clear one class. Idempotent.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        log::warn!("classList.toggle({class}) failed: {}", SiteError::from(err));
    }
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("style {property} failed: {}", SiteError::from(err));
    }
}

/// Unwrap an optional page element, logging why a component is disabled.
pub fn optional<T>(result: Result<T, SiteError>, component: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{component} disabled: {err}");
            None
        }
    }
}

/// Read the optional `#siteConfig` JSON block. Problems are returned rather
/// than logged because the logger is configured from the result.
pub fn read_config() -> (SiteConfig, Option<SiteError>) {
    let raw = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(ID_SITE_CONFIG))
        .and_then(|el| el.text_content());
    match raw {
        None => (SiteConfig::default(), None),
        Some(raw) => match SiteConfig::from_json(&raw) {
            Ok(config) => (config, None),
            Err(err) => (SiteConfig::default(), Some(err)),
        },
    }
}

/// Look up the page, apply start-up state and register every listener.
pub fn mount(config: SiteConfig) -> Result<(), SiteError> {
    let window = window()?;
    let doc = window.document().ok_or_else(|| SiteError::missing("document"))?;
    let elements = PageElements::collect(&doc);
    let binding = PageBinding::new(window, elements, config);
    binding.init();
    listeners::wire_all(&binding)
}
