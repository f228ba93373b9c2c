//! Listener registration.
//!
//! Every listener lives for the whole page, so closures are handed to the
//! browser with `forget()` once registered.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{
    DocumentReadyState, Element, Event, EventTarget, FormData, HtmlElement, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

use super::binding::PageBinding;
use super::document;
use crate::consts::{LOADED_MESSAGE, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::error::SiteError;
use crate::page::PageEvent;
use crate::state::carousel::Direction;
use crate::state::quote::QuoteRequest;

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), SiteError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Register `handler` and log instead of failing when the browser refuses.
fn listen_or_warn(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    if let Err(err) = listen(target, event, handler) {
        log::warn!("{event} listener not registered: {err}");
    }
}

/// Dispatch a fixed event on every click of `el`.
fn on_click(binding: &Rc<PageBinding>, el: &Element, event: PageEvent) {
    let binding = Rc::clone(binding);
    listen_or_warn(el, "click", move |_| binding.dispatch(event.clone()));
}

pub fn wire_all(binding: &Rc<PageBinding>) -> Result<(), SiteError> {
    wire_window(binding);
    wire_navigation(binding)?;
    wire_carousel(binding);
    wire_quote_form(binding);
    if let Err(err) = wire_reveal(binding) {
        log::warn!("scroll reveal disabled: {err}");
    }
    Ok(())
}

fn wire_window(binding: &Rc<PageBinding>) {
    let window = binding.window.clone();

    let on_scroll = Rc::clone(binding);
    listen_or_warn(&window, "scroll", move |_| on_scroll.dispatch_scroll());

    let on_resize = Rc::clone(binding);
    listen_or_warn(&window, "resize", move |_| {
        let width = on_resize.width();
        on_resize.dispatch(PageEvent::Resize { width });
    });

    // The module may be instantiated after `load` already fired.
    let loaded = window.document().is_some_and(|doc| doc.ready_state() == DocumentReadyState::Complete);
    if loaded {
        on_loaded(binding);
        return;
    }
    let on_load = Rc::clone(binding);
    listen_or_warn(&window, "load", move |_| on_loaded(&on_load));
}

fn on_loaded(binding: &Rc<PageBinding>) {
    binding.dispatch_load();
    log::info!("{LOADED_MESSAGE}");
}

fn wire_navigation(binding: &Rc<PageBinding>) -> Result<(), SiteError> {
    let el = &binding.elements;
    if let Some(toggle) = &el.theme_toggle {
        on_click(binding, toggle, PageEvent::ThemeToggleClicked);
    }
    if let Some(hamburger) = &el.hamburger {
        on_click(binding, hamburger, PageEvent::HamburgerClicked);
    }
    for link in &el.nav_links {
        on_click(binding, link, PageEvent::NavLinkClicked);
    }
    if let Some(button) = &el.scroll_top {
        on_click(binding, button, PageEvent::ScrollTopClicked);
    }

    let doc = document()?;
    for anchor in &el.anchors {
        let binding = Rc::clone(binding);
        let doc = doc.clone();
        listen_or_warn(anchor, "click", move |event| {
            event.prevent_default();
            let href = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|anchor| anchor.get_attribute("href"))
                .unwrap_or_default();
            // A bare "#" or an unknown id is not a valid scroll target.
            let target_top = doc
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
                .map(|target| f64::from(target.offset_top()));
            binding.dispatch(PageEvent::AnchorClicked { target_top });
        });
    }
    Ok(())
}

fn wire_carousel(binding: &Rc<PageBinding>) {
    let el = &binding.elements;
    if el.slider.is_none() {
        return;
    }
    for (button, direction) in [(&el.next, Direction::Next), (&el.prev, Direction::Prev)] {
        let Some(button) = button else {
            continue;
        };
        let on_step = Rc::clone(binding);
        listen_or_warn(button, "click", move |_| {
            let width = on_step.width();
            on_step.dispatch(PageEvent::CarouselStep { direction, width });
        });
    }
    for (index, dot) in el.dots.iter().enumerate() {
        let on_dot = Rc::clone(binding);
        listen_or_warn(dot, "click", move |_| {
            let width = on_dot.width();
            on_dot.dispatch(PageEvent::DotClicked { index, width });
        });
    }
}

fn wire_quote_form(binding: &Rc<PageBinding>) {
    let Some(form) = binding.elements.quote_form.clone() else {
        return;
    };
    let on_submit = Rc::clone(binding);
    let form_for_data = form.clone();
    listen_or_warn(&form, "submit", move |event| {
        event.prevent_default();
        let quote = match read_form(&form_for_data) {
            Ok(quote) => quote,
            Err(err) => {
                log::warn!("quote form fields unreadable: {err}");
                QuoteRequest::default()
            }
        };
        on_submit.dispatch(PageEvent::QuoteSubmitted(quote));
    });
}

/// Collect the text fields of `form`. File inputs are skipped.
fn read_form(form: &HtmlFormElement) -> Result<QuoteRequest, SiteError> {
    let data = FormData::new_with_form(form)?;
    let entries = js_sys::try_iter(&data)?.ok_or_else(|| SiteError::Js("FormData is not iterable".into()))?;
    let mut pairs = Vec::new();
    for entry in entries {
        let entry = js_sys::Array::from(&entry?);
        if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
            pairs.push((name, value));
        }
    }
    Ok(QuoteRequest::from_pairs(pairs))
}

fn wire_reveal(binding: &Rc<PageBinding>) -> Result<(), SiteError> {
    let targets = &binding.elements.reveal;
    if targets.is_empty() {
        return Ok(());
    }
    let on_intersect = Rc::clone(binding);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = on_intersect
                    .elements
                    .reveal
                    .iter()
                    .position(|el| el.unchecked_ref::<Element>() == &target)
                else {
                    continue;
                };
                on_intersect.dispatch(PageEvent::RevealIntersection { index, intersecting: entry.is_intersecting() });
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    for target in targets {
        observer.observe(target);
    }
    Ok(())
}
