//! # apoorva-site
//!
//! Browser-side behavior for the Apoorva Packers and Movers website,
//! compiled to WebAssembly and loaded next to the static markup.
//!
//! The crate is split the same way as any engine with a thin host: a pure
//! core that turns page events into actions, and a `hydrate`-only binding
//! that feeds real DOM events in and applies the actions to the document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | [`page::PageCore`] event dispatch |
//! | [`state`] | Per-component models (theme, nav, scroll, counters, reveal, carousel, quote form) |
//! | [`config`] | [`config::SiteConfig`] and its JSON override |
//! | [`consts`] | Thresholds, timings and the markup contract |
//! | [`error`] | [`error::SiteError`] |
//! | `dom` | Browser binding (`hydrate` feature only) |

pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod page;
pub mod state;

/// WASM entry point, run once when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = dom::read_config();
    let _ = console_log::init_with_level(config.log_level.into());
    if let Some(err) = config_error {
        log::warn!("ignoring site config: {err}");
    }

    if let Err(err) = dom::mount(config) {
        log::error!("page behaviors not started: {err}");
    }
}
