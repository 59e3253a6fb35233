//! Interactivity for the anomaly archive's static pages.
//!
//! Loaded as a WebAssembly module by every page. On start it injects the
//! shared animation styles and, once the DOM is parsed, mounts the
//! enhancements the page qualifies for: card hover feedback, scroll fade-ins,
//! the category filter, back-to-top, the section navigator, the loading
//! splash, font-size controls and, when configured, the theme switch.

mod bootstrap;
mod components;
mod dom;
mod i18n;
mod observer;
mod storage;
mod styles;

use anomaly_archive_shared::EnhanceConfig;
use wasm_bindgen::prelude::*;

/// Module entry point, run by the wasm-bindgen glue on instantiation.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let parsed = EnhanceConfig::from_json(&bootstrap::config_source());
    let config = parsed.as_ref().cloned().unwrap_or_default();
    if console_log::init_with_level(config.level()).is_err() {
        web_sys::console::warn_1(&"archive enhancer: logger already initialised".into());
    }
    if let Err(err) = parsed {
        log::warn!("{err}; using default config");
    }

    if let Err(err) = bootstrap::inject_base_styles() {
        log::warn!("animation styles unavailable: {err}");
    }
    if let Err(err) = bootstrap::run_when_ready(config) {
        log::warn!("page enhancement aborted: {err}");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
