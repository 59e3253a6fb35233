use anomaly_archive_shared::{
    page::{OVERLAY_FADE_DELAY_MS, OVERLAY_FADE_MS},
    Result,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event};
use yew::prelude::*;

use crate::{
    dom,
    i18n::current::loading_overlay as t,
    styles::{self, overlay as style},
};

pub const CARD_LIKE_SELECTOR: &str = ".archive-card, .card";

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    /// Element the overlay is rendered into; detached once faded.
    pub host: Element,
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    let fading = use_state(|| false);

    {
        let fading = fading.clone();
        let host = props.host.clone();
        use_effect_with((), move |_| {
            let start_fade = move || {
                Timeout::new(OVERLAY_FADE_DELAY_MS, move || {
                    fading.set(true);
                    Timeout::new(OVERLAY_FADE_MS, move || {
                        if host.parent_node().is_some() {
                            host.remove();
                        }
                    })
                    .forget();
                })
                .forget();
            };

            let document = dom::document().ok();
            let loaded = document
                .as_ref()
                .map(|doc| doc.ready_state() == "complete")
                .unwrap_or(true);
            match dom::window() {
                Ok(window) if !loaded => {
                    let on_load = Closure::once(move |_: Event| start_fade());
                    let _ = window
                        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
                    on_load.forget();
                },
                _ => start_fade(),
            }
            || ()
        });
    }

    let backdrop_style = format!(
        "{} opacity: {};",
        style::BACKDROP,
        if *fading { "0" } else { "1" }
    );

    html! {
        <div id="loading-overlay" style={backdrop_style} role="status" aria-busy="true">
            <div class="archive-loader" style={style::SPINNER}></div>
            <p style={style::TEXT}>{ t::TEXT }</p>
        </div>
    }
}

/// Cover the page until it has finished loading.
pub fn mount(document: &Document) -> Result<bool> {
    dom::inject_stylesheet(document, styles::SPIN_STYLESHEET_ID, styles::SPIN_KEYFRAMES)?;
    let host = dom::host_in_body(document)?;
    let root: Element = host.into();
    yew::Renderer::<LoadingOverlay>::with_root_and_props(
        root.clone(),
        LoadingOverlayProps {
            host: root,
        },
    )
    .render();
    Ok(true)
}
