use anomaly_archive_shared::{FontAction, FontScale, FontScaleControl, Result};
use web_sys::{Document, HtmlElement};
use yew::prelude::*;

use crate::{
    dom,
    i18n::current::font_size as t,
    storage::{self, BrowserPreferences},
    styles::font_size as style,
};

pub const ARCHIVE_SELECTOR: &str = ".archive-card";
const CONTENT_SELECTORS: [&str; 2] = [".content-section", ".container"];

fn apply_scale(target: Option<&HtmlElement>, scale: FontScale) {
    if let Some(target) = target {
        dom::set_style(target, "font-size", &scale.css_value());
    }
}

fn button_face(action: FontAction) -> (&'static str, &'static str) {
    match action {
        FontAction::Decrease => (t::DECREASE_ICON, t::DECREASE),
        FontAction::Reset => (t::RESET_ICON, t::RESET),
        FontAction::Increase => (t::INCREASE_ICON, t::INCREASE),
    }
}

#[derive(Properties, PartialEq)]
pub struct FontSizeControlsProps {
    pub prefs: BrowserPreferences,
    /// Element whose `font-size` is scaled.
    pub target: Option<HtmlElement>,
}

#[function_component(FontSizeControls)]
pub fn font_size_controls(props: &FontSizeControlsProps) -> Html {
    let panel = {
        let prefs = props.prefs.clone();
        use_mut_ref(move || FontScaleControl::restore(prefs))
    };
    let hovered = use_state(|| None::<FontAction>);

    // A saved scale is re-applied as is; nothing is written until a click.
    {
        let target = props.target.clone();
        let saved = panel.borrow().1;
        use_effect_with((), move |_| {
            if let Some(saved) = saved {
                apply_scale(target.as_ref(), saved);
            }
            || ()
        });
    }

    let buttons = [FontAction::Decrease, FontAction::Reset, FontAction::Increase]
        .into_iter()
        .map(|action| {
            let (icon, title) = button_face(action);
            let background = if *hovered == Some(action) {
                style::HOVER_BG
            } else {
                style::IDLE_BG
            };
            let onclick = {
                let panel = panel.clone();
                let target = props.target.clone();
                Callback::from(move |_: MouseEvent| {
                    let pressed = panel.borrow_mut().0.press(action);
                    if let Some(next) = pressed {
                        apply_scale(target.as_ref(), next);
                    }
                })
            };
            let onmouseenter = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(Some(action)))
            };
            let onmouseleave = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(None))
            };

            html! {
                <button
                    type="button"
                    title={title}
                    aria-label={title}
                    style={format!("{} background: {background};", style::BUTTON)}
                    {onclick}
                    {onmouseenter}
                    {onmouseleave}
                >
                    { icon }
                </button>
            }
        });

    html! { <>{ for buttons }</> }
}

/// Add the A⁻ / A⸰ / A⁺ panel on entry pages.
pub fn mount(document: &Document) -> Result<bool> {
    if !dom::exists(document, ARCHIVE_SELECTOR) {
        return Ok(false);
    }
    let target = CONTENT_SELECTORS.iter().find_map(|selector| {
        dom::query_all(document, selector)
            .ok()
            .and_then(|found| found.into_iter().next())
    });

    let host = dom::host_in_body(document)?;
    host.set_id("font-size-controls");
    let _ = host.set_attribute("style", style::PANEL);
    yew::Renderer::<FontSizeControls>::with_root_and_props(
        host.into(),
        FontSizeControlsProps {
            prefs: storage::browser_preferences(),
            target,
        },
    )
    .render();
    Ok(true)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use anomaly_archive_shared::preferences::FONT_SIZE_KEY;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen_test]
    async fn font_size_is_saved_only_after_a_click() {
        let document = dom::document().expect("document");
        let storage = dom::window()
            .expect("window")
            .local_storage()
            .expect("storage access")
            .expect("storage enabled");
        storage.remove_item(FONT_SIZE_KEY).expect("clear saved size");

        let page = dom::host_in_body(&document).expect("host");
        page.set_inner_html(
            r#"<div class="archive-card"><div class="content-section"><p>正文</p></div></div>"#,
        );

        assert!(mount(&document).expect("mount"));
        TimeoutFuture::new(50).await;
        assert_eq!(storage.get_item(FONT_SIZE_KEY).expect("readable"), None);

        let reset = document
            .query_selector("#font-size-controls button:nth-child(2)")
            .expect("query")
            .expect("reset button")
            .dyn_into::<HtmlElement>()
            .expect("html button");
        reset.click();
        TimeoutFuture::new(50).await;

        assert_eq!(storage.get_item(FONT_SIZE_KEY).expect("readable").as_deref(), Some("100"));
        let content = dom::find_in(&page, ".content-section").expect("content");
        assert_eq!(content.style().get_property_value("font-size").expect("style"), "100%");

        page.remove();
        if let Some(panel) = document.get_element_by_id("font-size-controls") {
            panel.remove();
        }
        storage.remove_item(FONT_SIZE_KEY).expect("clear saved size");
    }
}
