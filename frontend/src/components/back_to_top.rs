use anomaly_archive_shared::{page, Result};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document};
use yew::prelude::*;

use crate::{dom, i18n::current::back_to_top as t, styles::back_to_top as style};

fn button_style(shown: bool, hovered: bool) -> String {
    let (opacity, transform) = match (shown, hovered) {
        (false, _) => ("0", "translateY(20px)"),
        (true, false) => ("1", "translateY(0)"),
        (true, true) => ("1", "translateY(0) scale(1.1)"),
    };
    let background = if hovered { style::HOVER_BG } else { style::IDLE_BG };
    format!(
        "{} opacity: {opacity}; transform: {transform}; background: {background};",
        style::BUTTON
    )
}

#[function_component(BackToTopButton)]
pub fn back_to_top_button() -> Html {
    let show = use_state(|| false);
    let hovered = use_state(|| false);

    // 监听滚动事件
    {
        let show = show.clone();
        use_effect_with((), move |_| {
            let window = window();
            let closure = {
                let show = show.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window
                        .as_ref()
                        .and_then(|win| win.scroll_y().ok())
                        .unwrap_or(0.0);
                    show.set(page::back_to_top_visible(scroll_y));
                }) as Box<dyn Fn()>)
            };

            if let Some(window) = window.as_ref() {
                let _ = window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                drop(closure);
            }
        });
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();

        if let Some(window) = window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_top(0.0);
            options.set_left(0.0);

            window.scroll_with_scroll_to_options(&options);
        }
    });
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <button
            id="back-to-top"
            type="button"
            style={button_style(*show, *hovered)}
            aria-label={t::TOOLTIP}
            title={t::TOOLTIP}
            aria-hidden={(!*show).to_string()}
            {onclick}
            {onmouseenter}
            {onmouseleave}
        >
            { t::ICON }
        </button>
    }
}

/// Add the floating button. Callers check the page height first.
pub fn mount(document: &Document) -> Result<bool> {
    let host = dom::host_in_body(document)?;
    yew::Renderer::<BackToTopButton>::with_root(host.into()).render();
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::button_style;

    #[test]
    fn hidden_until_shown_and_enlarged_on_hover() {
        assert!(button_style(false, false).contains("opacity: 0;"));
        assert!(button_style(true, false).contains("opacity: 1; transform: translateY(0);"));
        let hovered = button_style(true, true);
        assert!(hovered.contains("scale(1.1)"));
        assert!(hovered.contains("rgba(200, 0, 0, 0.9)"));
    }
}
