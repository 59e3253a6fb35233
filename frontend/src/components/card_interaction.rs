use std::rc::Rc;

use anomaly_archive_shared::{
    card::{self, hover, CardModel, HoverStyle},
    Result,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

pub const CARD_SELECTOR: &str = ".card";

/// Read the view-model of one `.card`.
pub fn card_model(card: &HtmlElement) -> CardModel {
    let category = dom::find_in(card, ".meta-info")
        .and_then(|meta| meta.text_content())
        .unwrap_or_default();
    let body = dom::find_in(card, ".card-content")
        .map(|content| content.inner_html())
        .unwrap_or_default();
    let linked = dom::find_in(card, ".card-link").is_some();
    CardModel::new(category, &body, linked)
}

fn apply(card: &HtmlElement, style: HoverStyle) {
    dom::set_style(card, "transform", style.transform);
    dom::set_style(card, "box-shadow", style.shadow);
    if let Some(border) = style.border_top {
        dom::set_style(card, "border-top", border);
    }
}

/// Wire hover lift and click press feedback on every card.
pub fn mount(document: &Document) -> Result<bool> {
    let cards = dom::query_all(document, CARD_SELECTOR)?;
    if cards.is_empty() {
        return Ok(false);
    }

    for element in cards {
        let model = Rc::new(card_model(&element));

        {
            let element = element.clone();
            let model = model.clone();
            dom::listen(&element.clone(), "mouseenter", move |_| {
                apply(&element, card::hover_style(&model, true));
            })?;
        }
        {
            let element = element.clone();
            let model = model.clone();
            dom::listen(&element.clone(), "mouseleave", move |_| {
                apply(&element, card::hover_style(&model, false));
            })?;
        }
        {
            let target = element.clone();
            dom::listen(&target, "click", move |event| {
                let tag = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .map(|target| target.tag_name())
                    .unwrap_or_default();
                if !card::wants_press_feedback(&model, &tag) {
                    return;
                }
                dom::set_style(&element, "transform", hover::PRESSED_TRANSFORM);
                let element = element.clone();
                Timeout::new(card::CLICK_FEEDBACK_MS, move || {
                    let _ = element.style().remove_property("transform");
                })
                .forget();
            })?;
        }
    }
    Ok(true)
}
