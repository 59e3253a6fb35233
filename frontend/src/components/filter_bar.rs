use std::{cell::Cell, rc::Rc};

use anomaly_archive_shared::{
    filter::{self, CardVisibility, FilterTier, HIDE_AFTER_MS, SHOW_DELAY_MS},
    Result,
};
use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};
use yew::prelude::*;

use crate::{
    components::card_interaction::{card_model, CARD_SELECTOR},
    dom,
    i18n::current::filter as t,
    styles::filter as style,
};

pub const CONTAINER_SELECTOR: &str = ".card-container";

/// A card element paired with the category text it is filtered by.
#[derive(Clone, PartialEq)]
pub struct FilterCard {
    pub element: HtmlElement,
    pub category: String,
    /// Bumped on every selection; a pending timer only acts if it still
    /// belongs to the latest one.
    generation: Rc<Cell<u32>>,
}

impl FilterCard {
    pub fn new(element: HtmlElement, category: String) -> Self {
        Self {
            element,
            category,
            generation: Rc::new(Cell::new(0)),
        }
    }

    fn next_generation(&self) -> u32 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    fn is_current(&self, generation: u32) -> bool {
        self.generation.get() == generation
    }
}

fn label(tier: FilterTier) -> &'static str {
    match tier {
        FilterTier::All => t::ALL,
        FilterTier::Euclid => t::EUCLID,
        FilterTier::Keter => t::KETER,
        FilterTier::Pending => t::PENDING,
    }
}

fn show(card: &FilterCard) {
    let generation = card.next_generation();
    dom::set_style(&card.element, "display", "block");
    let card = card.clone();
    Timeout::new(SHOW_DELAY_MS, move || {
        if card.is_current(generation) {
            dom::set_style(&card.element, "opacity", CardVisibility::Shown.opacity());
            dom::set_style(&card.element, "transform", CardVisibility::Shown.transform());
        }
    })
    .forget();
}

fn hide(card: &FilterCard) {
    let generation = card.next_generation();
    dom::set_style(&card.element, "opacity", CardVisibility::Hidden.opacity());
    dom::set_style(&card.element, "transform", CardVisibility::Hidden.transform());
    let card = card.clone();
    Timeout::new(HIDE_AFTER_MS, move || {
        if card.is_current(generation) {
            dom::set_style(&card.element, "display", "none");
        }
    })
    .forget();
}

/// Background and border of a filter button.
///
/// Hovering wins over the active colour; the active border stays.
fn button_colors(active: bool, hovered: bool) -> (&'static str, &'static str) {
    let border = if active { style::ACTIVE_BG } else { style::IDLE_BORDER };
    let background = match (active, hovered) {
        (_, true) => style::HOVER_BG,
        (true, false) => style::ACTIVE_BG,
        (false, false) => style::IDLE_BG,
    };
    (background, border)
}

fn apply_filter(cards: &[FilterCard], tier: FilterTier) {
    let plan = filter::plan(tier, cards.iter().map(|card| card.category.as_str()));
    for (card, visibility) in cards.iter().zip(plan) {
        match visibility {
            CardVisibility::Shown => show(card),
            CardVisibility::Hidden => hide(card),
        }
    }
    log::debug!("filter `{}` applied to {} cards", tier.key(), cards.len());
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub cards: Rc<Vec<FilterCard>>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let selected = use_state(|| FilterTier::ALL[0]);
    let hovered = use_state(|| None::<FilterTier>);

    {
        let cards = props.cards.clone();
        let initial = *selected;
        use_effect_with((), move |_| {
            apply_filter(&cards, initial);
            || ()
        });
    }

    let buttons = FilterTier::ALL.into_iter().map(|tier| {
        let active = *selected == tier;
        let (background, border) = button_colors(active, *hovered == Some(tier));
        let button_style =
            format!("{} background: {background}; border-color: {border};", style::BUTTON);

        let onclick = {
            let selected = selected.clone();
            let cards = props.cards.clone();
            Callback::from(move |_: MouseEvent| {
                selected.set(tier);
                apply_filter(&cards, tier);
            })
        };
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(tier)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };

        html! {
            <button
                type="button"
                class={classes!("filter-btn", active.then_some("active"))}
                data-filter={tier.key()}
                style={button_style}
                {onclick}
                {onmouseenter}
                {onmouseleave}
            >
                { label(tier) }
            </button>
        }
    });

    html! { <>{ for buttons }</> }
}

/// Insert the filter row above the card list and select "all".
pub fn mount(document: &Document) -> Result<bool> {
    let Some(container) = document
        .query_selector(CONTAINER_SELECTOR)
        .map_err(dom::js_err("querySelector"))?
    else {
        return Ok(false);
    };

    let cards: Vec<FilterCard> = dom::query_all(document, CARD_SELECTOR)?
        .into_iter()
        .map(|element| {
            let category = card_model(&element).category;
            FilterCard::new(element, category)
        })
        .collect();

    let host = dom::host_before(document, &container)?;
    host.set_class_name("filter-buttons");
    let _ = host.set_attribute("style", style::ROW);

    yew::Renderer::<FilterBar>::with_root_and_props(
        host.into(),
        FilterBarProps {
            cards: Rc::new(cards),
        },
    )
    .render();
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::button_colors;
    use crate::styles::filter as style;

    #[test]
    fn hover_colour_shows_on_the_active_button_too() {
        assert_eq!(button_colors(true, true), (style::HOVER_BG, style::ACTIVE_BG));
        assert_eq!(button_colors(true, false), (style::ACTIVE_BG, style::ACTIVE_BG));
        assert_eq!(button_colors(false, true), (style::HOVER_BG, style::IDLE_BORDER));
        assert_eq!(button_colors(false, false), (style::IDLE_BG, style::IDLE_BORDER));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::Element;

    use super::*;

    const CARDS: &str = r#"<div class="card-container">
        <div class="card" id="card-keter"><div class="meta-info">等级：Keter</div></div>
        <div class="card" id="card-euclid"><div class="meta-info">等级：Euclid</div></div>
    </div>"#;

    fn by_id(document: &Document, id: &str) -> HtmlElement {
        document
            .get_element_by_id(id)
            .expect("element present")
            .dyn_into::<HtmlElement>()
            .expect("html element")
    }

    fn button(document: &Document, key: &str) -> HtmlElement {
        document
            .query_selector(&format!(".filter-btn[data-filter=\"{key}\"]"))
            .expect("query")
            .expect("filter button")
            .dyn_into::<HtmlElement>()
            .expect("html button")
    }

    fn display(card: &HtmlElement) -> String {
        card.style().get_property_value("display").expect("style")
    }

    fn opacity(card: &HtmlElement) -> String {
        card.style().get_property_value("opacity").expect("style")
    }

    async fn mount_page(document: &Document) -> HtmlElement {
        let page = dom::host_in_body(document).expect("host");
        page.set_inner_html(CARDS);
        assert!(mount(document).expect("mount"));
        TimeoutFuture::new(50).await;
        page
    }

    #[wasm_bindgen_test]
    async fn row_sits_above_the_cards_with_all_selected() {
        let document = dom::document().expect("document");
        let page = mount_page(&document).await;

        let container = document
            .query_selector(CONTAINER_SELECTOR)
            .expect("query")
            .expect("container");
        let row: Element = container.previous_element_sibling().expect("filter row");
        assert!(row.class_list().contains("filter-buttons"));
        assert!(button(&document, "all").class_list().contains("active"));
        for id in ["card-keter", "card-euclid"] {
            let card = by_id(&document, id);
            assert_eq!(display(&card), "block");
            assert_eq!(opacity(&card), "1");
        }

        page.remove();
    }

    #[wasm_bindgen_test]
    async fn selecting_keter_takes_other_cards_out_of_layout() {
        let document = dom::document().expect("document");
        let page = mount_page(&document).await;

        button(&document, "keter").click();
        TimeoutFuture::new(400).await;

        assert_eq!(display(&by_id(&document, "card-euclid")), "none");
        assert_eq!(display(&by_id(&document, "card-keter")), "block");
        assert_eq!(opacity(&by_id(&document, "card-keter")), "1");

        page.remove();
    }

    #[wasm_bindgen_test]
    async fn latest_selection_wins_over_pending_timers() {
        let document = dom::document().expect("document");
        let page = mount_page(&document).await;

        // Hidden, then shown again before the hide completes.
        button(&document, "keter").click();
        button(&document, "all").click();
        TimeoutFuture::new(400).await;
        let euclid = by_id(&document, "card-euclid");
        assert_eq!(display(&euclid), "block");
        assert_eq!(opacity(&euclid), "1");

        // Shown, then hidden again before the show delay elapses.
        button(&document, "all").click();
        button(&document, "keter").click();
        TimeoutFuture::new(400).await;
        let euclid = by_id(&document, "card-euclid");
        assert_eq!(display(&euclid), "none");
        assert_eq!(opacity(&euclid), "0");

        page.remove();
    }
}
