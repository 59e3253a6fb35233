use std::rc::Rc;

use anomaly_archive_shared::{
    section::{self, ScrollSpy, SectionEntry, HEADING_SELECTOR, SECTION_SELECTOR},
    ObserverOptions, Result,
};
use futures::future::{AbortHandle, Abortable};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::{
    dom, i18n::current::content_toggler as t, observer::VisibilityStream,
    styles::toggler as style,
};

fn link_style(active: bool, hovered: bool) -> String {
    let color = if active {
        style::ACTIVE_COLOR
    } else if hovered {
        style::HOVER_COLOR
    } else {
        style::IDLE_COLOR
    };
    let border = if active { style::ACTIVE_COLOR } else { "transparent" };
    let background = if hovered { style::HOVER_BG } else { "transparent" };
    format!(
        "{} color: {color}; border-left-color: {border}; background: {background};",
        style::LINK
    )
}

fn scroll_to(section: &HtmlElement) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct ContentTogglerProps {
    /// All top-level sections, indexed like [`SectionEntry::index`].
    pub sections: Rc<Vec<HtmlElement>>,
    pub entries: Rc<Vec<SectionEntry>>,
}

#[function_component(ContentToggler)]
pub fn content_toggler(props: &ContentTogglerProps) -> Html {
    let spy = {
        let entries = props.entries.clone();
        use_mut_ref(move || ScrollSpy::new(&entries))
    };
    let active = use_state(|| None::<usize>);
    let hovered = use_state(|| None::<usize>);

    // scroll-spy
    {
        let sections = props.sections.clone();
        let spy = spy.clone();
        let active = active.clone();
        use_effect_with((), move |_| {
            let (abort, registration) = AbortHandle::new_pair();
            match VisibilityStream::observe(&sections, ObserverOptions::SCROLL_SPY) {
                Ok(mut changes) => {
                    let task = async move {
                        while let Some(change) = changes.next().await {
                            let moved = spy.borrow_mut().on_change(change);
                            if moved {
                                active.set(spy.borrow().active());
                            }
                        }
                    };
                    wasm_bindgen_futures::spawn_local(async move {
                        let _ = Abortable::new(task, registration).await;
                    });
                },
                Err(err) => log::warn!("section scroll-spy disabled: {err}"),
            }
            move || abort.abort()
        });
    }

    let links = props.entries.iter().map(|entry| {
        let index = entry.index;
        let is_active = *active == Some(index);
        let onclick = {
            let sections = props.sections.clone();
            let spy = spy.clone();
            let active = active.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(section) = sections.get(index) {
                    scroll_to(section);
                }
                if spy.borrow_mut().activate(index) {
                    active.set(Some(index));
                }
            })
        };
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };

        html! {
            <button
                key={index}
                type="button"
                class={classes!("section-toggle-btn", is_active.then_some("active"))}
                data-section-index={index.to_string()}
                style={link_style(is_active, *hovered == Some(index))}
                {onclick}
                {onmouseenter}
                {onmouseleave}
            >
                { &entry.title }
            </button>
        }
    });

    html! {
        <>
            <h3 style={style::TITLE}>{ t::TITLE }</h3>
            { for links }
        </>
    }
}

/// Build the navigator when the entry has enough titled sections.
pub fn mount(document: &Document) -> Result<bool> {
    let sections = dom::query_all(document, SECTION_SELECTOR)?;
    let headings = sections.iter().map(|section| {
        dom::find_in(section, HEADING_SELECTOR).and_then(|heading| heading.text_content())
    });
    let Some(entries) = section::build_entries(headings) else {
        return Ok(false);
    };
    let Some(first) = sections.first() else {
        return Ok(false);
    };

    let host = dom::host_before(document, first)?;
    host.set_class_name("content-toggler");
    let _ = host.set_attribute("style", style::PANEL);

    yew::Renderer::<ContentToggler>::with_root_and_props(
        host.into(),
        ContentTogglerProps {
            sections: Rc::new(sections),
            entries: Rc::new(entries),
        },
    )
    .render();
    Ok(true)
}
