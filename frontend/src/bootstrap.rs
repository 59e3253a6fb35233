use anomaly_archive_shared::{
    config::CONFIG_ELEMENT_ID,
    page::{self, Component, PageProfile},
    section::SECTION_SELECTOR,
    EnhanceConfig, Result,
};
use web_sys::Document;

use crate::{
    components::{
        back_to_top, card_interaction, content_toggler, filter_bar, font_size_controls,
        loading_overlay, scroll_reveal, theme_switcher,
    },
    dom,
    i18n::current::bootstrap as t,
    styles,
};

/// Raw JSON of the page's enhancer config, empty when absent.
pub fn config_source() -> String {
    dom::document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

pub fn sample_profile(document: &Document) -> Result<PageProfile> {
    Ok(PageProfile {
        has_card_container: dom::exists(document, filter_bar::CONTAINER_SELECTOR),
        has_archive_card: dom::exists(document, font_size_controls::ARCHIVE_SELECTOR),
        card_like_count: dom::query_all(document, loading_overlay::CARD_LIKE_SELECTOR)?.len(),
        section_count: dom::query_all(document, SECTION_SELECTOR)?.len(),
        scroll_height: document
            .body()
            .map(|body| f64::from(body.scroll_height()))
            .unwrap_or(0.0),
    })
}

fn mount(component: Component, document: &Document) -> Result<bool> {
    match component {
        Component::CardInteraction => card_interaction::mount(document),
        Component::ScrollReveal => scroll_reveal::mount(document),
        Component::BackToTop => back_to_top::mount(document),
        Component::LoadingOverlay => loading_overlay::mount(document),
        Component::Filter => filter_bar::mount(document),
        Component::ContentToggler => content_toggler::mount(document),
        Component::FontSizeControl => font_size_controls::mount(document),
        Component::ThemeSwitcher => theme_switcher::mount(document),
    }
}

/// Mount every component the page qualifies for.
///
/// A failing component is logged and skipped; the rest still mount.
pub fn enhance_page(config: &EnhanceConfig) -> Result<()> {
    log::info!("{}", t::INIT_START);
    let document = dom::document()?;
    let profile = sample_profile(&document)?;
    log::debug!("page profile: {profile:?}");

    for component in page::init_plan(&profile, config) {
        if !component.applies_to(&profile) {
            log::debug!("{component}: page does not qualify");
            continue;
        }
        match mount(component, &document) {
            Ok(true) => log::debug!("{component}: mounted"),
            Ok(false) => log::debug!("{component}: nothing to enhance"),
            Err(err) => log::warn!("{component}: {err}"),
        }
    }

    log::info!("{}", t::INIT_DONE);
    Ok(())
}

pub fn inject_base_styles() -> Result<()> {
    let document = dom::document()?;
    dom::inject_stylesheet(&document, styles::BASE_STYLESHEET_ID, styles::BASE_STYLESHEET)
}

/// Run [`enhance_page`] once the DOM is parsed.
pub fn run_when_ready(config: EnhanceConfig) -> Result<()> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        return enhance_page(&config);
    }

    let mut pending = Some(config);
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(config) = pending.take() {
            if let Err(err) = enhance_page(&config) {
                log::warn!("page enhancement aborted: {err}");
            }
        }
    })
}
