//! Page-type detection and the list of components to mount.

use std::fmt;

use crate::{config::EnhanceConfig, section::MIN_SECTIONS};

/// Back-to-top is only offered on pages at least this tall.
pub const BACK_TO_TOP_MIN_HEIGHT: f64 = 1500.0;
/// Scroll offset past which the back-to-top button appears.
pub const BACK_TO_TOP_SHOW_AFTER: f64 = 300.0;
/// The loading splash needs at least this many card-like elements.
pub const OVERLAY_MIN_CARDS: usize = 2;
/// Delay after `load` before the splash starts fading.
pub const OVERLAY_FADE_DELAY_MS: u32 = 500;
/// Fade duration; the splash is removed afterwards.
pub const OVERLAY_FADE_MS: u32 = 500;

/// Whether the back-to-top button should be visible at `scroll_y`.
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_SHOW_AFTER
}

/// Facts sampled once from the document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageProfile {
    /// A `.card-container` exists (listing page).
    pub has_card_container: bool,
    /// An `.archive-card` exists (entry detail page).
    pub has_archive_card: bool,
    /// Elements matching `.archive-card, .card`.
    pub card_like_count: usize,
    /// Elements matching `.content-section > section`.
    pub section_count: usize,
    /// `document.body.scrollHeight`.
    pub scroll_height: f64,
}

impl PageProfile {
    /// Listing page with a card grid.
    pub fn is_home(&self) -> bool {
        self.has_card_container
    }

    /// Single entry page.
    pub fn is_archive(&self) -> bool {
        self.has_archive_card
    }
}

/// The independent initializers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Hover lift and click press on cards.
    CardInteraction,
    /// Fade-in on scroll.
    ScrollReveal,
    /// Floating button back to the top.
    BackToTop,
    /// Full-screen splash until `load`.
    LoadingOverlay,
    /// Category filter row.
    Filter,
    /// Sticky section navigator.
    ContentToggler,
    /// Text scaling buttons.
    FontSizeControl,
    /// Light/dark switch.
    ThemeSwitcher,
}

impl Component {
    /// Whether the component's own precondition holds for `page`.
    ///
    /// Components without a page-level precondition (they no-op on their own
    /// when their elements are missing) always report `true`.
    pub fn applies_to(self, page: &PageProfile) -> bool {
        match self {
            Component::BackToTop => page.scroll_height >= BACK_TO_TOP_MIN_HEIGHT,
            Component::LoadingOverlay => page.card_like_count >= OVERLAY_MIN_CARDS,
            Component::Filter => page.has_card_container,
            Component::ContentToggler => page.section_count >= MIN_SECTIONS,
            Component::FontSizeControl => page.has_archive_card,
            Component::CardInteraction | Component::ScrollReveal | Component::ThemeSwitcher => true,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::CardInteraction => "card-interaction",
            Component::ScrollReveal => "scroll-reveal",
            Component::BackToTop => "back-to-top",
            Component::LoadingOverlay => "loading-overlay",
            Component::Filter => "filter",
            Component::ContentToggler => "content-toggler",
            Component::FontSizeControl => "font-size-control",
            Component::ThemeSwitcher => "theme-switcher",
        };
        f.write_str(name)
    }
}

/// Components to try on `page`, in mount order, before per-component guards.
///
/// Every page gets the common set; listing pages add the filter, entry pages
/// the navigator and font controls. The theme switch is opt-in.
pub fn init_plan(page: &PageProfile, config: &EnhanceConfig) -> Vec<Component> {
    let mut plan = vec![Component::CardInteraction, Component::ScrollReveal, Component::BackToTop];
    if config.loading_overlay {
        plan.push(Component::LoadingOverlay);
    }
    if page.is_home() {
        plan.push(Component::Filter);
    }
    if page.is_archive() {
        plan.push(Component::ContentToggler);
        plan.push(Component::FontSizeControl);
    }
    if config.theme_switcher {
        plan.push(Component::ThemeSwitcher);
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_to_top_threshold_is_exclusive() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }

    #[test]
    fn short_pages_skip_back_to_top() {
        let page = PageProfile {
            scroll_height: 1499.0,
            ..PageProfile::default()
        };
        assert!(!Component::BackToTop.applies_to(&page));
        let page = PageProfile {
            scroll_height: 1500.0,
            ..page
        };
        assert!(Component::BackToTop.applies_to(&page));
    }

    #[test]
    fn single_card_gets_no_splash() {
        let page = PageProfile {
            card_like_count: 1,
            ..PageProfile::default()
        };
        assert!(!Component::LoadingOverlay.applies_to(&page));
    }

    #[test]
    fn display_names_are_kebab_case() {
        assert_eq!(Component::FontSizeControl.to_string(), "font-size-control");
    }
}
