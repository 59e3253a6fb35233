//! Page-level scenarios run against the shared view-models.

#[cfg(test)]
mod tests {
    use anomaly_archive_shared::{
        card::{hover_style, CardModel},
        filter::{self, CardVisibility, FilterTier},
        page::{init_plan, Component, PageProfile},
        preferences::{PreferenceStore, Preferences, FONT_SIZE_KEY},
        section, EnhanceConfig, FontAction, FontScale, FontScaleControl, MemoryStore, Theme,
    };

    fn home_page() -> PageProfile {
        PageProfile {
            has_card_container: true,
            has_archive_card: false,
            card_like_count: 4,
            section_count: 0,
            scroll_height: 2400.0,
        }
    }

    fn archive_page(sections: usize) -> PageProfile {
        PageProfile {
            has_card_container: false,
            has_archive_card: true,
            card_like_count: 1,
            section_count: sections,
            scroll_height: 3200.0,
        }
    }

    fn mounted(page: &PageProfile, config: &EnhanceConfig) -> Vec<Component> {
        init_plan(page, config)
            .into_iter()
            .filter(|component| component.applies_to(page))
            .collect()
    }

    #[test]
    fn home_page_mounts_filter_and_splash() {
        let components = mounted(&home_page(), &EnhanceConfig::default());
        assert_eq!(
            components,
            vec![
                Component::CardInteraction,
                Component::ScrollReveal,
                Component::BackToTop,
                Component::LoadingOverlay,
                Component::Filter,
            ]
        );
    }

    #[test]
    fn archive_page_with_two_sections_has_no_navigator() {
        let components = mounted(&archive_page(2), &EnhanceConfig::default());
        assert!(!components.contains(&Component::ContentToggler));
        assert!(components.contains(&Component::FontSizeControl));
        assert!(!components.contains(&Component::LoadingOverlay));

        let headings = [Some("📝 描述"), Some("📋 附录")];
        assert!(section::build_entries(headings).is_none());
    }

    #[test]
    fn archive_page_with_three_sections_has_navigator() {
        let components = mounted(&archive_page(3), &EnhanceConfig::default());
        assert!(components.contains(&Component::ContentToggler));
    }

    #[test]
    fn theme_switcher_is_opt_in() {
        let default_plan = init_plan(&home_page(), &EnhanceConfig::default());
        assert!(!default_plan.contains(&Component::ThemeSwitcher));

        let config = EnhanceConfig::from_json(r#"{"theme_switcher": true}"#).expect("valid config");
        assert_eq!(init_plan(&home_page(), &config).last(), Some(&Component::ThemeSwitcher));
    }

    #[test]
    fn four_cards_one_keter() {
        let cards = [
            CardModel::new("等级：Euclid", "普通档案", true),
            CardModel::new("等级：Keter", "Keter级：高危", true),
            CardModel::new("等级：Euclid", "普通档案", true),
            CardModel::new("等级：待定", "调查中", true),
        ];
        let borders: Vec<_> = cards.iter().map(|card| hover_style(card, true).border_top).collect();
        assert_eq!(borders, vec![None, Some("4px solid #e74c3c"), None, None]);

        let visibility = filter::plan(FilterTier::Keter, cards.iter().map(|card| card.category.as_str()));
        assert_eq!(
            visibility,
            vec![
                CardVisibility::Hidden,
                CardVisibility::Shown,
                CardVisibility::Hidden,
                CardVisibility::Hidden,
            ]
        );
    }

    #[test]
    fn font_scale_is_written_only_after_first_click() {
        let store = MemoryStore::new();
        let (mut control, saved) = FontScaleControl::restore(Preferences::new(store.clone()));

        assert_eq!(saved, None);
        assert_eq!(control.scale().css_value(), "100%");
        assert!(store.is_empty());

        assert_eq!(control.press(FontAction::Reset), Some(FontScale::DEFAULT));
        assert_eq!(store.get(FONT_SIZE_KEY).expect("memory store").as_deref(), Some("100"));
    }

    #[test]
    fn saved_font_scale_is_applied_without_being_rewritten() {
        let store = MemoryStore::new();
        store.set(FONT_SIZE_KEY, "130").expect("memory store");

        let (control, saved) = FontScaleControl::restore(Preferences::new(store.clone()));
        assert_eq!(saved.map(FontScale::percent), Some(130));
        assert_eq!(control.scale().percent(), 130);
        assert_eq!(store.get(FONT_SIZE_KEY).expect("memory store").as_deref(), Some("130"));
    }

    #[test]
    fn preferences_are_restored_after_reload() {
        let store = MemoryStore::new();
        {
            let prefs = Preferences::new(store.clone());
            prefs.save_theme(Theme::Light).expect("memory store");
            let scale = FontAction::Increase.apply(FontAction::Increase.apply(FontScale::DEFAULT));
            prefs.save_font_scale(scale).expect("memory store");
        }

        let reloaded = Preferences::new(store);
        assert_eq!(reloaded.load_theme(), Theme::Light);
        assert_eq!(reloaded.load_font_scale().map(FontScale::percent), Some(120));
    }
}
