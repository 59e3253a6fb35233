use anomaly_archive_shared::{theme::LIGHT_THEME_CLASS, Result, Theme};
use web_sys::Document;
use yew::prelude::*;

use crate::{
    dom,
    i18n::current::theme_switcher as t,
    storage::{self, BrowserPreferences},
    styles::theme as style,
};

fn apply_to_body(theme: Theme) {
    if let Some(body) = dom::document().ok().and_then(|doc| doc.body()) {
        let _ = body
            .class_list()
            .toggle_with_force(LIGHT_THEME_CLASS, theme.is_light());
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeSwitcherProps {
    pub prefs: BrowserPreferences,
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let theme = {
        let prefs = props.prefs.clone();
        use_state(move || prefs.load_theme())
    };

    use_effect_with(*theme, |theme| {
        apply_to_body(*theme);
        || ()
    });

    let onclick = {
        let theme = theme.clone();
        let prefs = props.prefs.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            if let Err(err) = prefs.save_theme(next) {
                log::warn!("theme not saved: {err}");
            }
            theme.set(next);
        })
    };

    html! {
        <button
            id="theme-toggle"
            type="button"
            style={style::BUTTON}
            title={t::TOOLTIP}
            aria-label={t::TOOLTIP}
            aria-pressed={theme.is_light().to_string()}
            {onclick}
        >
            { theme.icon() }
        </button>
    }
}

/// Add the floating light/dark switch and restore the saved theme.
pub fn mount(document: &Document) -> Result<bool> {
    let host = dom::host_in_body(document)?;
    host.set_id("theme-switcher");
    let _ = host.set_attribute("style", style::WRAPPER);
    yew::Renderer::<ThemeSwitcher>::with_root_and_props(
        host.into(),
        ThemeSwitcherProps {
            prefs: storage::browser_preferences(),
        },
    )
    .render();
    Ok(true)
}
