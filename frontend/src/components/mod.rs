// One module per page enhancement. Each exposes `mount(&Document)`, returning
// `Ok(false)` when the page has nothing for it to do.

pub mod back_to_top;
pub mod card_interaction;
pub mod content_toggler;
pub mod filter_bar;
pub mod font_size_controls;
pub mod loading_overlay;
pub mod scroll_reveal;
pub mod theme_switcher;
