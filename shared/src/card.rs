//! Listing cards: the typed view of a `.card` element plus the pure rules
//! that decide how it looks while hovered, clicked or filtered.

/// Substring in a card's body that flags a high-risk entry.
pub const SEVERITY_MARKER: &str = "Keter";

/// How long the click "press" transform stays before it is cleared.
pub const CLICK_FEEDBACK_MS: u32 = 150;

/// Inline style values a card cycles through on hover.
pub mod hover {
    /// Lifted position while the pointer is over the card.
    pub const LIFTED_TRANSFORM: &str = "translateY(-8px)";
    /// Deeper shadow while lifted.
    pub const LIFTED_SHADOW: &str = "0 15px 35px rgba(0, 0, 0, 0.2)";
    /// Resting position.
    pub const REST_TRANSFORM: &str = "translateY(0)";
    /// Resting shadow.
    pub const REST_SHADOW: &str = "0 5px 15px rgba(0, 0, 0, 0.1)";
    /// Top border of a severe card while hovered.
    pub const SEVERE_BORDER_HOVER: &str = "4px solid #e74c3c";
    /// Top border a severe card returns to.
    pub const SEVERE_BORDER_REST: &str = "4px solid #8b0000";
    /// Transform applied for the brief press feedback.
    pub const PRESSED_TRANSFORM: &str = "scale(0.98)";
}

/// A card read once from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    /// Text of the card's `.meta-info` block, used for filtering.
    pub category: String,
    /// Whether the card body carries [`SEVERITY_MARKER`].
    pub severe: bool,
    /// Whether the card has a `.card-link`, i.e. clicking it navigates.
    pub linked: bool,
}

impl CardModel {
    /// Build a model from the raw pieces of card markup.
    pub fn new(category: impl Into<String>, body: &str, linked: bool) -> Self {
        Self {
            category: category.into(),
            severe: body.contains(SEVERITY_MARKER),
            linked,
        }
    }
}

/// Inline style a card should carry for a given pointer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStyle {
    /// `transform`
    pub transform: &'static str,
    /// `box-shadow`
    pub shadow: &'static str,
    /// `border-top`, only ever set for severe cards.
    pub border_top: Option<&'static str>,
}

/// Resolve the style for `card` entering (`hovered == true`) or leaving.
pub fn hover_style(card: &CardModel, hovered: bool) -> HoverStyle {
    if hovered {
        HoverStyle {
            transform: hover::LIFTED_TRANSFORM,
            shadow: hover::LIFTED_SHADOW,
            border_top: card.severe.then_some(hover::SEVERE_BORDER_HOVER),
        }
    } else {
        HoverStyle {
            transform: hover::REST_TRANSFORM,
            shadow: hover::REST_SHADOW,
            border_top: card.severe.then_some(hover::SEVERE_BORDER_REST),
        }
    }
}

/// Whether a click on an element with `target_tag` should give press feedback.
///
/// Clicks that land on nested links or buttons are left to those elements.
pub fn wants_press_feedback(card: &CardModel, target_tag: &str) -> bool {
    let tag = target_tag.to_ascii_uppercase();
    card.linked && tag != "A" && tag != "BUTTON"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<CardModel> {
        vec![
            CardModel::new("等级：Euclid", "<p>常规收容</p>", true),
            CardModel::new("等级：Keter", "<p>Keter级异物</p>", true),
            CardModel::new("等级：待定", "<p>调查中</p>", true),
            CardModel::new("等级：Euclid", "<p>低风险</p>", false),
        ]
    }

    #[test]
    fn only_the_keter_card_gets_the_red_border() {
        let styled: Vec<_> = cards().iter().map(|card| hover_style(card, true)).collect();
        let red: Vec<_> = styled
            .iter()
            .enumerate()
            .filter(|(_, style)| style.border_top == Some("4px solid #e74c3c"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(red, vec![1]);
        assert!(styled.iter().all(|style| style.transform == hover::LIFTED_TRANSFORM));
    }

    #[test]
    fn leaving_restores_the_resting_border() {
        let all = cards();
        let rest = hover_style(&all[1], false);
        assert_eq!(rest.border_top, Some(hover::SEVERE_BORDER_REST));
        assert_eq!(rest.transform, hover::REST_TRANSFORM);
        assert_eq!(rest.shadow, hover::REST_SHADOW);

        assert_eq!(hover_style(&all[0], false).border_top, None);
    }

    #[test]
    fn press_feedback_skips_nested_controls_and_unlinked_cards() {
        let all = cards();
        assert!(wants_press_feedback(&all[0], "DIV"));
        assert!(wants_press_feedback(&all[0], "p"));
        assert!(!wants_press_feedback(&all[0], "A"));
        assert!(!wants_press_feedback(&all[0], "button"));
        assert!(!wants_press_feedback(&all[3], "DIV"));
    }
}
