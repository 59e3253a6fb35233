//! Category filter tiers shown above the card list.

/// Delay before a shown card animates in, so `display` applies first.
pub const SHOW_DELAY_MS: u32 = 10;
/// Transition length after which a faded card is taken out of layout.
pub const HIDE_AFTER_MS: u32 = 300;

/// One button of the filter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterTier {
    /// Every card.
    All,
    /// Cards whose category mentions "Euclid".
    Euclid,
    /// Cards whose category mentions "Keter".
    Keter,
    /// Cards still awaiting classification ("待定").
    Pending,
}

impl FilterTier {
    /// Buttons in display order; the first one is selected on load.
    pub const ALL: [FilterTier; 4] =
        [FilterTier::All, FilterTier::Euclid, FilterTier::Keter, FilterTier::Pending];

    /// Value of the button's `data-filter` attribute.
    pub fn key(self) -> &'static str {
        match self {
            FilterTier::All => "all",
            FilterTier::Euclid => "euclid",
            FilterTier::Keter => "keter",
            FilterTier::Pending => "pending",
        }
    }

    /// Substring a card's category must contain, `None` for [`FilterTier::All`].
    pub fn marker(self) -> Option<&'static str> {
        match self {
            FilterTier::All => None,
            FilterTier::Euclid => Some("Euclid"),
            FilterTier::Keter => Some("Keter"),
            FilterTier::Pending => Some("待定"),
        }
    }

    /// Whether a card with this category text stays visible.
    pub fn matches(self, category: &str) -> bool {
        self.marker().map_or(true, |marker| category.contains(marker))
    }
}

/// Target state of one card after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisibility {
    /// `display: block`, then opacity 1 / scale 1.
    Shown,
    /// opacity 0 / scale 0.8, then `display: none`.
    Hidden,
}

impl CardVisibility {
    /// `opacity` to animate towards.
    pub fn opacity(self) -> &'static str {
        match self {
            CardVisibility::Shown => "1",
            CardVisibility::Hidden => "0",
        }
    }

    /// `transform` to animate towards.
    pub fn transform(self) -> &'static str {
        match self {
            CardVisibility::Shown => "scale(1)",
            CardVisibility::Hidden => "scale(0.8)",
        }
    }
}

/// Decide every card's visibility for `tier`, in card order.
pub fn plan<'a>(
    tier: FilterTier,
    categories: impl IntoIterator<Item = &'a str>,
) -> Vec<CardVisibility> {
    categories
        .into_iter()
        .map(|category| {
            if tier.matches(category) {
                CardVisibility::Shown
            } else {
                CardVisibility::Hidden
            }
        })
        .collect()
}
