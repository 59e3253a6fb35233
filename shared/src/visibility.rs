//! Viewport visibility as a plain event sequence.
//!
//! The browser reports intersections through observer callbacks; the frontend
//! turns each report into a [`VisibilityChange`] and consumers fold those into
//! small finite states such as [`RevealState`].

/// One notification: element `target` (index into the observed list) crossed
/// the observer threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityChange {
    /// Position of the element in the list handed to the observer.
    pub target: usize,
    /// Whether it is now intersecting.
    pub intersecting: bool,
}

/// Threshold and root margin for one observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport.
    pub root_margin: &'static str,
}

impl ObserverOptions {
    /// Fade-ins: 10% visible, triggering 50px before the bottom edge.
    pub const REVEAL: ObserverOptions = ObserverOptions {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
    };

    /// Section scroll-spy: 30% visible.
    pub const SCROLL_SPY: ObserverOptions = ObserverOptions {
        threshold: 0.3,
        root_margin: "0px",
    };
}

/// Selector of blocks that fade in on scroll.
pub const REVEAL_SELECTOR: &str =
    ".description-box, .warning-box, .info-table, .schedule-item, .logic-item, .feature-item";
/// Class every reveal target starts with.
pub const REVEAL_INITIAL_CLASS: &str = "fade-in-element";
/// Class added once the target has been seen.
pub const REVEAL_VISIBLE_CLASS: &str = "fade-in-visible";

/// Per-element fade-in state. Once visible, always visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Not yet scrolled into view.
    #[default]
    Pending,
    /// Has intersected at least once.
    Visible,
}

impl RevealState {
    /// Fold one notification into the state.
    pub fn on_change(self, intersecting: bool) -> Self {
        if intersecting {
            RevealState::Visible
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_sticky() {
        let state = RevealState::default()
            .on_change(false)
            .on_change(true)
            .on_change(false);
        assert_eq!(state, RevealState::Visible);
        assert_eq!(RevealState::Pending.on_change(false), RevealState::Pending);
    }

    #[test]
    fn reveal_triggers_before_full_entry() {
        assert!(ObserverOptions::REVEAL.threshold < ObserverOptions::SCROLL_SPY.threshold);
        assert!(ObserverOptions::REVEAL.root_margin.contains("-50px"));
    }
}
