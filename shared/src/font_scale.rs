//! Text scaling for entry pages.

use std::fmt;

/// Percentage applied to the archive body's `font-size`.
///
/// Always a multiple of [`FontScale::STEP`] within
/// [`FontScale::MIN`]..=[`FontScale::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontScale(u16);

impl FontScale {
    /// Smallest scale the decrease button reaches.
    pub const MIN: u16 = 70;
    /// Largest scale the increase button reaches.
    pub const MAX: u16 = 150;
    /// Change per click.
    pub const STEP: u16 = 10;
    /// Scale before any user choice.
    pub const DEFAULT: FontScale = FontScale(100);

    /// Percentage value.
    pub fn percent(self) -> u16 {
        self.0
    }

    /// One step smaller, or unchanged at the floor.
    pub fn decreased(self) -> Self {
        if self.0 > Self::MIN {
            Self(self.0 - Self::STEP)
        } else {
            self
        }
    }

    /// One step larger, or unchanged at the ceiling.
    pub fn increased(self) -> Self {
        if self.0 < Self::MAX {
            Self(self.0 + Self::STEP)
        } else {
            self
        }
    }

    /// Value for the `font-size` property, e.g. `110%`.
    pub fn css_value(self) -> String {
        format!("{}%", self.0)
    }

    /// Read a persisted value.
    ///
    /// Leading integer digits are honoured the way a lenient integer parse
    /// would; anything outside the range is clamped and snapped down to the
    /// step grid. Empty or non-numeric input yields `None`.
    pub fn parse_persisted(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        let value = digits.parse::<u32>().unwrap_or(u32::MAX);
        let clamped = value.clamp(u32::from(Self::MIN), u32::from(Self::MAX)) as u16;
        let snapped = clamped - (clamped - Self::MIN) % Self::STEP;
        Some(Self(snapped))
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FontScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Button of the font-size panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontAction {
    /// A⁻
    Decrease,
    /// A⸰
    Reset,
    /// A⁺
    Increase,
}

impl FontAction {
    /// Apply the action to `scale`.
    pub fn apply(self, scale: FontScale) -> FontScale {
        match self {
            FontAction::Decrease => scale.decreased(),
            FontAction::Reset => FontScale::DEFAULT,
            FontAction::Increase => scale.increased(),
        }
    }
}
