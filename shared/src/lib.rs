//! View-models and decision rules for the anomaly archive page enhancer.
//!
//! Nothing in this crate touches the DOM. The frontend samples the document
//! into these types, asks them what the page should look like, and applies
//! the answer.

pub mod card;
pub mod config;
pub mod error;
pub mod filter;
pub mod font_scale;
pub mod page;
pub mod preferences;
pub mod section;
pub mod theme;
pub mod visibility;

pub use card::CardModel;
pub use config::EnhanceConfig;
pub use error::{ArchiveError, Result};
pub use filter::{CardVisibility, FilterTier};
pub use font_scale::{FontAction, FontScale};
pub use page::{Component, PageProfile};
pub use preferences::{FontScaleControl, MemoryStore, PreferenceStore, Preferences};
pub use section::{ScrollSpy, SectionEntry};
pub use theme::Theme;
pub use visibility::{ObserverOptions, RevealState, VisibilityChange};
