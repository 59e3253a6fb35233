//! Section navigator model and scroll-spy state.

use crate::visibility::VisibilityChange;

/// Selector of the top-level archive sections.
pub const SECTION_SELECTOR: &str = ".content-section > section";
/// Heading that names a section.
pub const HEADING_SELECTOR: &str = "h2, h3";
/// The navigator only appears on pages with at least this many sections.
pub const MIN_SECTIONS: usize = 3;

const DECORATIONS: &[char] = &[
    '📝', '⚠', '🔒', '🔄', '📋', '✨', '🕸', '\u{fe0f}',
];

/// Drop the decorative emoji that section headings carry and trim.
pub fn strip_decorations(title: &str) -> String {
    title
        .chars()
        .filter(|c| !DECORATIONS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// One navigator link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    /// Index of the section among all top-level sections.
    pub index: usize,
    /// Cleaned heading text.
    pub title: String,
}

/// Build the navigator entries from each section's heading, if any.
///
/// Returns `None` when there are fewer than [`MIN_SECTIONS`] sections; the
/// navigator is not shown then. Sections without a heading keep their index
/// but get no link.
pub fn build_entries<I, S>(headings: I) -> Option<Vec<SectionEntry>>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let headings: Vec<Option<S>> = headings.into_iter().collect();
    if headings.len() < MIN_SECTIONS {
        return None;
    }
    Some(
        headings
            .into_iter()
            .enumerate()
            .filter_map(|(index, heading)| {
                heading.map(|text| SectionEntry {
                    index,
                    title: strip_decorations(text.as_ref()),
                })
            })
            .collect(),
    )
}

/// Which navigator link is highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollSpy {
    linked: Vec<usize>,
    active: Option<usize>,
}

impl ScrollSpy {
    /// Track the sections that have links.
    pub fn new(entries: &[SectionEntry]) -> Self {
        Self {
            linked: entries.iter().map(|entry| entry.index).collect(),
            active: None,
        }
    }

    /// Section index of the highlighted link.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Highlight `index` (a click). Unknown indices leave the state as is.
    pub fn activate(&mut self, index: usize) -> bool {
        if self.linked.contains(&index) {
            self.active = Some(index);
            true
        } else {
            false
        }
    }

    /// Fold an observer notification. Only entering sections move the
    /// highlight; leaving ones are ignored.
    pub fn on_change(&mut self, change: VisibilityChange) -> bool {
        change.intersecting && self.activate(change.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_heading_emoji() {
        assert_eq!(strip_decorations("📝 描述"), "描述");
        assert_eq!(strip_decorations("⚠️ 特殊收容措施"), "特殊收容措施");
        assert_eq!(strip_decorations("🕸️关联档案 "), "关联档案");
        assert_eq!(strip_decorations("附录"), "附录");
    }

    #[test]
    fn two_sections_are_not_enough() {
        assert_eq!(build_entries([Some("描述"), Some("附录")]), None);
    }

    #[test]
    fn headingless_sections_get_no_link() {
        let entries =
            build_entries([Some("📝 描述"), None, Some("🔒 收容"), Some("📋 附录")]).expect("four sections");
        let indices: Vec<_> = entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 2, 3]);
        assert_eq!(entries[1].title, "收容");
    }

    #[test]
    fn spy_keeps_a_single_active_link() {
        let entries = build_entries([Some("a"), Some("b"), None, Some("d")]).expect("enough");
        let mut spy = ScrollSpy::new(&entries);
        assert_eq!(spy.active(), None);

        assert!(spy.on_change(VisibilityChange { target: 1, intersecting: true }));
        assert!(!spy.on_change(VisibilityChange { target: 0, intersecting: false }));
        assert_eq!(spy.active(), Some(1));

        assert!(!spy.on_change(VisibilityChange { target: 2, intersecting: true }));
        assert_eq!(spy.active(), Some(1));

        assert!(spy.activate(3));
        assert_eq!(spy.active(), Some(3));
    }
}
