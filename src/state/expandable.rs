//! "Read More" / "Read Less" state for long text blocks.

#[cfg(test)]
#[path = "expandable_test.rs"]
mod expandable_test;

use crate::config::ExpandCopy;

/// Whether a block of `text` is long enough to get a toggle control.
///
/// Length is counted in UTF-16 code units, the browser's `textContent.length`,
/// so characters outside the Basic Multilingual Plane count twice.
pub fn qualifies(text: &str, threshold: usize) -> bool {
    text.encode_utf16().count() > threshold
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandEvent {
    Toggle,
}

/// Expansion state of one qualifying block. Starts collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpandableBlock {
    expanded: bool,
}

impl ExpandableBlock {
    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn apply(self, event: ExpandEvent) -> Self {
        match event {
            ExpandEvent::Toggle => Self { expanded: !self.expanded },
        }
    }

    /// Control label for the current state.
    pub fn label(self, copy: &ExpandCopy) -> &str {
        if self.expanded { &copy.less_label } else { &copy.more_label }
    }
}
