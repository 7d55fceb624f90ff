//! Skill description lookup and the shared description panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every skill element on the page writes into one display element. Click and
//! hover show the same text; leaving an element always restores the prompt,
//! whichever way the description was shown.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use std::collections::BTreeMap;

use crate::config::{SKILL_PLACEHOLDER, SkillCopy};

/// Immutable label → description table.
#[derive(Clone, Debug)]
pub struct SkillCatalog {
    descriptions: BTreeMap<String, String>,
    fallback: String,
}

impl SkillCatalog {
    pub fn new(copy: &SkillCopy) -> Self {
        Self { descriptions: copy.descriptions.clone(), fallback: copy.fallback.clone() }
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    /// Description for `label`, or the fallback naming it as unavailable.
    ///
    /// Surrounding whitespace in `label` is ignored.
    pub fn describe(&self, label: &str) -> String {
        let key = label.trim();
        match self.descriptions.get(key) {
            Some(text) => text.clone(),
            None => self.fallback.replace(SKILL_PLACEHOLDER, key),
        }
    }
}

/// Pointer interactions on a skill element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillEvent {
    Click,
    Hover,
    Unhover,
}

impl SkillEvent {
    /// Whether the browser's default action (link navigation) is suppressed.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Click)
    }
}

/// Target the panel writes into.
pub trait DisplaySink {
    fn show(&mut self, text: &str);
}

/// The shared description panel.
#[derive(Debug)]
pub struct SkillPanel<D> {
    sink: D,
    prompt: String,
}

impl<D: DisplaySink> SkillPanel<D> {
    /// Bind the panel to `sink` and show the prompt.
    pub fn new(mut sink: D, prompt: &str) -> Self {
        sink.show(prompt);
        Self { sink, prompt: prompt.to_owned() }
    }

    #[cfg(test)]
    pub(crate) fn sink(&self) -> &D {
        &self.sink
    }

    /// Show `description` on click or hover; restore the prompt on unhover.
    pub fn dispatch(&mut self, event: SkillEvent, description: &str) {
        let text = match event {
            SkillEvent::Click | SkillEvent::Hover => description,
            SkillEvent::Unhover => self.prompt.as_str(),
        };
        self.sink.show(text);
    }
}
