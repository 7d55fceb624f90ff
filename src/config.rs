//! Typed page configuration: every user-facing string, colour and threshold.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults reproduce the portfolio's shipped copy exactly. A page may embed
//! `<script type="application/json" id="portfolio-config">` to override any
//! field; omitted fields keep their defaults because every section is
//! `#[serde(default)]`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;

use serde::Deserialize;

/// DOM id of the optional inline JSON override element.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Placeholder replaced with the skill label in [`SkillCopy::fallback`].
pub const SKILL_PLACEHOLDER: &str = "{skill}";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub greeting: GreetingCopy,
    pub theme: ThemeCopy,
    pub expandable: ExpandCopy,
    pub skills: SkillCopy,
    pub contact: ContactCopy,
}

impl PortfolioConfig {
    /// Parse an override document. Missing fields fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GreetingCopy {
    pub element_id: String,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
}

impl Default for GreetingCopy {
    fn default() -> Self {
        Self {
            element_id: "greeting-message".to_owned(),
            morning: "Good morning! ☀️ Ready for a productive day.".to_owned(),
            afternoon: "Good afternoon! ☕ Hope you're having a great day.".to_owned(),
            evening: "Good evening! 🌙 Thanks for visiting my portfolio.".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeCopy {
    pub toggle_id: String,
    pub storage_key: String,
    pub dark_class: String,
    /// Label shown while dark mode is active.
    pub to_light_label: String,
    /// Label shown while light mode is active.
    pub to_dark_label: String,
}

impl Default for ThemeCopy {
    fn default() -> Self {
        Self {
            toggle_id: "theme-toggle".to_owned(),
            storage_key: "theme".to_owned(),
            dark_class: "dark-mode".to_owned(),
            to_light_label: "Light Mode 💡".to_owned(),
            to_dark_label: "Dark Mode 🌙".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExpandCopy {
    pub selector: String,
    /// Blocks longer than this many characters get a toggle control.
    pub threshold: usize,
    pub truncated_class: String,
    pub expanded_class: String,
    pub button_class: String,
    pub more_label: String,
    pub less_label: String,
}

impl Default for ExpandCopy {
    fn default() -> Self {
        Self {
            selector: ".edu-text p".to_owned(),
            threshold: 200,
            truncated_class: "truncated".to_owned(),
            expanded_class: "expanded".to_owned(),
            button_class: "read-more-btn".to_owned(),
            more_label: "Read More".to_owned(),
            less_label: "Read Less".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkillCopy {
    pub selector: String,
    pub display_id: String,
    pub prompt: String,
    /// Message for labels missing from `descriptions`; see [`SKILL_PLACEHOLDER`].
    pub fallback: String,
    pub descriptions: BTreeMap<String, String>,
}

impl Default for SkillCopy {
    fn default() -> Self {
        let descriptions = [
            (
                "HTML",
                "HTML (HyperText Markup Language) is the standard markup language for documents designed to be displayed in a web browser. It forms the structure of a webpage.",
            ),
            (
                "CSS",
                "CSS (Cascading Style Sheets) is a style sheet language used for describing the presentation of a document written in a markup language like HTML. It handles the look and feel.",
            ),
            (
                "JavaScript",
                "JavaScript is a high-level, often just-in-time compiled language that conforms to the ECMAScript standard. It is used to make web pages interactive and dynamic.",
            ),
        ]
        .into_iter()
        .map(|(label, text)| (label.to_owned(), text.to_owned()))
        .collect();

        Self {
            selector: ".skill".to_owned(),
            display_id: "skill-description".to_owned(),
            prompt: "Click on a skill to see a brief description.".to_owned(),
            fallback: "Description for {skill} is not available.".to_owned(),
            descriptions,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactCopy {
    pub form_selector: String,
    pub feedback_id: String,
    pub submit_selector: String,
    pub accept: String,
    pub sending_label: String,
    /// Used when the submit control has no label of its own to restore.
    pub default_label: String,
    pub success_text: String,
    pub error_text: String,
    pub network_text: String,
    pub success_color: String,
    pub error_color: String,
}

impl Default for ContactCopy {
    fn default() -> Self {
        Self {
            form_selector: ".contact-card form".to_owned(),
            feedback_id: "form-feedback".to_owned(),
            submit_selector: "button[type=\"submit\"]".to_owned(),
            accept: "application/json".to_owned(),
            sending_label: "Sending...".to_owned(),
            default_label: "Send Message".to_owned(),
            success_text: "Message sent successfully! Thank you. 😊".to_owned(),
            error_text: "Oops! There was an error sending your message. 😔".to_owned(),
            network_text: "Network error. Please try again later.".to_owned(),
            success_color: "#00796b".to_owned(),
            error_color: "#d32f2f".to_owned(),
        }
    }
}
