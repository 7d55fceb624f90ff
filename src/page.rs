//! Page identity and the widgets each page activates.
//!
//! The static pages mark themselves with a body class (`home`, `education`,
//! `skills`, `contact`). That marker is parsed once into [`PageKind`] and the
//! composition root works from the enum from then on.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Which portfolio page is loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Education,
    Skills,
    Contact,
    /// Any page without a recognized marker.
    #[default]
    Other,
}

/// An independently mounted page behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Widget {
    Theme,
    Greeting,
    ExpandableText,
    SkillPanel,
    ContactForm,
}

impl PageKind {
    /// Parse a single class token.
    pub fn from_marker(token: &str) -> Option<Self> {
        match token {
            "home" => Some(Self::Home),
            "education" => Some(Self::Education),
            "skills" => Some(Self::Skills),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// Every page kind marked in a full `class` attribute value, in order.
    ///
    /// Tokens are matched whole and duplicates dropped. A body with no
    /// recognized marker is [`PageKind::Other`].
    pub fn from_body_class(class_name: &str) -> Vec<Self> {
        let mut kinds = Vec::new();
        for kind in class_name.split_whitespace().filter_map(Self::from_marker) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        if kinds.is_empty() {
            kinds.push(Self::Other);
        }
        kinds
    }

    /// Widgets to mount, in order. The theme applies on every page.
    pub fn widgets(self) -> &'static [Widget] {
        match self {
            Self::Home => &[Widget::Theme, Widget::Greeting],
            Self::Education => &[Widget::Theme, Widget::ExpandableText],
            Self::Skills => &[Widget::Theme, Widget::SkillPanel],
            Self::Contact => &[Widget::Theme, Widget::ContactForm],
            Self::Other => &[Widget::Theme],
        }
    }
}

/// Union of the widgets for `pages`, each mounted once, in first-seen order.
pub fn mount_plan(pages: &[PageKind]) -> Vec<Widget> {
    let mut plan = Vec::new();
    for widget in pages.iter().flat_map(|page| page.widgets()) {
        if !plan.contains(widget) {
            plan.push(*widget);
        }
    }
    plan
}
