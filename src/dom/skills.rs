//! Skill description panel: `.skill` elements write into `#skill-description`.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::{listen, query_all};
use crate::config::SkillCopy;
use crate::state::skills::{DisplaySink, SkillCatalog, SkillEvent, SkillPanel};

/// Display sink backed by a DOM element's text content.
pub struct ElementSink(Element);

impl DisplaySink for ElementSink {
    fn show(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

const BINDINGS: [(&str, SkillEvent); 3] =
    [("click", SkillEvent::Click), ("mouseover", SkillEvent::Hover), ("mouseout", SkillEvent::Unhover)];

pub fn mount(document: &Document, copy: &SkillCopy) -> bool {
    let Some(display) = document.get_element_by_id(&copy.display_id) else {
        return false;
    };
    let catalog = SkillCatalog::new(copy);
    let panel = Rc::new(RefCell::new(SkillPanel::new(ElementSink(display), &copy.prompt)));

    let skills = query_all(document, &copy.selector);
    for skill in &skills {
        let description: Rc<str> = catalog.describe(&skill.text_content().unwrap_or_default()).into();
        for (event_name, event) in BINDINGS {
            let panel = Rc::clone(&panel);
            let description = Rc::clone(&description);
            listen(skill, event_name, move |dom_event| {
                if event.prevents_default() {
                    dom_event.prevent_default();
                }
                panel.borrow_mut().dispatch(event, &description);
            });
        }
    }
    log::debug!("bound {} skills against {} descriptions", skills.len(), catalog.len());
    true
}
