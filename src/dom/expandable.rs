//! "Read More" controls for long `.edu-text p` paragraphs.
//!
//! Scans once at mount. Paragraphs added afterwards get no control.

use web_sys::{Document, Element};

use super::{listen, query_all, warn_on_err};
use crate::config::ExpandCopy;
use crate::state::expandable::{ExpandEvent, ExpandableBlock, qualifies};

pub fn mount(document: &Document, copy: &ExpandCopy) -> bool {
    let paragraphs = query_all(document, &copy.selector);
    let found = paragraphs.len();
    let mut attached = 0_usize;
    for paragraph in paragraphs {
        let text = paragraph.text_content().unwrap_or_default();
        if !qualifies(&text, copy.threshold) {
            continue;
        }
        if attach(document, paragraph, copy) {
            attached += 1;
        }
    }
    log::debug!("attached {attached} read-more controls across {found} paragraphs");
    found > 0
}

fn attach(document: &Document, paragraph: Element, copy: &ExpandCopy) -> bool {
    let button = match document.create_element("button") {
        Ok(button) => button,
        Err(err) => {
            log::warn!("creating read-more button failed: {err:?}");
            return false;
        }
    };
    let mut block = ExpandableBlock::default();
    button.set_class_name(&copy.button_class);
    button.set_text_content(Some(block.label(copy)));
    warn_on_err(paragraph.class_list().add_1(&copy.truncated_class), "adding truncated class");
    warn_on_err(paragraph.after_with_node_1(&button), "inserting read-more button");

    let copy = copy.clone();
    let control = button.clone();
    listen(&button, "click", move |_event| {
        block = block.apply(ExpandEvent::Toggle);
        let classes = paragraph.class_list();
        let result = if block.is_expanded() {
            classes.add_1(&copy.expanded_class)
        } else {
            classes.remove_1(&copy.expanded_class)
        };
        warn_on_err(result, "toggling expanded class");
        control.set_text_content(Some(block.label(&copy)));
    });
    true
}
