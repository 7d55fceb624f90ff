//! Writes the time-of-day greeting into `#greeting-message`.

use web_sys::Document;

use crate::config::GreetingCopy;
use crate::state::greeting::greeting_for_hour;

pub fn mount(document: &Document, copy: &GreetingCopy) -> bool {
    let Some(element) = document.get_element_by_id(&copy.element_id) else {
        return false;
    };
    let hour = js_sys::Date::new_0().get_hours();
    element.set_text_content(Some(greeting_for_hour(hour, copy)));
    true
}
