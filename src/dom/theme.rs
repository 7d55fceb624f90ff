//! Theme toggle bound to `localStorage` and the body's `dark-mode` class.

use web_sys::{Document, Element, HtmlElement, Storage};

use super::{listen, warn_on_err};
use crate::config::ThemeCopy;
use crate::state::theme::{MemoryPreferences, PreferenceStore, Theme, ThemeController, ThemeEvent};

/// `window.localStorage`, or an in-memory map when storage is unavailable.
pub enum BrowserPreferences {
    Local(Storage),
    Memory(MemoryPreferences),
}

impl BrowserPreferences {
    pub fn open() -> Self {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Self::Local(storage),
            _ => {
                log::warn!("localStorage unavailable; theme preference will not persist");
                Self::Memory(MemoryPreferences::new())
            }
        }
    }
}

impl PreferenceStore for BrowserPreferences {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => match storage.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("reading {key} from localStorage failed: {err:?}");
                    None
                }
            },
            Self::Memory(memory) => memory.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self {
            Self::Local(storage) => warn_on_err(storage.set_item(key, value), "localStorage write"),
            Self::Memory(memory) => memory.set(key, value),
        }
    }
}

/// Apply the stored theme and wire the toggle control if the page has one.
///
/// The body class is applied even without a control, so every page honors
/// the preference.
pub fn mount(document: &Document, copy: &ThemeCopy) -> bool {
    let Some(body) = document.body() else {
        return false;
    };
    let mut controller = ThemeController::load(BrowserPreferences::open(), &copy.storage_key);
    let toggle = document.get_element_by_id(&copy.toggle_id);

    if controller.theme().is_dark() {
        warn_on_err(body.class_list().add_1(&copy.dark_class), "adding dark class");
    }
    if let Some(toggle) = &toggle {
        toggle.set_text_content(Some(controller.theme().toggle_label(copy)));
    }

    let Some(toggle) = toggle else {
        return true;
    };
    let copy = copy.clone();
    let button = toggle.clone();
    listen(&toggle, "click", move |_event| {
        let theme = controller.handle(ThemeEvent::Toggle);
        render(&body, &button, theme, &copy);
    });
    true
}

fn render(body: &HtmlElement, toggle: &Element, theme: Theme, copy: &ThemeCopy) {
    let classes = body.class_list();
    let result = if theme.is_dark() { classes.add_1(&copy.dark_class) } else { classes.remove_1(&copy.dark_class) };
    warn_on_err(result, "updating dark class");
    toggle.set_text_content(Some(theme.toggle_label(copy)));
}
