use super::*;

const KEY: &str = "theme";

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn from_stored_recognizes_dark_only() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggle_label_offers_the_other_mode() {
    let copy = ThemeCopy::default();
    assert_eq!(Theme::Dark.toggle_label(&copy), "Light Mode 💡");
    assert_eq!(Theme::Light.toggle_label(&copy), "Dark Mode 🌙");
}

#[test]
fn stored_form_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn load_defaults_to_light_when_unset() {
    let controller = ThemeController::load(MemoryPreferences::new(), KEY);
    assert_eq!(controller.theme(), Theme::Light);
}

#[test]
fn load_reads_stored_dark() {
    let controller = ThemeController::load(MemoryPreferences::new().with(KEY, "dark"), KEY);
    assert_eq!(controller.theme(), Theme::Dark);
}

#[test]
fn load_does_not_write_to_store() {
    let controller = ThemeController::load(MemoryPreferences::new(), KEY);
    assert_eq!(controller.store().get(KEY), None);
}

#[test]
fn repeated_loads_are_idempotent() {
    let store = MemoryPreferences::new().with(KEY, "dark");
    let first = ThemeController::load(store.clone(), KEY).theme();
    let second = ThemeController::load(store, KEY).theme();
    assert_eq!(first, second);
}

#[test]
fn toggle_persists_new_theme() {
    let mut controller = ThemeController::load(MemoryPreferences::new(), KEY);
    assert_eq!(controller.handle(ThemeEvent::Toggle), Theme::Dark);
    assert_eq!(controller.store().get(KEY).as_deref(), Some("dark"));
}

#[test]
fn two_toggles_restore_mode_and_label() {
    let copy = ThemeCopy::default();
    let mut controller = ThemeController::load(MemoryPreferences::new(), KEY);
    let original_label = controller.theme().toggle_label(&copy).to_owned();

    controller.handle(ThemeEvent::Toggle);
    assert_eq!(controller.theme().toggle_label(&copy), "Light Mode 💡");
    controller.handle(ThemeEvent::Toggle);

    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.theme().toggle_label(&copy), original_label);
}

#[test]
fn persisted_value_tracks_mode_after_every_toggle() {
    let mut controller = ThemeController::load(MemoryPreferences::new().with(KEY, "dark"), KEY);
    for _ in 0..5 {
        let theme = controller.handle(ThemeEvent::Toggle);
        assert_eq!(controller.store().get(KEY).as_deref(), Some(theme.as_str()));
    }
}
