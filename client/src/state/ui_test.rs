use super::*;

#[test]
fn ui_state_defaults_to_light_theme_and_closed_menu() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.menu_open);
}
