//! UI chrome state: theme and the mobile navigation menu.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub menu_open: bool,
}
