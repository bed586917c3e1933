//! Site header with navigation links, theme toggle, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above the routes on every page. Link visibility follows the shared
//! `AuthState`; the theme and menu flags live in `UiState`.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::theme::{self, LocalThemeStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Only listed while a session exists.
    pub requires_session: bool,
}

pub const NAV_LINKS: [NavLink; 7] = [
    NavLink { label: "Home", href: "/", requires_session: false },
    NavLink { label: "Explore", href: "/explore", requires_session: false },
    NavLink { label: "Courses", href: "/courses", requires_session: true },
    NavLink { label: "About", href: "/about", requires_session: false },
    NavLink { label: "Contact", href: "/contact", requires_session: false },
    NavLink { label: "Register", href: "/register", requires_session: false },
    NavLink { label: "Login", href: "/login", requires_session: false },
];

/// Links to list for the current session state, in display order.
pub fn visible_links(signed_in: bool) -> Vec<NavLink> {
    NAV_LINKS
        .into_iter()
        .filter(|link| signed_in || !link.requires_session)
        .collect()
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let close_menu = move |_| ui.update(|u| u.menu_open = false);
    let on_toggle_menu = move |_| ui.update(|u| u.menu_open = !u.menu_open);
    let on_toggle_theme = move |_| {
        let next = theme::toggle(ui.get_untracked().theme, &LocalThemeStore);
        ui.update(|u| u.theme = next);
    };

    let nav_class = move || {
        if ui.get().menu_open {
            "site-header__nav site-header__nav--open"
        } else {
            "site-header__nav"
        }
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand" on:click=close_menu>
                "CourseHub"
            </a>
            <button
                class="btn site-header__menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || ui.get().menu_open.to_string()
                on:click=on_toggle_menu
            >
                "☰"
            </button>
            <nav class=nav_class>
                {move || {
                    visible_links(auth.get().signed_in())
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="site-header__link" on:click=close_menu>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>
            <button
                class="btn site-header__theme-toggle"
                on:click=on_toggle_theme
                title="Toggle dark mode"
            >
                {move || if ui.get().theme.is_dark() { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
