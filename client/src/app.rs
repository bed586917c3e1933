//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::config::{CONFIG_ELEMENT_ID, ClientConfig};
use crate::net::hosted::HostedIdentity;
use crate::net::identity::IdentityProvider;
use crate::pages::{
    about::AboutPage, contact::ContactPage, courses::CoursesPage, explore::ExplorePage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::refresh_session;
use crate::util::theme::{self, LocalThemeStore};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is embedded as JSON so the browser picks up runtime endpoints.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let config_json = config.to_embedded_json();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script id=CONFIG_ELEMENT_ID type="application/json" inner_html=config_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the identity provider and shared state contexts, restores the
/// theme, queries the current session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    let identity = HostedIdentity::new(&config.identity_url);
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(identity.clone());
    provide_context(auth);
    provide_context(ui);

    // Effects only run after hydration, so storage and session reads stay in the browser.
    Effect::new(move || {
        let initial = theme::initial_theme(&LocalThemeStore, theme::system_prefers_dark());
        theme::apply(initial);
        ui.update(|u| u.theme = initial);
    });

    Effect::new(move || {
        if !identity.is_ready() {
            log::warn!("auth: identity provider is not configured");
            auth.set(AuthState::resolved(None));
            return;
        }
        let identity = identity.clone();
        leptos::task::spawn_local(async move {
            refresh_session(&identity, auth).await;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/coursehub.css"/>
        <Title text="CourseHub"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("explore") view=ExplorePage/>
                    <Route path=StaticSegment("courses") view=CoursesPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("register"), WildcardSegment("step")) view=RegisterPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=(StaticSegment("login"), WildcardSegment("step")) view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}
