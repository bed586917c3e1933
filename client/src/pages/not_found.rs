//! Fallback for unmatched routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page page--not-found">
            <h1>"404"</h1>
            <p>"Sorry, the page you're looking for doesn't exist or has been moved."</p>
            <a href="/" class="btn btn--primary">"Go Back Home"</a>
        </section>
    }
}
