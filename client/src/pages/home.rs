//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home">
            <div class="hero">
                <h1>"Learn at your own pace"</h1>
                <p>
                    "CourseHub brings together hands-on courses in programming, data, and design. "
                    "Create a free account to unlock the full course catalog."
                </p>
                <div class="hero__actions">
                    <a href="/explore" class="btn btn--primary">"Explore topics"</a>
                    <a href="/register" class="btn">"Get started"</a>
                </div>
            </div>
        </section>
    }
}
