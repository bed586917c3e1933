use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page page--contact">
            <h1>"Contact"</h1>
            <p>
                "Questions about a course or your account? Write to "
                <a href="mailto:support@coursehub.example">"support@coursehub.example"</a>
                "."
            </p>
        </section>
    }
}
