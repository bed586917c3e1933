use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page page--about">
            <h1>"About"</h1>
            <p>
                "CourseHub is a small learning platform built around short, practical courses. "
                "Every course is written by working engineers and designers."
            </p>
        </section>
    }
}
