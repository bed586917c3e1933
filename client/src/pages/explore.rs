//! Public topic overview.

use leptos::prelude::*;

const TOPICS: [(&str, &str); 4] = [
    ("Programming", "From first steps to systems languages and concurrency."),
    ("Web development", "Browsers, HTTP, and building full-stack applications."),
    ("Data", "Databases, analysis, and working with real datasets."),
    ("Design", "Interface design, accessibility, and visual fundamentals."),
];

#[component]
pub fn ExplorePage() -> impl IntoView {
    view! {
        <section class="page page--explore">
            <h1>"Explore"</h1>
            <p>"Browse the topics we teach. Sign in to see every course."</p>
            <ul class="topic-grid">
                {TOPICS
                    .into_iter()
                    .map(|(title, summary)| {
                        view! {
                            <li class="topic-card">
                                <h2>{title}</h2>
                                <p>{summary}</p>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
