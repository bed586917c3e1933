//! Guarded course listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only rendered for signed-in users. The listing is fetched once per mount
//! from the course API; failures are shown inline as `Error: <message>`.

use leptos::prelude::*;

use crate::components::protected_route::{LoadingPanel, ProtectedRoute};
use crate::net::api::fetch_courses;
use crate::net::types::Course;

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <CourseListing/>
        </ProtectedRoute>
    }
}

#[component]
fn CourseListing() -> impl IntoView {
    let courses = LocalResource::new(fetch_courses);

    view! {
        <section class="page page--courses">
            <h1>"Courses"</h1>
            <Suspense fallback=|| view! { <LoadingPanel/> }>
                {move || Suspend::new(async move {
                    match courses.await {
                        Ok(list) if list.data.is_empty() => {
                            view! { <p>"No courses are available yet."</p> }.into_any()
                        }
                        Ok(list) => view! { <CourseGrid courses=list.data/> }.into_any(),
                        Err(e) => {
                            log::warn!("courses: fetch failed: {e}");
                            view! { <p class="page__error">{format!("Error: {e}")}</p> }.into_any()
                        }
                    }
                })}
            </Suspense>
        </section>
    }
}

#[component]
fn CourseGrid(courses: Vec<Course>) -> impl IntoView {
    view! {
        <ul class="course-grid">
            {courses
                .into_iter()
                .map(|course| {
                    view! {
                        <li class="course-card" data-course-id=course.id.to_string()>
                            <h2>{course.name}</h2>
                            <p>{course.description}</p>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
