//! Dashboard Component
//!
//! Course list with shortcuts into the roadmap and the course editor.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::Course;
use crate::store::{store_open_course, use_app_store, AppStateStoreFields, Page};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Load courses on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_courses().await {
                Ok(loaded) => {
                    tracing::debug!(count = loaded.len(), "courses loaded");
                    set_courses.set(loaded);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <div class="dashboard">
            <h2>
                {move || store.user().get().map(|u| format!("Welcome back, {}", u.first_name)).unwrap_or_default()}
            </h2>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <ul class="course-list">
                <For
                    each=move || courses.get()
                    key=|course| course.id.clone()
                    children=move |course| {
                        let roadmap_id = course.id.clone();
                        let edit_id = course.id.clone();
                        view! {
                            <li class="course-card">
                                <div class="course-title">{course.title.clone()}</div>
                                <div class="course-meta">
                                    {format!("{} · {} · ${:.2}", course.category, course.level.label(), course.price)}
                                </div>
                                <div class="course-actions">
                                    <button on:click=move |_| store_open_course(&store, roadmap_id.clone(), Page::Roadmap)>
                                        "Roadmap"
                                    </button>
                                    <button on:click=move |_| store_open_course(&store, edit_id.clone(), Page::CourseEditor)>
                                        "Edit"
                                    </button>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
            <p class="item-count">{move || format!("{} courses", courses.get().len())}</p>
        </div>
    }
}
