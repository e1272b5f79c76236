//! Course Editor Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::EditCourseForm;
use crate::models::Course;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CourseEditorPage() -> impl IntoView {
    let store = use_app_store();
    let (loaded, set_loaded) = signal::<Option<(Course, Vec<String>)>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let Some(course_id) = store.course_id().get() else {
            set_error.set(Some("No course selected".to_string()));
            return;
        };
        spawn_local(async move {
            let course = commands::get_course(&course_id).await;
            let categories = commands::list_categories().await;
            match (course, categories) {
                (Ok(course), Ok(categories)) => {
                    set_error.set(None);
                    set_loaded.set(Some((course, categories)));
                }
                (Err(err), _) | (_, Err(err)) => set_error.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <div class="course-editor">
            <h2>
                {move || loaded.with(|l| l.as_ref().map(|(c, _)| format!("Edit {}", c.title))).unwrap_or_else(|| "Edit course".to_string())}
            </h2>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            {move || match loaded.get() {
                Some((course, categories)) => view! {
                    <EditCourseForm course=course categories=categories />
                }.into_any(),
                None => view! { <p class="loading">"Loading course..."</p> }.into_any(),
            }}
        </div>
    }
}
