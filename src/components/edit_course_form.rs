//! Edit Course Form
//!
//! Pre-filled from the loaded course. Validation happens in
//! `CourseUpdate::from_fields` before anything is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::course::{CourseFormFields, CourseUpdate};
use crate::models::{Course, CourseLevel};
use crate::store::{store_show_toast, use_app_store, ToastKind};

#[component]
pub fn EditCourseForm(
    course: Course,
    categories: Vec<String>,
    /// Called with the course as stored after a successful save
    #[prop(optional, into)]
    on_saved: Option<Callback<Course>>,
) -> impl IntoView {
    let store = use_app_store();
    let course_id = StoredValue::new(course.id.clone());
    let fields = RwSignal::new(CourseFormFields::from_course(&course));
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let update = match fields.with_untracked(CourseUpdate::from_fields) {
            Ok(update) => update,
            Err(err) => {
                store_show_toast(&store, ToastKind::Error, err.to_string());
                return;
            }
        };
        let id = course_id.get_value();
        set_saving.set(true);
        spawn_local(async move {
            match commands::update_course(&id, &update).await {
                Ok(saved) => {
                    tracing::info!(course_id = %id, "course updated");
                    store_show_toast(&store, ToastKind::Success, "Course updated successfully");
                    if let Some(on_saved) = on_saved {
                        on_saved.run(saved);
                    }
                }
                Err(err) => {
                    tracing::warn!(course_id = %id, %err, "course update failed");
                    store_show_toast(&store, ToastKind::Error, "Failed to update course");
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="course-form" on:submit=submit>
            <label for="course-title">"Title"</label>
            <input
                id="course-title"
                type="text"
                prop:value=move || fields.with(|f| f.title.clone())
                on:input=move |ev| fields.update(|f| f.title = event_target_value(&ev))
            />

            <label for="course-category">"Category"</label>
            <select
                id="course-category"
                prop:value=move || fields.with(|f| f.category.clone())
                on:change=move |ev| fields.update(|f| f.category = event_target_value(&ev))
            >
                {categories.into_iter().map(|name| {
                    let value = name.to_lowercase();
                    view! { <option value=value>{name}</option> }
                }).collect_view()}
            </select>

            <label for="course-price">"Price"</label>
            <input
                id="course-price"
                type="number"
                min="0"
                step="0.01"
                prop:value=move || fields.with(|f| f.price.clone())
                on:input=move |ev| fields.update(|f| f.price = event_target_value(&ev))
            />

            <label for="course-level">"Level"</label>
            <select
                id="course-level"
                prop:value=move || fields.with(|f| f.level.clone())
                on:change=move |ev| fields.update(|f| f.level = event_target_value(&ev))
            >
                {CourseLevel::ALL.iter().map(|level| view! {
                    <option value=level.as_str()>{level.label()}</option>
                }).collect_view()}
            </select>

            <label for="course-description">"Description"</label>
            <textarea
                id="course-description"
                rows="5"
                prop:value=move || fields.with(|f| f.description.clone())
                on:input=move |ev| fields.update(|f| f.description = event_target_value(&ev))
            />

            <label for="course-prerequisites">"Prerequisites (one per line)"</label>
            <textarea
                id="course-prerequisites"
                rows="4"
                prop:value=move || fields.with(|f| f.prerequisites.clone())
                on:input=move |ev| fields.update(|f| f.prerequisites = event_target_value(&ev))
            />

            <label for="course-outcomes">"Learning outcomes (one per line)"</label>
            <textarea
                id="course-outcomes"
                rows="4"
                prop:value=move || fields.with(|f| f.outcomes.clone())
                on:input=move |ev| fields.update(|f| f.outcomes = event_target_value(&ev))
            />

            <button type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save changes" }}
            </button>
        </form>
    }
}
