//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::User;

/// Top-level views. Stands in for URL routing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Login,
    Register,
    Dashboard,
    Roadmap,
    CourseEditor,
}

impl Page {
    /// Pages that need a signed-in user
    pub fn is_private(&self) -> bool {
        !matches!(self, Page::Login | Page::Register)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, if any
    pub user: Option<User>,
    pub page: Page,
    /// Course the roadmap and editor pages work on
    pub course_id: Option<String>,
    /// Currently shown notification
    pub toast: Option<Toast>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch page; private pages fall back to login while signed out
pub fn store_navigate(store: &AppStore, page: Page) {
    let target = if page.is_private() && store.user().read_untracked().is_none() {
        Page::Login
    } else {
        page
    };
    tracing::debug!(?target, "navigate");
    store.page().set(target);
}

/// Open a course-scoped page
pub fn store_open_course(store: &AppStore, course_id: String, page: Page) {
    store.course_id().set(Some(course_id));
    store_navigate(store, page);
}

pub fn store_sign_in(store: &AppStore, user: User) {
    store.user().set(Some(user));
    store_navigate(store, Page::Dashboard);
}

pub fn store_sign_out(store: &AppStore) {
    store.user().set(None);
    store.course_id().set(None);
    store.page().set(Page::Login);
}

pub fn store_show_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) {
    store.toast().set(Some(Toast {
        kind,
        message: message.into(),
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_pages() {
        assert!(!Page::Login.is_private());
        assert!(!Page::Register.is_private());
        assert!(Page::Dashboard.is_private());
        assert!(Page::Roadmap.is_private());
        assert!(Page::CourseEditor.is_private());
    }
}
