//! UI Components
//!
//! Reusable Leptos components and the pages built from them.

mod client_layout;
mod sidebar;
mod navbar;
mod toast_host;
mod login_form;
mod register_form;
mod dashboard;
mod roadmap_canvas;
mod roadmap_page;
mod node_details_panel;
mod roadmap_error;
mod edit_course_form;
mod course_editor_page;

pub use client_layout::ClientLayout;
pub use sidebar::Sidebar;
pub use navbar::Navbar;
pub use toast_host::ToastHost;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use dashboard::Dashboard;
pub use roadmap_canvas::RoadmapCanvas;
pub use roadmap_page::RoadmapPage;
pub use node_details_panel::NodeDetailsPanel;
pub use roadmap_error::RoadmapError;
pub use edit_course_form::EditCourseForm;
pub use course_editor_page::CourseEditorPage;
