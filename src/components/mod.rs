//! UI Components
//!
//! Leptos components for the student and admin surfaces.

mod admin_login;
mod admin_question_list;
mod confirm_button;
mod date_nav;
mod export_panel;
mod login_form;
mod question_card;
mod question_form;
mod question_list;
mod stats_panel;
mod student_manager;
mod toast;
mod topic_banner;
mod topic_editor;

pub use admin_login::AdminLogin;
pub use admin_question_list::AdminQuestionList;
pub use confirm_button::ConfirmButton;
pub use date_nav::DateNav;
pub use export_panel::ExportPanel;
pub use login_form::LoginForm;
pub use question_card::QuestionCard;
pub use question_form::QuestionForm;
pub use question_list::QuestionList;
pub use stats_panel::StatsPanel;
pub use student_manager::StudentManager;
pub use toast::ToastLayer;
pub use topic_banner::TopicBanner;
pub use topic_editor::TopicEditor;

/// Native blocking confirm dialog, used by the bulk/destructive admin actions
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
