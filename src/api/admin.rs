//! Admin Console Commands
//!
//! Moderation, stats, PIN administration, topic setting, and the export URL.

use serde::Serialize;

use super::{delete, get_json, post_empty, post_json};
use crate::models::{
    AdminMeResponse, AdminQuestionsResponse, GeneratePinsResponse, MessageResponse, Stats,
    StudentsResponse, TopicResponse,
};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct AdminLoginArgs<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
struct IdsArgs<'a> {
    ids: &'a [i64],
}

#[derive(Serialize)]
struct SetPinsArgs<'a> {
    student_ids: &'a [i64],
    pin: &'a str,
}

#[derive(Serialize)]
struct GeneratePinsArgs<'a> {
    target: &'a str,
}

#[derive(Serialize)]
struct TopicArgs<'a> {
    topic: &'a str,
}

/// Which students a bulk PIN generation covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateTarget {
    /// Regenerate for everyone, invalidating existing PINs
    All,
    /// Only fill in students without a PIN
    Missing,
}

impl GenerateTarget {
    // Wire keys the backend accepts; anything else is a 400
    fn as_str(self) -> &'static str {
        match self {
            GenerateTarget::All => "all",
            GenerateTarget::Missing => "no_pin",
        }
    }
}

// ========================
// Commands
// ========================

pub async fn admin_me() -> Result<AdminMeResponse, String> {
    get_json("/api/admin/me").await
}

pub async fn admin_login(args: &AdminLoginArgs<'_>) -> Result<MessageResponse, String> {
    post_json("/api/admin/login", args).await
}

pub async fn admin_logout() -> Result<MessageResponse, String> {
    post_empty("/api/admin/logout").await
}

pub async fn admin_stats() -> Result<Stats, String> {
    get_json("/api/admin/stats").await
}

pub async fn admin_questions(date: &str) -> Result<AdminQuestionsResponse, String> {
    get_json(&format!("/api/admin/questions?date={}", date)).await
}

pub async fn admin_delete_question(id: i64) -> Result<MessageResponse, String> {
    delete(&format!("/api/admin/questions/{}", id)).await
}

pub async fn admin_restore_question(id: i64) -> Result<MessageResponse, String> {
    post_empty(&format!("/api/admin/questions/{}/restore", id)).await
}

pub async fn bulk_delete_questions(ids: &[i64]) -> Result<MessageResponse, String> {
    post_json("/api/admin/questions/bulk-delete", &IdsArgs { ids }).await
}

pub async fn bulk_restore_questions(ids: &[i64]) -> Result<MessageResponse, String> {
    post_json("/api/admin/questions/bulk-restore", &IdsArgs { ids }).await
}

pub async fn admin_topic() -> Result<TopicResponse, String> {
    get_json("/api/admin/topic").await
}

pub async fn set_topic(topic: &str) -> Result<MessageResponse, String> {
    post_json("/api/admin/topic", &TopicArgs { topic }).await
}

pub async fn admin_students() -> Result<StudentsResponse, String> {
    get_json("/api/admin/students").await
}

pub async fn set_pins(student_ids: &[i64], pin: &str) -> Result<MessageResponse, String> {
    post_json("/api/admin/set-pins", &SetPinsArgs { student_ids, pin }).await
}

pub async fn reset_pin(student_id: i64) -> Result<MessageResponse, String> {
    post_empty(&format!("/api/admin/reset-pin/{}", student_id)).await
}

pub async fn generate_pins(target: GenerateTarget) -> Result<GeneratePinsResponse, String> {
    post_json(
        "/api/admin/generate-pins",
        &GeneratePinsArgs {
            target: target.as_str(),
        },
    )
    .await
}

pub async fn reset_hall() -> Result<MessageResponse, String> {
    post_empty("/api/admin/reset-hall").await
}

/// Export is a direct navigation (the browser downloads the attachment), not
/// a fetch. `kind` is `questions` or `students`.
pub fn export_url(kind: &str, start: &str, end: &str) -> String {
    format!("/api/admin/export/{}?start={}&end={}", kind, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_target_wire_keys_match_backend() {
        assert_eq!(GenerateTarget::All.as_str(), "all");
        assert_eq!(GenerateTarget::Missing.as_str(), "no_pin");
    }
}
