//! Question Feed Commands
//!
//! Date-scoped question list, posting, editing, likes, and the past-dates
//! index.

use serde::Serialize;

use super::{delete, get_json, post_empty, post_json, put_json};
use crate::models::{
    DatesResponse, LikeResponse, MessageResponse, QuestionsResponse, TopicResponse,
};
use crate::store::SortMode;

#[derive(Serialize)]
struct ContentArgs<'a> {
    content: &'a str,
}

pub async fn topic() -> Result<TopicResponse, String> {
    get_json("/api/topic").await
}

pub async fn list_questions(date: &str, sort: SortMode) -> Result<QuestionsResponse, String> {
    let url = format!("/api/questions?date={}&sort={}", date, sort.as_query());
    get_json(&url).await
}

pub async fn create_question(content: &str) -> Result<MessageResponse, String> {
    post_json("/api/questions", &ContentArgs { content }).await
}

pub async fn update_question(id: i64, content: &str) -> Result<MessageResponse, String> {
    put_json(&format!("/api/questions/{}", id), &ContentArgs { content }).await
}

pub async fn delete_question(id: i64) -> Result<MessageResponse, String> {
    delete(&format!("/api/questions/{}", id)).await
}

/// Toggle; the response carries the authoritative new state for the card
pub async fn toggle_like(id: i64) -> Result<LikeResponse, String> {
    post_empty(&format!("/api/questions/{}/like", id)).await
}

pub async fn list_dates() -> Result<DatesResponse, String> {
    get_json("/api/dates").await
}
