//! Frontend Models
//!
//! Data structures matching the backend JSON API.

use serde::{Deserialize, Serialize};

/// Logged-in student identity (matches backend session record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub grade: i32,
    pub class_num: i32,
    pub student_num: i32,
    pub name: String,
}

/// Question as seen by students for one date
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub created_date: String,
    pub author: String,
    pub grade: i32,
    pub class_num: i32,
    pub like_count: i64,
    pub liked_by_me: bool,
    pub is_mine: bool,
}

/// Question row on the admin moderation list (includes soft-deleted rows)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminQuestion {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub author: String,
    pub like_count: i64,
    pub is_deleted: bool,
}

/// Student roster row on the admin PIN panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub grade: i32,
    pub class_num: i32,
    pub student_num: i32,
    pub name: String,
    pub pin: Option<String>,
    pub has_pin: bool,
    pub pin_viewable: bool,
    pub question_count: i64,
}

/// One entry of the past-dates panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateEntry {
    pub date: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeStat {
    pub grade: i32,
    pub student_count: i64,
    pub question_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStat {
    pub date: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopQuestion {
    pub content: String,
    pub author: String,
    pub like_count: i64,
}

/// Admin stats snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_students: i64,
    pub total_questions: i64,
    pub total_likes: i64,
    pub today_questions: i64,
    pub daily_stats: Vec<DailyStat>,
    pub grade_stats: Vec<GradeStat>,
    pub top_questions: Vec<TopQuestion>,
}

// ========================
// Response Envelopes
// ========================

/// `POST /api/login` — a 200 either advances the PIN flow or authenticates
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub need_pin_setup: bool,
    #[serde(default)]
    pub need_pin: bool,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub student: Option<Student>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeResponse {
    pub logged_in: bool,
    #[serde(default)]
    pub student: Option<Student>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminMeResponse {
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
    pub already_posted_today: bool,
    pub date: String,
    pub total_count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminQuestionsResponse {
    pub questions: Vec<AdminQuestion>,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatesResponse {
    pub dates: Vec<DateEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentsResponse {
    pub students: Vec<StudentRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopicResponse {
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LikeResponse {
    pub success: bool,
    pub liked: bool,
    pub like_count: i64,
}

/// Generic `{success, message}` reply used by most mutations
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratePinsResponse {
    pub success: bool,
    pub count: i64,
    #[serde(default)]
    pub message: Option<String>,
}
