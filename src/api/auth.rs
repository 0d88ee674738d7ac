//! Session Commands
//!
//! Student login/logout and session restore.

use serde::Serialize;

use super::{get_json, post_empty, post_json};
use crate::models::{LoginResponse, MeResponse, MessageResponse};

/// Login request body. The PIN is only attached once the flow has asked for
/// it; the identity-only submission probes which PIN phase comes next.
#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub grade: &'a str,
    pub class_num: &'a str,
    pub student_num: &'a str,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<&'a str>,
}

pub async fn me() -> Result<MeResponse, String> {
    get_json("/api/me").await
}

pub async fn login(args: &LoginArgs<'_>) -> Result<LoginResponse, String> {
    post_json("/api/login", args).await
}

pub async fn logout() -> Result<MessageResponse, String> {
    post_empty("/api/logout").await
}
