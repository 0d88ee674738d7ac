//! Application State Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store per
//! surface (student feed / admin console), provided via context by the
//! surface's root component — replacing ambient module-level state so
//! independent instances never collide.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::login::is_valid_pin;
use crate::models::{Question, Stats, StudentRecord};

/// Server-recognized feed ordering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Latest,
    Likes,
}

impl SortMode {
    pub fn as_query(self) -> &'static str {
        match self {
            SortMode::Latest => "latest",
            SortMode::Likes => "likes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Latest => "최신순",
            SortMode::Likes => "좋아요순",
        }
    }
}

/// Student surface state: the rendered copy of one day's questions
#[derive(Clone, Debug, Default, Store)]
pub struct FeedState {
    /// Questions for the selected date, replaced wholesale on every fetch
    pub questions: Vec<Question>,
    /// Selected date key (`YYYY-MM-DD`), never past today
    pub current_date: String,
    pub sort: SortMode,
    pub total_count: i64,
    /// Server-reported one-question-per-day flag; hides the post form
    pub already_posted_today: bool,
    /// Daily topic prompt shown above the feed
    pub topic: Option<String>,
}

pub type FeedStore = Store<FeedState>;

pub fn use_feed_store() -> FeedStore {
    expect_context::<FeedStore>()
}

/// Admin surface state
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Full roster cache; filters are applied client-side over this
    pub students: Vec<StudentRecord>,
    /// Grade filter ("" = all)
    pub filter_grade: String,
    /// Case-insensitive name substring filter
    pub filter_name: String,
    pub stats: Option<Stats>,
}

pub type AdminStore = Store<AdminState>;

pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

/// Roster rows passing the current filters
pub fn filter_students(
    students: &[StudentRecord],
    grade: &str,
    name: &str,
) -> Vec<StudentRecord> {
    let name = name.trim().to_lowercase();
    students
        .iter()
        .filter(|s| grade.is_empty() || s.grade.to_string() == grade)
        .filter(|s| name.is_empty() || s.name.to_lowercase().contains(&name))
        .cloned()
        .collect()
}

/// Bulk-action precheck. An empty selection (or a malformed PIN, when the
/// action carries one) returns the toast message instead of ids, so the
/// request is never sent.
pub fn validate_bulk_selection(
    selected: &HashSet<i64>,
    empty_message: &'static str,
    pin: Option<&str>,
) -> Result<Vec<i64>, &'static str> {
    if selected.is_empty() {
        return Err(empty_message);
    }
    if let Some(pin) = pin {
        if !is_valid_pin(pin) {
            return Err("비밀번호는 숫자 4자리로 입력해주세요");
        }
    }
    Ok(selected.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, grade: i32, name: &str) -> StudentRecord {
        StudentRecord {
            id,
            grade,
            class_num: 1,
            student_num: id as i32,
            name: name.into(),
            pin: None,
            has_pin: false,
            pin_viewable: false,
            question_count: 0,
        }
    }

    #[test]
    fn empty_filters_keep_everyone() {
        let all = vec![record(1, 1, "김하늘"), record(2, 2, "이바다")];
        assert_eq!(filter_students(&all, "", "").len(), 2);
    }

    #[test]
    fn grade_filter_matches_exactly() {
        let all = vec![record(1, 1, "김하늘"), record(2, 2, "이바다")];
        let filtered = filter_students(&all, "2", "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn name_filter_is_substring_and_trimmed() {
        let all = vec![record(1, 1, "김하늘"), record(2, 2, "이바다")];
        let filtered = filter_students(&all, "", "  바다 ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "이바다");
    }

    #[test]
    fn filters_combine() {
        let all = vec![record(1, 1, "김하늘"), record(2, 2, "김하늘")];
        let filtered = filter_students(&all, "1", "하늘");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn empty_selection_never_yields_ids() {
        let none = HashSet::new();
        assert_eq!(
            validate_bulk_selection(&none, "삭제할 질문을 선택해주세요", None),
            Err("삭제할 질문을 선택해주세요")
        );
        assert_eq!(
            validate_bulk_selection(&none, "비밀번호를 설정할 학생을 선택해주세요", Some("4821")),
            Err("비밀번호를 설정할 학생을 선택해주세요")
        );
    }

    #[test]
    fn bulk_pin_assignment_requires_four_digits() {
        let one: HashSet<i64> = [7].into_iter().collect();
        assert_eq!(
            validate_bulk_selection(&one, "비밀번호를 설정할 학생을 선택해주세요", Some("12a")),
            Err("비밀번호는 숫자 4자리로 입력해주세요")
        );
        assert_eq!(
            validate_bulk_selection(&one, "비밀번호를 설정할 학생을 선택해주세요", Some("4821")),
            Ok(vec![7])
        );
    }

    #[test]
    fn selection_without_pin_passes_through() {
        let two: HashSet<i64> = [1, 2].into_iter().collect();
        let mut ids = validate_bulk_selection(&two, "복원할 질문을 선택해주세요", None).unwrap();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn sort_mode_query_keys() {
        assert_eq!(SortMode::Latest.as_query(), "latest");
        assert_eq!(SortMode::Likes.as_query(), "likes");
    }
}
