//! Export Panel Component
//!
//! Date-ranged CSV export. The download is a direct navigation (the server
//! answers with an attachment), not a fetch.

use leptos::prelude::*;

use crate::api;
use crate::context::use_toast;
use crate::dates;

/// Client-side range check before navigating
fn validate_range(start: &str, end: &str) -> Result<(), &'static str> {
    if start.is_empty() || end.is_empty() {
        return Err("시작일과 종료일을 선택해주세요");
    }
    if start > end {
        return Err("시작일이 종료일보다 이후입니다");
    }
    Ok(())
}

#[component]
pub fn ExportPanel() -> impl IntoView {
    let toast = use_toast();

    let today = dates::today_str();
    let (start, set_start) = signal(dates::thirty_days_before(&today));
    let (end, set_end) = signal(today);

    let download = move |kind: &'static str| {
        let start = start.get_untracked();
        let end = end.get_untracked();
        if let Err(message) = validate_range(&start, &end) {
            toast.error(message);
            return;
        }
        let url = api::export_url(kind, &start, &end);
        if let Some(window) = web_sys::window() {
            if window.location().set_href(&url).is_ok() {
                toast.success("다운로드를 시작합니다!");
            }
        }
    };

    view! {
        <section class="export-panel">
            <h3>"데이터 내보내기"</h3>
            <div class="export-row">
                <input
                    type="date"
                    prop:value=move || start.get()
                    on:change=move |ev| set_start.set(event_target_value(&ev))
                />
                <span>"~"</span>
                <input
                    type="date"
                    prop:value=move || end.get()
                    on:change=move |ev| set_end.set(event_target_value(&ev))
                />
                <button on:click=move |_| download("questions")>"질문 내보내기"</button>
                <button on:click=move |_| download("students")>"학생별 내보내기"</button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_requires_both_ends() {
        assert!(validate_range("", "2026-08-30").is_err());
        assert!(validate_range("2026-08-01", "").is_err());
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(
            validate_range("2026-08-30", "2026-08-01"),
            Err("시작일이 종료일보다 이후입니다")
        );
    }

    #[test]
    fn valid_range_passes() {
        assert!(validate_range("2026-08-01", "2026-08-30").is_ok());
        assert!(validate_range("2026-08-30", "2026-08-30").is_ok());
    }
}
