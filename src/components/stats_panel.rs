//! Stats Panel Component
//!
//! Headline counts, per-grade participation bars, the top-liked questions
//! list, and the hall-of-fame reset. Bar widths are proportional to the
//! largest per-grade question count in the snapshot, with a 5% floor so a
//! small count still renders a visible bar.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::confirm;
use crate::context::{use_toast, AdminContext};
use crate::models::Stats;
use crate::store::{use_admin_store, AdminStateStoreFields};

const GRADE_COLORS: [&str; 6] = [
    "#FF9B9B", "#FFE08A", "#7FE3FA", "#FFBEF7", "#89BFFF", "#C0BBFE",
];

/// Bar width as a percentage of the panel, floored at 5%
fn bar_width_pct(count: i64, max_count: i64) -> f64 {
    let max = max_count.max(1) as f64;
    ((count as f64 / max) * 100.0).max(5.0)
}

fn grade_color(grade: i32) -> &'static str {
    GRADE_COLORS
        .get(grade.saturating_sub(1).max(0) as usize)
        .copied()
        .unwrap_or(GRADE_COLORS[0])
}

fn grade_bars(stats: &Stats) -> AnyView {
    if stats.grade_stats.is_empty() {
        return view! { <p class="empty">"아직 데이터가 없어요"</p> }.into_any();
    }
    let max_count = stats
        .grade_stats
        .iter()
        .map(|g| g.question_count)
        .max()
        .unwrap_or(0);
    stats
        .grade_stats
        .iter()
        .map(|g| {
            let style = format!(
                "width: {:.1}%; background: {}",
                bar_width_pct(g.question_count, max_count),
                grade_color(g.grade),
            );
            view! {
                <div class="grade-row">
                    <span class="grade-label">{format!("{}학년", g.grade)}</span>
                    <div class="grade-track">
                        <div class="grade-bar" style=style>{format!("{}개", g.question_count)}</div>
                    </div>
                    <span class="grade-students">{format!("{}명", g.student_count)}</span>
                </div>
            }
        })
        .collect_view()
        .into_any()
}

fn top_question_rows(stats: &Stats) -> AnyView {
    if stats.top_questions.is_empty() {
        return view! { <p class="empty">"아직 좋아요가 없어요"</p> }.into_any();
    }
    stats
        .top_questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            view! {
                <div class="top-question">
                    <span class="rank">{i + 1}</span>
                    <div class="top-body">
                        <div class="top-content">{q.content.clone()}</div>
                        <div class="top-author">{q.author.clone()}</div>
                    </div>
                    <span class="top-likes">"♥ " {q.like_count}</span>
                </div>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn StatsPanel() -> impl IntoView {
    let store = use_admin_store();
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");
    let toast = use_toast();

    Effect::new(move |_| {
        let _ = ctx.stats_trigger.get();
        spawn_local(async move {
            match api::admin_stats().await {
                Ok(stats) => store.stats().set(Some(stats)),
                Err(message) => toast.error(message),
            }
        });
    });

    let (busy, set_busy) = signal(false);
    let on_reset_hall = move |_| {
        if busy.get_untracked() {
            return;
        }
        if !confirm(
            "명예의 전당 순위를 초기화할까요?\n오늘부터 새로 집계가 시작됩니다.\n(기존 질문과 좋아요는 유지됩니다.)",
        ) {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::reset_hall().await {
                Ok(data) => {
                    toast.success(data.message.unwrap_or_else(|| "초기화되었습니다.".into()));
                    ctx.reload_stats();
                }
                Err(message) => toast.error(message),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="stats-panel">
            {move || {
                store
                    .stats()
                    .get()
                    .map(|stats| {
                        view! {
                            <div class="stat-cards">
                                <div class="stat-card">
                                    <span class="stat-label">"전체 학생"</span>
                                    <span class="stat-value">{stats.total_students}</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-label">"전체 질문"</span>
                                    <span class="stat-value">{stats.total_questions}</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-label">"오늘 질문"</span>
                                    <span class="stat-value">{stats.today_questions}</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-label">"전체 좋아요"</span>
                                    <span class="stat-value">{stats.total_likes}</span>
                                </div>
                            </div>
                            <div class="grade-stats">
                                <h3>"학년별 참여"</h3>
                                {grade_bars(&stats)}
                            </div>
                            <div class="top-questions">
                                <h3>"명예의 전당"</h3>
                                {top_question_rows(&stats)}
                                <button class="reset-hall-btn" on:click=on_reset_hall>
                                    "순위 초기화"
                                </button>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_is_proportional_to_max() {
        assert_eq!(bar_width_pct(10, 10), 100.0);
        assert_eq!(bar_width_pct(5, 10), 50.0);
    }

    #[test]
    fn bar_width_has_a_legibility_floor() {
        assert_eq!(bar_width_pct(0, 10), 5.0);
        assert_eq!(bar_width_pct(1, 100), 5.0);
    }

    #[test]
    fn empty_snapshot_does_not_divide_by_zero() {
        assert_eq!(bar_width_pct(0, 0), 5.0);
    }

    #[test]
    fn grade_color_stays_in_palette() {
        assert_eq!(grade_color(1), "#FF9B9B");
        assert_eq!(grade_color(6), "#C0BBFE");
        assert_eq!(grade_color(0), "#FF9B9B");
        assert_eq!(grade_color(9), "#FF9B9B");
    }
}
