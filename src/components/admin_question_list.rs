//! Admin Question List Component
//!
//! Date-scoped moderation list with per-row delete/restore and checkbox
//! selection for bulk actions. The selected count always derives from the
//! live selection set; bulk actions refresh both the list and the stats
//! panel so derived counts stay consistent.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::confirm;
use crate::context::{use_toast, AdminContext};
use crate::dates;
use crate::models::AdminQuestion;
use crate::store::validate_bulk_selection;

#[component]
pub fn AdminQuestionList() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");
    let toast = use_toast();

    let (date, set_date) = signal(dates::today_str());
    let (questions, set_questions) = signal(Vec::<AdminQuestion>::new());
    let selected = RwSignal::new(HashSet::<i64>::new());
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.questions_trigger.get();
        let target = date.get();
        spawn_local(async move {
            match api::admin_questions(&target).await {
                Ok(data) => {
                    set_questions.set(data.questions);
                    // Stale ids must not survive a refetch
                    selected.set(HashSet::new());
                }
                Err(message) => toast.error(message),
            }
        });
    });

    let all_selected = move || {
        let qs = questions.get();
        !qs.is_empty() && qs.iter().all(|q| selected.with(|s| s.contains(&q.id)))
    };

    let toggle_all = move |ev: web_sys::Event| {
        if event_target_checked(&ev) {
            selected.set(questions.get_untracked().iter().map(|q| q.id).collect());
        } else {
            selected.set(HashSet::new());
        }
    };

    let run_single = move |id: i64, restore: bool| {
        if busy.get_untracked() {
            return;
        }
        if !restore && !confirm("이 질문을 삭제할까요?") {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let result = if restore {
                api::admin_restore_question(id).await
            } else {
                api::admin_delete_question(id).await
            };
            match result {
                Ok(_) => {
                    toast.success(if restore {
                        "질문이 복원되었습니다"
                    } else {
                        "질문이 삭제되었습니다"
                    });
                    ctx.reload_questions();
                    ctx.reload_stats();
                }
                Err(message) => toast.error(message),
            }
            set_busy.set(false);
        });
    };

    let run_bulk = move |restore: bool| {
        if busy.get_untracked() {
            return;
        }
        let empty_message = if restore {
            "복원할 질문을 선택해주세요"
        } else {
            "삭제할 질문을 선택해주세요"
        };
        let ids = match validate_bulk_selection(&selected.get_untracked(), empty_message, None) {
            Ok(ids) => ids,
            Err(message) => {
                toast.error(message);
                return;
            }
        };
        let verb = if restore { "복원" } else { "삭제" };
        if !confirm(&format!("선택한 {}개의 질문을 {}할까요?", ids.len(), verb)) {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let result = if restore {
                api::bulk_restore_questions(&ids).await
            } else {
                api::bulk_delete_questions(&ids).await
            };
            match result {
                Ok(data) => {
                    toast.success(data.message.unwrap_or_else(|| "처리되었습니다.".into()));
                    ctx.reload_questions();
                    ctx.reload_stats();
                }
                Err(message) => toast.error(message),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="admin-questions">
            <div class="panel-header">
                <h3>"질문 관리"</h3>
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:change=move |ev| set_date.set(event_target_value(&ev))
                />
            </div>

            <Show
                when=move || !questions.get().is_empty()
                fallback=|| view! { <p class="empty">"이 날짜에 질문이 없어요"</p> }
            >
                <div class="bulk-bar">
                    <label class="select-all">
                        <input
                            type="checkbox"
                            prop:checked=all_selected
                            on:change=toggle_all
                        />
                        "전체 선택"
                    </label>
                    <span class="selected-count">
                        {move || format!("{}개 선택", selected.with(|s| s.len()))}
                    </span>
                    <div class="bulk-actions">
                        <button class="bulk-delete" on:click=move |_| run_bulk(false)>
                            "선택 삭제"
                        </button>
                        <button class="bulk-restore" on:click=move |_| run_bulk(true)>
                            "선택 복원"
                        </button>
                    </div>
                </div>

                <For
                    each=move || questions.get()
                    key=|q| (q.id, q.is_deleted, q.like_count)
                    children=move |q| {
                        let id = q.id;
                        let row_class = if q.is_deleted {
                            "admin-question-row deleted"
                        } else {
                            "admin-question-row"
                        };
                        view! {
                            <div class=row_class>
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected.with(|s| s.contains(&id))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        selected.update(|s| {
                                            if checked {
                                                s.insert(id);
                                            } else {
                                                s.remove(&id);
                                            }
                                        });
                                    }
                                />
                                <div class="row-body">
                                    <div class="row-content">{q.content.clone()}</div>
                                    <div class="row-meta">
                                        {q.author.clone()} " · ♥ " {q.like_count}
                                        {q.is_deleted.then(|| view! { <span class="deleted-tag">" · 삭제됨"</span> })}
                                    </div>
                                </div>
                                {if q.is_deleted {
                                    view! {
                                        <button class="restore-btn" on:click=move |_| run_single(id, true)>
                                            "복원"
                                        </button>
                                    }.into_any()
                                } else {
                                    view! {
                                        <button class="delete-btn" on:click=move |_| run_single(id, false)>
                                            "삭제"
                                        </button>
                                    }.into_any()
                                }}
                            </div>
                        }
                    }
                />
            </Show>
        </section>
    }
}
