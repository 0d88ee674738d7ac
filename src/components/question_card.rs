//! Question Card Component
//!
//! One feed entry: author line, content, like toggle, and (on the viewer's
//! own question) inline edit and delete. The like button applies the single
//! API response directly to the card instead of re-fetching the list; edit
//! and delete trigger a full refresh through `AppContext`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ConfirmButton;
use crate::context::{use_toast, AppContext};
use crate::dates;
use crate::models::Question;

const MAX_LEN: usize = 200;

#[component]
pub fn QuestionCard(q: Question) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toast = use_toast();

    let id = q.id;
    let original = q.content.clone();

    // Server-authoritative like state, seeded from the fetch
    let (liked, set_liked) = signal(q.liked_by_me);
    let (like_count, set_like_count) = signal(q.like_count);

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_like = move |_| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::toggle_like(id).await {
                Ok(data) => {
                    set_liked.set(data.liked);
                    set_like_count.set(data.like_count);
                }
                Err(message) => toast.error(message),
            }
            set_busy.set(false);
        });
    };

    let edit_seed = original.clone();
    let start_edit = move |_| {
        set_draft.set(edit_seed.clone());
        set_editing.set(true);
    };

    // Cancel restores the original text verbatim, no round-trip
    let cancel_edit = move |_| set_editing.set(false);

    let save_edit = move |_| {
        if busy.get_untracked() {
            return;
        }
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() {
            toast.error("질문 내용을 입력해주세요");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::update_question(id, &text).await {
                Ok(data) => {
                    toast.success(data.message.unwrap_or_else(|| "질문이 수정되었어요!".into()));
                    set_editing.set(false);
                    ctx.reload();
                }
                Err(message) => toast.error(message),
            }
            set_busy.set(false);
        });
    };

    let on_delete = move |_| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::delete_question(id).await {
                Ok(data) => {
                    toast.success(data.message.unwrap_or_else(|| "질문이 삭제되었어요.".into()));
                    ctx.reload();
                }
                Err(message) => toast.error(message),
            }
            set_busy.set(false);
        });
    };

    let card_class = if q.is_mine {
        "question-card mine"
    } else {
        "question-card"
    };
    let grade_class = format!("grade-badge grade-{}", q.grade);
    let time_label = dates::format_time(&q.created_at);
    let content_view = original.clone();

    view! {
        <div class=card_class>
            <div class="card-header">
                <div class="author">
                    <span class=grade_class>{q.grade}</span>
                    <span class="author-name">{q.author.clone()}</span>
                    <span class="time">{time_label}</span>
                </div>
                <Show when=move || q.is_mine>
                    <div class="own-controls">
                        <button class="edit-btn" on:click=start_edit.clone()>
                            "수정"
                        </button>
                        <ConfirmButton
                            label="삭제"
                            prompt="삭제할까요?"
                            button_class="delete-btn"
                            on_confirm=on_delete
                        />
                    </div>
                </Show>
            </div>

            <Show
                when=move || editing.get()
                fallback=move || view! { <div class="content">{content_view.clone()}</div> }
            >
                <div class="edit-area">
                    <textarea
                        rows="3"
                        maxlength="200"
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    ></textarea>
                    <div class="edit-footer">
                        <span class="char-count">
                            {move || format!("{}/{}", draft.get().chars().count(), MAX_LEN)}
                        </span>
                        <button class="cancel-btn" on:click=cancel_edit>
                            "취소"
                        </button>
                        <button class="save-btn" on:click=save_edit>
                            "저장"
                        </button>
                    </div>
                </div>
            </Show>

            <button
                class=move || if liked.get() { "like-btn liked" } else { "like-btn" }
                on:click=on_like
            >
                <span class="heart">"♥"</span>
                <span class="like-count">{move || like_count.get()}</span>
            </button>
        </div>
    }
}
