//! Question Form Component
//!
//! One-question-per-day post form with a character counter (soft warning at
//! 180 of 200; the hard limit is server-side). Hidden on past dates; replaced
//! by a notice once today's question is posted.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_toast, AppContext};
use crate::dates;
use crate::store::{use_feed_store, FeedStateStoreFields};

const MAX_LEN: usize = 200;
const WARN_LEN: usize = 180;

#[component]
pub fn QuestionForm() -> impl IntoView {
    let store = use_feed_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toast = use_toast();

    let (content, set_content) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let viewing_today = move || dates::is_today(&store.current_date().get(), &dates::today_str());
    let char_count = move || content.get().chars().count();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let text = content.get_untracked().trim().to_string();
        if text.is_empty() {
            toast.error("질문 내용을 입력해주세요");
            return;
        }

        set_busy.set(true);
        spawn_local(async move {
            match api::create_question(&text).await {
                Ok(data) => {
                    toast.success(data.message.unwrap_or_else(|| "질문이 등록되었어요!".into()));
                    set_content.set(String::new());
                    ctx.reload();
                }
                Err(message) => toast.error(message),
            }
            set_busy.set(false);
        });
    };

    view! {
        <Show when=viewing_today>
            <Show
                when=move || !store.already_posted_today().get()
                fallback=|| {
                    view! {
                        <div class="already-posted">
                            "오늘의 질문을 이미 올렸어요! 내일 또 만나요"
                        </div>
                    }
                }
            >
                <form class="question-form" on:submit=on_submit>
                    <textarea
                        placeholder="오늘의 질문을 적어보세요"
                        maxlength="200"
                        rows="3"
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                    ></textarea>
                    <div class="form-footer">
                        <span class="char-count" class:warn=move || { char_count() >= WARN_LEN }>
                            {move || format!("{}/{}", char_count(), MAX_LEN)}
                        </span>
                        <button type="submit" disabled=move || busy.get()>
                            "질문 올리기"
                        </button>
                    </div>
                </form>
            </Show>
        </Show>
    }
}
