//! Topic Editor Component
//!
//! Admin control for the daily topic prompt.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_toast;

#[component]
pub fn TopicEditor() -> impl IntoView {
    let toast = use_toast();

    let (topic, set_topic) = signal(String::new());
    let (busy, set_busy) = signal(false);

    // Seed the input with the current topic
    Effect::new(move |_| {
        spawn_local(async move {
            match api::admin_topic().await {
                Ok(data) => set_topic.set(data.topic.unwrap_or_default()),
                Err(message) => {
                    web_sys::console::error_1(&format!("주제 로드 실패: {}", message).into());
                }
            }
        });
    });

    let on_save = move |_| {
        if busy.get_untracked() {
            return;
        }
        let value = topic.get_untracked().trim().to_string();
        if value.is_empty() {
            toast.error("주제를 입력해주세요");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::set_topic(&value).await {
                Ok(data) => {
                    toast.success(data.message.unwrap_or_else(|| "설정되었습니다.".into()));
                }
                Err(message) => toast.error(message),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="topic-editor">
            <h3>"오늘의 주제"</h3>
            <div class="topic-row">
                <input
                    type="text"
                    maxlength="50"
                    placeholder="주제를 입력하세요"
                    prop:value=move || topic.get()
                    on:input=move |ev| set_topic.set(event_target_value(&ev))
                />
                <button on:click=on_save disabled=move || busy.get()>
                    "저장"
                </button>
            </div>
        </section>
    }
}
