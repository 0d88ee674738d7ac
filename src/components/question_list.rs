//! Question List Component
//!
//! Sort buttons, count badge, empty state, and the card list. The list is a
//! full replacement per fetch; rows are keyed on the whole question so any
//! server-side change re-renders the card.

use leptos::prelude::*;

use crate::components::QuestionCard;
use crate::store::{use_feed_store, FeedStateStoreFields, SortMode};

#[component]
pub fn QuestionList() -> impl IntoView {
    let store = use_feed_store();

    let sort_button = move |mode: SortMode| {
        let class = move || {
            if store.sort().get() == mode {
                "sort-btn active"
            } else {
                "sort-btn"
            }
        };
        view! {
            <button class=class on:click=move |_| store.sort().set(mode)>
                {mode.label()}
            </button>
        }
    };

    view! {
        <div class="feed-header">
            <span class="question-count">{move || format!("{}개", store.total_count().get())}</span>
            <div class="sort-buttons">
                {sort_button(SortMode::Latest)}
                {sort_button(SortMode::Likes)}
            </div>
        </div>

        <Show when=move || store.questions().get().is_empty()>
            <div class="empty-state">"아직 질문이 없어요. 첫 번째 질문을 올려보세요!"</div>
        </Show>

        <div class="questions-list">
            <For
                each=move || store.questions().get()
                key=|q| q.clone()
                children=move |q| view! { <QuestionCard q=q /> }
            />
        </div>
    }
}
