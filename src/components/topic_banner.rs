//! Topic Banner Component
//!
//! Shows the daily topic prompt above the feed when one is set. A load
//! failure only logs; the banner simply stays hidden.

use leptos::prelude::*;

use crate::store::{use_feed_store, FeedStateStoreFields};

#[component]
pub fn TopicBanner() -> impl IntoView {
    let store = use_feed_store();

    view! {
        {move || {
            store.topic().get().map(|topic| {
                view! {
                    <div class="topic-banner">
                        <span class="topic-label">"오늘의 주제"</span>
                        <span class="topic-name">{topic}</span>
                    </div>
                }
            })
        }}
    }
}
