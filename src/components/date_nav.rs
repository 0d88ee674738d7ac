//! Date Navigation Component
//!
//! Prev/next day controls (next is disabled at today, so future dates are
//! unreachable), the Korean date label, and the collapsible past-dates panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_toast;
use crate::dates;
use crate::models::DateEntry;
use crate::store::{use_feed_store, FeedStateStoreFields};

#[component]
pub fn DateNav() -> impl IntoView {
    let store = use_feed_store();
    let toast = use_toast();

    let (dates_open, set_dates_open) = signal(false);
    let (entries, set_entries) = signal(Vec::<DateEntry>::new());

    let go_prev = move |_| {
        let date = store.current_date().get_untracked();
        store.current_date().set(dates::add_days(&date, -1));
    };

    let go_next = move |_| {
        let date = store.current_date().get_untracked();
        if dates::next_disabled(&date, &dates::today_str()) {
            return;
        }
        store.current_date().set(dates::add_days(&date, 1));
    };

    let toggle_dates = move |_| {
        if dates_open.get_untracked() {
            set_dates_open.set(false);
            return;
        }
        spawn_local(async move {
            match api::list_dates().await {
                Ok(data) => {
                    set_entries.set(data.dates);
                    set_dates_open.set(true);
                }
                Err(message) => toast.error(message),
            }
        });
    };

    let go_to_date = move |date: String| {
        store.current_date().set(date);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    };

    view! {
        <div class="date-nav">
            <button class="prev-date" on:click=go_prev>
                "◀"
            </button>
            <span class="current-date-text">
                {move || dates::display_label(&store.current_date().get(), &dates::today_str())}
            </span>
            <button
                class="next-date"
                disabled=move || dates::next_disabled(&store.current_date().get(), &dates::today_str())
                on:click=go_next
            >
                "▶"
            </button>
        </div>

        <div class="past-dates">
            <button class="toggle-dates" on:click=toggle_dates>
                {move || if dates_open.get() { "접기" } else { "지난 질문 보기" }}
            </button>
            <Show when=move || dates_open.get()>
                <div class="dates-list">
                    <Show when=move || !entries.get().is_empty() fallback=|| view! {
                        <p class="empty">"아직 기록이 없어요"</p>
                    }>
                        <For
                            each=move || entries.get()
                            key=|d| d.date.clone()
                            children=move |d| {
                                let date = d.date.clone();
                                view! {
                                    <div class="date-row" on:click=move |_| go_to_date(date.clone())>
                                        <span>{dates::format_date(&d.date)}</span>
                                        <span class="date-count">{format!("{}개", d.count)}</span>
                                    </div>
                                }
                            }
                        />
                    </Show>
                </div>
            </Show>
        </div>
    }
}
