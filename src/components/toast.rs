//! Toast Layer Component
//!
//! Renders the transient notification from `ToastContext`; dismissal is
//! timer-driven in the context itself.

use leptos::prelude::*;

use crate::context::{use_toast, ToastKind};

#[component]
pub fn ToastLayer() -> impl IntoView {
    let toast = use_toast();

    view! {
        {move || {
            toast.current().map(|t| {
                let class = match t.kind {
                    ToastKind::Success => "toast success show",
                    ToastKind::Error => "toast error show",
                };
                view! { <div class=class>{t.message.clone()}</div> }
            })
        }}
    }
}
