//! Admin Login Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, AdminLoginArgs};
use crate::context::use_toast;

#[component]
pub fn AdminLogin(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let toast = use_toast();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.is_empty() || pass.is_empty() {
            toast.error("아이디와 비밀번호를 입력해주세요");
            return;
        }

        set_busy.set(true);
        spawn_local(async move {
            match api::admin_login(&AdminLoginArgs {
                username: &user,
                password: &pass,
            })
            .await
            {
                Ok(_) => {
                    toast.success("관리자 로그인 성공");
                    on_login.run(());
                }
                Err(message) => toast.error(message),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="admin-login-screen">
            <h1>"관리자 로그인"</h1>
            <form class="admin-login-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="아이디"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="비밀번호"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    "로그인"
                </button>
            </form>
        </div>
    }
}
