//! Application Roots
//!
//! Two independent surfaces share the backend: the student feed at `/` and
//! the admin console at `/admin`. Each owns its store and context; the
//! surfaces only meet in the toast layer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    AdminLogin, AdminQuestionList, DateNav, ExportPanel, LoginForm, QuestionForm, QuestionList,
    StatsPanel, StudentManager, ToastLayer, TopicBanner, TopicEditor,
};
use crate::context::{use_toast, AdminContext, AppContext, ToastContext};
use crate::dates;
use crate::models::Student;
use crate::store::{AdminState, FeedState, FeedStateStoreFields, SortMode};

#[component]
pub fn App() -> impl IntoView {
    provide_context(ToastContext::new());

    let admin_surface = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| path.starts_with("/admin"))
        .unwrap_or(false);

    view! {
        {if admin_surface {
            view! { <AdminApp /> }.into_any()
        } else {
            view! { <StudentApp /> }.into_any()
        }}
        <ToastLayer />
    }
}

#[component]
fn StudentApp() -> impl IntoView {
    let toast = use_toast();

    let store = Store::new(FeedState {
        current_date: dates::today_str(),
        ..Default::default()
    });
    provide_context(store);

    let ctx = AppContext::new(signal(0u32));
    provide_context(ctx);

    let (student, set_student) = signal::<Option<Student>>(None);

    // Restore an existing session on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(me) = api::me().await {
                if me.logged_in {
                    set_student.set(me.student);
                }
            }
        });
    });

    // Feed refresh cycle: re-fetch on login, date change, sort change, or an
    // explicit reload after a mutation
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let date = store.current_date().get();
        let sort = store.sort().get();
        if student.get().is_none() {
            return;
        }
        spawn_local(async move {
            match api::list_questions(&date, sort).await {
                Ok(data) => {
                    store.questions().set(data.questions);
                    store.total_count().set(data.total_count);
                    store.already_posted_today().set(data.already_posted_today);
                }
                Err(message) => toast.error(message),
            }
        });
    });

    // Topic loads once per login; a failure only logs
    Effect::new(move |_| {
        if student.get().is_none() {
            return;
        }
        spawn_local(async move {
            match api::topic().await {
                Ok(data) => store.topic().set(data.topic),
                Err(message) => {
                    web_sys::console::error_1(&format!("주제 로드 실패: {}", message).into());
                }
            }
        });
    });

    let on_login = move |s: Student| {
        store.current_date().set(dates::today_str());
        set_student.set(Some(s));
    };

    let go_home = move |_| {
        store.current_date().set(dates::today_str());
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    };

    let on_logout = move |_| {
        spawn_local(async move {
            let _ = api::logout().await;
            set_student.set(None);
            store.current_date().set(dates::today_str());
            store.sort().set(SortMode::Latest);
            store.questions().set(Vec::new());
            store.total_count().set(0);
            store.already_posted_today().set(false);
            store.topic().set(None);
        });
    };

    view! {
        <Show
            when=move || student.get().is_some()
            fallback=move || view! { <LoginForm on_login=on_login /> }
        >
            <div class="main-screen">
                <header class="app-header">
                    <h1>"하루 한 개 질문 챌린지"</h1>
                    <span class="user-info">
                        {move || {
                            student
                                .get()
                                .map(|s| format!("{}-{} {}", s.grade, s.class_num, s.name))
                                .unwrap_or_default()
                        }}
                    </span>
                    <button class="home-btn" on:click=go_home>
                        "오늘"
                    </button>
                    <button class="logout-btn" on:click=on_logout>
                        "로그아웃"
                    </button>
                </header>

                <TopicBanner />
                <DateNav />
                <QuestionForm />
                <QuestionList />
            </div>
        </Show>
    }
}

#[component]
fn AdminApp() -> impl IntoView {
    let store = Store::new(AdminState::default());
    provide_context(store);

    let ctx = AdminContext::new();
    provide_context(ctx);

    let (logged_in, set_logged_in) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(me) = api::admin_me().await {
                if me.logged_in {
                    set_logged_in.set(true);
                }
            }
        });
    });

    let on_logout = move |_| {
        spawn_local(async move {
            let _ = api::admin_logout().await;
            set_logged_in.set(false);
        });
    };

    view! {
        <Show
            when=move || logged_in.get()
            fallback=move || view! { <AdminLogin on_login=move |_| set_logged_in.set(true) /> }
        >
            <div class="admin-dashboard">
                <header class="app-header">
                    <h1>"관리자 대시보드"</h1>
                    <button class="logout-btn" on:click=on_logout>
                        "로그아웃"
                    </button>
                </header>

                <StatsPanel />
                <AdminQuestionList />
                <TopicEditor />
                <StudentManager />
                <ExportPanel />
            </div>
        </Show>
    }
}
