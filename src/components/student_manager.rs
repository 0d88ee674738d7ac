//! Student PIN Manager Component
//!
//! Roster with grade/name filters, per-student PIN reset, bulk custom-PIN
//! assignment, and bulk PIN generation (regenerate-all is double-confirmed
//! because it invalidates every existing PIN).

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, GenerateTarget};
use crate::components::confirm;
use crate::context::{use_toast, AdminContext};
use crate::models::StudentRecord;
use crate::store::{
    filter_students, use_admin_store, validate_bulk_selection, AdminStateStoreFields,
};

const GRADES: [&str; 6] = ["1", "2", "3", "4", "5", "6"];

fn pin_display(s: &StudentRecord) -> AnyView {
    match (&s.pin, s.has_pin) {
        (Some(pin), _) => view! { <span class="pin-plain">{pin.clone()}</span> }.into_any(),
        (None, true) => {
            view! { <span class="pin-unknown">"확인불가 (재설정 필요)"</span> }.into_any()
        }
        (None, false) => view! { <span class="pin-missing">"미설정"</span> }.into_any(),
    }
}

#[component]
pub fn StudentManager() -> impl IntoView {
    let store = use_admin_store();
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");
    let toast = use_toast();

    let selected = RwSignal::new(HashSet::<i64>::new());
    let (custom_pin, set_custom_pin) = signal(String::new());
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.students_trigger.get();
        spawn_local(async move {
            match api::admin_students().await {
                Ok(data) => {
                    store.students().set(data.students);
                    selected.set(HashSet::new());
                }
                Err(message) => {
                    web_sys::console::error_1(&message.into());
                }
            }
        });
    });

    let visible = Memo::new(move |_| {
        filter_students(
            &store.students().get(),
            &store.filter_grade().get(),
            &store.filter_name().get(),
        )
    });

    let toggle_all = move |ev: web_sys::Event| {
        if event_target_checked(&ev) {
            selected.set(visible.get_untracked().iter().map(|s| s.id).collect());
        } else {
            selected.set(HashSet::new());
        }
    };

    let on_set_pins = move |_| {
        if busy.get_untracked() {
            return;
        }
        let pin = custom_pin.get_untracked().trim().to_string();
        let ids = match validate_bulk_selection(
            &selected.get_untracked(),
            "비밀번호를 설정할 학생을 선택해주세요",
            Some(&pin),
        ) {
            Ok(ids) => ids,
            Err(message) => {
                toast.error(message);
                return;
            }
        };
        if !confirm(&format!(
            "선택한 {}명의 비밀번호를 '{}'으로 설정할까요?",
            ids.len(),
            pin
        )) {
            return;
        }

        set_busy.set(true);
        spawn_local(async move {
            match api::set_pins(&ids, &pin).await {
                Ok(data) => {
                    toast.success(data.message.unwrap_or_else(|| "설정되었습니다.".into()));
                    set_custom_pin.set(String::new());
                    ctx.reload_students();
                }
                Err(message) => toast.error(message),
            }
            set_busy.set(false);
        });
    };

    let on_reset_pin = move |student: StudentRecord| {
        if busy.get_untracked() {
            return;
        }
        let label = format!("{}-{} {}", student.grade, student.class_num, student.name);
        if !confirm(&format!(
            "{} 학생의 비밀번호를 초기화할까요?\n학생이 다시 로그인하면 새 비밀번호를 설정하게 됩니다.",
            label
        )) {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::reset_pin(student.id).await {
                Ok(data) => {
                    toast.success(data.message.unwrap_or_else(|| "초기화되었습니다.".into()));
                    ctx.reload_students();
                }
                Err(message) => toast.error(message),
            }
            set_busy.set(false);
        });
    };

    let on_generate = move |target: GenerateTarget| {
        if busy.get_untracked() {
            return;
        }
        let message = match target {
            GenerateTarget::All => {
                "모든 학생의 비밀번호를 새로 생성합니다.\n기존 비밀번호가 변경됩니다. 계속할까요?"
            }
            GenerateTarget::Missing => {
                "비밀번호가 없는 학생들에게 비밀번호를 생성합니다. 계속할까요?"
            }
        };
        if !confirm(message) {
            return;
        }
        // Regenerating everyone invalidates every existing PIN
        if target == GenerateTarget::All
            && !confirm("[주의] 정말로 모든 학생의 비밀번호를 변경하시겠습니까?")
        {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::generate_pins(target).await {
                Ok(data) => {
                    toast.success(data.message.unwrap_or_else(|| "생성되었습니다.".into()));
                    ctx.reload_students();
                }
                Err(message) => toast.error(message),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="student-manager">
            <div class="panel-header">
                <h3>"학생 비밀번호 관리"</h3>
                <div class="filters">
                    <select
                        prop:value=move || store.filter_grade().get()
                        on:change=move |ev| store.filter_grade().set(event_target_value(&ev))
                    >
                        <option value="">"전체 학년"</option>
                        {GRADES
                            .iter()
                            .map(|g| {
                                let g = *g;
                                view! { <option value=g>{format!("{}학년", g)}</option> }
                            })
                            .collect_view()}
                    </select>
                    <input
                        type="text"
                        placeholder="이름 검색"
                        prop:value=move || store.filter_name().get()
                        on:input=move |ev| store.filter_name().set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="pin-toolbar">
                <label class="select-all">
                    <input
                        type="checkbox"
                        prop:checked=move || {
                            let rows = visible.get();
                            !rows.is_empty()
                                && rows.iter().all(|s| selected.with(|sel| sel.contains(&s.id)))
                        }
                        on:change=toggle_all
                    />
                    "전체 선택"
                </label>
                <span class="selected-count">
                    {move || format!("{}명 선택", selected.with(|s| s.len()))}
                </span>
                <input
                    type="text"
                    class="custom-pin"
                    placeholder="4자리 비밀번호"
                    maxlength="4"
                    inputmode="numeric"
                    prop:value=move || custom_pin.get()
                    on:input=move |ev| set_custom_pin.set(event_target_value(&ev))
                />
                <button on:click=on_set_pins>"선택 학생 비밀번호 설정"</button>
                <button on:click=move |_| on_generate(GenerateTarget::Missing)>
                    "미설정 학생 생성"
                </button>
                <button class="danger" on:click=move |_| on_generate(GenerateTarget::All)>
                    "전체 재생성"
                </button>
            </div>

            <Show
                when=move || !visible.get().is_empty()
                fallback=|| view! { <p class="empty">"해당하는 학생이 없습니다"</p> }
            >
                <For
                    each=move || visible.get()
                    key=|s| (s.id, s.has_pin, s.pin.clone())
                    children=move |s| {
                        let id = s.id;
                        let grade_class = format!("grade-badge grade-{}", s.grade);
                        let reset_button = s.has_pin.then(|| {
                            let row = s.clone();
                            view! {
                                <button
                                    class="reset-pin-btn"
                                    on:click=move |_| on_reset_pin(row.clone())
                                >
                                    "PIN 초기화"
                                </button>
                            }
                        });
                        view! {
                            <div class="student-row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected.with(|sel| sel.contains(&id))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        selected.update(|sel| {
                                            if checked {
                                                sel.insert(id);
                                            } else {
                                                sel.remove(&id);
                                            }
                                        });
                                    }
                                />
                                <span class=grade_class>{s.grade}</span>
                                <div class="row-body">
                                    <div class="row-title">
                                        {format!("{}-{} {} ({}번)", s.grade, s.class_num, s.name, s.student_num)}
                                    </div>
                                    <div class="row-meta">
                                        {format!("질문 {}개 · 비밀번호: ", s.question_count)}
                                        {pin_display(&s)}
                                    </div>
                                </div>
                                {reset_button}
                            </div>
                        }
                    }
                />
            </Show>
        </section>
    }
}
