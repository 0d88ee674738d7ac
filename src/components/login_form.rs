//! Login Form Component
//!
//! Drives the login/PIN state machine (`crate::login`): the identity fields
//! lock once the PIN phase starts, the PIN section's label/hint/button come
//! from the current step, and a failed PIN entry clears only the PIN for an
//! immediate retry. The submit handler carries an in-flight guard so a
//! double-click never fires two login requests.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LoginArgs};
use crate::context::use_toast;
use crate::login::{self, IdentityFields, LoginStep, Transition};
use crate::models::Student;

const GRADES: [&str; 6] = ["1", "2", "3", "4", "5", "6"];

#[component]
pub fn LoginForm(#[prop(into)] on_login: Callback<Student>) -> impl IntoView {
    let toast = use_toast();

    let (step, set_step) = signal(LoginStep::Info);
    let (grade, set_grade) = signal(String::new());
    let (class_num, set_class_num) = signal(String::new());
    let (student_num, set_student_num) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (pin, set_pin) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let pin_input = NodeRef::<html::Input>::new();

    // Focus the PIN field whenever the PIN section appears
    Effect::new(move |_| {
        if step.get().pin_required() {
            if let Some(input) = pin_input.get() {
                let _ = input.focus();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let current = step.get_untracked();
        let identity = IdentityFields {
            grade: grade.get_untracked(),
            class_num: class_num.get_untracked(),
            student_num: student_num.get_untracked(),
            name: name.get_untracked().trim().to_string(),
        };
        let pin_value = pin.get_untracked().trim().to_string();

        if let Err(message) = login::validate(current, &identity, &pin_value) {
            toast.error(message);
            if current.pin_required() {
                if let Some(input) = pin_input.get_untracked() {
                    let _ = input.focus();
                }
            }
            return;
        }

        set_busy.set(true);
        spawn_local(async move {
            let args = LoginArgs {
                grade: &identity.grade,
                class_num: &identity.class_num,
                student_num: &identity.student_num,
                name: &identity.name,
                pin: current.pin_required().then_some(pin_value.as_str()),
            };

            match api::login(&args).await {
                Ok(response) => match login::advance(&response) {
                    Transition::EnterPin(next) => set_step.set(next),
                    Transition::Authenticated(student) => {
                        toast.success(format!("{}님, 환영해요!", student.name));
                        set_step.set(LoginStep::Info);
                        set_pin.set(String::new());
                        on_login.run(student);
                    }
                    Transition::Stay => {}
                },
                Err(message) => {
                    toast.error(message);
                    if current.clears_pin_on_failure() {
                        set_pin.set(String::new());
                        if let Some(input) = pin_input.get_untracked() {
                            let _ = input.focus();
                        }
                    }
                }
            }
            set_busy.set(false);
        });
    };

    let locked = move || step.get().identity_locked();

    view! {
        <div class="login-screen">
            <h1>"하루 한 개 질문 챌린지"</h1>
            <form class="login-form" on:submit=on_submit>
                <div class="identity-row">
                    <select
                        disabled=locked
                        prop:value=move || grade.get()
                        on:change=move |ev| set_grade.set(event_target_value(&ev))
                    >
                        <option value="">"학년"</option>
                        {GRADES
                            .iter()
                            .map(|g| {
                                let g = *g;
                                view! { <option value=g>{format!("{}학년", g)}</option> }
                            })
                            .collect_view()}
                    </select>
                    <input
                        type="number"
                        placeholder="반"
                        readonly=locked
                        prop:value=move || class_num.get()
                        on:input=move |ev| set_class_num.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="번호"
                        readonly=locked
                        prop:value=move || student_num.get()
                        on:input=move |ev| set_student_num.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="이름"
                        readonly=locked
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>

                <Show when=move || step.get().pin_required()>
                    <div class="pin-section">
                        <label>{move || step.get().pin_label()}</label>
                        <input
                            type="password"
                            inputmode="numeric"
                            maxlength="4"
                            node_ref=pin_input
                            prop:value=move || pin.get()
                            on:input=move |ev| set_pin.set(event_target_value(&ev))
                        />
                        <p class="pin-hint">{move || step.get().pin_hint()}</p>
                    </div>
                </Show>

                <button type="submit" class="login-btn" disabled=move || busy.get()>
                    {move || step.get().submit_label()}
                </button>
            </form>
        </div>
    }
}
