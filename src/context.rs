//! Application Context
//!
//! Shared handles provided via the Leptos Context API: the feed reload
//! trigger, the admin panel refresh triggers, and the toast channel.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Feed-wide signals for the student surface
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to re-fetch the question list - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a full re-fetch of the current date's questions
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Per-panel refresh triggers for the admin surface. Bulk moderation bumps
/// questions and stats together so derived counts stay consistent.
#[derive(Clone, Copy)]
pub struct AdminContext {
    pub questions_trigger: ReadSignal<u32>,
    set_questions_trigger: WriteSignal<u32>,
    pub stats_trigger: ReadSignal<u32>,
    set_stats_trigger: WriteSignal<u32>,
    pub students_trigger: ReadSignal<u32>,
    set_students_trigger: WriteSignal<u32>,
}

impl AdminContext {
    pub fn new() -> Self {
        let (questions_trigger, set_questions_trigger) = signal(0u32);
        let (stats_trigger, set_stats_trigger) = signal(0u32);
        let (students_trigger, set_students_trigger) = signal(0u32);
        Self {
            questions_trigger,
            set_questions_trigger,
            stats_trigger,
            set_stats_trigger,
            students_trigger,
            set_students_trigger,
        }
    }

    pub fn reload_questions(&self) {
        self.set_questions_trigger.update(|v| *v += 1);
    }

    pub fn reload_stats(&self) {
        self.set_stats_trigger.update(|v| *v += 1);
    }

    pub fn reload_students(&self) {
        self.set_students_trigger.update(|v| *v += 1);
    }
}

// ========================
// Toast
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Transient notification channel. Auto-dismisses after 2.5s; the sequence
/// number keeps an older timer from dismissing a newer toast.
#[derive(Clone, Copy)]
pub struct ToastContext {
    current: RwSignal<Option<Toast>>,
    seq: RwSignal<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            seq: RwSignal::new(0),
        }
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.get()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Error);
    }

    fn show(&self, message: String, kind: ToastKind) {
        let id = self.seq.get_untracked() + 1;
        self.seq.set(id);
        self.current.set(Some(Toast { message, kind }));

        let current = self.current;
        let seq = self.seq;
        spawn_local(async move {
            TimeoutFuture::new(2500).await;
            if seq.get_untracked() == id {
                current.set(None);
            }
        });
    }
}

pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}
