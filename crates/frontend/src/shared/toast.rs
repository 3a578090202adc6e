//! Transient notifications shown after queries and writes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub const MAX_VISIBLE: usize = 3;

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
        if self.toasts.len() > Self::MAX_VISIBLE {
            let overflow = self.toasts.len() - Self::MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
    }

    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    dismiss_after_ms: u32,
}

impl ToastService {
    pub fn new(dismiss_after_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            dismiss_after_ms,
        }
    }

    pub fn success(&self, title: impl Into<String>) {
        self.show(ToastKind::Success, title.into(), None);
    }

    pub fn destructive(&self, title: impl Into<String>, description: Option<String>) {
        self.show(ToastKind::Destructive, title.into(), description);
    }

    fn show(&self, kind: ToastKind, title: String, description: Option<String>) {
        match kind {
            ToastKind::Success => log::info!("toast: {}", title),
            ToastKind::Destructive => log::warn!("toast: {} {:?}", title, description),
        }
        let id = uuid::Uuid::new_v4().to_string();
        self.queue.update(|q| {
            q.push(Toast {
                id: id.clone(),
                kind,
                title,
                description,
            })
        });

        let queue = self.queue;
        let delay = self.dismiss_after_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            let _ = queue.try_update(|q| q.dismiss(&id));
        });
    }

    pub fn dismiss(&self, id: &str) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.queue.get().toasts().to_vec()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    let destructive = toast.kind == ToastKind::Destructive;
                    view! {
                        <div
                            class="toast"
                            class:toast--destructive=destructive
                            class:toast--success=!destructive
                            role=if destructive { "alert" } else { "status" }
                        >
                            <span class="toast__icon">
                                {icon(if destructive { "alert" } else { "check" })}
                            </span>
                            <div class="toast__text">
                                <strong class="toast__title">{toast.title.clone()}</strong>
                                {toast.description.clone().map(|d| view! { <p class="toast__description">{d}</p> })}
                            </div>
                            <button class="button button--icon toast__close" on:click=move |_| toasts.dismiss(&id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
