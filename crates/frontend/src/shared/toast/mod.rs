use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen, in milliseconds.
const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast--success",
            ToastLevel::Error => "toast--error",
            ToastLevel::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    id: u64,
    level: ToastLevel,
    title: String,
    description: String,
}

/// Notification sink for the whole app.
///
/// Copyable signal-backed service provided via context; `ToastHost` renders
/// the entries at the application root. Entries dismiss themselves after a
/// few seconds or on click.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastLevel::Success, title.into(), description.into());
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastLevel::Error, title.into(), description.into());
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastLevel::Info, title.into(), description.into());
    }

    pub fn push(&self, level: ToastLevel, title: String, description: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| {
            t.push(ToastEntry {
                id,
                level,
                title,
                description,
            });
        });

        // Schedule auto-dismiss
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| {
            t.retain(|e| e.id != id);
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders active toasts at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-container">
            <For
                each=move || svc.toasts.get()
                key=|entry| entry.id
                children=move |entry: ToastEntry| {
                    let id = entry.id;
                    view! {
                        <div
                            class=format!("toast {}", entry.level.css_class())
                            on:click=move |_| svc.dismiss(id)
                        >
                            <div class="toast__title">{entry.title.clone()}</div>
                            <div class="toast__description">{entry.description.clone()}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
