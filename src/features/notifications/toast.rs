//! Toast stack shared through Leptos context. Each toast removes itself after
//! the configured duration and can be dismissed early. Toast text must be safe
//! to render and never include secrets or tokens.

use super::{Notification, NotificationKind, Notifier};
use crate::app_lib::config::{AppConfig, DEFAULT_TOAST_DURATION_MS};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
/// Handle to the toast stack; cheap to copy into actions and callbacks.
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl ToastContext {
    fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    /// Shows `notification` and schedules its removal.
    pub fn add(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        let _ = self
            .toasts
            .try_update(|toasts| toasts.push(Toast { id, notification }));

        let context = *self;
        Timeout::new(self.duration_ms, move || context.remove(id)).forget();
    }

    /// Removes a toast; unknown ids and unmounted providers are ignored.
    pub fn remove(&self, id: u64) {
        let _ = self
            .toasts
            .try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }
}

impl Notifier for ToastContext {
    fn notify(&self, notification: Notification) {
        self.add(notification);
    }
}

/// Provides the toast context and renders the stack above the page.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let context = ToastContext::new(AppConfig::load().toast_duration_ms);
    provide_context(context);

    view! {
        {children()}
        <ToastContainer />
    }
}

/// Returns the current toast context or a detached fallback.
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(|| ToastContext::new(DEFAULT_TOAST_DURATION_MS))
}

#[component]
fn ToastContainer() -> impl IntoView {
    let context = use_toast();

    view! {
        <div class="fixed right-0 top-0 z-50 space-y-3 p-6" aria-live="polite">
            <For
                each=move || context.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notification.kind {
                        NotificationKind::Success => {
                            "w-80 rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-emerald-700 shadow-lg"
                        }
                        NotificationKind::Error => {
                            "w-80 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-red-700 shadow-lg"
                        }
                        NotificationKind::Info => {
                            "w-80 rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-blue-700 shadow-lg"
                        }
                    };
                    let description = toast.notification.description.clone();
                    view! {
                        <div class=class role="alert">
                            <div class="flex items-start justify-between gap-3">
                                <strong class="text-sm font-semibold">
                                    {toast.notification.title.clone()}
                                </strong>
                                <button
                                    type="button"
                                    class="text-xs opacity-60 hover:opacity-100"
                                    aria-label="Fechar"
                                    on:click=move |_| context.remove(id)
                                >
                                    "✕"
                                </button>
                            </div>
                            {(!description.is_empty())
                                .then(|| view! { <p class="mt-1 text-sm opacity-80">{description}</p> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
