use leptos::prelude::*;
use spamdash_core::{Notification, NotificationLevel};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Shows `notification` and schedules its removal after its ttl.
pub fn show_toast(queue: RwSignal<ToastQueue>, notification: Notification) {
    let ttl = notification.ttl;
    let mut id = 0;
    queue.update(|q| id = q.push(notification));
    set_timeout(move || queue.update(|q| q.dismiss(id)), ttl);
}

#[component]
pub fn Toasts(queue: RwSignal<ToastQueue>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.notification.level {
                        NotificationLevel::Success => "toast toast-success",
                        NotificationLevel::Warning => "toast toast-warning",
                    };
                    view! {
                        <div class=class on:click=move |_| queue.update(|q| q.dismiss(id))>
                            {toast.notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
