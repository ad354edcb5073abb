//! Toast notifications
//!
//! `NotificationManager` is provided through context at the app root; any
//! page can push messages and `NotificationsContainer` renders the queue.

use crate::core::{Notification, NotificationType};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// Duration of the exit transition
#[cfg(not(feature = "ssr"))]
const EXIT_ANIMATION_MS: u32 = 300;

/// Queued notification with a unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Reactive notification queue
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Queue a notification, dropping the oldest past the limit
    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notification });
            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notification::error(title, message));
    }

    pub fn dismiss(&self, id: u64) {
        self.notifications.update(|n| n.retain(|item| item.id != id));
    }

    pub fn clear(&self) {
        self.notifications.set(VecDeque::new());
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}

/// Renders the queued notifications in the top-right corner
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let manager = use_notifications();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            <For
                each=move || manager.notifications().get()
                key=|item| item.id
                children=move |item| view! { <NotificationToast item=item manager=manager /> }
            />
        </div>
    }
}

#[component]
fn NotificationToast(item: NotificationItem, manager: NotificationManager) -> impl IntoView {
    let id = item.id;
    let notification = item.notification;
    let (is_exiting, _set_is_exiting) = signal(false);

    if let Some(_ms) = notification.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                TimeoutFuture::new(EXIT_ANIMATION_MS).await;
                manager.dismiss(id);
            });
        }
    }

    let (tone_class, icon_path) = match notification.notification_type {
        NotificationType::Success => (
            "bg-green-500/10 border-green-500/30 text-green-400",
            "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        NotificationType::Error => (
            "bg-red-500/10 border-red-500/30 text-red-400",
            "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        NotificationType::Warning => (
            "bg-yellow-500/10 border-yellow-500/30 text-yellow-400",
            "M12 9v2m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        NotificationType::Info => (
            "bg-blue-500/10 border-blue-500/30 text-blue-400",
            "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
    };

    let role = if notification.is_error() { "alert" } else { "status" };

    view! {
        <div
            class=format!(
                "flex items-start gap-3 p-4 rounded-lg border shadow-lg transition-all duration-300 {}",
                tone_class
            )
            role=role
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1;" }
        >
            <svg class="w-5 h-5 shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
            </svg>
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-medium">{notification.title}</h4>
                <p class="text-xs mt-0.5">{notification.message}</p>
            </div>
            <button
                class="opacity-70 hover:opacity-100 transition-opacity"
                aria-label="Dismiss"
                on:click=move |_| manager.dismiss(id)
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_capped_and_dismissable() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = NotificationManager::new();
            for i in 0..7 {
                manager.error("Request failed", format!("error {}", i));
            }

            let queue = manager.notifications().get_untracked();
            assert_eq!(queue.len(), MAX_NOTIFICATIONS);
            assert_eq!(queue.front().map(|i| i.notification.message.as_str()), Some("error 2"));

            let first = queue.front().map(|i| i.id).unwrap();
            manager.dismiss(first);
            assert_eq!(manager.notifications().get_untracked().len(), MAX_NOTIFICATIONS - 1);

            manager.clear();
            assert!(manager.notifications().get_untracked().is_empty());
        });
    }
}
