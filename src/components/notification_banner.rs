//! Notification Banner Component
//!
//! Transient, dismissible alerts pinned to the top right of the page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::NOTIFICATION_TTL_MS;

/// Bootstrap alert flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    #[default]
    Info,
    #[allow(dead_code)]
    Warning,
    #[allow(dead_code)]
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn class(&self) -> String {
        format!(
            "alert alert-{} alert-dismissible fade show position-fixed",
            self.severity.as_str()
        )
    }
}

/// Banners currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    next_id: u32,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, message: String, severity: Severity) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, message, severity });
        id
    }

    /// Returns false if the banner was already gone
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Handle for showing banners, provided via context
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NotificationQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self { queue: RwSignal::new(NotificationQueue::default()) }
    }

    /// Show a banner that removes itself after `NOTIFICATION_TTL_MS`
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> u32 {
        let message = message.into();
        tracing::debug!("[NOTIFY] {}: {}", severity.as_str(), message);
        let id = self
            .queue
            .try_update(|queue| queue.push(message, severity))
            .unwrap_or_default();

        let notifier = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TTL_MS).await;
            notifier.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.try_update(|queue| {
            queue.dismiss(id);
        });
    }

    pub fn items(&self) -> Vec<Notification> {
        self.queue.with(|queue| queue.items().to_vec())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders every live banner
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    view! {
        <For
            each=move || notifier.items()
            key=|notification| notification.id
            children=move |notification| {
                let id = notification.id;
                view! {
                    <div
                        class=notification.class()
                        style="top: 20px; right: 20px; z-index: 9999;"
                        role="alert"
                    >
                        {notification.message.clone()}
                        <button
                            type="button"
                            class="btn-close"
                            on:click=move |_| notifier.dismiss(id)
                        ></button>
                    </div>
                }
            }
        />
    }
}
