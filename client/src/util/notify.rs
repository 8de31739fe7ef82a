//! Notification dispatcher.
//!
//! `Notifier` wraps the notification signal provided by `App`. Pushing
//! schedules the leave transition and removal on `gloo-timers`; on the
//! server the entry is pushed without timers.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use crate::state::notifications::{NotificationKind, NotificationsState, Ticket};

#[derive(Clone, Copy)]
pub struct Notifier {
    state: RwSignal<NotificationsState>,
}

impl Notifier {
    #[must_use]
    pub fn new(state: RwSignal<NotificationsState>) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> RwSignal<NotificationsState> {
        self.state
    }

    /// Show `message` and schedule its expiry.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> Ticket {
        let message = message.into();
        #[cfg(feature = "hydrate")]
        log::debug!("notify[{}]: {message}", kind.as_str());
        let mut ticket = Ticket { id: 0, generation: 0 };
        self.state.update(|s| ticket = s.push(message, kind));
        self.schedule_expiry(ticket);
        ticket
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Info);
    }

    /// Close control: remove at once.
    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| {
            s.dismiss(id);
        });
    }

    fn schedule_expiry(&self, ticket: Ticket) {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::notifications::{LEAVE_AFTER_MS, REMOVE_AFTER_MS};
            use std::time::Duration;

            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(Duration::from_millis(LEAVE_AFTER_MS)).await;
                let current = state.try_update(|s| s.begin_leave(ticket)).unwrap_or(false);
                if !current {
                    return;
                }
                gloo_timers::future::sleep(Duration::from_millis(REMOVE_AFTER_MS - LEAVE_AFTER_MS)).await;
                let _ = state.try_update(|s| s.expire(ticket));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    }
}

/// Fetch the `Notifier` provided by `App`.
#[must_use]
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}
