//! Transient notification stack.
//!
//! DESIGN
//! ======
//! At most [`MAX_VISIBLE`] notifications are shown; pushing past the cap
//! evicts the oldest. Pushing a kind + message pair that is already visible
//! coalesces into the existing entry, moves it to the newest slot and bumps
//! its generation. Expiry timers carry the `(id, generation)` they were
//! scheduled for, so a timer that outlived a coalesce or a manual close is
//! a no-op.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Maximum simultaneously visible notifications.
pub const MAX_VISIBLE: usize = 4;
/// Delay before the leave transition starts.
pub const LEAVE_AFTER_MS: u64 = 4_700;
/// Delay before the entry is removed. Never more than five seconds.
pub const REMOVE_AFTER_MS: u64 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl NotificationKind {
    /// Parse a kind name; anything unrecognized is `Info`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Error => "❌",
            Self::Info => "ℹ️",
            Self::Warning => "⚠️",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub generation: u64,
    /// Leave transition in progress.
    pub leaving: bool,
}

impl Notification {
    #[must_use]
    pub fn class_name(&self) -> String {
        let mut class = format!("notification notification-{}", self.kind.as_str());
        if self.leaving {
            class.push_str(" notification--leaving");
        }
        class
    }
}

/// Handle returned by [`NotificationsState::push`] for scheduling expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub generation: u64,
}

/// Visible notifications, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationsState {
    /// Show `message`, coalescing with a visible duplicate.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> Ticket {
        let message = message.into();
        if let Some(pos) = self
            .items
            .iter()
            .position(|n| n.kind == kind && n.message == message)
        {
            let mut existing = self.items.remove(pos);
            existing.generation += 1;
            existing.leaving = false;
            let ticket = Ticket { id: existing.id, generation: existing.generation };
            self.items.push(existing);
            return ticket;
        }

        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, message, kind, generation: 0, leaving: false });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        Ticket { id, generation: 0 }
    }

    /// Start the leave transition if the ticket is still current.
    pub fn begin_leave(&mut self, ticket: Ticket) -> bool {
        match self.find_mut(ticket) {
            Some(n) => {
                n.leaving = true;
                true
            }
            None => false,
        }
    }

    /// Remove the entry if the ticket is still current.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        let before = self.items.len();
        self.items
            .retain(|n| !(n.id == ticket.id && n.generation == ticket.generation));
        self.items.len() != before
    }

    /// Close control: remove immediately regardless of generation.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    fn find_mut(&mut self, ticket: Ticket) -> Option<&mut Notification> {
        self.items
            .iter_mut()
            .find(|n| n.id == ticket.id && n.generation == ticket.generation)
    }
}
