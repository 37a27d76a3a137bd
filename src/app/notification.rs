//! Single-slot toast with an expiry deadline

use std::time::{Duration, Instant};

use crate::models::Notification;

/// Holds at most one notification. Showing a new one replaces the old one
/// and re-arms the deadline, so a stale deadline can never clear it.
#[derive(Clone, Debug)]
pub struct NotificationSlot {
    current: Option<Notification>,
    deadline: Option<Instant>,
    ttl: Duration,
}

impl NotificationSlot {
    pub fn new(ttl: Duration) -> Self {
        NotificationSlot {
            current: None,
            deadline: None,
            ttl,
        }
    }

    pub fn show(&mut self, notification: Notification, now: Instant) {
        self.current = Some(notification);
        self.deadline = Some(now + self.ttl);
    }

    /// Clear the slot if its deadline has passed. Returns true if cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.current = None;
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
