//! Notifications
//!
//! Messages the core hands to whatever presents them (a terminal, a toast).
//! The `Notifier` trait is the seam; `NotificationQueue` collects them and
//! `LogNotifier` writes them to the tracing log.

use std::collections::VecDeque;

use crate::ledger::GoalCompleted;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        notification_type: NotificationType,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            notification_type,
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationType::Info)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationType::Success)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationType::Warning)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationType::Error)
    }

    /// The congratulation shown when a goal is reached
    pub fn goal_completed(event: &GoalCompleted) -> Self {
        Self::success(
            "Goal Completed! 🎉",
            format!(
                "Congratulations! You've reached your goal: {}",
                event.goal_name
            ),
        )
    }

    /// One-line rendering, e.g. "[+] Goal Completed! 🎉 - ..."
    pub fn to_line(&self) -> String {
        format!(
            "[{}] {} - {}",
            self.notification_type.icon(),
            self.title,
            self.message
        )
    }
}

/// Receives notifications from the core
pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

/// Collects notifications in arrival order
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    /// Take the oldest notification
    pub fn pop(&mut self) -> Option<Notification> {
        self.notifications.pop_front()
    }

    /// Take every queued notification
    pub fn drain(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, notification: &Notification) {
        self.push(notification.clone());
    }
}

/// Writes notifications to the tracing log at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: &Notification) {
        tracing::info!(
            title = %notification.title,
            kind = ?notification.notification_type,
            "{}",
            notification.message
        );
    }
}
