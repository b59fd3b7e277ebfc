use std::time::Duration;

use tokio::{
    sync::broadcast::{self, Receiver, Sender},
    time::Instant,
};

/// How long an alert stays on screen.
pub const ALERT_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Error(String),
    Warning(String),
    Success(String),
    Info(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStyle {
    Ok,
    Error,
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Error(message)
            | Notification::Warning(message)
            | Notification::Success(message)
            | Notification::Info(message) => message,
        }
    }

    pub fn style(&self) -> AlertStyle {
        match self {
            Notification::Error(_) => AlertStyle::Error,
            _ => AlertStyle::Ok,
        }
    }
}

#[derive(Debug)]
pub struct NotificationBroadcast {
    tx: Sender<Notification>,
    rx: Receiver<Notification>,
}

impl NotificationBroadcast {
    pub fn new() -> Self {
        let (tx, rx) = broadcast::channel(20);
        Self { tx, rx }
    }

    pub fn subscribe(&self) -> Receiver<Notification> {
        self.rx.resubscribe()
    }

    pub fn send_message(&self, message: Notification) {
        // `rx` keeps the channel open, so this only fails once it is dropped.
        _ = self.tx.send(message);
    }

    pub fn send_error(&self, message: impl Into<String>) {
        self.send_message(Notification::Error(message.into()));
    }
}

impl Default for NotificationBroadcast {
    fn default() -> Self {
        Self::new()
    }
}

/// The single alert box of the page. Showing a new alert replaces the
/// current one; an alert hides itself after [`ALERT_DURATION`].
#[derive(Debug, Default)]
pub struct AlertSlot {
    current: Option<(Notification, Instant)>,
}

impl AlertSlot {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn show(&mut self, notification: Notification) {
        self.current = Some((notification, Instant::now()));
    }

    pub fn visible(&self) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|(_, shown_at)| shown_at.elapsed() < ALERT_DURATION)
            .map(|(notification, _)| notification)
    }

    pub fn style(&self) -> Option<AlertStyle> {
        self.visible().map(Notification::style)
    }
}
