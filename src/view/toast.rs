//! Acknowledgment notifications

use owo_colors::AnsiColors;
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl Toast {
    pub fn new(title: String, message: String, level: ToastLevel) -> Self {
        Self {
            title,
            message,
            level,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title.into(), message.into(), ToastLevel::Success)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title.into(), message.into(), ToastLevel::Error)
    }

    pub fn color(&self) -> AnsiColors {
        match self.level {
            ToastLevel::Success => AnsiColors::Green,
            ToastLevel::Error => AnsiColors::Red,
        }
    }
}

/// Shows transient notifications. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Keeps every toast it is handed, in order
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.lock().last().cloned()
    }

    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock())
    }
}

impl Notifier for ToastLog {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_levels_and_colors() {
        assert_eq!(Toast::success("Deleted!", "done").color(), AnsiColors::Green);
        assert_eq!(Toast::success("Deleted!", "done").level, ToastLevel::Success);
        assert_eq!(Toast::error("Error", "nope").color(), AnsiColors::Red);
    }

    #[test]
    fn test_toast_log_records_in_order() {
        let log = ToastLog::new();
        log.notify(Toast::success("one", "1"));
        log.notify(Toast::error("two", "2"));

        assert_eq!(log.toasts().len(), 2);
        assert_eq!(log.last().unwrap().title, "two");

        let drained = log.drain();
        assert_eq!(drained[0].title, "one");
        assert!(log.toasts().is_empty());
    }
}
