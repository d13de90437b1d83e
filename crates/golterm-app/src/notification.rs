//! Transient toast notifications
//!
//! Each `notify` call creates an independent toast with its own expiry.
//! Overlapping toasts are neither merged nor de-duplicated.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default lifetime of a toast
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Toast severity, drives the toast colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
    pub expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Stack of live toasts, oldest first
#[derive(Debug, Clone)]
pub struct Toasts {
    items: VecDeque<Toast>,
    next_id: u64,
    duration: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            next_id: 0,
            duration,
        }
    }

    /// Add a toast created now; returns its id
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.push_at(message, severity, Instant::now())
    }

    pub fn push_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(Toast {
            id,
            message: message.into(),
            severity,
            created_at: now,
            expires_at: now + self.duration,
        });
        id
    }

    /// Drop every toast whose lifetime is over; returns how many were removed
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|toast| !toast.is_expired(now));
        before - self.items.len()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of toasts with the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.items.iter().filter(|t| t.severity == severity).count()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.items.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push("one", Severity::Info);
        let b = toasts.push("two", Severity::Success);
        assert!(b > a);
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts.latest().map(|t| t.message.as_str()), Some("two"));
    }

    #[test]
    fn test_identical_toasts_are_not_deduplicated() {
        let mut toasts = Toasts::default();
        toasts.push("Generation advanced", Severity::Success);
        toasts.push("Generation advanced", Severity::Success);
        assert_eq!(toasts.count(Severity::Success), 2);
    }

    #[test]
    fn test_prune_expired_uses_each_toasts_own_deadline() {
        let start = Instant::now();
        let mut toasts = Toasts::new(Duration::from_millis(3000));
        toasts.push_at("first", Severity::Info, start);
        toasts.push_at("second", Severity::Warning, start + Duration::from_millis(1000));

        assert_eq!(toasts.prune_expired(start + Duration::from_millis(2999)), 0);
        assert_eq!(toasts.prune_expired(start + Duration::from_millis(3000)), 1);
        assert_eq!(toasts.latest().map(|t| t.message.as_str()), Some("second"));
        assert_eq!(toasts.prune_expired(start + Duration::from_millis(4000)), 1);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Danger.label(), "error");
        assert_eq!(Severity::Success.label(), "success");
    }
}
