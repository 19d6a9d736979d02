//! Output abstraction layer
//!
//! Status messages (warnings, free-text notifications, "no records") go
//! through [`OutputWriter`] so the same host code works for plain prompts
//! and for the TUI. Picker results themselves are printed by the binary on
//! stdout; status output never goes there.

use colored::Colorize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Trait for status output
///
/// # Examples
///
/// ```no_run
/// use pickr::ui::output::{OutputWriter, StderrWriter};
///
/// let output = StderrWriter::new();
/// output.success("Picked 3 items");
/// output.warning("Duplicate identifier: 7");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Clear all messages (for TUI status bars)
    fn clear(&self);
}

/// CLI implementation - colored messages on stderr
///
/// Stdout carries picker results, so everything here goes to stderr.
pub struct StderrWriter;

impl StderrWriter {
    /// Create a new stderr writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StderrWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StderrWriter {
    fn write(&self, message: &str) {
        eprintln!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    fn info(&self, message: &str) {
        eprintln!("{}", message.dimmed());
    }

    fn clear(&self) {
        // No-op for CLI
    }
}

/// Writer that drops everything (quiet mode)
pub struct NullWriter;

impl OutputWriter for NullWriter {
    fn write(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn clear(&self) {}
}

/// Write `message` to `output` at `level`
pub fn write_at(output: &dyn OutputWriter, level: MessageLevel, message: &str) {
    match level {
        MessageLevel::Normal => output.write(message),
        MessageLevel::Error => output.error(message),
        MessageLevel::Success => output.success(message),
        MessageLevel::Warning => output.warning(message),
        MessageLevel::Info => output.info(message),
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

type Buffer = Vec<(MessageLevel, String, Instant)>;

/// Buffered writer for the TUI status bar
///
/// Messages expire after a TTL. Clones share the same buffer, so a host
/// callback can write while the TUI renders.
///
/// # Examples
///
/// ```
/// use pickr::ui::output::{OutputWriter, StatusBarWriter};
///
/// let writer = StatusBarWriter::new();
/// writer.info("Free text \"xyz\" selected");
///
/// let (_, text) = writer.latest_message().unwrap();
/// assert_eq!(text, "Free text \"xyz\" selected");
/// ```
#[derive(Debug, Clone)]
pub struct StatusBarWriter {
    messages: Arc<Mutex<Buffer>>,
    ttl: Duration,
}

impl StatusBarWriter {
    /// Create a new status bar writer with default TTL (5 seconds)
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(5))
    }

    /// Create a new status bar writer with custom TTL
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    fn buffer(&self) -> MutexGuard<'_, Buffer> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Messages that haven't expired yet, oldest first
    #[must_use]
    pub fn recent_messages(&self) -> Vec<(MessageLevel, String)> {
        let now = Instant::now();
        self.buffer()
            .iter()
            .filter(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .map(|(level, msg, _)| (*level, msg.clone()))
            .collect()
    }

    /// The most recent unexpired message, if any
    #[must_use]
    pub fn latest_message(&self) -> Option<(MessageLevel, String)> {
        let now = Instant::now();
        self.buffer()
            .iter()
            .rev()
            .find(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .map(|(level, msg, _)| (*level, msg.clone()))
    }

    /// Unexpired messages written after `since`, oldest first
    #[must_use]
    pub fn messages_since(&self, since: Instant) -> Vec<(MessageLevel, String)> {
        let now = Instant::now();
        self.buffer()
            .iter()
            .filter(|(_, _, time)| *time > since && now.duration_since(*time) < self.ttl)
            .map(|(level, msg, _)| (*level, msg.clone()))
            .collect()
    }

    /// Count of unexpired messages
    #[must_use]
    pub fn message_count(&self) -> usize {
        let now = Instant::now();
        self.buffer()
            .iter()
            .filter(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .count()
    }

    fn add_message(&self, level: MessageLevel, message: String) {
        let mut messages = self.buffer();
        messages.push((level, message, Instant::now()));

        // Keep only the last 100 messages
        if messages.len() > 100 {
            messages.drain(0..50);
        }
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusBarWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message.to_string());
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message.to_string());
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message.to_string());
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message.to_string());
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message.to_string());
    }

    fn clear(&self) {
        self.buffer().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_writer_messages() {
        let writer = StatusBarWriter::new();

        writer.success("Test success");
        writer.error("Test error");
        writer.warning("Test warning");

        let messages = writer.recent_messages();
        assert_eq!(messages.len(), 3);

        assert_eq!(messages[0].0, MessageLevel::Success);
        assert_eq!(messages[0].1, "Test success");

        assert_eq!(messages[1].0, MessageLevel::Error);
        assert_eq!(messages[2].0, MessageLevel::Warning);
    }

    #[test]
    fn test_status_bar_writer_clear() {
        let writer = StatusBarWriter::new();

        writer.write("Message 1");
        writer.write("Message 2");
        assert_eq!(writer.message_count(), 2);

        writer.clear();
        assert_eq!(writer.message_count(), 0);
    }

    #[test]
    fn test_status_bar_writer_clones_share_buffer() {
        let writer = StatusBarWriter::new();
        let handle = writer.clone();

        handle.info("from callback");
        let latest = writer.latest_message().unwrap();
        assert_eq!(latest, (MessageLevel::Info, "from callback".to_string()));
    }

    #[test]
    fn test_status_bar_writer_ttl() {
        let writer = StatusBarWriter::with_ttl(Duration::from_millis(50));

        writer.write("Message");
        assert_eq!(writer.message_count(), 1);

        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(writer.message_count(), 0);
        assert!(writer.latest_message().is_none());
    }

    #[test]
    fn test_messages_since() {
        let writer = StatusBarWriter::new();
        writer.info("before");
        let mark = Instant::now();
        std::thread::sleep(Duration::from_millis(5));
        writer.warning("after");

        let later = writer.messages_since(mark);
        assert_eq!(later, [(MessageLevel::Warning, "after".to_string())]);
    }

    #[test]
    fn test_write_at_keeps_level() {
        let source = StatusBarWriter::new();
        source.info("picked");
        source.error("failed");

        let target = StatusBarWriter::new();
        for (level, message) in source.recent_messages() {
            write_at(&target, level, &message);
        }
        assert_eq!(target.recent_messages(), source.recent_messages());
    }

    #[test]
    fn test_status_bar_writer_bounded() {
        let writer = StatusBarWriter::new();
        for i in 0..150 {
            writer.write(&format!("msg {i}"));
        }
        assert!(writer.message_count() <= 100);
        assert_eq!(writer.latest_message().unwrap().1, "msg 149");
    }
}
