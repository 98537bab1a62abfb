use crate::prelude::*;

/// Transient user messages.
pub trait Notifier {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);
}

/// Sends the messages to the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn info(&self, message: &str) {
        info!("{message}");
    }

    fn warn(&self, message: &str) {
        warn!("{message}");
    }
}
