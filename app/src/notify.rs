use log::{error, info, warn};

/// Where the form reports to the user.
pub trait Notifier {
    /// Blocking message for a submit that was refused before anything was sent.
    fn alert(&mut self, message: &str);
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Writes every notification to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&mut self, message: &str) {
        warn!("{message}");
    }

    fn success(&mut self, message: &str) {
        info!("{message}");
    }

    fn error(&mut self, message: &str) {
        error!("{message}");
    }
}
