use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Append-only channel of human-readable progress lines
///
/// The sink is cloned into every task of a run. With no receiver attached the
/// messages only reach `tracing`.
#[derive(Debug, Clone, Default)]
pub struct ProgressSink {
    tx: Option<UnboundedSender<String>>,
}

impl ProgressSink {
    /// Creates a sink and the receiver its messages arrive on
    pub fn channel() -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// A sink that forwards to `tracing` only
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Emits one progress line
    ///
    /// A dropped receiver is not an error; the line still goes to the log.
    pub fn emit(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("{}", message);
        if let Some(tx) = &self.tx {
            let _ = tx.send(message);
        }
    }
}
