use crate::app::{action::Action, state::SearchTicket};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Owns the one pending search timer. Scheduling a new one aborts the old.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn schedule(&mut self, ticket: SearchTicket, delay: Duration, tx: mpsc::Sender<Action>) {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Action::DebounceElapsed(ticket)).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
