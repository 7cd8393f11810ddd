use crate::app::action::Action;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Terminal events the overlay reacts to only while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    Scroll,
    PointerDown,
}

/// Listeners and the reposition ticker that live exactly as long as the
/// overlay is open. Dropping this tears everything down.
#[derive(Debug)]
pub struct Subscriptions {
    interval: Duration,
    ticker: Option<JoinHandle<()>>,
    listeners: HashSet<Listener>,
}

impl Subscriptions {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            ticker: None,
            listeners: HashSet::new(),
        }
    }

    pub fn sync(&mut self, overlay_open: bool, tx: &mpsc::Sender<Action>) {
        if overlay_open {
            self.attach(tx);
        } else {
            self.detach();
        }
    }

    fn attach(&mut self, tx: &mpsc::Sender<Action>) {
        if self.ticker.is_none() {
            let tx = tx.clone();
            let period = self.interval;
            self.ticker = Some(tokio::spawn(async move {
                let mut ticker = tokio::time::interval(period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                loop {
                    ticker.tick().await;
                    if tx.send(Action::Reposition).await.is_err() {
                        break;
                    }
                }
            }));
            tracing::trace!("overlay subscriptions attached");
        }
        self.listeners.extend([Listener::Scroll, Listener::PointerDown]);
    }

    pub fn detach(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            tracing::trace!("overlay subscriptions detached");
        }
        self.listeners.clear();
    }

    pub fn is_listening(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    #[cfg(test)]
    fn is_active(&self) -> bool {
        self.ticker.is_some()
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.detach();
    }
}
