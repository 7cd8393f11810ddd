use crate::app::{
    action::Action, command::Command, debounce::Debouncer, input::map_event_to_action, reducer,
    state::{AppState, SearchTicket},
    subscriptions::Subscriptions,
    ui,
};
use crate::domain::search::SearchBackend;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(120);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    backend: Arc<dyn SearchBackend>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, backend, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    backend: Arc<dyn SearchBackend>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    let mut debouncer = Debouncer::default();
    let mut subscriptions = Subscriptions::new(app_state.config.overlay.reposition_interval());

    // Seed the viewport so the first click is hit-tested correctly.
    let size = terminal.size()?;
    reducer::update(&mut app_state, Action::Resize(size.width, size.height));

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state, &subscriptions)
            },

            // Timers and search responses
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, &mut debouncer, backend.clone(), action_tx.clone());
            }

            // Listeners and the reposition ticker follow the overlay.
            subscriptions.sync(app_state.search.overlay.is_open(), &action_tx);
        }
    }

    tracing::info!("event loop stopped");
    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    debouncer: &mut Debouncer,
    backend: Arc<dyn SearchBackend>,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::ScheduleSearch { ticket, delay } => debouncer.schedule(ticket, delay, tx),
        Command::CancelPendingSearch => debouncer.cancel(),
        Command::RunSearch {
            ticket,
            query,
            limit,
        } => {
            debouncer.cancel();
            spawn_search(ticket, query, limit, backend, tx);
        }
    }
}

fn spawn_search(
    ticket: SearchTicket,
    query: String,
    limit: usize,
    backend: Arc<dyn SearchBackend>,
    tx: mpsc::Sender<Action>,
) {
    tokio::spawn(async move {
        tracing::debug!(%ticket, %query, limit, "running search");
        let outcome = backend
            .search(&query, limit)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(Action::SearchFinished(ticket, outcome)).await;
    });
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
