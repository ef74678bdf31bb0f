use crate::ui::app::{App, PendingFact};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive loop until the user quits.
///
/// Fact lookups run as tasks on `handle`; their completions come back
/// through the event channel, so input stays responsive meanwhile.
pub fn run(mut app: App, tick_rate: Duration, handle: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(tick_rate_ms = tick_rate.as_millis() as u64, "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::FetchFact(pending) = handle_key(&mut app, key) {
                    spawn_fact(&handle, pending, events.sender());
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::FactResolved(completion)) => {
                app.complete_fact(completion);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}

fn spawn_fact(handle: &Handle, pending: PendingFact, tx: mpsc::Sender<AppEvent>) {
    handle.spawn(async move {
        let completion = pending.resolve().await;
        // The loop may already be gone; nothing left to update then.
        let _ = tx.send(AppEvent::FactResolved(completion));
    });
}
