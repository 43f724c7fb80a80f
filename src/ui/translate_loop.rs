//! The interactive translator's event loop.
//!
//! Terminal input and scheduler events are multiplexed on one task, so the
//! session is only ever touched from here.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use ratatui::crossterm::event;
use tokio::sync::mpsc;
use tracing::debug;

use crate::core::backend::TranslationBackend;
use crate::core::scheduler::SchedulerEvent;
use crate::ui::lifecycle::{restore_terminal, setup_terminal, TranslatorTerminal};
use crate::ui::renderer::ui;
pub use crate::ui::translator::TranslatorOptions;
use crate::ui::translator::{TranslatorApp, UiEvent};

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

pub async fn run_translator(
    backend: Arc<dyn TranslationBackend>,
    options: TranslatorOptions,
) -> Result<(), Box<dyn Error>> {
    let (mut app, mut scheduler_rx) = TranslatorApp::new(backend, options);
    let mut terminal = setup_terminal()?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    let result = drive(&mut terminal, &mut app, &mut event_rx, &mut scheduler_rx).await;

    event_reader_handle.abort();
    app.shutdown();
    restore_terminal(&mut terminal)?;
    result
}

async fn drive(
    terminal: &mut TranslatorTerminal,
    app: &mut TranslatorApp,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    scheduler_rx: &mut mpsc::UnboundedReceiver<SchedulerEvent>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(f, &*app))?;

    loop {
        let request_redraw = tokio::select! {
            Some(event) = event_rx.recv() => app.handle_ui_event(event),
            Some(event) = scheduler_rx.recv() => app.handle_scheduler_event(event),
            else => break,
        };

        if app.exit_requested() {
            debug!("exit requested");
            break;
        }

        if request_redraw {
            terminal.draw(|f| ui(f, &*app))?;
        }
    }

    Ok(())
}
