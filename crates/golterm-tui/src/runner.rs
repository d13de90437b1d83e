//! Main TUI runner - entry point and event loop

use golterm_api::GameApi;
use golterm_app::message::Message;
use golterm_app::{Engine, UiMode};
use golterm_core::prelude::*;

use crate::event::{self, TerminalEvent};
use crate::widgets::GridGeometry;
use crate::{render, terminal};

/// Run the TUI until the user quits or a termination signal arrives
pub async fn run<A>(mut engine: Engine<A>) -> Result<()>
where
    A: GameApi + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("{}; cells can still be toggled from the keyboard", e);
    }

    engine.install_signal_handler();
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    if let Err(e) = terminal::disable_mouse_capture() {
        warn!("{}", e);
    }
    ratatui::restore();

    info!("golterm exited");
    result
}

/// Main event loop
fn run_loop<A>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<A>) -> Result<()>
where
    A: GameApi + Sync + 'static,
{
    let mut geometry: Option<GridGeometry> = None;

    while !engine.should_quit() {
        // Results from API tasks, the auto-play timer and signals
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| geometry = render::view(frame, &engine.state))?;

        match event::poll()? {
            Some(TerminalEvent::Message(message)) => engine.process_message(message),
            Some(TerminalEvent::Click { column, row }) => {
                if let Some(message) = click_message(engine.state.ui_mode, geometry, column, row) {
                    engine.process_message(message);
                }
            }
            None => {}
        }
    }

    Ok(())
}

/// A click toggles the cell under it, only while no prompt is open
fn click_message(
    mode: UiMode,
    geometry: Option<GridGeometry>,
    column: u16,
    row: u16,
) -> Option<Message> {
    if mode != UiMode::Normal {
        return None;
    }
    let (cell_row, cell_col) = geometry?.cell_at(column, row)?;
    debug!("Click at ({}, {}) hits cell ({}, {})", column, row, cell_row, cell_col);
    Some(Message::ToggleCell {
        row: cell_row,
        col: cell_col,
    })
}
