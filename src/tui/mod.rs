//! Terminal front-end for the party game.

mod app;
mod components;
mod screens;

use std::{
    io::{stdout, Stdout},
    path::Path,
    time::{Duration, Instant},
};

use app::App;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::time::sleep;
use tracing::info;

use crate::error::Result;

/// Redraw interval; keeps the countdown live without input.
const TICK: Duration = Duration::from_millis(50);

pub async fn run(data_dir: &Path) -> Result<()> {
    enable_raw_mode()?;
    stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    info!(data_dir = %data_dir.display(), "TUI started");
    let result = event_loop(&mut terminal, App::new(data_dir)).await;

    disable_raw_mode()?;
    stdout()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?;

    result
}

async fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    let mut event_stream = EventStream::new();

    while !app.should_exit {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| app.render(frame, now))?;

        tokio::select! {
            Some(Ok(event)) = event_stream.next() => {
                app.handle_event(&event, Instant::now());
            }
            () = sleep(TICK) => {}
        }
    }

    info!("TUI stopped");
    Ok(())
}
