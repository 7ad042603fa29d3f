//! Terminal event loop.

use std::io::{Stdout, stdout};
use std::time::Duration;

use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::config::AppConfig;
use crate::country::CountryProvider;
use crate::error::Result;
use crate::shell::AppShell;

type CountryResult = Result<Vec<String>>;

/// Run the picker until the user quits. Returns each instance's label and
/// final selection.
///
/// Country names are fetched on a background task while the UI is already
/// interactive.
pub async fn run(
    config: &AppConfig,
    provider: Box<dyn CountryProvider>,
) -> Result<Vec<(String, Vec<String>)>> {
    let (tx, rx) = oneshot::channel::<CountryResult>();
    tokio::spawn(async move {
        tracing::debug!(provider = provider.name(), "fetching countries");
        let result = provider.fetch_country_names().await;
        let _ = tx.send(result);
    });

    let mut shell = AppShell::new(config);

    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture,
        crossterm::event::EnableBracketedPaste,
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_loop(&mut terminal, &mut shell, rx);

    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::event::DisableMouseCapture,
        crossterm::event::DisableBracketedPaste,
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(shell.summary())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    shell: &mut AppShell,
    rx: oneshot::Receiver<CountryResult>,
) -> Result<()> {
    let mut pending = Some(rx);
    loop {
        if let Some(rx) = pending.as_mut() {
            match rx.try_recv() {
                Ok(Ok(names)) => {
                    shell.set_countries(names);
                    pending = None;
                }
                Ok(Err(error)) => {
                    shell.countries_failed(&error);
                    pending = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    tracing::warn!("country fetch task ended without a result");
                    pending = None;
                }
            }
        }

        terminal.draw(|frame| frame.render_widget(&*shell, frame.area()))?;
        // Scroll requests apply once the frame they were made against is on screen.
        if shell.settle() {
            terminal.draw(|frame| frame.render_widget(&*shell, frame.area()))?;
        }

        if shell.should_quit() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))? {
            shell.handle_event(event::read()?);
        }
    }
}
