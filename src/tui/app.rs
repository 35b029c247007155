//! Terminal event loop
//!
//! A single cooperative loop owns the controller. Terminal events come from
//! a reader thread, lookup results from spawned tasks, and both arrive on the
//! same channel so the loop never blocks on either.

use crate::fetcher::ProfileClient;
use crate::session::{run_command, Command, Envelope, Key, SessionController};
use crate::tui::spinner::Spinner;
use crate::tui::theme::Theme;
use crate::tui::view::draw;
use crate::ProfileError;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Everything the event loop reacts to
#[derive(Debug)]
enum AppEvent {
    Terminal(Event),
    Completion(Envelope),
    Tick,
}

/// Runs the interactive session until the user quits
///
/// The terminal is switched to the alternate screen for the duration and
/// restored on every exit path, including panics.
///
/// # Errors
///
/// Returns an error if terminal setup or drawing fails
pub async fn run(client: ProfileClient, theme: Theme) -> Result<(), ProfileError> {
    enable_raw_mode()?;
    install_panic_hook();

    let result = run_on_screen(client, theme).await;

    restore_terminal()?;
    result
}

async fn run_on_screen(client: ProfileClient, theme: Theme) -> Result<(), ProfileError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, client, theme).await;
    terminal.show_cursor()?;
    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    client: ProfileClient,
    theme: Theme,
) -> Result<(), ProfileError> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_input_reader(tx.clone());

    let mut controller = SessionController::new(theme.clone());
    let (width, height) = crossterm::terminal::size()?;
    controller.resize(width, height);

    let mut spinner = Spinner::default();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    loop {
        terminal.draw(|frame| draw(frame, &controller, &theme, spinner.frame()))?;

        let event = tokio::select! {
            Some(event) = rx.recv() => event,
            _ = ticker.tick() => AppEvent::Tick,
        };

        let command = match event {
            AppEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                controller.handle_key(Key::from(key))
            }
            AppEvent::Terminal(Event::Resize(width, height)) => {
                controller.resize(width, height);
                None
            }
            AppEvent::Terminal(_) => None,
            AppEvent::Completion(envelope) => controller.handle_completion(envelope),
            AppEvent::Tick => {
                if controller.state().is_loading() {
                    spinner.tick();
                }
                None
            }
        };

        match command {
            Some(Command::Quit) => {
                tracing::info!("Quit requested");
                break;
            }
            Some(command) => dispatch(command, client.clone(), tx.clone()),
            None => {}
        }
    }

    Ok(())
}

/// Runs a command on its own task and posts the result back to the loop
fn dispatch(command: Command, client: ProfileClient, tx: UnboundedSender<AppEvent>) {
    tracing::debug!("Dispatching {:?}", command);
    tokio::spawn(async move {
        if let Some(envelope) = run_command(&client, command).await {
            // The loop may already be gone after a quit
            let _ = tx.send(AppEvent::Completion(envelope));
        }
    });
}

/// Reads terminal events on a plain thread; `event::read` blocks
fn spawn_input_reader(tx: UnboundedSender<AppEvent>) {
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(event) => {
                if tx.send(AppEvent::Terminal(event)).is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::error!("Terminal input failed: {}", e);
                break;
            }
        }
    });
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}
