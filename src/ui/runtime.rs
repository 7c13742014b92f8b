//! Terminal event loop.
//!
//! Keys become [`Intent`]s, the app hands back jobs, and jobs run on the
//! tokio runtime. Their results come back through a channel and are applied
//! between frames so the app is only ever touched from this loop.

use super::{clipboard, render, theme::Theme, Field, ViewState};
use crate::app::{AppState, ConnectionState, FormPhase, Intent, Job, WalletApp, WalletEvent};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io, panic, thread,
    time::{Duration, Instant},
};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, info, warn};

const INPUT_POLL: Duration = Duration::from_millis(100);
const COPIED_FLASH: Duration = Duration::from_secs(2);
const LOG_PAGE: u16 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    CopyAddress,
    Dispatch(Intent),
}

/// Translate a key press into an action for the current screen.
pub fn map_key(key: KeyEvent, state: &AppState, view: &mut ViewState) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let newest = u16::try_from(state.log.len().saturating_sub(1)).unwrap_or(u16::MAX);
    match key.code {
        KeyCode::PageDown => {
            view.log_scroll = view.log_scroll.saturating_add(LOG_PAGE).min(newest);
            return None;
        }
        KeyCode::PageUp => {
            view.log_scroll = view.log_scroll.saturating_sub(LOG_PAGE);
            return None;
        }
        KeyCode::Home => {
            view.log_scroll = 0;
            return None;
        }
        _ => {}
    }

    if state.form.phase() == FormPhase::AwaitingConfirmation {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('y') => Some(Action::Dispatch(Intent::ConfirmTransfer)),
            KeyCode::Esc | KeyCode::Char('n') => Some(Action::Dispatch(Intent::CancelReview)),
            _ => None,
        };
    }

    match state.session.connection_state() {
        ConnectionState::Disconnected => match key.code {
            KeyCode::Enter | KeyCode::Char('c') => Some(Action::Dispatch(Intent::Connect)),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        ConnectionState::Connecting => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        ConnectionState::Connected => map_connected_key(key, ctrl, state, view),
    }
}

fn map_connected_key(key: KeyEvent, ctrl: bool, state: &AppState, view: &mut ViewState) -> Option<Action> {
    if ctrl {
        return match key.code {
            KeyCode::Char('d') => Some(Action::Dispatch(Intent::Disconnect)),
            KeyCode::Char('y') => Some(Action::CopyAddress),
            KeyCode::Char('r') => Some(Action::Dispatch(Intent::RefreshBalance)),
            _ => None,
        };
    }

    let form = &state.form;
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            view.focus = view.focus.next();
            None
        }
        KeyCode::Enter if form.can_review() => Some(Action::Dispatch(Intent::Review)),
        KeyCode::Backspace if form.is_editable() => {
            let mut value = focused_value(state, view.focus).to_string();
            value.pop()?;
            Some(edit(view.focus, value))
        }
        KeyCode::Char(c) if form.is_editable() && accepts(view.focus, c) => {
            let mut value = focused_value(state, view.focus).to_string();
            value.push(c);
            Some(edit(view.focus, value))
        }
        _ => None,
    }
}

fn focused_value(state: &AppState, field: Field) -> &str {
    match field {
        Field::Recipient => state.form.recipient(),
        Field::Amount => state.form.amount(),
    }
}

/// Base58 addresses are alphanumeric; amounts are decimal SOL.
fn accepts(field: Field, c: char) -> bool {
    match field {
        Field::Recipient => c.is_ascii_alphanumeric(),
        Field::Amount => c.is_ascii_digit() || c == '.',
    }
}

fn edit(field: Field, value: String) -> Action {
    match field {
        Field::Recipient => Action::Dispatch(Intent::SetRecipient(value)),
        Field::Amount => Action::Dispatch(Intent::SetAmount(value)),
    }
}

fn spawn_jobs(jobs: Vec<Job>, tx: &UnboundedSender<WalletEvent>) {
    for job in jobs {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Some(event) = job.await {
                // The receiver only goes away on shutdown.
                let _ = tx.send(event);
            }
        });
    }
}

/// Raw mode and the alternate screen, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Best effort: every step runs even if an earlier one fails.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "failed to leave raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %err, "failed to leave alternate screen");
    }
}

/// Put the terminal back before the panic message is printed. Jobs run on
/// tokio worker threads and never own the terminal, so only a panic on the
/// UI thread restores it.
fn install_panic_hook() {
    let ui_thread = thread::current().id();
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if thread::current().id() == ui_thread {
            restore_terminal();
        }
        previous(info);
    }));
}

/// Take over the terminal and drive `app` until the user quits.
pub async fn run(app: WalletApp) -> anyhow::Result<()> {
    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    run_app(&mut terminal, app).await
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: WalletApp,
) -> anyhow::Result<()> {
    let theme = Theme::default();
    let mut view = ViewState::default();
    let (tx, mut rx) = mpsc::unbounded_channel::<WalletEvent>();

    info!(network = app.state().network.name(), "wallet console started");

    loop {
        while let Ok(event) = rx.try_recv() {
            let jobs = app.handle(event);
            spawn_jobs(jobs, &tx);
        }

        view.expire(Instant::now());
        terminal.draw(|frame| render(frame, app.state(), &view, &theme))?;

        if !event::poll(INPUT_POLL)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        match map_key(key, app.state(), &mut view) {
            Some(Action::Quit) => {
                info!("wallet console closed");
                return Ok(());
            }
            Some(Action::CopyAddress) => {
                if let Some(address) = app.copy_address() {
                    match clipboard::copy_to_clipboard(&mut io::stdout(), &address.to_string()) {
                        Ok(()) => view.copied_until = Some(Instant::now() + COPIED_FLASH),
                        Err(err) => warn!(error = %err, "clipboard write failed"),
                    }
                }
            }
            Some(Action::Dispatch(intent)) => {
                debug!(?intent, "dispatch");
                let jobs = app.dispatch(intent);
                spawn_jobs(jobs, &tx);
            }
            None => {}
        }
    }
}
