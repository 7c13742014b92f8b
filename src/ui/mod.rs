//! View composition.
//!
//! ```text
//! ┌ Wallet Connection ──────────────┐┌ Activity Console ───────────────┐
//! │ CONNECTED WALLET                ││ [12:00:03] ✓ Success! ...       │
//! │ TOTAL BALANCE                   ││ [12:00:01] ➜ Initiating ...     │
//! │ Send SOL · recipient · amount   ││                                 │
//! └─────────────────────────────────┘└─────────────────────────────────┘
//!  key hints
//! ```
//!
//! Rendering is a pure function of [`AppState`] plus [`ViewState`].

pub mod clipboard;
pub mod runtime;
pub mod theme;

use crate::app::{AppState, ConnectionState, EventLog, FormPhase, TransferForm, ValidatedTransfer};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};
use solana_sdk::pubkey::Pubkey;
use std::time::Instant;
use theme::Theme;

/// Form input that receives typed characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Recipient,
    Amount,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Recipient => Field::Amount,
            Field::Amount => Field::Recipient,
        }
    }
}

/// View-local state that never affects the wallet session.
#[derive(Debug, Default)]
pub struct ViewState {
    pub focus: Field,
    /// Rows scrolled past the newest console entry
    pub log_scroll: u16,
    /// "Copied!" stays next to the address until then
    pub copied_until: Option<Instant>,
}

impl ViewState {
    /// Drop the copy indicator once its time is up.
    pub fn expire(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }
}

pub fn render(frame: &mut Frame, state: &AppState, view: &ViewState, theme: &Theme) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(12), Constraint::Length(1)]).areas(frame.area());
    let [wallet_area, console_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);

    render_wallet_panel(frame, wallet_area, state, view, theme);
    render_activity_console(frame, console_area, &state.log, view.log_scroll, theme);
    render_key_hints(frame, footer, state, theme);

    if state.form.phase() == FormPhase::AwaitingConfirmation {
        if let Some(transfer) = state.form.pending() {
            render_confirmation(frame, transfer, theme);
        }
    }
}

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(title, theme.title()))
}

fn render_wallet_panel(frame: &mut Frame, area: Rect, state: &AppState, view: &ViewState, theme: &Theme) {
    let lines = match (state.session.connection_state(), state.session.address()) {
        (ConnectionState::Connected, Some(address)) => connected_lines(state, address, view, theme),
        (ConnectionState::Connecting, _) => vec![
            Line::raw(""),
            Line::styled(
                "  Waiting for passkey authentication...",
                theme.muted().add_modifier(Modifier::ITALIC),
            ),
        ],
        _ => vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled("  ◉ ", theme.key()),
                Span::styled("Log in with Passkey", theme.title()),
            ]),
            Line::raw(""),
            Line::styled(format!("  {}", state.network.name()), theme.muted()),
        ],
    };

    let widget = Paragraph::new(lines)
        .block(panel(" Wallet Connection ", theme))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn connected_lines<'a>(state: &'a AppState, address: Pubkey, view: &ViewState, theme: &Theme) -> Vec<Line<'a>> {
    let balance = match state.session.balance_in_sol() {
        Some(sol) => format!("{:.4}", sol),
        None => "...".to_string(),
    };

    let mut address_line = Line::styled(address.to_string(), theme.text());
    if view.copied_until.is_some() {
        address_line.push_span(Span::styled("  Copied!", Style::default().fg(theme.success)));
    }

    let mut lines = vec![
        Line::styled("CONNECTED WALLET", theme.muted()),
        address_line,
        Line::raw(""),
        Line::styled("TOTAL BALANCE", theme.muted()),
        Line::from(vec![
            Span::styled(balance, theme.title()),
            Span::styled(" SOL", theme.muted()),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled(format!("Send SOL ({})", state.network.name()), theme.title()),
            Span::raw("  "),
            Span::styled("REAL TRANSFER", theme.key()),
        ]),
        Line::raw(""),
    ];

    lines.extend(form_lines(&state.form, view, theme));
    lines
}

fn form_lines<'a>(form: &'a TransferForm, view: &ViewState, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::styled("Recipient Address", theme.label()),
        input_line(form.recipient(), "Enter Solana Address", view.focus == Field::Recipient, form.is_editable(), theme),
        Line::styled("Amount (SOL)", theme.label()),
        input_line(form.amount(), "0.00", view.focus == Field::Amount, form.is_editable(), theme),
        Line::raw(""),
    ];

    if let Some(error) = form.validation_error() {
        lines.push(Line::styled(format!("⚠ {}", error), Style::default().fg(theme.error)));
    }

    let submit = match form.phase() {
        FormPhase::Submitting => Line::styled("⟳ Submitting...", theme.key()),
        _ if form.can_review() => Line::from(vec![
            Span::styled("[Enter] ", theme.key()),
            Span::styled("Review & Send →", theme.title()),
        ]),
        _ => Line::styled("[Enter] Review & Send →", theme.muted()),
    };
    lines.push(submit);
    lines
}

fn input_line<'a>(value: &'a str, placeholder: &'a str, focused: bool, editable: bool, theme: &Theme) -> Line<'a> {
    let marker = if focused && editable {
        Span::styled("▶ ", theme.key())
    } else {
        Span::raw("  ")
    };

    let mut spans = vec![marker];
    if value.is_empty() {
        spans.push(Span::styled(placeholder, theme.muted()));
    } else {
        spans.push(Span::styled(value, theme.text()));
    }
    if focused && editable {
        spans.push(Span::styled("▏", theme.key()));
    }
    Line::from(spans)
}

fn render_activity_console(frame: &mut Frame, area: Rect, log: &EventLog, scroll: u16, theme: &Theme) {
    let block = panel(" Activity Console ", theme);

    if log.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                "Waiting for user interaction...",
                theme.muted().add_modifier(Modifier::ITALIC),
            ),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let [content_area, scrollbar_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let lines: Vec<Line> = log
        .newest_first()
        .map(|entry| {
            Line::from(vec![
                Span::styled(format!("[{}] ", entry.timestamp), theme.muted()),
                Span::styled(
                    format!("{}{}", entry.kind.prefix(), entry.message),
                    theme.log_style(entry.kind),
                ),
            ])
        })
        .collect();

    // Rows after wrapping
    let width = content_area.width.max(1) as usize;
    let content_len: usize = lines.iter().map(|line| line.width().max(1).div_ceil(width)).sum();
    let view_height = content_area.height.max(1) as usize;
    let scroll = (scroll as usize).min(content_len.saturating_sub(view_height));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(widget, content_area);

    let mut scrollbar_state = ScrollbarState::new(content_len)
        .position(scroll)
        .viewport_content_length(view_height);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight).style(theme.muted()),
        scrollbar_area,
        &mut scrollbar_state,
    );
}

fn render_key_hints(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hints: &[(&str, &str)] = if state.form.phase() == FormPhase::AwaitingConfirmation {
        &[("Enter", "Sign"), ("Esc", "Cancel")]
    } else {
        match state.session.connection_state() {
            ConnectionState::Disconnected => &[("Enter", "Log in"), ("Esc", "Quit")],
            ConnectionState::Connecting => &[("Esc", "Quit")],
            ConnectionState::Connected => &[
                ("Tab", "Next field"),
                ("Enter", "Review"),
                ("^Y", "Copy address"),
                ("^R", "Refresh"),
                ("PgUp/PgDn", "Scroll log"),
                ("^D", "Disconnect"),
                ("^C", "Quit"),
            ],
        }
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" [{}] ", key), theme.key()),
                Span::styled(*action, theme.muted()),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_confirmation(frame: &mut Frame, transfer: &ValidatedTransfer, theme: &Theme) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::styled("AMOUNT", theme.muted()),
        Line::from(vec![
            Span::styled(transfer.amount.as_str(), theme.title()),
            Span::styled(" SOL", theme.muted()),
        ]),
        Line::raw(""),
        Line::styled("TO", theme.muted()),
        Line::styled(transfer.recipient.to_string(), theme.text()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Network Fee  ", theme.label()),
            Span::styled("Sponsored (Free)", Style::default().fg(theme.success)),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Enter] ", theme.key()),
            Span::styled("Sign Transaction", theme.title()),
            Span::raw("    "),
            Span::styled("[Esc] ", theme.key()),
            Span::styled("Cancel", theme.label()),
        ]),
    ];

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_focused))
                .title(Span::styled(" Confirm Transfer ", theme.title())),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
