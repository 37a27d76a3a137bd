//! Token Bank TUI - actor-based faucet front-end
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::time::Duration;

use anyhow::Context;
use chrono::Local;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use tokenbank_tui::config::AppConfig;
use tokenbank_tui::constants::{APP_NAME, APP_VERSION, LOG_FILE};
use tokenbank_tui::format_balance;
use tokenbank_tui::messages::ui_events::{key_to_ui_event, InputMode, Panel};
use tokenbank_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use tokenbank_tui::ui::{
    balance_status_color, button_line, centered_rect, cursor_column, fit_address, notification_style,
    panel_block, render_network_tabs, render_toast,
};
use tokenbank_tui::wallet::ConfiguredWallet;
use tokenbank_tui::{AppActor, NetworkActor};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Config problems are reported before the terminal is taken over
    let config = AppConfig::load().context("Failed to load configuration")?;
    tracing::info!(version = APP_VERSION, network = %config.default_network, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx, config.request_timeout());
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let wallet = ConfiguredWallet::new(config.wallet_address.clone());
    let app_actor = AppActor::new(&config, Box::new(wallet), net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Exiting");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, &current_state) {
                    let quit = event == UiEvent::Quit;
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(7), // Claim
            Constraint::Min(8),    // Balance
            Constraint::Length(3), // Faucet info
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, chunks[0]);
    draw_claim_panel(f, state, chunks[1]);
    draw_balance_panel(f, state, chunks[2]);
    draw_info_card(f, state, chunks[3]);
    draw_status_bar(f, state, chunks[4]);

    if state.is_busy() {
        draw_loading_overlay(f, area);
    }

    if let Some(notification) = &state.notification {
        render_toast(f, &notification.message, notification_style(notification.kind), area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(Line::from(vec![
            Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Cyan).bold()),
            Span::styled(format!("{} Token Faucet ", state.token_symbol), Style::default().fg(Color::Gray)),
        ]));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(rows[0]);

    f.render_widget(render_network_tabs(&state.networks, state.network), top[0]);

    let wallet_label = if state.wallet_connected {
        Span::styled(" Disconnect Wallet (w) ", Style::default().fg(Color::Black).bg(Color::Blue).bold())
    } else {
        Span::styled(" Connect Wallet (w) ", Style::default().fg(Color::White).bg(Color::Blue))
    };
    f.render_widget(Paragraph::new(Line::from(wallet_label)).alignment(Alignment::Right), top[1]);

    let connected = match &state.wallet_address {
        Some(address) if state.wallet_connected => Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::styled("Connected: ", Style::default().fg(Color::Gray)),
            Span::styled(
                fit_address(address, rows[1].width.saturating_sub(14) as usize),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        _ => Line::from(Span::styled("○ No wallet connected", Style::default().fg(Color::DarkGray))),
    };
    f.render_widget(Paragraph::new(connected), rows[1]);
}

fn draw_claim_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Claim;
    let is_editing = is_focused && state.input_mode == InputMode::Editing;

    let title = format!(" Request Your Tokens ({}) ", state.network.as_str());
    let block = panel_block(title, is_focused, is_editing);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(1), // Address
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Button + result
            Constraint::Min(0),
        ])
        .split(inner);

    let label = if state.address_locked {
        "Wallet address (locked to connected wallet)"
    } else {
        "Wallet address (e to edit)"
    };
    f.render_widget(Paragraph::new(label).style(Style::default().fg(Color::Gray)), rows[0]);

    let address_line = if state.address.is_empty() && !is_editing {
        Line::from(Span::styled("Your Wallet Address", Style::default().fg(Color::DarkGray)))
    } else if state.address_locked {
        Line::from(Span::styled(state.address.clone(), Style::default().fg(Color::Cyan)))
    } else {
        Line::from(state.address.clone())
    };
    let scroll = if is_editing {
        cursor_column(&state.address, state.cursor_position).saturating_sub(rows[1].width.saturating_sub(1))
    } else {
        0
    };
    f.render_widget(Paragraph::new(address_line).scroll((0, scroll)), rows[1]);

    if is_editing {
        let column = cursor_column(&state.address, state.cursor_position).saturating_sub(scroll);
        let cursor_x = rows[1].x.saturating_add(column).min(rows[1].right().saturating_sub(1));
        f.set_cursor_position(Position::new(cursor_x, rows[1].y));
    }

    let mut spans = button_line(
        &format!("Claim {} Token (c)", state.token_symbol),
        "Claiming...",
        state.claim_loading,
    )
    .spans;
    if let Some(message) = &state.last_claim_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Green)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), rows[3]);
}

fn draw_balance_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Balance;
    let block = panel_block(" Faucet Balance ".to_string(), is_focused, false);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    match &state.balance {
        Some(snapshot) => {
            let mut header = vec![Span::styled("Available Balance  ", Style::default().fg(Color::Gray))];
            if let Some(status) = state.balance_status {
                header.push(Span::styled(
                    format!(" {} ", status.label()),
                    Style::default().fg(Color::Black).bg(balance_status_color(status)),
                ));
            }
            lines.push(Line::from(header));
            lines.push(Line::from(vec![
                Span::styled(format_balance(&snapshot.value), Style::default().fg(Color::White).bold()),
                Span::styled(format!(" {}", state.token_symbol), Style::default().fg(Color::Gray)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Network: ", Style::default().fg(Color::Gray)),
                Span::styled(snapshot.network.as_str().to_uppercase(), Style::default().fg(Color::Cyan)),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "Last updated: {}",
                    snapshot.checked_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
                ),
                Style::default().fg(Color::DarkGray),
            )));
        }
        None if !state.balance_loading => {
            lines.push(Line::from(Span::styled(
                "No balance data available",
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(Span::styled(
                "Press b to check current faucet balance",
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => {}
    }

    lines.push(Line::from(""));
    let label = if state.balance.is_some() {
        "Refresh Balance (b)"
    } else {
        "Check Faucet Balance (b)"
    };
    lines.push(button_line(label, "Checking Balance...", state.balance_loading));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_info_card(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let line = Line::from(vec![
        Span::styled(format!("{}h", state.cooldown_hours), Style::default().bold()),
        Span::styled(" Cooldown    ", Style::default().fg(Color::Gray)),
        Span::styled(state.max_claim.to_string(), Style::default().bold()),
        Span::styled(format!(" Max {}    ", state.token_symbol), Style::default().fg(Color::Gray)),
        Span::styled("Powered by SUI", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center).block(block), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_busy() {
        " Processing... "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | arrows:move | Enter:claim "
    } else {
        " Tab:panel | n:network | w:wallet | e:edit | c:claim | b:balance | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_loading_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(40, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));
    let text = Paragraph::new("\nProcessing transaction...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(block);

    f.render_widget(Clear, popup_area);
    f.render_widget(text, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 TOKEN BANK - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch panels
   n / N              Next / previous network

 WALLET
   w                  Connect / disconnect wallet

 CLAIM
   e                  Edit address (wallet disconnected)
   c / Enter          Claim tokens

 BALANCE
   b / Enter          Check faucet balance

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
