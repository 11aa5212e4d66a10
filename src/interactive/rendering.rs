//! TUI rendering with ratatui
//!
//! Draws the board's rows (horizontal and built-off vertical ones), the round
//! timer and the message log.

use super::app::{App, MessageStyle};
use crate::board::{Axis, GameMode, Row, Tile, flip_scale};
use crate::core::FeedbackState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧱 WORDLE BUILD-OFF")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style for a tile, folding in its flip and fade
fn tile_style(tile: &Tile) -> Style {
    let base = match tile.feedback() {
        FeedbackState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        FeedbackState::WrongSpot => Style::default().fg(Color::Black).bg(Color::Yellow),
        FeedbackState::Incorrect => Style::default().fg(Color::White).bg(Color::DarkGray),
        FeedbackState::Locked => Style::default().fg(Color::Black).bg(Color::Cyan),
        FeedbackState::ValidChainWord => Style::default().fg(Color::Black).bg(Color::LightGreen),
        FeedbackState::Occupied => Style::default().fg(Color::White),
        FeedbackState::Empty => Style::default().fg(Color::DarkGray),
    }
    .add_modifier(Modifier::BOLD);

    if tile.alpha() < 0.5 {
        base.add_modifier(Modifier::DIM)
    } else {
        base
    }
}

fn tile_span(tile: &Tile, active: bool) -> Span<'static> {
    // Edge-on halfway through the flip
    let text = if flip_scale(tile.reveal_progress()) < 0.3 || tile.alpha() <= 0.0 {
        " ─ ".to_string()
    } else {
        format!(" {} ", tile.letter().map_or('·', |c| c.to_ascii_uppercase()))
    };
    let style = if active {
        tile_style(tile).add_modifier(Modifier::UNDERLINED)
    } else {
        tile_style(tile)
    };
    Span::styled(text, style)
}

fn row_spans(app: &App, row: &Row, active_column: Option<usize>) -> Vec<Span<'static>> {
    row.tiles()
        .iter()
        .enumerate()
        .filter_map(|(i, &id)| {
            app.board
                .tile(id)
                .map(|tile| tile_span(tile, active_column == Some(i)))
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let cursor = app.board.cursor();
    let active = app.board.active_row().map(Row::id);
    let mut lines = Vec::new();

    for row in app.board.rows() {
        let active_column = (Some(row.id()) == active).then_some(cursor.column);
        let spans = row_spans(app, row, active_column);
        match row.axis() {
            Axis::Horizontal => {
                lines.push(Line::from(spans));
                lines.push(Line::from(""));
            }
            Axis::Vertical => {
                lines.extend(spans.into_iter().map(|span| Line::from(vec![span])));
                lines.push(Line::from(""));
            }
        }
    }

    if app.board.is_invalid_word_visible() {
        lines.push(Line::from(Span::styled(
            "Not in word list",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let title = match app.board.mode() {
        GameMode::Standard => " Board ".to_string(),
        GameMode::BuildOff => " Build-off ".to_string(),
        GameMode::WordChain {
            last_letter,
            accepted,
        } => format!(
            " Word chain: {accepted}/{} | next starts with {} ",
            app.board.config().chain_rows,
            last_letter.to_ascii_uppercase()
        ),
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_timer(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_timer(f: &mut Frame, app: &App, area: Rect) {
    let host = app.board.host();
    let block = Block::default()
        .title(" Round Timer ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if !host.timer_visible {
        f.render_widget(block, area);
        return;
    }

    let elapsed = app.board.round_elapsed();
    let limit = app.board.config().timings.time_warning_after;
    let ratio = if limit > 0.0 {
        f64::from((elapsed / limit).clamp(0.0, 1.0))
    } else {
        1.0
    };
    let color = if host.time_warning {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{elapsed:.1}s | guesses: {}", host.timer_flips));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .board
        .host()
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.board.mode())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}% | Chain words: {}",
        app.stats.total_rounds,
        app.stats.win_rate(),
        app.stats.chain_words
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.last_outcome.is_some() {
        "Esc: Quit | Ctrl-N: New Word | Ctrl-R: Try Again"
    } else {
        "Esc: Quit | Enter: Submit | Ctrl-N: New | Ctrl-R: Retry"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
