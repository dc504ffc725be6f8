//! TUI rendering with ratatui
//!
//! Board, keyboard and family-split views for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Letter;
use crate::output::formatters::{letter_list, spaced};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("😈 EVIL HANGMAN")
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Word
            Constraint::Percentage(55), // Keyboard
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let color = match app.input_mode {
        InputMode::GameOver => Color::Green,
        InputMode::Guessing => Color::Yellow,
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced(session.revealed_solution()).to_uppercase(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!(
            "Incorrect: {}",
            letter_list(session.history().incorrect())
        )),
        Line::from(format!(
            "Remaining letters: {}",
            session.remaining_letters()
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();

    let rows = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .filter_map(|c| Letter::new(c).ok())
                .map(|letter| {
                    let style = if history.incorrect().contains(&letter) {
                        Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
                    } else if history.contains(letter) {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Span::styled(format!(" {} ", letter.as_char().to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );

    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Candidates gauge
            Constraint::Percentage(40), // Last split
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_last_split(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.candidate_count();
    let total = app.starting_candidates.max(1);
    let progress_pct = ((remaining as f64 / total as f64) * 100.0).min(100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Still In Play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(progress_pct)
        .label(format!("{remaining}/{total}"));

    f.render_widget(gauge, area);
}

fn render_last_split(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.last_guess {
        Some(outcome) => vec![
            Line::from(vec![
                Span::raw("Guess: "),
                Span::styled(
                    outcome.letter.as_char().to_ascii_uppercase().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Families: {}", outcome.family_count)),
            Line::from(format!("Kept:     {}", outcome.pattern)),
            Line::from(format!("Size:     {} words", outcome.family_size)),
        ],
        None => vec![Line::from("No guesses yet")],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Last Split ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
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
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Avg misses: {:.1}",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.total_misses as f64 / app.stats.total_games as f64
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let length_text = format!("Word length: {}", app.session.word_length());
    let length = Paragraph::new(length_text).alignment(Alignment::Center);
    f.render_widget(length, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "Enter: New Game | Esc: Quit",
        InputMode::Guessing => "a-z: Guess | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
