use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Stylize,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unixtime_core::Period;
use unixtime_core::app::{CopyTarget, TimestampView};

use super::model::{TuiModel, ViewMode};

const FOOTNOTE: &str = "UNIX timestamps shown here are in seconds since 1970-01-01 UTC.";

/// The View component of MVU - responsible for rendering the model
pub struct TuiView;

impl TuiView {
    /// Render the entire TUI based on the current model state
    pub fn render(model: &TuiModel, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(0),    // Main content
                Constraint::Length(3), // Key hints / input bar
            ])
            .split(frame.area());

        Self::render_title_bar(model, frame, chunks[0]);

        match model.mode {
            ViewMode::Clock => Self::render_clock(model, frame, chunks[1]),
            ViewMode::Help => Self::render_help(frame, chunks[1]),
        }

        Self::render_status_bar(model, frame, chunks[2]);
    }

    fn render_title_bar(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let indicator = if model.projection.paused { " [PAUSED]" } else { " [LIVE]" };
        let title = format!("UNIX Time Helper{}", indicator);

        let title_paragraph = Paragraph::new(title)
            .style(Style::default().fg(Color::White).bg(Color::Blue))
            .alignment(Alignment::Center);

        frame.render_widget(title_paragraph, area);
    }

    fn render_clock(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let card_height = if model.show_utc { 5 } else { 4 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(card_height), // Current
                Constraint::Length(4),           // Period selector
                Constraint::Length(card_height), // Future
                Constraint::Min(0),
            ])
            .split(area);

        Self::render_timestamp_card(
            model,
            frame,
            chunks[0],
            "Current UNIX time",
            CopyTarget::Current,
        );
        Self::render_period_selector(model, frame, chunks[1]);
        Self::render_timestamp_card(
            model,
            frame,
            chunks[2],
            "Future UNIX time",
            CopyTarget::Future,
        );

        let footnote = Paragraph::new(FOOTNOTE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(footnote, chunks[3]);
    }

    fn render_timestamp_card(model: &TuiModel, frame: &mut Frame, area: Rect, title: &str, target: CopyTarget) {
        let view: &TimestampView = model.projection.view(target);

        let mut headline = vec![Span::styled(
            view.seconds.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        if model.is_copied(target) {
            headline.push(Span::styled("  ✓ copied", Style::default().fg(Color::Green)));
        }

        let mut lines = vec![
            Line::from(headline),
            Line::from(format!("{}: {}", view.zone_label, view.local)).fg(Color::Gray),
        ];
        if model.show_utc {
            lines.push(Line::from(format!("UTC: {}", view.utc)).fg(Color::Gray));
        }

        let card = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string()));
        frame.render_widget(card, area);
    }

    fn render_period_selector(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let selected = model.projection.period;

        let mut spans = Vec::with_capacity(Period::ALL.len() * 2);
        for period in Period::ALL {
            let style = if period == selected {
                Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", period.code()), style));
            spans.push(Span::raw(" "));
        }

        let lines = vec![
            Line::from(spans),
            Line::from(format!("{} - {}", selected.label(), model.projection.adding_text())).fg(Color::DarkGray),
        ];

        let selector = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Select period to add"));
        frame.render_widget(selector, area);
    }

    fn render_help(frame: &mut Frame, area: Rect) {
        let key = |k: &'static str| Span::styled(format!("{:>12}  ", k), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        let rows = [
            ("p", "Pause the live clock"),
            ("r / Space", "Resume the live clock"),
            ("R / 0", "Reset: 24 hours, live, current time"),
            ("n", "Freeze at the current time"),
            ("e / Enter", "Edit the base time (YYYY-MM-DDTHH:MM:SS)"),
            ("← → / h l", "Choose a shorter / longer period"),
            ("c", "Copy the current timestamp"),
            ("f", "Copy the future timestamp"),
            ("?", "Toggle this help"),
            ("q / Esc", "Quit"),
        ];

        let mut lines = vec![Line::from(""), Line::from(Span::styled("Keys", Style::default().add_modifier(Modifier::BOLD))), Line::from("")];
        lines.extend(rows.iter().map(|(k, desc)| Line::from(vec![key(*k), Span::raw(*desc)])));

        let help = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Help"));
        frame.render_widget(help, area);
    }

    fn render_status_bar(model: &TuiModel, frame: &mut Frame, area: Rect) {
        if model.is_editing() {
            let hint = if model.input.invalid { "  (invalid, ignored)" } else { "" };
            let input = Paragraph::new(Line::from(vec![
                Span::raw(model.input.text.clone()),
                Span::styled("▏", Style::default().fg(Color::Yellow)),
                Span::styled(hint, Style::default().fg(Color::Red)),
            ]))
            .block(Block::default().borders(Borders::ALL).title("Base time (Enter/Esc to close)"));
            frame.render_widget(input, area);
            return;
        }

        let pause_or_resume = if model.projection.paused {
            vec!["r".fg(Color::Yellow).add_modifier(Modifier::BOLD), " resume, ".into()]
        } else {
            vec!["p".fg(Color::Yellow).add_modifier(Modifier::BOLD), " pause, ".into()]
        };

        let mut spans = pause_or_resume;
        spans.extend([
            "R".fg(Color::Yellow).add_modifier(Modifier::BOLD),
            " reset, ".into(),
            "←→".fg(Color::Yellow).add_modifier(Modifier::BOLD),
            " period, ".into(),
            "e".fg(Color::Yellow).add_modifier(Modifier::BOLD),
            " edit, ".into(),
            "c/f".fg(Color::Yellow).add_modifier(Modifier::BOLD),
            " copy, ".into(),
            "?".fg(Color::Yellow).add_modifier(Modifier::BOLD),
            " help, ".into(),
            "q".fg(Color::Yellow).add_modifier(Modifier::BOLD),
            " quit".into(),
        ]);

        let footer = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(footer, area);
    }
}
