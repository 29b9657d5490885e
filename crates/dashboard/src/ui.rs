//! Dashboard layout.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::{App, SliderId};
use crate::slider::Slider;

/// Draw the whole dashboard.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Temperature
            Constraint::Length(3), // Vibration
            Constraint::Length(3), // Verdict
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], app);
    draw_slider(
        frame,
        chunks[1],
        &app.temperature,
        app.selected == SliderId::Temperature,
    );
    draw_slider(
        frame,
        chunks[2],
        &app.vibration,
        app.selected == SliderId::Vibration,
    );
    draw_verdict(frame, chunks[3], app);
    draw_help(frame, chunks[5]);
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Predictive Maintenance Dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  model: {}", app.model_path()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, area);
}

fn draw_slider(frame: &mut Frame, area: Rect, slider: &Slider, selected: bool) {
    let (min, max) = slider.bounds();
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} [{}..{}] ", slider.label(), min, max)),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(slider.ratio())
        .label(slider.value().to_string());

    frame.render_widget(gauge, area);
}

fn draw_verdict(frame: &mut Frame, area: Rect, app: &App) {
    let style = match app.needs_maintenance() {
        Some(true) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Some(false) => Style::default().fg(Color::Green),
        None => Style::default().fg(Color::DarkGray),
    };

    let verdict = Paragraph::new(app.verdict_text())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Prediction "));

    frame.render_widget(verdict, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("[↑↓] Select  [←→] Adjust  [Home/End] Bounds  [r] Reset  [q] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
