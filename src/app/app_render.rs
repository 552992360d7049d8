use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::catalog::CatalogStatus;
use crate::search_bar::{self, SEARCH_BAR_HEIGHT};

const KEY_HINTS: &str = "Enter search · Tab pick · ↑↓ move · Esc clear/quit · Ctrl+C quit";

/// Render the whole UI
pub fn render(app: &mut App, frame: &mut Frame) {
    app.layout_regions.clear();

    let [search_area, results_area, status_area] = Layout::vertical([
        Constraint::Length(SEARCH_BAR_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    search_bar::render_bar(&mut app.search_bar, frame, search_area, &mut app.layout_regions);
    render_results(app, frame, results_area);
    render_status(app, frame, status_area);

    // Panel last so it floats over the results pane
    if let Some(input_area) = app.layout_regions.search_input {
        search_bar::render_suggestions(
            &mut app.search_bar,
            frame,
            input_area,
            &mut app.layout_regions,
        );
    }
}

fn render_results(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Last search ")
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = match &app.last_outcome {
        None => vec![Line::from(Span::styled(
            "Type a course code and press Enter, or pick a suggestion.",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(outcome) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        outcome.query.clone(),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(
                            "  {} match{} · {}",
                            outcome.matches.len(),
                            if outcome.matches.len() == 1 { "" } else { "es" },
                            outcome.at.format("%H:%M:%S")
                        ),
                        Style::default().fg(Color::Gray),
                    ),
                ]),
                Line::from(""),
            ];

            if outcome.matches.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No matching courses",
                    Style::default().fg(Color::Yellow),
                )));
            } else {
                lines.extend(outcome.matches.iter().map(|course| {
                    Line::from(vec![
                        Span::styled(
                            format!("  {}", course.course_code),
                            Style::default().fg(Color::White),
                        ),
                        Span::styled(
                            format!("  #{}", course.id),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                }));
            }
            lines
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
    app.layout_regions.results_pane = Some(area);
}

fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let catalog_color = match app.search_bar.catalog().status() {
        CatalogStatus::Loading => Color::Yellow,
        CatalogStatus::Ready => Color::Green,
        CatalogStatus::Failed(_) => Color::Red,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.search_bar.catalog_summary()),
        Style::default().fg(catalog_color),
    )];

    if let Some(warning) = &app.config_warning {
        spans.push(Span::styled(
            format!("│ config: {} ", warning),
            Style::default().fg(Color::Red),
        ));
    }

    spans.push(Span::styled(
        format!("│ {}", KEY_HINTS),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
