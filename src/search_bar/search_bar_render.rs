//! Search bar rendering
//!
//! Draws the input with its toggle glyph and submit button, and the floating
//! suggestion panel below the input.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::SearchBar;
use crate::layout::LayoutRegions;
use crate::widgets::popup;

pub const SEARCH_BAR_HEIGHT: u16 = 3;

const SEARCH_GLYPH: &str = "⌕";
const CLEAR_GLYPH: &str = "✕";
const ICON_WIDTH: u16 = 2;
const SUBMIT_LABEL: &str = "Search";
const SUBMIT_BUTTON_WIDTH: u16 = 10;

// Suggestion panel display constants
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: usize = 6;
const MIN_POPUP_WIDTH: u16 = 20;
const POPUP_OFFSET_X: u16 = 1;

/// Render the input and submit button, recording their click regions
pub fn render_bar(bar: &mut SearchBar, frame: &mut Frame, area: Rect, regions: &mut LayoutRegions) {
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(SUBMIT_BUTTON_WIDTH)])
            .areas(area);

    let editing = bar.draft().is_editing();
    let border_color = if editing { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search courses ")
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(input_area);
    frame.render_widget(block, input_area);

    let icon_width = ICON_WIDTH.min(inner.width);
    let text_area = Rect {
        width: inner.width.saturating_sub(icon_width),
        ..inner
    };
    let icon_area = Rect {
        x: text_area.right(),
        width: icon_width,
        height: inner.height.min(1),
        ..inner
    };

    let textarea = bar.textarea_mut();
    textarea.set_style(Style::default().fg(Color::White));
    frame.render_widget(&*textarea, text_area);

    let (glyph, glyph_color) = if editing {
        (CLEAR_GLYPH, Color::Red)
    } else {
        (SEARCH_GLYPH, Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(glyph, Style::default().fg(glyph_color))),
        icon_area,
    );

    let button = Paragraph::new(Line::from(SUBMIT_LABEL).alignment(Alignment::Center)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(button, button_area);

    regions.search_input = Some(input_area);
    regions.toggle_icon = Some(icon_area);
    regions.submit_button = Some(button_area);
}

/// Render the suggestion panel under `input_area`
///
/// Nothing is drawn (and no rows are clickable) unless the draft is being
/// edited and has matches. When the panel is clipped, only the rows that fit
/// stay selectable.
pub fn render_suggestions(
    bar: &mut SearchBar,
    frame: &mut Frame,
    input_area: Rect,
    regions: &mut LayoutRegions,
) {
    regions.suggestion_rows.clear();

    let suggestions = bar.visible_suggestions();
    if suggestions.is_empty() {
        return;
    }

    let max_code_width = suggestions
        .iter()
        .map(|course| course.course_code.width())
        .max()
        .unwrap_or(0);
    let popup_width = u16::try_from(max_code_width.saturating_add(POPUP_PADDING))
        .unwrap_or(u16::MAX)
        .max(MIN_POPUP_WIDTH);
    let popup_height = suggestions.len() as u16 + POPUP_BORDER_HEIGHT;

    let popup_area = popup::popup_below_anchor(
        input_area,
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
        frame.area(),
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        bar.set_row_limit(0);
        return;
    }

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, course)| {
            let line = if bar.highlighted() == Some(i) {
                Line::from(Span::styled(
                    format!("► {}", course.course_code),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", course.course_code),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggestions ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);

    frame.render_widget(List::new(items).block(block), popup_area);

    let visible_rows = (inner.height as usize).min(suggestions.len());
    regions.suggestion_rows = (0..visible_rows)
        .map(|i| Rect {
            y: inner.y + i as u16,
            height: 1,
            ..inner
        })
        .collect();
    bar.set_row_limit(visible_rows);
}

#[cfg(test)]
#[path = "search_bar_render_tests.rs"]
mod search_bar_render_tests;
