//! Rendering for the fact card.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{BADGE_BG, CARD_BORDER, HEADER_TEXT, INSIGHT_ACCENT, STATUS_ERROR, SUBTLE_TEXT};

use super::state::FactState;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rows the card needs at `width` columns, borders included. Zero when hidden.
///
/// Text rows follow the word wrap, so long facts grow the card instead of
/// being cut off.
pub fn card_height(state: &FactState, width: u16) -> u16 {
    let text_width = width.saturating_sub(2);
    match state {
        FactState::Idle => 0,
        FactState::Loading { .. } => 3,
        FactState::Failure { message, .. } => wrapped_line_count(message, text_width).saturating_add(2),
        // text, badge row, borders
        FactState::Success { fact, .. } => wrapped_line_count(&fact.fact, text_width).saturating_add(3),
    }
}

/// Lines `text` occupies when word-wrapped to `width` columns.
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut lines = 1usize;
    let mut used = 0usize;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if needed <= width {
            used = needed;
            continue;
        }
        if used > 0 {
            lines += 1;
        }
        // Words wider than a line get broken across several.
        lines += (len - 1) / width;
        used = (len - 1) % width + 1;
    }

    u16::try_from(lines).unwrap_or(u16::MAX)
}

pub fn render_fact_card(frame: &mut Frame, area: Rect, state: &FactState) {
    if !state.is_visible() || area.height == 0 {
        return;
    }

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            " ✦ Gemini Insight ",
            Style::default()
                .fg(INSIGHT_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(
            Line::from(Span::styled(" x: close ", Style::default().fg(SUBTLE_TEXT)))
                .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match state {
        FactState::Idle => {}

        FactState::Loading { animation_tick, .. } => {
            let spinner = SPINNER_FRAMES[(*animation_tick as usize) % SPINNER_FRAMES.len()];
            let line = Line::from(vec![
                Span::styled(format!("{} ", spinner), Style::default().fg(INSIGHT_ACCENT)),
                Span::styled(
                    "Consulting the digital oracle...",
                    Style::default().fg(SUBTLE_TEXT),
                ),
            ]);
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
        }

        FactState::Failure { message, .. } => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(STATUS_ERROR),
            )))
            .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, inner);
        }

        FactState::Success { fact, .. } => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(inner);

            let text = Paragraph::new(Line::from(Span::styled(
                fact.fact.as_str(),
                Style::default().fg(HEADER_TEXT),
            )))
            .wrap(Wrap { trim: true });
            frame.render_widget(text, rows[0]);

            let badge = Paragraph::new(Line::from(Span::styled(
                format!(" {} ", fact.category),
                Style::default().fg(HEADER_TEXT).bg(BADGE_BG),
            )))
            .alignment(Alignment::Right);
            frame.render_widget(badge, rows[1]);
        }
    }
}
