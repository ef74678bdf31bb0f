//! Bottom bar: key hints on the left, crate version on the right.

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, SUBTLE_TEXT};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// `(key, action)` pairs shown in the footer.
const KEY_HINTS: &[(&str, &str)] = &[
    ("+/↑", "Increase"),
    ("-/↓", "Decrease"),
    ("R", "Reset"),
    ("Enter", "Ask"),
    ("X", "Dismiss"),
    ("C", "Clear"),
    ("Q", "Quit"),
];

fn version_label() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

fn hints_line() -> Line<'static> {
    let key_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(SUBTLE_TEXT);

    let mut spans = Vec::with_capacity(KEY_HINTS.len() * 3);
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(GLOBAL_BORDER)));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", action), text_style));
    }
    Line::from(spans)
}

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let version = version_label();
    let version_width = u16::try_from(version.chars().count()).unwrap_or(u16::MAX);
    let [hints_area, version_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(version_width)])
        .areas(inner);

    frame.render_widget(Paragraph::new(hints_line()), hints_area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            version,
            Style::default().fg(SUBTLE_TEXT).add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Right),
        version_area,
    );
}
