use crate::ui::theme::{GLOBAL_BORDER, SUBTLE_TEXT, TITLE_BLUE, TITLE_PURPLE};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let bold = Modifier::BOLD;
        let title = Line::from(vec![
            Span::styled("Smart ", Style::default().fg(TITLE_BLUE).add_modifier(bold)),
            Span::styled("Counter", Style::default().fg(TITLE_PURPLE).add_modifier(bold)),
        ]);
        let subtitle = Line::from(Span::styled(
            "Count things. Learn things. Powered by Gemini.",
            Style::default().fg(SUBTLE_TEXT),
        ));

        Paragraph::new(vec![Line::from(""), title, subtitle])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
