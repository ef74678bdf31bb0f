use crate::ui::app::App;
use crate::ui::counter_display::render_counter;
use crate::ui::fact::{card_height, render_fact_card};
use crate::ui::footer::render_footer;
use crate::ui::header::Header;
use crate::ui::history::render_history;
use crate::ui::layout::{body_sections, fact_card_bounds, layout_regions};
use crate::ui::theme::{HEADER_TEXT, INSIGHT_ACCENT, SUBTLE_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let (column_width, max_card_rows) = fact_card_bounds(body);
    let card_rows = card_height(app.fact(), column_width).min(max_card_rows);
    let sections = body_sections(body, card_rows);
    render_counter(frame, sections.counter, app.count(), app.is_pulsing());
    frame.render_widget(ask_hint(app), sections.ask);
    render_fact_card(frame, sections.fact, app.fact());
    render_history(frame, sections.history, app.history().iter());

    render_footer(frame, footer);
}

fn ask_hint(app: &App) -> Paragraph<'static> {
    let line = if app.fact().is_loading() {
        Line::from(Span::styled(
            "✦ Thinking...",
            Style::default()
                .fg(INSIGHT_ACCENT)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(SUBTLE_TEXT)),
            Span::styled(
                format!("✦ Tell me about {}", app.count()),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };
    Paragraph::new(line).alignment(Alignment::Center)
}
