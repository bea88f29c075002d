use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "漢字",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Browse the kanji taught in Japanese grades 1 to 6.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            "Search by character, meaning or reading; filter by grade and stroke count.",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to open the kanji list",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
