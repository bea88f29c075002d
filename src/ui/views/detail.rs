use crate::catalog::KanjiRecord;
use crate::ui::detail::KanjiDetailState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Example words shown under the readings.
const MAX_EXAMPLES: usize = 8;

pub fn render(frame: &mut Frame<'_>, area: Rect, id: &str, state: &KanjiDetailState) {
    let mut lines = Vec::new();

    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            format!(" Could not load {}: {}", id, error),
            Style::default().fg(STATUS_ERROR),
        )));
        lines.push(Line::from(""));
    }

    match &state.record {
        Some(record) => lines.extend(record_lines(record)),
        None if state.is_loading => lines.push(Line::from(Span::styled(
            format!(" Loading {}…", id),
            Style::default().fg(MUTED_TEXT),
        ))),
        None => {}
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {} ", id))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<12}", label), Style::default().fg(MUTED_TEXT)),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}

fn reading(kana: &str, romaji: &str) -> String {
    match (kana.is_empty(), romaji.is_empty()) {
        (false, false) => format!("{} ({})", kana, romaji),
        (false, true) => kana.to_string(),
        _ => romaji.to_string(),
    }
}

fn record_lines(record: &KanjiRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                record.character().to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                record.english_meaning().to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        field("Meaning", record.meaning.clone()),
        field(
            "Grade",
            record.grade.map(|g| g.to_string()).unwrap_or_default(),
        ),
        field("Strokes", record.stroke_count().to_string()),
        field(
            "Kunyomi",
            reading(&record.kanji.kunyomi.hiragana, record.kunyomi_romaji()),
        ),
        field(
            "Onyomi",
            reading(&record.kanji.onyomi.katakana, record.onyomi_romaji()),
        ),
    ];

    let radical = &record.radical;
    if !radical.character.is_empty() {
        let mut value = format!("{} {}", radical.character, radical.meaning.english);
        let name = reading(&radical.name.hiragana, &radical.name.romaji);
        if !name.is_empty() {
            value.push_str(&format!(" · {}", name));
        }
        if radical.strokes > 0 {
            value.push_str(&format!(" · {} strokes", radical.strokes));
        }
        let position = reading(&radical.position.hiragana, &radical.position.romaji);
        if !position.is_empty() {
            value.push_str(&format!(" · {}", position));
        }
        lines.push(field("Radical", value));
    }

    if !record.mn_hint.is_empty() {
        lines.push(field("Mnemonic", record.mn_hint.clone()));
    }

    let refs = &record.references;
    if !refs.classic_nelson.is_empty() || !refs.kodansha.is_empty() {
        lines.push(field(
            "References",
            format!("Nelson {} · Kodansha {}", refs.classic_nelson, refs.kodansha),
        ));
    }

    if !record.examples.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Examples",
            Style::default().fg(MUTED_TEXT),
        )));
        for example in record.examples.iter().take(MAX_EXAMPLES) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("   {}", example.japanese),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(
                    format!("  {}", example.meaning.english),
                    Style::default().fg(MUTED_TEXT),
                ),
            ]));
        }
    }

    lines
}
