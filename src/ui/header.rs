use crate::router::Route;
use crate::ui::theme::{spinner, ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    route: &'a Route,
    loading: bool,
    tick: u64,
}

impl<'a> Header<'a> {
    pub fn new(route: &'a Route, loading: bool, tick: u64) -> Self {
        Self {
            route,
            loading,
            tick,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "漢字 kanjiview",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
        ];
        for (idx, crumb) in breadcrumbs(self.route).into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" › ", separator_style));
            }
            spans.push(Span::styled(crumb, text_style));
        }
        if self.loading {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} loading", spinner(self.tick)),
                text_style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn breadcrumbs(route: &Route) -> Vec<String> {
    match route {
        Route::Home => vec!["Home".to_string()],
        Route::KanjiList => vec!["Home".to_string(), "Kanji".to_string()],
        Route::KanjiDetail { id } => vec!["Home".to_string(), "Kanji".to_string(), id.clone()],
    }
}
