use crate::router::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    route: &'a Route,
    search_editing: bool,
}

impl<'a> Footer<'a> {
    pub fn new(route: &'a Route, search_editing: bool) -> Self {
        Self {
            route,
            search_editing,
        }
    }

    fn hints(&self) -> &'static str {
        if self.search_editing {
            return " Type to search │ Backspace: Delete │ Enter/Esc: Done";
        }
        match self.route {
            Route::Home => " Enter: Browse kanji │ q: Quit",
            Route::KanjiList => {
                " /: Search │ g: Grade │ s: Strokes │ o: Sort │ c: Clear │ ←/→: Page │ [/]: Per page │ Enter: Open │ r: Reload │ Esc: Back"
            }
            Route::KanjiDetail { .. } => " r: Reload │ Esc: Back │ q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
