use crate::catalog::{KanjiRecord, PaginationInfo};
use crate::ui::list::KanjiListState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &KanjiListState, search_editing: bool) {
    let [filters_area, results_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(filter_bar(state, search_editing), filters_area);

    let view = state.view();
    frame.render_widget(
        results(state, &view.page, &view.info, results_area.height),
        results_area,
    );
    frame.render_widget(status_line(&view.info), status_area);
}

fn filter_bar(state: &KanjiListState, search_editing: bool) -> Paragraph<'static> {
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let filter = &state.filter;

    let search = if search_editing {
        format!("{}█", filter.search_term)
    } else if filter.search_term.is_empty() {
        "—".to_string()
    } else {
        filter.search_term.clone()
    };
    let grade = if filter.grade.is_empty() {
        "any".to_string()
    } else {
        filter.grade.clone()
    };
    let strokes = filter
        .stroke_range
        .map_or_else(|| "any".to_string(), |range| range.to_string());

    let line = Line::from(vec![
        Span::styled(" Search: ", label),
        Span::styled(search, value),
        Span::styled("   Grade: ", label),
        Span::styled(grade, value),
        Span::styled("   Strokes: ", label),
        Span::styled(strokes, value),
        Span::styled("   Sort: ", label),
        Span::styled(filter.sort_key.to_string(), value),
        Span::styled("   Per page: ", label),
        Span::styled(state.items_per_page().to_string(), value),
    ]);

    let title = if state.has_active_filters() {
        " Filters (active) "
    } else {
        " Filters "
    };
    let border = if search_editing { ACCENT } else { GLOBAL_BORDER };
    Paragraph::new(line).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

/// Column width of the meaning, in terminal cells.
const MEANING_WIDTH: usize = 24;

fn results(
    state: &KanjiListState,
    page: &[&KanjiRecord],
    info: &PaginationInfo,
    height: u16,
) -> Paragraph<'static> {
    let mut lines = Vec::new();

    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            format!(" Could not load kanji: {}", error),
            Style::default().fg(STATUS_ERROR),
        )));
        lines.push(Line::from(""));
    }

    if state.is_loading && state.raw().is_empty() {
        lines.push(Line::from(Span::styled(
            " Loading kanji…",
            Style::default().fg(MUTED_TEXT),
        )));
    } else if state.loaded && page.is_empty() {
        lines.push(Line::from(Span::styled(
            " No kanji match the current filters.",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let visible = (height as usize).saturating_sub(lines.len());
    let offset = scroll_offset(state.selected, visible);
    for (idx, record) in page.iter().enumerate().skip(offset).take(visible) {
        let mut line = row(info.start + idx, record);
        if idx == state.selected {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    Paragraph::new(lines)
}

/// First row to draw so that the selected row stays on screen.
fn scroll_offset(selected: usize, visible: usize) -> usize {
    selected.saturating_sub(visible.saturating_sub(1))
}

/// Pad `text` with spaces to `width` display cells.
fn pad_to_width(text: &str, width: usize) -> String {
    let used = Span::raw(text).width();
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

fn row(position: usize, record: &KanjiRecord) -> Line<'static> {
    let muted = Style::default().fg(MUTED_TEXT);
    let grade = record
        .grade
        .map_or_else(String::new, |grade| format!("grade {}", grade));
    Line::from(vec![
        Span::styled(format!("{:>5}. ", position), muted),
        Span::styled(
            record.character().to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            pad_to_width(&record.meaning, MEANING_WIDTH),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(format!("{:<9}", grade), muted),
        Span::styled(format!("{:>3} strokes  ", record.stroke_count()), muted),
        Span::styled(
            format!("{} / {}", record.kunyomi_romaji(), record.onyomi_romaji()),
            muted,
        ),
    ])
}

fn status_line(info: &PaginationInfo) -> Paragraph<'static> {
    let muted = Style::default().fg(MUTED_TEXT);
    let prev = if info.has_prev_page { "◀ " } else { "  " };
    let next = if info.has_next_page { " ▶" } else { "  " };
    Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Showing {}–{} of {}", info.start, info.end, info.total),
            muted,
        ),
        Span::styled("   ", muted),
        Span::styled(prev, muted),
        Span::styled(
            format!("Page {}/{}", info.current_page, info.total_pages.max(1)),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(next, muted),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_keeps_selection_in_view() {
        assert_eq!(scroll_offset(0, 20), 0);
        assert_eq!(scroll_offset(19, 20), 0);
        assert_eq!(scroll_offset(20, 20), 1);
        assert_eq!(scroll_offset(47, 20), 28);
        assert_eq!(scroll_offset(5, 0), 5);
    }

    #[test]
    fn padding_counts_display_cells() {
        assert_eq!(pad_to_width("tree", 6), "tree  ");
        assert_eq!(pad_to_width("水木", 6), "水木  ");
        assert_eq!(pad_to_width("longer than", 4), "longer than");
    }
}
