use crate::router::Route;
use crate::ui::app::App;
use crate::ui::list::ListIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.is_search_editing() {
        handle_search_key(app, key);
        return;
    }

    let handled = match app.route().clone() {
        Route::Home => handle_home_key(app, key),
        Route::KanjiList => handle_list_key(app, key),
        Route::KanjiDetail { .. } => handle_detail_key(app, key),
    };
    if handled {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.end_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(ch)
        }
        _ => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char('l') => app.navigate(Route::KanjiList),
        _ => return false,
    }
    true
}

fn handle_list_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('/') => app.begin_search(),
        KeyCode::Char('g') => app.cycle_grade(),
        KeyCode::Char('s') => app.cycle_stroke_range(),
        KeyCode::Char('o') => app.cycle_sort(),
        KeyCode::Char('c') => app.dispatch_list(ListIntent::ClearFilters),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Right | KeyCode::Char('n') => app.dispatch_list(ListIntent::NextPage),
        KeyCode::Left | KeyCode::Char('p') => app.dispatch_list(ListIntent::PrevPage),
        KeyCode::Home => app.dispatch_list(ListIntent::GoToPage(1)),
        KeyCode::End => {
            let last = app.list().total_pages();
            app.dispatch_list(ListIntent::GoToPage(last));
        }
        KeyCode::Char(']') => app.step_items_per_page(1),
        KeyCode::Char('[') => app.step_items_per_page(-1),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_list(ListIntent::MoveSelection(-1)),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_list(ListIntent::MoveSelection(1)),
        KeyCode::Enter => app.open_selected(),
        _ => return false,
    }
    true
}

fn handle_detail_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('r') => app.refresh(),
        _ => return false,
    }
    true
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
