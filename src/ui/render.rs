use crate::router::Route;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::views;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    let header_widget = Header::new(app.route(), app.is_loading(), app.tick());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    match app.route() {
        Route::Home => views::home::render(frame, body),
        Route::KanjiList => views::list::render(frame, body, app.list(), app.is_search_editing()),
        Route::KanjiDetail { id } => views::detail::render(frame, body, id, app.detail()),
    }

    let footer_widget = Footer::new(app.route(), app.is_search_editing());
    frame.render_widget(footer_widget.widget(footer), footer);
}
