// src/ui.rs

pub mod catalog;
pub mod chat;
pub mod floating;
pub mod footer;
pub mod header;
pub mod quit_confirm;
pub mod sidebar;

use crate::app::{App, AppState};
use crate::widget::WidgetKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 34;

/// Renders the whole page. Pure function of the app state.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let size = f.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);

    let docked = app.widget(app.view);
    header::draw_header(f, rows[0], docked.profile().text, app.language);

    let docked_focused = app.focused() == app.view && app.state == AppState::Running;
    match app.view {
        WidgetKind::Sidebar => draw_sidebar_view(f, rows[1], app, docked_focused),
        _ => draw_full_page_view(f, rows[1], app, docked_focused),
    }

    footer::draw_footer(f, rows[2], app);

    let badge_row = Rect {
        y: rows[0].y + 1,
        height: 1,
        ..rows[0]
    };
    floating::draw_floating(
        f,
        rows[1],
        badge_row,
        app.widget(WidgetKind::Floating),
        app.language,
        &app.status_indicator,
    );

    if app.state == AppState::QuitConfirm {
        quit_confirm::draw_quit_confirm(f, centered_rect(50, 7, size));
    }
}

fn draw_full_page_view(f: &mut Frame<'_>, area: Rect, app: &App, focused: bool) {
    let widget = app.widget(WidgetKind::FullPage);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);
    sidebar::draw_topic_bar(f, rows[0], widget, app.language);

    let chat_area = match app.catalog {
        Some(category) => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
                .split(rows[1]);
            catalog::draw_catalog(f, cols[1], category);
            cols[0]
        }
        None => rows[1],
    };
    chat::draw_chat(f, chat_area, widget, app.language, &app.status_indicator, focused);
}

fn draw_sidebar_view(f: &mut Frame<'_>, area: Rect, app: &App, focused: bool) {
    let widget = app.widget(WidgetKind::Sidebar);
    let chat_area = if widget.topics_open() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
            .split(area);
        sidebar::draw_topics(f, cols[0], widget, app.language);
        cols[1]
    } else {
        area
    };
    chat::draw_chat(f, chat_area, widget, app.language, &app.status_indicator, focused);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::config::Config;
    use crate::event::{self, EventReceiver};
    use crate::voice::Unavailable;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> (App, EventReceiver) {
        let (tx, rx) = event::channel();
        (App::new(&Config::default(), Arc::new(Unavailable), tx), rx)
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_full_page_shows_greeting_and_topics() {
        let (app, _rx) = app();
        let screen = render(&app);
        assert!(screen.contains("ISRO Help Assistant"));
        assert!(screen.contains("Hi! I'm your ISRO Help Assistant."));
        assert!(screen.contains("Ocean Forecasts"));
        assert!(screen.contains("MEERA · F3"));
    }

    #[test]
    fn test_floating_window_renders_when_open() {
        let (mut app, _rx) = app();
        app.toggle_floating();
        let screen = render(&app);
        assert!(screen.contains("Hi! I'm MEERA."));
    }

    #[test]
    fn test_language_toggle_changes_static_strings_only() {
        let (mut app, _rx) = app();
        app.toggle_language();
        let screen = render(&app);
        assert!(screen.contains("English"));
        assert!(screen.contains("Hi! I'm your ISRO Help Assistant."));
    }

    #[test]
    fn test_sidebar_view_lists_topics() {
        let (mut app, _rx) = app();
        app.show_view(WidgetKind::Sidebar);
        let screen = render(&app);
        assert!(screen.contains("MOSDAC Assistant"));
        assert!(screen.contains("Cyclone Tracking"));
        assert!(screen.contains("Popular Datasets"));
    }

    #[test]
    fn test_catalog_panel() {
        let (mut app, _rx) = app();
        app.cycle_catalog();
        let screen = render(&app);
        assert!(screen.contains("Megha-Tropiques Mission"));
    }

    #[test]
    fn test_catalog_documents_show_type_and_size() {
        let (mut app, _rx) = app();
        app.catalog = Some(Category::Files);
        let screen = render(&app);
        assert!(screen.contains("Documents"));
        assert!(screen.contains("Type: PDF"));
        assert!(screen.contains("Size: 2.4 MB"));
        assert!(screen.contains("#pdf-preview-1"));
    }

    #[test]
    fn test_quit_confirm_overlay() {
        let (mut app, _rx) = app();
        app.state = AppState::QuitConfirm;
        assert!(render(&app).contains("Confirm Quit"));
    }
}
