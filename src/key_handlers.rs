use crate::app::{App, AppState};
use crate::widget::WidgetKind;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps one key press onto the app.
///
/// Global keys: F1/F2 switch the docked assistant, F3 opens or closes the
/// floating one, F4 or Ctrl+L toggles the language, Tab cycles the catalog
/// panel, Ctrl+B toggles the sidebar topics, Ctrl+R starts voice input,
/// Ctrl+N starts a new session, Alt+1..9 picks a quick topic.
pub fn handle_key(key: KeyEvent, app: &mut App) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if app.state == AppState::QuitConfirm {
        handle_quit_confirm_input(key, app);
        return;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.state = AppState::QuitConfirm,
        (KeyModifiers::CONTROL, KeyCode::Char('l')) | (_, KeyCode::F(4)) => app.toggle_language(),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => app.start_voice_input(),
        (KeyModifiers::CONTROL, KeyCode::Char('n')) => app.new_session(),
        (KeyModifiers::CONTROL, KeyCode::Char('b')) => {
            if app.focused() == WidgetKind::Sidebar {
                app.widget_mut(WidgetKind::Sidebar).toggle_topics();
            }
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => scroll_focused(app, true),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => scroll_focused(app, false),
        (KeyModifiers::ALT, KeyCode::Char(c)) => {
            if let Some(digit) = c.to_digit(10).filter(|d| *d >= 1) {
                app.submit_quick_topic(digit as usize - 1);
            }
        }
        (_, KeyCode::F(1)) => app.show_view(WidgetKind::FullPage),
        (_, KeyCode::F(2)) => app.show_view(WidgetKind::Sidebar),
        (_, KeyCode::F(3)) => app.toggle_floating(),
        (_, KeyCode::Tab) => {
            if app.focused() == WidgetKind::FullPage {
                app.cycle_catalog();
            }
        }
        (_, KeyCode::Esc) => {
            if app.focused() == WidgetKind::Floating {
                app.toggle_floating();
            } else {
                app.state = AppState::QuitConfirm;
            }
        }
        (_, KeyCode::Enter) => app.submit_focused(),
        (_, KeyCode::PageUp) => scroll_focused(app, true),
        (_, KeyCode::PageDown) => scroll_focused(app, false),
        (_, KeyCode::Backspace) => {
            let kind = app.focused();
            app.widget_mut(kind).input_mut().backspace();
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let kind = app.focused();
            let widget = app.widget_mut(kind);
            widget.clear_notice();
            widget.input_mut().push(c);
        }
        _ => {}
    }
}

fn scroll_focused(app: &mut App, up: bool) {
    let kind = app.focused();
    let widget = app.widget_mut(kind);
    if up {
        widget.scroll_up();
    } else {
        widget.scroll_down();
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.state = AppState::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.state = AppState::Running;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::event;
    use crate::locale::Language;
    use crate::voice::Unavailable;
    use std::sync::Arc;

    fn press(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
        handle_key(KeyEvent::new(code, modifiers), app);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyModifiers::NONE, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn test_typing_and_enter_submits_to_focused_widget() {
        let (tx, _rx) = event::channel();
        let mut app = App::new(&Config::default(), Arc::new(Unavailable), tx);

        press(&mut app, KeyModifiers::NONE, KeyCode::F(3));
        type_text(&mut app, "ocean");
        press(&mut app, KeyModifiers::NONE, KeyCode::Enter);

        assert_eq!(app.widget(WidgetKind::Floating).store().len(), 2);
        assert_eq!(app.widget(WidgetKind::FullPage).store().len(), 1);
        assert!(app.widget(WidgetKind::Floating).input().buffer().is_empty());
    }

    #[tokio::test]
    async fn test_enter_on_blank_input_does_nothing() {
        let (tx, _rx) = event::channel();
        let mut app = App::new(&Config::default(), Arc::new(Unavailable), tx);
        type_text(&mut app, "   ");
        press(&mut app, KeyModifiers::NONE, KeyCode::Enter);
        assert_eq!(app.widget(WidgetKind::FullPage).store().len(), 1);
    }

    #[test]
    fn test_escape_closes_floating_then_asks_to_quit() {
        let (tx, _rx) = event::channel();
        let mut app = App::new(&Config::default(), Arc::new(Unavailable), tx);
        press(&mut app, KeyModifiers::NONE, KeyCode::F(3));
        press(&mut app, KeyModifiers::NONE, KeyCode::Esc);
        assert!(!app.widget(WidgetKind::Floating).is_open());
        assert_eq!(app.state, AppState::Running);

        press(&mut app, KeyModifiers::NONE, KeyCode::Esc);
        assert_eq!(app.state, AppState::QuitConfirm);
        press(&mut app, KeyModifiers::NONE, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::Running);
        press(&mut app, KeyModifiers::CONTROL, KeyCode::Char('c'));
        press(&mut app, KeyModifiers::NONE, KeyCode::Char('y'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_language_and_view_keys() {
        let (tx, _rx) = event::channel();
        let mut app = App::new(&Config::default(), Arc::new(Unavailable), tx);
        press(&mut app, KeyModifiers::NONE, KeyCode::F(4));
        assert_eq!(app.language, Language::Hi);
        press(&mut app, KeyModifiers::CONTROL, KeyCode::Char('l'));
        assert_eq!(app.language, Language::En);

        press(&mut app, KeyModifiers::NONE, KeyCode::F(2));
        assert_eq!(app.focused(), WidgetKind::Sidebar);
        assert!(app.widget(WidgetKind::Sidebar).topics_open());
        press(&mut app, KeyModifiers::CONTROL, KeyCode::Char('b'));
        assert!(!app.widget(WidgetKind::Sidebar).topics_open());
    }

    #[test]
    fn test_tab_cycles_catalog_on_full_page_only() {
        let (tx, _rx) = event::channel();
        let mut app = App::new(&Config::default(), Arc::new(Unavailable), tx);
        press(&mut app, KeyModifiers::NONE, KeyCode::Tab);
        assert!(app.catalog.is_some());
        press(&mut app, KeyModifiers::NONE, KeyCode::F(2));
        let before = app.catalog;
        press(&mut app, KeyModifiers::NONE, KeyCode::Tab);
        assert_eq!(app.catalog, before);
    }
}
