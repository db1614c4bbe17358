use crate::app::{App, AppState};
use crate::widget::WidgetKind;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with the key hints for whatever currently has focus
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let instructions = match (app.state, app.focused()) {
        (AppState::QuitConfirm, _) => "Press 'y' to confirm quit or 'n' to cancel.",
        (_, WidgetKind::Floating) => "Enter send · PgUp/PgDn scroll · Ctrl+N new chat · Esc/F3 close",
        (_, WidgetKind::Sidebar) => {
            "Enter send · Alt+1-5 topic · Ctrl+B topics · Ctrl+R voice · F1 full page · F3 MEERA · Ctrl+C quit"
        }
        (_, WidgetKind::FullPage) => {
            "Enter send · Alt+1-5 topic · Tab catalog · Ctrl+R voice · F2 sidebar · F3 MEERA · Ctrl+C quit"
        }
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
