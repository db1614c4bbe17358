use crate::locale::Language;
use crate::status_indicator::StatusIndicator;
use crate::ui::chat::draw_chat;
use crate::widget::ChatWidget;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const WINDOW_WIDTH: u16 = 56;
const WINDOW_HEIGHT: u16 = 26;

/// Bottom-right anchored rectangle, at most 90% of `area` each way.
pub fn window_rect(area: Rect) -> Rect {
    let width = WINDOW_WIDTH.min(area.width * 9 / 10).max(1);
    let height = WINDOW_HEIGHT.min(area.height * 9 / 10).max(1);
    Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    }
}

/// Closed: a launcher badge in `badge_row`. Open: the chat window on top of
/// `area`.
pub fn draw_floating(
    f: &mut Frame<'_>,
    area: Rect,
    badge_row: Rect,
    widget: &ChatWidget,
    language: Language,
    indicator: &StatusIndicator,
) {
    let text = widget.profile().text;

    if !widget.is_open() {
        let label = format!(" 💬 {} · F3 ", text.title.get(language));
        let width = (label.chars().count() as u16 + 2).min(badge_row.width);
        let badge = Rect {
            x: badge_row.x + badge_row.width.saturating_sub(width),
            width,
            ..badge_row
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                label,
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Rgb(0, 102, 204))
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            badge,
        );
        return;
    }

    let window = window_rect(area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(0, 102, 204)))
        .title(format!(
            " {} · {} ",
            text.title.get(language),
            text.subtitle.get(language)
        ))
        .title_bottom(Line::from(" Esc close ").right_aligned());
    let inner = block.inner(window);

    f.render_widget(Clear, window);
    f.render_widget(block, window);
    draw_chat(f, inner, widget, language, indicator, true);
}
