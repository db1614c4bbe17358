use crate::locale::Language;
use crate::status_indicator::StatusIndicator;
use crate::widget::ChatWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Transcript, status line and input box of one widget.
pub fn draw_chat(
    f: &mut Frame<'_>,
    area: Rect,
    widget: &ChatWidget,
    language: Language,
    indicator: &StatusIndicator,
    focused: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    draw_messages(f, widget, chunks[0]);

    let text = widget.profile().text;
    let busy = if widget.is_listening() {
        Some(text.listening.get(language))
    } else if widget.pending_replies() > 0 {
        Some(text.thinking.get(language))
    } else {
        None
    };
    indicator.render(f, chunks[1], busy, widget.notice());

    draw_input(f, widget, language, chunks[2], focused);
}

/// Flattens the store into rendered lines, one blank line between messages.
pub fn transcript_lines(widget: &ChatWidget, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in widget.store().iter() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(width));
    }
    lines
}

fn draw_messages(f: &mut Frame<'_>, widget: &ChatWidget, area: Rect) {
    let lines = transcript_lines(widget, area.width);
    let total_lines = lines.len().min(u16::MAX as usize) as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    let offset = max_scroll.saturating_sub(widget.scroll_back.min(max_scroll));

    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn draw_input(f: &mut Frame<'_>, widget: &ChatWidget, language: Language, area: Rect, focused: bool) {
    let text = widget.profile().text;
    let border_style = if focused {
        Style::default().fg(Color::Rgb(0, 102, 204))
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = format!(" {} ⏎ ", text.send.get(language));
    if widget.profile().voice_enabled {
        title.push_str(&format!("· {} ^R ", text.voice_input.get(language)));
    }

    let buffer = widget.input().buffer();
    let line = if buffer.is_empty() {
        Line::from(Span::styled(
            text.placeholder.get(language),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(buffer.to_string(), Style::default().fg(Color::White)))
    };

    let visible_width = area.width.saturating_sub(2);
    let text_width = buffer.width().min(u16::MAX as usize) as u16;
    let scroll_offset = text_width.saturating_sub(visible_width.saturating_sub(1));

    let input = Paragraph::new(line).scroll((0, scroll_offset)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    f.render_widget(input, area);

    if focused && widget.input_focused() {
        let cursor_x = area.x + 1 + (text_width - scroll_offset);
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}
