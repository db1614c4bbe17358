use crate::locale::Language;
use crate::widget::ChatWidget;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Collapsible quick-topics panel paired with the sidebar assistant.
pub fn draw_topics(f: &mut Frame<'_>, area: Rect, widget: &ChatWidget, language: Language) {
    let mut lines = Vec::new();
    for (i, topic) in widget.quick_topics().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("Alt+{} ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{} ", topic.icon)),
            Span::styled(
                topic.label.get(language),
                Style::default()
                    .fg(Color::Rgb(0, 102, 204))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        if let Some(description) = topic.description {
            lines.push(Line::from(Span::styled(
                description.get(language),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    }

    let title = format!(" {} ", widget.profile().text.quick_topics.get(language));
    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title),
    );
    f.render_widget(panel, area);
}

/// Single-line quick-topic bar shown above the full-page transcript.
pub fn draw_topic_bar(f: &mut Frame<'_>, area: Rect, widget: &ChatWidget, language: Language) {
    let mut spans = vec![Span::styled(
        format!("{}: ", widget.profile().text.quick_topics.get(language)),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    for (i, topic) in widget.quick_topics().iter().enumerate() {
        spans.push(Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{} {}  ", topic.icon, topic.label.get(language)),
            Style::default().fg(Color::Rgb(0, 102, 204)),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }), area);
}
