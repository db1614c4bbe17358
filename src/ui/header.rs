use crate::locale::Language;
use crate::rules::WidgetText;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub fn draw_header(f: &mut Frame<'_>, area: Rect, text: &WidgetText, language: Language) {
    let block = Block::default().style(Style::default().bg(Color::Rgb(0, 51, 102)));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            text.title.get(language),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            text.subtitle.get(language),
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Left);
    f.render_widget(title, chunks[0]);

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled("F4 ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            language.toggle_label(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(toggle, chunks[1]);
}
