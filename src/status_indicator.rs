use crate::constants::SPINNER_FRAMES;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One-line status under the transcript: a spinner while a reply or a voice
/// request is pending, otherwise the latest notice.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, busy: Option<&str>, notice: Option<&str>) {
        let line = match (busy, notice) {
            (Some(text), _) => Line::from(vec![
                Span::styled(self.frame(), Style::default().fg(Color::Gray)),
                Span::raw(" "),
                Span::styled(text.to_string(), Style::default().fg(Color::DarkGray)),
            ]),
            (None, Some(text)) => Line::from(vec![
                Span::raw("  "),
                Span::styled(text.to_string(), Style::default().fg(Color::Yellow)),
            ]),
            (None, None) => Line::from(""),
        };

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        let mut indicator = StatusIndicator::new();
        let first = indicator.frame();
        for _ in 0..SPINNER_FRAMES.len() {
            indicator.update_spinner();
        }
        assert_eq!(indicator.frame(), first);
    }
}
