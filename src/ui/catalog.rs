use crate::catalog::{self, CatalogSection, Category};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_catalog(f: &mut Frame<'_>, area: Rect, category: Category) {
    let tabs: Vec<Span> = Category::ALL
        .iter()
        .flat_map(|c| {
            let style = if *c == category {
                Style::default().fg(Color::Black).bg(Color::Rgb(255, 153, 51))
            } else {
                Style::default().fg(Color::Gray)
            };
            [Span::styled(format!(" {} ", c.label()), style), Span::raw(" ")]
        })
        .collect();

    let mut lines = vec![Line::from(tabs), Line::from("")];
    let inner_width = area.width.saturating_sub(2);

    match catalog::section(category) {
        CatalogSection::Cards(cards) => {
            for card in cards {
                lines.extend(card.render(inner_width, ""));
                lines.push(Line::from(""));
            }
        }
        CatalogSection::Faqs(faqs) => {
            for faq in faqs {
                lines.push(Line::from(Span::styled(
                    faq.question,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(faq.answer, Style::default().fg(Color::Gray))));
                lines.push(Line::from(Span::styled(
                    format!("[{}]", faq.category),
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::from(""));
            }
        }
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Quick Access Categories · Tab "),
    );
    f.render_widget(panel, area);
}
