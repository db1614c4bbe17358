use crate::constants::{
    BUBBLE_BOTTOM, BUBBLE_TOP, DOCUMENT_ICON, GENERIC_ICON, HEAVY_VERTICAL, LIGHT_VERTICAL,
    MISSION_ICON, USER_INDENT,
};
use chrono::{DateTime, Local};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::fmt;
use textwrap::wrap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub text: String,
    pub url: String,
}

impl CardLink {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Kind-specific attributes of a card. Attributes a kind does not carry are
/// simply absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardKind {
    Mission {
        mission: Option<String>,
        launch_date: Option<String>,
        products: Vec<String>,
        download_link: Option<String>,
    },
    Document {
        file_type: Option<String>,
        size: Option<String>,
        download_link: Option<String>,
    },
    Generic,
}

/// Auxiliary panel attached to an assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseCard {
    pub title: String,
    pub description: Option<String>,
    pub kind: CardKind,
    pub links: Vec<CardLink>,
}

impl ResponseCard {
    pub fn mission(title: impl Into<String>) -> Self {
        Self::with_kind(
            title,
            CardKind::Mission {
                mission: None,
                launch_date: None,
                products: Vec::new(),
                download_link: None,
            },
        )
    }

    pub fn document(title: impl Into<String>) -> Self {
        Self::with_kind(
            title,
            CardKind::Document {
                file_type: None,
                size: None,
                download_link: None,
            },
        )
    }

    pub fn generic(title: impl Into<String>) -> Self {
        Self::with_kind(title, CardKind::Generic)
    }

    fn with_kind(title: impl Into<String>, kind: CardKind) -> Self {
        Self {
            title: title.into(),
            description: None,
            kind,
            links: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn link(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.push(CardLink::new(text, url));
        self
    }

    // The setters below are no-ops on kinds that do not carry the attribute.

    pub fn mission_name(mut self, name: impl Into<String>) -> Self {
        if let CardKind::Mission { mission, .. } = &mut self.kind {
            *mission = Some(name.into());
        }
        self
    }

    pub fn launch_date(mut self, date: impl Into<String>) -> Self {
        if let CardKind::Mission { launch_date, .. } = &mut self.kind {
            *launch_date = Some(date.into());
        }
        self
    }

    pub fn products<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let CardKind::Mission { products, .. } = &mut self.kind {
            *products = items.into_iter().map(Into::into).collect();
        }
        self
    }

    pub fn file_type(mut self, kind_label: impl Into<String>) -> Self {
        if let CardKind::Document { file_type, .. } = &mut self.kind {
            *file_type = Some(kind_label.into());
        }
        self
    }

    pub fn size(mut self, label: impl Into<String>) -> Self {
        if let CardKind::Document { size, .. } = &mut self.kind {
            *size = Some(label.into());
        }
        self
    }

    pub fn download_link(mut self, url: impl Into<String>) -> Self {
        match &mut self.kind {
            CardKind::Mission { download_link, .. } | CardKind::Document { download_link, .. } => {
                *download_link = Some(url.into());
            }
            CardKind::Generic => {}
        }
        self
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            CardKind::Mission { .. } => "mission",
            CardKind::Document { .. } => "document",
            CardKind::Generic => "generic",
        }
    }

    pub fn mission_label(&self) -> Option<&str> {
        match &self.kind {
            CardKind::Mission { mission, .. } => mission.as_deref(),
            _ => None,
        }
    }

    pub fn launch(&self) -> Option<&str> {
        match &self.kind {
            CardKind::Mission { launch_date, .. } => launch_date.as_deref(),
            _ => None,
        }
    }

    pub fn product_list(&self) -> &[String] {
        match &self.kind {
            CardKind::Mission { products, .. } => products,
            _ => &[],
        }
    }

    pub fn file_type_label(&self) -> Option<&str> {
        match &self.kind {
            CardKind::Document { file_type, .. } => file_type.as_deref(),
            _ => None,
        }
    }

    pub fn file_size(&self) -> Option<&str> {
        match &self.kind {
            CardKind::Document { size, .. } => size.as_deref(),
            _ => None,
        }
    }

    pub fn download(&self) -> Option<&str> {
        match &self.kind {
            CardKind::Mission { download_link, .. } | CardKind::Document { download_link, .. } => {
                download_link.as_deref()
            }
            CardKind::Generic => None,
        }
    }

    fn icon(&self) -> char {
        match self.kind {
            CardKind::Mission { .. } => MISSION_ICON,
            CardKind::Document { .. } => DOCUMENT_ICON,
            CardKind::Generic => GENERIC_ICON,
        }
    }

    /// Renders the card as a panel of lines, each prefixed with `indent`.
    pub fn render(&self, width: u16, indent: &str) -> Vec<Line<'static>> {
        let bar_style = Style::default().fg(Color::Rgb(255, 153, 51));
        let title_style = Style::default()
            .fg(Color::Rgb(135, 206, 250))
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let body_style = Style::default().fg(Color::Gray);
        let link_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED);

        let prefix = format!("{}{} ", indent, HEAVY_VERTICAL);
        let wrap_width = (width as usize).saturating_sub(prefix.chars().count() + 1).max(16);
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::styled(prefix.clone(), bar_style),
            Span::styled(format!("{} {}", self.icon(), self.title), title_style),
        ]));

        let labelled = |lines: &mut Vec<Line<'static>>, label: &str, value: &str| {
            let text = format!("{}: {}", label, value);
            for (i, chunk) in wrap(&text, wrap_width).into_iter().enumerate() {
                let mut spans = vec![Span::styled(prefix.clone(), bar_style)];
                if i == 0 {
                    let rest = chunk[label.len() + 1..].to_string();
                    spans.push(Span::styled(format!("{}:", label), label_style));
                    spans.push(Span::styled(rest, body_style));
                } else {
                    spans.push(Span::styled(chunk.to_string(), body_style));
                }
                lines.push(Line::from(spans));
            }
        };

        if let Some(mission) = self.mission_label() {
            labelled(&mut lines, "Mission", mission);
        }
        if let Some(launch) = self.launch() {
            labelled(&mut lines, "Launch", launch);
        }
        if !self.product_list().is_empty() {
            labelled(&mut lines, "Products", &self.product_list().join(", "));
        }
        if let Some(description) = &self.description {
            for chunk in wrap(description, wrap_width) {
                lines.push(Line::from(vec![
                    Span::styled(prefix.clone(), bar_style),
                    Span::styled(chunk.to_string(), body_style),
                ]));
            }
        }
        if let Some(file_type) = self.file_type_label() {
            labelled(&mut lines, "Type", file_type);
        }
        if let Some(size) = self.file_size() {
            labelled(&mut lines, "Size", size);
        }
        if let Some(url) = self.download() {
            lines.push(Line::from(vec![
                Span::styled(prefix.clone(), bar_style),
                Span::styled("[Access] ".to_string(), label_style),
                Span::styled(url.to_string(), link_style),
            ]));
        }
        for link in &self.links {
            lines.push(Line::from(vec![
                Span::styled(prefix.clone(), bar_style),
                Span::styled(format!("[{}] ", link.text), label_style),
                Span::styled(link.url.clone(), link_style),
            ]));
        }

        lines
    }
}

/// One chat turn. Immutable once created.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    id: MessageId,
    text: String,
    author: Author,
    timestamp: DateTime<Local>,
    cards: Vec<ResponseCard>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), Author::User, Vec::new())
    }

    pub fn assistant(text: impl Into<String>, cards: Vec<ResponseCard>) -> Self {
        Self::new(text.into(), Author::Assistant, cards)
    }

    fn new(text: String, author: Author, cards: Vec<ResponseCard>) -> Self {
        Self {
            id: MessageId::generate(),
            text,
            author,
            timestamp: Local::now(),
            cards,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn cards(&self) -> &[ResponseCard] {
        &self.cards
    }

    pub fn render(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let base_style = self.base_style();
        let indent = if self.is_user() { USER_INDENT } else { "" };

        self.render_header(&mut lines, base_style, indent);
        self.render_content(&mut lines, width, base_style, indent);
        self.render_footer(&mut lines, base_style, indent);

        for card in &self.cards {
            lines.extend(card.render(width, indent));
        }

        lines
    }

    fn base_style(&self) -> Style {
        Style::default().fg(if self.is_user() {
            Color::Rgb(255, 223, 128)
        } else {
            Color::Rgb(144, 238, 144)
        })
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style, indent: &str) {
        let who = match self.author {
            Author::User => "You",
            Author::Assistant => "Assistant",
        };
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled(BUBBLE_TOP.to_string(), style),
            Span::styled(
                self.timestamp.format("%H:%M").to_string(),
                style.add_modifier(Modifier::DIM),
            ),
            Span::styled(" ", style),
            Span::styled(who.to_string(), style.add_modifier(Modifier::BOLD)),
        ]));
    }

    fn render_content(&self, lines: &mut Vec<Line<'static>>, width: u16, style: Style, indent: &str) {
        let wrap_width = (width as usize).saturating_sub(4 + indent.len()).max(8);
        for wrapped in wrap(&self.text, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled(format!("{} ", LIGHT_VERTICAL), style),
                Span::styled(wrapped.to_string(), style),
            ]));
        }
    }

    fn render_footer(&self, lines: &mut Vec<Line<'static>>, style: Style, indent: &str) {
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled(BUBBLE_BOTTOM.to_string(), style),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_unused_attributes_are_absent() {
        let card = ResponseCard::document("MOSDAC Data Portal")
            .launch_date("ignored")
            .products(["ignored"])
            .file_type("Web Portal")
            .download_link("#mosdac-portal");

        assert_eq!(card.kind_name(), "document");
        assert_eq!(card.launch(), None);
        assert!(card.product_list().is_empty());
        assert_eq!(card.file_type_label(), Some("Web Portal"));
        assert_eq!(card.download(), Some("#mosdac-portal"));
    }

    #[test]
    fn test_generic_card_has_no_download() {
        let card = ResponseCard::generic("Quick Access")
            .download_link("#nowhere")
            .link("User Guide", "#");
        assert_eq!(card.download(), None);
        assert_eq!(card.links, vec![CardLink::new("User Guide", "#")]);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ChatMessage::user("hello");
        let b = ChatMessage::user("hello");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_render_includes_card_fields() {
        let card = ResponseCard::mission("INSAT-3D Mission")
            .mission_name("Meteorological Satellite")
            .launch_date("July 26, 2013")
            .products(["Imager", "Sounder"])
            .download_link("#insat3d-data");
        let message = ChatMessage::assistant("Here you go", vec![card]);
        let rendered: Vec<String> = message.render(80).iter().map(line_text).collect();

        assert!(rendered.iter().any(|l| l.contains("Here you go")));
        assert!(rendered.iter().any(|l| l.contains("INSAT-3D Mission")));
        assert!(rendered.iter().any(|l| l.contains("Launch: July 26, 2013")));
        assert!(rendered.iter().any(|l| l.contains("Products: Imager, Sounder")));
        assert!(rendered.iter().any(|l| l.contains("#insat3d-data")));
    }

    #[test]
    fn test_document_card_shows_type_and_size() {
        let card = ResponseCard::mission("Ignored size").size("1 MB");
        assert_eq!(card.file_size(), None);

        let card = ResponseCard::document("Mission Parameters Spreadsheet")
            .file_type("XLSX")
            .size("1.2 MB")
            .download_link("#xlsx-download-1");
        let rendered: Vec<String> = card.render(60, "").iter().map(line_text).collect();
        assert!(rendered.iter().any(|l| l.contains("Type: XLSX")));
        assert!(rendered.iter().any(|l| l.contains("Size: 1.2 MB")));
        assert!(rendered.iter().any(|l| l.contains("#xlsx-download-1")));
    }

    #[test]
    fn test_user_messages_are_indented() {
        let rendered = ChatMessage::user("hi").render(40);
        assert!(line_text(&rendered[0]).starts_with(USER_INDENT));
    }
}
