use crate::catalog::Category;
use crate::config::Config;
use crate::controller::{ReplyScheduler, ReplyTicket};
use crate::event::{AppEvent, EventSender};
use crate::locale::Language;
use crate::status_indicator::StatusIndicator;
use crate::voice::{self, SpeechRecognizer, VoiceError};
use crate::widget::{ChatWidget, WidgetKind};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    QuitConfirm,
    Quit,
}

/// Top-level state: the three independent widgets plus page-level chrome.
pub struct App {
    pub state: AppState,
    pub language: Language,
    /// Which docked assistant fills the page (full-page or sidebar layout).
    pub view: WidgetKind,
    pub catalog: Option<Category>,
    pub status_indicator: StatusIndicator,
    full_page: ChatWidget,
    floating: ChatWidget,
    sidebar: ChatWidget,
    scheduler: ReplyScheduler,
    recognizer: Arc<dyn SpeechRecognizer>,
    events: EventSender,
}

impl App {
    pub fn new(config: &Config, recognizer: Arc<dyn SpeechRecognizer>, events: EventSender) -> Self {
        let language = config.language;
        let widget = |kind: WidgetKind| ChatWidget::new(kind, language, config.widget_settings(kind));
        App {
            state: AppState::Running,
            language,
            view: WidgetKind::FullPage,
            catalog: None,
            status_indicator: StatusIndicator::new(),
            full_page: widget(WidgetKind::FullPage),
            floating: widget(WidgetKind::Floating),
            sidebar: widget(WidgetKind::Sidebar),
            scheduler: ReplyScheduler::new(events.clone()),
            recognizer,
            events,
        }
    }

    pub fn widget(&self, kind: WidgetKind) -> &ChatWidget {
        match kind {
            WidgetKind::FullPage => &self.full_page,
            WidgetKind::Floating => &self.floating,
            WidgetKind::Sidebar => &self.sidebar,
        }
    }

    pub fn widget_mut(&mut self, kind: WidgetKind) -> &mut ChatWidget {
        match kind {
            WidgetKind::FullPage => &mut self.full_page,
            WidgetKind::Floating => &mut self.floating,
            WidgetKind::Sidebar => &mut self.sidebar,
        }
    }

    /// The widget receiving keystrokes: the floating window while it is open,
    /// otherwise the docked view.
    pub fn focused(&self) -> WidgetKind {
        if self.floating.is_open() {
            WidgetKind::Floating
        } else {
            self.view
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }

    pub fn show_view(&mut self, kind: WidgetKind) {
        if kind != WidgetKind::Floating && self.view != kind {
            log::debug!("Switching view to {:?}", kind);
            self.view = kind;
        }
    }

    pub fn toggle_floating(&mut self) {
        self.floating.toggle();
        log::info!("Floating assistant {:?}", self.floating.visibility());
    }

    /// Switches locale. Static strings follow immediately; transcripts keep
    /// whatever language they were written in.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        log::info!("Language switched to {}", self.language);
    }

    pub fn cycle_catalog(&mut self) {
        self.catalog = Category::cycle(self.catalog);
    }

    pub fn submit_focused(&mut self) {
        let kind = self.focused();
        let language = self.language;
        if let Some(ticket) = self.widget_mut(kind).submit_input(language) {
            self.schedule(ticket);
        }
    }

    pub fn submit_quick_topic(&mut self, index: usize) {
        let kind = self.focused();
        let language = self.language;
        if let Some(ticket) = self.widget_mut(kind).submit_quick_topic(index, language) {
            self.schedule(ticket);
        }
    }

    fn schedule(&mut self, ticket: ReplyTicket) {
        let delay = self.widget(ticket.widget).delay();
        self.scheduler.schedule(ticket, delay);
    }

    pub fn start_voice_input(&mut self) {
        let kind = self.focused();
        let language = self.language;
        if !self.widget_mut(kind).begin_listening() {
            return;
        }
        let session = self.widget(kind).session();
        log::info!("{:?} voice request ({})", kind, language.speech_tag());
        voice::spawn_recognition(
            self.recognizer.clone(),
            kind,
            session,
            language,
            self.events.clone(),
        );
    }

    pub fn new_session(&mut self) {
        let kind = self.focused();
        let language = self.language;
        self.widget_mut(kind).new_session(language);
        log::info!("{:?} started a new session", kind);
    }

    /// Applies a non-input event.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ReplyDue(ticket) => {
                self.widget_mut(ticket.widget).deliver(&ticket);
            }
            AppEvent::VoiceFinished {
                widget,
                session,
                result,
            } => {
                if matches!(result, Err(VoiceError::Unavailable)) {
                    log::info!("{:?} voice input unavailable", widget);
                }
                let language = self.language;
                self.widget_mut(widget).finish_listening(session, result, language);
            }
            AppEvent::Tick => self.status_indicator.update_spinner(),
            AppEvent::Input(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{self, EventReceiver};
    use crate::voice::Unavailable;

    fn app() -> (App, EventReceiver) {
        let (tx, rx) = event::channel();
        let config = Config::default();
        (App::new(&config, Arc::new(Unavailable), tx), rx)
    }

    async fn pump(app: &mut App, rx: &mut EventReceiver) {
        let event = rx.recv().await.expect("event");
        app.handle_event(event);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_round_trip_through_scheduler() {
        let (mut app, mut rx) = app();
        app.toggle_floating();
        for c in "Tell me about INSAT-3D".chars() {
            app.widget_mut(WidgetKind::Floating).input_mut().push(c);
        }
        app.submit_focused();
        assert_eq!(app.widget(WidgetKind::Floating).store().len(), 2);

        pump(&mut app, &mut rx).await;
        let store = app.widget(WidgetKind::Floating).store();
        assert_eq!(store.len(), 3);
        assert_eq!(store.messages()[2].cards()[0].title, "INSAT-3D Mission");
    }

    #[tokio::test(start_paused = true)]
    async fn test_language_toggle_does_not_retranslate() {
        let (mut app, mut rx) = app();
        app.widget_mut(WidgetKind::FullPage).input_mut().replace("weather");
        app.submit_focused();
        pump(&mut app, &mut rx).await;
        let before: Vec<String> = app
            .widget(WidgetKind::FullPage)
            .store()
            .iter()
            .map(|m| m.text().to_string())
            .collect();

        app.toggle_language();
        assert_eq!(app.language, Language::Hi);
        let after: Vec<String> = app
            .widget(WidgetKind::FullPage)
            .store()
            .iter()
            .map(|m| m.text().to_string())
            .collect();
        assert_eq!(before, after);

        app.new_session();
        assert!(app.widget(WidgetKind::FullPage).store().messages()[0]
            .text()
            .starts_with("नमस्ते"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_widgets_are_independent() {
        let (mut app, mut rx) = app();
        app.submit_quick_topic(0);
        pump(&mut app, &mut rx).await;
        assert_eq!(app.widget(WidgetKind::FullPage).store().len(), 3);
        assert_eq!(app.widget(WidgetKind::Floating).store().len(), 1);
        assert_eq!(app.widget(WidgetKind::Sidebar).store().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_reply_keeps_submission_language() {
        let (mut app, mut rx) = app();
        app.widget_mut(WidgetKind::FullPage).input_mut().replace("weather");
        app.submit_focused();
        app.toggle_language();
        pump(&mut app, &mut rx).await;

        assert_eq!(app.language, Language::Hi);
        assert_eq!(
            app.widget(WidgetKind::FullPage).store().last().unwrap().text(),
            "Here's what I found for your query:"
        );
    }

    #[tokio::test]
    async fn test_voice_unavailable_round_trip() {
        let (mut app, mut rx) = app();
        app.show_view(WidgetKind::Sidebar);
        app.start_voice_input();
        assert!(app.widget(WidgetKind::Sidebar).is_listening());

        pump(&mut app, &mut rx).await;
        let sidebar = app.widget(WidgetKind::Sidebar);
        assert!(!sidebar.is_listening());
        assert_eq!(sidebar.notice(), Some("Enable microphone access to use voice input"));
        assert_eq!(sidebar.store().len(), 1);
    }

    #[test]
    fn test_app_takes_settings_from_passed_config() {
        let (tx, _rx) = event::channel();
        let config = Config {
            language: Language::Hi,
            sidebar_delay_ms: 250,
            ..Config::default()
        };
        let app = App::new(&config, Arc::new(Unavailable), tx);
        assert_eq!(app.language, Language::Hi);
        assert_eq!(
            app.widget(WidgetKind::Sidebar).delay(),
            std::time::Duration::from_millis(250)
        );
        assert!(app.widget(WidgetKind::FullPage).store().messages()[0]
            .text()
            .starts_with("नमस्ते"));
    }

    #[test]
    fn test_focus_follows_floating_window() {
        let (tx, _rx) = event::channel();
        let mut app = App::new(&Config::default(), Arc::new(Unavailable), tx);
        assert_eq!(app.focused(), WidgetKind::FullPage);
        app.toggle_floating();
        assert_eq!(app.focused(), WidgetKind::Floating);
        app.toggle_floating();
        app.show_view(WidgetKind::Sidebar);
        assert_eq!(app.focused(), WidgetKind::Sidebar);
    }
}
