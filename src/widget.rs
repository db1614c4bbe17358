use crate::chat_message::ChatMessage;
use crate::controller::{InputController, ReplyTicket};
use crate::locale::Language;
use crate::rules::{self, QuickTopic, WidgetProfile};
use crate::store::MessageStore;
use crate::voice::VoiceError;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    FullPage,
    Floating,
    Sidebar,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 3] = [WidgetKind::FullPage, WidgetKind::Floating, WidgetKind::Sidebar];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy)]
pub struct WidgetSettings {
    pub delay: Duration,
    /// Drop replies superseded by a later submission.
    pub sequenced_replies: bool,
}

/// One independent chat instance: transcript, input buffer, rule table and
/// the little bit of UI state the widget owns.
#[derive(Debug)]
pub struct ChatWidget {
    profile: WidgetProfile,
    settings: WidgetSettings,
    store: MessageStore,
    input: InputController,
    visibility: Visibility,
    input_focused: bool,
    topics_open: bool,
    session: u64,
    last_seq: u64,
    pending: usize,
    listening: bool,
    notice: Option<String>,
    /// Lines scrolled up from the bottom of the transcript; 0 follows the tail.
    pub scroll_back: u16,
}

impl ChatWidget {
    pub fn new(kind: WidgetKind, language: Language, settings: WidgetSettings) -> Self {
        let profile = rules::profile(kind);
        let store = seeded_store(&profile, language);
        let visibility = match kind {
            WidgetKind::Floating => Visibility::Closed,
            _ => Visibility::Open,
        };
        Self {
            profile,
            settings,
            store,
            input: InputController::new(),
            visibility,
            input_focused: kind != WidgetKind::Floating,
            topics_open: kind == WidgetKind::Sidebar,
            session: 0,
            last_seq: 0,
            pending: 0,
            listening: false,
            notice: None,
            scroll_back: 0,
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.profile.kind
    }

    pub fn profile(&self) -> &WidgetProfile {
        &self.profile
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputController {
        &mut self.input
    }

    pub fn delay(&self) -> Duration {
        self.settings.delay
    }

    pub fn pending_replies(&self) -> usize {
        self.pending
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn quick_topics(&self) -> &'static [QuickTopic] {
        self.profile.quick_topics
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    /// Appends the user turn and hands back a ticket for the reply, which
    /// will be written in `language`. Blank text changes nothing.
    pub fn submit(&mut self, text: &str, language: Language) -> Option<ReplyTicket> {
        if text.trim().is_empty() {
            return None;
        }
        self.store.append(ChatMessage::user(text));
        self.last_seq += 1;
        self.pending += 1;
        self.scroll_back = 0;
        self.notice = None;
        log::info!(
            "{:?} submission #{} ({} chars)",
            self.kind(),
            self.last_seq,
            text.chars().count()
        );
        Some(ReplyTicket {
            widget: self.kind(),
            query: text.to_string(),
            language,
            session: self.session,
            seq: self.last_seq,
        })
    }

    /// Submits the current input buffer.
    pub fn submit_input(&mut self, language: Language) -> Option<ReplyTicket> {
        let text = self.input.take_submission()?;
        self.submit(&text, language)
    }

    /// Submits the canned phrase of a quick topic. Sidebar topics also
    /// collapse the sidebar.
    pub fn submit_quick_topic(&mut self, index: usize, language: Language) -> Option<ReplyTicket> {
        let topics = self.profile.quick_topics;
        let topic = topics.get(index)?;
        log::debug!("{:?} quick topic '{}'", self.kind(), topic.key);
        if self.kind() == WidgetKind::Sidebar {
            self.topics_open = false;
        }
        self.submit(topic.query.get(language), language)
    }

    /// Produces the simulated reply for a ticket, in the ticket's language,
    /// and appends it. Returns
    /// `false` when the ticket belongs to a discarded session, or was
    /// superseded and sequencing is on.
    pub fn deliver(&mut self, ticket: &ReplyTicket) -> bool {
        if ticket.session != self.session {
            log::info!("{:?} dropped reply #{} from a closed session", self.kind(), ticket.seq);
            return false;
        }
        self.pending = self.pending.saturating_sub(1);
        if self.settings.sequenced_replies && ticket.seq != self.last_seq {
            log::info!(
                "{:?} dropped stale reply #{} (latest #{})",
                self.kind(),
                ticket.seq,
                self.last_seq
            );
            return false;
        }
        let dispatch = self.profile.table.dispatch(&ticket.query, ticket.language);
        log::info!(
            "{:?} reply #{} via {}",
            self.kind(),
            ticket.seq,
            dispatch.rule.unwrap_or("default")
        );
        self.store
            .append(ChatMessage::assistant(dispatch.reply.text, dispatch.reply.cards));
        self.scroll_back = 0;
        true
    }

    /// Discards the transcript and seeds a fresh session in `language`.
    pub fn new_session(&mut self, language: Language) {
        self.store = seeded_store(&self.profile, language);
        self.input.clear();
        self.notice = None;
        self.scroll_back = 0;
        self.session += 1;
        self.pending = 0;
        self.listening = false;
    }

    // Floating state machine: closed -> open -> closed

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn open(&mut self) {
        self.visibility = Visibility::Open;
        self.input_focused = true;
    }

    pub fn close(&mut self) {
        self.visibility = Visibility::Closed;
        self.input_focused = false;
    }

    pub fn toggle(&mut self) {
        match self.visibility {
            Visibility::Closed => self.open(),
            Visibility::Open => self.close(),
        }
    }

    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn topics_open(&self) -> bool {
        self.topics_open
    }

    pub fn toggle_topics(&mut self) {
        self.topics_open = !self.topics_open;
    }

    // Voice input

    /// Marks a recognition request as started. Returns `false` when voice is
    /// not offered by this widget or a request is already pending.
    pub fn begin_listening(&mut self) -> bool {
        if !self.profile.voice_enabled || self.listening {
            return false;
        }
        self.listening = true;
        self.notice = None;
        true
    }

    /// A transcript replaces the input buffer without submitting it. Failures
    /// leave the buffer alone and surface a notice. Results requested in a
    /// discarded session are ignored.
    pub fn finish_listening(
        &mut self,
        session: u64,
        result: Result<String, VoiceError>,
        language: Language,
    ) {
        if session != self.session {
            log::info!("{:?} dropped voice result from a closed session", self.kind());
            return;
        }
        self.listening = false;
        match result {
            Ok(transcript) => {
                self.input.replace(transcript);
            }
            Err(VoiceError::Unavailable) => {
                self.notice = Some(self.profile.text.microphone_access.get(language).to_string());
            }
            Err(e) => {
                log::warn!("{:?} voice input failed: {}", self.kind(), e);
                self.notice = Some(e.to_string());
            }
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_back = self.scroll_back.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_back = self.scroll_back.saturating_sub(1);
    }
}

fn seeded_store(profile: &WidgetProfile, language: Language) -> MessageStore {
    let greeting = (profile.seed)(language);
    MessageStore::seeded(ChatMessage::assistant(greeting.text, greeting.cards))
}
