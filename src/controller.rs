use crate::event::{AppEvent, EventSender};
use crate::locale::Language;
use crate::widget::WidgetKind;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A submitted query waiting for its simulated reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTicket {
    pub widget: WidgetKind,
    pub query: String,
    /// Language active at submission; the reply is written in it.
    pub language: Language,
    /// Session the query was submitted in; replies never cross sessions.
    pub session: u64,
    /// Per-widget submission number, used when replies are sequenced.
    pub seq: u64,
}

/// The input buffer of one widget.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    buffer: String,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Replaces the buffer, e.g. with a voice transcript.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Takes the buffer for submission. Blank input is left in place and
    /// yields `None`.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        Some(std::mem::take(&mut self.buffer))
    }
}

/// Fires each ticket back into the event loop after a fixed delay.
///
/// Scheduled replies are never cancelled: two quick submissions produce two
/// replies. Whether a late reply is still wanted is decided on delivery.
#[derive(Debug, Clone)]
pub struct ReplyScheduler {
    events: EventSender,
}

impl ReplyScheduler {
    pub fn new(events: EventSender) -> Self {
        Self { events }
    }

    pub fn schedule(&self, ticket: ReplyTicket, delay: Duration) -> JoinHandle<()> {
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = events.send(AppEvent::ReplyDue(ticket)) {
                log::debug!("Reply dropped, event loop is gone: {:?}", e.0);
            }
        })
    }
}
