use crate::controller::ReplyTicket;
use crate::voice::VoiceError;
use crate::widget::WidgetKind;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Everything the main loop reacts to. All state mutation happens on the loop
/// that drains these, one event at a time.
#[derive(Debug)]
pub enum AppEvent {
    Input(crossterm::event::Event),
    Tick,
    ReplyDue(ReplyTicket),
    VoiceFinished {
        widget: WidgetKind,
        /// Session of the widget when the request started.
        session: u64,
        result: Result<String, VoiceError>,
    },
}

pub type EventSender = UnboundedSender<AppEvent>;
pub type EventReceiver = UnboundedReceiver<AppEvent>;

pub fn channel() -> (EventSender, EventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}
