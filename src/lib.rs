// src/lib.rs

pub mod app;
pub mod catalog;
pub mod chat_message;
pub mod config;
pub mod constants;
pub mod controller;
pub mod errors;
pub mod event;
pub mod key_handlers;
pub mod locale;
pub mod logging;
pub mod rules;
pub mod simulator;
pub mod status_indicator;
pub mod store;
pub mod ui;
pub mod voice;
pub mod widget;

pub use app::{App, AppState};
pub use chat_message::{Author, CardKind, CardLink, ChatMessage, ResponseCard};
pub use locale::Language;
pub use simulator::{Reply, Rule, RuleTable};
pub use store::MessageStore;
pub use widget::{ChatWidget, WidgetKind};
