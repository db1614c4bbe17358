use crate::errors::ChatError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The two locales the portal ships string tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// BCP-47 tag handed to the speech recognizer.
    pub fn speech_tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Hi => "hi-IN",
        }
    }

    /// Label of the toggle button, i.e. the name of the *other* language.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::En => "हिन्दी",
            Language::Hi => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "hi" | "hindi" => Ok(Language::Hi),
            other => Err(ChatError::config_error(format!(
                "Unsupported language '{}', expected 'en' or 'hi'",
                other
            ))),
        }
    }
}

/// A static string with one entry per locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub hi: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, hi: &'static str) -> Self {
        Self { en, hi }
    }

    /// Same text in both locales, for widgets that only ship English strings.
    pub const fn same(text: &'static str) -> Self {
        Self { en: text, hi: text }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Hi => self.hi,
        }
    }
}
