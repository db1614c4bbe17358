use crate::event::{AppEvent, EventSender};
use crate::locale::Language;
use crate::widget::WidgetKind;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::io::ErrorKind;
use std::sync::Arc;
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoiceError {
    #[error("speech recognition is not available")]
    Unavailable,

    #[error("no speech was recognized")]
    NoMatch,

    #[error("speech recognition failed: {0}")]
    Failed(String),
}

/// Platform speech-recognition capability. One call per request; the future
/// resolves with the recognized transcript.
pub trait SpeechRecognizer: Send + Sync {
    fn recognize(&self, language: Language) -> BoxFuture<'static, Result<String, VoiceError>>;
}

/// Used when no recognizer is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unavailable;

impl SpeechRecognizer for Unavailable {
    fn recognize(&self, _language: Language) -> BoxFuture<'static, Result<String, VoiceError>> {
        futures::future::ready(Err(VoiceError::Unavailable)).boxed()
    }
}

/// Runs an external speech-to-text command. The locale tag (`en-US`,
/// `hi-IN`) is appended as the last argument and trimmed stdout is the
/// transcript.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
}

impl CommandRecognizer {
    /// Returns `None` for a blank command line.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl SpeechRecognizer for CommandRecognizer {
    fn recognize(&self, language: Language) -> BoxFuture<'static, Result<String, VoiceError>> {
        run_command(self.program.clone(), self.args.clone(), language).boxed()
    }
}

async fn run_command(
    program: String,
    args: Vec<String>,
    language: Language,
) -> Result<String, VoiceError> {
    let output = Command::new(&program)
        .args(&args)
        .arg(language.speech_tag())
        .output()
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => VoiceError::Unavailable,
            _ => VoiceError::Failed(e.to_string()),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(VoiceError::Failed(if stderr.is_empty() {
            format!("{} exited with {}", program, output.status)
        } else {
            stderr
        }));
    }

    let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if transcript.is_empty() {
        Err(VoiceError::NoMatch)
    } else {
        Ok(transcript)
    }
}

pub fn recognizer_from_command(command_line: Option<&str>) -> Arc<dyn SpeechRecognizer> {
    match command_line.and_then(CommandRecognizer::parse) {
        Some(recognizer) => {
            log::info!("Voice input uses external command '{}'", recognizer.program);
            Arc::new(recognizer)
        }
        None => Arc::new(Unavailable),
    }
}

/// Starts one recognition request and posts the outcome back to the loop.
pub fn spawn_recognition(
    recognizer: Arc<dyn SpeechRecognizer>,
    widget: WidgetKind,
    session: u64,
    language: Language,
    events: EventSender,
) {
    tokio::spawn(async move {
        let result = recognizer.recognize(language).await;
        if events
            .send(AppEvent::VoiceFinished {
                widget,
                session,
                result,
            })
            .is_err()
        {
            log::debug!("Voice result for {:?} dropped, event loop is gone", widget);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_recognizer() {
        assert_eq!(
            Unavailable.recognize(Language::En).await,
            Err(VoiceError::Unavailable)
        );
    }

    #[test]
    fn test_parse_blank_command() {
        assert!(CommandRecognizer::parse("   ").is_none());
        let parsed = CommandRecognizer::parse("listen --once").unwrap();
        assert_eq!(parsed.program, "listen");
        assert_eq!(parsed.args, vec!["--once".to_string()]);
    }

    #[tokio::test]
    async fn test_command_transcript_gets_locale_tag() {
        let recognizer = CommandRecognizer::parse("echo ocean data").unwrap();
        assert_eq!(
            recognizer.recognize(Language::Hi).await,
            Ok("ocean data hi-IN".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let recognizer = CommandRecognizer::parse("definitely-not-a-real-stt-binary").unwrap();
        assert_eq!(
            recognizer.recognize(Language::En).await,
            Err(VoiceError::Unavailable)
        );
    }

    #[tokio::test]
    async fn test_spawned_recognition_reports_back() {
        let (tx, mut rx) = crate::event::channel();
        spawn_recognition(Arc::new(Unavailable), WidgetKind::Sidebar, 3, Language::En, tx);
        match rx.recv().await {
            Some(AppEvent::VoiceFinished {
                widget,
                session,
                result,
            }) => {
                assert_eq!(widget, WidgetKind::Sidebar);
                assert_eq!(session, 3);
                assert_eq!(result, Err(VoiceError::Unavailable));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
