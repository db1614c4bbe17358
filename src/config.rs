use crate::constants::{
    APP_NAME, DEFAULT_REPLY_DELAY_MS, MAX_REPLY_DELAY_MS, SIDEBAR_REPLY_DELAY_MS,
};
use crate::errors::{ChatError, ChatResult};
use crate::locale::Language;
use crate::widget::{WidgetKind, WidgetSettings};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub full_page_delay_ms: u64,
    pub floating_delay_ms: u64,
    pub sidebar_delay_ms: u64,
    pub sequenced_replies: bool,
    pub voice_command: Option<String>,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::En,
            full_page_delay_ms: DEFAULT_REPLY_DELAY_MS,
            floating_delay_ms: DEFAULT_REPLY_DELAY_MS,
            sidebar_delay_ms: SIDEBAR_REPLY_DELAY_MS,
            sequenced_replies: false,
            voice_command: None,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn widget_settings(&self, kind: WidgetKind) -> WidgetSettings {
        let delay_ms = match kind {
            WidgetKind::FullPage => self.full_page_delay_ms,
            WidgetKind::Floating => self.floating_delay_ms,
            WidgetKind::Sidebar => self.sidebar_delay_ms,
        };
        WidgetSettings {
            delay: Duration::from_millis(delay_ms),
            sequenced_replies: self.sequenced_replies,
        }
    }

    pub fn log_directory(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(env::temp_dir)
                .join(APP_NAME)
                .join("logs")
        })
    }
}

/// Loads (or creates) the user config file and applies environment overrides.
pub fn initialize_config() -> ChatResult<Config> {
    let config_path = get_config_path()?;
    let mut config = load_or_create(&config_path)?;
    apply_overrides(&mut config, |key| env::var(key).ok())?;
    validate_config(&config)?;
    Ok(config)
}

fn get_config_path() -> ChatResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ChatError::config_error("Could not determine config directory"))?;

    Ok(config_dir.join(APP_NAME).join("config.json"))
}

/// Reads the config at `path`, writing the defaults there first if the file
/// does not exist yet.
pub fn load_or_create(path: &Path) -> ChatResult<Config> {
    if path.exists() {
        let config_str = fs::read_to_string(path).map_err(|e| {
            ChatError::config_error(format!("Failed to read config file: {}", e))
        })?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;
        Ok(config)
    } else {
        let config = Config::default();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ChatError::config_error(format!("Failed to create config directory: {}", e))
            })?;
        }

        let config_str = serde_json::to_string_pretty(&config)?;
        fs::write(path, config_str).map_err(|e| {
            ChatError::config_error(format!("Failed to write config file: {}", e))
        })?;

        Ok(config)
    }
}

/// Applies `MOSDAC_CHAT_LANG` and `MOSDAC_CHAT_LOG_LEVEL`.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> ChatResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(lang) = lookup("MOSDAC_CHAT_LANG") {
        config.language = lang.parse()?;
    }
    if let Some(level) = lookup("MOSDAC_CHAT_LOG_LEVEL") {
        config.log_level = level;
    }
    Ok(())
}

fn validate_config(config: &Config) -> ChatResult<()> {
    for (name, delay) in [
        ("full_page_delay_ms", config.full_page_delay_ms),
        ("floating_delay_ms", config.floating_delay_ms),
        ("sidebar_delay_ms", config.sidebar_delay_ms),
    ] {
        if delay > MAX_REPLY_DELAY_MS {
            return Err(ChatError::config_error(format!(
                "{} must be at most {} ms",
                name, MAX_REPLY_DELAY_MS
            )));
        }
    }

    if config.log_level.trim().is_empty() {
        return Err(ChatError::config_error("log_level is required"));
    }

    if let Some(command) = &config.voice_command {
        if command.trim().is_empty() {
            return Err(ChatError::config_error(
                "voice_command must not be blank; remove it to disable voice input",
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_delay_too_long() {
        let config = Config {
            sidebar_delay_ms: MAX_REPLY_DELAY_MS + 1,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_blank_voice_command() {
        let config = Config {
            voice_command: Some("  ".to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let created = load_or_create(&path).unwrap();
        assert_eq!(created, Config::default());
        assert!(path.exists());

        let reloaded = load_or_create(&path).unwrap();
        assert_eq!(reloaded, created);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "language": "hi", "sequenced_replies": true }"#).unwrap();

        let config = load_or_create(&path).unwrap();
        assert_eq!(config.language, Language::Hi);
        assert!(config.sequenced_replies);
        assert_eq!(config.sidebar_delay_ms, SIDEBAR_REPLY_DELAY_MS);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(load_or_create(&path), Err(ChatError::Config(_))));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("MOSDAC_CHAT_LANG", "hi"), ("MOSDAC_CHAT_LOG_LEVEL", "debug")]);
        let mut config = Config::default();
        apply_overrides(&mut config, |k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.language, Language::Hi);
        assert_eq!(config.log_level, "debug");

        let mut config = Config::default();
        assert!(apply_overrides(&mut config, |_| Some("klingon".to_string())).is_err());
    }

    #[test]
    fn test_widget_settings_per_kind() {
        let config = Config::default();
        assert_eq!(
            config.widget_settings(WidgetKind::Sidebar).delay,
            Duration::from_millis(1500)
        );
        assert_eq!(
            config.widget_settings(WidgetKind::Floating).delay,
            Duration::from_millis(1000)
        );
    }
}
