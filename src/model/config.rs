use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

const ENV_CONFIG_PATH: &str = "BENEFITS_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const ENV_HOST: &str = "HOST";
const ENV_PORT: &str = "PORT";
const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
const ENV_MAX_ATTEMPTS: &str = "LLM_MAX_ATTEMPTS";
const ENV_RETRY_BASE_DELAY_MS: &str = "LLM_RETRY_BASE_DELAY_MS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_MIN_DISPLAY_MS: u64 = 2_000;
const DEFAULT_REDIRECT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 1_000;

/// Model client settings
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Absent means fallback-only operation
    pub api_key: Option<String>,
    pub model: String,
    /// Attempts per model call. 1 means no retries.
    pub max_attempts: u32,
    pub retry_base_delay: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_attempts: 1,
            retry_base_delay: Duration::from_millis(DEFAULT_RETRY_BASE_DELAY_MS),
        }
    }
}

/// Guided flow pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowConfig {
    /// Minimum time the loading step lasts, even when classification is faster
    pub min_display: Duration,
    /// How long to wait for a category before sending the visitor back to input
    pub redirect_timeout: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            min_display: Duration::from_millis(DEFAULT_MIN_DISPLAY_MS),
            redirect_timeout: Duration::from_millis(DEFAULT_REDIRECT_TIMEOUT_MS),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LlmSection {
    pub model: Option<String>,
    pub max_attempts: Option<u32>,
    pub retry_base_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlowSection {
    pub min_display_ms: Option<u64>,
    pub redirect_timeout_ms: Option<u64>,
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub llm: LlmSection,
    #[serde(default)]
    pub flow: FlowSection,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub flow: FlowConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            flow: FlowConfig::default(),
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    ///
    /// Environment variables take precedence over the file.
    pub fn from_env() -> Self {
        let config_path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let file = Self::load_config_file(&config_path).unwrap_or_default();

        Self::from_sources(|key| std::env::var(key).ok(), file)
    }

    /// Merge environment lookups over file values over defaults
    ///
    /// Blank or unparseable environment values are ignored.
    pub fn from_sources<F>(env: F, file: ConfigFile) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let port = var(ENV_PORT)
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let host = var(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let api_key = var(ENV_GEMINI_API_KEY);

        let model = var(ENV_GEMINI_MODEL)
            .or(file.llm.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let max_attempts = var(ENV_MAX_ATTEMPTS)
            .and_then(|v| v.trim().parse().ok())
            .or(file.llm.max_attempts)
            .unwrap_or(1);

        let retry_base_delay_ms = var(ENV_RETRY_BASE_DELAY_MS)
            .and_then(|v| v.trim().parse().ok())
            .or(file.llm.retry_base_delay_ms)
            .unwrap_or(DEFAULT_RETRY_BASE_DELAY_MS);

        let flow = FlowConfig {
            min_display: Duration::from_millis(
                file.flow.min_display_ms.unwrap_or(DEFAULT_MIN_DISPLAY_MS),
            ),
            redirect_timeout: Duration::from_millis(
                file.flow
                    .redirect_timeout_ms
                    .unwrap_or(DEFAULT_REDIRECT_TIMEOUT_MS),
            ),
        };

        Self {
            llm: LlmConfig {
                api_key,
                model,
                max_attempts,
                retry_base_delay: Duration::from_millis(retry_base_delay_ms),
            },
            flow,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => Self::parse_config_file(path, &contents),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    fn parse_config_file(path: &Path, contents: &str) -> Option<ConfigFile> {
        let contents = contents.trim();
        if contents.is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Some(ConfigFile::default());
        }

        match serde_yaml::from_str(contents) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded configuration from file");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.llm.max_attempts, 1);
        assert_eq!(config.flow.min_display, Duration::from_secs(2));
        assert_eq!(config.flow.redirect_timeout, Duration::from_secs(10));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn file_with_llm(model: &str, max_attempts: u32) -> ConfigFile {
        ConfigFile {
            llm: LlmSection {
                model: Some(model.to_string()),
                max_attempts: Some(max_attempts),
                retry_base_delay_ms: Some(250),
            },
            flow: FlowSection {
                min_display_ms: Some(100),
                redirect_timeout_ms: Some(400),
            },
        }
    }

    #[test]
    fn test_from_sources_without_env_or_file_matches_defaults() {
        let config = Config::from_sources(env_of(&[]), ConfigFile::default());
        let defaults = Config::default();

        assert!(config.llm.api_key.is_none());
        assert_eq!(config.llm.model, defaults.llm.model);
        assert_eq!(config.llm.max_attempts, 1);
        assert_eq!(config.llm.retry_base_delay, defaults.llm.retry_base_delay);
        assert_eq!(config.flow, defaults.flow);
        assert_eq!(config.bind_addr(), defaults.bind_addr());
    }

    #[test]
    fn test_file_values_apply_without_env() {
        let config = Config::from_sources(env_of(&[]), file_with_llm("gemini-1.5-pro", 3));

        assert_eq!(config.llm.model, "gemini-1.5-pro");
        assert_eq!(config.llm.max_attempts, 3);
        assert_eq!(config.llm.retry_base_delay, Duration::from_millis(250));
        assert_eq!(config.flow.min_display, Duration::from_millis(100));
        assert_eq!(config.flow.redirect_timeout, Duration::from_millis(400));
    }

    #[test]
    fn test_env_overrides_file() {
        let env = env_of(&[
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("LLM_MAX_ATTEMPTS", "4"),
            ("LLM_RETRY_BASE_DELAY_MS", "50"),
            ("HOST", "0.0.0.0"),
            ("PORT", "9090"),
        ]);

        let config = Config::from_sources(env, file_with_llm("gemini-1.5-pro", 3));

        assert_eq!(config.llm.model, "gemini-2.5-flash");
        assert_eq!(config.llm.max_attempts, 4);
        assert_eq!(config.llm.retry_base_delay, Duration::from_millis(50));
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
        // flow pacing only comes from the file
        assert_eq!(config.flow.min_display, Duration::from_millis(100));
    }

    #[test]
    fn test_blank_api_key_means_fallback_only() {
        let config = Config::from_sources(
            env_of(&[("GEMINI_API_KEY", "   ")]),
            ConfigFile::default(),
        );
        assert!(config.llm.api_key.is_none());

        let config = Config::from_sources(
            env_of(&[("GEMINI_API_KEY", "secret")]),
            ConfigFile::default(),
        );
        assert_eq!(config.llm.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_unparseable_env_falls_through() {
        let env = env_of(&[
            ("LLM_MAX_ATTEMPTS", "three"),
            ("LLM_RETRY_BASE_DELAY_MS", "-1"),
            ("PORT", "http"),
        ]);

        let config = Config::from_sources(&env, file_with_llm("gemini-1.5-pro", 3));
        assert_eq!(config.llm.max_attempts, 3);
        assert_eq!(config.llm.retry_base_delay, Duration::from_millis(250));
        assert_eq!(config.port, 8080);

        let config = Config::from_sources(&env, ConfigFile::default());
        assert_eq!(config.llm.max_attempts, 1);
        assert_eq!(config.llm.retry_base_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_blank_model_env_keeps_file_value() {
        let config = Config::from_sources(
            env_of(&[("GEMINI_MODEL", "")]),
            file_with_llm("gemini-1.5-pro", 1),
        );
        assert_eq!(config.llm.model, "gemini-1.5-pro");
    }

    #[test]
    fn test_parse_config_file_sections() {
        let yaml = r#"
llm:
  model: gemini-1.5-pro
  max_attempts: 3
flow:
  min_display_ms: 500
"#;
        let file = Config::parse_config_file(Path::new("test.yaml"), yaml).unwrap();
        assert_eq!(file.llm.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(file.llm.max_attempts, Some(3));
        assert_eq!(file.llm.retry_base_delay_ms, None);
        assert_eq!(file.flow.min_display_ms, Some(500));
        assert_eq!(file.flow.redirect_timeout_ms, None);
    }

    #[test]
    fn test_parse_empty_and_invalid_config_file() {
        let empty = Config::parse_config_file(Path::new("empty.yaml"), "  \n").unwrap();
        assert!(empty.llm.model.is_none());

        assert!(Config::parse_config_file(Path::new("bad.yaml"), "llm: [unclosed").is_none());
    }
}
