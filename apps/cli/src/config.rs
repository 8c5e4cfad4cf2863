use crate::args::Cli;

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Runtime settings read from the environment (and an optional `.env` file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `GOALFOLIO_LOG_FORMAT`: `text` (default) or `json`
    pub log_format: LogFormat,
    /// `GOALFOLIO_PRETTY_JSON`: indent the recommendation output (default true)
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            pretty_json: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_format = match lookup("GOALFOLIO_LOG_FORMAT") {
            Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => defaults.log_format,
        };

        let pretty_json = lookup("GOALFOLIO_PRETTY_JSON")
            .map(|value| {
                !matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "0" | "false" | "no" | "off"
                )
            })
            .unwrap_or(defaults.pretty_json);

        Self {
            log_format,
            pretty_json,
        }
    }

    /// Command-line flags take precedence over the environment.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if cli.compact {
            self.pretty_json = false;
        }
        self
    }
}
