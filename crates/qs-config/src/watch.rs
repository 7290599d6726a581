//! Page watcher configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_recheck_delay_ms() -> u64 {
    1000
}

const fn default_notification_secs() -> u64 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatchConfig {
    /// Delay before the one-time re-check after the watcher starts.
    #[serde(default = "default_recheck_delay_ms")]
    pub recheck_delay_ms: u64,

    /// Lifetime of the save outcome notification.
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    #[serde(default)]
    pub selectors: SelectorConfig,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            recheck_delay_ms: default_recheck_delay_ms(),
            notification_secs: default_notification_secs(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl WatchConfig {
    #[must_use]
    pub const fn recheck_delay(&self) -> Duration {
        Duration::from_millis(self.recheck_delay_ms)
    }

    #[must_use]
    pub const fn notification_lifetime(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }
}

fn default_marker() -> String {
    ".option.answered-correct".to_string()
}

fn default_question() -> String {
    ".question-text-container .markdown p".to_string()
}

fn default_answer() -> String {
    ".option-text-container .markdown p".to_string()
}

fn default_explanation() -> String {
    ".explanation-text .markdown p".to_string()
}

/// Selectors locating quiz content on the page.
///
/// `answer` and `explanation` are resolved inside the element matched by
/// `marker`; `question` is resolved from the document root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectorConfig {
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_question")]
    pub question: String,
    #[serde(default = "default_answer")]
    pub answer: String,
    #[serde(default = "default_explanation")]
    pub explanation: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            question: default_question(),
            answer: default_answer(),
            explanation: default_explanation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = WatchConfig::default();
        assert_eq!(config.recheck_delay(), Duration::from_secs(1));
        assert_eq!(config.notification_lifetime(), Duration::from_secs(3));
        assert_eq!(config.selectors.marker, ".option.answered-correct");
    }
}
