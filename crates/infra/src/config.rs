use std::path::PathBuf;
use tracing::{info, warn};

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_SCAN_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base url of the external task/assignment/profile backend
    pub backend_url: String,
    /// Api key attached to every backend call, identifies the caller
    pub api_key: Option<String>,
    /// File backing the session scoped key-value store. Cleared on
    /// every startup so fired-reminder state never leaks across sessions.
    pub session_file: PathBuf,
    /// File backing the durable key-value store (focus mode setting)
    pub settings_file: PathBuf,
    /// Webhook receiving system-level notifications, if configured
    pub webhook_url: Option<String>,
    pub webhook_key: Option<String>,
    /// How often the reminder scan runs
    pub scan_interval_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        let backend_url = match std::env::var("TASKZEN_BACKEND_URL") {
            Ok(url) => url,
            Err(_) => {
                info!(
                    "Did not find TASKZEN_BACKEND_URL environment variable. Falling back to: {}",
                    DEFAULT_BACKEND_URL
                );
                DEFAULT_BACKEND_URL.to_string()
            }
        };
        let api_key = std::env::var("TASKZEN_API_KEY").ok();

        let session_file = std::env::var("TASKZEN_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::temp_dir().join("taskzen-session.json"));
        let settings_file = std::env::var("TASKZEN_SETTINGS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| match std::env::var("HOME") {
                Ok(home) => PathBuf::from(home).join(".taskzen").join("settings.json"),
                Err(_) => std::env::temp_dir().join("taskzen-settings.json"),
            });

        let webhook_url = std::env::var("TASKZEN_WEBHOOK_URL").ok();
        let webhook_key = std::env::var("TASKZEN_WEBHOOK_KEY").ok();

        let scan_interval_secs = match std::env::var("TASKZEN_SCAN_INTERVAL_SECS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!(
                        "The given TASKZEN_SCAN_INTERVAL_SECS: {} is not valid, falling back to the default: {}.",
                        raw, DEFAULT_SCAN_INTERVAL_SECS
                    );
                    DEFAULT_SCAN_INTERVAL_SECS
                }
            },
            Err(_) => DEFAULT_SCAN_INTERVAL_SECS,
        };

        Self {
            backend_url,
            api_key,
            session_file,
            settings_file,
            webhook_url,
            webhook_key,
            scan_interval_secs,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn falls_back_to_default_scan_interval_on_invalid_value() {
        std::env::set_var("TASKZEN_SCAN_INTERVAL_SECS", "not-a-number");
        assert_eq!(Config::new().scan_interval_secs, DEFAULT_SCAN_INTERVAL_SECS);

        std::env::set_var("TASKZEN_SCAN_INTERVAL_SECS", "0");
        assert_eq!(Config::new().scan_interval_secs, DEFAULT_SCAN_INTERVAL_SECS);

        std::env::set_var("TASKZEN_SCAN_INTERVAL_SECS", "10");
        assert_eq!(Config::new().scan_interval_secs, 10);

        std::env::remove_var("TASKZEN_SCAN_INTERVAL_SECS");
    }

    #[test]
    #[serial_test::serial]
    fn reads_backend_url_from_environment() {
        std::env::set_var("TASKZEN_BACKEND_URL", "http://backend.test:9000");
        assert_eq!(Config::new().backend_url, "http://backend.test:9000");

        std::env::remove_var("TASKZEN_BACKEND_URL");
        assert_eq!(Config::new().backend_url, DEFAULT_BACKEND_URL);
    }
}
