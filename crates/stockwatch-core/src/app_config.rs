use std::path::PathBuf;

/// Browser-like user agent sent with every page request. Several retailers
/// serve a bot wall to unrecognised agents.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Clone)]
pub struct AppConfig {
    /// Append-only log file shared by every check.
    pub log_path: PathBuf,
    pub log_level: String,
    /// Seconds to sleep between poll iterations.
    pub poll_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// YAML target list; `None` means the built-in list.
    pub targets_path: Option<PathBuf>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_path", &self.log_path)
            .field("log_level", &self.log_level)
            .field("poll_interval_secs", &self.poll_interval_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("targets_path", &self.targets_path)
            .finish()
    }
}
