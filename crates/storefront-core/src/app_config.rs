use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// What the order store does when asked to move an order out of a terminal
/// status (`Delivered`, `Cancelled`, `Returned`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TerminalTransitionPolicy {
    /// Refuse the write with an invalid-transition error.
    #[default]
    Reject,
    /// Apply the write and log a warning.
    Warn,
}

impl std::fmt::Display for TerminalTransitionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalTransitionPolicy::Reject => write!(f, "reject"),
            TerminalTransitionPolicy::Warn => write!(f, "warn"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub catalog_path: PathBuf,
    pub orders_path: PathBuf,
    pub items_per_page: usize,
    pub recent_orders: usize,
    pub terminal_policy: TerminalTransitionPolicy,
}
