use thiserror::Error;

/// Errors raised while assembling an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("duplicate rule name '{name}'")]
    DuplicateRule { name: String },

    #[error("no rules registered; at least one rule is required")]
    NoRules,

    #[error("invalid policy value for '{field}': {reason}")]
    InvalidPolicy { field: String, reason: String },
}
