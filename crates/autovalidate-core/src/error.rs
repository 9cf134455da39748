use thiserror::Error;

/// Lookup of a rule name that was never registered.
///
/// The walker never produces this; it checks `has` first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no validation rule registered under '{name}'")]
pub struct UnknownRuleError {
    pub name: String,
}
