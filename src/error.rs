//! Error type shared by the fallible corners of the library.
//!
//! ERROR HANDLING
//! ==============
//! Almost nothing here can fail: missing DOM targets are a silent path and
//! predicates are total. `UiError` covers what remains: bad configuration,
//! a rejected clipboard write, and web-sys calls that throw.

/// Errors surfaced by configuration loading and platform calls.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// The configuration JSON could not be parsed.
    #[error("invalid config json: {0}")]
    Config(#[from] serde_json::Error),
    /// The configuration parsed but a value is out of range.
    #[error("invalid config: {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    /// Configuration arrived after load-time setup already ran.
    #[error("page already initialized; configure must run first")]
    AlreadyInitialized,
    /// The platform clipboard rejected the write or is unavailable.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Dom(String),
}
