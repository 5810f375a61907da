use serde_json::Value;
use std::fmt;

pub const GENERIC_FETCH_MESSAGE: &str = "Failed to fetch data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Network failure or an upstream-reported HTTP error. The application
    /// does not distinguish status semantics; both surface here.
    Transport,
    /// The body arrived but does not have the expected shape (no `data`
    /// field, or rows that fail to parse).
    InvalidResponse,
}

/// Fetch failure with enough context to log and to render for the user.
/// Carried through `anyhow::Error`; callers recover it via `downcast_ref`.
#[derive(Debug, Clone)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub detail: String,
    pub raw_response_json: Option<Value>,
}

impl FetchError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            detail: detail.into(),
            raw_response_json: None,
        }
    }

    pub fn invalid_response(detail: impl Into<String>, raw: Option<Value>) -> Self {
        Self {
            kind: FetchErrorKind::InvalidResponse,
            detail: detail.into(),
            raw_response_json: raw,
        }
    }

    /// Message shown in the error panel. Falls back to a generic string
    /// when the failure carried no detail of its own.
    pub fn user_message(&self) -> &str {
        let detail = self.detail.trim();
        if detail.is_empty() {
            GENERIC_FETCH_MESSAGE
        } else {
            detail
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch error ({:?}): {}", self.kind, self.user_message())
    }
}

impl std::error::Error for FetchError {}
