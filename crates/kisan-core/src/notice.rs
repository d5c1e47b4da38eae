//! Transient user-visible notices (toasts).

/// How prominently a notice should be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    /// Something the user tried did not work.
    Destructive,
}

/// A short message shown to the user for a fixed duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub severity: Severity,
    pub duration_ms: u64,
}

impl Notice {
    /// Informational notice.
    pub fn info(title: impl Into<String>, body: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity: Severity::Info,
            duration_ms,
        }
    }

    /// Error-styled notice.
    pub fn destructive(title: impl Into<String>, body: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            severity: Severity::Destructive,
            ..Self::info(title, body, duration_ms)
        }
    }
}
