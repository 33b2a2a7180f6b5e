use thiserror::Error;

/// Errors raised while turning raw strings into domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown hazard type: {0}")]
    UnknownHazard(String),

    #[error("urgency {0} is outside 0-100")]
    UrgencyOutOfRange(i64),

    #[error("trust score {0} is outside 0-100")]
    TrustOutOfRange(i64),

    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    /// Catch-all for the small closed enums (status, role, platform, ...).
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl CoreError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        CoreError::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}
