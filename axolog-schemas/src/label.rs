use thiserror::Error;

/// Raised when user-entered text does not name a known enumeration member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("Unknown feeding type '{0}' (expected one of: earthworms, pellets, shrimp, specialty-mix)")]
    UnknownFeeding(String),

    #[error("Unknown health observation '{0}'")]
    UnknownHealthTag(String),

    #[error("Unknown maintenance task '{0}' (expected one of: water-change, filter-clean, full-clean)")]
    UnknownTask(String),

    #[error("Unknown water parameter '{0}'")]
    UnknownParameter(String),
}

/// Normalizes free-form input so that `Good Appetite`, `good_appetite` and
/// `good-appetite` all resolve to the same label.
pub(crate) fn normalize(input: &str) -> String {
    input
        .trim()
        .to_ascii_lowercase()
        .replace(['_', ' '], "-")
}
