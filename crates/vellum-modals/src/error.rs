//! Error types for the modal layer.

use thiserror::Error;

/// Failures surfaced by the modal registry and theme configuration.
#[derive(Debug, Error)]
pub enum ModalError {
    /// A modal or accessor was used outside a `ModalProvider` subtree.
    #[error("No Modal Container context provided")]
    MissingContainer,
    /// A theme document could not be parsed.
    #[error("invalid modal theme")]
    InvalidTheme {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The overlay stacking priority does not fit a CSS integer.
    #[error("overlay z-index out of range (base {base}, offset {offset})")]
    StackingOutOfRange {
        /// Configured stacking base.
        base: i64,
        /// Configured overlay offset.
        offset: i64,
    },
    /// A theme string would break out of its stylesheet rule.
    #[error("invalid theme value '{field}': must not contain '{{', '}}' or ';'")]
    InvalidStyleValue {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: String,
    },
    /// A theme dimension failed validation.
    #[error("invalid theme dimension '{field}': {reason}")]
    InvalidDimension {
        /// Name of the offending field.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::ModalError;

    #[test]
    fn missing_container_message_is_stable() {
        assert_eq!(
            ModalError::MissingContainer.to_string(),
            "No Modal Container context provided"
        );
    }

    #[test]
    fn stacking_error_names_both_values() {
        let msg = ModalError::StackingOutOfRange { base: 7, offset: 9 }.to_string();
        assert!(msg.contains("base 7"));
        assert!(msg.contains("offset 9"));
    }
}
