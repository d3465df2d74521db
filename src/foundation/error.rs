/// Convenience result type used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or querying a timeline.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Errors while evaluating a frame into a style tree.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    /// Build an [`EngineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EngineError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build an [`EngineError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_map_to_variants() {
        assert!(matches!(
            EngineError::validation("x"),
            EngineError::Validation(_)
        ));
        assert!(matches!(EngineError::timeline("x"), EngineError::Timeline(_)));
        assert!(matches!(
            EngineError::evaluation("x"),
            EngineError::Evaluation(_)
        ));
    }

    #[test]
    fn display_includes_message() {
        let e = EngineError::timeline("transition longer than segment");
        assert_eq!(
            e.to_string(),
            "timeline error: transition longer than segment"
        );
    }
}
