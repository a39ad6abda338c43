use thiserror::Error;

/// Library-wide error type for foodhub operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Selector has no registered restaurant variant.
    #[error("Unsupported restaurant type '{0}'")]
    UnsupportedType(String),
}

impl AppError {
    pub fn unsupported<S: Into<String>>(selector: S) -> Self {
        AppError::UnsupportedType(selector.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_message_names_the_selector() {
        let err = AppError::unsupported("drive_thru");
        assert_eq!(err.to_string(), "Unsupported restaurant type 'drive_thru'");
    }
}
