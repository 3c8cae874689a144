use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModalError {
    #[error("Browser window is not available")]
    WindowUnavailable,

    #[error("Modal root element is not mounted")]
    RootNotMounted,

    #[error("Failed to focus modal root: {0}")]
    Focus(String),

    #[error("Invalid modal theme: {0}")]
    InvalidTheme(#[from] serde_json::Error),
}

pub type ModalResult<T> = Result<T, ModalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ModalError::WindowUnavailable.to_string(),
            "Browser window is not available"
        );
        assert_eq!(
            ModalError::Focus("element is hidden".to_string()).to_string(),
            "Failed to focus modal root: element is hidden"
        );
    }

    #[test]
    fn test_theme_error_from_json() {
        let err: ModalError = serde_json::from_str::<serde_json::Value>("{ nope }")
            .unwrap_err()
            .into();
        assert!(matches!(err, ModalError::InvalidTheme(_)));
        assert!(err.to_string().starts_with("Invalid modal theme"));
    }
}
