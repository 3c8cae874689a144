//! Class names for each part of the modal.
//!
//! Every rendered element carries a fixed base class followed by whatever
//! the caller supplies for that part. [`ModalClassNames`] is the record of
//! the caller-supplied halves; its default is empty for every part.

use serde::{Deserialize, Serialize};

use crate::error::ModalResult;

pub const OVERLAY_CLASS: &str = "modal-overlay";
pub const CONTENT_CLASS: &str = "modal-content";
pub const TITLE_CLASS: &str = "modal-title";
pub const BODY_CLASS: &str = "modal-body";
pub const FOOTER_CLASS: &str = "modal-footer";
pub const CLOSE_BUTTON_CLASS: &str = "modal-close-button";

/// Joins `base` with each whitespace-separated token of `extra`.
///
/// A blank `extra` yields `base` unchanged, without a trailing space.
pub fn compose_class(base: &str, extra: &str) -> String {
    let mut class = String::from(base);
    for token in extra.split_whitespace() {
        class.push(' ');
        class.push_str(token);
    }
    class
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalClassNames {
    pub overlay_class_name: String,
    pub content_class_name: String,
    pub title_class_name: String,
    pub body_class_name: String,
    pub footer_class_name: String,
    pub close_button_class_name: String,
}

impl ModalClassNames {
    /// Parses a theme document such as `{"overlayClassName": "dim"}`.
    /// Missing keys fall back to empty strings.
    pub fn from_json(json: &str) -> ModalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn overlay(&self) -> String {
        compose_class(OVERLAY_CLASS, &self.overlay_class_name)
    }

    pub fn content(&self) -> String {
        compose_class(CONTENT_CLASS, &self.content_class_name)
    }

    pub fn title(&self) -> String {
        compose_class(TITLE_CLASS, &self.title_class_name)
    }

    pub fn body(&self) -> String {
        compose_class(BODY_CLASS, &self.body_class_name)
    }

    pub fn footer(&self) -> String {
        compose_class(FOOTER_CLASS, &self.footer_class_name)
    }

    pub fn close_button(&self) -> String {
        compose_class(CLOSE_BUTTON_CLASS, &self.close_button_class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModalError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "modal-overlay")]
    #[case("   ", "modal-overlay")]
    #[case("custom-overlay", "modal-overlay custom-overlay")]
    #[case(" dim  wide ", "modal-overlay dim wide")]
    fn test_compose_class(#[case] extra: &str, #[case] expected: &str) {
        assert_eq!(compose_class(OVERLAY_CLASS, extra), expected);
    }

    #[test]
    fn test_default_record_uses_base_classes_only() {
        let names = ModalClassNames::default();
        assert_eq!(names.overlay(), "modal-overlay");
        assert_eq!(names.content(), "modal-content");
        assert_eq!(names.title(), "modal-title");
        assert_eq!(names.body(), "modal-body");
        assert_eq!(names.footer(), "modal-footer");
        assert_eq!(names.close_button(), "modal-close-button");
    }

    #[test]
    fn test_partial_theme_fills_defaults() {
        let names = ModalClassNames::from_json(
            r#"{"overlayClassName": "custom-overlay", "closeButtonClassName": "btn btn-primary"}"#,
        )
        .unwrap();

        assert_eq!(names.overlay(), "modal-overlay custom-overlay");
        assert_eq!(names.close_button(), "modal-close-button btn btn-primary");
        assert_eq!(names.content_class_name, "");
        assert_eq!(names.body(), "modal-body");
    }

    #[test]
    fn test_invalid_theme_is_rejected() {
        let result = ModalClassNames::from_json(r#"{"overlayClassName": 42}"#);
        assert!(matches!(result, Err(ModalError::InvalidTheme(_))));
    }
}
