//! Submission request DTOs

use validator::Validate;

use crate::constants::{
    MAX_DESCRIPTION_LENGTH, MAX_LEVEL_ID_LENGTH, MAX_LEVEL_NAME_LENGTH, MAX_LINK_LENGTH,
};

/// The modal opened by the "Submit Entry" button.
///
/// `max_length` values mirror the `MAX_*_LENGTH` constants checked by [`SubmitEntryRequest`].
#[derive(Debug, Clone, poise::Modal)]
#[name = "Submit Your Level"]
pub struct SubmitEntryForm {
    #[name = "Level ID"]
    #[max_length = 32]
    pub level_id: String,

    #[name = "Level Name"]
    #[max_length = 100]
    pub level_name: String,

    #[name = "Description (optional)"]
    #[paragraph]
    #[max_length = 1000]
    pub description: Option<String>,

    #[name = "YouTube Link (optional)"]
    #[max_length = 200]
    pub yt_link: Option<String>,
}

/// Submit entry request
#[derive(Debug, Clone, Validate)]
pub struct SubmitEntryRequest {
    #[validate(length(min = 1, max = MAX_LEVEL_ID_LENGTH, message = "Level ID is required"))]
    pub level_id: String,

    #[validate(length(min = 1, max = MAX_LEVEL_NAME_LENGTH, message = "Level Name is required"))]
    pub level_name: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH, message = "Description is too long"))]
    pub description: Option<String>,

    #[validate(length(max = MAX_LINK_LENGTH, message = "Video link is too long"))]
    pub yt_link: Option<String>,
}

impl SubmitEntryRequest {
    /// Trim every field; blank optional fields become `None`
    pub fn normalized(self) -> Self {
        fn optional(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            level_id: self.level_id.trim().to_string(),
            level_name: self.level_name.trim().to_string(),
            description: optional(self.description),
            yt_link: optional(self.yt_link),
        }
    }
}

impl From<SubmitEntryForm> for SubmitEntryRequest {
    fn from(form: SubmitEntryForm) -> Self {
        Self {
            level_id: form.level_id,
            level_name: form.level_name,
            description: form.description,
            yt_link: form.yt_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::max_lengths;
    use poise::Modal as _;

    #[test]
    fn test_normalized_blanks_optional_fields() {
        let request = SubmitEntryRequest {
            level_id: " 1 ".to_string(),
            level_name: "Name".to_string(),
            description: Some("   ".to_string()),
            yt_link: Some(String::new()),
        }
        .normalized();

        assert_eq!(request.level_id, "1");
        assert_eq!(request.description, None);
        assert_eq!(request.yt_link, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_form_limits_match_request_limits() {
        let response = SubmitEntryForm::create(None, "form".to_string());
        let json = serde_json::to_value(&response).unwrap();

        let mut limits = max_lengths(&json, "label");
        limits.sort();

        assert_eq!(
            limits,
            vec![
                ("Description (optional)".to_string(), MAX_DESCRIPTION_LENGTH),
                ("Level ID".to_string(), MAX_LEVEL_ID_LENGTH),
                ("Level Name".to_string(), MAX_LEVEL_NAME_LENGTH),
                ("YouTube Link (optional)".to_string(), MAX_LINK_LENGTH),
            ]
        );
    }

    #[test]
    fn test_validate_lengths() {
        let request = SubmitEntryRequest {
            level_id: "1".to_string(),
            level_name: "x".repeat(101),
            description: None,
            yt_link: None,
        };
        assert!(request.validate().is_err());
    }
}
