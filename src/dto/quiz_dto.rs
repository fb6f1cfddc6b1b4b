use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateQuizPayload {
    #[validate(length(min = 1))]
    #[schema(example = "https://en.wikipedia.org/wiki/Octopus")]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_url_fails_validation() {
        let payload = GenerateQuizPayload { url: String::new() };
        assert!(payload.validate().is_err());

        let payload = GenerateQuizPayload {
            url: "https://en.wikipedia.org/wiki/Octopus".into(),
        };
        assert!(payload.validate().is_ok());
    }
}
