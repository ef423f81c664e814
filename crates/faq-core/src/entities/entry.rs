use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A question/answer pair filed under one category.
///
/// All three fields are always present; missing input becomes an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl FaqEntry {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
        }
    }
}
