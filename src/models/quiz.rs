use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestion {
    pub question: String,
    pub options: QuizOptions,
    pub correct_answer: AnswerKey,
    #[serde(default)]
    pub explanation: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_difficulty() -> String {
    "Medium".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    fn from_loose(raw: &str) -> Option<Self> {
        match raw.trim().chars().next()?.to_ascii_uppercase() {
            'A' => Some(AnswerKey::A),
            'B' => Some(AnswerKey::B),
            'C' => Some(AnswerKey::C),
            'D' => Some(AnswerKey::D),
            _ => None,
        }
    }
}

// Models occasionally answer "b" or "B) ..." instead of the bare key.
impl<'de> Deserialize<'de> for AnswerKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        AnswerKey::from_loose(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid answer key: {}", raw)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct QuizRecord {
    pub id: i32,
    pub wiki_url: String,
    pub created_at: DateTime<Utc>,
    #[schema(value_type = Vec<QuizQuestion>)]
    pub quiz_data: JsonValue,
}
