use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::models::quiz::QuizQuestion;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value as JsonValue;

const SYSTEM_PROMPT: &str = "You are an expert educator. Your task is to read the provided text and create a quiz based ONLY on that specific information. You must output a JSON array.";

const QUESTION_FORMAT: &str = r#"[{"question": "...", "options": {"A":"...","B":"...","C":"...","D":"..."}, "correct_answer": "A", "explanation": "...", "difficulty": "Medium"}]"#;

#[derive(Clone)]
pub struct AIService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f64,
    question_count: usize,
}

impl AIService {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            question_count: config.question_count,
        })
    }

    /// Returns the model's quiz items exactly as produced, after list
    /// normalization. Shape problems are logged, never corrected.
    pub async fn generate_quiz(&self, article_text: &str) -> Result<Vec<JsonValue>> {
        let payload = self.build_payload(article_text);

        tracing::info!(model = %self.model, "Requesting quiz from LLM");
        let raw = self.chat_completion(payload).await?;
        let items = normalize_quiz_payload(raw);

        let well_formed = inspect_questions(&items, self.question_count);
        tracing::info!(
            items = items.len(),
            well_formed,
            "LLM returned quiz items"
        );
        Ok(items)
    }

    pub fn build_payload(&self, article_text: &str) -> JsonValue {
        let user_prompt = format!(
            "ARTICLE CONTENT:\n{}\n\n\
             TASK:\nCreate exactly {} Multiple Choice Questions based ONLY on the Article Content above.\n\
             Return ONLY a raw JSON array in this format:\n{}",
            article_text, self.question_count, QUESTION_FORMAT
        );

        serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": user_prompt}
            ],
            "temperature": self.temperature,
            "response_format": { "type": "json_object" }
        })
    }

    async fn chat_completion(&self, payload: JsonValue) -> Result<JsonValue> {
        let res = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!("LLM API Error {}: {}", status, text)));
        }

        let body: JsonValue = res.json().await?;
        let content = body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| Error::Upstream("Invalid LLM response format".to_string()))?;

        serde_json::from_str(content).map_err(|e| Error::ModelOutput(e.to_string()))
    }
}

/// Flattens whatever JSON the model produced into a list of quiz items.
///
/// A top-level array is used as is. An object carrying a `questions` field
/// yields that field, and any other single value becomes a one-element list.
pub fn normalize_quiz_payload(raw: JsonValue) -> Vec<JsonValue> {
    match raw {
        JsonValue::Array(items) => items,
        JsonValue::Object(mut map) => match map.remove("questions") {
            Some(JsonValue::Array(items)) => items,
            Some(other) => vec![other],
            None => vec![JsonValue::Object(map)],
        },
        other => vec![other],
    }
}

/// Counts items that fit the [`QuizQuestion`] shape, warning about the rest
/// and about a question count other than `expected`.
pub fn inspect_questions(items: &[JsonValue], expected: usize) -> usize {
    let mut well_formed = 0;

    for (idx, item) in items.iter().enumerate() {
        match QuizQuestion::deserialize(item) {
            Ok(_) => well_formed += 1,
            Err(e) => tracing::warn!(index = idx, error = %e, "Quiz item does not match the question shape"),
        }
    }

    if items.len() != expected {
        tracing::warn!(expected, got = items.len(), "LLM returned an unexpected number of quiz items");
    }

    well_formed
}
