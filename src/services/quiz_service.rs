use crate::error::{Error, Result};
use crate::models::quiz::QuizRecord;
use serde_json::Value as JsonValue;
use sqlx::types::Json;
use sqlx::PgPool;

#[derive(Clone)]
pub struct QuizService {
    pool: PgPool,
}

impl QuizService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn save(&self, wiki_url: &str, questions: &[JsonValue]) -> Result<QuizRecord> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, QuizRecord>(
            r#"
            INSERT INTO wiki_quiz_results (wiki_url, quiz_data)
            VALUES ($1, $2)
            RETURNING id, wiki_url, created_at, quiz_data
            "#,
        )
        .bind(wiki_url)
        .bind(Json(questions))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(record)
    }

    pub async fn list_all(&self) -> Result<Vec<QuizRecord>> {
        let records = sqlx::query_as::<_, QuizRecord>(
            r#"
            SELECT id, wiki_url, created_at, quiz_data
            FROM wiki_quiz_results
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<QuizRecord> {
        sqlx::query_as::<_, QuizRecord>(
            r#"
            SELECT id, wiki_url, created_at, quiz_data
            FROM wiki_quiz_results
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Quiz {} not found", id)))
    }
}
