use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Json},
};
use serde_json::Value as JsonValue;
use validator::Validate;

use crate::{dto::quiz_dto::GenerateQuizPayload, error::Result, AppState};

#[utoipa::path(
    post,
    path = "/generate-quiz",
    request_body = GenerateQuizPayload,
    responses(
        (status = 200, description = "Generated quiz", body = [QuizQuestion]),
        (status = 400, description = "Invalid URL", body = ErrorResponse),
        (status = 422, description = "Malformed body or not enough article text", body = ErrorResponse),
        (status = 502, description = "Article fetch or model failure", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn generate_quiz(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateQuizPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    tracing::info!("Generating quiz for {}", payload.url);

    let questions = run_pipeline(&state, &payload.url).await?;
    Ok(Json(questions))
}

async fn run_pipeline(state: &AppState, url: &str) -> Result<Vec<JsonValue>> {
    let article_text = state.article_service.fetch_article_text(url).await?;
    let questions = state.ai_service.generate_quiz(&article_text).await?;
    let record = state.quiz_service.save(url, &questions).await?;

    tracing::info!(
        quiz_id = record.id,
        questions = questions.len(),
        "Quiz saved for {}",
        url
    );
    Ok(questions)
}

#[utoipa::path(
    get,
    path = "/history",
    responses(
        (status = 200, description = "All saved quizzes, newest first", body = [QuizRecord]),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_history(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let records = state.quiz_service.list_all().await?;
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/history/{id}",
    params(
        ("id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Saved quiz", body = QuizRecord),
        (status = 404, description = "Quiz not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_history_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let record = state.quiz_service.get_by_id(id).await?;
    Ok(Json(record))
}
