use axum::Json;
use utoipa::OpenApi;

use crate::dto::quiz_dto::{ErrorResponse, GenerateQuizPayload};
use crate::models::quiz::{AnswerKey, QuizOptions, QuizQuestion, QuizRecord};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::quiz::generate_quiz,
        super::quiz::list_history,
        super::quiz::get_history_entry,
    ),
    components(schemas(
        GenerateQuizPayload,
        ErrorResponse,
        QuizQuestion,
        QuizOptions,
        AnswerKey,
        QuizRecord,
    )),
    tags((name = "wiki-quiz", description = "Quiz generation from Wikipedia articles"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
