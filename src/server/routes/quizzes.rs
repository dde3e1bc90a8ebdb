use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions::get_all_questions, Question},
    server::{app::AppState, deserializers::Payload, error::ApiError},
    telemetry::QUIZ_TURNS,
    trivia::{next_question, resolve_pool, QuizCategory},
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizTurn {
    #[serde(alias = "quizCategory")]
    quiz_category: serde_json::Value,
    #[serde(default, alias = "previousQuestions")]
    previous_questions: Option<Vec<i64>>,
}

#[derive(Serialize)]
struct NextQuestion {
    success: bool,
    question: Option<Question>,
    category: serde_json::Value,
}

/// One quiz turn. The client sends back every id it was served so far, so
/// nothing about the play-through is kept between requests.
async fn quiz_turn(
    State(pool): State<SqlitePool>,
    Payload(turn): Payload<QuizTurn>,
) -> ApiResponse<NextQuestion> {
    let category: QuizCategory =
        serde_json::from_value(turn.quiz_category.clone()).map_err(|error| {
            tracing::debug!("Malformed quiz category: {error}");
            ApiError::Unprocessable
        })?;
    let previous = turn.previous_questions.unwrap_or_default();

    let candidates = resolve_pool(get_all_questions(&pool).await?, category);
    let question = next_question(&candidates, &previous, &mut rand::thread_rng()).cloned();

    let outcome = if question.is_some() { "served" } else { "exhausted" };
    QUIZ_TURNS.with_label_values(&[outcome]).inc();
    tracing::debug!(category = category.id, served = previous.len(), outcome, "Quiz turn");

    Ok(Json(NextQuestion {
        success: true,
        question,
        category: turn.quiz_category,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(quiz_turn))
        .with_state(state)
}
