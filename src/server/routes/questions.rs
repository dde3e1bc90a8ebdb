use std::collections::BTreeMap;

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::get_all_categories,
            questions::{self, get_all_questions, search_questions},
        },
        Category, NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::{deserialize_page, first_page, Payload},
        error::ApiError,
    },
    telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED},
    trivia::paginate,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default = "first_page", deserialize_with = "deserialize_page")]
    page: i64,
}

#[derive(Deserialize)]
struct CreateQuestion {
    question: String,
    answer: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    difficulty: i64,
}

#[derive(Deserialize)]
struct SearchRequest {
    #[serde(rename = "searchTerm", alias = "search_term")]
    search_term: String,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    current_category: Option<Category>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<Category>,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
}

async fn questions_page(
    State(pool): State<SqlitePool>,
    Query(ListQuery { page }): Query<ListQuery>,
) -> ApiResponse<QuestionsPage> {
    let questions = get_all_questions(&pool).await?;
    let categories = get_all_categories(&pool).await?;

    let current = paginate(&questions, page);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: categories
            .into_iter()
            .map(|c| (c.id, c.kind.to_lowercase()))
            .collect(),
        current_category: None,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Payload(form): Payload<CreateQuestion>,
) -> ApiResponse<Created> {
    let new = NewQuestion {
        question: form.question,
        answer: form.answer,
        category: form.category,
        difficulty: form.difficulty,
    };
    let id = questions::create_question(&pool, &new)
        .await
        .map_err(|error| {
            tracing::warn!("Failed to create question: {error}");
            ApiError::Unprocessable
        })?;
    QUESTIONS_CREATED.inc();
    tracing::info!(id, "Created question");
    Ok(Json(Created {
        success: true,
        created: id,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Deleted> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    if !questions::delete_question(&pool, id).await? {
        return Err(ApiError::NotFound);
    }
    QUESTIONS_DELETED.inc();
    tracing::info!(id, "Deleted question");
    Ok(Json(Deleted {
        success: true,
        deleted: id,
    }))
}

// Search results are never paginated.
async fn search(
    State(pool): State<SqlitePool>,
    Payload(SearchRequest { search_term }): Payload<SearchRequest>,
) -> ApiResponse<SearchResults> {
    let questions = search_questions(&pool, &search_term).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(SearchResults {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(questions_page).post(create_question))
        .route("/questions/search", post(search))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
