use std::collections::BTreeMap;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{get_all_categories, get_category},
            questions::get_questions_for_category,
        },
        Category, Question,
    },
    server::{app::AppState, error::ApiError},
};

use super::ApiResponse;

#[derive(Serialize)]
struct CategoriesBody {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsBody {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Category,
}

async fn categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesBody> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesBody {
        success: true,
        categories: categories.into_iter().map(|c| (c.id, c.kind)).collect(),
    }))
}

// An existing category without questions is reported like an unknown one.
async fn category_questions(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<CategoryQuestionsBody> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    let category = get_category(&pool, id).await?.ok_or(ApiError::NotFound)?;
    let questions = get_questions_for_category(&pool, category.id).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoryQuestionsBody {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(categories))
        .route("/categories/{id}/questions", get(category_questions))
        .with_state(state)
}
