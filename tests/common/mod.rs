#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use trivia_api::db::queries::{categories::create_category, questions::create_question};
use trivia_api::db::{self, NewQuestion};
use trivia_api::server::app::{build_router, AppState};

pub const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, category, difficulty). Sports (6) is left without questions.
pub const QUESTIONS: [(&str, &str, i64, i64); 15] = [
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which Dutch graphic artist is known for mathematical lithographs?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("Which country did the ill-fated Titanic depart from?", "England", 4, 3),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in Interview with the Vampire?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton?", "Edward Scissorhands", 5, 3),
];

pub async fn create_pool() -> SqlitePool {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let pool = db::in_memory().await.expect("Failed to open in-memory database");
    db::run_migrations(&pool).await.expect("Failed to run migrations");
    pool
}

pub async fn seed(pool: &SqlitePool) {
    for kind in CATEGORIES {
        create_category(pool, kind).await.unwrap();
    }
    for (question, answer, category, difficulty) in QUESTIONS {
        let new = NewQuestion {
            question: question.to_owned(),
            answer: answer.to_owned(),
            category,
            difficulty,
        };
        create_question(pool, &new).await.unwrap();
    }
}

pub async fn create_test_app() -> (Router, SqlitePool) {
    let pool = create_pool().await;
    seed(&pool).await;
    (build_router(AppState { pool: pool.clone() }), pool)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            request = request.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&body).unwrap())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn assert_error(status: StatusCode, body: &Value, code: u16, message: &str) {
    assert_eq!(status.as_u16(), code);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
}
