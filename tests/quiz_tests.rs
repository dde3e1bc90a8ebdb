mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{assert_error, create_test_app, send, QUESTIONS};

#[tokio::test]
async fn test_play_quiz() {
    let (app, _) = create_test_app().await;
    let quiz_category = json!({"type": "History", "id": 4});
    let (status, body) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({"previous_questions": [10, 11], "quiz_category": quiz_category})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["id"], 12);
    assert_eq!(body["category"], quiz_category);
}

#[tokio::test]
async fn test_quiz_exhaustion() {
    let (app, _) = create_test_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({"previous_questions": [10, 11, 12], "quiz_category": {"id": 4}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["question"].is_null());
}

#[tokio::test]
async fn test_quiz_unknown_category_is_exhausted() {
    let (app, _) = create_test_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({"previousQuestions": [], "quizCategory": {"id": 100}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["question"].is_null());
    assert_eq!(body["category"], json!({"id": 100}));
}

#[tokio::test]
async fn test_quiz_all_categories_serves_every_question_once() {
    let (app, _) = create_test_app().await;
    let mut previous: Vec<i64> = Vec::new();
    loop {
        let (status, body) = send(
            &app,
            "POST",
            "/quizzes",
            Some(json!({"previous_questions": previous, "quiz_category": {"id": 0}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let Some(id) = body["question"]["id"].as_i64() else {
            break;
        };
        assert!(!previous.contains(&id));
        previous.push(id);
    }
    let served: HashSet<i64> = previous.into_iter().collect();
    assert_eq!(served, (1..=QUESTIONS.len() as i64).collect::<HashSet<i64>>());
}

#[tokio::test]
async fn test_quiz_without_previous_questions() {
    let (app, _) = create_test_app().await;
    for body in [
        json!({"quiz_category": {"id": "2"}}),
        json!({"quiz_category": {"id": 2}, "previous_questions": null}),
    ] {
        let (status, body) = send(&app, "POST", "/quizzes", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["category"], 2);
    }
}

#[tokio::test]
async fn test_422_play_quiz() {
    let (app, _) = create_test_app().await;
    let invalid: [Value; 4] = [
        json!({"previous_questions": []}),
        json!({"previous_questions": [], "quiz_category": {"type": "Art"}}),
        json!({"previous_questions": [], "quiz_category": {"id": "Art"}}),
        json!({"previous_questions": "1,2", "quiz_category": {"id": 1}}),
    ];
    for body in invalid {
        let (status, body) = send(&app, "POST", "/quizzes", Some(body)).await;
        assert_error(status, &body, 422, "unprocessable");
    }
}
