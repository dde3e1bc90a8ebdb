use std::collections::HashSet;

use sqlx::{SqliteConnection, SqlitePool};

pub use crate::models::{NewQuestion, Question};

pub async fn get_all_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions
        WHERE questions.category = ?1
        ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .await
}

pub async fn get_question_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

// LIKE folds ASCII case only
pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    let pattern = format!("%{}%", escape_like(term));
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions
        WHERE questions.question LIKE ?1 ESCAPE '\'
        ORDER BY id
        "#,
    )
    .bind(pattern)
    .fetch_all(pool)
    .await
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub async fn create_question(pool: &SqlitePool, question: &NewQuestion) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&question.question)
    .bind(&question.answer)
    .bind(question.category)
    .bind(question.difficulty)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Returns `false` when no question had this id.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let mut conn = pool.acquire().await?;
    remove_question(&mut conn, id).await
}

async fn remove_question(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<bool> {
    let deleted = sqlx::query(
        r#"
        DELETE FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .execute(conn)
    .await?
    .rows_affected();
    Ok(deleted > 0)
}

async fn upsert_question(conn: &mut SqliteConnection, question: &Question) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO questions (id, question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT (id) DO UPDATE SET
            question = excluded.question,
            answer = excluded.answer,
            category = excluded.category,
            difficulty = excluded.difficulty
        "#,
    )
    .bind(question.id)
    .bind(&question.question)
    .bind(&question.answer)
    .bind(question.category)
    .bind(question.difficulty)
    .execute(conn)
    .await?;
    Ok(())
}

/// Makes the table hold exactly `questions`, all or nothing.
pub async fn import_questions(pool: &SqlitePool, questions: Vec<Question>) -> sqlx::Result<()> {
    let existing: HashSet<i64> = get_all_questions(pool)
        .await?
        .iter()
        .map(|q| q.id)
        .collect();
    let incoming: HashSet<i64> = questions.iter().map(|q| q.id).collect();
    let mut tx = pool.begin().await?;
    for id in existing.difference(&incoming) {
        remove_question(&mut tx, *id).await?;
    }
    for question in &questions {
        upsert_question(&mut tx, question).await?;
    }
    tx.commit().await?;
    tracing::info!(count = questions.len(), "Imported questions");
    Ok(())
}
