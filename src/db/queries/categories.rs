use std::collections::HashSet;

use sqlx::{SqliteConnection, SqlitePool};

pub use crate::models::Category;

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_category(pool: &SqlitePool, kind: &str) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO categories (type) VALUES (?1)
        "#,
    )
    .bind(kind)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

async fn upsert_category(conn: &mut SqliteConnection, category: &Category) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO categories (id, type) VALUES (?1, ?2)
        ON CONFLICT (id) DO UPDATE SET type = excluded.type
        "#,
    )
    .bind(category.id)
    .bind(&category.kind)
    .execute(conn)
    .await?;
    Ok(())
}

async fn delete_category(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        DELETE FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .execute(conn)
    .await?;
    Ok(())
}

/// Makes the table hold exactly `categories`, all or nothing.
pub async fn import_categories(pool: &SqlitePool, categories: Vec<Category>) -> sqlx::Result<()> {
    let existing: HashSet<i64> = get_all_categories(pool)
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    let incoming: HashSet<i64> = categories.iter().map(|c| c.id).collect();
    let mut tx = pool.begin().await?;
    for id in existing.difference(&incoming) {
        delete_category(&mut tx, *id).await?;
    }
    for category in &categories {
        upsert_category(&mut tx, category).await?;
    }
    tx.commit().await?;
    tracing::info!(count = categories.len(), "Imported categories");
    Ok(())
}
