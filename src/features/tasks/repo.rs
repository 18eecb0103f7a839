use crate::features::tasks::model::{Task, TaskChanges};
use sqlx::{Pool, QueryBuilder, Sqlite};

pub async fn list_project_tasks(pool: &Pool<Sqlite>, project_id: i64) -> sqlx::Result<Vec<Task>> {
    sqlx::query_as::<_, Task>(
        "SELECT * FROM tasks WHERE project_id = ? ORDER BY created_at DESC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

pub async fn get_task(pool: &Pool<Sqlite>, id: i64) -> sqlx::Result<Option<Task>> {
    sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

// insert-then-fetch, same non-atomic pattern as the projects repo
pub async fn insert_task(
    pool: &Pool<Sqlite>,
    project_id: i64,
    title: &str,
) -> sqlx::Result<Option<Task>> {
    let result = sqlx::query("INSERT INTO tasks (project_id, title) VALUES (?, ?)")
        .bind(project_id)
        .bind(title)
        .execute(pool)
        .await?;

    get_task(pool, result.last_insert_rowid()).await
}

// builds the SET clause from only the fields present in the change set;
// the caller has already rejected an empty change set
pub async fn update_task(
    pool: &Pool<Sqlite>,
    id: i64,
    changes: &TaskChanges,
) -> sqlx::Result<Option<Task>> {
    let mut builder = QueryBuilder::<Sqlite>::new("UPDATE tasks SET ");

    {
        let mut sets = builder.separated(", ");
        if let Some(done) = changes.done {
            sets.push("done = ").push_bind_unseparated(done);
        }
        if let Some(title) = &changes.title {
            sets.push("title = ").push_bind_unseparated(title.as_str());
        }
    }

    builder.push(" WHERE id = ").push_bind(id);
    builder.build().execute(pool).await?;

    get_task(pool, id).await
}

pub async fn delete_task(pool: &Pool<Sqlite>, id: i64) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
