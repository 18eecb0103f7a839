use crate::features::projects::model::{NewProject, Project};
use sqlx::{Pool, Sqlite};

pub async fn list_projects(pool: &Pool<Sqlite>) -> sqlx::Result<Vec<Project>> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn get_project(pool: &Pool<Sqlite>, id: i64) -> sqlx::Result<Option<Project>> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

// insert, then re-read by the generated id so the response carries the
// server-assigned defaults. The two calls are separate awaits with no
// transaction; a concurrent delete in between yields None, which the
// handler serializes as {"data": null}
pub async fn insert_project(
    pool: &Pool<Sqlite>,
    new_project: &NewProject,
) -> sqlx::Result<Option<Project>> {
    let result = sqlx::query("INSERT INTO projects (name, description) VALUES (?, ?)")
        .bind(&new_project.name)
        .bind(&new_project.description)
        .execute(pool)
        .await?;

    get_project(pool, result.last_insert_rowid()).await
}
