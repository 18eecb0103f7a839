use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct Task {
    pub id: i64,
    pub project_id: Option<i64>,
    pub title: String,
    pub done: bool,
    pub created_at: Option<NaiveDateTime>,
}

// the fields a PUT may touch. `done` must be strictly boolean and `title`
// a non-empty string; anything else in the body is silently skipped
#[derive(Debug, Default)]
pub struct TaskChanges {
    pub done: Option<bool>,
    pub title: Option<String>,
}

impl TaskChanges {
    pub fn from_body(body: Option<&Value>) -> Self {
        let done = body.and_then(|b| b.get("done")).and_then(Value::as_bool);

        let title = body
            .and_then(|b| b.get("title"))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_owned);

        Self { done, title }
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_none() && self.title.is_none()
    }
}

// DELETE echoes back only the id that was removed
#[derive(Serialize)]
pub struct DeletedTask {
    pub id: i64,
}
