use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

// validated create payload. Slightly stricter than presence-only: name
// and description must be non-empty JSON strings, any other type is
// treated as absent instead of being bound as text
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
}

impl NewProject {
    pub fn from_body(body: Option<&Value>) -> Option<Self> {
        let name = body?
            .get("name")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())?
            .to_owned();

        let description = body?
            .get("description")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        Some(Self { name, description })
    }
}
