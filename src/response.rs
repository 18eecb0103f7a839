use crate::errors::ApiError;
use serde::Serialize;
use serde_json::Value;

// success envelope: every 200/201 is {data: <row-or-rows>}
#[derive(Serialize)]
pub struct Data<T> {
    pub data: T,
}

// bodies are read as raw text so an empty body means "no body" rather
// than a parse failure
pub fn parse_json_body(raw: &str) -> Result<Option<Value>, ApiError> {
    if raw.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(raw)?))
}
