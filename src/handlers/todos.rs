//! Todo CRUD Handlers
//!
//! Each handler writes exactly one response: the record(s) as JSON on success,
//! an [`AppError`] body otherwise.

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
};

use super::router::AppState;
use crate::errors::AppError;
use crate::store::{Todo, TodoId, TodoParams};
use crate::validation;

/// GET /todos/ - every record in order
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.list())
}

/// POST /todos/ - store the body as a new record with a server-assigned ID
pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Todo>, AppError> {
    let params = decode_params(&body)?;
    Ok(Json(state.create(params)))
}

/// GET /todos/{id} - the matching record, or `null`
pub async fn show_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Option<Todo>>, AppError> {
    let id = parse_path_id(&raw_id)?;
    Ok(Json(state.show(id)))
}

/// POST /todos/{id} - replace the record in place
pub async fn update_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Todo>, AppError> {
    let id = parse_path_id(&raw_id)?;
    let params = decode_params(&body)?;
    Ok(Json(state.update(id, params)?))
}

/// DELETE /todos/{id} - remove the record and echo it back
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let id = parse_path_id(&raw_id)?;
    Ok(Json(state.delete(id)?))
}

fn parse_path_id(raw: &str) -> Result<TodoId, AppError> {
    validation::parse_todo_id(raw).map_err(|e| AppError::InvalidTodoId(e.to_string()))
}

// The body is decoded whatever the Content-Type says.
fn decode_params(body: &[u8]) -> Result<TodoParams, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_helpers::{delete, get, post_json, post_raw, send, TestHarness};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_then_list() {
        let h = TestHarness::new();

        let (status, body) = send(
            h.router(),
            post_json("/todos/", &json!({"Title": "buy milk", "Category": "errand", "State": "open"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Id"], 0);
        assert_eq!(body["Title"], "buy milk");
        assert_eq!(body["Dt_created"], "");

        let (status, body) = send(h.router(), get("/todos/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_empty_is_array() {
        let h = TestHarness::new();
        let (status, body) = send(h.router(), get("/todos/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_rejects_bad_json() {
        let h = TestHarness::new();

        let (status, body) = send(h.router(), post_raw("/todos/", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_JSON");

        let (status, _) = send(h.router(), post_raw("/todos/", "")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(h.state().is_empty());
    }

    #[tokio::test]
    async fn test_create_accepts_missing_content_type() {
        let h = TestHarness::new();
        let (status, body) = send(h.router(), post_raw("/todos/", r#"{"Title":"plain"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Title"], "plain");
    }

    #[tokio::test]
    async fn test_create_matches_keys_ignoring_case() {
        let h = TestHarness::new();

        let (status, body) =
            send(h.router(), post_raw("/todos/", r#"{"TITLE":"caps","category":"c"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Title"], "caps");
        assert_eq!(body["Category"], "c");

        let (status, body) =
            send(h.router(), post_raw("/todos/", r#"{"Title":"a","title":"b"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Title"], "b");
    }

    #[tokio::test]
    async fn test_show_missing_returns_null() {
        let h = TestHarness::new();
        let (status, body) = send(h.router(), get("/todos/3")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_null());
    }

    #[tokio::test]
    async fn test_show_rejects_non_numeric_id() {
        let h = TestHarness::new();
        let (status, body) = send(h.router(), get("/todos/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_TODO_ID");
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let h = TestHarness::new();
        for title in ["a", "b", "c"] {
            send(h.router(), post_json("/todos/", &json!({"Title": title}))).await;
        }

        let (status, body) = send(
            h.router(),
            post_json("/todos/1", &json!({"Id": 1, "Title": "B", "State": "done"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Title"], "B");

        let (_, list) = send(h.router(), get("/todos/")).await;
        let titles: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["Title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["a", "B", "c"]);
    }

    #[tokio::test]
    async fn test_update_without_body_id_uses_path() {
        let h = TestHarness::new();
        send(h.router(), post_json("/todos/", &json!({"Title": "a"}))).await;

        let (status, body) = send(h.router(), post_json("/todos/0", &json!({"Title": "A"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Id"], 0);
        assert_eq!(body["Title"], "A");
    }

    #[tokio::test]
    async fn test_update_missing_is_404() {
        let h = TestHarness::new();
        let (status, body) = send(h.router(), post_json("/todos/9", &json!({"Id": 9}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "TODO_NOT_FOUND");
        assert_eq!(body["message"], "Todo not found id=9");
    }

    #[tokio::test]
    async fn test_update_id_mismatch_is_400() {
        let h = TestHarness::new();
        send(h.router(), post_json("/todos/", &json!({"Title": "a"}))).await;

        let (status, body) = send(h.router(), post_json("/todos/0", &json!({"Id": 4}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_update_rejects_bad_json() {
        let h = TestHarness::new();
        send(h.router(), post_json("/todos/", &json!({"Title": "a"}))).await;

        let (status, body) = send(h.router(), post_raw("/todos/0", "[1,2")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_JSON");
        assert_eq!(h.state().show(crate::store::TodoId(0)).unwrap().title, "a");
    }

    #[tokio::test]
    async fn test_delete_missing_is_404_and_keeps_length() {
        let h = TestHarness::new();
        send(h.router(), post_json("/todos/", &json!({"Title": "a"}))).await;

        let (status, _) = send(h.router(), delete("/todos/5")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(h.state().len(), 1);
    }

    #[tokio::test]
    async fn test_scenario_create_show_delete() {
        let h = TestHarness::new();

        let (_, first) = send(
            h.router(),
            post_json("/todos/", &json!({"Title": "buy milk", "Category": "errand", "State": "open"})),
        )
        .await;
        assert_eq!(first["Id"], 0);

        let (_, second) = send(h.router(), post_json("/todos/", &json!({"Title": "walk dog"}))).await;
        assert_eq!(second["Id"], 1);

        let (status, shown) = send(h.router(), get("/todos/0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(shown, first);

        let (status, removed) = send(h.router(), delete("/todos/0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(removed, first);
        assert_eq!(h.state().len(), 1);

        let (status, gone) = send(h.router(), get("/todos/0")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(gone.is_null());

        // The survivor keeps ID 1 and new records do not reuse 0 or 1
        let (_, survivor) = send(h.router(), get("/todos/1")).await;
        assert_eq!(survivor["Title"], "walk dog");
        let (_, third) = send(h.router(), post_json("/todos/", &json!({"Title": "x"}))).await;
        assert_eq!(third["Id"], 2);
    }
}
