use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse {
    message: String,
    data: Vec<i64>,
}

pub async fn get_data() -> Json<DataResponse> {
    Json(DataResponse {
        message: "Test Flask".to_string(),
        data: vec![1, 2, 3],
    })
}

pub fn router() -> Router {
    Router::new().route("/api/data", get(get_data))
}
