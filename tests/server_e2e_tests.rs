//! End-to-end test over a real TCP listener.

use std::sync::Arc;

use inventory_cache::{api::create_router, clock::SystemClock, AppState};
use serde_json::{json, Value};

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::in_memory(Arc::new(SystemClock)));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_create_and_read_over_http() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{base}/items/"))
        .json(&json!({"item_id": 1, "name": "bolt", "dims": {"d": 4, "l": 20}}))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), reqwest::StatusCode::OK);
    let created: Value = created.json().await.unwrap();

    let read: Value = client
        .get(format!("{base}/items/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(read["source"], "cache");
    assert_eq!(read["item"], created["item"]);
    assert_eq!(read["item"]["dims"], json!({"d": 4, "l": 20}));

    let duplicate = client
        .post(format!("{base}/items/"))
        .json(&json!({"item_id": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), reqwest::StatusCode::BAD_REQUEST);

    let missing = client
        .get(format!("{base}/items/999"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}
