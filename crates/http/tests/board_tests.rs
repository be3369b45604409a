//! Dashboard operations: every mutation is followed by a full refetch

use serde_json::{Value, json};
use tasklist_http::{TodoBoard, TodoClient, TodoFilter};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_list_once(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .up_to_n_times(1)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_toggle_sends_full_record_then_refetches() {
    let server = MockServer::start().await;
    mount_list_once(&server, json!([{"id": 1, "title": "x", "isCompleted": false}])).await;
    mount_list_once(&server, json!([{"id": 1, "title": "x", "isCompleted": true}])).await;

    Mock::given(method("PUT"))
        .and(path("/api/todos/1"))
        .and(body_json(json!({"id": 1, "title": "x", "isCompleted": true})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 1, "title": "x", "isCompleted": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri()).unwrap();
    let mut board = TodoBoard::new();
    board.reload(&client).await.unwrap();
    board.toggle(&client, 1).await.unwrap();

    assert!(board.get(1).unwrap().is_completed);
    assert_eq!(board.stats().completed, 1);

    server.verify().await;
}

#[tokio::test]
async fn test_update_echoes_unmodelled_server_fields() {
    let server = MockServer::start().await;
    let stored = json!({
        "id": 1,
        "title": "x",
        "isCompleted": false,
        "userId": 42,
        "createdAt": "2024-01-01"
    });
    mount_list_once(&server, json!([stored.clone()])).await;
    mount_list_once(&server, json!([stored.clone()])).await;

    Mock::given(method("PUT"))
        .and(path("/api/todos/1"))
        .and(body_json(json!({
            "id": 1,
            "title": "x",
            "isCompleted": true,
            "userId": 42,
            "createdAt": "2024-01-01"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri()).unwrap();
    let mut board = TodoBoard::new();
    board.reload(&client).await.unwrap();
    board.toggle(&client, 1).await.unwrap();

    assert_eq!(board.get(1).unwrap().extra["userId"], json!(42));

    server.verify().await;
}

#[tokio::test]
async fn test_clear_completed_deletes_each_then_refetches_once() {
    let server = MockServer::start().await;
    mount_list_once(
        &server,
        json!([
            {"id": 1, "title": "a", "isCompleted": true},
            {"id": 2, "title": "b", "isCompleted": true},
            {"id": 3, "title": "c", "isCompleted": true},
            {"id": 4, "title": "d", "isCompleted": false}
        ]),
    )
    .await;
    mount_list_once(&server, json!([{"id": 4, "title": "d", "isCompleted": false}])).await;

    for id in 1..=3 {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/todos/{id}")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("DELETE"))
        .and(path("/api/todos/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri()).unwrap();
    let mut board = TodoBoard::new();
    board.reload(&client).await.unwrap();

    let deleted = board.clear_completed(&client).await.unwrap();

    assert_eq!(deleted, 3);
    assert_eq!(board.todos().len(), 1);
    assert_eq!(board.visible(TodoFilter::Completed).count(), 0);

    server.verify().await;
}

#[tokio::test]
async fn test_blank_titles_never_reach_the_network() {
    let server = MockServer::start().await;
    mount_list_once(&server, json!([{"id": 1, "title": "x", "isCompleted": false}])).await;

    Mock::given(method("POST"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/todos/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri()).unwrap();
    let mut board = TodoBoard::new();
    board.reload(&client).await.unwrap();

    assert!(!board.add(&client, "   ").await.unwrap());
    assert!(!board.rename(&client, 1, "").await.unwrap());

    server.verify().await;
}

#[tokio::test]
async fn test_add_and_remove_refetch() {
    let server = MockServer::start().await;
    mount_list_once(&server, json!([{"id": 7, "title": "new one", "isCompleted": false}])).await;
    mount_list_once(&server, json!([])).await;

    Mock::given(method("POST"))
        .and(path("/api/todos"))
        .and(body_json(json!({"title": "new one"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 7, "title": "new one", "isCompleted": false})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/todos/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri()).unwrap();
    let mut board = TodoBoard::new();

    assert!(board.add(&client, "new one").await.unwrap());
    assert_eq!(board.todos().len(), 1);

    board.remove(&client, 7).await.unwrap();
    assert!(board.todos().is_empty());

    server.verify().await;
}

#[tokio::test]
async fn test_toggle_unknown_todo_is_not_found() {
    let client = TodoClient::new("http://localhost:1").unwrap();
    let mut board = TodoBoard::new();
    let result = board.toggle(&client, 42).await;
    assert!(matches!(result, Err(tasklist_http::ClientError::NotFound(_))));
}
