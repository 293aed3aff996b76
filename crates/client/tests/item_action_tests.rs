mod common;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use common::{query_pairs, spawn_mock_api, values_for, RequestLog};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, SearchOptions};

fn favourite_router(log: RequestLog) -> Router {
    Router::new()
        .route(
            "/api/favourite/item",
            post(|State(log): State<RequestLog>, Json(body): Json<Value>| async move {
                log.record(format!("POST {body}"));
                Json(json!({
                    "itemID": body["itemID"],
                    "bookmarkID": 77,
                    "keywords": body["keywords"],
                    "isAlwaysLatest": body["isAlwaysLatest"]
                }))
            }),
        )
        .route(
            "/api/favourite/item/{id}",
            delete(|State(log): State<RequestLog>, Path(id): Path<u64>| async move {
                log.record(format!("DELETE {id}"));
                StatusCode::NO_CONTENT
            }),
        )
        .with_state(log)
}

#[tokio::test]
async fn add_favourite_posts_item_key_and_tags() {
    let log = RequestLog::default();
    let client = spawn_mock_api(favourite_router(log.clone())).await;

    let item = client
        .add_favourite_item("abc/2", vec!["maths".to_string()], true)
        .await
        .unwrap();
    assert_eq!(item.bookmark_id, 77);
    assert_eq!(item.item_id, "abc/2");

    let entries = log.entries();
    let body: Value = serde_json::from_str(entries[0].trim_start_matches("POST ")).unwrap();
    assert_eq!(
        body,
        json!({"itemID": "abc/2", "keywords": ["maths"], "isAlwaysLatest": true})
    );
}

#[tokio::test]
async fn delete_favourite_uses_bookmark_id() {
    let log = RequestLog::default();
    let client = spawn_mock_api(favourite_router(log.clone())).await;
    client.delete_favourite_item(Some(77)).await.unwrap();
    assert_eq!(log.entries(), vec!["DELETE 77"]);
}

#[tokio::test]
async fn delete_favourite_without_id_fails_before_request() {
    let log = RequestLog::default();
    let client = spawn_mock_api(favourite_router(log.clone())).await;
    let err = client.delete_favourite_item(None).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(log.entries().is_empty());
}

#[tokio::test]
async fn drm_terms_can_be_listed_and_accepted() {
    let log = RequestLog::default();
    let router = Router::new()
        .route(
            "/api/item/{uuid}/{version}/drm",
            get(|Path((uuid, version)): Path<(String, u32)>| async move {
                Json(json!({
                    "title": format!("Terms for {uuid}/{version}"),
                    "terms": "Be nice",
                    "regularPermission": ["View"]
                }))
            })
            .post(
                |State(log): State<RequestLog>, Path((uuid, version)): Path<(String, u32)>| async move {
                    log.record(format!("ACCEPT {uuid}/{version}"));
                    StatusCode::OK
                },
            ),
        )
        .with_state(log.clone());
    let client = spawn_mock_api(router).await;

    let terms = client.list_drm_terms("abc", 3).await.unwrap();
    assert_eq!(terms.title, "Terms for abc/3");
    assert_eq!(terms.regular_permission, vec!["View"]);
    assert!(terms.additional_permission.is_empty());

    client.accept_drm_terms("abc", 3).await.unwrap();
    assert_eq!(log.entries(), vec!["ACCEPT abc/3"]);
}

#[tokio::test]
async fn drm_not_found_is_reported() {
    let router = Router::new().route(
        "/api/item/{uuid}/{version}/drm",
        get(|| async { StatusCode::NOT_FOUND }),
    );
    let client = spawn_mock_api(router).await;
    let err = client.list_drm_terms("missing", 1).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn user_search_and_group_lookup() {
    let log = RequestLog::default();
    let router = Router::new()
        .route(
            "/api/userquery/search",
            get(|State(log): State<RequestLog>, RawQuery(query): RawQuery| async move {
                log.record(query.unwrap_or_default());
                Json(json!({
                    "users": [{"id": "u1", "username": "jdoe", "firstName": "Jane", "lastName": "Doe"}],
                    "groups": [],
                    "roles": []
                }))
            }),
        )
        .route(
            "/api/userquery/lookup",
            post(|Json(body): Json<Value>| async move {
                let groups: Vec<Value> = body["groups"]
                    .as_array()
                    .cloned()
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|id| id.as_str() != Some("unknown"))
                    .map(|id| json!({"id": id, "name": format!("Group {}", id.as_str().unwrap_or(""))}))
                    .collect();
                Json(json!({"users": [], "groups": groups}))
            }),
        )
        .with_state(log.clone());
    let client = spawn_mock_api(router).await;

    let users = client
        .list_users("jan", &["g1".to_string(), "g2".to_string()])
        .await
        .unwrap();
    assert_eq!(users[0].display_name(), "Jane Doe (jdoe)");
    let entries = log.entries();
    let pairs = query_pairs(&entries[0]);
    assert_eq!(values_for(&pairs, "q"), vec!["jan"]);
    assert_eq!(values_for(&pairs, "byGroups"), vec!["g1", "g2"]);

    let groups = client
        .resolve_groups(&["g1".to_string(), "unknown".to_string()])
        .await
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Group g1");

    assert!(client.resolve_groups(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn favourite_search_posts_name_and_link() {
    let log = RequestLog::default();
    let router = Router::new()
        .route(
            "/api/favourite/search",
            post(|State(log): State<RequestLog>, Json(body): Json<Value>| async move {
                log.record(body.to_string());
                Json(json!({"id": 5, "name": body["name"], "url": body["url"]}))
            }),
        )
        .with_state(log.clone());
    let client = spawn_mock_api(router).await;

    let options = SearchOptions {
        query: Some("cats".to_string()),
        ..SearchOptions::default()
    };
    let saved = client.add_favourite_search("new favourite", &options).await.unwrap();
    assert_eq!(saved.id, 5);
    assert_eq!(saved.name, "new favourite");

    let body: Value = serde_json::from_str(&log.entries()[0]).unwrap();
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("/page/search?searchOptions="), "{url}");
}

#[tokio::test]
async fn blank_favourite_search_name_fails_before_request() {
    let log = RequestLog::default();
    let router = Router::new()
        .route(
            "/api/favourite/search",
            post(|State(log): State<RequestLog>| async move {
                log.record("POST".to_string());
                StatusCode::OK
            }),
        )
        .with_state(log.clone());
    let client = spawn_mock_api(router).await;
    let err = client
        .add_favourite_search("  ", &SearchOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(log.entries().is_empty());
}

#[tokio::test]
async fn current_user_is_decoded() {
    let router = Router::new().route(
        "/api/content/currentuser",
        get(|| async {
            Json(json!({
                "id": "u1",
                "username": "admin",
                "firstName": "Ad",
                "lastName": "Min",
                "guest": false,
                "canDownloadSearchResult": true
            }))
        }),
    );
    let client = spawn_mock_api(router).await;
    let user = client.current_user().await.unwrap();
    assert!(user.can_download_search_result);
    assert_eq!(user.as_owner().display_name(), "Ad Min (admin)");
}

