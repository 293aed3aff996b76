mod common;

use axum::{extract::RawQuery, extract::State, routing::get, Json, Router};
use common::{query_pairs, spawn_mock_api, unreachable_client, values_for, RequestLog};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    AppErrorKind, Collection, ItemStatus, SearchOptions, SelectedCategories, SortOrder,
};

async fn search_handler(State(log): State<RequestLog>, RawQuery(query): RawQuery) -> Json<Value> {
    log.record(format!("GET search2?{}", query.unwrap_or_default()));
    Json(json!({
        "start": 0,
        "length": 10,
        "available": 1,
        "results": [{
            "uuid": "9b9bf5a9-c5af-490b-88fe-7e536427c4a6",
            "version": 1,
            "name": "Interesting item",
            "status": "LIVE",
            "createdDate": "2024-01-01T10:00:00Z",
            "modifiedDate": "2024-01-02T10:00:00Z",
            "bookmarkId": 12
        }]
    }))
}

fn search_router(log: RequestLog) -> Router {
    Router::new()
        .route("/api/search2", get(search_handler))
        .with_state(log)
}

#[tokio::test]
async fn search_sends_formatted_params() {
    let log = RequestLog::default();
    let client = spawn_mock_api(search_router(log.clone())).await;
    let options = SearchOptions {
        query: Some("  cat ".to_string()),
        current_page: 2,
        sort_order: Some(SortOrder::DateModified),
        collections: Some(vec![Collection {
            uuid: "c1".to_string(),
            name: "Images".to_string(),
        }]),
        ..SearchOptions::default()
    };

    let page = client.search(&options).await.unwrap();
    assert_eq!(page.available, 1);
    assert_eq!(page.results[0].title(), "Interesting item");
    assert_eq!(page.results[0].bookmark_id, Some(12));

    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    let pairs = query_pairs(entries[0].split_once('?').unwrap().1);
    assert_eq!(values_for(&pairs, "query"), vec!["cat*"]);
    assert_eq!(values_for(&pairs, "start"), vec!["20"]);
    assert_eq!(values_for(&pairs, "length"), vec!["10"]);
    assert_eq!(values_for(&pairs, "status"), vec!["LIVE", "REVIEW"]);
    assert_eq!(values_for(&pairs, "order"), vec!["datemodified"]);
    assert_eq!(values_for(&pairs, "collections"), vec!["c1"]);
}

#[tokio::test]
async fn search_without_query_omits_it() {
    let log = RequestLog::default();
    let client = spawn_mock_api(search_router(log.clone())).await;
    let options = SearchOptions {
        status: Some(vec![ItemStatus::Draft]),
        ..SearchOptions::default()
    };

    client.search(&options).await.unwrap();
    let entries = log.entries();
    let pairs = query_pairs(entries[0].split_once('?').unwrap().1);
    assert!(values_for(&pairs, "query").is_empty());
    assert_eq!(values_for(&pairs, "status"), vec!["DRAFT"]);
}

#[tokio::test]
async fn each_search_call_is_one_request() {
    let log = RequestLog::default();
    let client = spawn_mock_api(search_router(log.clone())).await;
    let options = SearchOptions::default();
    client.search(&options).await.unwrap();
    client.search(&options).await.unwrap();
    assert_eq!(log.entries().len(), 2);
}

#[tokio::test]
async fn server_error_maps_to_app_error() {
    let router = Router::new().route(
        "/api/search2",
        get(|| async {
            (
                axum::http::StatusCode::FORBIDDEN,
                Json(json!({"code": 403, "error": "Forbidden", "error_description": "No access"})),
            )
        }),
    );
    let client = spawn_mock_api(router).await;
    let err = client.search(&SearchOptions::default()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "No access");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = unreachable_client().await;
    let err = client.search(&SearchOptions::default()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
}

#[tokio::test]
async fn classifications_are_fetched_per_facet_and_ordered() {
    let log = RequestLog::default();
    let router = Router::new()
        .route(
            "/api/settings/facetedsearch/classification",
            get(|| async {
                Json(json!([
                    {"id": 2, "name": "Keyword", "schemaNode": "/item/keyword", "maxResults": 5, "orderIndex": 1},
                    {"id": 1, "name": "Language", "schemaNode": "/item/language", "orderIndex": 0},
                    {"id": 3, "name": "Empty", "schemaNode": "/item/empty", "orderIndex": 2}
                ]))
            }),
        )
        .route(
            "/api/search2/facet",
            get(
                |State(log): State<RequestLog>, RawQuery(query): RawQuery| async move {
                    let query = query.unwrap_or_default();
                    log.record(query.clone());
                    let pairs = query_pairs(&query);
                    let results = match values_for(&pairs, "nodes").first().copied() {
                        Some("/item/keyword") => json!([{"term": "maths", "count": 3}]),
                        Some("/item/language") => json!([{"term": "en", "count": 7}]),
                        _ => json!([]),
                    };
                    Json(json!({ "results": results }))
                },
            ),
        )
        .with_state(log.clone());
    let client = spawn_mock_api(router).await;
    let options = SearchOptions {
        query: Some("cat".to_string()),
        selected_categories: Some(vec![SelectedCategories {
            id: 1,
            schema_node: "/item/language".to_string(),
            categories: vec!["en".to_string()],
        }]),
        ..SearchOptions::default()
    };

    let classifications = client.list_classifications(&options).await.unwrap();
    let names: Vec<&str> = classifications.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Language", "Keyword"]);
    assert_eq!(classifications[0].max_display_results, 10);
    assert_eq!(classifications[1].max_display_results, 5);

    let requests = log.entries();
    assert_eq!(requests.len(), 3);
    for raw in &requests {
        let pairs = query_pairs(raw);
        assert_eq!(values_for(&pairs, "query"), vec!["cat*"]);
        assert_eq!(values_for(&pairs, "musts"), vec!["/item/language:en"]);
        assert!(values_for(&pairs, "start").is_empty());
    }
}

#[tokio::test]
async fn collections_and_mime_filters() {
    let router = Router::new()
        .route(
            "/api/collection/",
            get(|RawQuery(query): RawQuery| async move {
                assert_eq!(query.as_deref(), Some("privilege=SEARCH_COLLECTION"));
                Json(json!({
                    "start": 0, "length": 2, "available": 2,
                    "results": [
                        {"uuid": "c1", "name": "Images", "description": "ignored"},
                        {"uuid": "c2", "name": "Videos"}
                    ]
                }))
            }),
        )
        .route(
            "/api/settings/search/filter",
            get(|| async {
                Json(json!([{"id": "f1", "name": "Images", "mimeTypes": ["image/png"]}]))
            }),
        );
    let client = spawn_mock_api(router).await;

    let collections = client.list_collections().await.unwrap();
    assert_eq!(collections.len(), 2);
    assert_eq!(collections[1].name, "Videos");

    let filters = client.list_mime_type_filters().await.unwrap();
    assert_eq!(filters[0].mime_types, vec!["image/png"]);
}

#[tokio::test]
async fn advanced_search_definition_is_decoded() {
    let router = Router::new()
        .route(
            "/api/settings/advancedsearch",
            get(|| async { Json(json!([{"uuid": "as1", "name": "Books"}])) }),
        )
        .route(
            "/api/settings/advancedsearch/{uuid}",
            get(|| async {
                Json(json!({
                    "name": "Books",
                    "controls": [{
                        "title": "Title",
                        "mandatory": true,
                        "controlType": "editbox",
                        "schemaNodes": [{"target": "/item/name", "attribute": ""}],
                        "options": [],
                        "defaultValues": []
                    }]
                }))
            }),
        );
    let client = spawn_mock_api(router).await;

    let summaries = client.list_advanced_searches().await.unwrap();
    assert_eq!(summaries[0].uuid, "as1");

    let definition = client.get_advanced_search("as1").await.unwrap();
    assert_eq!(definition.id, "as1");
    assert_eq!(definition.controls.len(), 1);
    assert!(definition.controls[0].mandatory);
}

fn export_router(log: RequestLog) -> Router {
    Router::new()
        .route(
            "/api/search2/export",
            get(
                |State(log): State<RequestLog>, method: axum::http::Method, RawQuery(query): RawQuery| async move {
                    log.record(format!("{method} {}", query.unwrap_or_default()));
                    axum::http::StatusCode::OK
                },
            ),
        )
        .with_state(log)
}

fn one_collection() -> SearchOptions {
    SearchOptions {
        collections: Some(vec![Collection {
            uuid: "c1".to_string(),
            name: "Books".to_string(),
        }]),
        current_page: 2,
        ..SearchOptions::default()
    }
}

#[tokio::test]
async fn export_is_confirmed_for_one_collection() {
    let log = RequestLog::default();
    let client = spawn_mock_api(export_router(log.clone())).await;

    client.confirm_export(&one_collection()).await.unwrap();
    let entries = log.entries();
    let (method, query) = entries[0].split_once(' ').unwrap();
    assert_eq!(method, "HEAD");
    let pairs = query_pairs(query);
    assert_eq!(values_for(&pairs, "collections"), vec!["c1"]);
    assert!(values_for(&pairs, "start").is_empty());
    assert!(values_for(&pairs, "length").is_empty());

    let url = client.export_url(&one_collection()).unwrap();
    assert!(url.contains("/api/search2/export?"), "{url}");
    assert!(url.contains("collections=c1"), "{url}");
}

#[tokio::test]
async fn export_needs_exactly_one_collection() {
    let log = RequestLog::default();
    let client = spawn_mock_api(export_router(log.clone())).await;

    let mut options = one_collection();
    options.collections = None;
    let err = client.confirm_export(&options).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);

    options.collections = Some(vec![
        Collection { uuid: "c1".to_string(), name: "Books".to_string() },
        Collection { uuid: "c2".to_string(), name: "Maps".to_string() },
    ]);
    assert!(client.export_url(&options).is_err());
    assert!(log.entries().is_empty());
}

