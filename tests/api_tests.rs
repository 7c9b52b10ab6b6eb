use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

mod common;

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn suggest_body() -> Value {
    json!({
        "origin": {"lat": 42.35, "lon": 13.40},
        "timeBudgetMinutes": 60,
        "mode": "car",
        "category": "anywhere",
        "style": "mainstream"
    })
}

#[tokio::test]
async fn test_suggest_requires_origin() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(&dir, "places.json", &common::default_places());
    let (app, _dir) = common::app_with_data_dir(dir);

    let mut body = suggest_body();
    body.as_object_mut().unwrap().remove("origin");

    let response = app
        .oneshot(post_json("/trips/suggest", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("origin"));
}

#[tokio::test]
async fn test_suggest_rejects_non_positive_budget() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(&dir, "places.json", &common::default_places());
    let (app, _dir) = common::app_with_data_dir(dir);

    let mut body = suggest_body();
    body["timeBudgetMinutes"] = json!(-15);

    let response = app
        .oneshot(post_json("/trips/suggest", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_suggest_rejects_wrong_method() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(&dir, "places.json", &common::default_places());
    let (app, _dir) = common::app_with_data_dir(dir);

    let request = Request::builder()
        .method("GET")
        .uri("/trips/suggest")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_missing_dataset_is_500_with_hint() {
    // No places.json written at all
    let (app, _dir) = common::app_with_data_dir(TempDir::new().unwrap());

    let response = app
        .oneshot(post_json("/trips/suggest", &suggest_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response_json(response).await;
    assert!(json["hint"].as_str().unwrap().contains("places.json"));
}

#[tokio::test]
async fn test_suggest_happy_path() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(&dir, "places.json", &common::default_places());
    let (app, _dir) = common::app_with_data_dir(dir);

    let response = app
        .oneshot(post_json("/trips/suggest", &suggest_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["ok"], true);
    // Scanno sits ~59 driving minutes out: the best fit for a 60 min budget
    assert_eq!(json["top"]["id"], "scanno");
    assert!(json["top"]["eta_min"].is_i64());
    assert!(json["top"]["why"].as_array().unwrap().len() >= 2);
    assert!(json["alternatives"].as_array().unwrap().len() <= 2);
    assert_eq!(json["debug"]["pool_size"], 6);
}

#[tokio::test]
async fn test_suggest_excludes_visited_ids() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(&dir, "places.json", &common::default_places());
    let (app, _dir) = common::app_with_data_dir(dir);

    // First request establishes the natural top pick
    let first = app
        .clone()
        .oneshot(post_json("/trips/suggest", &suggest_body()))
        .await
        .unwrap();
    let first_json = response_json(first).await;
    let top_id = first_json["top"]["id"].as_str().unwrap().to_string();

    // Excluding it must promote something else and suppress it everywhere
    let mut body = suggest_body();
    body["visitedIds"] = json!([top_id]);

    let second = app
        .oneshot(post_json("/trips/suggest", &body))
        .await
        .unwrap();
    let second_json = response_json(second).await;

    assert_ne!(second_json["top"]["id"].as_str().unwrap(), top_id);
    for alternative in second_json["alternatives"].as_array().unwrap() {
        assert_ne!(alternative["id"].as_str().unwrap(), top_id);
    }
}

#[tokio::test]
async fn test_empty_pool_is_ok_with_message() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(&dir, "places.json", &json!([]));
    let (app, _dir) = common::app_with_data_dir(dir);

    let response = app
        .oneshot(post_json("/trips/suggest", &suggest_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["ok"], true);
    assert!(json["top"].is_null());
    assert!(json["message"].as_str().unwrap().len() > 0);
}

#[tokio::test]
async fn test_itinerary_rejects_car_mode() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(&dir, "airports.json", &common::default_airports());
    let (app, _dir) = common::app_with_data_dir(dir);

    let body = json!({
        "origin": {"lat": 42.35, "lon": 13.40},
        "timeBudgetMinutes": 240,
        "mode": "car"
    });

    let response = app
        .oneshot(post_json("/trips/itinerary", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_itinerary_happy_path() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(&dir, "airports.json", &common::default_airports());
    let (app, _dir) = common::app_with_data_dir(dir);

    let body = json!({
        "origin": {"lat": 42.35, "lon": 13.40},
        "timeBudgetMinutes": 240,
        "mode": "plane"
    });

    let response = app
        .oneshot(post_json("/trips/itinerary", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["ok"], true);
    // Abruzzo Airport is the closest departure hub to L'Aquila
    assert!(json["top"]["summary"]
        .as_str()
        .unwrap()
        .starts_with("PSR → "));
    assert_eq!(json["debug"]["origin_hub"], "Abruzzo Airport");
}

#[tokio::test]
async fn test_itinerary_missing_hub_dataset_is_500_with_hint() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(&dir, "airports.json", &common::default_airports());
    let (app, _dir) = common::app_with_data_dir(dir);

    let body = json!({
        "origin": {"lat": 42.35, "lon": 13.40},
        "timeBudgetMinutes": 240,
        "mode": "train"
    });

    let response = app
        .oneshot(post_json("/trips/itinerary", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response_json(response).await;
    assert!(json["hint"]
        .as_str()
        .unwrap()
        .contains("train_stations.json"));
}

#[tokio::test]
async fn test_health_reports_dataset_counts() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(&dir, "places.json", &common::default_places());
    let (app, _dir) = common::app_with_data_dir(dir);

    let request = Request::builder()
        .uri("/debug/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["places"], 6);
    assert_eq!(json["checks"]["airports"], "absent");
}
