use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use genre_compass::api::{create_router, AppState};
use genre_compass::config::Config;
use genre_compass::models::GenreCatalog;

fn create_test_server_with(config: Config) -> TestServer {
    let catalog = GenreCatalog::new(["pop", "pop-rock", "indie-pop", "jazz"]);
    let state = AppState::new(catalog, &config).unwrap();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn create_test_server() -> TestServer {
    create_test_server_with(Config::default())
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["genres"], 4);
}

#[tokio::test]
async fn test_list_genres_in_catalog_order() {
    let server = create_test_server();
    let response = server.get("/genres").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["count"], 4);
    assert_eq!(body["genres"], json!(["pop", "pop-rock", "indie-pop", "jazz"]));
}

#[tokio::test]
async fn test_get_genre_hierarchy() {
    let server = create_test_server();

    let response = server.get("/genres/pop").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["children"], json!(["pop-rock"]));
    assert_eq!(body["parents"], json!([]));
    assert_eq!(body["root"], true);

    let response = server.get("/genres/pop-rock").await;
    let body: Value = response.json();
    assert_eq!(body["parents"], json!(["pop"]));
    assert_eq!(body["root"], false);
}

#[tokio::test]
async fn test_get_unknown_genre() {
    let server = create_test_server();
    let response = server.get("/genres/zydeco").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recommend_genre() {
    let server = create_test_server();

    let response = server
        .post("/recommend-genre")
        .json(&json!({
            "artist1": { "genres": ["pop"], "popularity": 50 }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["genreRecommendation"],
        json!(["pop-rock", "indie-pop", "jazz"])
    );
}

#[tokio::test]
async fn test_recommend_genre_respects_top_n() {
    let server = create_test_server();

    let response = server
        .post("/recommend-genre")
        .add_query_param("top_n", 1)
        .json(&json!({
            "artist1": { "genres": ["pop"], "popularity": 50 }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["genreRecommendation"], json!(["pop-rock"]));
}

#[tokio::test]
async fn test_recommend_genre_zero_top_n() {
    let server = create_test_server();

    let response = server
        .post("/recommend-genre")
        .add_query_param("top_n", 0)
        .json(&json!({
            "artist1": { "genres": ["pop"], "popularity": 50 }
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommend_genre_non_numeric_top_n() {
    let server = create_test_server();

    let response = server
        .post("/recommend-genre")
        .add_query_param("top_n", "abc")
        .json(&json!({
            "artist1": { "genres": ["pop"], "popularity": 50 }
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "top_n must be a positive integer");
}

#[tokio::test]
async fn test_recommend_genre_huge_top_n() {
    let server = create_test_server();

    let response = server
        .post("/recommend-genre")
        .add_query_param("top_n", 1usize << 50)
        .json(&json!({
            "artist1": { "genres": ["pop"], "popularity": 50 }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["genreRecommendation"],
        json!(["pop-rock", "indie-pop", "jazz"])
    );
}

#[tokio::test]
async fn test_recommend_genre_with_cached_vector_space() {
    let server = create_test_server_with(Config {
        vector_space_cache: true,
        ..Config::default()
    });

    let response = server
        .post("/recommend-genre")
        .json(&json!({
            "artist1": { "genres": ["pop"], "popularity": 50 }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["genreRecommendation"],
        json!(["pop-rock", "indie-pop", "jazz"])
    );
}

#[tokio::test]
async fn test_recommend_genre_no_new_genres() {
    let server = create_test_server();

    let response = server
        .post("/recommend-genre")
        .json(&json!({
            "artist1": { "genres": ["polka"], "popularity": 30 }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "No new genres to recommend");
    assert!(body.get("genreRecommendation").is_none());
}

#[tokio::test]
async fn test_recommend_genre_empty_payload() {
    let server = create_test_server();

    let response = server.post("/recommend-genre").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn test_recommend_genre_missing_body() {
    let server = create_test_server();
    let response = server.post("/recommend-genre").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommend_genre_malformed_record() {
    let server = create_test_server();

    let response = server
        .post("/recommend-genre")
        .json(&json!({
            "artist1": { "genres": ["pop"] }
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("artist1"));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let request_id = "3f2b8c1e-9d4a-4e6b-8f7c-2a1d5e9b0c34";

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(request_id),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), request_id);
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let server = create_test_server();
    let response = server.get("/health").await;
    let header = response.header("x-request-id");
    assert!(uuid::Uuid::parse_str(header.to_str().unwrap()).is_ok());
}
