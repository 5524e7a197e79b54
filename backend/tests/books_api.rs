//! End-to-end tests for the catalogue API backed by the generation engine.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use backend::Trace;
use backend::domain::{CatalogueLimits, TRACE_ID_HEADER};
use backend::inbound::http::books::{export_books, list_books, random_seed};
use backend::inbound::http::{query_config, route_not_found};
use backend::inbound::http::state::HttpState;
use backend::outbound::generation::GeneratedBookCatalogue;
use book_data::{Book, GenerationRequest, generate_page};
use rstest::rstest;
use serde_json::{Value, json};

async fn get(uri: &str) -> ServiceResponse {
    let state = HttpState::new(Arc::new(GeneratedBookCatalogue), CatalogueLimits::default());
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(query_config())
            .wrap(Trace)
            .service(
                web::scope("/api")
                    .service(list_books)
                    .service(export_books)
                    .service(random_seed),
            )
            .default_service(web::to(route_not_found)),
    )
    .await;
    actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await
}

async fn books(uri: &str) -> Vec<Book> {
    let response = get(uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    actix_test::read_body_json(response).await
}

#[rstest]
#[actix_web::test]
async fn pages_match_the_engine() {
    let served = books("/api/books?seed=42&locale=en_US&page=0&pageSize=20").await;
    let expected = generate_page(&GenerationRequest::default()).expect("valid request");
    assert_eq!(served, expected);
}

#[rstest]
#[actix_web::test]
async fn repaging_preserves_records() {
    let wide = books("/api/books?seed=mossy-owl&locale=fr&pageSize=50").await;
    let narrow = books("/api/books?seed=mossy-owl&region=fr&page=4&pageSize=10").await;
    assert_eq!(wide.get(40..50), Some(narrow.as_slice()));
}

#[rstest]
#[actix_web::test]
async fn json_uses_client_field_names() {
    let response = get("/api/books?pageSize=1&reviewsAvg=1").await;
    let body: Value = actix_test::read_body_json(response).await;
    let book = body
        .as_array()
        .and_then(|books| books.first())
        .and_then(Value::as_object)
        .expect("one book object");

    let mut keys: Vec<&str> = book.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "authors",
            "image",
            "index",
            "isbn",
            "likes",
            "publisher",
            "reviews",
            "title"
        ]
    );
}

#[rstest]
#[actix_web::test]
async fn export_covers_every_page_up_to_the_requested_one() {
    let response = get("/api/books/export?seed=7&page=3&pageSize=4").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = actix_test::read_body(response).await;
    let mut reader = csv::Reader::from_reader(body.as_ref());
    let indices: Vec<u64> = reader
        .records()
        .map(|record| {
            record
                .expect("valid CSV row")
                .get(0)
                .and_then(|index| index.parse().ok())
                .expect("numeric index")
        })
        .collect();
    assert_eq!(indices, (1..=12).collect::<Vec<_>>());
}

#[rstest]
#[actix_web::test]
async fn engine_rejections_carry_the_trace_id() {
    let response = get("/api/books?likesAvg=-1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = actix_test::read_body_json(response).await;

    assert_eq!(body["traceId"], json!(header));
    assert_eq!(body["details"]["field"], json!("likesAvg"));
    assert_eq!(body["details"]["code"], json!("invalid_average"));
}

#[rstest]
#[actix_web::test]
async fn oversized_exports_are_refused() {
    let response = get("/api/books/export?page=10000000&pageSize=1000&reviewsAvg=100").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["field"], json!("page"));
    assert_eq!(body["details"]["code"], json!("limit_exceeded"));
}

#[rstest]
#[actix_web::test]
async fn unknown_routes_return_the_error_envelope() {
    let response = get("/api/authors").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], json!("not_found"));
}

#[rstest]
#[actix_web::test]
async fn random_seeds_vary() {
    let mut seeds = Vec::new();
    for _ in 0..4 {
        let response = get("/api/books/random-seed").await;
        let seed: String = actix_test::read_body_json(response).await;
        seeds.push(seed);
    }
    seeds.sort_unstable();
    seeds.dedup();
    assert!(seeds.len() > 1, "four draws produced one seed: {seeds:?}");
}
