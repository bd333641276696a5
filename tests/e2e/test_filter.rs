use crate::helpers;

use helpers::{build_app, get, post_json, seeded_store, TEST_FILTER_TOKEN};
use hyper::StatusCode;
use serde_json::json;

#[tokio::test]
async fn it_should_filter_solutions_by_category() {
    let app = build_app(seeded_store());

    let (status, body) = post_json(
        &app,
        "/filter",
        &json!({
            "action": "solutions_filter",
            "category": 2,
            "token": TEST_FILTER_TOKEN
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["count"], json!(2));
    assert_eq!(body["data"]["category_name"], json!("Industry"));

    let html = body["data"]["html"].as_str().expect("html fragment");
    let agri = html.find("Agri Sense").expect("Agri Sense card");
    let banking = html.find("Banking Cloud").expect("Banking Cloud card");
    assert!(agri < banking, "cards must be title-ascending");
    // the no-link item is kept, with an empty click target
    assert!(html.contains("data-link=\"\""));
}

#[tokio::test]
async fn it_should_echo_the_request_id() {
    let app = build_app(seeded_store());

    let (_, body) = post_json(
        &app,
        "/filter",
        &json!({
            "category": 2,
            "token": TEST_FILTER_TOKEN,
            "request_id": "sel-42"
        }),
    )
    .await;

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["request_id"], json!("sel-42"));

    let (_, failure) = post_json(
        &app,
        "/filter",
        &json!({
            "category": 0,
            "token": TEST_FILTER_TOKEN,
            "request_id": "sel-43"
        }),
    )
    .await;

    assert_eq!(failure["success"], json!(false));
    assert_eq!(failure["data"]["request_id"], json!("sel-43"));
}

#[tokio::test]
async fn it_should_reject_an_invalid_token() {
    let app = build_app(seeded_store());

    let (status, body) = post_json(
        &app,
        "/filter",
        &json!({ "category": 2, "token": "forged" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["data"]["message"], json!("Security check failed"));
}

#[tokio::test]
async fn it_should_reject_a_missing_category() {
    let app = build_app(seeded_store());

    let (status, body) = post_json(
        &app,
        "/filter",
        &json!({ "category": 0, "token": TEST_FILTER_TOKEN }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["data"]["message"], json!("No category selected"));
}

#[tokio::test]
async fn it_should_reject_the_reserved_category() {
    let app = build_app(seeded_store());

    let (_, body) = post_json(
        &app,
        "/filter",
        &json!({ "category": 9, "token": TEST_FILTER_TOKEN }),
    )
    .await;

    assert_eq!(body["success"], json!(false));
    assert_eq!(body["data"]["message"], json!("Invalid category"));
}

#[tokio::test]
async fn it_should_treat_an_unknown_category_as_a_valid_empty_state() {
    let app = build_app(seeded_store());

    let (_, body) = post_json(
        &app,
        "/filter",
        &json!({ "category": 777, "token": TEST_FILTER_TOKEN }),
    )
    .await;

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["count"], json!(0));
    assert_eq!(body["data"]["category_name"], json!(""));
    let html = body["data"]["html"].as_str().expect("html fragment");
    assert_eq!(html.matches("solutions-empty").count(), 1);
    assert!(!html.contains("solution-card"));
}

#[tokio::test]
async fn it_should_render_identical_cards_for_page_and_filter() {
    let app = build_app(seeded_store());

    // Full page renders the default (use-case) category.
    let (_, page) = get(&app, "/solutions").await;

    let (_, body) = post_json(
        &app,
        "/filter",
        &json!({ "category": 1, "token": TEST_FILTER_TOKEN }),
    )
    .await;

    let fragment = body["data"]["html"].as_str().expect("html fragment");
    assert!(
        page.contains(fragment),
        "partial fragment must be byte-identical to the grid the page embeds"
    );
}
