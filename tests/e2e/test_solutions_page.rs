use crate::helpers;

use helpers::{build_app, get, seeded_store};
use hyper::StatusCode;
use solutions_backend::infrastructure::content::InMemoryContentStore;

#[tokio::test]
async fn it_should_compose_the_initial_grid() {
    let app = build_app(seeded_store());

    let (status, page) = get(&app, "/solutions").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("solutions-container"));
    assert!(page.contains("<option value=\"1\" selected>Use Case</option>"));
    assert!(page.contains("<option value=\"2\">Industry</option>"));
    // default category items only
    assert!(page.contains("Connect Suite"));
    assert!(page.contains("Asset Tracker"));
    assert!(!page.contains("Banking Cloud"));
    // unpublished and reserved content never appears
    assert!(!page.contains("Draft Thing"));
    assert!(!page.contains("Stray"));
    assert!(!page.contains("Uncategorized"));
}

#[tokio::test]
async fn it_should_assign_unique_container_ids() {
    let app = build_app(seeded_store());

    let (_, first) = get(&app, "/solutions").await;
    let (_, second) = get(&app, "/solutions").await;

    let id_of = |page: &str| {
        let start = page.find("id=\"").expect("container id") + 4;
        let end = start + page[start..].find('"').expect("closing quote");
        page[start..end].to_string()
    };
    assert_ne!(id_of(&first), id_of(&second));
}

#[tokio::test]
async fn it_should_render_a_category_grid_by_slug() {
    let app = build_app(seeded_store());

    let (status, page) = get(&app, "/solutions/industry").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("solutions-category-container"));
    assert!(page.contains("Banking Cloud"));
    assert!(page.contains("Agri Sense"));
    assert!(!page.contains("Connect Suite"));
}

#[tokio::test]
async fn it_should_render_a_category_grid_by_id() {
    let app = build_app(seeded_store());

    let (_, by_slug) = get(&app, "/solutions/industry").await;
    let (_, by_id) = get(&app, "/solutions/2").await;

    assert_eq!(by_slug, by_id);
}

#[tokio::test]
async fn it_should_reject_the_reserved_category_page() {
    let app = build_app(seeded_store());

    let (status, page) = get(&app, "/solutions/uncategorized").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        page,
        "<p class=\"solutions-error\">Invalid category specified.</p>"
    );
}

#[tokio::test]
async fn it_should_show_the_category_placeholder_when_empty() {
    let app = build_app(seeded_store());

    // "region" resolves but has no published items
    let (_, page) = get(&app, "/solutions/region").await;

    assert!(page.contains("No solutions found for this category."));
    assert!(!page.contains("solution-card"));
}

#[tokio::test]
async fn it_should_degrade_to_an_inline_error_without_categories() {
    let app = build_app(InMemoryContentStore::new());

    let (status, page) = get(&app, "/solutions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        page,
        "<p class=\"solutions-error\">No solution categories found.</p>"
    );
}
