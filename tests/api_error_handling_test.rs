use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use book_outlet::db;
use book_outlet::domain::{AuthorInput, BookInput};
use book_outlet::infrastructure::AppState;
use book_outlet::server::build_router;
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test app with a seeded author and book
async fn setup_test_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");

    let state = AppState::new(db.clone());
    let author = state
        .author_repo
        .create(AuthorInput {
            first_name: "J.K.".to_string(),
            last_name: "Rowling".to_string(),
            address_id: None,
        })
        .await
        .expect("Failed to create author");

    for (title, rating, author_id, is_bestselling) in [
        ("My Story", 2, None, false),
        ("Harry Potter 1", 5, Some(author.id), true),
        ("Lord of the Rings", 4, None, false),
        ("Some Random Book", 1, None, false),
    ] {
        state
            .book_repo
            .create(BookInput {
                title: title.to_string(),
                rating,
                author_id,
                is_bestselling,
                country_ids: vec![],
            })
            .await
            .expect("Failed to create book");
    }

    build_router(db, &[])
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().uri(uri).method(method);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_all_books_page() {
    let app = setup_test_app().await;

    let (status, html) = send(&app, "GET", "/all-books", None).await;
    assert_eq!(status, StatusCode::OK);

    // Best rated first
    let positions: Vec<usize> = [
        "Harry Potter 1 (5)",
        "Lord of the Rings (4)",
        "My Story (2)",
        "Some Random Book (1)",
    ]
    .iter()
    .map(|entry| html.find(entry).expect("book missing from page"))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(html.contains("href=\"/book-detail/harry-potter-1\""));
    assert!(html.contains("Total number of books: 4"));
    assert!(html.contains("Average rating: 3.0"));
}

#[tokio::test]
async fn test_book_detail_page() {
    let app = setup_test_app().await;

    let (status, html) = send(&app, "GET", "/book-detail/harry-potter-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Harry Potter 1</h1>"));
    assert!(html.contains("J.K. Rowling"));
    assert!(html.contains("Rating: 5"));
    assert!(html.contains("This is a bestseller!"));
}

#[tokio::test]
async fn test_book_detail_not_found() {
    let app = setup_test_app().await;

    let (status, _) = send(&app, "GET", "/book-detail/no-such-book", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Not a slug at all
    let (status, _) = send(&app, "GET", "/book-detail/bad%20slug", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_create_book_validation() {
    let app = setup_test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/admin/books",
        Some(serde_json::json!({ "title": "Too Good", "rating": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("rating"));

    let long_title = "x".repeat(51);
    let (status, _) = send(
        &app,
        "POST",
        "/admin/books",
        Some(serde_json::json!({ "title": long_title, "rating": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_admin_create_book_derives_slug() {
    let app = setup_test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/admin/books",
        Some(serde_json::json!({
            "title": "The Hobbit",
            "rating": 4,
            "slug": "ignored"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["book"]["slug"], "the-hobbit");
    assert_eq!(json["book"]["is_bestselling"], false);

    let (status, _) = send(&app, "GET", "/book-detail/the-hobbit", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_list_books_filter() {
    let app = setup_test_app().await;

    let (status, body) = send(&app, "GET", "/admin/books?rating=5", None).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["books"][0]["title"], "Harry Potter 1");
    assert_eq!(json["books"][0]["author"], "J.K. Rowling");
}

#[tokio::test]
async fn test_admin_unknown_ids() {
    let app = setup_test_app().await;

    let (status, _) = send(&app, "GET", "/admin/books/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PUT",
        "/admin/books/999",
        Some(serde_json::json!({ "title": "Ghost", "rating": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/admin/authors/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/admin/addresses/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_country_code_validation() {
    let app = setup_test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/admin/countries",
        Some(serde_json::json!({ "name": "Germany", "code": "DEU" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(
        &app,
        "POST",
        "/admin/countries",
        Some(serde_json::json!({ "name": "Germany", "code": "de" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["country"]["code"], "DE");
}

#[tokio::test]
async fn test_admin_author_address_flow() {
    let app = setup_test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/admin/addresses",
        Some(serde_json::json!({
            "street": "Bag End",
            "postal_code": "123456",
            "city": "Hobbiton"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", body);

    let (status, body) = send(
        &app,
        "POST",
        "/admin/addresses",
        Some(serde_json::json!({
            "street": "Bag End",
            "postal_code": "12345",
            "city": "Hobbiton"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let address_id = serde_json::from_str::<Value>(&body).unwrap()["address"]["id"].clone();

    let (status, body) = send(
        &app,
        "POST",
        "/admin/authors",
        Some(serde_json::json!({
            "first_name": "J.R.R.",
            "last_name": "Tolkien",
            "address_id": address_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let author_id = serde_json::from_str::<Value>(&body).unwrap()["author"]["id"]
        .as_i64()
        .unwrap();

    let (status, _) = send(&app, "DELETE", &format!("/admin/authors/{}", author_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "GET",
        &format!("/admin/addresses/{}", address_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = setup_test_app().await;

    let (status, body) = send(&app, "GET", "/admin/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["paths"]["/admin/books"].is_object());
}
