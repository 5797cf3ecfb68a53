//! API integration tests
//!
//! Need a running server backed by a disposable MongoDB database:
//! `cargo test -- --ignored --test-threads=1` (several tests call /delete_all).

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

async fn create_user(client: &Client, first_name: &str) -> String {
    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "first_name": first_name,
            "last_name": "B",
            "phone_num": "1"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_str().expect("No user ID").to_string()
}

async fn create_book(client: &Client, isbn: &str) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Test Book",
            "author": "Test Author",
            "published_year": 2001,
            "isbn": isbn
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    response.json().await.expect("Failed to parse response")
}

async fn put(client: &Client, path: &str) -> (StatusCode, Value) {
    let response = client
        .put(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    (status, response.json().await.expect("Failed to parse response"))
}

async fn get_json(client: &Client, path: &str) -> (StatusCode, Value) {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    (status, response.json().await.expect("Failed to parse response"))
}

async fn reset(client: &Client) {
    let response = client
        .delete(format!("{}/delete_all", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_create_and_get_book() {
    let client = Client::new();
    let created = create_book(&client, "978-0-00-000000-1").await;
    assert!(created["cur_owner"].is_null());

    let id = created["id"].as_str().expect("No book ID");
    let (status, fetched) = get_json(&client, &format!("/books/{}", id)).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore]
async fn test_update_keeps_owner() {
    let client = Client::new();
    let user_id = create_user(&client, "Owner").await;
    let book = create_book(&client, "978-0-00-000000-2").await;
    let book_id = book["id"].as_str().unwrap();

    let (status, _) = put(&client, &format!("/books/{}/assign/{}", book_id, user_id)).await;
    assert_eq!(status, 200);

    let response = client
        .put(format!("{}/books/{}", BASE_URL, book_id))
        .json(&json!({
            "title": "Renamed",
            "author": "Test Author",
            "published_year": 2002,
            "isbn": "978-0-00-000000-2"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Renamed");
    assert_eq!(body["published_year"], 2002);
    assert_eq!(body["cur_owner"], user_id.as_str());
}

#[tokio::test]
#[ignore]
async fn test_missing_ids_are_not_found() {
    let client = Client::new();
    let missing = "000000000000000000000000";

    for path in ["books", "users", "rents"] {
        let (status, _) = get_json(&client, &format!("/{}/{}", path, missing)).await;
        assert_eq!(status, 404);

        let response = client
            .delete(format!("{}/{}/{}", BASE_URL, path, missing))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 404);
    }

    let response = client
        .put(format!("{}/users/{}", BASE_URL, missing))
        .json(&json!({ "first_name": "A", "last_name": "B", "phone_num": "1" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .put(format!("{}/books/{}", BASE_URL, missing))
        .json(&json!({
            "title": "Ghost",
            "author": "Nobody",
            "published_year": 1900,
            "isbn": "X"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .put(format!("{}/rents/{}", BASE_URL, missing))
        .json(&json!({
            "book_id": missing,
            "user_id": missing,
            "start_date": "2024-03-01T10:00:00Z",
            "end_date": "2024-03-15T10:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "NoSuchEntity");
}

#[tokio::test]
#[ignore]
async fn test_list_paging() {
    let client = Client::new();
    reset(&client).await;
    create_book(&client, "P-1").await;
    create_book(&client, "P-2").await;

    let (_, first) = get_json(&client, "/books?skip=0&limit=1").await;
    let (_, second) = get_json(&client, "/books?skip=1&limit=1").await;

    assert_eq!(first.as_array().unwrap().len(), 1);
    assert_eq!(second.as_array().unwrap().len(), 1);
    assert_ne!(first[0]["id"], second[0]["id"]);

    for path in ["/books?limit=0", "/users?limit=0", "/rents?limit=0"] {
        let (status, page) = get_json(&client, path).await;
        assert_eq!(status, 200, "{}", path);
        assert_eq!(page, json!([]), "{}", path);
    }

    let (_, past_end) = get_json(&client, "/books?skip=5").await;
    assert_eq!(past_end, json!([]));
}

#[tokio::test]
#[ignore]
async fn test_owned_books_paging() {
    let client = Client::new();
    let user_id = create_user(&client, "Collector").await;
    for isbn in ["O-1", "O-2", "O-3"] {
        let book = create_book(&client, isbn).await;
        let path = format!("/books/{}/assign/{}", book["id"].as_str().unwrap(), user_id);
        let (status, _) = put(&client, &path).await;
        assert_eq!(status, 200);
    }
    create_book(&client, "O-free").await;

    let owned = format!("/users/{}/owned_books", user_id);
    let (_, all) = get_json(&client, &owned).await;
    let all = all.as_array().unwrap().clone();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|book| book["cur_owner"] == user_id.as_str()));

    let (_, page) = get_json(&client, &format!("{}?skip=1&limit=1", owned)).await;
    assert_eq!(page, json!([all[1].clone()]));

    let (_, empty) = get_json(&client, &format!("{}?limit=0", owned)).await;
    assert_eq!(empty, json!([]));

    let (_, tail) = get_json(&client, &format!("{}?skip=2", owned)).await;
    assert_eq!(tail, json!([all[2].clone()]));
}

#[tokio::test]
#[ignore]
async fn test_ownership_scenario() {
    let client = Client::new();
    let user_id = create_user(&client, "A").await;
    let book = create_book(&client, "X").await;
    let book_id = book["id"].as_str().unwrap();
    assert!(book["cur_owner"].is_null());

    let (status, body) = put(&client, &format!("/books/{}/assign/{}", book_id, user_id)).await;
    assert_eq!(status, 200);
    assert_eq!(body["cur_owner"], user_id.as_str());

    let other = create_user(&client, "Y").await;
    let (status, _) = put(&client, &format!("/books/{}/assign/{}", book_id, other)).await;
    assert_eq!(status, 409);

    let (_, body) = get_json(&client, &format!("/books/{}", book_id)).await;
    assert_eq!(body["cur_owner"], user_id.as_str());

    let (_, owned) = get_json(&client, &format!("/users/{}/owned_books", user_id)).await;
    assert!(owned
        .as_array()
        .unwrap()
        .iter()
        .any(|b| b["id"] == book_id));

    let (status, body) = put(&client, &format!("/books/{}/release", book_id)).await;
    assert_eq!(status, 200);
    assert!(body["cur_owner"].is_null());

    let (status, body) = put(&client, &format!("/books/{}/release", book_id)).await;
    assert_eq!(status, 409);
    assert!(body["message"].as_str().unwrap().contains("not owned"));
}

#[tokio::test]
#[ignore]
async fn test_assign_to_missing_user() {
    let client = Client::new();
    let book = create_book(&client, "978-0-00-000000-3").await;
    let book_id = book["id"].as_str().unwrap();

    let (status, _) = put(
        &client,
        &format!("/books/{}/assign/000000000000000000000000", book_id),
    )
    .await;
    assert_eq!(status, 404);

    let (_, body) = get_json(&client, &format!("/books/{}", book_id)).await;
    assert!(body["cur_owner"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_delete_user_releases_books_but_keeps_rentals() {
    let client = Client::new();
    let user_id = create_user(&client, "Leaving").await;
    let book = create_book(&client, "978-0-00-000000-4").await;
    let book_id = book["id"].as_str().unwrap();

    let response = client
        .post(format!("{}/rents", BASE_URL))
        .json(&json!({
            "book_id": book_id,
            "user_id": user_id,
            "start_date": "2024-03-01T10:00:00Z",
            "end_date": "2024-03-15T10:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let rental: Value = response.json().await.unwrap();
    let rental_id = rental["id"].as_str().unwrap();

    let (status, _) = put(&client, &format!("/books/{}/assign/{}", book_id, user_id)).await;
    assert_eq!(status, 200);

    let response = client
        .delete(format!("{}/users/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(body["books_updated"].as_u64().unwrap() >= 1);

    let (_, book) = get_json(&client, &format!("/books/{}", book_id)).await;
    assert!(book["cur_owner"].is_null());

    let response = client
        .delete(format!("{}/users/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let (status, kept) = get_json(&client, &format!("/rents/{}", rental_id)).await;
    assert_eq!(status, 200);
    assert_eq!(kept["user_id"], user_id.as_str());
}

#[tokio::test]
#[ignore]
async fn test_delete_all_keeps_rentals() {
    let client = Client::new();
    let user_id = create_user(&client, "Temp").await;
    let book = create_book(&client, "978-0-00-000000-5").await;

    let response = client
        .post(format!("{}/rents", BASE_URL))
        .json(&json!({
            "book_id": book["id"],
            "user_id": user_id,
            "start_date": "2024-03-01T10:00:00Z",
            "end_date": "2024-03-02T10:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    reset(&client).await;

    let (_, books) = get_json(&client, "/books").await;
    let (_, users) = get_json(&client, "/users").await;
    let (_, rents) = get_json(&client, "/rents").await;
    assert!(books.as_array().unwrap().is_empty());
    assert!(users.as_array().unwrap().is_empty());
    assert!(!rents.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_readiness() {
    let client = Client::new();
    let (status, body) = get_json(&client, "/ready").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ready");
}
