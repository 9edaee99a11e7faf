use blog_shared::ErrorResponse;
use blog_shared::dto::PostResponse;
use serde_json::json;

use crate::helpers::{assert_has_required_keys, scenario};

#[tokio::test]
async fn create_returns_stored_representation() {
    scenario(10, |app, _seeded| async move {
        let payload = json!({
            "author": { "firstName": "Joe", "lastName": "Shmoe" },
            "title": "T",
            "content": "C"
        });

        let response = app.create_post(&payload).await;
        assert_eq!(response.status().as_u16(), 201);

        let location = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .expect("location header");

        let body: serde_json::Value = response.json().await.unwrap();
        assert_has_required_keys(&body);
        assert_eq!(body["author"], "Joe Shmoe");
        assert_eq!(body["title"], "T");
        assert_eq!(body["content"], "C");

        let post: PostResponse = serde_json::from_value(body).unwrap();
        assert_eq!(location, format!("/posts/{}", post.id));

        let stored = app.stored(post.id).await.expect("created post is persisted");
        assert_eq!(stored.author.first_name, "Joe");
        assert_eq!(stored.author.last_name, "Shmoe");
        assert_eq!(stored.title, "T");
        assert_eq!(stored.content, "C");
        assert_eq!(stored.created, post.created);
        assert_eq!(app.count().await, 11);
    })
    .await;
}

#[tokio::test]
async fn create_round_trips_generated_payload() {
    scenario(5, |app, _seeded| async move {
        let payload = blog_fixtures::generate_create_request();

        let response = app.create_post(&payload).await;
        assert_eq!(response.status().as_u16(), 201);
        let post: PostResponse = response.json().await.unwrap();

        let stored = app.stored(post.id).await.expect("created post is persisted");
        let author = payload.author.expect("generated payload has an author");
        assert_eq!(Some(stored.author.first_name), author.first_name);
        assert_eq!(Some(stored.author.last_name), author.last_name);
        assert_eq!(Some(stored.title), payload.title);
        assert_eq!(Some(stored.content), payload.content);
    })
    .await;
}

#[tokio::test]
async fn create_assigns_fresh_ids() {
    scenario(0, |app, _seeded| async move {
        let payload = blog_fixtures::generate_create_request();

        let first: PostResponse = app.create_post(&payload).await.json().await.unwrap();
        let second: PostResponse = app.create_post(&payload).await.json().await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(app.count().await, 2);
    })
    .await;
}

#[tokio::test]
async fn create_with_missing_fields_is_a_validation_failure() {
    scenario(5, |app, _seeded| async move {
        let cases = [
            (json!({ "title": "T", "content": "C" }), "author"),
            (
                json!({ "author": { "firstName": "Joe", "lastName": "Shmoe" }, "content": "C" }),
                "title",
            ),
            (
                json!({ "author": { "firstName": "Joe", "lastName": "Shmoe" }, "title": "T" }),
                "content",
            ),
            (
                json!({ "author": { "firstName": "Joe" }, "title": "T", "content": "C" }),
                "author.lastName",
            ),
            (
                json!({ "author": { "firstName": "Joe", "lastName": "Shmoe" }, "title": "", "content": "C" }),
                "title",
            ),
        ];

        for (payload, field) in cases {
            let response = app.create_post(&payload).await;
            assert_eq!(
                response.status().as_u16(),
                400,
                "payload {} should be rejected",
                payload
            );

            let problem: ErrorResponse = response.json().await.unwrap();
            assert_eq!(problem.title, "Validation Failed");
            let detail = problem.detail.unwrap_or_default();
            assert!(
                detail.contains(field),
                "detail {:?} should name {}",
                detail,
                field
            );
        }

        assert_eq!(app.count().await, 5);
    })
    .await;
}

#[tokio::test]
async fn create_with_malformed_json_is_bad_request() {
    scenario(0, |app, _seeded| async move {
        let response = app
            .client
            .post(app.url("/posts"))
            .header("content-type", "application/json")
            .body("{\"title\": ")
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(response.status().as_u16(), 400);
        let problem: ErrorResponse = response.json().await.unwrap();
        assert_eq!(problem.title, "Bad Request");
        assert_eq!(app.count().await, 0);
    })
    .await;
}
