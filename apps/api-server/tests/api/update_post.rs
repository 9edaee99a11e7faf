use serde_json::json;
use uuid::Uuid;

use crate::helpers::scenario;

#[tokio::test]
async fn update_overwrites_supplied_fields() {
    scenario(10, |app, _seeded| async move {
        let before = app.any_stored().await;
        let id = before.id.to_string();

        let response = app
            .update_post(&id, &json!({ "id": id, "title": "New", "content": "New content" }))
            .await;
        assert_eq!(response.status().as_u16(), 204);
        assert!(response.bytes().await.unwrap().is_empty());

        let after = app.stored(before.id).await.expect("post still exists");
        assert_eq!(after.title, "New");
        assert_eq!(after.content, "New content");
        assert_eq!(after.author, before.author);
        assert_eq!(after.created, before.created);
        assert_eq!(app.count().await, 10);
    })
    .await;
}

#[tokio::test]
async fn update_of_title_alone_leaves_other_fields() {
    scenario(5, |app, _seeded| async move {
        let before = app.any_stored().await;

        let response = app
            .update_post(&before.id.to_string(), &json!({ "title": "Only the title" }))
            .await;
        assert_eq!(response.status().as_u16(), 204);

        let after = app.stored(before.id).await.expect("post still exists");
        assert_eq!(after.title, "Only the title");
        assert_eq!(after.author, before.author);
        assert_eq!(after.content, before.content);
    })
    .await;
}

#[tokio::test]
async fn update_of_author_changes_display_name() {
    scenario(5, |app, _seeded| async move {
        let before = app.any_stored().await;
        let id = before.id.to_string();

        let response = app
            .update_post(
                &id,
                &json!({ "author": { "firstName": "Joe", "lastName": "Shmoe" } }),
            )
            .await;
        assert_eq!(response.status().as_u16(), 204);

        let body: serde_json::Value = app.get_post(&id).await.json().await.unwrap();
        assert_eq!(body["author"], "Joe Shmoe");
        assert_eq!(body["title"], before.title.as_str());
    })
    .await;
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    scenario(5, |app, _seeded| async move {
        let response = app
            .update_post(&Uuid::new_v4().to_string(), &json!({ "title": "New" }))
            .await;

        assert_eq!(response.status().as_u16(), 404);
    })
    .await;
}

#[tokio::test]
async fn update_with_mismatched_body_id_is_rejected() {
    scenario(5, |app, _seeded| async move {
        let before = app.any_stored().await;

        let response = app
            .update_post(
                &before.id.to_string(),
                &json!({ "id": Uuid::new_v4(), "title": "New" }),
            )
            .await;
        assert_eq!(response.status().as_u16(), 400);

        let after = app.stored(before.id).await.expect("post still exists");
        assert_eq!(after.title, before.title);
    })
    .await;
}

#[tokio::test]
async fn update_without_fields_is_rejected() {
    scenario(5, |app, _seeded| async move {
        let before = app.any_stored().await;

        let response = app.update_post(&before.id.to_string(), &json!({})).await;
        assert_eq!(response.status().as_u16(), 400);

        let response = app
            .update_post(&before.id.to_string(), &json!({ "content": "   " }))
            .await;
        assert_eq!(response.status().as_u16(), 400);

        assert_eq!(app.stored(before.id).await, Some(before));
    })
    .await;
}
