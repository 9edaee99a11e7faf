use blog_shared::ErrorResponse;
use blog_shared::dto::PostResponse;
use uuid::Uuid;

use crate::helpers::scenario;

#[tokio::test]
async fn get_returns_stored_post() {
    scenario(5, |app, _seeded| async move {
        let stored = app.any_stored().await;

        let response = app.get_post(&stored.id.to_string()).await;
        assert_eq!(response.status().as_u16(), 200);

        let post: PostResponse = response.json().await.unwrap();
        assert_eq!(post.id, stored.id);
        assert_eq!(post.author, stored.author.display_name());
        assert_eq!(post.title, stored.title);
        assert_eq!(post.content, stored.content);
    })
    .await;
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    scenario(5, |app, _seeded| async move {
        let response = app.get_post(&Uuid::new_v4().to_string()).await;
        assert_eq!(response.status().as_u16(), 404);

        let problem: ErrorResponse = response.json().await.unwrap();
        assert_eq!(problem.status, 404);
        assert_eq!(problem.title, "Not Found");
    })
    .await;
}

#[tokio::test]
async fn get_malformed_id_is_not_found() {
    scenario(0, |app, _seeded| async move {
        let response = app.get_post("definitely-not-an-id").await;
        assert_eq!(response.status().as_u16(), 404);
    })
    .await;
}
