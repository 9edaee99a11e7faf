use uuid::Uuid;

use crate::helpers::scenario;

#[tokio::test]
async fn delete_removes_post() {
    scenario(10, |app, _seeded| async move {
        let post = app.any_stored().await;

        let response = app.delete_post(&post.id.to_string()).await;
        assert_eq!(response.status().as_u16(), 204);

        assert_eq!(app.stored(post.id).await, None);
        assert_eq!(app.count().await, 9);
    })
    .await;
}

#[tokio::test]
async fn delete_twice_reports_not_found() {
    scenario(5, |app, _seeded| async move {
        let id = app.any_stored().await.id.to_string();

        assert_eq!(app.delete_post(&id).await.status().as_u16(), 204);
        assert_eq!(app.delete_post(&id).await.status().as_u16(), 404);
        assert_eq!(app.get_post(&id).await.status().as_u16(), 404);
        assert_eq!(app.count().await, 4);
    })
    .await;
}

#[tokio::test]
async fn delete_of_unknown_id_is_not_found() {
    scenario(5, |app, _seeded| async move {
        let response = app.delete_post(&Uuid::new_v4().to_string()).await;

        assert_eq!(response.status().as_u16(), 404);
        assert_eq!(app.count().await, 5);
    })
    .await;
}
