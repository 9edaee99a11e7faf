use blog_shared::dto::PostResponse;

use crate::helpers::{assert_has_required_keys, scenario};

#[tokio::test]
async fn list_returns_every_seeded_post_with_required_keys() {
    scenario(10, |app, _seeded| async move {
        let response = app.get_posts().await;
        assert_eq!(response.status().as_u16(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        let posts = body.as_array().expect("response should be a bare array");
        assert_eq!(posts.len(), 10);
        assert_eq!(app.count().await, 10);

        for post in posts {
            assert_has_required_keys(post);
        }
    })
    .await;
}

#[tokio::test]
async fn list_is_ordered_by_creation_time() {
    scenario(5, |app, mut seeded| async move {
        seeded.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));

        let posts: Vec<PostResponse> = app.get_posts().await.json().await.unwrap();

        let listed: Vec<_> = posts.iter().map(|p| p.id).collect();
        let expected: Vec<_> = seeded.iter().map(|p| p.id).collect();
        assert_eq!(listed, expected);
    })
    .await;
}

#[tokio::test]
async fn list_flattens_author_names() {
    scenario(5, |app, seeded| async move {
        let posts: Vec<PostResponse> = app.get_posts().await.json().await.unwrap();

        for post in posts {
            let source = seeded
                .iter()
                .find(|s| s.id == post.id)
                .expect("listed post was seeded");
            assert_eq!(post.author, source.author.display_name());
            assert_eq!(post.title, source.title);
            assert_eq!(post.content, source.content);
        }
    })
    .await;
}

#[tokio::test]
async fn list_of_empty_store_is_empty_array() {
    scenario(0, |app, _seeded| async move {
        let response = app.get_posts().await;
        assert_eq!(response.status().as_u16(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!([]));
    })
    .await;
}
