use crate::helpers::scenario;

#[tokio::test]
async fn health_check_reports_ok_and_tags_request() {
    scenario(0, |app, _seeded| async move {
        let response = app
            .client
            .get(app.url("/health"))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(response.status().as_u16(), 200);
        assert!(response.headers().contains_key("x-request-id"));

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "ok");
    })
    .await;
}
