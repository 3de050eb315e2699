use reqwest::StatusCode;
use serde_json::Value;
use snipbox_e2e_tests::launch_env;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_health_and_languages() {
    let (client, base_url, _guard) = launch_env("test_health_and_languages").await.unwrap();

    let response = client
        .get(base_url.join("health").unwrap())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let languages: Vec<String> = client
        .get(base_url.join("api/languages").unwrap())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(languages.len(), 14);
    assert_eq!(languages[0], "javascript");
    assert!(languages.contains(&"rust".to_string()));
}

#[tokio::test]
#[traced_test]
async fn test_openapi_docs() {
    let (client, base_url, _guard) = launch_env("test_openapi_docs").await.unwrap();

    let response = client
        .get(base_url.join("api-docs/openapi.json").unwrap())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let docs: Value = response.json().await.unwrap();
    assert!(docs["paths"]["/api/snippets"].is_object());
    assert!(docs["paths"]["/api/snippets/{id}"].is_object());
    assert!(docs["paths"]["/api/languages"].is_object());
}
