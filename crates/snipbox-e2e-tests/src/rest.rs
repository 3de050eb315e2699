use anyhow::{Result, anyhow};
use reqwest::{Client, StatusCode, Url};
use serde_json::{Value, json};
use snipbox_dal::snippet::Snippet;

pub fn snippets_url(base_url: &Url) -> Result<Url> {
    Ok(base_url.join("api/snippets")?)
}

pub async fn create_snippet(
    client: &Client,
    base_url: &Url,
    title: &str,
    language: &str,
    tags: Value,
) -> Result<Snippet> {
    let payload = json!({
        "title": title,
        "description": format!("Description of {title}"),
        "code": format!("// {title}\nfn main() {{}}"),
        "language": language,
        "tags": tags,
    });
    let response = client
        .post(snippets_url(base_url)?)
        .json(&payload)
        .send()
        .await?;
    if response.status() != StatusCode::CREATED {
        return Err(anyhow!(
            "Create failed with {}: {}",
            response.status(),
            response.text().await?
        ));
    }
    Ok(response.json().await?)
}
