use anyhow::{anyhow, Result};
use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use snipbox_dal::snippet::Snippet;
use snipbox_types::SnippetPayload;
use tracing::debug;
use url::Url;

/// Thin client for snipbox REST API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn snippet_url(&self, id: &str) -> Result<Url> {
        let mut url = self.url("api/snippets")?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Server URL cannot be a base"))?
            .push(id);
        Ok(url)
    }

    pub async fn list(&self) -> Result<Vec<Snippet>> {
        let response = self.http.get(self.url("api/snippets")?).send().await?;
        parse(response).await
    }

    pub async fn get(&self, id: &str) -> Result<Snippet> {
        let response = self.http.get(self.snippet_url(id)?).send().await?;
        parse(response).await
    }

    pub async fn create(&self, payload: &SnippetPayload) -> Result<Snippet> {
        let response = self
            .http
            .post(self.url("api/snippets")?)
            .json(payload)
            .send()
            .await?;
        parse(response).await
    }

    pub async fn update(&self, id: &str, payload: &SnippetPayload) -> Result<Snippet> {
        let response = self
            .http
            .put(self.snippet_url(id)?)
            .json(payload)
            .send()
            .await?;
        parse(response).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let response = self.http.delete(self.snippet_url(id)?).send().await?;
        let _: serde_json::Value = parse(response).await?;
        Ok(())
    }

    pub async fn languages(&self) -> Result<Vec<String>> {
        let response = self.http.get(self.url("api/languages")?).send().await?;
        parse(response).await
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    debug!("Response status {status} from {}", response.url());
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    match status {
        StatusCode::NOT_FOUND => Err(anyhow!("Not found: {message}")),
        StatusCode::BAD_REQUEST => Err(anyhow!("Invalid snippet: {message}")),
        _ => Err(anyhow!("Server error {status}: {message}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_url() {
        let client = ApiClient::new("http://localhost:3000/".parse().unwrap());
        assert_eq!(
            client.snippet_url("abc").unwrap().as_str(),
            "http://localhost:3000/api/snippets/abc"
        );
        assert_eq!(
            client.snippet_url("a/b c").unwrap().as_str(),
            "http://localhost:3000/api/snippets/a%2Fb%20c"
        );
    }
}
