use pubshelf_model::{Publication, RawPublication};
use reqwest::{Client, StatusCode};
use url::Url;

/// Errors from the publication endpoint.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("endpoint returned {0}")]
    Status(StatusCode),

    #[error("invalid server URL: {0}")]
    BadUrl(#[from] url::ParseError),
}

/// Fetch and normalize the author's publication list.
///
/// Raw records are sanitized here, exactly once; everything downstream
/// relies on the defaulted fields instead of re-checking shape.
pub async fn fetch_publications(
    client: &Client,
    server: &Url,
    author: &str,
) -> Result<Vec<Publication>, FetchError> {
    let url = server.join("fetch-publications")?;
    let response = client
        .get(url)
        .query(&[("author", author)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let raw: Vec<RawPublication> = response.json().await?;
    tracing::debug!(count = raw.len(), "normalizing fetched records");
    Ok(raw.into_iter().map(Publication::from_raw).collect())
}
