use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;

use crate::config::constants::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::network::errors::FetchError;
use crate::network::Fetch;

// * The HTTP engine for the whole run.
// * Cookie store and compression stay enabled; the source site is static
// * HTML, so there is no browser fallback.
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self { inner: client })
    }
}

impl Fetch for HttpClient {
    // * Fetches a page body. Only HTTP 200 is treated as a page; every other
    // * status surfaces as FetchError::Status for the caller to skip on.
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.inner.get(url).send().await?;
        let status = resp.status();

        if status.as_u16() != 200 {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(resp.text().await?)
    }

    // * Streams a binary asset straight to disk, returning bytes written.
    // * The body is opaque; no decoding or validation happens here.
    async fn download_to(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        let resp = self.inner.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let mut file = tokio::fs::File::create(dest).await?;
        let mut stream = resp.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        file.flush().await?;
        Ok(written)
    }
}
