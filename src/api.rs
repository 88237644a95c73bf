// Transport module: a small blocking HTTP client that fetches list files
// from the configured static file host. It is intentionally small and
// synchronous; every call happens on the interactive loop's thread or a
// short-lived prefetch thread.

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

use crate::listing::Listing;

/// Errors from fetching a source file. Non-success statuses are kept apart
/// from transport failures so the UI can show the status code.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the file host: a reqwest blocking client, the base URL the
/// files are served under, and the configured file list.
#[derive(Clone)]
pub struct FileClient {
    client: Client,
    base_url: String,
    files: Vec<String>,
}

impl FileClient {
    /// Create a FileClient configured from the environment variables
    /// `FILE_HOST_URL` and `FILE_LIST` (comma-separated filenames), or
    /// fall back to a local static host serving `no.txt` and `yes.txt`.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("FILE_HOST_URL")
            .unwrap_or_else(|_| "http://localhost:8000/Source/Files".into());
        let files = parse_file_list(
            &std::env::var("FILE_LIST").unwrap_or_else(|_| "no.txt,yes.txt".into()),
        );
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(FileClient {
            client,
            base_url,
            files,
        })
    }

    /// The configured filenames, in menu order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// GET the file body as text. Success means an HTTP-success-class
    /// status; anything else is a `FetchError`.
    fn get_text(&self, filename: &str) -> Result<String, FetchError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), filename);
        let res = self.client.get(&url).send()?;
        if !res.status().is_success() {
            return Err(FetchError::Status(res.status()));
        }
        Ok(res.text()?)
    }

    /// Fetch a file and parse it into a `Listing`.
    pub fn fetch_file(&self, filename: &str) -> Result<Listing, FetchError> {
        let text = self.get_text(filename)?;
        Ok(Listing::parse(filename, &text))
    }

    /// Fetch a file but keep only its title line. The dropdown uses this
    /// to label its entries.
    pub fn fetch_title(&self, filename: &str) -> Result<String, FetchError> {
        let text = self.get_text(filename)?;
        Ok(Listing::title_line(filename, &text))
    }
}

fn parse_file_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_list_splits_and_trims() {
        assert_eq!(
            parse_file_list("no.txt, yes.txt ,"),
            vec!["no.txt", "yes.txt"]
        );
        assert!(parse_file_list("").is_empty());
    }

    #[test]
    fn status_error_carries_the_code() {
        let err = FetchError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP error! status: 404 Not Found");
    }
}
