//! Catalog sources for the CLI: HTTP via reqwest, or a local JSON file

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use boardgame_core::{CatalogError, CatalogSource};
use tracing::debug;

pub struct HttpSource {
    client: reqwest::Client,
    url: String,
    timeout_ms: u32,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout_secs: u32) -> Result<Self> {
        let timeout_ms = timeout_secs.saturating_mul(1000);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms.into()))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, url: url.into(), timeout_ms })
    }

    fn transport_error(&self, err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout(self.timeout_ms)
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}

impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        debug!(url = %self.url, "fetching catalog");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!(%status, "catalog response");
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| self.transport_error(e))
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        debug!(path = %self.path.display(), "reading catalog file");
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Transport(format!("{}: {}", self.path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardgame_core::CatalogStore;

    #[tokio::test]
    async fn test_file_source_loads_catalog() {
        let path = std::env::temp_dir().join(format!("boardgame-cli-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"[{"title":"Azul","playtime":45}]"#).await.unwrap();

        let store = CatalogStore::load(&FileSource::new(&path)).await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.games()[0].playtime, Some(45));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_transport_error() {
        let source = FileSource::new("/nonexistent/boardgames.json");
        let err = CatalogStore::load(&source).await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport(msg) if msg.contains("boardgames.json")));
    }
}
