//! Catalog fetch for the browser build
//!
//! Fetches the games document over HTTP with gloo-net and gives up after a
//! fixed timeout so the page can show an error instead of loading forever.

use boardgame_core::{CatalogError, CatalogSource};
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::console;

/// Where the catalog lives
pub const CATALOG_URL: &str =
    "https://raw.githubusercontent.com/cederdorff/race/refs/heads/master/data/games.json";

const FETCH_TIMEOUT_MS: u32 = 15_000;

pub struct HttpCatalogSource {
    url: String,
    timeout_ms: u32,
}

impl Default for HttpCatalogSource {
    fn default() -> Self {
        Self::new(CATALOG_URL)
    }
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }

    async fn get_text(&self) -> Result<String, CatalogError> {
        console::log_1(&format!("fetch_catalog: GET {}", self.url).into());
        let resp = Request::get(&self.url).send().await.map_err(|e| {
            console::error_1(&format!("fetch_catalog: Request failed: {}", e).into());
            CatalogError::Transport(e.to_string())
        })?;

        console::log_1(&format!("fetch_catalog: Response status {}", resp.status()).into());
        if !resp.ok() {
            return Err(CatalogError::Status(resp.status()));
        }

        resp.text().await.map_err(|e| {
            console::error_1(&format!("fetch_catalog: Reading body failed: {}", e).into());
            CatalogError::Transport(e.to_string())
        })
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        let request = Box::pin(self.get_text());
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));

        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                console::error_1(
                    &format!("fetch_catalog: No response after {} ms", self.timeout_ms).into(),
                );
                Err(CatalogError::Timeout(self.timeout_ms))
            }
        }
    }
}
