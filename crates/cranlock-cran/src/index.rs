//! Access to a CRAN site's package pages for one locking run.

use std::sync::Arc;
use std::time::Duration;

use cranlock_core::config::FetchConfig;
use reqwest::Client;

use crate::cache::PageCache;
use crate::download;
use crate::page;
use crate::repository::CranRepository;

/// A CRAN site plus the HTTP client and page cache used to read it.
///
/// Create one per run; the page cache lives as long as the index.
pub struct CranIndex {
    client: Client,
    repo: CranRepository,
    pages: PageCache,
    retries: u32,
}

impl CranIndex {
    pub fn new(repo: CranRepository, fetch: &FetchConfig) -> miette::Result<Self> {
        let client = download::build_client(Duration::from_secs(fetch.timeout_secs))?;
        Ok(Self::with_client(client, repo, fetch.retries))
    }

    pub fn with_client(client: Client, repo: CranRepository, retries: u32) -> Self {
        Self {
            client,
            repo,
            pages: PageCache::new(),
            retries,
        }
    }

    /// Number of distinct pages requested so far, found or not.
    pub fn cached_pages(&self) -> usize {
        self.pages.len()
    }

    /// The package's summary page, or `None` if the site has no such page.
    pub async fn page(&self, package: &str) -> miette::Result<Option<Arc<str>>> {
        let url = self.repo.package_url(package);
        if let Some(hit) = self.pages.get(&url) {
            tracing::debug!("Page cache hit for {url}");
            return Ok(hit);
        }

        tracing::debug!("Fetching {url}");
        let page = download::download_text(&self.client, &url, self.retries)
            .await?
            .map(Arc::from);
        self.pages.put(&url, page.clone());
        Ok(page)
    }

    /// Direct dependency names of a package, or `None` if it is not available on the site.
    pub async fn direct_dependencies(&self, package: &str) -> miette::Result<Option<Vec<String>>> {
        let Some(html) = self.page(package).await? else {
            return Ok(None);
        };
        Ok(page::dependency_names(&html))
    }
}
