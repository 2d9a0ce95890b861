//! Per-run cache of downloaded package pages.
//!
//! A package often appears many times across dependency trees. The resolver
//! already avoids asking twice for the same package; this cache sits below it
//! and keys on the page URL, so any other caller sharing the index in the same
//! run also reuses responses. Missing pages are cached too.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Page bodies keyed by URL. `None` records a page that does not exist.
#[derive(Debug, Default)]
pub struct PageCache {
    pages: Mutex<HashMap<String, Option<Arc<str>>>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a URL. The outer `Option` is the cache hit, the inner one whether the page exists.
    pub fn get(&self, url: &str) -> Option<Option<Arc<str>>> {
        self.pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url)
            .cloned()
    }

    pub fn put(&self, url: &str, page: Option<Arc<str>>) {
        self.pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.to_string(), page);
    }

    pub fn len(&self) -> usize {
        self.pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
