//! CRAN package index access: package page layout, page download with
//! retries, a per-run page cache, and extraction of dependency names from
//! package pages.

pub mod cache;
pub mod download;
pub mod index;
pub mod page;
pub mod repository;
