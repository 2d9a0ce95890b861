//! Core data types for cranlock.
//!
//! This crate defines the plain data a locking run works with: the global
//! configuration, the list of requested packages, the version map produced
//! from a reference image, and the installer script rendered at the end.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod config;
pub mod packages;
pub mod script;
pub mod versions;
