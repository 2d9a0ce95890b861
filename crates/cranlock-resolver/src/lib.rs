//! Dependency resolution engine: memoized transitive expansion of root
//! packages, merging of per-root trees into one graph, and a cycle-checked
//! topological ordering in which dependencies come before dependents.
//!
//! The engine itself is synchronous and works over a [`DependencyProvider`].
//! Network-backed sources are read ahead of it by [`prefetch::prefetch`].

pub mod cache;
pub mod error;
pub mod graph;
pub mod order;
pub mod prefetch;
pub mod provider;
pub mod resolver;
pub mod tree;

pub use error::ResolveError;
pub use provider::{DependencyProvider, DependencySource};

/// An opaque, case-sensitive package name.
pub type PackageId = String;
