//! Slug-addressed document store
//!
//! Pages are plain text documents keyed by a slug. The slug is also the
//! storage key: the directory-backed store keeps each page in `<slug>.md`
//! under a single root directory, with no separate index.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pages_server::document::{DocumentStore, FsDocumentStore};
//!
//! let store = FsDocumentStore::new("../content");
//! store.ensure_bootstrap().await?;
//!
//! store.create("about", "# About").await?;
//! let content = store.get("about").await?;
//! let slugs = store.list().await?;
//! ```

mod error;
mod fs_store;
mod slug;
mod traits;

pub use error::{Result, StoreError};
pub use fs_store::FsDocumentStore;
pub use slug::{validate, Slug, SlugError, MAX_SLUG_LEN, PAGE_EXTENSION};
pub use traits::{DocumentStore, WELCOME_CONTENT, WELCOME_SLUG};
