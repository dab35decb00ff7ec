//! Document store interface
//!
//! Request handlers only talk to `dyn DocumentStore`, so the directory-backed
//! implementation can be replaced by another key-value backend.

use async_trait::async_trait;

use super::error::Result;
use super::slug::Slug;

/// Slug of the page seeded on first startup
pub const WELCOME_SLUG: &str = "welcome";

/// Content of the seeded welcome page
pub const WELCOME_CONTENT: &str = "# Welcome\n\nThis is the welcome page.";

/// Slug-addressed store of text pages
///
/// Implementations must be safe to call concurrently. Readers never observe
/// a partially written page; concurrent writes to one slug resolve as
/// last-writer-wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Snapshot of all page slugs
    async fn list(&self) -> Result<Vec<Slug>>;

    /// Create or overwrite the page for `slug`, returning the normalized slug
    async fn create(&self, slug: &str, content: &str) -> Result<Slug>;

    /// Full content of the page for `slug`
    async fn get(&self, slug: &str) -> Result<String>;

    /// Make sure the store exists and holds the welcome page.
    ///
    /// Idempotent. Returns `true` if the welcome page was written by this call.
    async fn ensure_bootstrap(&self) -> Result<bool>;
}
