//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

/// Trait implemented by query builders. Provides URL serialization and
/// the shared pagination builder.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the page number (1-indexed).
    fn page_mut(&mut self) -> &mut u32;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        *self.page_mut() = page;
        self
    }
}
