//! AppMessage enum for async communication within the application.

use crate::models::{OrderResult, ProductItem};

/// Messages received from async operations (catalog fetch, order
/// submission). Handling one re-enters the synchronous dispatch path.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Catalog fetch completed.
    CatalogLoaded(Vec<ProductItem>),
    /// Catalog fetch failed; logged, not surfaced to the user.
    CatalogFailed(String),
    /// Order submission confirmed by the backend.
    OrderCompleted(OrderResult),
    /// Order submission failed; logged, not surfaced to the user.
    OrderFailed(String),
}
