use async_trait::async_trait;
use common::CategoryId;
use domain::Category;

use crate::{CategorySearchQuery, Pagination, Result};

/// Storage port for the Category aggregate.
///
/// The rest of the system depends only on this trait and never inspects how
/// an implementation stores categories. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Persists a new category and returns the stored aggregate.
    async fn create(&self, category: Category) -> Result<Category>;

    /// Persists the new state of an existing category.
    async fn update(&self, category: Category) -> Result<Category>;

    /// Looks up a category by its identifier.
    ///
    /// Returns `None` if no category with that id exists.
    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>>;

    /// Removes a category by its identifier.
    ///
    /// Deleting an id that does not exist is a no-op, not an error.
    async fn delete_by_id(&self, id: &CategoryId) -> Result<()>;

    /// Returns one page of categories matching the query.
    ///
    /// Applies the `terms` filter, `sort`/`direction` ordering, and
    /// `page`/`per_page` slicing; `total` counts all matches before slicing.
    async fn find_all(&self, query: CategorySearchQuery) -> Result<Pagination<Category>>;
}
