//! List categories with search and pagination.

use async_trait::async_trait;
use category_store::{CategoryGateway, CategorySearchQuery, Pagination};
use chrono::{DateTime, Utc};
use common::CategoryId;
use domain::Category;

use crate::error::UseCaseError;
use crate::use_case::UseCase;

/// Row view used in paged listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListOutput {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryListOutput {
    fn from(category: Category) -> Self {
        Self {
            id: category.id().clone(),
            name: category.name().map(String::from),
            description: category.description().map(String::from),
            active: category.is_active(),
            created_at: category.created_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

/// Runs the gateway search and maps each row, leaving the page metadata
/// untouched.
pub struct ListCategoriesUseCase<G> {
    gateway: G,
}

impl<G: CategoryGateway> ListCategoriesUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: CategoryGateway> UseCase for ListCategoriesUseCase<G> {
    type Input = CategorySearchQuery;
    type Output = Result<Pagination<CategoryListOutput>, UseCaseError>;

    #[tracing::instrument(skip(self, input), fields(page = input.page, per_page = input.per_page))]
    async fn execute(&self, input: Self::Input) -> Self::Output {
        let page = self.gateway.find_all(input).await?;
        Ok(page.map(CategoryListOutput::from))
    }
}
