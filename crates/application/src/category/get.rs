//! Fetch a category by id.

use async_trait::async_trait;
use category_store::CategoryGateway;
use chrono::{DateTime, Utc};
use common::CategoryId;
use domain::{Category, DomainError};

use crate::error::UseCaseError;
use crate::use_case::UseCase;

/// Full view of a single category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().clone(),
            name: category.name().map(String::from),
            description: category.description().map(String::from),
            active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

/// Looks up one category; a missing id fails on the not-found channel.
pub struct GetCategoryByIdUseCase<G> {
    gateway: G,
}

impl<G: CategoryGateway> GetCategoryByIdUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: CategoryGateway> UseCase for GetCategoryByIdUseCase<G> {
    type Input = String;
    type Output = Result<CategoryOutput, UseCaseError>;

    #[tracing::instrument(skip(self, input), fields(category_id = %input))]
    async fn execute(&self, input: Self::Input) -> Self::Output {
        let id = CategoryId::from(input.as_str());

        match self.gateway.find_by_id(&id).await? {
            Some(category) => Ok(CategoryOutput::from(&category)),
            None => Err(UseCaseError::NotFound(DomainError::not_found(
                Category::aggregate_type(),
                &id,
            ))),
        }
    }
}
