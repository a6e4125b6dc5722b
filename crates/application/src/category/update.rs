//! Update an existing category.

use async_trait::async_trait;
use category_store::CategoryGateway;
use common::CategoryId;
use domain::{Category, DomainError, Notification};

use crate::error::UseCaseError;
use crate::use_case::UseCase;

/// Input for [`UpdateCategoryUseCase`].
#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: bool,
}

impl UpdateCategoryCommand {
    pub fn with(
        id: impl Into<String>,
        name: Option<String>,
        description: Option<String>,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            description,
            active,
        }
    }
}

/// Identifier of the updated category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

impl From<&Category> for UpdateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().clone(),
        }
    }
}

/// Loads the category, applies the rewrite, validates fail-slow and persists
/// only a clean result.
///
/// A missing id fails immediately on the not-found channel; it is never a
/// validation outcome.
pub struct UpdateCategoryUseCase<G> {
    gateway: G,
}

impl<G: CategoryGateway> UpdateCategoryUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: CategoryGateway> UseCase for UpdateCategoryUseCase<G> {
    type Input = UpdateCategoryCommand;
    type Output = Result<UpdateCategoryOutput, UseCaseError>;

    #[tracing::instrument(skip(self, input), fields(category_id = %input.id))]
    async fn execute(&self, input: Self::Input) -> Self::Output {
        let id = CategoryId::from(input.id.as_str());

        let mut category = self.gateway.find_by_id(&id).await?.ok_or_else(|| {
            UseCaseError::NotFound(DomainError::not_found(Category::aggregate_type(), &id))
        })?;

        category.update(input.name, input.description, input.active);

        let mut notification = Notification::new();
        category.validate(&mut notification);
        if notification.has_errors() {
            return Err(UseCaseError::Validation(notification));
        }

        let updated = self.gateway.update(category).await?;
        Ok(UpdateCategoryOutput::from(&updated))
    }
}
