//! Create a new category.

use async_trait::async_trait;
use category_store::CategoryGateway;
use common::CategoryId;
use domain::{Category, Notification};

use crate::error::UseCaseError;
use crate::use_case::UseCase;

/// Input for [`CreateCategoryUseCase`].
#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: bool,
}

impl CreateCategoryCommand {
    pub fn with(name: Option<String>, description: Option<String>, active: bool) -> Self {
        Self {
            name,
            description,
            active,
        }
    }
}

/// Identifier of the newly persisted category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().clone(),
        }
    }
}

/// Builds a candidate category, validates it fail-slow, and persists it only
/// when the notification stays empty.
pub struct CreateCategoryUseCase<G> {
    gateway: G,
}

impl<G: CategoryGateway> CreateCategoryUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: CategoryGateway> UseCase for CreateCategoryUseCase<G> {
    type Input = CreateCategoryCommand;
    type Output = Result<CreateCategoryOutput, UseCaseError>;

    #[tracing::instrument(skip(self, input))]
    async fn execute(&self, input: Self::Input) -> Self::Output {
        let category = Category::new(input.name, input.description, input.active);

        let mut notification = Notification::new();
        category.validate(&mut notification);
        if notification.has_errors() {
            return Err(UseCaseError::Validation(notification));
        }

        let created = self.gateway.create(category).await?;
        Ok(CreateCategoryOutput::from(&created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use category_store::{
        CategorySearchQuery, CategoryStoreError, InMemoryCategoryGateway, Pagination,
    };

    /// Gateway double whose every operation fails like a lost connection.
    struct FailingGateway;

    #[async_trait]
    impl CategoryGateway for FailingGateway {
        async fn create(&self, _category: Category) -> category_store::Result<Category> {
            Err(CategoryStoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn update(&self, _category: Category) -> category_store::Result<Category> {
            Err(CategoryStoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn find_by_id(
            &self,
            _id: &CategoryId,
        ) -> category_store::Result<Option<Category>> {
            Err(CategoryStoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn delete_by_id(&self, _id: &CategoryId) -> category_store::Result<()> {
            Err(CategoryStoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn find_all(
            &self,
            _query: CategorySearchQuery,
        ) -> category_store::Result<Pagination<Category>> {
            Err(CategoryStoreError::Database(sqlx::Error::PoolClosed))
        }
    }

    fn valid_command() -> CreateCategoryCommand {
        CreateCategoryCommand::with(
            Some("Filmes".to_string()),
            Some("A categoria mais assistida".to_string()),
            true,
        )
    }

    #[tokio::test]
    async fn valid_command_persists_and_returns_fresh_id() {
        let gateway = InMemoryCategoryGateway::new();
        let use_case = CreateCategoryUseCase::new(gateway.clone());

        let output = use_case.execute(valid_command()).await.unwrap();

        let stored = gateway.find_by_id(&output.id).await.unwrap().unwrap();
        assert_eq!(stored.id(), &output.id);
        assert_eq!(stored.name(), Some("Filmes"));
        assert_eq!(stored.description(), Some("A categoria mais assistida"));
        assert!(stored.is_active());
        assert!(stored.deleted_at().is_none());
    }

    #[tokio::test]
    async fn inactive_command_persists_with_deleted_at() {
        let gateway = InMemoryCategoryGateway::new();
        let use_case = CreateCategoryUseCase::new(gateway.clone());

        let command =
            CreateCategoryCommand::with(Some("Filmes".to_string()), None, false);
        let output = use_case.execute(command).await.unwrap();

        let stored = gateway.find_by_id(&output.id).await.unwrap().unwrap();
        assert!(!stored.is_active());
        assert!(stored.deleted_at().is_some());
    }

    #[tokio::test]
    async fn null_name_returns_validation_without_persisting() {
        let gateway = InMemoryCategoryGateway::new();
        let use_case = CreateCategoryUseCase::new(gateway.clone());

        let command = CreateCategoryCommand::with(None, None, true);
        let error = use_case.execute(command).await.unwrap_err();

        match error {
            UseCaseError::Validation(notification) => {
                assert_eq!(notification.errors().len(), 1);
                assert_eq!(
                    notification.errors()[0].message,
                    "'name' should not be null"
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(gateway.count().await, 0);
    }

    #[tokio::test]
    async fn blank_name_returns_single_error() {
        let gateway = InMemoryCategoryGateway::new();
        let use_case = CreateCategoryUseCase::new(gateway.clone());

        let command = CreateCategoryCommand::with(Some("  ".to_string()), None, true);
        let error = use_case.execute(command).await.unwrap_err();

        match error {
            UseCaseError::Validation(notification) => {
                assert_eq!(notification.errors().len(), 1);
                assert_eq!(
                    notification.errors()[0].message,
                    "'name' should not be empty"
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn out_of_range_name_returns_single_length_error() {
        let gateway = InMemoryCategoryGateway::new();
        let use_case = CreateCategoryUseCase::new(gateway.clone());

        for name in ["ab".to_string(), "a".repeat(256)] {
            let command = CreateCategoryCommand::with(Some(name), None, true);
            let error = use_case.execute(command).await.unwrap_err();

            match error {
                UseCaseError::Validation(notification) => {
                    assert_eq!(notification.errors().len(), 1);
                    assert_eq!(
                        notification.errors()[0].message,
                        "'name' must between 3 and 255"
                    );
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
        assert_eq!(gateway.count().await, 0);
    }

    #[tokio::test]
    async fn gateway_failure_propagates_unwrapped() {
        let use_case = CreateCategoryUseCase::new(FailingGateway);

        let error = use_case.execute(valid_command()).await.unwrap_err();

        assert!(matches!(error, UseCaseError::Store(_)));
    }
}
