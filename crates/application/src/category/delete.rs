//! Delete a category by id.

use async_trait::async_trait;
use category_store::CategoryGateway;
use common::CategoryId;

use crate::error::UseCaseError;
use crate::use_case::UseCase;

/// Deletes unconditionally; removing an id that does not exist is treated as
/// already satisfied.
pub struct DeleteCategoryUseCase<G> {
    gateway: G,
}

impl<G: CategoryGateway> DeleteCategoryUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: CategoryGateway> UseCase for DeleteCategoryUseCase<G> {
    type Input = String;
    type Output = Result<(), UseCaseError>;

    #[tracing::instrument(skip(self, input), fields(category_id = %input))]
    async fn execute(&self, input: Self::Input) -> Self::Output {
        self.gateway
            .delete_by_id(&CategoryId::from(input.as_str()))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use category_store::InMemoryCategoryGateway;
    use domain::Category;

    #[tokio::test]
    async fn deletes_existing_category() {
        let gateway = InMemoryCategoryGateway::new();
        let existing = gateway
            .create(Category::new(Some("Filmes".to_string()), None, true))
            .await
            .unwrap();
        let use_case = DeleteCategoryUseCase::new(gateway.clone());

        use_case
            .execute(existing.id().as_str().to_string())
            .await
            .unwrap();

        assert_eq!(gateway.count().await, 0);
    }

    #[tokio::test]
    async fn deleting_nonexistent_id_completes_without_error() {
        let gateway = InMemoryCategoryGateway::new();
        let use_case = DeleteCategoryUseCase::new(gateway);

        use_case.execute("123".to_string()).await.unwrap();
    }
}
