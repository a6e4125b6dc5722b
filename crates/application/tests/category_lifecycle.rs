//! Full category lifecycle against the in-memory gateway.

use application::{
    CreateCategoryCommand, CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryByIdUseCase,
    ListCategoriesUseCase, UpdateCategoryCommand, UpdateCategoryUseCase, UseCase, UseCaseError,
};
use category_store::{CategoryGateway, CategorySearchQuery, Direction, InMemoryCategoryGateway};

struct UseCases {
    create: CreateCategoryUseCase<InMemoryCategoryGateway>,
    get: GetCategoryByIdUseCase<InMemoryCategoryGateway>,
    update: UpdateCategoryUseCase<InMemoryCategoryGateway>,
    list: ListCategoriesUseCase<InMemoryCategoryGateway>,
    delete: DeleteCategoryUseCase<InMemoryCategoryGateway>,
}

fn setup() -> (UseCases, InMemoryCategoryGateway) {
    let gateway = InMemoryCategoryGateway::new();
    let use_cases = UseCases {
        create: CreateCategoryUseCase::new(gateway.clone()),
        get: GetCategoryByIdUseCase::new(gateway.clone()),
        update: UpdateCategoryUseCase::new(gateway.clone()),
        list: ListCategoriesUseCase::new(gateway.clone()),
        delete: DeleteCategoryUseCase::new(gateway.clone()),
    };
    (use_cases, gateway)
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let (use_cases, _) = setup();

    let created = use_cases
        .create
        .execute(CreateCategoryCommand::with(
            Some("Filmes".to_string()),
            Some("A categoria mais assistida".to_string()),
            true,
        ))
        .await
        .unwrap();

    let fetched = use_cases
        .get
        .execute(created.id.as_str().to_string())
        .await
        .unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name.as_deref(), Some("Filmes"));
    assert!(fetched.active);
    assert!(fetched.deleted_at.is_none());
}

#[tokio::test]
async fn update_with_null_name_leaves_stored_state_untouched() {
    let (use_cases, gateway) = setup();

    let created = use_cases
        .create
        .execute(CreateCategoryCommand::with(
            Some("Filmes".to_string()),
            None,
            true,
        ))
        .await
        .unwrap();
    let before = gateway.find_by_id(&created.id).await.unwrap().unwrap();

    let error = use_cases
        .update
        .execute(UpdateCategoryCommand::with(
            created.id.as_str(),
            None,
            Some("x".to_string()),
            true,
        ))
        .await
        .unwrap_err();

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

    let after = gateway.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn soft_delete_and_reactivation_flow() {
    let (use_cases, _) = setup();

    let created = use_cases
        .create
        .execute(CreateCategoryCommand::with(
            Some("Filmes".to_string()),
            None,
            true,
        ))
        .await
        .unwrap();

    use_cases
        .update
        .execute(UpdateCategoryCommand::with(
            created.id.as_str(),
            Some("Filmes".to_string()),
            None,
            false,
        ))
        .await
        .unwrap();

    let deactivated = use_cases
        .get
        .execute(created.id.as_str().to_string())
        .await
        .unwrap();
    assert!(!deactivated.active);
    assert!(deactivated.deleted_at.is_some());

    use_cases
        .update
        .execute(UpdateCategoryCommand::with(
            created.id.as_str(),
            Some("Filmes".to_string()),
            None,
            true,
        ))
        .await
        .unwrap();

    let reactivated = use_cases
        .get
        .execute(created.id.as_str().to_string())
        .await
        .unwrap();
    assert!(reactivated.active);
    assert!(reactivated.deleted_at.is_none());
}

#[tokio::test]
async fn list_reflects_creates_and_deletes() {
    let (use_cases, _) = setup();

    for name in ["Filmes", "Séries", "Documentários"] {
        use_cases
            .create
            .execute(CreateCategoryCommand::with(
                Some(name.to_string()),
                None,
                true,
            ))
            .await
            .unwrap();
    }

    let page = use_cases
        .list
        .execute(CategorySearchQuery::new(0, 10, "", "name", Direction::Asc))
        .await
        .unwrap();
    assert_eq!(page.total, 3);

    let first_id = page.items[0].id.as_str().to_string();
    use_cases.delete.execute(first_id).await.unwrap();

    let page = use_cases
        .list
        .execute(CategorySearchQuery::new(0, 10, "", "name", Direction::Asc))
        .await
        .unwrap();
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn delete_then_get_reports_not_found() {
    let (use_cases, _) = setup();

    let created = use_cases
        .create
        .execute(CreateCategoryCommand::with(
            Some("Filmes".to_string()),
            None,
            true,
        ))
        .await
        .unwrap();

    use_cases
        .delete
        .execute(created.id.as_str().to_string())
        .await
        .unwrap();

    // idempotent second delete
    use_cases
        .delete
        .execute(created.id.as_str().to_string())
        .await
        .unwrap();

    let error = use_cases
        .get
        .execute(created.id.as_str().to_string())
        .await
        .unwrap_err();
    assert!(matches!(error, UseCaseError::NotFound(_)));
}
