//! Category CRUD endpoints.

use std::sync::Arc;

use application::{
    CategoryListOutput, CategoryOutput, CreateCategoryCommand, CreateCategoryUseCase,
    DeleteCategoryUseCase, GetCategoryByIdUseCase, ListCategoriesUseCase, UpdateCategoryCommand,
    UpdateCategoryUseCase, UseCase,
};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use category_store::{CategoryGateway, CategorySearchQuery, Direction, Pagination};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<G: CategoryGateway> {
    pub create_category: CreateCategoryUseCase<G>,
    pub get_category_by_id: GetCategoryByIdUseCase<G>,
    pub update_category: UpdateCategoryUseCase<G>,
    pub delete_category: DeleteCategoryUseCase<G>,
    pub list_categories: ListCategoriesUseCase<G>,
}

// -- Request types --

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct ListCategoriesParams {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_per_page", rename = "perPage")]
    pub per_page: usize,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default, rename = "dir")]
    pub direction: String,
}

fn default_per_page() -> usize {
    10
}

fn default_sort() -> String {
    "name".to_string()
}

// -- Response types --

#[derive(Serialize)]
pub struct CategoryIdResponse {
    pub id: String,
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<CategoryOutput> for CategoryResponse {
    fn from(output: CategoryOutput) -> Self {
        Self {
            id: output.id.to_string(),
            name: output.name,
            description: output.description,
            is_active: output.active,
            created_at: output.created_at.to_rfc3339(),
            updated_at: output.updated_at.to_rfc3339(),
            deleted_at: output.deleted_at.map(|ts| ts.to_rfc3339()),
        }
    }
}

#[derive(Serialize)]
pub struct CategoryListItemResponse {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub deleted_at: Option<String>,
}

impl From<CategoryListOutput> for CategoryListItemResponse {
    fn from(output: CategoryListOutput) -> Self {
        Self {
            id: output.id.to_string(),
            name: output.name,
            description: output.description,
            is_active: output.active,
            created_at: output.created_at.to_rfc3339(),
            deleted_at: output.deleted_at.map(|ts| ts.to_rfc3339()),
        }
    }
}

#[derive(Serialize)]
pub struct PageResponse<T> {
    pub current_page: usize,
    pub per_page: usize,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> PageResponse<T> {
    fn from_pagination<U: Into<T>>(page: Pagination<U>) -> Self {
        Self {
            current_page: page.current_page,
            per_page: page.per_page,
            total: page.total,
            items: page.items.into_iter().map(Into::into).collect(),
        }
    }
}

// -- Handlers --

/// POST /categories — create a new category.
#[tracing::instrument(skip(state, req))]
pub async fn create<G: CategoryGateway + 'static>(
    State(state): State<Arc<AppState<G>>>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryIdResponse>), ApiError> {
    let command =
        CreateCategoryCommand::with(req.name, req.description, req.is_active.unwrap_or(true));

    let output = state.create_category.execute(command).await?;
    metrics::counter!("categories_created_total").increment(1);

    Ok((
        StatusCode::CREATED,
        Json(CategoryIdResponse {
            id: output.id.to_string(),
        }),
    ))
}

/// GET /categories/{id} — fetch a single category.
#[tracing::instrument(skip(state))]
pub async fn get_by_id<G: CategoryGateway + 'static>(
    State(state): State<Arc<AppState<G>>>,
    Path(id): Path<String>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let output = state.get_category_by_id.execute(id).await?;
    Ok(Json(CategoryResponse::from(output)))
}

/// GET /categories — paged category listing with search.
#[tracing::instrument(skip(state, params))]
pub async fn list<G: CategoryGateway + 'static>(
    State(state): State<Arc<AppState<G>>>,
    Query(params): Query<ListCategoriesParams>,
) -> Result<Json<PageResponse<CategoryListItemResponse>>, ApiError> {
    let query = CategorySearchQuery::new(
        params.page,
        params.per_page,
        params.search,
        params.sort,
        Direction::from_term(&params.direction),
    );

    let page = state.list_categories.execute(query).await?;
    Ok(Json(PageResponse::from_pagination(page)))
}

/// PUT /categories/{id} — update a category.
#[tracing::instrument(skip(state, req))]
pub async fn update_by_id<G: CategoryGateway + 'static>(
    State(state): State<Arc<AppState<G>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryIdResponse>, ApiError> {
    let command = UpdateCategoryCommand::with(
        id,
        req.name,
        req.description,
        req.is_active.unwrap_or(true),
    );

    let output = state.update_category.execute(command).await?;
    metrics::counter!("categories_updated_total").increment(1);

    Ok(Json(CategoryIdResponse {
        id: output.id.to_string(),
    }))
}

/// DELETE /categories/{id} — delete a category; always succeeds.
#[tracing::instrument(skip(state))]
pub async fn delete_by_id<G: CategoryGateway + 'static>(
    State(state): State<Arc<AppState<G>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.delete_category.execute(id).await?;
    metrics::counter!("categories_deleted_total").increment(1);

    Ok(StatusCode::NO_CONTENT)
}
