//! Category use cases.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::{CreateCategoryCommand, CreateCategoryOutput, CreateCategoryUseCase};
pub use delete::DeleteCategoryUseCase;
pub use get::{CategoryOutput, GetCategoryByIdUseCase};
pub use list::{CategoryListOutput, ListCategoriesUseCase};
pub use update::{UpdateCategoryCommand, UpdateCategoryOutput, UpdateCategoryUseCase};
