//! Use-case orchestration for the catalog admin system.
//!
//! Each use case is a stateless handler constructed with the gateway it
//! needs; validation failures, not-found outcomes and infrastructure errors
//! travel on separate [`UseCaseError`] channels.

pub mod category;
pub mod error;
pub mod use_case;

pub use category::{
    CategoryListOutput, CategoryOutput, CreateCategoryCommand, CreateCategoryOutput,
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryByIdUseCase, ListCategoriesUseCase,
    UpdateCategoryCommand, UpdateCategoryOutput, UpdateCategoryUseCase,
};
pub use error::UseCaseError;
pub use use_case::UseCase;
