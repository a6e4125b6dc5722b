use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::CategoryId;
use domain::Category;
use tokio::sync::RwLock;

use crate::{
    CategorySearchQuery, Pagination, Result,
    gateway::CategoryGateway,
    query::Direction,
};

/// In-memory category gateway used by tests and local runs.
///
/// Stores all categories in memory and provides the same interface as the
/// PostgreSQL implementation.
#[derive(Clone, Default)]
pub struct InMemoryCategoryGateway {
    categories: Arc<RwLock<HashMap<CategoryId, Category>>>,
}

impl InMemoryCategoryGateway {
    /// Creates a new empty in-memory gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of categories stored.
    pub async fn count(&self) -> usize {
        self.categories.read().await.len()
    }

    /// Clears all stored categories.
    pub async fn clear(&self) {
        self.categories.write().await.clear();
    }
}

fn matches_terms(category: &Category, terms: &str) -> bool {
    if terms.is_empty() {
        return true;
    }
    let in_name = category
        .name()
        .is_some_and(|name| name.to_lowercase().contains(terms));
    let in_description = category
        .description()
        .is_some_and(|description| description.to_lowercase().contains(terms));
    in_name || in_description
}

fn compare_by_field(a: &Category, b: &Category, sort: &str) -> Ordering {
    match sort {
        "description" => a.description().cmp(&b.description()),
        "createdAt" | "created_at" => a.created_at().cmp(&b.created_at()),
        "updatedAt" | "updated_at" => a.updated_at().cmp(&b.updated_at()),
        _ => a.name().cmp(&b.name()),
    }
}

#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn create(&self, category: Category) -> Result<Category> {
        let mut store = self.categories.write().await;
        store.insert(category.id().clone(), category.clone());
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category> {
        let mut store = self.categories.write().await;
        store.insert(category.id().clone(), category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>> {
        let store = self.categories.read().await;
        Ok(store.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<()> {
        let mut store = self.categories.write().await;
        store.remove(id);
        Ok(())
    }

    async fn find_all(&self, query: CategorySearchQuery) -> Result<Pagination<Category>> {
        let store = self.categories.read().await;
        let terms = query.terms.to_lowercase();

        let mut matches: Vec<Category> = store
            .values()
            .filter(|category| matches_terms(category, &terms))
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            let ordering = compare_by_field(a, b, &query.sort);
            match query.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        });

        let total = matches.len() as u64;
        let items: Vec<Category> = matches
            .into_iter()
            .skip(query.page * query.per_page)
            .take(query.per_page)
            .collect();

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }
}
