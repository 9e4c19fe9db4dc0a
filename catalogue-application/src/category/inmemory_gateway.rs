use async_trait::async_trait;
use catalogue_domain::category::{
    Category, CategoryGateway, CategoryId, CategorySearchQuery, SortDirection,
};
use catalogue_domain::entity::Entity;
use catalogue_domain::error::{DomainError, DomainResult};
use catalogue_domain::pagination::Pagination;
use dashmap::DashMap;
use std::cmp::Ordering;

/// 基于内存的分类网关
/// - 以 `DashMap` 保存分类快照，读写均为整体克隆
/// - `find_all` 在内存中完成过滤、排序与分页
#[derive(Default)]
pub struct InMemoryCategoryGateway {
    store: DashMap<CategoryId, Category>,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

type Comparator = fn(&Category, &Category) -> Ordering;

fn by_name(a: &Category, b: &Category) -> Ordering {
    a.name().cmp(&b.name())
}

fn by_description(a: &Category, b: &Category) -> Ordering {
    a.description().cmp(&b.description())
}

fn by_created_at(a: &Category, b: &Category) -> Ordering {
    a.created_at().cmp(&b.created_at())
}

fn by_updated_at(a: &Category, b: &Category) -> Ordering {
    a.updated_at().cmp(&b.updated_at())
}

fn comparator(sort: &str) -> DomainResult<Comparator> {
    match sort {
        "name" => Ok(by_name),
        "description" => Ok(by_description),
        "created_at" | "createdAt" => Ok(by_created_at),
        "updated_at" | "updatedAt" => Ok(by_updated_at),
        other => Err(DomainError::InvalidValue {
            reason: format!("unknown sort field: {other}"),
        }),
    }
}

fn matches_terms(category: &Category, terms: &str) -> bool {
    if terms.is_empty() {
        return true;
    }
    let contains = |s: Option<&str>| s.is_some_and(|s| s.to_lowercase().contains(terms));
    contains(category.name()) || contains(category.description())
}

#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn create(&self, category: Category) -> DomainResult<Category> {
        let id = category.id().clone();
        if self.store.contains_key(&id) {
            return Err(DomainError::Repository {
                reason: format!("category {id} already exists"),
            });
        }
        self.store.insert(id, category.clone());
        Ok(category)
    }

    async fn delete_by_id(&self, id: &CategoryId) -> DomainResult<()> {
        self.store.remove(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.store.get(id).map(|e| e.value().clone()))
    }

    async fn update(&self, category: Category) -> DomainResult<Category> {
        let Some(mut slot) = self.store.get_mut(category.id()) else {
            return Err(DomainError::NotFound {
                reason: format!("category {}", category.id()),
            });
        };
        *slot = category.clone();
        Ok(category)
    }

    async fn find_all(&self, query: CategorySearchQuery) -> DomainResult<Pagination<Category>> {
        let compare = comparator(query.sort.trim())?;
        let terms = query.terms.trim().to_lowercase();

        let mut matched: Vec<Category> = self
            .store
            .iter()
            .filter(|e| matches_terms(e.value(), &terms))
            .map(|e| e.value().clone())
            .collect();

        matched.sort_by(|a, b| {
            let ord = compare(a, b);
            match query.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });

        let total = matched.len() as u64;
        let skip = (query.page as usize).saturating_mul(query.per_page as usize);
        let items = matched
            .into_iter()
            .skip(skip)
            .take(query.per_page as usize)
            .collect();

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }
}
