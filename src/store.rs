use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── Domain type ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

/// A validated write payload — every `Product` field except the
/// server-assigned `id`.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// One slice of list results. `total` counts the post-filter, pre-slice
/// result; `page`/`limit` echo the resolved pagination parameters.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub items: Vec<Product>,
}

// ─── Record store ────────────────────────────────────────────────

/// The in-memory product collection. Process-lifetime state, reset on
/// restart; ordered by insertion. Invariant: `id` is unique across the
/// collection and immutable once assigned.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// All records, optionally filtered by case-insensitive exact category
    /// match, then sliced by 1-based page/limit. Defaults: limit = full
    /// filtered size, page = 1.
    pub fn list(
        &self,
        category: Option<&str>,
        page: Option<usize>,
        limit: Option<usize>,
    ) -> ProductPage {
        let filtered: Vec<Product> = self
            .products
            .iter()
            .filter(|p| {
                category.map_or(true, |c| p.category.to_lowercase() == c.to_lowercase())
            })
            .cloned()
            .collect();

        let total = filtered.len();
        let limit = limit.unwrap_or(total);
        let page = page.unwrap_or(1).max(1);

        let start = (page - 1).saturating_mul(limit).min(total);
        let end = start.saturating_add(limit).min(total);

        ProductPage {
            total,
            page,
            limit,
            items: filtered[start..end].to_vec(),
        }
    }

    /// Linear search by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Assigns a fresh unique id, appends, and returns the created record.
    pub fn create(&mut self, draft: ProductDraft) -> Product {
        let product = Product {
            id: self.fresh_id(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            in_stock: draft.in_stock,
        };
        self.products.push(product.clone());
        product
    }

    /// Full overwrite of every field except `id`. `None` if the id is
    /// unknown.
    pub fn replace(&mut self, id: &str, draft: ProductDraft) -> Option<Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        product.name = draft.name;
        product.description = draft.description;
        product.price = draft.price;
        product.category = draft.category;
        product.in_stock = draft.in_stock;
        Some(product.clone())
    }

    /// Removes and returns the record. `None` if the id is unknown.
    pub fn delete(&mut self, id: &str) -> Option<Product> {
        let idx = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(idx))
    }

    /// Case-insensitive substring match on `name`. The empty query matches
    /// everything.
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Record count per category.
    pub fn stats(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for p in &self.products {
            *counts.entry(p.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    // ─── Helpers ─────────────────────────────────────────────────

    /// Short uuid-derived id, regenerated on the (vanishingly rare)
    /// collision so the uniqueness invariant holds unconditionally.
    fn fresh_id(&self) -> String {
        loop {
            let id = format!("prd_{}", &uuid::Uuid::new_v4().to_string()[..8]);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str, price: f64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: format!("{name} description"),
            price,
            category: category.to_string(),
            in_stock: true,
        }
    }

    fn seeded() -> ProductStore {
        let mut store = ProductStore::new();
        store.create(draft("Laptop", "Electronics", 999.99));
        store.create(draft("Phone", "Electronics", 599.0));
        store.create(draft("Desk", "Furniture", 249.5));
        store
    }

    #[test]
    fn create_assigns_unique_ids() {
        let mut store = ProductStore::new();
        let a = store.create(draft("A", "x", 1.0));
        let b = store.create(draft("B", "x", 2.0));
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("prd_"));
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn get_finds_created_record() {
        let mut store = ProductStore::new();
        let created = store.create(draft("Laptop", "Electronics", 999.99));
        let found = store.get(&created.id).unwrap();
        assert_eq!(found.name, "Laptop");
        assert_eq!(found.price, 999.99);
    }

    #[test]
    fn category_filter_is_case_insensitive_exact() {
        let store = seeded();
        let page = store.list(Some("ELECTRONICS"), None, None);
        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|p| p.category == "Electronics"));

        // Substring is not enough — the match is exact.
        let page = store.list(Some("Electro"), None, None);
        assert_eq!(page.total, 0);
    }

    #[test]
    fn pagination_slices_one_based() {
        let store = seeded();
        let page = store.list(None, Some(2), Some(1));
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Phone");
    }

    #[test]
    fn pagination_past_the_end_is_empty() {
        let store = seeded();
        let page = store.list(None, Some(5), Some(2));
        assert_eq!(page.total, 3);
        assert!(page.items.is_empty());
    }

    #[test]
    fn default_limit_is_full_result() {
        let store = seeded();
        let page = store.list(None, None, None);
        assert_eq!(page.limit, 3);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn replace_overwrites_all_but_id() {
        let mut store = seeded();
        let id = store.list(None, None, None).items[0].id.clone();
        let replaced = store
            .replace(&id, draft("Gaming Laptop", "Electronics", 1499.0))
            .unwrap();
        assert_eq!(replaced.id, id);
        assert_eq!(replaced.name, "Gaming Laptop");
        assert_eq!(store.get(&id).unwrap().price, 1499.0);
    }

    #[test]
    fn replace_unknown_id_is_none() {
        let mut store = seeded();
        assert!(store.replace("prd_missing", draft("X", "x", 0.0)).is_none());
    }

    #[test]
    fn delete_returns_removed_record() {
        let mut store = seeded();
        let id = store.list(None, None, None).items[2].id.clone();
        let removed = store.delete(&id).unwrap();
        assert_eq!(removed.name, "Desk");
        assert!(store.get(&id).is_none());
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let store = seeded();
        let hits = store.search("lap");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Laptop");

        // Empty query matches everything.
        assert_eq!(store.search("").len(), 3);
    }

    #[test]
    fn stats_counts_sum_to_total() {
        let store = seeded();
        let stats = store.stats();
        assert_eq!(stats["Electronics"], 2);
        assert_eq!(stats["Furniture"], 1);
        assert_eq!(stats.values().sum::<usize>(), store.count());
    }
}
