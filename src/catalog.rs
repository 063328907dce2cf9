//! # Catalog Module
//!
//! Static store data: product categories and the FAQ table. A catalog is
//! built once at startup, validated, and shared read-only for the lifetime of
//! the process. Lookups never fail; an unknown identifier is simply `None`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Identifier prefix shared by every product
pub const PRODUCT_PREFIX: &str = "prod_";
/// Identifier prefix of a category button (`cat_<key>`)
pub const CATEGORY_PREFIX: &str = "cat_";
/// Identifier prefix of an order button (`order_<product id>`)
pub const ORDER_PREFIX: &str = "order_";

/// Fixed menu identifiers the router matches exactly
pub const MENU_PRODUCTS: &str = "menu_products";
pub const MENU_FAQ: &str = "menu_faq";
pub const MENU_AGENT: &str = "menu_agent";

/// Category choice is rendered as a reply-button prompt, which caps it at three
pub const MAX_CATEGORIES: usize = 3;
/// Rows a single list prompt may carry across all of its sections
pub const MAX_LIST_ROWS: usize = 10;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id `{0}`")]
    DuplicateProduct(String),
    #[error("product id `{0}` must start with `prod_`")]
    InvalidProductId(String),
    #[error("duplicate category key `{0}`")]
    DuplicateCategory(String),
    #[error("catalog defines {0} categories, at most 3 are supported")]
    TooManyCategories(usize),
    #[error("category `{0}` has {1} products, at most 10 fit in one list")]
    TooManyProducts(String, usize),
    #[error("FAQ defines {0} entries, at most 10 fit in one list")]
    TooManyFaqEntries(usize),
    #[error("duplicate FAQ id `{0}`")]
    DuplicateFaq(String),
    #[error("FAQ id `{0}` collides with a product or menu identifier")]
    ReservedFaqId(String),
}

/// A product offered by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Display price, already formatted with its currency
    pub price: String,
    pub description: String,
}

/// A named group of products, used only for menu presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    /// Title of the category button
    pub title: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Category {
    /// Identifier of the button that opens this category
    pub fn button_id(&self) -> String {
        format!("{CATEGORY_PREFIX}{}", self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    /// Row title shown in the FAQ list
    pub title: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqSection {
    pub title: String,
    #[serde(default)]
    pub entries: Vec<FaqEntry>,
}

/// Serialized form of a catalog, as found in `data/catalog.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub faq_sections: Vec<FaqSection>,
}

/// Validated, immutable store data
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    faq_sections: Vec<FaqSection>,
}

impl Catalog {
    /// Validate `data` and build a catalog from it
    pub fn new(data: CatalogData) -> Result<Self, CatalogError> {
        if data.categories.len() > MAX_CATEGORIES {
            return Err(CatalogError::TooManyCategories(data.categories.len()));
        }

        let mut category_keys = HashSet::new();
        let mut product_ids = HashSet::new();
        for category in &data.categories {
            if !category_keys.insert(category.key.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.key.clone()));
            }
            if category.products.len() > MAX_LIST_ROWS {
                return Err(CatalogError::TooManyProducts(
                    category.key.clone(),
                    category.products.len(),
                ));
            }
            for product in &category.products {
                if !product.id.starts_with(PRODUCT_PREFIX) {
                    return Err(CatalogError::InvalidProductId(product.id.clone()));
                }
                if !product_ids.insert(product.id.as_str()) {
                    return Err(CatalogError::DuplicateProduct(product.id.clone()));
                }
            }
        }

        let faq_rows: usize = data.faq_sections.iter().map(|s| s.entries.len()).sum();
        if faq_rows > MAX_LIST_ROWS {
            return Err(CatalogError::TooManyFaqEntries(faq_rows));
        }

        let mut faq_ids = HashSet::new();
        for entry in data.faq_sections.iter().flat_map(|s| &s.entries) {
            if is_reserved_identifier(&entry.id) || product_ids.contains(entry.id.as_str()) {
                return Err(CatalogError::ReservedFaqId(entry.id.clone()));
            }
            if !faq_ids.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateFaq(entry.id.clone()));
            }
        }

        Ok(Self {
            categories: data.categories,
            faq_sections: data.faq_sections,
        })
    }

    /// The store data compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Find a product by id across all categories
    pub fn lookup_product(&self, id: &str) -> Option<&Product> {
        self.categories
            .iter()
            .flat_map(|c| &c.products)
            .find(|p| p.id == id)
    }

    /// Categories in presentation order
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Products of a category in catalog order; empty for an unknown category
    pub fn list_products(&self, key: &str) -> &[Product] {
        self.category(key)
            .map(|c| c.products.as_slice())
            .unwrap_or(&[])
    }

    pub fn faq_sections(&self) -> &[FaqSection] {
        &self.faq_sections
    }

    pub fn lookup_faq_answer(&self, id: &str) -> Option<&str> {
        self.faq_sections
            .iter()
            .flat_map(|s| &s.entries)
            .find(|e| e.id == id)
            .map(|e| e.answer.as_str())
    }
}

/// Identifiers already claimed by a fixed route or a routing prefix
fn is_reserved_identifier(id: &str) -> bool {
    [MENU_PRODUCTS, MENU_FAQ, MENU_AGENT].contains(&id)
        || [PRODUCT_PREFIX, CATEGORY_PREFIX, ORDER_PREFIX]
            .iter()
            .any(|prefix| id.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "name".to_string(),
            price: "1".to_string(),
            description: "desc".to_string(),
        }
    }

    fn category(key: &str, products: Vec<Product>) -> Category {
        Category {
            key: key.to_string(),
            title: key.to_string(),
            products,
        }
    }

    fn faq(id: &str) -> FaqSection {
        FaqSection {
            title: "section".to_string(),
            entries: vec![FaqEntry {
                id: id.to_string(),
                title: "title".to_string(),
                answer: "answer".to_string(),
            }],
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.list_categories().len(), 2);
        assert_eq!(catalog.faq_sections().len(), 2);
    }

    #[test]
    fn test_rejects_duplicate_product_across_categories() {
        let data = CatalogData {
            categories: vec![
                category("a", vec![product("prod_1")]),
                category("b", vec![product("prod_1")]),
            ],
            faq_sections: vec![],
        };
        assert!(matches!(
            Catalog::new(data),
            Err(CatalogError::DuplicateProduct(id)) if id == "prod_1"
        ));
    }

    #[test]
    fn test_rejects_product_without_prefix() {
        let data = CatalogData {
            categories: vec![category("a", vec![product("widget")])],
            faq_sections: vec![],
        };
        assert!(matches!(Catalog::new(data), Err(CatalogError::InvalidProductId(_))));
    }

    #[test]
    fn test_rejects_faq_colliding_with_routes() {
        for id in ["prod_1", "menu_faq", "order_x", "cat_new"] {
            let data = CatalogData {
                categories: vec![category("a", vec![product("prod_1")])],
                faq_sections: vec![faq(id)],
            };
            assert!(
                matches!(Catalog::new(data), Err(CatalogError::ReservedFaqId(_))),
                "{id} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_too_many_categories() {
        let data = CatalogData {
            categories: vec![
                category("a", vec![]),
                category("b", vec![]),
                category("c", vec![]),
                category("d", vec![]),
            ],
            faq_sections: vec![],
        };
        assert!(matches!(Catalog::new(data), Err(CatalogError::TooManyCategories(4))));
    }

    #[test]
    fn test_rejects_duplicate_category_and_faq() {
        let data = CatalogData {
            categories: vec![category("a", vec![]), category("a", vec![])],
            faq_sections: vec![],
        };
        assert!(matches!(Catalog::new(data), Err(CatalogError::DuplicateCategory(_))));

        let data = CatalogData {
            categories: vec![],
            faq_sections: vec![faq("faq_x"), faq("faq_x")],
        };
        assert!(matches!(Catalog::new(data), Err(CatalogError::DuplicateFaq(_))));
    }

    #[test]
    fn test_rejects_lists_longer_than_ten_rows() {
        let products = (0..11).map(|i| product(&format!("prod_{i}"))).collect();
        let data = CatalogData {
            categories: vec![category("big", products)],
            faq_sections: vec![],
        };
        assert!(matches!(
            Catalog::new(data),
            Err(CatalogError::TooManyProducts(key, 11)) if key == "big"
        ));

        let products = (0..10).map(|i| product(&format!("prod_{i}"))).collect();
        let data = CatalogData {
            categories: vec![category("full", products)],
            faq_sections: vec![],
        };
        assert!(Catalog::new(data).is_ok());

        let data = CatalogData {
            categories: vec![],
            faq_sections: (0..11).map(|i| faq(&format!("faq_{i}"))).collect(),
        };
        assert!(matches!(Catalog::new(data), Err(CatalogError::TooManyFaqEntries(11))));
    }
}
