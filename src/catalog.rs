//! Catalog
//!
//! The read-only menu: sellable items with typed prices, loaded once at startup.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to catalog construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two items derive the same identifier (item names must be unique).
    #[error("duplicate catalog item: {0}")]
    DuplicateItem(String),
}

/// Identifier of a sellable item, derived deterministically from its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Derive the identifier for an item name: a lowercase slug with
    /// non-alphanumeric runs collapsed to single dashes.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let mut slug = String::with_capacity(name.len());

        for ch in name.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
            } else if !slug.ends_with('-') && !slug.is_empty() {
                slug.push('-');
            }
        }

        while slug.ends_with('-') {
            slug.pop();
        }

        Self(slug)
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// A sellable menu item.
///
/// The price is a typed whole-currency-unit number; any display label
/// (`"₹110"`) is derived from it, never the reverse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Display name, unique within the catalog.
    pub name: String,
    /// Unit price in whole currency units.
    pub price: u64,
    /// Whether the dish is vegetarian.
    pub vegetarian: bool,
    /// Menu category the item belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CatalogItem {
    /// The identifier derived from this item's name.
    #[must_use]
    pub fn id(&self) -> ItemId {
        ItemId::from_name(&self.name)
    }

    /// Price label for display, derived from the typed price.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("₹{}", self.price)
    }
}

/// The in-memory menu catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: FxHashMap<ItemId, usize>,
}

impl Catalog {
    /// Create a catalog from the given items.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateItem`] if two items derive the same
    /// identifier.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();

        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id(), position).is_some() {
                return Err(CatalogError::DuplicateItem(item.name.clone()));
            }
        }

        Ok(Self { items, index })
    }

    /// Look up an item by its identifier.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.index.get(id).and_then(|&position| self.items.get(position))
    }

    /// Iterate over the items in menu order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    /// Iterate over the items of one category.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CatalogItem> {
        self.items
            .iter()
            .filter(move |item| item.category.as_deref() == Some(category))
    }

    /// Iterate over the vegetarian items.
    pub fn vegetarian(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(|item| item.vegetarian)
    }

    /// Number of items in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Leniently parse a legacy price label (`"₹110"`, `"110"`) into whole
/// currency units.
///
/// Unparseable labels yield zero rather than aborting menu ingestion; the
/// affected item is logged for developer attention.
#[must_use]
pub fn price_from_label(label: &str) -> u64 {
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();

    match digits.parse() {
        Ok(price) => price,
        Err(_) => {
            tracing::warn!(label, "unparseable price label; defaulting to 0");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn test_items() -> Vec<CatalogItem> {
        vec![
            CatalogItem {
                name: "Sweet Corn Soup".to_string(),
                price: 110,
                vegetarian: true,
                category: Some("Soups".to_string()),
            },
            CatalogItem {
                name: "Chicken Biryani".to_string(),
                price: 250,
                vegetarian: false,
                category: Some("Biryani".to_string()),
            },
            CatalogItem {
                name: "Paneer 65".to_string(),
                price: 230,
                vegetarian: true,
                category: Some("Starters".to_string()),
            },
        ]
    }

    #[test]
    fn item_id_is_a_lowercase_slug() {
        assert_eq!(ItemId::from_name("Paneer 65").as_str(), "paneer-65");
        assert_eq!(
            ItemId::from_name("Hot & Sour Soup (Veg)").as_str(),
            "hot-sour-soup-veg"
        );
        assert_eq!(ItemId::from_name("  Kalakki  ").as_str(), "kalakki");
    }

    #[test]
    fn same_name_derives_same_id() {
        assert_eq!(ItemId::from_name("Chicken Biryani"), ItemId::from_name("Chicken Biryani"));
    }

    #[test]
    fn get_returns_item_by_derived_id() -> TestResult {
        let catalog = Catalog::new(test_items())?;

        let item = catalog.get(&ItemId::from_name("Chicken Biryani"));

        assert_eq!(item.map(|item| item.price), Some(250));

        Ok(())
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut items = test_items();
        items.push(CatalogItem {
            name: "Paneer 65".to_string(),
            price: 240,
            vegetarian: true,
            category: None,
        });

        let result = Catalog::new(items);

        assert!(matches!(result, Err(CatalogError::DuplicateItem(name)) if name == "Paneer 65"));
    }

    #[test]
    fn category_filter_returns_only_that_category() -> TestResult {
        let catalog = Catalog::new(test_items())?;

        let soups: Vec<&str> = catalog.in_category("Soups").map(|item| item.name.as_str()).collect();

        assert_eq!(soups, vec!["Sweet Corn Soup"]);

        Ok(())
    }

    #[test]
    fn vegetarian_filter_excludes_non_veg() -> TestResult {
        let catalog = Catalog::new(test_items())?;

        assert_eq!(catalog.vegetarian().count(), 2);

        Ok(())
    }

    #[test]
    fn display_price_derives_from_typed_price() {
        let item = CatalogItem {
            name: "Gobi 65".to_string(),
            price: 170,
            vegetarian: true,
            category: None,
        };

        assert_eq!(item.display_price(), "₹170");
    }

    #[test]
    fn price_labels_parse_leniently() {
        assert_eq!(price_from_label("₹110"), 110);
        assert_eq!(price_from_label("110"), 110);
        assert_eq!(price_from_label("market price"), 0);
    }
}
