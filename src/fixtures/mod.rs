//! Fixtures
//!
//! YAML menu documents and the loader turning them into a [`Catalog`]. A
//! built-in menu ships with the crate; external files use the same shape.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, CatalogItem, price_from_label};

/// Menu Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading a menu file
    #[error("failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse menu YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Catalog construction error
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Price field of a menu entry: a typed number, or a legacy display label
/// (`"₹110"`) parsed leniently.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceField {
    Units(u64),
    Label(String),
}

impl PriceField {
    fn units(&self) -> u64 {
        match self {
            Self::Units(units) => *units,
            Self::Label(label) => price_from_label(label),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MenuEntry {
    name: String,
    price: PriceField,
    #[serde(default)]
    vegetarian: bool,
}

#[derive(Debug, Deserialize)]
struct MenuCategory {
    name: String,
    items: Vec<MenuEntry>,
}

/// A parsed menu document.
#[derive(Debug, Deserialize)]
pub struct MenuFixture {
    categories: Vec<MenuCategory>,
}

impl MenuFixture {
    /// Parse a menu document from YAML.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the YAML cannot be parsed.
    pub fn from_str(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Load a menu document from a file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        Self::from_str(&fs::read_to_string(path)?)
    }

    /// Flatten the menu into a [`Catalog`], tagging each item with its
    /// category name.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if two entries share a name.
    pub fn into_catalog(self) -> Result<Catalog, FixtureError> {
        let mut items = Vec::new();

        for category in self.categories {
            for entry in category.items {
                items.push(CatalogItem {
                    name: entry.name,
                    price: entry.price.units(),
                    vegetarian: entry.vegetarian,
                    category: Some(category.name.clone()),
                });
            }
        }

        Ok(Catalog::new(items)?)
    }
}

/// The menu shipped with the crate.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the embedded document is malformed.
pub fn sample_menu() -> Result<Catalog, FixtureError> {
    MenuFixture::from_str(include_str!("menu.yml"))?.into_catalog()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::ItemId;

    use super::*;

    #[test]
    fn sample_menu_parses_and_is_non_empty() -> TestResult {
        let catalog = sample_menu()?;

        assert!(!catalog.is_empty());

        Ok(())
    }

    #[test]
    fn sample_menu_items_carry_their_category() -> TestResult {
        let catalog = sample_menu()?;

        let item = catalog.get(&ItemId::from_name("Chicken Biryani"));

        assert_eq!(
            item.and_then(|item| item.category.clone()),
            Some("Biryani".to_string())
        );
        assert_eq!(item.map(|item| item.vegetarian), Some(false));

        Ok(())
    }

    #[test]
    fn legacy_price_labels_are_accepted() -> TestResult {
        let fixture = MenuFixture::from_str(
            "categories:\n  - name: Soups\n    items:\n      - name: Sweet Corn Soup\n        price: \"₹110\"\n        vegetarian: true\n",
        )?;

        let catalog = fixture.into_catalog()?;
        let item = catalog.get(&ItemId::from_name("Sweet Corn Soup"));

        assert_eq!(item.map(|item| item.price), Some(110));

        Ok(())
    }

    #[test]
    fn vegetarian_defaults_to_false() -> TestResult {
        let fixture = MenuFixture::from_str(
            "categories:\n  - name: Starters\n    items:\n      - name: Chicken 65\n        price: 270\n",
        )?;

        let catalog = fixture.into_catalog()?;
        let item = catalog.get(&ItemId::from_name("Chicken 65"));

        assert_eq!(item.map(|item| item.vegetarian), Some(false));

        Ok(())
    }
}
