// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Berry lookup table.
//!
//! Items are identified by their position in the table: the first entry is
//! `#0`. Tables load from TOML:
//!
//! ```toml
//! [[item]]
//! name = "Cheri"
//! flavors = [10, 0, 0, 0, 0]   # spicy, dry, sweet, bitter, sour
//! smoothness = 25
//! rarity = 1                   # optional, defaults to 1
//! ```

use crate::error::{InvalidArgument, Result, SearchError};
use crate::model::{ItemBase, ItemId};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default)]
    item: Vec<ItemBase>,
}

/// Read-only table of berries, indexed by [`ItemId`].
#[derive(Debug, Clone, Default)]
pub struct ItemTable {
    items: Vec<ItemBase>,
}

impl ItemTable {
    /// Largest number of entries an id can address.
    pub const MAX_ITEMS: usize = u16::MAX as usize + 1;

    /// # Errors
    ///
    /// Fails if there are more items than an [`ItemId`] can address.
    pub fn new(items: Vec<ItemBase>) -> Result<Self> {
        if items.len() > Self::MAX_ITEMS {
            return Err(SearchError::Table(format!(
                "{} items exceed the table limit of {}",
                items.len(),
                Self::MAX_ITEMS
            )));
        }
        Ok(Self { items })
    }

    /// Parse a table from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: TableFile = toml::from_str(text)?;
        Self::new(file.item)
    }

    /// Load a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let table = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), items = table.len(), "Loaded item table");
        Ok(table)
    }

    /// Look up a berry.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidArgument::UnknownItem`] for ids past the table.
    pub fn lookup(&self, id: ItemId) -> Result<&ItemBase> {
        self.items
            .get(id.as_usize())
            .ok_or_else(|| InvalidArgument::UnknownItem(id).into())
    }

    /// Id of the first berry whose name matches, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<ItemId> {
        self.items
            .iter()
            .position(|item| item.name.eq_ignore_ascii_case(name))
            .map(|index| ItemId::new(index as u16))
    }

    /// Every id in the table, ascending.
    pub fn ids(&self) -> Vec<ItemId> {
        (0..self.items.len()).map(|index| ItemId::new(index as u16)).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &ItemBase)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemId::new(index as u16), item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
        [[item]]
        name = "Cheri"
        flavors = [10, 0, 0, 0, 0]
        smoothness = 25

        [[item]]
        name = "Razz"
        flavors = [10, 10, 0, 0, 0]
        smoothness = 20
        rarity = 2
    "#;

    #[test]
    fn test_parse_table() {
        let table = ItemTable::from_toml_str(TABLE).unwrap();
        assert_eq!(table.len(), 2);

        let razz = table.lookup(ItemId::new(1)).unwrap();
        assert_eq!(razz.name, "Razz");
        assert_eq!(razz.flavors, [10, 10, 0, 0, 0]);
        assert_eq!(razz.rarity, 2);
        assert_eq!(table.lookup(ItemId::new(0)).unwrap().rarity, 1);
    }

    #[test]
    fn test_unknown_item() {
        let table = ItemTable::from_toml_str(TABLE).unwrap();
        let err = table.lookup(ItemId::new(2)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_find_ignores_case() {
        let table = ItemTable::from_toml_str(TABLE).unwrap();
        assert_eq!(table.find("razz"), Some(ItemId::new(1)));
        assert_eq!(table.find("CHERI"), Some(ItemId::new(0)));
        assert_eq!(table.find("Oran"), None);
    }

    #[test]
    fn test_malformed_table() {
        let err = ItemTable::from_toml_str("[[item]]\nname = \"Bad\"\n").unwrap_err();
        assert!(matches!(err, SearchError::Table(_)));
    }

    #[test]
    fn test_ids_ascending() {
        let table = ItemTable::from_toml_str(TABLE).unwrap();
        assert_eq!(table.ids(), vec![ItemId::new(0), ItemId::new(1)]);
        assert!(!table.is_empty());
        assert!(ItemTable::default().is_empty());
    }
}
