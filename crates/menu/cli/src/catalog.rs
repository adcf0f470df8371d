//! Item catalog loading for the demo binary.

use std::path::Path;

use anyhow::{Context, Result};
use menu_core::{FieldEffect, Item};
use serde::{Deserialize, Serialize};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<CatalogItem>,
}

/// One catalog entry: an item definition plus the quantity the demo party
/// starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub item: Item,
    pub quantity: u16,
}

/// Load an item catalog from a RON file.
pub fn load(path: &Path) -> Result<Vec<CatalogItem>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read item catalog {}", path.display()))?;
    let catalog: ItemCatalog = ron::from_str(&content)
        .with_context(|| format!("failed to parse item catalog {}", path.display()))?;

    Ok(catalog.items)
}

/// Fallback catalog used when no `MENU_ITEM_CATALOG` is configured.
pub fn builtin() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            item: Item::new("Potion", "Restores a little health to the most wounded ally.")
                .consumable()
                .with_field_effect(FieldEffect::Heal { amount: 20 }),
            quantity: 3,
        },
        CatalogItem {
            item: Item::new("Ether", "Restores a little magic to the most drained ally.")
                .consumable()
                .with_field_effect(FieldEffect::Restore { amount: 10 }),
            quantity: 2,
        },
        CatalogItem {
            item: Item::new("Herb Bundle", "A sharp smell that perks up the whole party.")
                .consumable()
                .with_field_effect(FieldEffect::HealAll { amount: 8 }),
            quantity: 1,
        },
        CatalogItem {
            item: Item::new("Warp Wing", "Carries the party back to the last town.")
                .consumable()
                .with_field_effect(FieldEffect::Defer),
            quantity: 1,
        },
        CatalogItem {
            item: Item::new("Short Sword", "A plain blade. Of no use outside battle.")
                .with_max_stack(1),
            quantity: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/items.ron")
    }

    #[test]
    fn sample_catalog_parses() {
        let items = load(&sample_path()).unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().any(|entry| entry.item.is_field_usable()));
    }

    #[test]
    fn missing_catalog_reports_the_path() {
        let err = load(Path::new("no/such/catalog.ron")).unwrap_err();
        assert!(err.to_string().contains("no/such/catalog.ron"));
    }

    #[test]
    fn builtin_catalog_has_field_usable_items() {
        let items = builtin();
        assert!(items.iter().any(|entry| entry.item.is_field_usable()));
        assert!(items.iter().any(|entry| !entry.item.is_field_usable()));
    }
}
