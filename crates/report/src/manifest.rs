//! Stock manifest loading.
//!
//! A manifest is a JSON array of item records. Parsing is strict about
//! shape but deliberately not about values: the domain tolerates stock
//! constructed outside the usual quality range, so such entries are admitted
//! with a warning rather than rejected.

use std::path::Path;

use thiserror::Error;

use shelflife_inventory::shop::{MAX_QUALITY, MIN_QUALITY};
use shelflife_inventory::{Category, Item};

/// Failure to produce a stock list from a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read stock manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("stock manifest is not a valid item list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("stock manifest contains no items")]
    Empty,
}

/// Parse a manifest from its JSON text.
pub fn from_str(raw: &str) -> Result<Vec<Item>, ManifestError> {
    let items: Vec<Item> = serde_json::from_str(raw)?;
    if items.is_empty() {
        return Err(ManifestError::Empty);
    }

    for item in &items {
        if Category::of(item) != Category::Legendary
            && !(MIN_QUALITY..=MAX_QUALITY).contains(&item.quality)
        {
            tracing::warn!(
                name = %item.name,
                quality = item.quality,
                "quality outside {MIN_QUALITY}..={MAX_QUALITY}; the engine will not move it further out of range"
            );
        }
    }

    Ok(items)
}

/// Read and parse a manifest file.
pub fn load(path: &Path) -> Result<Vec<Item>, ManifestError> {
    let raw = std::fs::read_to_string(path)?;
    from_str(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_an_item_list() {
        let items = from_str(
            r#"[
                { "name": "Aged Brie", "sell_in": 2, "quality": 0 },
                { "name": "foo", "sell_in": -1, "quality": 7 }
            ]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Item::new("Aged Brie", 2, 0));
        assert_eq!(items[1], Item::new("foo", -1, 7));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = from_str(r#"{ "name": "not a list" }"#).unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));

        let err = from_str(r#"[{ "name": "foo", "sell_in": 1 }]"#).unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn rejects_an_empty_manifest() {
        let err = from_str("[]").unwrap_err();
        assert!(matches!(err, ManifestError::Empty));
    }

    #[test]
    fn admits_out_of_range_quality() {
        // Out-of-range values are the caller's prerogative; the loader only
        // warns about them.
        let items = from_str(r#"[{ "name": "foo", "sell_in": 1, "quality": 70 }]"#).unwrap();
        assert_eq!(items[0].quality, 70);
    }
}
