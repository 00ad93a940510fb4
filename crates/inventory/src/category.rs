//! Item categories and the name-based classification rule.

use crate::item::Item;

/// Name of the legendary item whose state never changes.
pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";

/// Name of the cheese that gains quality as it matures.
pub const AGED_BRIE_NAME: &str = "Aged Brie";

/// Name of the concert tickets that appreciate until the event, then become
/// worthless.
pub const BACKSTAGE_PASS_NAME: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Name marking conjured goods, which decay twice as fast as standard stock.
pub const CONJURED_NAME: &str = "Conjured";

/// Aging category of an item.
///
/// Categories are derived from the item name by exact match against the
/// recognized constants; any other name falls back to [`Category::Standard`].
/// Classification happens once per item per daily update, so the aging rules
/// can match on this exhaustively instead of re-comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Never ages: sell-in and quality are both left untouched.
    Legendary,
    /// Gains quality over time, faster once past the sell-by date.
    AgedBrie,
    /// Gains quality in tiers as the event approaches, then drops to zero.
    BackstagePass,
    /// Loses quality at twice the standard rate.
    Conjured,
    /// Default: loses quality at the standard rate.
    Standard,
}

impl Category {
    /// Classify an item name.
    pub fn of_name(name: &str) -> Self {
        match name {
            LEGENDARY_NAME => Category::Legendary,
            AGED_BRIE_NAME => Category::AgedBrie,
            BACKSTAGE_PASS_NAME => Category::BackstagePass,
            CONJURED_NAME => Category::Conjured,
            _ => Category::Standard,
        }
    }

    /// Classify an item.
    pub fn of(item: &Item) -> Self {
        Self::of_name(&item.name)
    }

    /// Whether quality rises rather than falls as days pass.
    pub fn appreciates(self) -> bool {
        matches!(self, Category::AgedBrie | Category::BackstagePass)
    }
}
