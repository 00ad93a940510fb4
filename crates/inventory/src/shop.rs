//! Daily stock aging engine.
//!
//! [`Shop`] holds the day's stock and advances it one simulated day at a
//! time. All rules live in [`age_item`], which is pure over a single record:
//! items never interact, so the collection walk is a plain in-order loop.

use crate::category::Category;
use crate::item::Item;

/// Upper bound the engine never raises quality past (legendary stock is
/// outside the bounds and never touched).
pub const MAX_QUALITY: i32 = 50;

/// Lower bound the engine never lowers quality past.
pub const MIN_QUALITY: i32 = 0;

/// Last sell-in day of the +2 ticket tier.
const SECOND_TIER_TICKET_DAYS: i32 = 10;

/// Last sell-in day of the +3 ticket tier. A sell-in of exactly this value
/// lands in the +3 tier, not the +2 tier.
const THIRD_TIER_TICKET_DAYS: i32 = 5;

/// The shop's stock for the current simulated day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    items: Vec<Item>,
}

impl Shop {
    /// Take ownership of the stock list. Order is preserved and is the order
    /// items are updated in.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Advance every item by one day, in stock order.
    ///
    /// Total over any stock list, including an empty one. Each call mutates
    /// each item exactly once; the whole list is updated before this returns.
    pub fn advance_one_day(&mut self) {
        for item in &mut self.items {
            age_item(item);
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

/// Apply one day of aging to a single item.
///
/// Classification happens here, once per call, so the policy match below
/// stays exhaustive over [`Category`].
pub fn age_item(item: &mut Item) {
    let category = Category::of(item);
    if category == Category::Legendary {
        return;
    }

    item.sell_in -= 1;

    // Branches are gated on the current quality: appreciating stock only
    // moves while below the cap, depreciating stock only while above zero.
    match category {
        Category::AgedBrie if item.quality < MAX_QUALITY => raise(item, 1),
        Category::BackstagePass if item.quality < MAX_QUALITY => raise_ticket(item),
        Category::Conjured if item.quality > MIN_QUALITY => lower(item, 2),
        Category::Standard if item.quality > MIN_QUALITY => lower(item, 1),
        _ => {}
    }
}

/// Raise quality by `amount`, doubled past the sell-by date, capped at
/// [`MAX_QUALITY`].
fn raise(item: &mut Item, amount: i32) {
    let delta = if item.sell_in < 0 { amount * 2 } else { amount };
    item.quality = (item.quality + delta).min(MAX_QUALITY);
}

/// Lower quality by `amount`, doubled past the sell-by date, floored at
/// [`MIN_QUALITY`].
fn lower(item: &mut Item, amount: i32) {
    let delta = if item.sell_in < 0 { amount * 2 } else { amount };
    item.quality = (item.quality - delta).max(MIN_QUALITY);
}

/// Tiered ticket growth against the post-decrement sell-in: worthless after
/// the event, +3 in the last five days, +2 in the five days before that,
/// +1 otherwise.
fn raise_ticket(item: &mut Item) {
    if item.sell_in < 0 {
        item.quality = 0;
    } else if item.sell_in <= THIRD_TIER_TICKET_DAYS {
        item.quality = (item.quality + 3).min(MAX_QUALITY);
    } else if item.sell_in <= SECOND_TIER_TICKET_DAYS {
        item.quality = (item.quality + 2).min(MAX_QUALITY);
    } else {
        item.quality = (item.quality + 1).min(MAX_QUALITY);
    }
}
