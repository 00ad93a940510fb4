use serde::{Deserialize, Serialize};

/// A single line of stock: what it is, how many days remain to sell it, and
/// how desirable it currently is.
///
/// `Item` is a plain record. Callers construct it with whatever values they
/// hold and may read or write any field; the update engine in [`crate::shop`]
/// is what enforces the aging rules, once per simulated day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name. Also selects the aging rule, via [`crate::Category`].
    pub name: String,
    /// Days remaining before the sell-by date. Goes negative once the date
    /// has passed.
    pub sell_in: i32,
    /// Desirability score. The engine keeps this within 0..=50 for every
    /// category except the legendary one (pinned at 80).
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
