use shelflife_inventory::category::LEGENDARY_NAME;
use shelflife_inventory::shop::{MAX_QUALITY, MIN_QUALITY};
use shelflife_inventory::Shop;
use shelflife_report::{manifest, DEFAULT_MANIFEST};

#[test]
fn embedded_manifest_parses() {
    let items = manifest::from_str(DEFAULT_MANIFEST).unwrap();
    assert_eq!(items.len(), 9);
}

#[test]
fn embedded_manifest_after_one_day() {
    let mut shop = Shop::new(manifest::from_str(DEFAULT_MANIFEST).unwrap());
    shop.advance_one_day();

    let state: Vec<(i32, i32)> = shop
        .items()
        .iter()
        .map(|i| (i.sell_in, i.quality))
        .collect();

    assert_eq!(
        state,
        vec![
            (9, 19),  // +5 Dexterity Vest
            (1, 1),   // Aged Brie
            (4, 6),   // Elixir of the Mongoose
            (0, 80),  // Sulfuras, untouched
            (-1, 80), // Sulfuras, untouched even past its date
            (14, 21), // passes, far tier
            (9, 50),  // passes, +2 tier capped at 50
            (4, 50),  // passes, +3 tier capped at 50
            (2, 4),   // Conjured
        ]
    );
}

#[test]
fn embedded_manifest_stays_in_bounds_over_a_full_season() {
    let items = manifest::from_str(DEFAULT_MANIFEST).unwrap();
    let initial = items.clone();
    let mut shop = Shop::new(items);

    for _ in 0..30 {
        shop.advance_one_day();
    }

    for (item, start) in shop.items().iter().zip(&initial) {
        assert_eq!(item.name, start.name);
        if item.name == LEGENDARY_NAME {
            assert_eq!(item.sell_in, start.sell_in);
            assert_eq!(item.quality, 80);
        } else {
            assert_eq!(item.sell_in, start.sell_in - 30);
            assert!((MIN_QUALITY..=MAX_QUALITY).contains(&item.quality));
        }
    }
}
