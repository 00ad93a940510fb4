use std::path::Path;

use anyhow::Context;

use shelflife_inventory::{Item, Shop};
use shelflife_report::{manifest, DEFAULT_MANIFEST};

const DEFAULT_DAYS: u32 = 30;

fn main() -> anyhow::Result<()> {
    shelflife_observability::init();

    let days = match std::env::var("DAYS") {
        Ok(raw) => raw.parse::<u32>().unwrap_or_else(|_| {
            tracing::warn!("DAYS is not a number; using default of {DEFAULT_DAYS}");
            DEFAULT_DAYS
        }),
        Err(_) => DEFAULT_DAYS,
    };

    let items = match std::env::var("STOCK_MANIFEST") {
        Ok(path) => manifest::load(Path::new(&path))
            .with_context(|| format!("failed to load stock manifest from {path}"))?,
        Err(_) => {
            manifest::from_str(DEFAULT_MANIFEST).context("embedded stock manifest is invalid")?
        }
    };

    tracing::info!(items = items.len(), days, "starting daily stock report");

    let mut shop = Shop::new(items);
    print_day(0, shop.items());

    for day in 1..=days {
        shop.advance_one_day();
        print_day(day, shop.items());
    }

    Ok(())
}

fn print_day(day: u32, items: &[Item]) {
    println!("-------- day {day} --------");
    println!("name, sell_in, quality");
    for item in items {
        println!("{item}");
    }
    println!();
}
