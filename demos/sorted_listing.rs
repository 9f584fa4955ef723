//! Fill a table, print its keys in order and report how the buckets filled up.
//!
//! Usage: `cargo run --example sorted_listing [capacity] [entries]`

use chain_table::{print_sorted_keys, HashTable, TableConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let capacity: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(64);
    let entries: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(200);
    // Keys are drawn from 20_000 distinct values.
    let entries = entries.min(20_000);

    let config = TableConfig::default().with_capacity(capacity);
    let mut table = HashTable::with_config(config)?;

    let mut rng = StdRng::seed_from_u64(1);
    while table.len() < entries {
        let key: i32 = rng.gen_range(-10_000..10_000);
        table.put(key, format!("entry {key}"));
    }

    print_sorted_keys(&table)?;

    let keys = table.sorted_keys();
    if let (Some(&first), Some(&last)) = (keys.first(), keys.last()) {
        eprintln!(
            "{} keys between {} and {} (exclusive)",
            table.range_count(first, last).unwrap_or(0),
            first,
            last
        );
    }
    eprintln!(
        "capacity {}, load factor {:.2}, longest chain {}",
        table.capacity(),
        table.load_factor(),
        table.max_chain_len()
    );
    Ok(())
}
