//! # Seed Data Generator
//!
//! Populates a file-backed store with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 40 products (default) into ./data
//! cargo run -p stockbook-store --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockbook-store --bin seed -- --count 200
//!
//! # Specify data directory, wiping whatever was saved there
//! cargo run -p stockbook-store --bin seed -- --data-dir ./tmp/shop --reset
//! ```
//!
//! ## Generated Products
//! Staples from a handful of market suppliers. Every supplier keeps the
//! same phone across its products except the last one, which has none,
//! so the supplier screen shows both cases.

use std::env;
use std::error::Error;

use stockbook_core::NewProduct;
use stockbook_store::StoreConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Suppliers and the phone number listed on their products.
const SUPPLIERS: &[(&str, Option<&str>)] = &[
    ("Ade Foods", Some("08011112222")),
    ("Mama Nkechi Provisions", Some("08033334444")),
    ("Bello & Sons", Some("07055556666")),
    ("Ikeja Cold Room", Some("09077778888")),
    ("Market Square", None),
];

/// Product names with a base price in naira.
const ITEMS: &[(&str, f64)] = &[
    ("Rice 50kg", 45000.0),
    ("Beans 25kg", 28000.0),
    ("Garri 10kg", 9500.0),
    ("Palm Oil 25L", 32000.0),
    ("Groundnut Oil 5L", 11500.0),
    ("Sugar 1kg", 1800.0),
    ("Semovita 5kg", 6200.0),
    ("Indomie Carton", 8900.0),
    ("Tomato Paste Carton", 15500.0),
    ("Frozen Chicken 10kg", 38000.0),
    ("Titus Sardine Carton", 21000.0),
    ("Peak Milk Carton", 19500.0),
    ("Yam Tuber", 2500.0),
    ("Onions Bag", 27000.0),
    ("Pepper Basket", 7000.0),
    ("Salt 500g", 350.0),
];

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut count: usize = 40;
    let mut config = StoreConfig::from_env();
    let mut reset = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if let Some(value) = args.get(i + 1) {
                    count = value.parse().unwrap_or(count);
                    i += 1;
                }
            }
            "--data-dir" | "-d" => {
                if let Some(value) = args.get(i + 1) {
                    config.data_dir = value.into();
                    i += 1;
                }
            }
            "--reset" => reset = true,
            "--help" | "-h" => {
                println!("Stockbook Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>        Number of products to generate (default: 40)");
                println!("  -d, --data-dir <PATH>  Data directory (default: $STOCKBOOK_DATA_DIR or ./data)");
                println!("      --reset            Discard saved products first");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {other}"),
        }
        i += 1;
    }

    println!("Stockbook Seed Data Generator");
    println!("=============================");
    println!("Data dir: {}", config.data_dir.display());
    println!("Key:      {}", config.storage_key);
    println!("Products: {count}");
    println!();

    if reset {
        config.clear()?;
        println!("✓ Cleared saved products");
    }

    let mut store = config.open();

    if !store.is_empty() {
        println!("⚠ Store already has {} products", store.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Run with --reset to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    for seed in 0..count {
        store.add(generate_product(seed))?;
    }
    info!(count, elapsed_ms = start.elapsed().as_millis() as u64, "Seeded products");

    let stats = store.stats();
    println!("✓ Generated {} products", stats.total_products);
    println!("  Suppliers: {}", stats.total_suppliers);
    println!();

    for supplier in store.suppliers() {
        println!(
            "  {:<24} {:>3} product(s)  {}",
            supplier.name,
            supplier.product_count(),
            supplier.phone.as_deref().unwrap_or("No phone number")
        );
    }

    println!();
    for query in ["rice", "ade"] {
        let results = store.search(query)?;
        println!("  Search '{query}': {} results", results.len());
    }

    if let Some(first) = store.products().first() {
        println!(
            "  First product: {} at {}",
            first.name,
            config.format_price(first.price)
        );
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Logging defaults to `info`; override with `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockbook_store=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds one sample product. Deterministic in `seed`.
fn generate_product(seed: usize) -> NewProduct {
    let (name, base_price) = ITEMS[seed % ITEMS.len()];
    let (supplier, phone) = SUPPLIERS[(seed / ITEMS.len() + seed) % SUPPLIERS.len()];

    // Later batches get a small markup so repeated names differ in price
    let batch = (seed / ITEMS.len()) as f64;
    let price = (base_price * (1.0 + batch * 0.05)).round();

    let mut product = NewProduct::new(name, price, supplier);
    if let Some(phone) = phone {
        product = product.phone(phone);
    }
    if seed % 7 == 0 {
        product = product.notes("Restock weekly");
    }

    product
}
