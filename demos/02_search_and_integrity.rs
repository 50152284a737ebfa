use ghg_inventory::{Inventory, SearchBuilder, SearchField, Tolerance, format_emissions, validate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let inventory = Inventory::builder()
        .path(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/inventory_midor.json"
        ))
        .build()?;

    // 1. Free-text search over every field.
    let query = std::env::args().nth(1).unwrap_or_else(|| "ipcc".to_string());
    let results = SearchBuilder::new(&inventory, query.as_str()).run();
    println!("{} for \"{}\"", results.summary(), results.query);
    for a in &results.activities {
        println!(
            "  [Scope {}] {:<28} {}",
            a.scope,
            a.label().unwrap_or("-"),
            format_emissions(a.total_emissions)
        );
    }
    println!();

    // 2. Restrict to the source fields only.
    let by_source = SearchBuilder::new(&inventory, "invoices")
        .fields(&[SearchField::AdSource, SearchField::EfSource])
        .limit(10)
        .run();
    println!("Invoice-backed activities: {}", by_source.len());
    println!();

    // 3. Check the precomputed aggregates.
    let report = validate(&inventory, Tolerance::default());
    if report.is_clean() {
        println!("Integrity: clean");
    } else {
        for v in report.violations() {
            println!("Integrity: {v}");
        }
    }

    let summary = inventory.summary();
    if let Some(largest) = &summary.largest_category {
        println!(
            "Largest source: {} - {} ({:.1}%)",
            largest.scope_name, largest.category, largest.percent
        );
    }
    println!("Data sources: {}", summary.data_sources.join(", "));

    Ok(())
}
