use ghg_inventory::{
    Inventory, ReferenceGroup, ScopeId, dataset_download_url, format_data_value, format_emissions,
    format_percent, reference_url,
};
use url::Url;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Load the snapshot once; every query below borrows it.
    let path = std::env::args().nth(1).unwrap_or_else(|| {
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/inventory_midor.json").to_string()
    });
    let inventory = Inventory::load(&path)?;

    println!("--- Inventory ---");
    println!("Total: {}", format_emissions(inventory.total_emissions()));
    for scope in inventory.scopes() {
        println!(
            "{:<8} {:>16} {:>7}  ({} categories)",
            scope.name,
            format_emissions(scope.total_emissions),
            format_percent(scope.percent_of_total, 1),
            scope.categories.len()
        );
    }
    println!();

    // 2. Drill down into a scope and its categories.
    if let Some(view) = inventory.scope_view(ScopeId(1)) {
        println!("--- {} ---", view.scope.name);
        for c in &view.scope.categories {
            println!(
                "{:<24} {:>16} {:>7} of scope",
                c.name,
                format_emissions(c.total_emissions),
                format_percent(c.percent_of_scope, 1)
            );
        }
        println!();

        // 3. Activity detail.
        if let Some(a) = view.activities.first() {
            println!("--- Activity {} ---", a.id);
            println!("Label: {}", a.label().unwrap_or("Activity"));
            if let Some(v) = &a.activity_data_value {
                println!(
                    "Activity data: {} {}",
                    format_data_value(v),
                    a.activity_data_unit.as_deref().unwrap_or_default()
                );
            }
            for (gas, value) in a.emitting_gases() {
                println!("  {gas}: {}", format_emissions(value));
            }
            println!();
        }
    }

    // 4. Static assets.
    let base = Url::parse("https://example.org/ghg/")?;
    println!("Spreadsheet: {}", dataset_download_url(&base)?);
    for group in ReferenceGroup::ALL {
        println!("{} ({})", group.title(), group.images().len());
        for image in group.images() {
            println!("  {}: {}", image.name, reference_url(&base, group, image)?);
        }
    }

    Ok(())
}
