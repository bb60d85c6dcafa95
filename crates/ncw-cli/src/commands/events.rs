use comfy_table::{ContentArrangement, Table};
use ncw_weather::{JsonFileStore, Ledger, WeatherConfig};

pub fn run(config: &WeatherConfig) -> Result<(), String> {
    let ledger =
        Ledger::new(JsonFileStore::new(&config.ledger_path)).with_attempts(config.store_attempts);
    let events = ledger.events();

    if events.is_empty() {
        println!("  No ongoing events.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Condition", "Rolled", "Remaining", "Started"]);

    for event in &events {
        table.add_row(vec![
            event.condition.clone(),
            event.original_duration.clone(),
            event.remaining_label(),
            event.start_date.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} ongoing", events.len());

    Ok(())
}
