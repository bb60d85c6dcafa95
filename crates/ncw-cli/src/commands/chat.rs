use std::io::BufRead;

use chrono::Local;
use ncw_weather::{Reply, WeatherConfig, WeatherService};

use crate::delivery::print_report;

/// Treat each stdin line as a chat message; non-commands are ignored.
pub fn run(config: &WeatherConfig) -> Result<(), String> {
    let mut service = WeatherService::from_config(config);

    for line in std::io::stdin().lock().lines() {
        let message = line.map_err(|e| format!("failed to read message: {e}"))?;
        match service.handle_message(&message, Local::now().date_naive()) {
            Some(Reply::Report(report)) => print_report(&report),
            Some(Reply::Help(help)) => println!("{help}"),
            None => continue,
        }
        println!();
    }

    Ok(())
}
