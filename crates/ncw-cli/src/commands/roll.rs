use chrono::NaiveDate;
use ncw_weather::{WeatherConfig, WeatherService};

use crate::delivery::{ConsoleDelivery, Delivery};

pub fn run(config: &WeatherConfig, date: Option<NaiveDate>, json: bool) -> Result<(), String> {
    let mut service = WeatherService::from_config(config);
    let report = service.roll_report(super::date_or_today(date));

    if json {
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    ConsoleDelivery
        .deliver(None, &report)
        .map_err(|e| e.to_string())
}
