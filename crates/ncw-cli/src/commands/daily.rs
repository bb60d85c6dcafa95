use chrono::NaiveDate;
use ncw_weather::{DAILY_GREETING, WeatherConfig, WeatherService};

use crate::delivery::{ConsoleDelivery, Delivery, DeliveryError, WebhookDelivery};

pub fn run(config: &WeatherConfig, date: Option<NaiveDate>, deliver: bool) -> Result<(), String> {
    let mut service = WeatherService::from_config(config);
    let report = service.run_daily_report(super::date_or_today(date));

    if deliver {
        let url = config
            .webhook_url
            .as_deref()
            .ok_or_else(|| DeliveryError::NoWebhook.to_string())?;
        WebhookDelivery::new(url)
            .and_then(|webhook| webhook.deliver(Some(DAILY_GREETING), &report))
            .map_err(|e| e.to_string())
    } else {
        ConsoleDelivery
            .deliver(Some(DAILY_GREETING), &report)
            .map_err(|e| e.to_string())
    }
}
