use std::thread;

use chrono::Local;
use ncw_weather::{DAILY_GREETING, DailySchedule, WeatherConfig, WeatherService};
use tracing::{error, info};

use crate::delivery;

/// Post the daily report at the configured time, forever.
///
/// Delivery failures are logged and the loop waits for the next day.
pub fn run(config: &WeatherConfig) -> Result<(), String> {
    let mut service = WeatherService::from_config(config);
    let schedule = DailySchedule::new(config.post_time);
    let destination =
        delivery::configured(config.webhook_url.as_deref()).map_err(|e| e.to_string())?;

    info!(
        at = %schedule.time(),
        ledger = %config.ledger_path.display(),
        webhook = config.webhook_url.is_some(),
        "scheduler started"
    );

    loop {
        let now = Local::now();
        info!(next = %schedule.next_after(now.naive_local()), "waiting for next post");
        thread::sleep(schedule.wait_until_next(&now));

        let report = service.run_daily_report(Local::now().date_naive());
        if let Err(e) = destination.deliver(Some(DAILY_GREETING), &report) {
            error!(error = %e, "daily report delivery failed");
        }
    }
}
