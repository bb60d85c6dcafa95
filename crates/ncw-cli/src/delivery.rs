//! Where finished reports go: the terminal or a chat webhook.

use std::time::Duration;

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use ncw_weather::{Report, Severity};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::info;

/// Webhook request timeout.
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

pub type DeliveryResult<T> = Result<T, DeliveryError>;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook rejected the report with HTTP {0}")]
    Status(u16),

    #[error("no webhook configured (set NCWR_WEBHOOK_URL)")]
    NoWebhook,
}

pub trait Delivery {
    /// Send `report`, preceded by `greeting` when given.
    fn deliver(&self, greeting: Option<&str>, report: &Report) -> DeliveryResult<()>;
}

/// Prints reports to stdout.
pub struct ConsoleDelivery;

impl Delivery for ConsoleDelivery {
    fn deliver(&self, greeting: Option<&str>, report: &Report) -> DeliveryResult<()> {
        if let Some(greeting) = greeting {
            println!("{greeting}");
            println!();
        }
        print_report(report);
        Ok(())
    }
}

/// Posts reports as a chat embed.
pub struct WebhookDelivery {
    url: String,
    client: reqwest::blocking::Client,
}

impl WebhookDelivery {
    pub fn new(url: impl Into<String>) -> DeliveryResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl Delivery for WebhookDelivery {
    fn deliver(&self, greeting: Option<&str>, report: &Report) -> DeliveryResult<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&webhook_payload(greeting, report, Utc::now()))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status(status.as_u16()));
        }
        info!(status = status.as_u16(), "report posted to webhook");
        Ok(())
    }
}

/// The configured destination: the webhook if one is set, else the console.
pub fn configured(webhook_url: Option<&str>) -> DeliveryResult<Box<dyn Delivery>> {
    match webhook_url {
        Some(url) => Ok(Box::new(WebhookDelivery::new(url)?)),
        None => Ok(Box::new(ConsoleDelivery)),
    }
}

/// Message body: optional greeting as content, the report as one embed
/// stamped with `sent_at`.
pub fn webhook_payload(greeting: Option<&str>, report: &Report, sent_at: DateTime<Utc>) -> Value {
    let mut embed = report.to_embed();
    embed["timestamp"] = json!(sent_at.to_rfc3339());
    let mut payload = json!({ "embeds": [embed] });
    if let Some(greeting) = greeting {
        payload["content"] = json!(greeting);
    }
    payload
}

pub fn print_report(report: &Report) {
    println!("  {}", report.title.bold());
    if let Some(emergency) = &report.emergency {
        println!("  {}", emergency.red().bold());
    }
    println!();
    println!("  {:<16}{}", "broadcast date:", report.broadcast_date);
    println!("  {:<16}{}", "temperature:", report.temperature);
    println!(
        "  {:<16}{}",
        "conditions:",
        tint(&report.condition, report.severity)
    );
    if let Some(duration) = &report.duration {
        println!("  {:<16}{duration}", "duration:");
    }
    println!(
        "  {:<16}{} {}",
        "severity:",
        report.severity,
        report.severity.hex()
    );

    if !report.continuing.is_empty() {
        println!();
        println!("  {}", "Continuing from previous days".bold());
        for line in &report.continuing {
            println!("    {line}");
        }
    }

    if !report.advisories.is_empty() {
        println!();
        println!("  {}", "Advisory".bold());
        for advisory in &report.advisories {
            println!("    {advisory}");
        }
    }

    if let Some(bulletin) = &report.bulletin {
        println!();
        println!("  {}", "Ongoing event".bold());
        println!("    {bulletin}");
    }

    println!();
    println!("  {}", report.footer.dimmed());
}

/// Colour a condition with its severity colour.
fn tint(text: &str, severity: Severity) -> ColoredString {
    let [_, r, g, b] = severity.color().to_be_bytes();
    text.truecolor(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ncw_weather::{RenderOptions, Season, WeatherOutcome, report::render};

    fn report() -> Report {
        let outcome = WeatherOutcome {
            temperature: "Cool (Around 50°F/10°C)".to_string(),
            condition: "Acid Rain".to_string(),
            duration: Some("2 Hours".to_string()),
            season: Season::Spring,
        };
        render(
            &outcome,
            &[],
            &RenderOptions::default(),
            NaiveDate::from_ymd_opt(2026, 4, 3).unwrap(),
        )
    }

    fn sent_at() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-04-03T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn payload_with_greeting() {
        let payload = webhook_payload(Some("morning"), &report(), sent_at());
        assert_eq!(payload["content"], "morning");
        assert_eq!(payload["embeds"][0]["color"], 0xFFFF00);
        assert_eq!(payload["embeds"][0]["timestamp"], "2026-04-03T08:00:00+00:00");
    }

    #[test]
    fn payload_without_greeting() {
        let payload = webhook_payload(None, &report(), sent_at());
        assert!(payload.get("content").is_none());
        assert_eq!(payload["embeds"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn configured_defaults_to_console() {
        assert!(configured(None).is_ok());
    }
}
