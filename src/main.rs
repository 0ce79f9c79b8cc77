mod config;
mod greenapi;
mod logger;
mod models;
mod schedule;

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Europe::Helsinki;

use crate::config::{Config, RunMode};
use crate::greenapi::GreenApiClient;
use crate::models::OutgoingMessage;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logger::init_logging();

    let config = Config::from_env()?;

    let now = Utc::now().with_timezone(&Helsinki);
    let date = now.format("%Y-%m-%d").to_string();
    let weekday = now.format("%A").to_string().to_lowercase();

    tracing::info!(%date, %weekday, "Starting training notifier");

    let message = match config.mode {
        RunMode::Weekday => {
            weekday_message(&weekday).map(|text| OutgoingMessage::Poll(text.to_string()))
        }
        RunMode::Schedule => {
            let url = config
                .schedule_url
                .as_deref()
                .context("SCHEDULE_URL is not set")?;
            let document = schedule::fetch(url).await?;
            schedule::resolve(&document, &date, &weekday)?
        }
    };

    let Some(message) = message else {
        if config.force_run {
            tracing::warn!(%weekday, "Force run enabled, but no session is scheduled for today");
        } else {
            tracing::info!(%weekday, "No session scheduled for today");
        }
        return Ok(());
    };

    let client = GreenApiClient::new(&config)?;
    let response = match &message {
        OutgoingMessage::Cancellation(text) => {
            tracing::info!(message = %text, "Sending cancellation notice");
            client.send_message(text).await?
        }
        OutgoingMessage::Poll(question) => {
            tracing::info!(message = %question, "Sending training poll");
            client.send_poll(question).await?
        }
    };

    tracing::info!(%response, "Notification sent successfully");
    Ok(())
}

fn weekday_message(weekday: &str) -> Option<&'static str> {
    match weekday {
        "friday" => Some("Tänään vääntämään klo 18:00? (test message)"),
        "saturday" => Some("Tänään vääntämään klo 12:00? (test message)"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friday_and_saturday_have_fixed_messages() {
        assert_eq!(
            weekday_message("friday"),
            Some("Tänään vääntämään klo 18:00? (test message)")
        );
        assert_eq!(
            weekday_message("saturday"),
            Some("Tänään vääntämään klo 12:00? (test message)")
        );
    }

    #[test]
    fn every_other_weekday_is_quiet() {
        for day in ["monday", "tuesday", "wednesday", "thursday", "sunday"] {
            assert_eq!(weekday_message(day), None, "unexpected message on {day}");
        }
    }
}
