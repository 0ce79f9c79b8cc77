use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::models::{OutgoingMessage, Schedule, ScheduleDocument};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const CANCELLATION_MESSAGE: &str = "Treenit on peruttu tänään.";

/// Fetches the schedule document from the document store.
pub async fn fetch(url: &str) -> Result<ScheduleDocument> {
    let http = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let resp = http
        .get(url)
        .send()
        .await
        .context("Schedule fetch failed")?;

    let status = resp.status();
    let body = resp.text().await.context("Schedule response read failed")?;

    if !status.is_success() {
        return Err(anyhow!("Schedule fetch error: {} - {}", status, body));
    }

    let document: ScheduleDocument =
        serde_json::from_str(&body).context("Schedule document parse failed")?;
    Ok(document)
}

/// Derives today's message from the schedule. Cancellations win over time
/// exceptions, which win over the recurring weekly days; within each list the
/// first matching entry is taken.
pub fn resolve(
    document: &ScheduleDocument,
    date: &str,
    weekday: &str,
) -> Result<Option<OutgoingMessage>> {
    let schedule = document
        .result
        .as_ref()
        .filter(|schedule| !is_empty(schedule))
        .ok_or_else(|| anyhow!("Schedule document has no usable result"))?;

    if schedule.canceled_days.iter().any(|day| day == date) {
        return Ok(Some(OutgoingMessage::Cancellation(
            CANCELLATION_MESSAGE.to_string(),
        )));
    }

    if let Some(exception) = schedule
        .exception_days
        .iter()
        .find(|exception| exception.date == date)
    {
        return Ok(Some(OutgoingMessage::Poll(poll_message(
            &exception.start_time,
        ))));
    }

    if let Some(day) = schedule
        .training_days
        .iter()
        .find(|day| day.week_day.key == weekday)
    {
        return Ok(Some(OutgoingMessage::Poll(poll_message(&day.start_time))));
    }

    Ok(None)
}

fn is_empty(schedule: &Schedule) -> bool {
    schedule.training_days.is_empty()
        && schedule.canceled_days.is_empty()
        && schedule.exception_days.is_empty()
}

fn poll_message(start_time: &str) -> String {
    format!("Tänään vääntämään klo {}?", start_time)
}
