use serde::{Deserialize, Serialize};

/// Remote schedule document as served by the document store. Everything the
/// resolver needs lives under `result`; a missing or null `result` means the
/// document is unusable.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDocument {
    #[serde(default)]
    pub result: Option<Schedule>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default)]
    pub training_days: Vec<TrainingDay>,
    #[serde(default)]
    pub canceled_days: Vec<String>,
    #[serde(default)]
    pub exception_days: Vec<ExceptionDay>,
}

/// Recurring weekly session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDay {
    pub week_day: WeekDay,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeekDay {
    /// Lowercase English weekday name, e.g. "friday".
    pub key: String,
}

/// One-off date with a session at a different time than usual.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionDay {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// What today's run should send, if anything. A cancellation goes out as a
/// plain message; everything else is a yes/no poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutgoingMessage {
    Cancellation(String),
    Poll(String),
}

pub const FIRST_OPTION: &str = "Kyllä";
pub const SECOND_OPTION: &str = "Ei";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollPayload {
    pub chat_id: String,
    pub message: String,
    pub multiple_answers: bool,
    pub options: Vec<PollOption>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub option_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    pub chat_id: String,
    pub message: String,
}

impl PollPayload {
    pub fn new(chat_id: &str, message: &str) -> Self {
        Self {
            chat_id: chat_id.to_string(),
            message: message.to_string(),
            multiple_answers: false,
            options: vec![
                PollOption {
                    option_name: FIRST_OPTION.to_string(),
                },
                PollOption {
                    option_name: SECOND_OPTION.to_string(),
                },
            ],
        }
    }
}

impl MessagePayload {
    pub fn new(chat_id: &str, message: &str) -> Self {
        Self {
            chat_id: chat_id.to_string(),
            message: message.to_string(),
        }
    }
}
