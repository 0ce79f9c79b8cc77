use std::env;

use anyhow::{bail, Result};

/// How today's message is derived: from the remote schedule document, or
/// from the older built-in weekday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Schedule,
    Weekday,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub instance_id: String,
    pub api_token: String,
    pub chat_id: String,
    /// Present whenever `mode` is `Schedule`; validated at load time.
    pub schedule_url: Option<String>,
    pub mode: RunMode,
    pub force_run: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mode = match get("RUN_MODE").as_deref() {
            None | Some("") | Some("schedule") => RunMode::Schedule,
            Some("weekday") => RunMode::Weekday,
            Some(other) => bail!("RUN_MODE must be 'schedule' or 'weekday', got '{}'", other),
        };

        let mut missing = Vec::new();
        // An empty value is as useless as an unset one.
        let mut required = |name: &'static str| match get(name).filter(|value| !value.is_empty()) {
            Some(value) => value,
            None => {
                missing.push(name);
                String::new()
            }
        };

        let base_url = required("GREENAPI_URL");
        let instance_id = required("GREENAPI_INSTANCE_ID");
        let api_token = required("GREENAPI_API_TOKEN");
        let chat_id = required("WHATSAPP_CHAT_ID");
        let schedule_url = match mode {
            RunMode::Schedule => Some(required("SCHEDULE_URL")),
            RunMode::Weekday => None,
        };

        if !missing.is_empty() {
            bail!(
                "Missing required environment variables: {}",
                missing.join(", ")
            );
        }

        let force_run = get("FORCE_RUN")
            .map(|value| value.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            base_url,
            instance_id,
            api_token,
            chat_id,
            schedule_url,
            mode,
            force_run,
        })
    }
}
