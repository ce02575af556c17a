use std::{fmt::Display, str::FromStr, time::Duration};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Number of recurrence steps examined per event on every run
    pub horizon_days: usize,
    /// Number of recurrence steps examined when looking up the next
    /// injection of a subject
    pub next_injection_horizon: usize,
    /// How many subjects are processed at the same time during a run.
    /// 1 processes them one after another.
    pub subject_concurrency: usize,
    /// A run that has not finished within this time is reported as failed
    pub run_deadline: Duration,
    /// A delivery attempt that has not been confirmed within this time
    /// counts as a failed delivery
    pub delivery_timeout: Duration,
    /// When set the server triggers the injection notifications job itself
    /// on this interval, in addition to the HTTP trigger
    pub injection_job_interval: Option<Duration>,
    /// When set the HTTP trigger requires this secret
    pub cron_secret: Option<String>,
}

fn parse_positive_env<T>(name: &str, default: T) -> T
where
    T: FromStr + Display + PartialOrd + Default + Copy,
{
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) if parsed > T::default() => parsed,
            _ => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_interval_env(name: &str) -> Option<Duration> {
    let secs = non_empty_env(name)?;
    match secs.parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            warn!(
                "The given {}: {} is not valid, the job will only run when triggered.",
                name, secs
            );
            None
        }
    }
}

/// Reads every variable in `names` and fails with the full list of the
/// missing ones.
pub(crate) fn require_env_vars(names: &[&str]) -> anyhow::Result<Vec<String>> {
    let values = names
        .iter()
        .map(|name| non_empty_env(name))
        .collect::<Vec<_>>();
    let missing = names
        .iter()
        .zip(&values)
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(anyhow::Error::msg(format!(
            "Missing environment variables: {}",
            missing.join(", ")
        )));
    }

    Ok(values.into_iter().flatten().collect())
}

impl Config {
    pub fn new() -> Self {
        Self {
            port: parse_positive_env("PORT", 5000),
            horizon_days: parse_positive_env("HORIZON_DAYS", 30),
            next_injection_horizon: parse_positive_env("NEXT_INJECTION_HORIZON", 100),
            subject_concurrency: parse_positive_env("SUBJECT_CONCURRENCY", 1),
            run_deadline: Duration::from_secs(parse_positive_env("RUN_DEADLINE_SECS", 50)),
            delivery_timeout: Duration::from_secs(parse_positive_env("DELIVERY_TIMEOUT_SECS", 10)),
            injection_job_interval: parse_interval_env("INJECTION_JOB_INTERVAL_SECS"),
            cron_secret: non_empty_env("CRON_SECRET"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
