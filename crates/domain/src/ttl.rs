//! TTL override values.
//!
//! A TTL override replaces the server-advertised lifetime of every record a
//! response yields. It can be given as a number of seconds, as an interval
//! expression (`"90 seconds"`, `"1 hour 30 minutes"`, `"5m"`), or as an
//! explicit [`Duration`].

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TtlOverride {
    Seconds(u64),
    Interval(String),
    #[serde(skip)]
    Duration(Duration),
}

impl TtlOverride {
    pub fn to_duration(&self) -> Result<Duration, DomainError> {
        match self {
            Self::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            Self::Interval(expr) => parse_interval(expr),
            Self::Duration(duration) => Ok(*duration),
        }
    }
}

impl From<u64> for TtlOverride {
    fn from(secs: u64) -> Self {
        Self::Seconds(secs)
    }
}

impl From<Duration> for TtlOverride {
    fn from(duration: Duration) -> Self {
        Self::Duration(duration)
    }
}

impl FromStr for TtlOverride {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Self::Interval(s.to_string());
        value.to_duration()?;
        Ok(value)
    }
}

impl fmt::Display for TtlOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(secs) => write!(f, "{} seconds", secs),
            Self::Interval(expr) => write!(f, "{}", expr),
            Self::Duration(duration) => write!(f, "{:?}", duration),
        }
    }
}

fn unit_seconds(unit: &str) -> Option<u64> {
    match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => Some(1),
        "m" | "min" | "mins" | "minute" | "minutes" => Some(60),
        "h" | "hour" | "hours" => Some(3_600),
        "d" | "day" | "days" => Some(86_400),
        "w" | "week" | "weeks" => Some(604_800),
        _ => None,
    }
}

/// Parses an interval expression into a duration.
///
/// Grammar: one or more `<integer> <unit>` terms. The space between number
/// and unit is optional and terms may be separated by `,` or `and`. A bare
/// integer means seconds.
pub fn parse_interval(expr: &str) -> Result<Duration, DomainError> {
    let invalid = || DomainError::InvalidTtlConfiguration(format!("cannot parse '{}'", expr));

    let normalized = expr.trim().to_ascii_lowercase().replace(',', " ");
    if normalized.is_empty() {
        return Err(invalid());
    }

    if let Ok(secs) = normalized.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }

    let mut total: u64 = 0;
    let mut pending: Option<u64> = None;
    let mut terms = 0usize;

    for token in normalized.split_whitespace().filter(|t| *t != "and") {
        let digits_end = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        let (number, unit) = token.split_at(digits_end);

        let amount = match (number.is_empty(), pending.take()) {
            (false, None) => number.parse::<u64>().map_err(|_| invalid())?,
            (true, Some(amount)) => amount,
            _ => return Err(invalid()),
        };

        if unit.is_empty() {
            pending = Some(amount);
            continue;
        }

        let multiplier = unit_seconds(unit).ok_or_else(invalid)?;
        total = amount
            .checked_mul(multiplier)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(invalid)?;
        terms += 1;
    }

    if pending.is_some() || terms == 0 {
        return Err(invalid());
    }

    Ok(Duration::from_secs(total))
}
