use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Clock readings of one calendar day as delivered by the attendance source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Raw timestamps, possibly suffixed with the remote marker
    #[serde(default, alias = "clockTimestamps", alias = "timestamps")]
    pub clock: Vec<String>,
    /// Authoritative lateness reported by the source, if any
    #[serde(
        default,
        alias = "lateMinutes",
        deserialize_with = "lenient_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub late_minutes: Option<i64>,
    /// Explicit day-type label overriding the calendar
    #[serde(default, alias = "dayType", skip_serializing_if = "Option::is_none")]
    pub day_type: Option<String>,
}

impl AttendanceDay {
    pub fn new(date: &str, clock: &[&str]) -> Self {
        Self {
            date: date.to_string(),
            clock: clock.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_late_minutes(mut self, minutes: i64) -> Self {
        self.late_minutes = Some(minutes);
        self
    }

    pub fn with_day_type(mut self, label: &str) -> Self {
        self.day_type = Some(label.to_string());
        self
    }
}

/// One raw punch row (`date,time` CSV or the HR export's `SHIFTTERM`/`CARDTIME`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPunch {
    #[serde(alias = "SHIFTTERM")]
    pub date: String,
    #[serde(alias = "CARDTIME")]
    pub time: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Numbers, numeric strings or garbage. Garbage counts as zero, absence as `None`.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LooseNumber>::deserialize(deserializer)?;

    Ok(raw.map(|n| match n {
        LooseNumber::Int(i) => i.max(0),
        LooseNumber::Float(f) if f.is_finite() => (f.max(0.0)) as i64,
        LooseNumber::Float(_) => 0,
        LooseNumber::Text(s) => s.trim().parse::<f64>().map(|f| f.max(0.0) as i64).unwrap_or(0),
        LooseNumber::Other(_) => 0,
    }))
}
