use chrono::{DateTime, Utc};

/// Snapshot of "what time the server thinks it is", taken once per rendering
/// pass and passed into every time-sensitive builder. Builders never read a
/// clock themselves, so a fixed snapshot keeps one pass internally
/// consistent and makes tests deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerTime {
    now: DateTime<Utc>,
    offset_secs: i64,
}

impl ServerTime {
    pub fn new(now: DateTime<Utc>, offset_secs: i64) -> Self {
        Self { now, offset_secs }
    }

    /// Snapshot the current instant with the given clock-skew offset.
    pub fn now(offset_secs: i64) -> Self {
        Self::new(Utc::now(), offset_secs)
    }

    /// Approximate server clock in unix seconds. Mute windows and ban
    /// expirations compare against this.
    pub fn server_secs(&self) -> i64 {
        self.now.timestamp() + self.offset_secs
    }

    /// Local clock in unix milliseconds shifted by the skew. Typing-status
    /// timestamps use this so they age out on the server's timeline.
    pub fn skewed_millis(&self) -> i64 {
        self.now.timestamp_millis() + self.offset_secs * 1000
    }

    pub fn offset_secs(&self) -> i64 {
        self.offset_secs
    }
}
