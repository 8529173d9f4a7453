use std::sync::LazyLock;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use regex::Regex;

use super::{JobId, MessageTarget};

static PROGRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"progress\s*=\s*(\d+)\s*%").expect("progress pattern must compile")
});

/// Extracts the percentage from an engine diagnostic line such as
/// `whisper_print_progress_callback: progress =  45%`.
pub fn parse_progress_line(line: &str) -> Option<u8> {
    let captures = PROGRESS_PATTERN.captures(line)?;
    let value: u32 = captures.get(1)?.as_str().parse().ok()?;
    Some(value.min(100) as u8)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub job_id: JobId,
    pub target: MessageTarget,
    pub percent: u8,
    pub emitted_at: DateTime<Utc>,
}

impl ProgressEvent {
    pub fn new(job_id: JobId, target: MessageTarget, percent: u8) -> Self {
        Self {
            job_id,
            target,
            percent,
            emitted_at: Utc::now(),
        }
    }
}

/// Per-job gate: a value passes only if it is higher than the last forwarded one
/// and `min_interval` has elapsed since that forward.
#[derive(Debug)]
pub struct ProgressThrottle {
    min_interval: Duration,
    last_forwarded: Option<(Instant, u8)>,
}

impl ProgressThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_forwarded: None,
        }
    }

    pub fn admit(&mut self, percent: u8, now: Instant) -> bool {
        if let Some((at, last_percent)) = self.last_forwarded {
            if percent <= last_percent {
                return false;
            }
            if now.saturating_duration_since(at) < self.min_interval {
                return false;
            }
        }
        self.last_forwarded = Some((now, percent));
        true
    }

    pub fn last_forwarded(&self) -> Option<u8> {
        self.last_forwarded.map(|(_, percent)| percent)
    }
}
