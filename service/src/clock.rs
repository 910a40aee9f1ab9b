//! Time source
//!
//! Local dates are resolved here, outside the pure aggregators, so the
//! tracker can be driven by a fixed clock in tests.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current instant, epoch milliseconds
    fn now_ms(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Today's local date
    fn today(&self, offset: FixedOffset) -> NaiveDate {
        self.now().with_timezone(&offset).date_naive()
    }
}

/// Local calendar date of an epoch-millisecond timestamp
///
/// `None` when the instant cannot be represented.
pub fn local_date(timestamp_ms: i64, offset: FixedOffset) -> Option<NaiveDate> {
    offset
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|local| local.date_naive())
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Pin to an epoch-millisecond instant; `None` if it is out of range
    pub fn at_millis(now_ms: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(now_ms).single().map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
