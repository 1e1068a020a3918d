use chrono::{Local, NaiveTime, Timelike};

/// Source of wall-clock time for message timestamps.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Local wall clock. No date, no timezone label.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Render as en-US `h:mm AM/PM`, e.g. `3:47 PM`.
pub fn format_time(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    let suffix = if pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, time.minute(), suffix)
}

#[cfg(test)]
pub(crate) struct FixedClock(pub NaiveTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
