use std::fmt::{Debug, Display, Formatter};

use chrono::TimeDelta;

use crate::core::interval::Interval;

pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Whole hours and the remaining minutes, zero components omitted.
#[derive(Copy, Clone)]
pub struct DurationLabel(pub TimeDelta);

impl From<Interval> for DurationLabel {
    fn from(interval: Interval) -> Self {
        Self(interval.duration())
    }
}

impl Display for DurationLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let minutes = self.0.num_minutes().max(0);
        let (hours, minutes) = (minutes / 60, minutes % 60);
        match (hours, minutes) {
            (0, minutes) => write!(f, "{minutes}m"),
            (hours, 0) => write!(f, "{hours}h"),
            (hours, minutes) => write!(f, "{hours}h {minutes}m"),
        }
    }
}

/// Human-readable booking time for confirmations.
pub struct BookingTimeLabel(pub Interval);

impl Display for BookingTimeLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}–{} ({} min)",
            self.0.start.format("%Y-%m-%d (%A)"),
            self.0.start.format("%H:%M"),
            self.0.end.format("%H:%M"),
            self.0.duration().num_minutes(),
        )
    }
}
