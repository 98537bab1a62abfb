//! Geometry of the 24-hour booking timeline.
//!
//! The track is split into [`CELLS_PER_DAY`] cells of [`TIME_SLOT_UNIT_MINUTES`] each. Positions
//! on the track are converted into cell boundaries, and instants back into percentages of the
//! track for rendering.

use chrono::{
    DateTime,
    Local,
    MappedLocalTime,
    NaiveDate,
    NaiveDateTime,
    NaiveTime,
    TimeDelta,
    TimeZone,
};

use crate::core::interval::Interval;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

pub const TIME_SLOT_UNIT_MINUTES: i64 = 30;

pub const CELLS_PER_DAY: i64 = MINUTES_PER_DAY / TIME_SLOT_UNIT_MINUTES;

pub const MIN_BOOKING_DURATION_MINUTES: i64 = 30;

const LAST_MILLISECOND: NaiveTime = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap();

#[must_use]
pub const fn min_booking_duration() -> TimeDelta {
    TimeDelta::minutes(MIN_BOOKING_DURATION_MINUTES)
}

/// Horizontal pointer offset within the timeline track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub track_width: f64,
}

impl Position {
    pub const fn new(x: f64, track_width: f64) -> Self {
        Self { x, track_width }
    }

    /// Fraction of the track, clamped into `0.0..=1.0`.
    #[must_use]
    pub fn ratio(self) -> f64 {
        let ratio = self.x / self.track_width;
        if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 }
    }

    /// Index of the nearest cell boundary, the very end of the track excluded.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn cell(self) -> i64 {
        let cell = (self.ratio() * CELLS_PER_DAY as f64).round() as i64;
        cell.min(CELLS_PER_DAY - 1)
    }
}

/// Left offset and width of a rendered span, both in percent of the track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PercentSpan {
    pub left: f64,
    pub width: f64,
}

/// First instant of the calendar day.
#[must_use]
pub fn day_start(day: NaiveDate) -> DateTime<Local> {
    to_local(day.and_time(NaiveTime::MIN))
}

/// Last millisecond of the calendar day.
#[must_use]
pub fn day_end(day: NaiveDate) -> DateTime<Local> {
    to_local(day.and_time(LAST_MILLISECOND))
}

#[must_use]
pub fn same_day(lhs: DateTime<Local>, rhs: DateTime<Local>) -> bool {
    lhs.date_naive() == rhs.date_naive()
}

/// Quantize the pointer position to a cell boundary of the day.
#[must_use]
pub fn position_to_instant(position: Position, day: NaiveDate) -> DateTime<Local> {
    day_start(day) + TimeDelta::minutes(position.cell() * TIME_SLOT_UNIT_MINUTES)
}

/// Offset of the instant from the day start in percent of the day.
///
/// Not bounds-checked: instants outside the day yield values outside `0..=100`.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn instant_to_percent(instant: DateTime<Local>, day_start: DateTime<Local>) -> f64 {
    let minutes = (instant - day_start).num_milliseconds() as f64 / 60_000.0;
    minutes / MINUTES_PER_DAY as f64 * 100.0
}

#[must_use]
pub fn interval_to_percent_span(interval: Interval, day_start: DateTime<Local>) -> PercentSpan {
    let left = instant_to_percent(interval.start, day_start);
    let right = instant_to_percent(interval.end, day_start);
    PercentSpan { left, width: right - left }
}

/// Check whether the interval `a` collides with the interval `b`.
///
/// Either `a` starts inside `[b_start, b_end)`, ends inside `(b_start, b_end]`, or covers `b`.
/// Touching endpoints do not collide, so back-to-back bookings are allowed.
#[must_use]
pub fn overlaps<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    (a_start >= b_start && a_start < b_end)
        || (a_end > b_start && a_end <= b_end)
        || (a_start <= b_start && a_end >= b_end)
}

/// `HH:MM` of the cell start.
#[must_use]
pub fn cell_label(cell: i64) -> String {
    let minutes = cell * TIME_SLOT_UNIT_MINUTES;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn to_local(naive: NaiveDateTime) -> DateTime<Local> {
    match naive.and_local_timezone(Local) {
        MappedLocalTime::Single(timestamp) | MappedLocalTime::Ambiguous(timestamp, _) => timestamp,
        MappedLocalTime::None => {
            // Skipped by a DST transition:
            Local.from_utc_datetime(&naive)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::Timelike;

    use super::*;

    const DAY: NaiveDate = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn day_boundaries_ok() {
        assert_eq!(day_start(DAY), at(0, 0));
        let end = day_end(DAY);
        assert_eq!(end.date_naive(), DAY);
        assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
        assert_eq!(end.timestamp_subsec_millis(), 999);
    }

    #[test]
    fn same_day_compares_calendar_dates_ok() {
        assert!(same_day(at(0, 0), at(23, 59)));
        let next_midnight = day_end(DAY) + TimeDelta::milliseconds(1);
        assert!(!same_day(day_end(DAY), next_midnight));
    }

    #[test]
    fn position_to_instant_quantizes_ok() {
        // One pixel per minute:
        assert_eq!(position_to_instant(Position::new(630.0, 1440.0), DAY), at(10, 30));
        assert_eq!(position_to_instant(Position::new(640.0, 1440.0), DAY), at(10, 30));
        assert_eq!(position_to_instant(Position::new(650.0, 1440.0), DAY), at(11, 0));
        assert_eq!(position_to_instant(Position::new(360.0, 960.0), DAY), at(9, 0));
    }

    #[test]
    fn position_to_instant_clamps_ok() {
        for x in [-1_000.0, -0.1, 1440.0, 1_439.9, 10_000.0, f64::INFINITY, f64::NAN] {
            let instant = position_to_instant(Position::new(x, 1440.0), DAY);
            assert!(instant >= day_start(DAY), "x={x}");
            assert!(instant <= day_start(DAY) + TimeDelta::minutes(1410), "x={x}");
        }
        assert_eq!(position_to_instant(Position::new(-5.0, 1440.0), DAY), at(0, 0));
        assert_eq!(position_to_instant(Position::new(5_000.0, 1440.0), DAY), at(23, 30));
        assert_eq!(position_to_instant(Position::new(10.0, 0.0), DAY), at(0, 0));
    }

    #[test]
    fn position_to_instant_is_cell_aligned_ok() {
        let start = day_start(DAY);
        for step in 0..=1_000 {
            let x = f64::from(step) * 0.777;
            let offset = position_to_instant(Position::new(x, 700.0), DAY) - start;
            assert_eq!(offset.num_minutes() % TIME_SLOT_UNIT_MINUTES, 0, "x={x}");
            assert_eq!(offset.num_seconds() % 60, 0, "x={x}");
        }
    }

    #[test]
    fn percent_is_monotonic_in_position_ok() {
        let start = day_start(DAY);
        let mut previous = f64::NEG_INFINITY;
        for step in -50..=1_100 {
            let x = f64::from(step);
            let instant = position_to_instant(Position::new(x, 1000.0), DAY);
            let percent = instant_to_percent(instant, start);
            assert!(percent >= previous, "x={x}");
            previous = percent;
        }
    }

    #[test]
    fn instant_to_percent_ok() {
        let start = day_start(DAY);
        assert_abs_diff_eq!(instant_to_percent(at(0, 0), start), 0.0);
        assert_abs_diff_eq!(instant_to_percent(at(12, 0), start), 50.0);
        assert_abs_diff_eq!(instant_to_percent(at(6, 0), start), 25.0);
    }

    #[test]
    fn interval_to_percent_span_ok() {
        let start = day_start(DAY);
        let span = interval_to_percent_span(Interval::new(at(6, 0), at(12, 0)), start);
        assert_abs_diff_eq!(span.left, 25.0);
        assert_abs_diff_eq!(span.width, 25.0);

        let degenerate = interval_to_percent_span(Interval::new(at(6, 0), at(6, 0)), start);
        assert_abs_diff_eq!(degenerate.width, 0.0);
    }

    #[test]
    fn overlaps_identical_ok() {
        assert!(overlaps(at(10, 0), at(11, 0), at(10, 0), at(11, 0)));
        assert!(overlaps(at(0, 0), at(23, 30), at(0, 0), at(23, 30)));
    }

    #[test]
    fn overlaps_back_to_back_ok() {
        assert!(!overlaps(at(10, 0), at(11, 0), at(11, 0), at(12, 0)));
        assert!(!overlaps(at(10, 0), at(11, 0), at(9, 0), at(10, 0)));
    }

    #[test]
    fn overlaps_partial_and_containment_ok() {
        assert!(overlaps(at(10, 30), at(11, 30), at(10, 0), at(11, 0)));
        assert!(overlaps(at(9, 30), at(10, 30), at(10, 0), at(11, 0)));
        assert!(overlaps(at(9, 0), at(12, 0), at(10, 0), at(11, 0)));
        assert!(overlaps(at(10, 15), at(10, 45), at(10, 0), at(11, 0)));
        assert!(!overlaps(at(12, 0), at(13, 0), at(10, 0), at(11, 0)));
    }

    #[test]
    fn cell_label_ok() {
        assert_eq!(cell_label(0), "00:00");
        assert_eq!(cell_label(21), "10:30");
        assert_eq!(cell_label(CELLS_PER_DAY - 1), "23:30");
    }
}
