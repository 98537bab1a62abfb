//! Read model of a single timeline day: what is already taken and what has already passed.

use chrono::{DateTime, Local, NaiveDate};

use crate::core::{
    booking::{Booking, BookingId},
    interval::Interval,
    timeline::{day_end, day_start, same_day},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BookedSlot {
    pub id: BookingId,
    pub interval: Interval,
}

/// Reason a candidate interval cannot be booked.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Conflict {
    #[display("the interval is empty")]
    Empty,

    #[display("the interval starts in the past")]
    StartsInPast,

    #[display("the interval overlaps the elapsed part of the day")]
    ElapsedTime,

    #[display("the interval overlaps booking #{_0}")]
    Booking(BookingId),
}

#[must_use]
#[derive(Clone, Debug)]
pub struct Availability {
    pub day: NaiveDate,

    /// Elapsed part of the day, if any.
    pub past_block: Option<Interval>,

    /// Active bookings starting on the day.
    pub booked: Vec<BookedSlot>,
}

impl Availability {
    pub fn derive<'a>(
        day: NaiveDate,
        bookings: impl IntoIterator<Item = &'a Booking>,
        now: DateTime<Local>,
    ) -> Self {
        Self { day, past_block: past_block(day, now), booked: booked_slots(day, bookings) }
    }

    pub fn validate(&self, candidate: Interval, now: DateTime<Local>) -> Result<(), Conflict> {
        validate(candidate, now, self.past_block, &self.booked)
    }
}

/// Active bookings whose start falls on the calendar day.
#[must_use]
pub fn booked_slots<'a>(
    day: NaiveDate,
    bookings: impl IntoIterator<Item = &'a Booking>,
) -> Vec<BookedSlot> {
    bookings
        .into_iter()
        .filter(|booking| booking.is_active() && booking.interval.start.date_naive() == day)
        .map(|booking| BookedSlot { id: booking.id, interval: booking.interval })
        .collect()
}

/// Elapsed part of the day: up to now for today, the whole day for a past day, none otherwise.
#[must_use]
pub fn past_block(day: NaiveDate, now: DateTime<Local>) -> Option<Interval> {
    let start = day_start(day);
    if same_day(start, now) {
        Some(Interval::new(start, now))
    } else if start < now {
        Some(Interval::new(start, day_end(day)))
    } else {
        None
    }
}

/// Check the candidate against the clock, the elapsed time, and the booked slots, in that order.
pub fn validate(
    candidate: Interval,
    now: DateTime<Local>,
    past_block: Option<Interval>,
    booked: &[BookedSlot],
) -> Result<(), Conflict> {
    if candidate.is_empty() {
        return Err(Conflict::Empty);
    }
    if candidate.start < now {
        return Err(Conflict::StartsInPast);
    }
    if let Some(past_block) = past_block
        && candidate.overlaps(past_block)
    {
        return Err(Conflict::ElapsedTime);
    }
    match booked.iter().find(|slot| candidate.overlaps(slot.interval)) {
        Some(slot) => Err(Conflict::Booking(slot.id)),
        None => Ok(()),
    }
}
