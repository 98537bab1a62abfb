//! Interactive selection of a time slot on the timeline.
//!
//! The first click fixes the anchor, pointer moves preview the span, and the second click
//! either commits the span or rejects it and starts over.

use chrono::{DateTime, Local, NaiveDate, TimeDelta};

use crate::{
    core::{
        availability::{Availability, Conflict},
        clock::Clock,
        interval::Interval,
        notifier::Notifier,
        timeline::{
            MIN_BOOKING_DURATION_MINUTES,
            Position,
            min_booking_duration,
            position_to_instant,
        },
    },
    prelude::*,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Idle,

    AwaitingSecondClick { anchor: DateTime<Local> },

    /// Awaiting the second click while the pointer hovers over the track.
    Previewing { anchor: DateTime<Local>, hover: DateTime<Local> },

    Committed(Interval),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Rejection {
    #[display("the booking lasts {} minutes only", _0.num_minutes())]
    TooShort(TimeDelta),

    #[display("{_0}")]
    Conflict(Conflict),
}

/// Result of a click on the track.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Click {
    Anchored(DateTime<Local>),
    Committed(Interval),
    Rejected(Rejection),
}

#[must_use]
pub struct Selection {
    day: NaiveDate,
    state: State,
}

impl Selection {
    pub const fn new(day: NaiveDate) -> Self {
        Self { day, state: State::Idle }
    }

    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        self.day
    }

    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub const fn committed(&self) -> Option<Interval> {
        match self.state {
            State::Committed(interval) => Some(interval),
            _ => None,
        }
    }

    /// Span between the anchor and the hovered instant.
    #[must_use]
    pub fn preview(&self) -> Option<Interval> {
        match self.state {
            State::Previewing { anchor, hover } => Some(Interval::ordered(anchor, hover)),
            _ => None,
        }
    }

    /// Handle a click on the track.
    ///
    /// The availability must be derived for the selection day. The candidate is validated
    /// against the clock reading at the time of the second click.
    #[instrument(skip_all, fields(day = %self.day, x = position.x))]
    pub fn click(
        &mut self,
        position: Position,
        availability: &Availability,
        clock: &impl Clock,
        notifier: &impl Notifier,
    ) -> Click {
        debug_assert_eq!(availability.day, self.day);
        let instant = position_to_instant(position, self.day);

        let anchor = match self.state {
            State::Idle | State::Committed(_) => {
                self.state = State::AwaitingSecondClick { anchor: instant };
                debug!(%instant, "anchored");
                notifier.info("click the second point to finish the selection");
                return Click::Anchored(instant);
            }
            State::AwaitingSecondClick { anchor } | State::Previewing { anchor, .. } => anchor,
        };

        let candidate = Interval::ordered(anchor, instant);
        if candidate.duration() < min_booking_duration() {
            self.reset();
            notifier.warn(&format!(
                "a booking must last at least {MIN_BOOKING_DURATION_MINUTES} minutes"
            ));
            return Click::Rejected(Rejection::TooShort(candidate.duration()));
        }

        match availability.validate(candidate, clock.now()) {
            Ok(()) => {
                self.state = State::Committed(candidate);
                info!(?candidate, "committed");
                Click::Committed(candidate)
            }
            Err(conflict) => {
                self.reset();
                debug!(?candidate, %conflict, "rejected");
                notifier.warn("the selected time conflicts with the schedule, please select again");
                Click::Rejected(Rejection::Conflict(conflict))
            }
        }
    }

    /// Handle a pointer move over the track.
    pub fn hover(&mut self, position: Position) {
        if let State::AwaitingSecondClick { anchor } | State::Previewing { anchor, .. } = self.state
        {
            let hover = position_to_instant(position, self.day);
            self.state = State::Previewing { anchor, hover };
        }
    }

    /// Handle the pointer leaving the track.
    pub const fn leave(&mut self) {
        if let State::Previewing { anchor, .. } = self.state {
            self.state = State::AwaitingSecondClick { anchor };
        }
    }

    /// Drop any selection progress.
    pub const fn reset(&mut self) {
        self.state = State::Idle;
    }

    /// Switch the view to another day, which always drops the selection.
    #[allow(dead_code)]
    pub const fn change_day(&mut self, day: NaiveDate) {
        self.day = day;
        self.reset();
    }
}
