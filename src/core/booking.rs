use std::fmt::{Display, Formatter};

use bon::Builder;
use comfy_table::Color;
use enumset::{EnumSet, enum_set};
use serde::{Deserialize, Serialize};

use crate::core::interval::Interval;

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct BookingId(pub u64);

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct RoomId(pub u64);

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

#[derive(Debug, Hash, Serialize, Deserialize, enumset::EnumSetType)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting confirmation.
    Pending,

    Confirmed,

    /// Read-only historical record, never blocks a time slot.
    Cancelled,
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Confirmed => write!(f, "Confirmed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl BookingStatus {
    /// Statuses which occupy their time slot.
    pub const ACTIVE: EnumSet<Self> = enum_set!(BookingStatus::Pending | BookingStatus::Confirmed);

    #[must_use]
    pub fn is_active(self) -> bool {
        Self::ACTIVE.contains(self)
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Pending => Color::DarkYellow,
            Self::Confirmed => Color::Green,
            Self::Cancelled => Color::DarkGrey,
        }
    }
}

#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub user_id: UserId,
    pub interval: Interval,
    pub purpose: Option<String>,

    #[builder(default = BookingStatus::Confirmed)]
    pub status: BookingStatus,
}

impl Booking {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Reservation request for a committed selection.
#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct NewBooking {
    pub room_id: RoomId,
    pub user_id: UserId,
    pub interval: Interval,
    pub purpose: Option<String>,
}
