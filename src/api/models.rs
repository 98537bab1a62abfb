use std::fmt::{Display, Formatter};

use bon::Builder;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::{
    api::time::ServerTime,
    core::{
        booking::{Booking, BookingId, BookingStatus, NewBooking, RoomId, UserId},
        interval::Interval,
    },
};

#[must_use]
#[derive(Clone, Debug, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub location: String,
    pub capacity: u32,

    #[serde(default)]
    pub description: Option<String>,

    pub is_available: bool,
}

#[serde_as]
#[derive(Deserialize)]
pub struct BookingResponse {
    id: BookingId,
    room_id: RoomId,
    user_id: UserId,

    #[serde_as(as = "ServerTime")]
    start_time: DateTime<Local>,

    #[serde_as(as = "ServerTime")]
    end_time: DateTime<Local>,

    #[serde(default)]
    purpose: Option<String>,

    status: BookingStatus,
}

impl From<BookingResponse> for Booking {
    fn from(response: BookingResponse) -> Self {
        Self {
            id: response.id,
            room_id: response.room_id,
            user_id: response.user_id,
            interval: Interval::new(response.start_time, response.end_time),
            purpose: response.purpose,
            status: response.status,
        }
    }
}

#[serde_as]
#[derive(Serialize)]
pub struct CreateBookingRequest<'a> {
    room_id: RoomId,
    user_id: UserId,

    #[serde_as(as = "ServerTime")]
    start_time: DateTime<Local>,

    #[serde_as(as = "ServerTime")]
    end_time: DateTime<Local>,

    #[serde(skip_serializing_if = "Option::is_none")]
    purpose: Option<&'a str>,
}

impl<'a> From<&'a NewBooking> for CreateBookingRequest<'a> {
    fn from(booking: &'a NewBooking) -> Self {
        Self {
            room_id: booking.room_id,
            user_id: booking.user_id,
            start_time: booking.interval.start,
            end_time: booking.interval.end,
            purpose: booking.purpose.as_deref(),
        }
    }
}

/// Pagination of the full booking list.
#[derive(Copy, Clone, Serialize, Builder)]
pub struct Page {
    #[builder(default)]
    pub skip: u32,

    #[builder(default = 100)]
    pub limit: u32,
}

#[derive(Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body of a rejected request.
#[derive(Deserialize)]
pub struct ErrorResponse {
    /// Either a plain message or a list of validation errors.
    detail: serde_json::Value,
}

impl Display for ErrorResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            serde_json::Value::String(message) => write!(f, "{message}"),
            detail => write!(f, "{detail}"),
        }
    }
}
