mod book;
mod cancel;
mod timeline;

use chrono::{DateTime, Local, NaiveDate};
use clap::{Parser, Subcommand};

pub use self::{
    book::{BookArgs, book},
    cancel::{CancelArgs, cancel},
    timeline::{TimelineArgs, timeline},
};
use crate::{
    api::{Api, Endpoint, Mode},
    core::{
        booking::{RoomId, UserId},
        clock::{Clock, FixedClock, SystemClock},
    },
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the meeting rooms.
    #[clap(name = "rooms")]
    Rooms,

    /// List all bookings page by page, or the bookings of one user.
    #[clap(name = "bookings")]
    Bookings(BookingsArgs),

    /// Show the day timeline of a room.
    #[clap(name = "timeline")]
    Timeline(TimelineArgs),

    /// Select a time slot by clicking on the timeline track, and book it.
    #[clap(name = "book")]
    Book(Box<BookArgs>),

    /// Cancel a booking.
    #[clap(name = "cancel")]
    Cancel(CancelArgs),
}

#[derive(Parser)]
pub struct ApiArgs {
    #[clap(long = "api-mode", env = "API_MODE", value_enum, default_value_t)]
    pub mode: Mode,

    #[clap(long = "api-host", env = "API_HOST", default_value = "localhost")]
    pub host: String,

    /// Server port, `8000` in the development mode by default.
    #[clap(long = "api-port", env = "API_PORT")]
    pub port: Option<u16>,
}

impl ApiArgs {
    pub fn new_client(&self) -> Result<Api> {
        let endpoint = Endpoint::builder()
            .mode(self.mode)
            .host(self.host.as_str())
            .maybe_port(self.port)
            .build();
        Api::new(&endpoint)
    }
}

#[derive(Copy, Clone, Parser)]
pub struct BookingsArgs {
    #[clap(long, default_value = "0")]
    pub skip: u32,

    #[clap(long, default_value = "100")]
    pub limit: u32,

    /// Only the bookings made by the user, the pagination is ignored then.
    #[clap(long = "user")]
    pub user_id: Option<UserId>,
}

/// Room and day of the timeline view.
#[derive(Parser)]
pub struct ViewArgs {
    #[clap(long = "room", env = "ROOM_ID")]
    pub room_id: RoomId,

    /// Day of the timeline, today by default.
    #[clap(long)]
    pub date: Option<NaiveDate>,

    /// Pretend that the current time is this instant, for example: `2024-06-01T14:10:00+02:00`.
    #[clap(long)]
    pub now: Option<DateTime<Local>>,
}

impl ViewArgs {
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.now {
            Some(now) => Box::new(FixedClock(now)),
            None => Box::new(SystemClock),
        }
    }

    #[must_use]
    pub fn day(&self, clock: &impl Clock) -> NaiveDate {
        self.date.unwrap_or_else(|| clock.now().date_naive())
    }
}
