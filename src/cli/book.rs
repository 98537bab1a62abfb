use clap::Parser;

use crate::{
    cli::ViewArgs,
    core::{
        availability::Availability,
        booking::{Booking, NewBooking, UserId},
        clock::Clock,
        notifier::Notifier,
        selection::{Click, Selection},
        store::BookingStore,
        timeline::Position,
    },
    fmt::{BookingTimeLabel, DurationLabel},
    prelude::*,
    tables::build_occupancy_strip,
};

#[derive(Parser)]
pub struct BookArgs {
    #[clap(flatten)]
    pub view: ViewArgs,

    #[clap(long = "user", env = "USER_ID")]
    pub user_id: UserId,

    /// Timeline track width in pixels.
    #[clap(long, default_value = "960")]
    pub track_width: f64,

    /// Click offsets on the track in pixels, in the order of clicking.
    #[clap(
        long = "click",
        required = true,
        value_delimiter = ',',
        num_args = 1..,
        allow_negative_numbers = true
    )]
    pub clicks: Vec<f64>,

    /// Pointer offset after the clicks, previews an unfinished selection.
    #[clap(long, allow_negative_numbers = true)]
    pub hover: Option<f64>,

    #[clap(long)]
    pub purpose: Option<String>,

    /// Do not create the booking, only check the selection (dry run).
    #[clap(long)]
    pub scout: bool,
}

/// Replay the clicks on the room timeline and book the committed selection.
#[instrument(skip_all, fields(room_id = %args.view.room_id, user_id = %args.user_id))]
pub async fn book(
    args: &BookArgs,
    store: &impl BookingStore,
    clock: &impl Clock,
    notifier: &impl Notifier,
) -> Result<Option<Booking>> {
    let day = args.view.day(clock);
    let bookings = store.list_for_day(args.view.room_id, day).await?;
    let availability = Availability::derive(day, &bookings, clock.now());

    let mut selection = Selection::new(day);
    for &x in &args.clicks {
        match selection.click(Position::new(x, args.track_width), &availability, clock, notifier) {
            Click::Anchored(anchor) => debug!(x, %anchor, "anchored"),
            Click::Committed(interval) => debug!(x, ?interval, "committed"),
            Click::Rejected(rejection) => debug!(x, %rejection, "rejected"),
        }
    }
    match args.hover {
        Some(x) => selection.hover(Position::new(x, args.track_width)),
        None => selection.leave(),
    }
    debug!(day = %selection.day(), state = ?selection.state(), "replayed");
    println!(
        "{}",
        build_occupancy_strip(&availability, selection.committed().or_else(|| selection.preview())),
    );

    let Some(interval) = selection.committed() else {
        let preview = selection.preview().context("no time slot has been selected")?;
        info!(time = %BookingTimeLabel(preview), "previewing, not booking");
        return Ok(None);
    };
    info!(
        time = %BookingTimeLabel(interval),
        duration = %DurationLabel::from(interval),
        "selected",
    );

    if args.scout {
        info!("scouting, not booking");
        return Ok(None);
    }
    let request = NewBooking::builder()
        .room_id(args.view.room_id)
        .user_id(args.user_id)
        .interval(interval)
        .maybe_purpose(args.purpose.clone())
        .build();
    let booking = store.create(&request).await?;
    info!(booking_id = %booking.id, status = %booking.status, "booked");
    Ok(Some(booking))
}
