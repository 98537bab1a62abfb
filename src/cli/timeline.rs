use clap::Parser;

use crate::{
    cli::ViewArgs,
    core::{
        availability::Availability,
        booking::Booking,
        clock::Clock,
        store::BookingStore,
    },
    prelude::*,
    tables::{build_bookings_table, build_occupancy_strip},
};

#[derive(Parser)]
pub struct TimelineArgs {
    #[clap(flatten)]
    pub view: ViewArgs,
}

/// Print the room bookings of the day and its occupancy strip.
#[instrument(skip_all, fields(room_id = %args.view.room_id))]
pub async fn timeline(
    args: &TimelineArgs,
    store: &impl BookingStore,
    clock: &impl Clock,
) -> Result<Availability> {
    let day = args.view.day(clock);
    let bookings = store.list_for_day(args.view.room_id, day).await?;
    let availability = Availability::derive(day, &bookings, clock.now());
    info!(
        %day,
        n_bookings = bookings.len(),
        n_active = bookings.iter().filter(|booking| booking.is_active()).count(),
        "loaded",
    );
    if !bookings.is_empty() {
        println!("{}", build_bookings_table(&bookings));
    }
    println!("{}", build_occupancy_strip(&availability, None));
    Ok(availability)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{DateTime, Local, TimeZone};

    use super::*;
    use crate::core::{
        booking::{BookingId, BookingStatus, NewBooking, RoomId, UserId},
        clock::FixedClock,
        interval::Interval,
    };

    struct StaticStore(Vec<Booking>);

    #[async_trait]
    impl BookingStore for StaticStore {
        async fn list_for_room(&self, room_id: RoomId) -> Result<Vec<Booking>> {
            Ok(self.0.iter().filter(|booking| booking.room_id == room_id).cloned().collect())
        }

        async fn get(&self, booking_id: BookingId) -> Result<Booking> {
            self.0.iter().find(|booking| booking.id == booking_id).cloned().context("not found")
        }

        async fn create(&self, _booking: &NewBooking) -> Result<Booking> {
            bail!("read-only")
        }

        async fn cancel(&self, _booking_id: BookingId) -> Result {
            bail!("read-only")
        }
    }

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, day, hour, minute, 0).unwrap()
    }

    fn booking(id: u64, room_id: u64, interval: Interval, status: BookingStatus) -> Booking {
        Booking::builder()
            .id(BookingId(id))
            .room_id(RoomId(room_id))
            .user_id(UserId(1))
            .interval(interval)
            .status(status)
            .build()
    }

    #[tokio::test]
    async fn timeline_ok() -> Result {
        let store = StaticStore(vec![
            booking(1, 1, Interval::new(at(1, 10, 0), at(1, 11, 0)), BookingStatus::Confirmed),
            booking(2, 1, Interval::new(at(1, 12, 0), at(1, 13, 0)), BookingStatus::Cancelled),
            booking(3, 1, Interval::new(at(2, 10, 0), at(2, 11, 0)), BookingStatus::Pending),
            booking(4, 2, Interval::new(at(1, 14, 0), at(1, 15, 0)), BookingStatus::Confirmed),
        ]);
        let args =
            TimelineArgs::try_parse_from(["timeline", "--room", "1", "--date", "2024-06-01"])?;

        let availability = timeline(&args, &store, &FixedClock(at(1, 9, 0))).await?;

        assert_eq!(availability.booked.len(), 1);
        assert_eq!(availability.booked[0].id, BookingId(1));
        assert_eq!(availability.past_block, Some(Interval::new(at(1, 0, 0), at(1, 9, 0))));
        Ok(())
    }

    #[tokio::test]
    async fn timeline_defaults_to_clock_day_ok() -> Result {
        let store = StaticStore(Vec::new());
        let args = TimelineArgs::try_parse_from(["timeline", "--room", "1"])?;

        let availability = timeline(&args, &store, &FixedClock(at(2, 9, 0))).await?;

        assert_eq!(availability.day, at(2, 0, 0).date_naive());
        Ok(())
    }
}
