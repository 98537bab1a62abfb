use clap::Parser;

use crate::{
    core::{booking::BookingId, store::BookingStore},
    fmt::BookingTimeLabel,
    prelude::*,
};

#[derive(Parser)]
pub struct CancelArgs {
    pub booking_id: BookingId,
}

#[instrument(skip_all, fields(booking_id = %args.booking_id))]
pub async fn cancel(args: &CancelArgs, store: &impl BookingStore) -> Result {
    let booking = store.get(args.booking_id).await?;
    info!(
        room_id = %booking.room_id,
        time = %BookingTimeLabel(booking.interval),
        status = %booking.status,
        "cancelling…",
    );
    ensure!(booking.is_active(), "booking #{} is already {}", booking.id, booking.status);
    store.cancel(booking.id).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use chrono::{Local, TimeZone};

    use super::*;
    use crate::core::{
        booking::{Booking, BookingStatus, RoomId, UserId},
        interval::Interval,
        store::memory::MemoryStore,
    };

    fn store_with(status: BookingStatus) -> MemoryStore {
        let booking = Booking::builder()
            .id(BookingId(7))
            .room_id(RoomId(1))
            .user_id(UserId(2))
            .interval(Interval::new(
                Local.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
                Local.with_ymd_and_hms(2024, 6, 1, 11, 0, 0).unwrap(),
            ))
            .status(status)
            .build();
        MemoryStore { bookings: vec![booking].into(), ..MemoryStore::default() }
    }

    #[tokio::test]
    async fn cancel_active_booking_ok() -> Result {
        let store = store_with(BookingStatus::Pending);
        let args = CancelArgs::try_parse_from(["cancel", "7"])?;

        cancel(&args, &store).await?;

        assert_eq!(store.get(BookingId(7)).await?.status, BookingStatus::Cancelled);
        assert_eq!(store.n_cancels.load(Ordering::Relaxed), 1);
        Ok(())
    }

    #[tokio::test]
    async fn cancel_cancelled_booking_err() -> Result {
        let store = store_with(BookingStatus::Cancelled);
        let args = CancelArgs::try_parse_from(["cancel", "7"])?;

        assert!(cancel(&args, &store).await.is_err());
        assert_eq!(store.n_cancels.load(Ordering::Relaxed), 0);
        Ok(())
    }

    #[tokio::test]
    async fn cancel_missing_booking_err() -> Result {
        let store = store_with(BookingStatus::Confirmed);
        let args = CancelArgs::try_parse_from(["cancel", "8"])?;

        assert!(cancel(&args, &store).await.is_err());
        assert_eq!(store.n_cancels.load(Ordering::Relaxed), 0);
        Ok(())
    }
}
