use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    core::booking::{Booking, BookingId, NewBooking, RoomId},
    prelude::*,
};

/// Persistent storage of the reservations.
#[async_trait]
pub trait BookingStore: Sync {
    /// All bookings of the room, cancelled ones included.
    async fn list_for_room(&self, room_id: RoomId) -> Result<Vec<Booking>>;

    async fn get(&self, booking_id: BookingId) -> Result<Booking>;

    async fn create(&self, booking: &NewBooking) -> Result<Booking>;

    async fn cancel(&self, booking_id: BookingId) -> Result;

    /// Bookings of the room which start on the calendar day.
    #[instrument(skip_all, fields(room_id = %room_id, on = %on))]
    async fn list_for_day(&self, room_id: RoomId, on: NaiveDate) -> Result<Vec<Booking>> {
        let mut bookings = self.list_for_room(room_id).await?;
        bookings.retain(|booking| booking.interval.start.date_naive() == on);
        debug!(n_bookings = bookings.len(), "filtered");
        Ok(bookings)
    }
}

#[cfg(test)]
pub mod memory {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::core::booking::BookingStatus;

    /// Store backed by a vector, counting the cancellation calls.
    #[derive(Default)]
    pub struct MemoryStore {
        pub bookings: Mutex<Vec<Booking>>,
        pub n_cancels: AtomicUsize,
    }

    #[async_trait]
    impl BookingStore for MemoryStore {
        async fn list_for_room(&self, room_id: RoomId) -> Result<Vec<Booking>> {
            let bookings = self.bookings.lock().unwrap();
            Ok(bookings.iter().filter(|booking| booking.room_id == room_id).cloned().collect())
        }

        async fn get(&self, booking_id: BookingId) -> Result<Booking> {
            let bookings = self.bookings.lock().unwrap();
            bookings
                .iter()
                .find(|booking| booking.id == booking_id)
                .cloned()
                .with_context(|| format!("booking #{booking_id} does not exist"))
        }

        async fn create(&self, booking: &NewBooking) -> Result<Booking> {
            let mut bookings = self.bookings.lock().unwrap();
            let booking = Booking::builder()
                .id(BookingId(bookings.len() as u64 + 1))
                .room_id(booking.room_id)
                .user_id(booking.user_id)
                .interval(booking.interval)
                .maybe_purpose(booking.purpose.clone())
                .build();
            bookings.push(booking.clone());
            Ok(booking)
        }

        async fn cancel(&self, booking_id: BookingId) -> Result {
            self.n_cancels.fetch_add(1, Ordering::Relaxed);
            let mut bookings = self.bookings.lock().unwrap();
            let booking = bookings
                .iter_mut()
                .find(|booking| booking.id == booking_id)
                .context("no such booking")?;
            ensure!(booking.is_active(), "already cancelled");
            booking.status = BookingStatus::Cancelled;
            Ok(())
        }
    }
}
