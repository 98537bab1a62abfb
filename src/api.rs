//! Client of the booking server REST API.

mod endpoint;
mod models;
mod time;

use std::time::Duration;

use async_trait::async_trait;
use http::{HeaderMap, HeaderValue, Method, header};
use reqwest::{Client, Url};
use serde::{Serialize, de::DeserializeOwned};

pub use self::{
    endpoint::{Endpoint, Mode},
    models::{Page, Room},
};
use crate::{
    api::models::{BookingResponse, CreateBookingRequest, ErrorResponse, MessageResponse},
    core::{
        booking::{Booking, BookingId, NewBooking, RoomId, UserId},
        store::BookingStore,
    },
    prelude::*,
};

pub struct Api {
    client: Client,
    base_url: Url,
}

impl Api {
    #[instrument(skip_all, fields(mode = ?endpoint.mode, host = %endpoint.host))]
    pub fn new(endpoint: &Endpoint) -> Result<Self> {
        let base_url = endpoint.base_url()?;
        let mut headers = HeaderMap::new();
        headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .user_agent("roomline")
            .timeout(Duration::from_secs(10))
            .default_headers(headers)
            .build()?;
        debug!(%base_url, "created the client");
        Ok(Self { client, base_url })
    }

    #[instrument(skip_all)]
    pub async fn get_rooms(&self) -> Result<Vec<Room>> {
        let rooms: Vec<Room> = self.call(Method::GET, "rooms/", None::<&()>).await?;
        info!(n_rooms = rooms.len(), "fetched");
        Ok(rooms)
    }

    #[instrument(skip_all, fields(skip = page.skip, limit = page.limit))]
    pub async fn get_bookings(&self, page: Page) -> Result<Vec<Booking>> {
        let path = format!("bookings/?{}", serde_qs::to_string(&page)?);
        let bookings: Vec<BookingResponse> = self.call(Method::GET, &path, None::<&()>).await?;
        info!(n_bookings = bookings.len(), "fetched");
        Ok(bookings.into_iter().map(Booking::from).collect())
    }

    /// All bookings made by the user, in any room and with any status.
    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn get_user_bookings(&self, user_id: UserId) -> Result<Vec<Booking>> {
        let path = format!("bookings/user/{user_id}");
        let bookings: Vec<BookingResponse> = self.call(Method::GET, &path, None::<&()>).await?;
        info!(n_bookings = bookings.len(), "fetched");
        Ok(bookings.into_iter().map(Booking::from).collect())
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(method = %method, path = path))]
    async fn call<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base_url.join(path).with_context(|| format!("invalid path `{path}`"))?;
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response =
            request.send().await.with_context(|| format!("failed to call `{path}`"))?;
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorResponse>()
                .await
                .map_or_else(|_| String::from("no details"), |error| error.to_string());
            bail!("`{path}` failed with {status}: {detail}");
        }
        response
            .json::<R>()
            .await
            .with_context(|| format!("failed to deserialize `{path}` response JSON"))
    }
}

#[async_trait]
impl BookingStore for Api {
    #[instrument(skip_all, fields(room_id = %room_id))]
    async fn list_for_room(&self, room_id: RoomId) -> Result<Vec<Booking>> {
        let path = format!("bookings/room/{room_id}");
        let bookings: Vec<BookingResponse> = self.call(Method::GET, &path, None::<&()>).await?;
        info!(n_bookings = bookings.len(), "fetched");
        Ok(bookings.into_iter().map(Booking::from).collect())
    }

    #[instrument(skip_all, fields(booking_id = %booking_id))]
    async fn get(&self, booking_id: BookingId) -> Result<Booking> {
        let path = format!("bookings/{booking_id}");
        self.call::<_, BookingResponse>(Method::GET, &path, None::<&()>).await.map(Booking::from)
    }

    #[instrument(skip_all, fields(room_id = %booking.room_id, user_id = %booking.user_id))]
    async fn create(&self, booking: &NewBooking) -> Result<Booking> {
        info!(start = %booking.interval.start, end = %booking.interval.end, "creating…");
        let request = CreateBookingRequest::from(booking);
        self.call::<_, BookingResponse>(Method::POST, "bookings/", Some(&request))
            .await
            .map(Booking::from)
            .context("failed to create the booking")
    }

    #[instrument(skip_all, fields(booking_id = %booking_id))]
    async fn cancel(&self, booking_id: BookingId) -> Result {
        let path = format!("bookings/{booking_id}/cancel");
        let response: MessageResponse = self
            .call(Method::PUT, &path, None::<&()>)
            .await
            .context("failed to cancel the booking")?;
        info!(response = %response.message, "cancelled");
        Ok(())
    }
}
