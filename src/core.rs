pub mod availability;
pub mod booking;
pub mod clock;
pub mod interval;
pub mod notifier;
pub mod selection;
pub mod store;
pub mod timeline;
