use chrono::TimeDelta;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    api::Room,
    core::{
        availability::Availability,
        booking::Booking,
        interval::Interval,
        timeline::{
            CELLS_PER_DAY,
            TIME_SLOT_UNIT_MINUTES,
            cell_label,
            day_start,
            interval_to_percent_span,
        },
    },
    fmt::{DurationLabel, FormattedPercentage},
};

pub fn build_rooms_table(rooms: &[Room]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec!["ID", "Name", "Location", "Capacity", "Description"]);
    for room in rooms {
        table.add_row(vec![
            Cell::new(room.id).add_attribute(Attribute::Dim),
            Cell::new(&room.name).fg(if room.is_available { Color::Green } else { Color::Red }),
            Cell::new(&room.location),
            Cell::new(room.capacity).set_alignment(CellAlignment::Right),
            Cell::new(room.description.as_deref().unwrap_or_default())
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_bookings_table(bookings: &[Booking]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec![
            "ID", "Room", "Date", "Start", "End", "Duration", "Status", "Left", "Width", "Purpose",
        ]);
    for booking in bookings.iter().sorted_by_key(|booking| booking.interval.start) {
        let span = interval_to_percent_span(
            booking.interval,
            day_start(booking.interval.start.date_naive()),
        );
        table.add_row(vec![
            Cell::new(booking.id).add_attribute(Attribute::Dim),
            Cell::new(booking.room_id),
            Cell::new(booking.interval.start.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(booking.interval.start.format("%H:%M")),
            Cell::new(booking.interval.end.format("%H:%M")),
            Cell::new(DurationLabel::from(booking.interval)).set_alignment(CellAlignment::Right),
            Cell::new(booking.status).fg(booking.status.color()),
            Cell::new(FormattedPercentage(span.left)).set_alignment(CellAlignment::Right),
            Cell::new(FormattedPercentage(span.width)).set_alignment(CellAlignment::Right),
            Cell::new(booking.purpose.as_deref().unwrap_or_default()),
        ]);
    }
    table
}

/// One character per cell: `░` elapsed, `█` booked, `▓` selected, `·` free.
#[must_use]
pub fn build_occupancy_strip(availability: &Availability, selected: Option<Interval>) -> String {
    let start = day_start(availability.day);
    let cells = (0..CELLS_PER_DAY).map(|cell| {
        let cell_start = start + TimeDelta::minutes(cell * TIME_SLOT_UNIT_MINUTES);
        let cell_end = cell_start + TimeDelta::minutes(TIME_SLOT_UNIT_MINUTES);
        let cell = Interval::new(cell_start, cell_end);
        if selected.is_some_and(|selected| cell.overlaps(selected)) {
            '▓'
        } else if availability.booked.iter().any(|slot| cell.overlaps(slot.interval)) {
            '█'
        } else if availability.past_block.is_some_and(|past_block| cell.overlaps(past_block)) {
            '░'
        } else {
            '·'
        }
    });
    format!("{} {} {}", cell_label(0), cells.collect::<String>(), cell_label(CELLS_PER_DAY - 1))
}
