use appraisr_common::estate::RoomSurface;
use colored::*;

use crate::terminal::colors;

pub fn surface(value: f64, precision: usize) -> ColoredString {
    format!("{value:.precision$}").color(colors::SURFACE)
}

pub fn price(value: f64, precision: usize) -> ColoredString {
    format!("$ {value:.precision$}").color(colors::PRICE).bold()
}

/// Key/value pairs for the room breakdown. The first entry equal to `largest` is marked.
pub fn room_pairs(
    rooms: &[RoomSurface],
    largest: Option<&RoomSurface>,
    precision: usize,
) -> Vec<(String, ColoredString)> {
    let mut marked = false;
    rooms
        .iter()
        .map(|room| {
            let mut value = surface(room.surface, precision);
            if !marked && largest == Some(room) {
                marked = true;
                value = format!("{} {}", value, "(largest)".color(colors::ACCENT)).normal();
            }
            (room.name.clone(), value)
        })
        .collect()
}
