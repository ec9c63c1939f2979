// Display helpers derived from query results: result counts, amenity
// previews, prices and the detail text shown when a hotel is selected.

use std::fmt;

use crate::hotel::Hotel;

pub const CARD_AMENITY_LIMIT: usize = 3;

pub fn results_label(count: usize) -> String {
    if count == 1 {
        "1 hotel encontrado".to_string()
    } else {
        format!("{} hoteles encontrados", count)
    }
}

pub const PRICE_FRACTION_DIGITS: u32 = 3;

// Formats a nightly price the way es-MX locale formatting does: comma
// thousands separators, a dot before the fraction, at most three fraction
// digits with trailing zeros dropped. `2500.5` becomes `$2,500.5`.
pub fn format_price(amount: f64) -> String {
    let scale = 10u64.pow(PRICE_FRACTION_DIGITS);
    let scaled = (amount.max(0.0) * scale as f64).round() as u64;
    let digits = (scaled / scale).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let fraction = format!(
        "{:0width$}",
        scaled % scale,
        width = PRICE_FRACTION_DIGITS as usize
    );
    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    format!("${}", grouped)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmenityPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl<'a> AmenityPreview<'a> {
    pub fn of(hotel: &'a Hotel, limit: usize) -> Self {
        let shown_len = hotel.amenities.len().min(limit);
        Self {
            shown: &hotel.amenities[..shown_len],
            hidden: hotel.amenities.len() - shown_len,
        }
    }

    // The "+N" badge, if anything was cut off.
    pub fn overflow_badge(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{}", self.hidden))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotelDetail<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price_per_night: f64,
    pub available_rooms: u32,
}

impl<'a> From<&'a Hotel> for HotelDetail<'a> {
    fn from(hotel: &'a Hotel) -> Self {
        Self {
            name: &hotel.name,
            description: &hotel.description,
            price_per_night: hotel.price_per_night,
            available_rooms: hotel.available_rooms,
        }
    }
}

impl fmt::Display for HotelDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\nPrecio: {} / noche\n\nHabitaciones disponibles: {}",
            self.description,
            format_price(self.price_per_night),
            self.available_rooms
        )
    }
}
