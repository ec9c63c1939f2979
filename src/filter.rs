// Client-side filter chain applied to catalog records

use crate::hotel::{Hotel, HotelFilters};

impl HotelFilters {
    pub fn new() -> Self {
        Self::default()
    }

    // Applies a raw search-box value: trimmed, and blank input clears the
    // location constraint. Other criteria are kept as they are.
    pub fn with_location(mut self, input: &str) -> Self {
        let trimmed = input.trim();
        self.location = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_guests(mut self, guests: u32) -> Self {
        self.guests = Some(guests);
        self
    }

    // True when no criterion is set at all, including the inert date fields.
    // A blank search leaves `location` as `None`, so it counts as empty here.
    // Text typed into a search box but not yet applied is not part of the
    // filters; callers showing a "clear" control check that text themselves.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    // Rooms a hotel must have free for the requested guests, two guests per
    // room rounded up. `None` when guests is absent or zero.
    pub fn min_rooms(&self) -> Option<u32> {
        self.guests
            .filter(|&guests| guests > 0)
            .map(|guests| guests.div_ceil(2))
    }

    // Predicates run in a fixed order: location, min price, max price,
    // min rating, room threshold.
    pub fn matches(&self, hotel: &Hotel) -> bool {
        let location_ok = self
            .location
            .as_deref()
            .filter(|needle| !needle.is_empty())
            .map_or(true, |needle| {
                hotel
                    .location
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
            });

        let min_price_ok = self
            .min_price
            .map_or(true, |min| hotel.price_per_night >= min);

        let max_price_ok = self
            .max_price
            .map_or(true, |max| hotel.price_per_night <= max);

        let rating_ok = self.min_rating.map_or(true, |min| hotel.rating >= min);

        let rooms_ok = self
            .min_rooms()
            .map_or(true, |rooms| hotel.available_rooms >= rooms);

        location_ok && min_price_ok && max_price_ok && rating_ok && rooms_ok
    }

    // Keeps the matching records, preserving their order.
    pub fn apply(&self, hotels: Vec<Hotel>) -> Vec<Hotel> {
        hotels
            .into_iter()
            .filter(|hotel| self.matches(hotel))
            .collect()
    }
}
