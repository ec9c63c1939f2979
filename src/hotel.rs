// Hotel records, filter criteria and query results

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// A single property in the catalog. Field names follow the camelCase shape
// the front-end exchanges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub price_per_night: f64,
    pub rating: f64,
    pub image_url: String,
    pub amenities: Vec<String>,
    pub available_rooms: u32,
}

// Optional search criteria. Every field left as `None` places no constraint
// on the result; set fields are ANDed together.
// `check_in` and `check_out` are carried through untouched. Availability by
// date is not modeled, so they never narrow a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
}

// Result of a list query. There is no real windowing: the full match set
// always comes back as page 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListResponse {
    pub hotels: Vec<Hotel>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl HotelListResponse {
    pub fn single_page(hotels: Vec<Hotel>) -> Self {
        let total = hotels.len();
        Self {
            hotels,
            total,
            page: 1,
            page_size: total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hotel_uses_camel_case_fields() {
        let hotel = Hotel {
            id: "7".to_string(),
            name: "Hotel Mirador".to_string(),
            description: "Vista a la bahía".to_string(),
            location: "La Paz, México".to_string(),
            price_per_night: 1100.0,
            rating: 4.2,
            image_url: "https://example.com/mirador.jpg".to_string(),
            amenities: vec!["WiFi".to_string()],
            available_rooms: 3,
        };

        let value = serde_json::to_value(&hotel).unwrap();
        assert_eq!(value["pricePerNight"], json!(1100.0));
        assert_eq!(value["imageUrl"], json!("https://example.com/mirador.jpg"));
        assert_eq!(value["availableRooms"], json!(3));
    }

    #[test]
    fn test_filters_accept_partial_json() {
        let filters: HotelFilters = serde_json::from_value(json!({
            "location": "cancún",
            "checkIn": "2025-06-01",
            "guests": 4
        }))
        .unwrap();

        assert_eq!(filters.location.as_deref(), Some("cancún"));
        assert_eq!(
            filters.check_in,
            Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        );
        assert_eq!(filters.check_out, None);
        assert_eq!(filters.guests, Some(4));
        assert_eq!(filters.min_price, None);
    }

    #[test]
    fn test_single_page_metadata() {
        let response = HotelListResponse::single_page(vec![]);
        assert_eq!(response.total, 0);
        assert_eq!(response.page, 1);
        assert_eq!(response.page_size, 0);
        assert!(response.is_empty());
    }
}
