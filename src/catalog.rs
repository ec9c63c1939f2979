// Read-only catalog of hotel records. A catalog is built once, validated on
// construction and then only read. It is handed to a data source explicitly,
// so tests can fabricate their own.

use std::{collections::HashMap, path::Path};

use thiserror::Error;

use crate::hotel::Hotel;

pub const MAX_RATING: f64 = 5.0;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate hotel id: {0}")]
    DuplicateId(String),

    #[error("Hotel {0} has an empty name")]
    EmptyName(String),

    #[error("Hotel {id} has a negative price per night: {price}")]
    NegativePrice { id: String, price: f64 },

    #[error("Hotel {id} has rating {rating} outside 0-5")]
    RatingOutOfRange { id: String, rating: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hotels: Vec<Hotel>,
    index: HashMap<String, usize>,
}

impl Catalog {
    // Validates the records and keeps them in the order given.
    pub fn new(hotels: Vec<Hotel>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(hotels.len());

        for (position, hotel) in hotels.iter().enumerate() {
            validate(hotel)?;
            if index.insert(hotel.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(hotel.id.clone()));
            }
        }

        Ok(Self { hotels, index })
    }

    // Parses a JSON array of hotel records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let hotels: Vec<Hotel> = serde_json::from_str(json)?;
        Self::new(hotels)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    // The six properties the listing app ships with.
    pub fn sample() -> Self {
        let hotels = sample_hotels();
        let index = hotels
            .iter()
            .enumerate()
            .map(|(position, hotel)| (hotel.id.clone(), position))
            .collect();
        Self { hotels, index }
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hotel> {
        self.hotels.iter()
    }

    pub fn get(&self, hotel_id: &str) -> Option<&Hotel> {
        self.index
            .get(hotel_id)
            .and_then(|&position| self.hotels.get(position))
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

fn validate(hotel: &Hotel) -> Result<(), CatalogError> {
    if hotel.name.trim().is_empty() {
        return Err(CatalogError::EmptyName(hotel.id.clone()));
    }

    // rejects NaN as well
    if !(hotel.price_per_night >= 0.0) {
        return Err(CatalogError::NegativePrice {
            id: hotel.id.clone(),
            price: hotel.price_per_night,
        });
    }

    if !(0.0..=MAX_RATING).contains(&hotel.rating) {
        return Err(CatalogError::RatingOutOfRange {
            id: hotel.id.clone(),
            rating: hotel.rating,
        });
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn hotel(
    id: &str,
    name: &str,
    description: &str,
    location: &str,
    price_per_night: f64,
    rating: f64,
    image_url: &str,
    amenities: &[&str],
    available_rooms: u32,
) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        price_per_night,
        rating,
        image_url: image_url.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        available_rooms,
    }
}

fn sample_hotels() -> Vec<Hotel> {
    vec![
        hotel(
            "1",
            "Hotel Gran Paraíso",
            "Lujoso hotel con vista al mar, piscina infinita y spa de clase mundial.",
            "Cancún, México",
            2500.0,
            4.8,
            "https://images.unsplash.com/photo-1566073771259-6a8506099945",
            &["WiFi", "Piscina", "Spa", "Restaurante", "Gym"],
            15,
        ),
        hotel(
            "2",
            "Hotel Plaza Centro",
            "Hotel céntrico perfecto para negocios y turismo, cerca de las principales atracciones.",
            "Ciudad de México, México",
            1200.0,
            4.5,
            "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb",
            &["WiFi", "Desayuno incluido", "Estacionamiento", "Centro de negocios"],
            8,
        ),
        hotel(
            "3",
            "Resort Playa Azul",
            "Resort todo incluido con acceso directo a la playa y actividades acuáticas.",
            "Puerto Vallarta, México",
            3200.0,
            4.9,
            "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4",
            &["WiFi", "Todo incluido", "Playa privada", "Deportes acuáticos", "Kids Club"],
            22,
        ),
        hotel(
            "4",
            "Hotel Colonial",
            "Encantador hotel boutique en el corazón del centro histórico.",
            "Guanajuato, México",
            900.0,
            4.6,
            "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa",
            &["WiFi", "Terraza", "Bar", "Desayuno"],
            5,
        ),
        hotel(
            "5",
            "Hotel Montaña Verde",
            "Refugio ecológico rodeado de naturaleza, ideal para desconectarse.",
            "San Cristóbal de las Casas, México",
            1500.0,
            4.7,
            "https://images.unsplash.com/photo-1445019980597-93fa8acb246c",
            &["WiFi", "Senderismo", "Restaurante orgánico", "Fogatas"],
            10,
        ),
        hotel(
            "6",
            "Hotel Business Tower",
            "Hotel moderno diseñado para ejecutivos con todas las comodidades.",
            "Monterrey, México",
            1800.0,
            4.4,
            "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b",
            &["WiFi", "Gym", "Salas de reuniones", "Concierge"],
            12,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_hotels.json");

    #[test]
    fn test_sample_catalog_passes_validation() {
        let sample = Catalog::sample();
        let validated = Catalog::new(sample.hotels().to_vec()).unwrap();

        assert_eq!(validated.len(), 6);
        assert!(!validated.is_empty());
        assert_eq!(validated.hotels(), sample.hotels());
    }

    #[test]
    fn test_lookup_by_exact_id() {
        let catalog = Catalog::sample();

        assert_eq!(catalog.get("4").unwrap().name, "Hotel Colonial");
        assert!(catalog.get("04").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let catalog = Catalog::sample();
        let ids: Vec<&str> = catalog.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut hotels = Catalog::sample().hotels().to_vec();
        hotels[5].id = "2".to_string();

        let err = Catalog::new(hotels).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "2"));
    }

    #[test]
    fn test_invalid_records_rejected() {
        let base = Catalog::sample().hotels()[0].clone();

        let mut unnamed = base.clone();
        unnamed.name = "  ".to_string();
        assert!(matches!(
            Catalog::new(vec![unnamed]),
            Err(CatalogError::EmptyName(_))
        ));

        let mut negative = base.clone();
        negative.price_per_night = -1.0;
        assert!(matches!(
            Catalog::new(vec![negative]),
            Err(CatalogError::NegativePrice { .. })
        ));

        let mut overrated = base;
        overrated.rating = 5.5;
        assert!(matches!(
            Catalog::new(vec![overrated]),
            Err(CatalogError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get("1").is_none());
    }

    #[test]
    fn test_load_fixture_matches_sample() {
        let loaded = Catalog::load(FIXTURE_PATH).unwrap();
        assert_eq!(loaded.hotels(), Catalog::sample().hotels());
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        assert!(matches!(
            Catalog::from_json("[{\"id\": \"1\"}]"),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(
            Catalog::load("does/not/exist.json"),
            Err(CatalogError::Io(_))
        ));
    }
}
