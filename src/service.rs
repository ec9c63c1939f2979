// Hotel query service: filtered listing and detail lookup over a data source

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error};

use crate::{
    catalog::Catalog,
    hotel::{Hotel, HotelFilters, HotelListResponse},
    source::{HotelSource, InMemoryHotelSource, LatencyConfig, SourceError},
};

pub const LIST_UNAVAILABLE_MESSAGE: &str =
    "No se pudieron obtener los hoteles. Por favor, intenta de nuevo.";
pub const DETAIL_UNAVAILABLE_MESSAGE: &str =
    "No se pudo obtener el hotel. Por favor, intenta de nuevo.";

// Errors surfaced to the presentation layer. A missing hotel is not an
// error; lookups return `Ok(None)` for it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("{message}")]
    Unavailable {
        message: String,
        #[source]
        cause: SourceError,
    },
}

impl ServiceError {
    fn unavailable(message: &str, cause: SourceError) -> Self {
        ServiceError::Unavailable {
            message: message.to_string(),
            cause,
        }
    }

    // The text a front-end shows next to its retry control.
    pub fn user_message(&self) -> &str {
        match self {
            ServiceError::Unavailable { message, .. } => message,
        }
    }
}

// Stateless query front over a `HotelSource`.
// Cloning is cheap and clones share the same source, so one service can be
// handed to any number of concurrent tasks.
#[derive(Clone)]
pub struct HotelService {
    source: Arc<dyn HotelSource>,
}

impl HotelService {
    pub fn new(source: Arc<dyn HotelSource>) -> Self {
        Self { source }
    }

    // Service over an in-memory catalog with simulated latency.
    pub fn in_memory(catalog: Arc<Catalog>, latency: LatencyConfig) -> Self {
        Self::new(Arc::new(InMemoryHotelSource::new(catalog, latency)))
    }

    // Lists hotels matching `criteria`, in catalog order. `None` returns
    // the whole catalog. The result is always a single page holding every
    // match.
    pub async fn list_hotels(
        &self,
        criteria: Option<&HotelFilters>,
    ) -> Result<HotelListResponse, ServiceError> {
        let hotels = self.source.fetch_hotels().await.map_err(|e| {
            error!(error = %e, "failed to list hotels");
            ServiceError::unavailable(LIST_UNAVAILABLE_MESSAGE, e)
        })?;

        let hotels = match criteria {
            Some(filters) => filters.apply(hotels),
            None => hotels,
        };

        debug!(?criteria, total = hotels.len(), "listed hotels");

        Ok(HotelListResponse::single_page(hotels))
    }

    pub async fn get_hotel_by_id(&self, hotel_id: &str) -> Result<Option<Hotel>, ServiceError> {
        let hotel = self.source.fetch_hotel(hotel_id).await.map_err(|e| {
            error!(hotel_id, error = %e, "failed to fetch hotel");
            ServiceError::unavailable(DETAIL_UNAVAILABLE_MESSAGE, e)
        })?;

        debug!(hotel_id, found = hotel.is_some(), "looked up hotel");

        Ok(hotel)
    }
}
