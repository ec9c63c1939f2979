// Main library file for the hotel catalog query layer

pub mod catalog;
pub mod filter;
pub mod hotel;
pub mod service;
pub mod source;
pub mod summary;

// Re-export key types for convenience
pub use catalog::{Catalog, CatalogError};
pub use hotel::{Hotel, HotelFilters, HotelListResponse};
pub use service::{HotelService, ServiceError};
pub use source::{HotelSource, InMemoryHotelSource, LatencyConfig, SourceError};
pub use summary::{format_price, results_label, AmenityPreview, HotelDetail};
