pub mod geo_api;

pub use geo_api::GeoApiClient;
