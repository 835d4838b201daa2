//! Registry HTTP client
//!
//! Loading lives in `loader.rs`, publishing in `publisher.rs`.

use super::coordinates::RegistryCoordinates;

/// Client for one artifact version in the schema registry
#[derive(Debug, Clone)]
pub struct RegistryClient {
    pub(super) http: reqwest::Client,
    pub(super) coordinates: RegistryCoordinates,
}

impl RegistryClient {
    pub fn new(coordinates: RegistryCoordinates) -> Self {
        Self {
            http: reqwest::Client::new(),
            coordinates,
        }
    }
}
