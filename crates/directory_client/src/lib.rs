//! Client side of the healthcare directory: HTTP access to the directory
//! service, settings, and the selection cascade that drives the browser.

use async_trait::async_trait;
use shared::{
    protocol::DirectoryRequest, Clinic, Location, Procedure, Provider, Record,
};

pub mod cascade;
pub mod config;
pub mod error;
pub mod http;

pub use cascade::{
    ApplyOutcome, CascadeState, FetchCompletion, FetchStatus, PendingFetch, SelectionCascade,
    SelectionEvent,
};
pub use config::{load_settings, Settings};
pub use error::{ConfigError, FetchError};
pub use http::HttpDirectoryClient;

/// Read access to the remote directory. Implementors only provide
/// [`DirectoryService::fetch`]; the typed listings are built on top of it.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    async fn fetch(&self, request: &DirectoryRequest) -> Result<Vec<Record>, FetchError>;

    async fn list_clinics(&self) -> Result<Vec<Clinic>, FetchError> {
        let records = self.fetch(&DirectoryRequest::ListClinics).await?;
        Ok(records.into_iter().map(Clinic::from).collect())
    }

    async fn list_locations(&self, clinic_id: &str) -> Result<Vec<Location>, FetchError> {
        let records = self.fetch(&DirectoryRequest::locations(clinic_id)).await?;
        Ok(records.into_iter().map(Location::from).collect())
    }

    async fn list_procedure_offerings(
        &self,
        clinic_id: &str,
        location_id: &str,
    ) -> Result<Vec<Procedure>, FetchError> {
        let records = self
            .fetch(&DirectoryRequest::procedure_offerings(clinic_id, location_id))
            .await?;
        Ok(records.into_iter().map(Procedure::from).collect())
    }

    async fn list_providers(&self, ids: &str) -> Result<Vec<Provider>, FetchError> {
        let records = self.fetch(&DirectoryRequest::providers(ids)).await?;
        Ok(records.into_iter().map(Provider::from).collect())
    }
}
