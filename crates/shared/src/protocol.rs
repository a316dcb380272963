use serde::{Deserialize, Serialize};

use crate::domain::FetchCategory;

pub const CLINICS_PATH: &str = "/clinics-hospitals";
pub const LOCATIONS_PATH: &str = "/locations";
pub const PROCEDURE_OFFERINGS_PATH: &str = "/procedure-offerings";
pub const PROVIDERS_PATH: &str = "/providers";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationsQuery {
    pub clinic_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureOfferingsQuery {
    pub clinic_id: String,
    pub location_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProvidersQuery {
    /// Comma-separated provider ids.
    pub ids: String,
}

/// One call against the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "query", rename_all = "snake_case")]
pub enum DirectoryRequest {
    ListClinics,
    ListLocations(LocationsQuery),
    ListProcedureOfferings(ProcedureOfferingsQuery),
    ListProviders(ProvidersQuery),
}

impl DirectoryRequest {
    pub fn locations(clinic_id: impl Into<String>) -> Self {
        Self::ListLocations(LocationsQuery {
            clinic_id: clinic_id.into(),
        })
    }

    pub fn procedure_offerings(clinic_id: impl Into<String>, location_id: impl Into<String>) -> Self {
        Self::ListProcedureOfferings(ProcedureOfferingsQuery {
            clinic_id: clinic_id.into(),
            location_id: location_id.into(),
        })
    }

    pub fn providers(ids: impl Into<String>) -> Self {
        Self::ListProviders(ProvidersQuery { ids: ids.into() })
    }

    pub fn path(&self) -> &'static str {
        match self {
            DirectoryRequest::ListClinics => CLINICS_PATH,
            DirectoryRequest::ListLocations(_) => LOCATIONS_PATH,
            DirectoryRequest::ListProcedureOfferings(_) => PROCEDURE_OFFERINGS_PATH,
            DirectoryRequest::ListProviders(_) => PROVIDERS_PATH,
        }
    }

    pub fn category(&self) -> FetchCategory {
        match self {
            DirectoryRequest::ListClinics => FetchCategory::Clinics,
            DirectoryRequest::ListLocations(_) => FetchCategory::Locations,
            DirectoryRequest::ListProcedureOfferings(_) => FetchCategory::Procedures,
            DirectoryRequest::ListProviders(_) => FetchCategory::Providers,
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
