use serde::Serialize;
use shared::{
    Clinic, EntityId, FetchCategory, Location, Procedure, Provider,
};

/// Loading and error flags for one fetch category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchStatus {
    pub loading: bool,
    pub error: Option<String>,
    /// Latest request generation issued for the category.
    #[serde(skip)]
    pub(crate) generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStatuses {
    pub clinics: FetchStatus,
    pub locations: FetchStatus,
    pub procedures: FetchStatus,
    pub providers: FetchStatus,
}

impl CategoryStatuses {
    pub fn get(&self, category: FetchCategory) -> &FetchStatus {
        match category {
            FetchCategory::Clinics => &self.clinics,
            FetchCategory::Locations => &self.locations,
            FetchCategory::Procedures => &self.procedures,
            FetchCategory::Providers => &self.providers,
        }
    }

    pub(crate) fn get_mut(&mut self, category: FetchCategory) -> &mut FetchStatus {
        match category {
            FetchCategory::Clinics => &mut self.clinics,
            FetchCategory::Locations => &mut self.locations,
            FetchCategory::Procedures => &mut self.procedures,
            FetchCategory::Providers => &mut self.providers,
        }
    }
}

/// Everything the browser shows, owned by the cascade.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CascadeState {
    pub clinics: Vec<Clinic>,
    pub selected_clinic_id: Option<EntityId>,
    pub clinic_details: Option<Clinic>,
    pub locations: Vec<Location>,
    pub selected_location_id: Option<EntityId>,
    pub location_details: Option<Location>,
    pub procedures: Vec<Procedure>,
    pub selected_procedure: Option<Procedure>,
    pub providers: Vec<Provider>,
    pub status: CategoryStatuses,
}

impl CascadeState {
    /// Drops the data and selection a category feeds. The clinic list itself
    /// is never cleared; it belongs to the whole session.
    pub(crate) fn clear_slot(&mut self, category: FetchCategory) {
        match category {
            FetchCategory::Clinics => {}
            FetchCategory::Locations => {
                self.locations.clear();
                self.selected_location_id = None;
                self.location_details = None;
            }
            FetchCategory::Procedures => {
                self.procedures.clear();
                self.selected_procedure = None;
            }
            FetchCategory::Providers => self.providers.clear(),
        }
    }

    pub(crate) fn resolve_clinic_details(&mut self) {
        self.clinic_details = self.selected_clinic_id.as_ref().and_then(|id| {
            self.clinics
                .iter()
                .find(|clinic| clinic.matches_id(id.as_str()))
                .cloned()
        });
    }

    pub(crate) fn resolve_location_details(&mut self) {
        self.location_details = self.selected_location_id.as_ref().and_then(|id| {
            self.locations
                .iter()
                .find(|location| location.matches_id(id.as_str()))
                .cloned()
        });
    }

    pub fn find_procedure(&self, id: &str) -> Option<&Procedure> {
        self.procedures
            .iter()
            .find(|procedure| procedure.matches_id(id))
    }
}
