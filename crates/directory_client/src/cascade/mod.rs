//! Selection cascade: clinic -> location -> procedure -> providers.
//!
//! Every selection is a synchronous transition that updates the selection,
//! clears everything that depends on it and returns at most one
//! [`PendingFetch`]. The fetch runs outside the state and comes back as a
//! [`FetchCompletion`], which is applied only if it still carries the latest
//! generation for its category. Clearing a category advances its generation
//! too, so responses for discarded selections are dropped.

use std::sync::Arc;

use shared::{
    geo::Coordinates, protocol::DirectoryRequest, Clinic, EntityId, FetchCategory, Location,
    Procedure, Provider, Record,
};
use tracing::{debug, info, warn};

use crate::{error::FetchError, DirectoryService};

pub mod events;
pub mod state;

pub use events::SelectionEvent;
pub use state::{CascadeState, CategoryStatuses, FetchStatus};

/// A fetch issued by a transition and not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub generation: u64,
    pub request: DirectoryRequest,
}

impl PendingFetch {
    pub fn category(&self) -> FetchCategory {
        self.request.category()
    }

    /// Runs the request. Never fails: errors travel inside the completion.
    pub async fn execute(self, service: &dyn DirectoryService) -> FetchCompletion {
        debug!(
            category = %self.category(),
            generation = self.generation,
            path = self.request.path(),
            "cascade: fetch started"
        );
        let outcome = service.fetch(&self.request).await;
        FetchCompletion {
            generation: self.generation,
            request: self.request,
            outcome,
        }
    }
}

#[derive(Debug)]
pub struct FetchCompletion {
    pub generation: u64,
    pub request: DirectoryRequest,
    pub outcome: Result<Vec<Record>, FetchError>,
}

impl FetchCompletion {
    pub fn category(&self) -> FetchCategory {
        self.request.category()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Failed,
    /// A newer request or a parent change superseded this one.
    Stale,
}

pub struct SelectionCascade {
    service: Arc<dyn DirectoryService>,
    state: CascadeState,
    initialized: bool,
}

impl SelectionCascade {
    pub fn new(service: Arc<dyn DirectoryService>) -> Self {
        Self {
            service,
            state: CascadeState::default(),
            initialized: false,
        }
    }

    pub fn state(&self) -> &CascadeState {
        &self.state
    }

    pub fn status(&self, category: FetchCategory) -> &FetchStatus {
        self.state.status.get(category)
    }

    pub fn service(&self) -> Arc<dyn DirectoryService> {
        Arc::clone(&self.service)
    }

    /// Map pin for the selected location, if it has usable coordinates.
    pub fn map_coordinates(&self) -> Option<Coordinates> {
        self.state
            .location_details
            .as_ref()
            .and_then(Location::coordinates)
    }

    /// Issues the clinic fetch the first time only.
    pub fn begin_initialize(&mut self) -> Option<PendingFetch> {
        if self.initialized {
            debug!("cascade: already initialized");
            return None;
        }
        self.initialized = true;
        info!("cascade: loading clinics");
        Some(self.begin(DirectoryRequest::ListClinics))
    }

    pub fn begin_select_clinic(&mut self, id: &str) -> Option<PendingFetch> {
        self.state.selected_clinic_id = selection(id);
        self.state.resolve_clinic_details();
        self.reset_below(FetchCategory::Clinics);
        info!(
            clinic_id = id.trim(),
            resolved = self.state.clinic_details.is_some(),
            "cascade: clinic selected"
        );

        let clinic_id = self.state.selected_clinic_id.clone()?;
        Some(self.begin(DirectoryRequest::locations(clinic_id.0)))
    }

    pub fn begin_select_location(&mut self, id: &str) -> Option<PendingFetch> {
        self.state.selected_location_id = selection(id);
        self.state.resolve_location_details();
        self.reset_below(FetchCategory::Locations);
        info!(
            location_id = id.trim(),
            resolved = self.state.location_details.is_some(),
            "cascade: location selected"
        );

        let clinic_id = self.state.selected_clinic_id.clone()?;
        let location_id = self.state.selected_location_id.clone()?;
        Some(self.begin(DirectoryRequest::procedure_offerings(
            clinic_id.0,
            location_id.0,
        )))
    }

    /// Takes the already-resolved record; `None` deselects.
    pub fn begin_select_procedure(&mut self, procedure: Option<Procedure>) -> Option<PendingFetch> {
        self.state.selected_procedure = procedure;
        self.reset_below(FetchCategory::Procedures);

        let selected = self.state.selected_procedure.as_ref()?;
        info!(
            procedure = %selected.display_name(),
            "cascade: procedure selected"
        );
        let Some(ids) = selected.provider_ids() else {
            debug!("cascade: procedure has no provider references");
            return None;
        };
        Some(self.begin(DirectoryRequest::providers(ids)))
    }

    /// Resolves `id` against the loaded procedures. Unknown ids deselect.
    pub fn begin_select_procedure_id(&mut self, id: &str) -> Option<PendingFetch> {
        let id = id.trim();
        let procedure = self.state.find_procedure(id).cloned();
        if procedure.is_none() && !id.is_empty() {
            warn!(procedure_id = id, "cascade: unknown procedure id");
        }
        self.begin_select_procedure(procedure)
    }

    pub fn begin_event(&mut self, event: &SelectionEvent) -> Option<PendingFetch> {
        match event {
            SelectionEvent::Initialize => self.begin_initialize(),
            SelectionEvent::SelectClinic(id) => self.begin_select_clinic(id),
            SelectionEvent::SelectLocation(id) => self.begin_select_location(id),
            SelectionEvent::SelectProcedure(id) => self.begin_select_procedure_id(id),
        }
    }

    /// Folds a completed fetch into the state unless it has been superseded.
    pub fn apply(&mut self, completion: FetchCompletion) -> ApplyOutcome {
        let category = completion.category();
        let status = self.state.status.get_mut(category);
        if completion.generation != status.generation {
            debug!(
                %category,
                generation = completion.generation,
                latest = status.generation,
                "cascade: discarding stale response"
            );
            return ApplyOutcome::Stale;
        }
        status.loading = false;

        match completion.outcome {
            Ok(records) => {
                info!(%category, count = records.len(), "cascade: loaded");
                self.store(category, records);
                ApplyOutcome::Applied
            }
            Err(error) => {
                let message = error.display_message();
                warn!(%category, %error, "cascade: fetch failed");
                status.error = Some(message);
                ApplyOutcome::Failed
            }
        }
    }

    pub async fn initialize(&mut self) -> Option<ApplyOutcome> {
        let pending = self.begin_initialize()?;
        Some(self.run(pending).await)
    }

    pub async fn select_clinic(&mut self, id: &str) -> Option<ApplyOutcome> {
        let pending = self.begin_select_clinic(id)?;
        Some(self.run(pending).await)
    }

    pub async fn select_location(&mut self, id: &str) -> Option<ApplyOutcome> {
        let pending = self.begin_select_location(id)?;
        Some(self.run(pending).await)
    }

    pub async fn select_procedure(&mut self, procedure: Option<Procedure>) -> Option<ApplyOutcome> {
        let pending = self.begin_select_procedure(procedure)?;
        Some(self.run(pending).await)
    }

    pub async fn select_procedure_id(&mut self, id: &str) -> Option<ApplyOutcome> {
        let pending = self.begin_select_procedure_id(id)?;
        Some(self.run(pending).await)
    }

    /// Single entry point for front ends.
    pub async fn dispatch(&mut self, event: SelectionEvent) -> Option<ApplyOutcome> {
        debug!(event = event.name(), "cascade: dispatch");
        let pending = self.begin_event(&event)?;
        Some(self.run(pending).await)
    }

    async fn run(&mut self, pending: PendingFetch) -> ApplyOutcome {
        let service = self.service();
        let completion = pending.execute(service.as_ref()).await;
        self.apply(completion)
    }

    fn begin(&mut self, request: DirectoryRequest) -> PendingFetch {
        let status = self.state.status.get_mut(request.category());
        status.generation += 1;
        status.loading = true;
        status.error = None;
        PendingFetch {
            generation: status.generation,
            request,
        }
    }

    /// Clears every category that depends on `category` and orphans any of
    /// their fetches still in flight.
    fn reset_below(&mut self, category: FetchCategory) {
        for &dependent in category.descendants() {
            let status = self.state.status.get_mut(dependent);
            status.generation += 1;
            status.loading = false;
            status.error = None;
            self.state.clear_slot(dependent);
        }
    }

    fn store(&mut self, category: FetchCategory, records: Vec<Record>) {
        match category {
            FetchCategory::Clinics => {
                self.state.clinics = with_ids(records, Clinic, Clinic::ensure_id);
                self.state.resolve_clinic_details();
            }
            FetchCategory::Locations => {
                self.state.locations = with_ids(records, Location, Location::ensure_id);
                self.state.resolve_location_details();
            }
            FetchCategory::Procedures => {
                self.state.procedures = with_ids(records, Procedure, Procedure::ensure_id);
            }
            FetchCategory::Providers => {
                self.state.providers = with_ids(records, Provider, Provider::ensure_id);
            }
        }
    }
}

fn selection(id: &str) -> Option<EntityId> {
    let id = id.trim();
    (!id.is_empty()).then(|| EntityId::from(id))
}

fn with_ids<T>(records: Vec<Record>, wrap: fn(Record) -> T, ensure_id: fn(&mut T)) -> Vec<T> {
    records
        .into_iter()
        .map(|record| {
            let mut entity = wrap(record);
            ensure_id(&mut entity);
            entity
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/cascade_tests.rs"]
mod tests;
