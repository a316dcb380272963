//! Selection events routed from a front end into the cascade.

use shared::FetchCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Initialize,
    /// Empty id clears the clinic and everything below it.
    SelectClinic(String),
    SelectLocation(String),
    SelectProcedure(String),
}

impl SelectionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionEvent::Initialize => "initialize",
            SelectionEvent::SelectClinic(_) => "select_clinic",
            SelectionEvent::SelectLocation(_) => "select_location",
            SelectionEvent::SelectProcedure(_) => "select_procedure",
        }
    }

    /// Category whose fetch this event may start.
    pub fn fetches(&self) -> FetchCategory {
        match self {
            SelectionEvent::Initialize => FetchCategory::Clinics,
            SelectionEvent::SelectClinic(_) => FetchCategory::Locations,
            SelectionEvent::SelectLocation(_) => FetchCategory::Procedures,
            SelectionEvent::SelectProcedure(_) => FetchCategory::Providers,
        }
    }
}
