//! Plain-text rendering of the cascade for the terminal.

use directory_client::{config::MapSettings, CascadeState, FetchStatus};
use shared::{
    detail::detail_rows, geo::Coordinates, Clinic, FetchCategory,
    Location, Procedure, Provider, Record,
};

const INDENT: &str = "  ";
/// Extra zoom applied when the map is centred on a pinned location.
const PINNED_ZOOM_STEP: u8 = 4;
pub const NO_PROCEDURES: &str = "No procedures available for this location";

/// Loading and error lines for one category, empty when idle and healthy.
pub fn status_lines(category: FetchCategory, status: &FetchStatus) -> Vec<String> {
    let mut lines = Vec::new();
    if status.loading {
        lines.push(format!("Loading {category}..."));
    }
    if let Some(error) = &status.error {
        lines.push(format!("Error loading {category}: {error}"));
    }
    lines
}

pub fn detail_card(title: &str, record: &Record) -> Vec<String> {
    let mut lines = vec![format!("== {title} ==")];
    lines.extend(
        detail_rows(record)
            .into_iter()
            .map(|row| format!("{INDENT}{}: {}", row.label, row.value)),
    );
    lines
}

pub fn map_line(coordinates: Option<Coordinates>, map: &MapSettings) -> String {
    match coordinates {
        Some(Coordinates { lat, lng }) => format!(
            "Map: {lat}, {lng} (zoom {})",
            map.default_zoom.saturating_add(PINNED_ZOOM_STEP)
        ),
        None => {
            let Coordinates { lat, lng } = map.default_center();
            format!(
                "Map unavailable; default centre {lat}, {lng} (zoom {})",
                map.default_zoom
            )
        }
    }
}

/// `loaded_providers` is the provider roster loaded for this procedure, given
/// only when it is the selected one.
pub fn procedure_card(procedure: &Procedure, loaded_providers: Option<usize>) -> Vec<String> {
    let mut heading = procedure.display_name();
    if let Some(secondary) = procedure.secondary_name() {
        heading = format!("{heading} / {secondary}");
    }
    let mut lines = vec![heading];
    if let Some(code) = procedure.code() {
        lines.push(format!("{INDENT}Code: {code}"));
    }

    let pricing = procedure.pricing();
    if pricing.is_priced() {
        for summary in pricing.summaries() {
            lines.push(format!("{INDENT}{summary}"));
        }
    } else {
        lines.push(format!("{INDENT}Price not listed"));
    }

    match loaded_providers {
        Some(1) => lines.push(format!("{INDENT}1 Provider")),
        Some(count) if count > 1 => lines.push(format!("{INDENT}{count} Providers")),
        _ => {}
    }
    lines
}

pub fn provider_card(provider: &Provider) -> Vec<String> {
    let mut lines = vec![provider_line(provider)];
    if let Some(specialties) = provider.specialties() {
        lines.push(format!("{INDENT}Specialties: {specialties}"));
    }
    if let Some(year) = provider.graduation_year() {
        lines.push(format!("{INDENT}Graduated: {year}"));
    }
    lines
}

pub fn clinic_line(clinic: &Clinic) -> String {
    listing_line(
        clinic.display_name(),
        clinic.secondary_name(),
        clinic.id().map(|id| id.0),
    )
}

pub fn location_line(location: &Location) -> String {
    listing_line(location.display_name(), None, location.id().map(|id| id.0))
}

pub fn procedure_line(procedure: &Procedure) -> String {
    listing_line(
        procedure.display_name(),
        procedure.secondary_name(),
        procedure.id().map(|id| id.0),
    )
}

pub fn provider_line(provider: &Provider) -> String {
    listing_line(
        provider.display_name(),
        provider.secondary_name(),
        provider.id().map(|id| id.0),
    )
}

fn listing_line(name: String, secondary: Option<String>, id: Option<String>) -> String {
    let name = match secondary {
        Some(secondary) => format!("{name} / {secondary}"),
        None => name,
    };
    match id {
        Some(id) => format!("{name} [{id}]"),
        None => name,
    }
}

/// One level of the cascade: its status, listing and selection.
pub fn category_lines(state: &CascadeState, category: FetchCategory, map: &MapSettings) -> Vec<String> {
    let mut lines = status_lines(category, state.status.get(category));
    match category {
        FetchCategory::Clinics => {
            lines.push(format!("Clinics ({})", state.clinics.len()));
            lines.extend(state.clinics.iter().map(|c| format!("{INDENT}{}", clinic_line(c))));
            if let Some(clinic) = &state.clinic_details {
                lines.extend(detail_card(&clinic.display_name(), clinic.record()));
            }
        }
        FetchCategory::Locations => {
            if state.selected_clinic_id.is_none() {
                return lines;
            }
            lines.push(format!("Locations ({})", state.locations.len()));
            lines.extend(
                state
                    .locations
                    .iter()
                    .map(|l| format!("{INDENT}{}", location_line(l))),
            );
            if let Some(location) = &state.location_details {
                lines.extend(detail_card(&location.display_name(), location.record()));
                lines.push(map_line(location.coordinates(), map));
            }
        }
        FetchCategory::Procedures => {
            if state.selected_location_id.is_none() {
                return lines;
            }
            let status = state.status.get(category);
            if state.procedures.is_empty() && !status.loading && status.error.is_none() {
                lines.push(NO_PROCEDURES.to_string());
                return lines;
            }
            lines.push(format!("Procedures ({})", state.procedures.len()));
            let selected_id = state.selected_procedure.as_ref().and_then(Procedure::id);
            for procedure in &state.procedures {
                let is_selected = selected_id.is_some() && procedure.id() == selected_id;
                let loaded = is_selected.then_some(state.providers.len());
                lines.extend(procedure_card(procedure, loaded));
            }
            if let Some(procedure) = &state.selected_procedure {
                lines.push(format!("Selected procedure: {}", procedure.display_name()));
            }
        }
        FetchCategory::Providers => {
            if state.selected_procedure.is_none() {
                return lines;
            }
            lines.push(format!("Providers ({})", state.providers.len()));
            for provider in &state.providers {
                lines.extend(provider_card(provider).into_iter().map(|line| format!("{INDENT}{line}")));
            }
        }
    }
    lines
}

pub fn render_state(state: &CascadeState, map: &MapSettings) -> String {
    FetchCategory::ALL
        .iter()
        .flat_map(|category| category_lines(state, *category, map))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
