use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{fields, geo, geo::Coordinates, pricing::Pricing, providers, record::Record};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One independently tracked fetch in the selection cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchCategory {
    Clinics,
    Locations,
    Procedures,
    Providers,
}

impl FetchCategory {
    pub const ALL: [FetchCategory; 4] = [
        FetchCategory::Clinics,
        FetchCategory::Locations,
        FetchCategory::Procedures,
        FetchCategory::Providers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FetchCategory::Clinics => "clinics",
            FetchCategory::Locations => "locations",
            FetchCategory::Procedures => "procedures",
            FetchCategory::Providers => "providers",
        }
    }

    /// Categories whose data depends on this one, nearest first.
    pub fn descendants(self) -> &'static [FetchCategory] {
        match self {
            FetchCategory::Clinics => &[
                FetchCategory::Locations,
                FetchCategory::Procedures,
                FetchCategory::Providers,
            ],
            FetchCategory::Locations => &[FetchCategory::Procedures, FetchCategory::Providers],
            FetchCategory::Procedures => &[FetchCategory::Providers],
            FetchCategory::Providers => &[],
        }
    }
}

impl fmt::Display for FetchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! entity_record {
    ($name:ident, ids: $ids:expr, names: $names:expr, unknown: $unknown:expr) => {
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Record);

        impl $name {
            pub fn record(&self) -> &Record {
                &self.0
            }

            /// Identifier used for selection: the first candidate id key that
            /// holds a value.
            pub fn id(&self) -> Option<EntityId> {
                self.0.first_text($ids).map(EntityId)
            }

            pub fn matches_id(&self, id: &str) -> bool {
                !id.is_empty() && self.0.matches_any($ids, id)
            }

            pub fn display_name(&self) -> String {
                self.0
                    .first_text($names)
                    .unwrap_or_else(|| $unknown.to_string())
            }

            /// Records with no identifier at all get a random internal one so
            /// they can still be selected.
            pub fn ensure_id(&mut self) {
                if self.id().is_none() {
                    self.0
                        .insert(fields::INTERNAL_ID, Uuid::new_v4().to_string());
                }
            }
        }

        impl From<Record> for $name {
            fn from(record: Record) -> Self {
                Self(record)
            }
        }
    };
}

entity_record!(Clinic, ids: fields::CLINIC_ID, names: fields::CLINIC_NAME, unknown: fields::UNKNOWN_CLINIC);
entity_record!(Location, ids: fields::LOCATION_ID, names: fields::LOCATION_NAME, unknown: fields::UNKNOWN_LOCATION);
entity_record!(Procedure, ids: fields::PROCEDURE_ID, names: fields::PROCEDURE_NAME, unknown: fields::UNKNOWN_PROCEDURE);
entity_record!(Provider, ids: fields::PROVIDER_ID, names: fields::PROVIDER_NAME, unknown: fields::UNKNOWN_PROVIDER);

/// Secondary-language name, only when the primary-language one is present too.
fn secondary_name(record: &Record, (primary, secondary): (&str, &str)) -> Option<String> {
    record.first_text(&[primary])?;
    record.first_text(&[secondary])
}

impl Clinic {
    pub fn secondary_name(&self) -> Option<String> {
        secondary_name(&self.0, fields::CLINIC_BILINGUAL)
    }
}

impl Location {
    pub fn clinic_ref(&self) -> Option<EntityId> {
        self.0.first_text(fields::LOCATION_CLINIC).map(EntityId)
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        geo::map_coordinates(&self.0)
    }
}

impl Procedure {
    pub fn secondary_name(&self) -> Option<String> {
        secondary_name(&self.0, fields::PROCEDURE_BILINGUAL)
    }

    pub fn code(&self) -> Option<String> {
        self.0.first_text(&[fields::PROCEDURE_CODE])
    }

    pub fn provider_refs(&self) -> Option<&Value> {
        self.0.first_present(fields::PROCEDURE_PROVIDERS)
    }

    /// Normalized comma-joined provider ids, `None` when there are none.
    pub fn provider_ids(&self) -> Option<String> {
        self.provider_refs().and_then(providers::normalize_provider_ids)
    }

    pub fn pricing(&self) -> Pricing {
        Pricing::from_record(&self.0)
    }
}

impl Provider {
    pub fn secondary_name(&self) -> Option<String> {
        secondary_name(&self.0, fields::PROVIDER_BILINGUAL)
    }

    pub fn specialties(&self) -> Option<String> {
        self.0.first_text(&[fields::PROVIDER_SPECIALTIES])
    }

    pub fn graduation_year(&self) -> Option<String> {
        self.0.first_text(&[fields::PROVIDER_GRADUATION_YEAR])
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
