//! Ordered candidate key tables.
//!
//! The directory service is not consistent about key spelling, so every
//! logical attribute is looked up through a list of candidate keys tried in
//! the order given here. Lookups are case-sensitive and exact.

pub const INTERNAL_ID: &str = "_id";

pub const CLINIC_ID: &[&str] = &["Clinic ID", INTERNAL_ID];
pub const LOCATION_ID: &[&str] = &["Location ID", INTERNAL_ID];
pub const PROCEDURE_ID: &[&str] = &[INTERNAL_ID, "Procedure ID"];
pub const PROVIDER_ID: &[&str] = &[INTERNAL_ID, "Provider ID"];

/// Foreign key from a location back to its clinic.
pub const LOCATION_CLINIC: &[&str] = &["Clinic ID", "clinicId", "clinic_id", "_clinicId"];

pub const LATITUDE: &[&str] = &["Latitude", "latitude", "lat"];
pub const LONGITUDE: &[&str] = &["Longitude", "longitude", "lng"];

/// Provider references carried by a procedure offering.
pub const PROCEDURE_PROVIDERS: &[&str] = &["Provider ID"];

pub const CLINIC_NAME: &[&str] = &["Clinic Name (EN)", "Clinic Name (TH)", "Clinic ID"];
pub const LOCATION_NAME: &[&str] = &["Branch Name", "Address", "Location ID"];
pub const PROCEDURE_NAME: &[&str] = &["Raw Name (EN)", "Raw Name (TH)", "Procedure ID"];
pub const PROVIDER_NAME: &[&str] = &["Full Name(ENG)", "Full Name(THAI)"];

/// (primary language key, secondary language key)
pub const CLINIC_BILINGUAL: (&str, &str) = ("Clinic Name (EN)", "Clinic Name (TH)");
pub const PROCEDURE_BILINGUAL: (&str, &str) = ("Raw Name (EN)", "Raw Name (TH)");
pub const PROVIDER_BILINGUAL: (&str, &str) = ("Full Name(ENG)", "Full Name(THAI)");

pub const PROCEDURE_CODE: &str = "Procedure ID";

pub const PROVIDER_SPECIALTIES: &str = "Specialties";
pub const PROVIDER_GRADUATION_YEAR: &str = "Graduation Year";

pub const PRICE_MIN_THB: &str = "Price Min";
pub const PRICE_MAX_THB: &str = "Price Max";
pub const PRICE_MIN_USD: &str = "Price Min $$";
pub const PRICE_MAX_USD: &str = "Price Max $$";

pub const UNKNOWN_CLINIC: &str = "Unknown Clinic";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
pub const UNKNOWN_PROCEDURE: &str = "Unknown Procedure";
pub const UNKNOWN_PROVIDER: &str = "Unknown Provider";
