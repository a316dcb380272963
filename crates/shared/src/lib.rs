//! Record model, field-name tables and wire contract shared by the directory
//! client and its front ends.

pub mod detail;
pub mod domain;
pub mod error;
pub mod fields;
pub mod geo;
pub mod pricing;
pub mod protocol;
pub mod providers;
pub mod record;

pub use domain::{Clinic, EntityId, FetchCategory, Location, Procedure, Provider};
pub use record::Record;
