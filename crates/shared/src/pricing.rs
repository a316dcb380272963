use serde::Serialize;

use crate::{fields, record::Record};

const MISSING_PRICE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub currency: &'static str,
    pub min: Option<String>,
    pub max: Option<String>,
}

impl PriceRange {
    fn from_keys(record: &Record, currency: &'static str, min: &str, max: &str) -> Option<Self> {
        let min = record.first_text(&[min]);
        let max = record.first_text(&[max]);
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(Self { currency, min, max })
    }

    /// `THB: 1000 - N/A`
    pub fn summary(&self) -> String {
        format!(
            "{}: {} - {}",
            self.currency,
            self.min.as_deref().unwrap_or(MISSING_PRICE),
            self.max.as_deref().unwrap_or(MISSING_PRICE)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pricing {
    pub thb: Option<PriceRange>,
    pub usd: Option<PriceRange>,
}

impl Pricing {
    pub fn from_record(record: &Record) -> Self {
        Self {
            thb: PriceRange::from_keys(
                record,
                "THB",
                fields::PRICE_MIN_THB,
                fields::PRICE_MAX_THB,
            ),
            usd: PriceRange::from_keys(
                record,
                "USD",
                fields::PRICE_MIN_USD,
                fields::PRICE_MAX_USD,
            ),
        }
    }

    pub fn is_priced(&self) -> bool {
        self.thb.is_some() || self.usd.is_some()
    }

    pub fn summaries(&self) -> Vec<String> {
        self.thb
            .iter()
            .chain(self.usd.iter())
            .map(PriceRange::summary)
            .collect()
    }
}
