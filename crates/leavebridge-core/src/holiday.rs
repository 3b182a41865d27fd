//! Public holiday records supplied by the caller.
//!
//! The engine only reads the `date` field; everything else is descriptive
//! metadata that passes through for reporting. The field layout matches the
//! Nager.Date API payload so caller-fetched holiday lists deserialize
//! directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public holiday for the target year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    /// Calendar date of the holiday
    pub date: NaiveDate,
    /// English name
    pub name: String,
    /// Name in the local language
    #[serde(default)]
    pub local_name: String,
    /// ISO 3166-1 alpha-2 country code
    #[serde(default)]
    pub country_code: String,
    /// Whether the holiday falls on the same date every year
    #[serde(default)]
    pub fixed: bool,
    /// Whether the holiday applies nationwide
    #[serde(default)]
    pub global: bool,
    /// Subdivisions the holiday applies to, if not nationwide
    #[serde(default)]
    pub counties: Option<Vec<String>>,
    /// First year the holiday was observed
    #[serde(default)]
    pub launch_year: Option<i32>,
    /// Holiday type tags (e.g. "Public")
    #[serde(default)]
    pub types: Vec<String>,
}

impl HolidayRecord {
    /// Create a nationwide holiday with just a date and a name
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            date,
            local_name: name.clone(),
            name,
            country_code: String::new(),
            fixed: false,
            global: true,
            counties: None,
            launch_year: None,
            types: Vec::new(),
        }
    }
}
