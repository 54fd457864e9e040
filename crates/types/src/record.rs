use serde::{Deserialize, Serialize};

/// A student record as returned by the primary records backend.
///
/// Decoding is tolerant by design: the backend owns this shape and may grow
/// it at any time, so unknown fields are ignored and absent fields fall back
/// to their type's default. No field is mandatory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub class: String,
    pub section: String,
    pub roll: i64,
    pub system_access: bool,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub relation_of_guardian: String,
    pub current_address: String,
    pub permanent_address: String,
    /// ISO-8601 timestamp as sent by the backend. Display code reformats
    /// values that parse and passes everything else through unchanged.
    pub admission_date: String,
    pub reporter_name: String,
}
