//! Flattens a record into the ordered display lines of the report.

use chrono::{DateTime, Utc};
use markbook_types::Record;

const DIVIDER: &str = "---------------------------------------------------";

/// Builds the report lines for `record`, in display order.
///
/// `generated_at` is the stamp shown in the header; it is an argument rather
/// than a clock read so rendering stays a pure function of its inputs.
pub(crate) fn report_lines(record: &Record, generated_at: DateTime<Utc>) -> Vec<String> {
    let mut lines = Vec::with_capacity(26);

    lines.push("STUDENT REPORT".to_string());
    lines.push(format!(
        "Generated on: {}",
        generated_at.format("%d-%b-%Y %H:%M:%S")
    ));

    lines.push(DIVIDER.to_string());
    lines.push("STUDENT INFORMATION".to_string());
    lines.push(format!("ID: {}", record.id));
    lines.push(format!("Name: {}", record.name));
    lines.push(format!("Email: {}", record.email));
    lines.push(format!("Phone: {}", record.phone));
    lines.push(format!("Class: {}", record.class));
    lines.push(format!("Section: {}", record.section));
    lines.push(format!("Roll Number: {}", record.roll));
    lines.push(format!("System Access: {}", record.system_access));

    lines.push(DIVIDER.to_string());
    lines.push("GUARDIAN INFORMATION".to_string());
    lines.push(format!("Guardian Name: {}", record.guardian_name));
    lines.push(format!("Guardian Phone: {}", record.guardian_phone));
    lines.push(format!("Relationship: {}", record.relation_of_guardian));

    lines.push(DIVIDER.to_string());
    lines.push("ADDRESS INFORMATION".to_string());
    lines.push(format!("Current Address: {}", record.current_address));
    lines.push(format!("Permanent Address: {}", record.permanent_address));
    lines.push(format!(
        "Admission Date: {}",
        format_date(&record.admission_date)
    ));

    lines.push(DIVIDER.to_string());
    lines.push("REPORTED BY".to_string());
    lines.push(format!("Reporter Name: {}", record.reporter_name));

    lines
}

/// Reformats an ISO-8601 timestamp as `dd-Mon-yyyy`.
///
/// Empty input stays empty, and anything that does not parse is passed
/// through unchanged: the backend owns the field, and display must not
/// reject it.
pub fn format_date(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => parsed.format("%d-%b-%Y").to_string(),
        Err(_) => value.to_string(),
    }
}
