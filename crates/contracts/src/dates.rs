//! Date string reformatting between the UI and the API.
//!
//! The form and the list filters work with native date inputs, which always
//! produce `YYYY-MM-DD`. The document service expects `DD-MM-YYYY` in request
//! bodies, and the history table displays dates the same way. Everything here
//! is pure string segment reordering, no timezone or calendar arithmetic.

/// Check that a string has the exact `YYYY-MM-DD` shape.
///
/// Only the shape is checked (digits and dash positions), not calendar
/// validity. Matches the pattern the document service applies on its side.
pub fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| {
        if i == 4 || i == 7 {
            *b == b'-'
        } else {
            b.is_ascii_digit()
        }
    })
}

/// Convert a UI date (`YYYY-MM-DD`) to the API format (`DD-MM-YYYY`).
///
/// Input that does not have the `YYYY-MM-DD` shape passes through unchanged.
/// The form validator rejects such input before submission, so the
/// passthrough only matters for callers that skip validation.
pub fn to_api_format(ui_date: &str) -> String {
    if !is_iso_date_shape(ui_date) {
        return ui_date.to_string();
    }
    format!("{}-{}-{}", &ui_date[8..10], &ui_date[5..7], &ui_date[0..4])
}

/// Format an ISO date string as `DD-MM-YYYY` for table rendering.
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15-03-2024"
pub fn to_display_format(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if is_iso_date_shape(date_part) {
        return to_api_format(date_part);
    }
    date_str.to_string()
}
