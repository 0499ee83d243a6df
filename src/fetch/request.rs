use serde::Serialize;
use std::fmt;

use crate::error::{ExtractError, Result};

/// REDCap's event column; always requested right after the primary key.
pub const EVENT_FIELD: &str = "redcap_event_name";

/// Form body of a flat CSV record export.
///
/// Field order and wire names follow the REDCap export API; `reqwest`
/// form-encodes this struct as-is.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRequest {
    token: String,
    content: &'static str,
    format: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    fields: String,
    raw_or_label: &'static str,
    raw_or_label_headers: &'static str,
    export_checkbox_label: bool,
    export_survey_fields: bool,
    export_data_access_groups: bool,
    return_format: &'static str,
    #[serde(skip)]
    secondary_key: String,
}

impl ExtractionRequest {
    /// Build the export request for `primary_key` plus `fields`.
    ///
    /// The first entry of `fields` is the secondary key: rows without a value
    /// for it are later discarded by the filter.
    pub fn new<S: AsRef<str>>(token: &str, primary_key: &str, fields: &[S]) -> Result<Self> {
        let primary_key = primary_key.trim();
        if primary_key.is_empty() {
            return Err(ExtractError::config("primary key field name is empty"));
        }
        let secondary_key = match fields.first() {
            Some(f) if !f.as_ref().trim().is_empty() => f.as_ref().trim().to_string(),
            _ => return Err(ExtractError::config("no fields requested")),
        };

        let requested = fields
            .iter()
            .map(|f| f.as_ref().trim())
            .collect::<Vec<_>>()
            .join(",");

        Ok(Self {
            token: token.to_string(),
            content: "record",
            format: "csv",
            kind: "flat",
            fields: format!("{},{},{}", primary_key, EVENT_FIELD, requested),
            raw_or_label: "raw",
            raw_or_label_headers: "raw",
            export_checkbox_label: false,
            export_survey_fields: false,
            export_data_access_groups: false,
            return_format: "csv",
            secondary_key,
        })
    }

    /// Comma-joined field list as sent to the server.
    pub fn fields(&self) -> &str {
        &self.fields
    }

    pub fn secondary_key(&self) -> &str {
        &self.secondary_key
    }
}

// keep the token out of logs
impl fmt::Debug for ExtractionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionRequest")
            .field("token", &"<redacted>")
            .field("content", &self.content)
            .field("format", &self.format)
            .field("type", &self.kind)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
