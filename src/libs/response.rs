//! Response shapes for an HTTP front end.
//!
//! No transport lives here. These types describe what a handler returns for
//! a successful export (body, content type, attachment filename) and for a
//! failure (JSON envelope plus status code), so any server can wire the
//! engine in without re-deciding headers or error mapping.

use crate::libs::error::HourlyError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

pub fn csv_filename(date: NaiveDate) -> String {
    format!("horas-laborales-{}.csv", date.format("%Y-%m-%d"))
}

pub fn pdf_filename(date: NaiveDate) -> String {
    format!("informe-hourly-{}.pdf", date.format("%Y-%m-%d"))
}

/// A downloadable export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportResponse {
    pub content_type: &'static str,
    pub filename: String,
    pub body: Vec<u8>,
}

impl ExportResponse {
    pub fn csv(content: String, date: NaiveDate) -> Self {
        ExportResponse {
            content_type: CSV_CONTENT_TYPE,
            filename: csv_filename(date),
            body: content.into_bytes(),
        }
    }

    pub fn pdf(bytes: Vec<u8>, date: NaiveDate) -> Self {
        ExportResponse {
            content_type: PDF_CONTENT_TYPE,
            filename: pdf_filename(date),
            body: bytes,
        }
    }

    /// Value of the `Content-Disposition` header.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Status codes the error mapping can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    BadRequest,
    Unauthorized,
    NotFound,
    Internal,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::BadRequest => 400,
            Status::Unauthorized => 401,
            Status::NotFound => 404,
            Status::Internal => 500,
        }
    }
}

impl From<&HourlyError> for Status {
    fn from(error: &HourlyError) -> Self {
        if error.is_validation() || *error == HourlyError::EmptyDataset {
            Status::BadRequest
        } else if error.is_not_found() {
            Status::NotFound
        } else {
            Status::Internal
        }
    }
}

/// JSON body of a failed request: `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorEnvelope {
            success: false,
            error: message.into(),
        }
    }

    /// Envelope and status for an application error.
    ///
    /// Errors raised by the engine keep their own status; anything else is
    /// an internal failure.
    pub fn from_error(error: &anyhow::Error) -> (Status, Self) {
        match error.downcast_ref::<HourlyError>() {
            Some(hourly) => (Status::from(hourly), ErrorEnvelope::new(hourly.to_string())),
            None => (Status::Internal, ErrorEnvelope::new(error.to_string())),
        }
    }

    pub fn unauthorized() -> (Status, Self) {
        (Status::Unauthorized, ErrorEnvelope::new("No autorizado"))
    }

    pub fn to_json(&self) -> String {
        // Two string fields cannot fail to serialise.
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"success\":false,\"error\":{:?}}}", self.error))
    }
}
