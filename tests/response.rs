#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hourly::libs::error::HourlyError;
    use hourly::libs::response::{
        csv_filename, pdf_filename, ErrorEnvelope, ExportResponse, Status, CSV_CONTENT_TYPE, PDF_CONTENT_TYPE,
    };

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn test_filenames() {
        assert_eq!(csv_filename(date()), "horas-laborales-2025-03-07.csv");
        assert_eq!(pdf_filename(date()), "informe-hourly-2025-03-07.pdf");
    }

    #[test]
    fn test_export_responses() {
        let csv = ExportResponse::csv("a,b\n".to_string(), date());
        assert_eq!(csv.content_type, CSV_CONTENT_TYPE);
        assert_eq!(csv.body, b"a,b\n".to_vec());
        assert_eq!(csv.content_disposition(), "attachment; filename=\"horas-laborales-2025-03-07.csv\"");

        let pdf = ExportResponse::pdf(b"%PDF-1.4".to_vec(), date());
        assert_eq!(pdf.content_type, PDF_CONTENT_TYPE);
        assert_eq!(pdf.filename, "informe-hourly-2025-03-07.pdf");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(Status::from(&HourlyError::InvalidInput("x".into())), Status::BadRequest);
        assert_eq!(Status::from(&HourlyError::InvalidClockTime("25:00".into())), Status::BadRequest);
        assert_eq!(
            Status::from(&HourlyError::DurationMismatch { supplied: 10, derived: 20 }),
            Status::BadRequest
        );
        assert_eq!(Status::from(&HourlyError::EmptyDataset), Status::BadRequest);
        assert_eq!(Status::from(&HourlyError::ProjectNotFound(3)), Status::NotFound);
        assert_eq!(Status::from(&HourlyError::EntryNotFound(3)), Status::NotFound);

        assert_eq!(Status::BadRequest.code(), 400);
        assert_eq!(Status::Unauthorized.code(), 401);
        assert_eq!(Status::NotFound.code(), 404);
        assert_eq!(Status::Internal.code(), 500);
    }

    #[test]
    fn test_error_envelope() {
        let error: anyhow::Error = HourlyError::ProjectNotFound(9).into();
        let (status, envelope) = ErrorEnvelope::from_error(&error);
        assert_eq!(status, Status::NotFound);
        assert!(!envelope.success);
        assert_eq!(envelope.error, "Project with ID 9 not found");

        let (status, envelope) = ErrorEnvelope::from_error(&anyhow::anyhow!("disk on fire"));
        assert_eq!(status, Status::Internal);
        assert_eq!(envelope.to_json(), r#"{"success":false,"error":"disk on fire"}"#);

        let (status, envelope) = ErrorEnvelope::unauthorized();
        assert_eq!(status.code(), 401);
        assert_eq!(envelope.error, "No autorizado");
    }

    #[test]
    fn test_envelope_parses_back() {
        let envelope = ErrorEnvelope::new("No data to export");
        let parsed: ErrorEnvelope = serde_json::from_str(&envelope.to_json()).unwrap();
        assert_eq!(parsed, envelope);
    }
}
