//! CSV rendering of time entries with a trailing summary block.
//!
//! The header row is a fixed external contract: consumers parse the file by
//! column position, so the labels are never localized or renamed.
//!
//! ## Layout
//!
//! ```text
//! Fecha,Proyecto,Hora Inicio,Hora Fin,Duración (min),Duración (hrs),Descripción,Tarifa/Hora,Total
//! 2025-01-15,Website,09:00,17:30,510,8.50,"Layout, header",20.00,170.00
//!
//! Resumen:
//! - Total de registros: 1
//! - Total de horas: 8.50
//! - Total de ganancias: €170.00
//! ```
//!
//! ## Escaping
//!
//! A field is wrapped in double quotes only when it contains a comma, and
//! embedded double quotes are doubled. No other character triggers quoting.

use crate::libs::aggregate::ReportAggregate;
use crate::libs::entry::TimeEntry;
use crate::libs::error::{HourlyError, HourlyResult};
use crate::libs::formatter::{format_amount, format_hours, format_money};
use anyhow::Result;

/// Column labels of the CSV export, in order.
pub const CSV_HEADER: [&str; 9] = [
    "Fecha",
    "Proyecto",
    "Hora Inicio",
    "Hora Fin",
    "Duración (min)",
    "Duración (hrs)",
    "Descripción",
    "Tarifa/Hora",
    "Total",
];

/// Quotes a field that contains a comma, doubling embedded quotes.
pub fn escape_field(field: &str) -> String {
    if field.contains(',') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn entry_record(entry: &TimeEntry) -> Vec<String> {
    vec![
        entry.date.format("%Y-%m-%d").to_string(),
        entry.project_name.clone().unwrap_or_default(),
        entry.start_time.map(|t| t.to_string()).unwrap_or_default(),
        entry.end_time.map(|t| t.to_string()).unwrap_or_default(),
        entry.duration_minutes.map(|m| m.to_string()).unwrap_or_default(),
        entry.duration_minutes.map(|m| format_hours(m as u64)).unwrap_or_default(),
        entry.description.clone().unwrap_or_default(),
        format_amount(entry.applied_rate),
        entry.total.map(format_amount).unwrap_or_default(),
    ]
}

/// Summary lines appended after the records.
pub fn summary_block(aggregate: &ReportAggregate, currency: &str) -> String {
    format!(
        "Resumen:\n- Total de registros: {}\n- Total de horas: {}\n- Total de ganancias: {}\n",
        aggregate.entry_count,
        format_hours(aggregate.grand_total_minutes),
        format_money(aggregate.grand_total_earnings, currency)
    )
}

fn write_records(entries: &[TimeEntry]) -> Result<Vec<u8>> {
    // Quoting is applied by `escape_field`; the writer must emit fields verbatim.
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER.iter().map(|h| escape_field(h)))?;
    for entry in entries {
        wtr.write_record(entry_record(entry).iter().map(|f| escape_field(f)))?;
    }

    wtr.into_inner().map_err(|e| anyhow::anyhow!("{}", e))
}

/// Renders `entries` in the given order followed by the summary of `aggregate`.
///
/// Returns [`HourlyError::EmptyDataset`] when there is nothing to export so
/// the caller can decide between a message and an empty response.
pub fn render_csv(entries: &[TimeEntry], aggregate: &ReportAggregate, currency: &str) -> Result<String> {
    ensure_not_empty(entries)?;

    let records = write_records(entries)?;
    let mut content = String::from_utf8(records)?;
    content.push('\n');
    content.push_str(&summary_block(aggregate, currency));

    tracing::debug!(rows = entries.len(), bytes = content.len(), "rendered csv export");
    Ok(content)
}

fn ensure_not_empty(entries: &[TimeEntry]) -> HourlyResult<()> {
    if entries.is_empty() {
        return Err(HourlyError::EmptyDataset);
    }
    Ok(())
}
