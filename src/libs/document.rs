//! Paginated, fixed-layout report document.
//!
//! Lays an aggregated report out on A4 portrait pages as a list of drawing
//! operations (text, filled rectangles, lines) positioned in millimetres from
//! the top-left corner. The layout is independent of any output format;
//! [`crate::libs::pdf`] serialises it to a PDF file.
//!
//! ## Page Structure
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │ Hourly                       │   │ Fecha  Proyecto  ...  Total  │ ← repeated header
//! │ Title / subtitle / period    │   │ row                          │
//! │ Generated at                 │   │ row                          │
//! │ ──────────────────────────── │   │ Subtotal B             €30.00│
//! │ [hours][earnings][n][avg/day]│   │ TOTAL GENERAL:         €40.00│
//! │ Detalle de Horas Trabajadas  │   │                              │
//! │ Fecha  Proyecto  ...  Total  │   │                              │
//! │ row                          │   │                              │
//! │ Subtotal A             €10.00│   │                              │
//! │ ────── footer ────── 1 de 2  │   │ ────── footer ────── 2 de 2  │
//! └──────────────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! The header block and the summary tiles only appear on the first page.
//! Before any row, subtotal or total line is drawn the vertical cursor is
//! checked against the printable bottom; a line that would not fit starts a
//! new page, so nothing is ever clipped at the page edge.

use crate::libs::aggregate::{BucketKey, BucketOrder, ReportAggregate};
use crate::libs::error::{HourlyError, HourlyResult};
use crate::libs::formatter::{
    format_date, format_duration, format_hours_compact, format_minutes_compact, format_money, format_time,
    format_timestamp_long, truncate,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Maximum characters of a project name in a detail row.
pub const PROJECT_NAME_BUDGET: usize = 15;

/// Column labels of the detail table.
pub const TABLE_COLUMNS: [&str; 6] = ["Fecha", "Proyecto", "Inicio", "Fin", "Duración", "Total"];

/// Share of the content width taken by each detail column. Sums to 1.
pub const COLUMN_FRACTIONS: [f64; 6] = [0.16, 0.26, 0.13, 0.13, 0.16, 0.16];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GREY: Rgb = Rgb(100, 100, 100);
    pub const LIGHT_GREY: Rgb = Rgb(200, 200, 200);
    pub const SUBTOTAL: Rgb = Rgb(240, 240, 240);
    pub const BLUE: Rgb = Rgb(59, 130, 246);
    pub const GREEN: Rgb = Rgb(34, 197, 94);
    pub const PURPLE: Rgb = Rgb(168, 85, 247);
    pub const ORANGE: Rgb = Rgb(249, 115, 22);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

/// One drawing instruction. Coordinates are millimetres from the top-left
/// corner; text `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f64,
        y: f64,
        size: f64,
        style: FontStyle,
        color: Rgb,
        text: String,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Rgb,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgb,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// All text drawn on this page, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub pages: Vec<Page>,
}

/// Page geometry in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub content_width: f64,
    /// Cursor position at the top of a continuation page.
    pub top: f64,
    /// Lowest point a table line may extend to.
    pub printable_bottom: f64,
    pub row_height: f64,
    pub header_row_height: f64,
    pub subtotal_height: f64,
    pub total_height: f64,
}

impl Default for PageLayout {
    /// A4 portrait with 20 mm side margins.
    fn default() -> Self {
        PageLayout {
            width: 210.0,
            height: 297.0,
            margin_left: 20.0,
            content_width: 170.0,
            top: 20.0,
            printable_bottom: 256.0,
            row_height: 6.0,
            header_row_height: 10.0,
            subtotal_height: 10.0,
            total_height: 10.0,
        }
    }
}

impl PageLayout {
    /// Left edge of every detail column.
    pub fn column_offsets(&self) -> [f64; 6] {
        let mut offsets = [0.0; 6];
        let mut x = self.margin_left;
        for (i, fraction) in COLUMN_FRACTIONS.iter().enumerate() {
            offsets[i] = x;
            x += fraction * self.content_width;
        }
        offsets
    }

    fn right_edge(&self) -> f64 {
        self.margin_left + self.content_width
    }
}

/// Inclusive date range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", format_date(self.from), format_date(self.to))
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub currency: String,
    pub generated_at: NaiveDateTime,
    pub layout: PageLayout,
    pub bucket_order: BucketOrder,
}

impl RenderOptions {
    pub fn new(currency: &str, generated_at: NaiveDateTime) -> Self {
        RenderOptions {
            currency: currency.to_string(),
            generated_at,
            layout: PageLayout::default(),
            bucket_order: BucketOrder::Encounter,
        }
    }
}

struct Canvas {
    layout: PageLayout,
    pages: Vec<Page>,
    cursor: f64,
}

impl Canvas {
    fn new(layout: PageLayout) -> Self {
        Canvas {
            layout,
            pages: vec![Page::default()],
            cursor: layout.top,
        }
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    fn text(&mut self, x: f64, y: f64, size: f64, style: FontStyle, color: Rgb, text: impl Into<String>) {
        self.push(DrawOp::Text {
            x,
            y,
            size,
            style,
            color,
            text: text.into(),
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Rgb) {
        self.push(DrawOp::Rect { x, y, width, height, fill });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb) {
        self.push(DrawOp::Line { x1, y1, x2, y2, color });
    }

    /// Starts a new page when a line of `height` would end below the printable
    /// area. Continuation pages open with the column header.
    fn ensure_space(&mut self, height: f64) {
        if self.break_if_needed(height) {
            self.column_header();
        }
    }

    fn break_if_needed(&mut self, height: f64) -> bool {
        if self.cursor + height <= self.layout.printable_bottom {
            return false;
        }
        self.pages.push(Page::default());
        self.cursor = self.layout.top;
        tracing::debug!(page = self.pages.len(), "document page break");
        true
    }

    fn column_header(&mut self) {
        let layout = self.layout;
        let offsets = layout.column_offsets();
        let baseline = self.cursor + 5.0;

        self.rect(layout.margin_left, self.cursor, layout.content_width, 8.0, Rgb::BLUE);
        for (label, x) in TABLE_COLUMNS.iter().zip(offsets) {
            self.text(x + 2.0, baseline + 1.0, 10.0, FontStyle::Bold, Rgb::WHITE, *label);
        }
        self.cursor += layout.header_row_height;
    }
}

fn header_block(canvas: &mut Canvas, title: &str, subtitle: &str, period: &ReportPeriod, generated_at: NaiveDateTime) {
    let x = canvas.layout.margin_left;
    canvas.text(x, 30.0, 20.0, FontStyle::Bold, Rgb::BLACK, "Hourly");
    canvas.text(x, 45.0, 16.0, FontStyle::Bold, Rgb::BLACK, title);
    canvas.text(x, 55.0, 12.0, FontStyle::Normal, Rgb::BLACK, subtitle);
    canvas.text(x, 65.0, 10.0, FontStyle::Italic, Rgb::BLACK, format!("Período: {}", period));
    canvas.text(
        x,
        75.0,
        10.0,
        FontStyle::Italic,
        Rgb::BLACK,
        format!("Generado el: {}", format_timestamp_long(generated_at)),
    );
    let right = canvas.layout.right_edge();
    canvas.line(x, 80.0, right, 80.0, Rgb::LIGHT_GREY);
    canvas.cursor = 90.0;
}

fn summary_tiles(canvas: &mut Canvas, aggregate: &ReportAggregate, currency: &str) {
    let layout = canvas.layout;
    canvas.text(layout.margin_left, canvas.cursor, 14.0, FontStyle::Bold, Rgb::BLACK, "Resumen Ejecutivo");

    let tiles = [
        ("Total Horas", format_hours_compact(aggregate.grand_total_hours), Rgb::BLUE),
        ("Total Ganancias", format_money(aggregate.grand_total_earnings, currency), Rgb::GREEN),
        ("Registros", aggregate.entry_count.to_string(), Rgb::PURPLE),
        ("Promedio/Día", format_minutes_compact(aggregate.average_minutes_per_entry), Rgb::ORANGE),
    ];

    let gap = 4.0;
    let tile_width = (layout.content_width - gap * (tiles.len() as f64 - 1.0)) / tiles.len() as f64;
    let top = canvas.cursor + 6.0;
    for (i, (label, value, color)) in tiles.into_iter().enumerate() {
        let x = layout.margin_left + i as f64 * (tile_width + gap);
        canvas.rect(x, top, tile_width, 14.0, color);
        canvas.text(x + 2.0, top + 5.0, 9.0, FontStyle::Bold, Rgb::WHITE, label);
        canvas.text(x + 2.0, top + 11.5, 12.0, FontStyle::Bold, Rgb::WHITE, value);
    }
    canvas.cursor = top + 14.0 + 12.0;
}

fn detail_table(canvas: &mut Canvas, aggregate: &ReportAggregate, options: &RenderOptions) {
    let layout = canvas.layout;
    let offsets = layout.column_offsets();
    let amount_x = layout.right_edge() - 25.0;
    let currency = options.currency.as_str();

    canvas.break_if_needed(5.0 + layout.header_row_height + layout.row_height);
    canvas.text(layout.margin_left, canvas.cursor, 14.0, FontStyle::Bold, Rgb::BLACK, "Detalle de Horas Trabajadas");
    canvas.cursor += 5.0;
    canvas.column_header();

    for bucket in aggregate.buckets(options.bucket_order) {
        for entry in &bucket.entries {
            canvas.ensure_space(layout.row_height);
            let baseline = canvas.cursor + 4.0;
            // Rows of the unknown bucket carry the label of their subtotal.
            let name = match bucket.key {
                BucketKey::Unknown => bucket.name.as_str(),
                BucketKey::Project(_) => entry.project_name.as_deref().unwrap_or(&bucket.name),
            };
            let cells = [
                format_date(entry.date),
                truncate(name, PROJECT_NAME_BUDGET),
                format_time(entry.start_time),
                format_time(entry.end_time),
                format_duration(entry.duration_minutes),
                format_money(entry.amount(), currency),
            ];
            for (cell, x) in cells.into_iter().zip(offsets) {
                canvas.text(x + 2.0, baseline, 8.0, FontStyle::Normal, Rgb::BLACK, cell);
            }
            canvas.cursor += layout.row_height;
        }

        canvas.ensure_space(layout.subtotal_height);
        canvas.rect(layout.margin_left, canvas.cursor, layout.content_width, 6.0, Rgb::SUBTOTAL);
        let baseline = canvas.cursor + 4.0;
        canvas.text(
            layout.margin_left + 5.0,
            baseline,
            8.0,
            FontStyle::Bold,
            Rgb::BLACK,
            format!("Subtotal {}:", bucket.name),
        );
        canvas.text(amount_x, baseline, 8.0, FontStyle::Bold, Rgb::BLACK, format_money(bucket.total_earnings, currency));
        canvas.cursor += layout.subtotal_height;
    }

    canvas.ensure_space(layout.total_height);
    canvas.rect(layout.margin_left, canvas.cursor, layout.content_width, 8.0, Rgb::GREEN);
    let baseline = canvas.cursor + 5.5;
    canvas.text(layout.margin_left + 5.0, baseline, 10.0, FontStyle::Bold, Rgb::WHITE, "TOTAL GENERAL:");
    canvas.text(
        amount_x,
        baseline,
        10.0,
        FontStyle::Bold,
        Rgb::WHITE,
        format_money(aggregate.grand_total_earnings, currency),
    );
    canvas.cursor += layout.total_height;
}

fn footers(canvas: &mut Canvas) {
    let layout = canvas.layout;
    let count = canvas.pages.len();
    for (i, page) in canvas.pages.iter_mut().enumerate() {
        let y = layout.height - 25.0;
        page.ops.push(DrawOp::Line {
            x1: layout.margin_left,
            y1: y,
            x2: layout.right_edge(),
            y2: y,
            color: Rgb::LIGHT_GREY,
        });
        page.ops.push(DrawOp::Text {
            x: layout.margin_left,
            y: layout.height - 15.0,
            size: 8.0,
            style: FontStyle::Italic,
            color: Rgb::GREY,
            text: "Informe generado por Hourly - Sistema de Gestión de Horas Laborales".to_string(),
        });
        page.ops.push(DrawOp::Text {
            x: layout.margin_left,
            y: layout.height - 10.0,
            size: 8.0,
            style: FontStyle::Italic,
            color: Rgb::GREY,
            text: format!("{} v{} · {}", APP_METADATA_NAME, APP_METADATA_VERSION, APP_METADATA_HOMEPAGE),
        });
        page.ops.push(DrawOp::Text {
            x: layout.right_edge() - 22.0,
            y: layout.height - 15.0,
            size: 8.0,
            style: FontStyle::Italic,
            color: Rgb::GREY,
            text: format!("Página {} de {}", i + 1, count),
        });
    }
}

/// Lays out `aggregate` as a paginated document.
///
/// Fails with [`HourlyError::EmptyDataset`] when the report has no entries.
pub fn render_document(
    title: &str,
    subtitle: &str,
    period: &ReportPeriod,
    aggregate: &ReportAggregate,
    options: &RenderOptions,
) -> HourlyResult<Document> {
    if aggregate.is_empty() {
        return Err(HourlyError::EmptyDataset);
    }

    let mut canvas = Canvas::new(options.layout);
    header_block(&mut canvas, title, subtitle, period, options.generated_at);
    summary_tiles(&mut canvas, aggregate, &options.currency);
    detail_table(&mut canvas, aggregate, options);
    footers(&mut canvas);

    tracing::debug!(pages = canvas.pages.len(), entries = aggregate.entry_count, "rendered report document");

    Ok(Document {
        title: title.to_string(),
        width: options.layout.width,
        height: options.layout.height,
        pages: canvas.pages,
    })
}
