//! PDF serialisation of a laid-out [`Document`].
//!
//! Writes a PDF 1.4 file using the three standard Helvetica faces with
//! WinAnsi encoding, so no font data has to be embedded. Characters outside
//! WinAnsi are replaced with `?`.

use crate::libs::document::{Document, DrawOp, FontStyle, Rgb};
use std::fmt::Write as _;

/// Points per millimetre.
const MM_TO_PT: f64 = 72.0 / 25.4;

const FONT_OBJECTS: [(&str, &str); 3] = [("F1", "Helvetica"), ("F2", "Helvetica-Bold"), ("F3", "Helvetica-Oblique")];

// Catalog, page tree, three fonts, info dictionary.
const FIXED_OBJECTS: usize = 6;

fn font_name(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Normal => "F1",
        FontStyle::Bold => "F2",
        FontStyle::Italic => "F3",
    }
}

/// Maps a character to its WinAnsiEncoding byte.
fn win_ansi(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '€' => 0x80,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        _ => b'?',
    }
}

/// Encodes `text` as a literal PDF string, including the parentheses.
pub fn pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for byte in text.chars().map(win_ansi) {
        match byte {
            b'(' | b')' | b'\\' => {
                out.push('\\');
                out.push(byte as char);
            }
            0x20..=0x7e => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\{:03o}", byte);
            }
        }
    }
    out.push(')');
    out
}

fn color(rgb: Rgb) -> String {
    format!(
        "{:.3} {:.3} {:.3}",
        rgb.0 as f64 / 255.0,
        rgb.1 as f64 / 255.0,
        rgb.2 as f64 / 255.0
    )
}

/// Content stream of one page. `height` is the page height in millimetres.
fn content_stream(ops: &[DrawOp], height: f64) -> String {
    let x = |mm: f64| mm * MM_TO_PT;
    let y = |mm: f64| (height - mm) * MM_TO_PT;
    let mut out = String::new();

    for op in ops {
        match op {
            DrawOp::Text {
                x: tx,
                y: ty,
                size,
                style,
                color: rgb,
                text,
            } => {
                let _ = writeln!(
                    out,
                    "BT /{} {:.1} Tf {} rg {:.2} {:.2} Td {} Tj ET",
                    font_name(*style),
                    size,
                    color(*rgb),
                    x(*tx),
                    y(*ty),
                    pdf_string(text)
                );
            }
            DrawOp::Rect {
                x: rx,
                y: ry,
                width,
                height: h,
                fill,
            } => {
                let _ = writeln!(
                    out,
                    "{} rg {:.2} {:.2} {:.2} {:.2} re f",
                    color(*fill),
                    x(*rx),
                    y(ry + h),
                    width * MM_TO_PT,
                    h * MM_TO_PT
                );
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                color: rgb,
            } => {
                let _ = writeln!(
                    out,
                    "{} RG 0.5 w {:.2} {:.2} m {:.2} {:.2} l S",
                    color(*rgb),
                    x(*x1),
                    y(*y1),
                    x(*x2),
                    y(*y2)
                );
            }
        }
    }
    out
}

struct PdfWriter {
    buffer: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut buffer = b"%PDF-1.4\n".to_vec();
        // Binary marker so transfer tools treat the file as binary.
        buffer.extend_from_slice(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n']);
        PdfWriter {
            buffer,
            offsets: Vec::new(),
        }
    }

    /// Appends the next numbered object; objects must be written in id order.
    fn object(&mut self, body: &str) {
        self.offsets.push(self.buffer.len());
        let id = self.offsets.len();
        self.buffer.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", id, body).as_bytes());
    }

    fn stream(&mut self, content: &str) {
        self.object(&format!("<< /Length {} >>\nstream\n{}endstream", content.len(), content));
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_offset = self.buffer.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", self.offsets.len() + 1);
        for offset in &self.offsets {
            let _ = write!(xref, "{:010} 00000 n \n", offset);
        }
        let _ = write!(
            xref,
            "trailer\n<< /Size {} /Root 1 0 R /Info 6 0 R >>\nstartxref\n{}\n%%EOF\n",
            self.offsets.len() + 1,
            xref_offset
        );
        self.buffer.extend_from_slice(xref.as_bytes());
        self.buffer
    }
}

/// Serialises `document` into the bytes of a PDF file.
pub fn write_pdf(document: &Document) -> Vec<u8> {
    let width = document.width * MM_TO_PT;
    let height = document.height * MM_TO_PT;
    let page_ids: Vec<usize> = (0..document.pages.len()).map(|i| FIXED_OBJECTS + 1 + i * 2).collect();

    let mut writer = PdfWriter::new();
    writer.object("<< /Type /Catalog /Pages 2 0 R >>");

    let kids = page_ids.iter().map(|id| format!("{} 0 R", id)).collect::<Vec<_>>().join(" ");
    writer.object(&format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, page_ids.len()));

    for (_, base_font) in FONT_OBJECTS {
        writer.object(&format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
            base_font
        ));
    }
    writer.object(&format!("<< /Title {} /Producer (hourly) >>", pdf_string(&document.title)));

    let fonts = FONT_OBJECTS
        .iter()
        .enumerate()
        .map(|(i, (name, _))| format!("/{} {} 0 R", name, 3 + i))
        .collect::<Vec<_>>()
        .join(" ");

    for (page, page_id) in document.pages.iter().zip(&page_ids) {
        writer.object(&format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources << /Font << {} >> >> /Contents {} 0 R >>",
            width,
            height,
            fonts,
            page_id + 1
        ));
        writer.stream(&content_stream(&page.ops, document.height));
    }

    writer.finish()
}
