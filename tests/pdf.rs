#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hourly::libs::document::{Document, DrawOp, FontStyle, Page, Rgb};
    use hourly::libs::pdf::{pdf_string, write_pdf};

    fn document(pages: usize) -> Document {
        let page = Page {
            ops: vec![
                DrawOp::Text {
                    x: 20.0,
                    y: 30.0,
                    size: 12.0,
                    style: FontStyle::Bold,
                    color: Rgb::BLACK,
                    text: "Total: €10.00".to_string(),
                },
                DrawOp::Rect {
                    x: 20.0,
                    y: 40.0,
                    width: 170.0,
                    height: 8.0,
                    fill: Rgb::BLUE,
                },
                DrawOp::Line {
                    x1: 20.0,
                    y1: 50.0,
                    x2: 190.0,
                    y2: 50.0,
                    color: Rgb::LIGHT_GREY,
                },
            ],
        };
        Document {
            title: format!("Informe {}", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            width: 210.0,
            height: 297.0,
            pages: vec![page; pages],
        }
    }

    #[test]
    fn test_pdf_string_escaping() {
        assert_eq!(pdf_string("plain"), "(plain)");
        assert_eq!(pdf_string("a (b) c\\d"), "(a \\(b\\) c\\\\d)");
        assert_eq!(pdf_string("€5"), "(\\2005)");
        assert_eq!(pdf_string("Página"), "(P\\341gina)");
        assert_eq!(pdf_string("日"), "(?)");
    }

    #[test]
    fn test_file_structure() {
        let bytes = write_pdf(&document(2));
        let text = String::from_utf8_lossy(&bytes);

        assert!(bytes.starts_with(b"%PDF-1.4\n"));
        assert!(text.trim_end().ends_with("%%EOF"));
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/Title (Informe 2025-01-01)"));
        assert_eq!(text.matches("/Type /Page ").count(), 2);
        assert!(text.contains("(Total: \\20010.00) Tj"));
        assert!(text.contains(" re f"));
        assert!(text.contains(" l S"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = write_pdf(&document(1));
        let text = String::from_utf8_lossy(&bytes).into_owned();

        let start = text.rfind("startxref\n").unwrap() + "startxref\n".len();
        let xref_offset: usize = text[start..].lines().next().unwrap().parse().unwrap();
        assert!(bytes[xref_offset..].starts_with(b"xref"));

        let entries: Vec<usize> = text[text.rfind("xref\n0 ").unwrap()..]
            .lines()
            .skip(3)
            .take_while(|l| !l.starts_with("trailer"))
            .map(|l| l[..10].parse().unwrap())
            .collect();
        assert_eq!(entries.len(), 8);
        for (i, offset) in entries.iter().enumerate() {
            let header = format!("{} 0 obj", i + 1);
            assert!(bytes[*offset..].starts_with(header.as_bytes()));
        }
    }
}
